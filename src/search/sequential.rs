use crate::puzzle::NodeRef;
use crate::search::core::{check_node, first_solved_or_min, SearchCtx, SearchOutcome};

/// 逐次版の有界 DFS（IDA* の 1 反復分）
/// - `g`: ルートからの手数
/// - `bound`: f = g + h の上限
///
/// 失敗時は子の最小値と、その値を返した子のノードを返す。
pub fn search_serial(node: &NodeRef, g: u32, bound: u32, ctx: &SearchCtx) -> SearchOutcome {
    if let Some(done) = check_node(node, g, bound, ctx) {
        return done;
    }
    expand_serial(node, g, bound, ctx)
}

/// `node` 自身の判定が済んだ後の子の走査。子が無ければ `Exhausted`（+∞）。
pub(crate) fn expand_serial(node: &NodeRef, g: u32, bound: u32, ctx: &SearchCtx) -> SearchOutcome {
    let children = ctx.expand(node);
    first_solved_or_min(
        children
            .iter()
            .map(|child| search_serial(child, g + 1, bound, ctx)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{manhattan, Board, Direction, Node};
    use crate::search::core::{SearchStats, SearchValue};

    fn scrambled(moves: &[Direction]) -> Board {
        let mut b = Board::goal();
        for &m in moves {
            b = b.apply(m).unwrap();
        }
        b
    }

    #[test]
    fn test_root_pruned_above_bound() {
        let stats = SearchStats::default();
        let ctx = SearchCtx::new(manhattan, &stats);
        let root = Node::root(scrambled(&[Direction::Left, Direction::Up]), manhattan);
        let r = search_serial(&root, 0, root.h - 1, &ctx);
        assert_eq!(r.value, SearchValue::Exceeded(root.h));
        assert_eq!(stats.snapshot().pruned, 1);
    }

    #[test]
    fn test_goal_is_solved_at_root() {
        let stats = SearchStats::default();
        let ctx = SearchCtx::new(manhattan, &stats);
        let root = Node::root(Board::goal(), manhattan);
        let r = search_serial(&root, 0, 0, &ctx);
        assert!(r.value.is_solved());
        assert_eq!(r.node.unwrap().depth, 0);
    }

    #[test]
    fn test_finds_short_scramble() {
        let stats = SearchStats::default();
        let ctx = SearchCtx::new(manhattan, &stats);
        let board = scrambled(&[Direction::Left, Direction::Up, Direction::Left]);
        let root = Node::root(board, manhattan);
        assert_eq!(root.h, 3);
        let r = search_serial(&root, 0, 3, &ctx);
        assert!(r.value.is_solved());
        let node = r.node.unwrap();
        assert_eq!(
            node.moves(),
            vec![Direction::Right, Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn test_next_bound_is_min_exceeding_f() {
        let stats = SearchStats::default();
        let ctx = SearchCtx::new(manhattan, &stats);
        // 1 手先でゴール。bound 0 では根そのものが打ち切られる
        let board = scrambled(&[Direction::Left]);
        let root = Node::root(board, manhattan);
        let r = search_serial(&root, 0, root.h, &ctx);
        assert!(r.value.is_solved());
        let r = search_serial(&root, 0, 0, &ctx);
        assert_eq!(r.value, SearchValue::Exceeded(1));
    }
}
