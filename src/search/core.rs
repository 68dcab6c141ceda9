use std::sync::atomic::{AtomicU64, Ordering};

use crate::puzzle::{Heuristic, Node, NodeRef};

/// 1 回の有界探索が返す値。
/// - `Solved`: ゴールに到達した（成功の番兵値）
/// - `Exceeded(f)`: bound を超えた f の最小値。次の反復の bound 候補
/// - `Exhausted`: これ以上の bound 候補がない（+∞ 扱い）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchValue {
    Solved,
    Exceeded(u32),
    Exhausted,
}

impl SearchValue {
    /// 失敗値同士の最小。`Exhausted` は単位元。
    pub fn min_bound(self, other: SearchValue) -> SearchValue {
        match (self, other) {
            (SearchValue::Solved, _) | (_, SearchValue::Solved) => SearchValue::Solved,
            (SearchValue::Exceeded(a), SearchValue::Exceeded(b)) => SearchValue::Exceeded(a.min(b)),
            (SearchValue::Exceeded(a), SearchValue::Exhausted)
            | (SearchValue::Exhausted, SearchValue::Exceeded(a)) => SearchValue::Exceeded(a),
            (SearchValue::Exhausted, SearchValue::Exhausted) => SearchValue::Exhausted,
        }
    }

    pub fn is_solved(self) -> bool {
        self == SearchValue::Solved
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub value: SearchValue,
    pub node: Option<NodeRef>,
}

impl SearchOutcome {
    pub fn solved(node: NodeRef) -> Self {
        Self {
            value: SearchValue::Solved,
            node: Some(node),
        }
    }

    pub fn exceeded(f: u32, node: NodeRef) -> Self {
        Self {
            value: SearchValue::Exceeded(f),
            node: Some(node),
        }
    }

    pub fn exhausted() -> Self {
        Self {
            value: SearchValue::Exhausted,
            node: None,
        }
    }
}

/// 子の結果を正準順に畳み込む。最初の `Solved` をそのまま返し、
/// それ以外は最小値とその結果のノードを返す。子が空なら `Exhausted`。
pub fn first_solved_or_min<I>(outcomes: I) -> SearchOutcome
where
    I: IntoIterator<Item = SearchOutcome>,
{
    let mut best = SearchOutcome::exhausted();
    for outcome in outcomes {
        if outcome.value.is_solved() {
            return outcome;
        }
        if best.value.min_bound(outcome.value) != best.value {
            best = outcome;
        }
    }
    best
}

/// 探索中のカウンタ（全スレッドで共有）
#[derive(Debug, Default)]
pub struct SearchStats {
    pub visited: AtomicU64,
    pub pruned: AtomicU64,
    pub forks: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub visited: u64,
    pub pruned: u64,
    pub forks: u64,
}

impl SearchStats {
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            visited: self.visited.load(Ordering::Relaxed),
            pruned: self.pruned.load(Ordering::Relaxed),
            forks: self.forks.load(Ordering::Relaxed),
        }
    }
}

/// 子ノードの生成関数。通常は `Node::children`
pub type ChildGen = fn(&NodeRef, Heuristic) -> Vec<NodeRef>;

/// 探索関数が共有する読み取り専用の文脈
#[derive(Clone, Copy)]
pub struct SearchCtx<'a> {
    pub heuristic: Heuristic,
    pub children: ChildGen,
    pub stats: &'a SearchStats,
}

impl<'a> SearchCtx<'a> {
    pub fn new(heuristic: Heuristic, stats: &'a SearchStats) -> Self {
        Self {
            heuristic,
            children: Node::children,
            stats,
        }
    }

    pub fn with_children(mut self, children: ChildGen) -> Self {
        self.children = children;
        self
    }

    #[inline]
    pub fn expand(&self, node: &NodeRef) -> Vec<NodeRef> {
        (self.children)(node, self.heuristic)
    }
}

/// prune / success 判定。逐次版と並列版で同じ式を使う。
/// 成功はヒューリスティックの値ではなく盤面がゴールかどうかで決める。
/// 判定が付いたら Some を返す。
#[inline]
pub(crate) fn check_node(node: &NodeRef, g: u32, bound: u32, ctx: &SearchCtx) -> Option<SearchOutcome> {
    ctx.stats.visited.fetch_add(1, Ordering::Relaxed);
    let f = g + node.h;
    if f > bound {
        ctx.stats.pruned.fetch_add(1, Ordering::Relaxed);
        return Some(SearchOutcome::exceeded(f, node.clone()));
    }
    if node.board.is_goal() {
        return Some(SearchOutcome::solved(node.clone()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{manhattan, Board, Node};

    fn outcome(value: SearchValue) -> SearchOutcome {
        SearchOutcome {
            value,
            node: Some(Node::root(Board::goal(), manhattan)),
        }
    }

    #[test]
    fn test_min_bound() {
        use SearchValue::*;
        assert_eq!(Exceeded(3).min_bound(Exceeded(5)), Exceeded(3));
        assert_eq!(Exceeded(7).min_bound(Exhausted), Exceeded(7));
        assert_eq!(Exhausted.min_bound(Exceeded(7)), Exceeded(7));
        assert_eq!(Exhausted.min_bound(Exhausted), Exhausted);
        assert_eq!(Exceeded(2).min_bound(Solved), Solved);
    }

    #[test]
    fn test_no_children_is_infinity() {
        let empty: Vec<SearchOutcome> = vec![];
        let r = first_solved_or_min(empty);
        assert_eq!(r.value, SearchValue::Exhausted);
        assert!(r.node.is_none());

        // 子なしの子は親の最小値に影響しない
        let r = first_solved_or_min(vec![
            SearchOutcome::exhausted(),
            outcome(SearchValue::Exceeded(9)),
            SearchOutcome::exhausted(),
        ]);
        assert_eq!(r.value, SearchValue::Exceeded(9));
        assert!(r.node.is_some());
    }

    #[test]
    fn test_first_solved_wins_in_order() {
        let a = Node::root(Board::goal(), manhattan);
        let b = Node::root(Board::goal(), manhattan);
        let r = first_solved_or_min(vec![
            outcome(SearchValue::Exceeded(4)),
            SearchOutcome::solved(a.clone()),
            SearchOutcome::solved(b.clone()),
        ]);
        assert!(r.value.is_solved());
        assert!(std::sync::Arc::ptr_eq(r.node.as_ref().unwrap(), &a));
    }

    #[test]
    fn test_min_keeps_first_of_ties() {
        let first = outcome(SearchValue::Exceeded(4));
        let first_node = first.node.clone().unwrap();
        let r = first_solved_or_min(vec![
            outcome(SearchValue::Exceeded(6)),
            first,
            outcome(SearchValue::Exceeded(4)),
        ]);
        assert_eq!(r.value, SearchValue::Exceeded(4));
        assert!(std::sync::Arc::ptr_eq(r.node.as_ref().unwrap(), &first_node));
    }
}
