use std::sync::atomic::Ordering;

use crate::puzzle::NodeRef;
use crate::search::core::{check_node, first_solved_or_min, SearchCtx, SearchOutcome};
use crate::search::sequential::expand_serial;

/// 子 1 つあたりのワーカー数。子が多すぎても最低 1 は割り当てる。`children > 0`
#[inline]
pub fn child_budget(budget: usize, children: usize) -> usize {
    debug_assert!(children > 0);
    (budget / children).max(1)
}

/// 並列版の有界探索。
/// `budget` が 1 以下なら逐次版へ委譲し、それ以外は子ごとに 1 タスクを
/// 現在の rayon プールへ投入して全ての完了を待つ（fork/join、途中キャンセルなし）。
///
/// 結果は完了順ではなく子の生成順で調べるので、スケジューリングに依らず決定的。
/// 失敗時に返すノードは現在のノード（逐次版と異なり最良の子ではない）。
///
/// 呼び出し側は `ThreadPool::install` の中で呼ぶこと。プール外から呼ぶと
/// rayon のグローバルプールが使われる。
pub fn search_parallel(
    node: &NodeRef,
    g: u32,
    bound: u32,
    budget: usize,
    ctx: &SearchCtx,
) -> SearchOutcome {
    if let Some(done) = check_node(node, g, bound, ctx) {
        return done;
    }

    if budget <= 1 {
        return expand_serial(node, g, bound, ctx);
    }

    let children = ctx.expand(node);
    let mut slots: Vec<Option<SearchOutcome>> = vec![None; children.len()];
    if !children.is_empty() {
        let per_child = child_budget(budget, children.len());
        ctx.stats.forks.fetch_add(1, Ordering::Relaxed);
        rayon::scope(|s| {
            for (slot, child) in slots.iter_mut().zip(children.iter()) {
                s.spawn(move |_| {
                    *slot = Some(search_parallel(child, g + 1, bound, per_child, ctx));
                });
            }
        });
    }

    // 正準順で集約。子が無ければ Exhausted
    let outcome = first_solved_or_min(slots.into_iter().flatten());
    if outcome.value.is_solved() {
        return outcome;
    }
    SearchOutcome {
        value: outcome.value,
        node: Some(node.clone()),
    }
}
