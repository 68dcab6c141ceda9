use std::env;
use std::fmt;
use std::str::FromStr;

use crate::puzzle::{manhattan, Heuristic};

pub const DEFAULT_WORKERS: usize = 4;
/// 4x4 パズルの最長最適解は 80 手
pub const DEFAULT_BOUND_CAP: u32 = 80;

pub fn read_env_with_default<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env::var(key)
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default)
}

/// ソルバーの設定
#[derive(Clone)]
pub struct SolverConfig {
    /// ワーカープールのスレッド数。ルートに渡す予算も同じ値
    pub workers: usize,
    /// bound がこれを超えたら打ち切る
    pub bound_cap: u32,
    pub heuristic: Heuristic,
    /// 0: 無出力, 1 以上: 反復ごとの bound を表示
    pub verbose: u8,
}

impl fmt::Debug for SolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolverConfig")
            .field("workers", &self.workers)
            .field("bound_cap", &self.bound_cap)
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            bound_cap: DEFAULT_BOUND_CAP,
            heuristic: manhattan,
            verbose: 0,
        }
    }
}

impl SolverConfig {
    /// 環境変数 `IDA_WORKERS` / `IDA_BOUND_CAP` で既定値を上書きした設定
    pub fn from_env() -> Self {
        Self::default()
            .with_workers(read_env_with_default("IDA_WORKERS", DEFAULT_WORKERS))
            .with_bound_cap(read_env_with_default("IDA_BOUND_CAP", DEFAULT_BOUND_CAP))
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_bound_cap(mut self, bound_cap: u32) -> Self {
        self.bound_cap = bound_cap;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }
}
