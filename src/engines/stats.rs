//! Search statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `SearchEngine` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions whose outcome was computed (each at most once per call).
    pub positions_evaluated: u32,

    /// Lookups answered from the memo table.
    pub memo_hits: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::default();
        assert_eq!(stats.positions_evaluated, 0);
        assert_eq!(stats.memo_hits, 0);
        assert_eq!(stats.time_us, 0);
    }
}
