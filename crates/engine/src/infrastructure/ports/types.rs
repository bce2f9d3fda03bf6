//! Value types shared by port traits and their adapters.

/// Result of a conditional store write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The match condition held and the write was applied.
    Applied,
    /// Nothing matched (player or item absent); nothing was written.
    NoMatch,
}

impl WriteOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Map a matched-row count from a store query.
    pub fn from_matched(count: i64) -> Self {
        if count > 0 {
            Self::Applied
        } else {
            Self::NoMatch
        }
    }
}
