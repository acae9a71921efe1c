//! Engine configuration.

/// Per-request arena sizing for an [`Engine`](crate::Engine).
///
/// Every compute request carves a fresh arena of `arena_words` words;
/// operands and the result must fit within it or the request fails
/// with a capacity error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Total arena capacity in words. One word holds four decimal
    /// digits. Default: 65 536 words, the upper bound used by the
    /// original demo.
    pub arena_words: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arena_words: 65_536,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_bound() {
        assert_eq!(EngineConfig::default().arena_words, 65_536);
    }
}
