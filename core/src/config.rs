/// Identifiers longer than this are reported with a warning.
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 15;

/// Tunables for a single analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub max_identifier_len: usize,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_identifier_len(mut self, max: usize) -> Self {
        self.max_identifier_len = max;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_identifier_len: DEFAULT_MAX_IDENTIFIER_LEN,
        }
    }
}
