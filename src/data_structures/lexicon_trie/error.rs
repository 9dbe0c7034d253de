//! Error types for the lexicon trie.

/// Errors that can occur in lexicon trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexiconTrieError {
    /// Error when an empty key is provided.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when a key exceeds the maximum depth allowed.
    #[error("Key '{key}' exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// The key that was too long.
        key: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}
