//! Node implementation for the lexicon trie.
//!
//! Each node owns its children outright; the trie owns the root.

use hashbrown::HashMap;

/// A node in the lexicon trie.
///
/// Each node represents one character on a key path. Terminal nodes carry the
/// payload of the key they complete.
#[derive(Debug)]
pub struct TrieNode<V> {
    /// Map of characters to child nodes
    pub children: HashMap<char, Box<TrieNode<V>>>,

    /// Whether this node represents the end of a key
    pub is_terminal: bool,

    /// Payload of the completed key (set only on terminal nodes)
    pub payload: Option<V>,
}

impl<V> TrieNode<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            is_terminal: false,
            payload: None,
        }
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
