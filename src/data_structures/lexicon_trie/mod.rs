//! Lexicon Trie Implementation
//!
//! This module provides a prefix trie mapping normalized names to payloads,
//! used to answer "every name starting with ..." queries over the destination
//! catalog.
//!
//! Keys are lowercased on the way in and on the way out unless the trie is
//! configured as case-sensitive. There is no removal: the catalog is loaded
//! once and stays fixed for the life of the index.

mod error;
mod node;

use std::borrow::Cow;

pub use error::LexiconTrieError;
use node::TrieNode;

/// Result type for lexicon trie operations
pub type LexiconTrieResult<T> = Result<T, LexiconTrieError>;

/// Configuration options for the lexicon trie
#[derive(Debug, Clone)]
pub struct LexiconTrieConfig {
    /// Whether to use case-sensitive keys
    pub case_sensitive: bool,

    /// Maximum depth allowed in the trie (bounds the recursive collection)
    pub max_depth: usize,
}

impl Default for LexiconTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_depth: 64,
        }
    }
}

/// Prefix trie over names.
///
/// Key features:
/// * Case-insensitive keys (configurable)
/// * Last-write-wins on duplicate keys
/// * Prefix queries return matches in traversal order, not sorted
#[derive(Debug)]
pub struct LexiconTrie<V> {
    /// The root node of the trie
    root: TrieNode<V>,

    /// Number of terminal nodes
    len: usize,

    /// Configuration options
    config: LexiconTrieConfig,
}

impl<V> LexiconTrie<V> {
    /// Creates a new empty `LexiconTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LexiconTrieConfig::default())
    }

    /// Creates a new empty `LexiconTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LexiconTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
            config,
        }
    }

    fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Inserts a key and its payload into the trie.
    ///
    /// Nodes are created as needed. If the key is already present, its payload
    /// is replaced.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A new key was inserted.
    /// * `Ok(false)` - An existing key had its payload replaced.
    /// * `Err(LexiconTrieError)` - The key was empty or too long.
    pub fn insert<K>(&mut self, key: K, payload: V) -> LexiconTrieResult<bool>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(LexiconTrieError::EmptyKey);
        }

        let processed_key = self.normalize(key).into_owned();
        if processed_key.chars().count() > self.config.max_depth {
            return Err(LexiconTrieError::KeyTooLong {
                key: processed_key,
                max_depth: self.config.max_depth,
            });
        }

        let mut node = &mut self.root;
        for c in processed_key.chars() {
            node = &mut **node.children.entry(c).or_insert_with(Default::default);
        }

        let is_new = !node.is_terminal;
        node.is_terminal = true;
        node.payload = Some(payload);
        if is_new {
            self.len += 1;
        }

        Ok(is_new)
    }

    /// Walks the trie along `key` and returns the node it ends on, if any.
    fn descend(&self, key: &str) -> Option<&TrieNode<V>> {
        let mut node = &self.root;
        for c in key.chars() {
            node = &**node.children.get(&c)?;
        }
        Some(node)
    }

    /// Returns the payload stored under an exact key.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }
        let processed_key = self.normalize(key);
        self.descend(&processed_key)
            .filter(|node| node.is_terminal)
            .and_then(|node| node.payload.as_ref())
    }

    /// Checks if an exact key exists in the trie.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<V: Clone> LexiconTrie<V> {
    /// Finds every key starting with `prefix`, together with its payload.
    ///
    /// The prefix is normalized the same way keys are. A prefix that leaves
    /// the trie yields an empty vector. Matches come back in depth-first
    /// traversal order; callers that need a particular order sort downstream.
    /// An empty prefix matches every key.
    pub fn search_with_prefix<P>(&self, prefix: P) -> Vec<(String, V)>
    where
        P: AsRef<str>,
    {
        let processed_prefix = self.normalize(prefix.as_ref());

        let mut result = Vec::new();
        let Some(start) = self.descend(&processed_prefix) else {
            return result;
        };

        let mut path = processed_prefix.into_owned();
        self.collect(start, &mut path, &mut result);
        result
    }

    /// Depth-first collection of every terminal node under `node`.
    ///
    /// `path` holds the full key of `node` and is restored before returning.
    fn collect(&self, node: &TrieNode<V>, path: &mut String, result: &mut Vec<(String, V)>) {
        if node.is_terminal {
            if let Some(payload) = &node.payload {
                result.push((path.clone(), payload.clone()));
            }
        }

        for (c, child) in &node.children {
            path.push(*c);
            self.collect(child, path, result);
            path.pop();
        }
    }
}

impl<V> Default for LexiconTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}
