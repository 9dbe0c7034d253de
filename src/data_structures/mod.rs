//! Data structures backing the destination index.
//!
//! Every structure here is single-threaded and owned by the index that
//! builds it; none of them carry interior locking.

pub mod keyed_store;
pub mod lexicon_trie;
pub mod priority_queue;
pub mod sorting;

// Re-export common data structures
pub use keyed_store::{KeyedStore, KeyedStoreConfig, KeyedStoreError};
pub use lexicon_trie::{LexiconTrie, LexiconTrieConfig, LexiconTrieError, LexiconTrieResult};
pub use priority_queue::PriorityQueue;
