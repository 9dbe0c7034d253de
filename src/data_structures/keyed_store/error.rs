// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the keyed store.

/// Error types for keyed store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KeyedStoreError {
    /// An empty key was provided
    #[error("Empty key not allowed")]
    EmptyKey,
}

/// Result type for keyed store operations
pub type Result<T> = std::result::Result<T, KeyedStoreError>;
