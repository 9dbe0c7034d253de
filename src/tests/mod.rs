//! Test modules for Yatra.
//!
//! This module contains the cross-component testing infrastructure:
//! - Configuration loading and validation tests
//! - Error type and reporter tests
//! - Property tests over a fully built travel index
//! - Shared fixtures and proptest strategies
//!
//! Unit tests for individual structures live next to the code they test.

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    builtin_index, coordinate_strategy, create_test_dir, destination_strategy, name_strategy, TestFixture,
};

/// Run a suite of property-based tests using the given strategy and test function.
#[macro_export]
macro_rules! run_proptest {
    ($strategy:expr, $test_fn:expr) => {
        proptest::proptest! {
            #![proptest_config(proptest::test_runner::Config::with_cases(100))]
            |value in $strategy| {
                $test_fn(value)?;
            }
        }
    };
}
