//! Test utilities
//!
//! Manual mock implementation of the content source port and fixture
//! factories for building test data. The mock is configured through
//! builder-style `with_*` methods and can inject failures to exercise the
//! error paths.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
