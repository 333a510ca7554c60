//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod cms;

pub use cms::{HttpPostSource, Translator};
