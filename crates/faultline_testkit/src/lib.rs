//! # Faultline Testkit
//!
//! Test utilities for faultline.
//!
//! This crate provides:
//! - Transforms that fail on purpose and transforms that count their calls
//! - Sample tables for the tabular reader
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use faultline_core::IntoFaultTolerant;
//! use faultline_testkit::prelude::*;
//!
//! let (values, failures) = (0..4)
//!     .fault_tolerant()
//!     .try_map(throw_on_odds)
//!     .collect_with_failures();
//! assert_eq!(values, vec![0, 2]);
//! assert_eq!(failures.messages(), vec!["error: 1", "error: 3"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
