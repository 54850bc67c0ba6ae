//! # Faultline Core
//!
//! Lazy sequence pipelines that survive failing transforms.
//!
//! A [`FaultTolerant`] sequence wraps any restartable source. Each mapping
//! stage added with [`FaultTolerant::map`] or [`FaultTolerant::try_map`]
//! applies its transform to every element that reached it; when the
//! transform returns an error (or panics) the element is dropped, the failure
//! is recorded, and traversal continues with the next element.
//!
//! ## Guarantees
//!
//! - Wrapping a source or adding a stage never traverses anything
//! - Surviving elements keep their source order
//! - Each transform runs at most once per element and traversal
//! - The failure log lists the stages closest to the source first, and each
//!   stage's entries in the order they were observed
//! - Cursors are released as soon as a traversal is exhausted or abandoned
//!
//! ## Usage
//!
//! ```
//! use faultline_core::IntoFaultTolerant;
//!
//! let mut seq = (0..2)
//!     .fault_tolerant()
//!     .map(|x| x + 1)
//!     .try_map(|x| {
//!         let doubled = x * 2;
//!         if doubled == 4 { Err(doubled.to_string()) } else { Ok(doubled) }
//!     });
//!
//! let values: Vec<i32> = seq.iter().collect();
//! assert_eq!(values, vec![2]);
//! assert_eq!(seq.failures().messages(), vec!["4"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod ext;
mod failure;
mod sequence;
mod stage;

pub use config::{FailureLogScope, PipelineConfig};
pub use error::{PipelineError, PipelineResult};
pub use ext::IntoFaultTolerant;
pub use failure::{BoxError, Failure, FailureLog};
pub use sequence::{FaultTolerant, Traversal, TraversalState};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
