//! DSA Drills - interview-prep array and sorting exercises
//!
//! The algorithms themselves live in the dependency-free [`dsa_kernels`]
//! crate. This crate wraps each kernel variant as a named [`Drill`], parses
//! input, loads `dsa.toml`, wires step tracing into `tracing`, and renders
//! text or JSON reports for the `dsa` command.
//!
//! # Example
//!
//! ```rust
//! use dsa_drills::{Drill, Outcome};
//! use dsa_drills::kernels::NoTrace;
//!
//! let outcome = Drill::MaxSubarray
//!     .run(vec![-2, 1, -3, 4, -1, 2, 1, -5, 4], None, &mut NoTrace)
//!     .unwrap();
//!
//! assert_eq!(
//!     outcome,
//!     Outcome::Subarray { sum: 6, start: 3, values: vec![4, -1, 2, 1] }
//! );
//! ```
//!
//! # Drills
//!
//! ```text
//! selection   second-largest-naive, second-largest
//! rotation    rotate-naive, rotate, rotate-left, reverse
//! dedup       count-distinct, dedup
//! subarray    max-subarray-naive, max-subarray
//! sorting     bubble-sort, bubble-sort-adaptive, insertion-sort,
//!             merge-sort, quick-sort, quick-sort-in-place, is-sorted
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod drill;
pub mod error;
pub mod input;
pub mod logging;
pub mod report;
pub mod runner;

pub use dsa_kernels as kernels;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, DrillsConfig, LoggingConfig, SampleOverride};
pub use drill::{Category, Drill, Sample};
pub use error::{DrillError, DrillResult};
pub use input::{normalize_offset, parse_sequence};
pub use logging::{init_logging, LogTracer, LoggingError};
pub use report::{Outcome, Report};
pub use runner::{run_drill, run_samples, sample_inputs};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
