//! IPv4 subnet calculator.
//!
//! Given a host address and a subnet mask (dotted-decimal or `/NN`),
//! [`calculate_address`] returns the network address, broadcast address and
//! number of usable hosts, or the reason the input was rejected.
//!
//! # Module Structure
//!
//! - [`models`] - Address/prefix arithmetic and result types
//! - [`processing`] - Validation, computation and the combined entry point
//! - [`output`] - Text, CSV and JSON rendering
//! - [`config`] - Environment settings and logger set-up
//! - [`cli`] - Command line front end
//!
//! # Example
//!
//! ```
//! use ip_calculator::{calculate_address, ErrorKind};
//!
//! let report = calculate_address("10.0.0.5", "255.255.255.252").unwrap();
//! assert_eq!(report.network_address, "10.0.0.4");
//!
//! let err = calculate_address("192.168.1.1", "/33").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::ComputationFailed);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

// Re-export commonly used items at crate root
pub use error::{CalcError, ErrorKind};
pub use models::{CalculationResult, Network, Outcome, Report};
pub use processing::{calculate_address, compute_subnet, validate_address, validate_mask};
