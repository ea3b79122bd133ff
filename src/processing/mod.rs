//! Calculator logic.
//!
//! - [`validate`] - Syntactic checks on the raw input strings
//! - [`subnet`] - Network, broadcast and host count derivation
//! - [`calculate`] - Validation followed by computation

mod calculate;
mod subnet;
mod validate;

// Re-export public functions
pub use calculate::calculate_address;
pub use subnet::{compute_subnet, parse_mask, parse_network};
pub use validate::{filter_input, is_address_char, is_mask_char, validate_address, validate_mask};
