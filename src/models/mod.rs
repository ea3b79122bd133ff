//! Domain models for the IPv4 calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Network`] - IPv4 address with a prefix length
//! - [`CalculationResult`] and [`Report`] - what a calculation produces

mod ipv4;
mod result;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, mask_to_prefix, num_hosts, parse_octets,
    prefix_to_mask, total_addresses, Network, MAX_LENGTH,
};
pub use result::{CalculationResult, Outcome, Report};
