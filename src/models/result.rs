//! Calculation results.

use crate::error::CalcError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Numeric result of a subnet computation.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CalculationResult {
    /// Address with all host bits cleared.
    pub network_address: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast_address: Ipv4Addr,
    /// Addresses excluding network and broadcast (0 for /31 and /32).
    pub usable_hosts: u64,
}

/// Display-ready form of a [`CalculationResult`].
///
/// Field names follow the labels of the calculator window: network address,
/// broadcast address, available hosts.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Report {
    pub network_address: String,
    pub broadcast_address: String,
    pub available_hosts: String,
}

impl From<CalculationResult> for Report {
    fn from(result: CalculationResult) -> Self {
        Report {
            network_address: result.network_address.to_string(),
            broadcast_address: result.broadcast_address.to_string(),
            available_hosts: result.usable_hosts.to_string(),
        }
    }
}

/// Outcome of [`crate::calculate_address`]: `Ok` on success, `Err` with the
/// reason otherwise. No partial result accompanies an error.
pub type Outcome = Result<Report, CalcError>;
