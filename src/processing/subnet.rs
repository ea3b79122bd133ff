//! Subnet computation.
//!
//! Turns an address string and a mask string (dotted or `/NN`) into the
//! network address, broadcast address and usable host count.

use crate::error::CalcError;
use crate::models::{
    broadcast_addr, cut_addr, mask_to_prefix, num_hosts, parse_octets, prefix_to_mask,
    CalculationResult, Network,
};
use std::error::Error;

/// Resolve a mask string to its prefix length.
///
/// `/NN` is read as a decimal prefix, anything else as a dotted-decimal mask
/// which must be a contiguous run of leading 1s.
pub fn parse_mask(mask: &str) -> Result<u8, Box<dyn Error>> {
    match mask.strip_prefix('/') {
        Some(len) => {
            if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("Invalid prefix length {mask}").into());
            }
            let prefix: u8 = len
                .parse()
                .map_err(|_| format!("Invalid prefix length {mask}"))?;
            Ok(prefix)
        }
        None => mask_to_prefix(parse_octets(mask)?),
    }
}

/// Build the [`Network`] described by an address and mask string.
pub fn parse_network(address: &str, mask: &str) -> Result<Network, Box<dyn Error>> {
    let addr = parse_octets(address)?;
    let prefix = parse_mask(mask)?;
    Network::from_parts(addr, prefix)
        .map_err(|e| format!("{address}{sep}{mask}: {e}", sep = sep(mask)).into())
}

fn sep(mask: &str) -> &'static str {
    if mask.starts_with('/') {
        ""
    } else {
        "/"
    }
}

fn derive(network: &Network) -> Result<CalculationResult, Box<dyn Error>> {
    let mask = prefix_to_mask(network.prefix())?;
    log::debug!("compute_subnet: {network} mask={mask}");
    Ok(CalculationResult {
        network_address: cut_addr(network.addr(), network.prefix())?,
        broadcast_address: broadcast_addr(network.addr(), network.prefix())?,
        usable_hosts: num_hosts(network.prefix())?,
    })
}

/// Compute network, broadcast and usable hosts.
///
/// Inputs are expected to have passed the validators, but anything that does
/// not resolve to an address and a prefix in 0-32 is still reported as
/// [`crate::ErrorKind::ComputationFailed`].
pub fn compute_subnet(address: &str, mask: &str) -> Result<CalculationResult, CalcError> {
    let result = parse_network(address, mask).and_then(|network| derive(&network));

    match result {
        Ok(result) => Ok(result),
        Err(e) => {
            log::warn!("compute_subnet({address:?}, {mask:?}) failed: {e}");
            Err(CalcError::computation(
                format!("{address}{sep}{mask}", sep = sep(mask)),
                e.to_string(),
            ))
        }
    }
}
