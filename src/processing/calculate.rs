//! Entry point combining validation and computation.

use super::{compute_subnet, validate_address, validate_mask};
use crate::error::CalcError;
use crate::models::{Outcome, Report};

/// Validate `ip` and `mask`, then compute the subnet.
///
/// Stops at the first failure: address syntax, then mask syntax, then the
/// computation itself. On success the three values are returned as strings
/// ready for display.
///
/// # Examples
/// ```
/// use ip_calculator::calculate_address;
/// let report = calculate_address("192.168.1.10", "/24").unwrap();
/// assert_eq!(report.network_address, "192.168.1.0");
/// assert_eq!(report.broadcast_address, "192.168.1.255");
/// assert_eq!(report.available_hosts, "254");
/// ```
pub fn calculate_address(ip: &str, mask: &str) -> Outcome {
    if !validate_address(ip) {
        log::warn!("Rejected address {ip:?}");
        return Err(CalcError::invalid_address(ip));
    }
    if !validate_mask(mask) {
        log::warn!("Rejected mask {mask:?}");
        return Err(CalcError::invalid_mask(mask));
    }

    let result = compute_subnet(ip, mask)?;
    log::info!(
        "{ip} {mask} -> network={} broadcast={} hosts={}",
        result.network_address,
        result.broadcast_address,
        result.usable_hosts
    );
    Ok(Report::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, MSG_INVALID_ADDRESS, MSG_INVALID_MASK};

    #[test]
    fn test_calculate_cidr() {
        let report = calculate_address("192.168.1.10", "/24").unwrap();
        assert_eq!(report.network_address, "192.168.1.0");
        assert_eq!(report.broadcast_address, "192.168.1.255");
        assert_eq!(report.available_hosts, "254");
    }

    #[test]
    fn test_calculate_dotted() {
        let report = calculate_address("10.0.0.5", "255.255.255.252").unwrap();
        assert_eq!(report.network_address, "10.0.0.4");
        assert_eq!(report.broadcast_address, "10.0.0.7");
        assert_eq!(report.available_hosts, "2");
    }

    #[test]
    fn test_invalid_address_wins() {
        // both inputs are bad, the address is reported
        let err = calculate_address("300.1.1.1", "nope").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAddress);
        assert_eq!(err.message, MSG_INVALID_ADDRESS);
        assert_eq!(err.input, "300.1.1.1");
    }

    #[test]
    fn test_invalid_mask() {
        let err = calculate_address("192.168.1.1", "/123").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidMask);
        assert_eq!(err.message, MSG_INVALID_MASK);
        assert_eq!(err.input, "/123");

        let err = calculate_address("192.168.1.1", "").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidMask);
    }

    #[test]
    fn test_computation_failed() {
        let err = calculate_address("192.168.1.1", "/33").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ComputationFailed);
        assert_eq!(err.input, "192.168.1.1/33");

        let err = calculate_address("192.168.1.1", "255.0.255.0").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ComputationFailed);
        assert_eq!(err.input, "192.168.1.1/255.0.255.0");
    }
}
