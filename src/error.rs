//! Error types returned by the calculator.
//!
//! Every failure is local to a single call and carries a message that can be
//! shown to the user as-is.

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// Message shown when the address fails validation.
pub const MSG_INVALID_ADDRESS: &str = "Invalid IP. Format must be in decimal (0-255).";

/// Message shown when the mask fails validation.
pub const MSG_INVALID_MASK: &str = "Invalid Subnet Mask. Must be in decimal format (e.g. 255.255.255.0) or in CIDR format (e.g. /24).";

/// Which stage of the calculation rejected the input.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Address string is not four octets in 0-255.
    InvalidAddress,
    /// Mask string is neither dotted-decimal nor `/NN`.
    InvalidMask,
    /// Inputs were syntactically fine but do not describe a network,
    /// e.g. `/33` or `255.0.255.0`.
    ComputationFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidAddress => "invalid address",
            ErrorKind::InvalidMask => "invalid mask",
            ErrorKind::ComputationFailed => "computation failed",
        };
        write!(f, "{name}")
    }
}

/// Failure payload of [`crate::calculate_address`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CalcError {
    pub kind: ErrorKind,
    pub message: String,
    /// The rejected input: the address, the mask, or `address/mask` when
    /// the combination failed.
    pub input: String,
}

impl CalcError {
    pub fn new(kind: ErrorKind, input: impl Into<String>, message: impl Into<String>) -> Self {
        CalcError {
            kind,
            message: message.into(),
            input: input.into(),
        }
    }

    pub fn invalid_address(input: &str) -> Self {
        CalcError::new(ErrorKind::InvalidAddress, input, MSG_INVALID_ADDRESS)
    }

    pub fn invalid_mask(input: &str) -> Self {
        CalcError::new(ErrorKind::InvalidMask, input, MSG_INVALID_MASK)
    }

    pub fn computation(input: impl Into<String>, message: impl Into<String>) -> Self {
        CalcError::new(ErrorKind::ComputationFailed, input, message)
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = CalcError::invalid_address("300.1.1.1");
        assert_eq!(err.to_string(), MSG_INVALID_ADDRESS);
        assert_eq!(err.kind, ErrorKind::InvalidAddress);
        assert_eq!(err.input, "300.1.1.1");
    }

    #[test]
    fn test_computation_keeps_detail() {
        let err = CalcError::computation("1.1.1.1/33", "Network length is too long");
        assert_eq!(err.kind, ErrorKind::ComputationFailed);
        assert_eq!(err.input, "1.1.1.1/33");
        assert_eq!(err.to_string(), "Network length is too long");
    }

    #[test]
    fn test_boxed_error() {
        let boxed: Box<dyn Error> = Box::new(CalcError::invalid_mask("/123"));
        assert!(boxed.to_string().starts_with("Invalid Subnet Mask."));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ComputationFailed).unwrap();
        assert_eq!(json, "\"computation_failed\"");
    }
}
