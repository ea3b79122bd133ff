//! IPv4 prefix and mask arithmetic.
//!
//! Provides [`Network`] for an address paired with a prefix length, along with
//! the helper functions used to derive network, broadcast and host counts.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        // u64 so that a shift by 32 (prefix 0) is defined
        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a prefix length to its dotted-decimal mask.
pub fn prefix_to_mask(len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Convert a dotted-decimal mask to its prefix length.
///
/// Only contiguous high-order runs of 1s are accepted, so `255.0.255.0` and
/// host masks such as `0.0.0.255` are errors.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Result<u8, Box<dyn Error>> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if ones + bits.trailing_zeros() != MAX_LENGTH as u32 {
        return Err(format!("{mask} is not a valid netmask").into());
    }
    Ok(ones as u8)
}

/// Parse four dot separated decimal octets.
///
/// Unlike [`Ipv4Addr`]'s `FromStr`, leading zeros are read as decimal
/// (`010` is 10).
pub fn parse_octets(s: &str) -> Result<Ipv4Addr, Box<dyn Error>> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(format!("Expected 4 octets in {s:?}").into());
    }
    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts.iter()) {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid octet {part:?} in {s:?}").into());
        }
        *octet = part
            .parse::<u8>()
            .map_err(|_| format!("Octet {part} (> 255) not permitted in {s:?}"))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    let broadcast_bits = network_bits | (mask ^ u32::MAX);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Number of addresses covered by a prefix, `2^(32-len)`.
pub fn total_addresses(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Calculate the number of usable host addresses.
///
/// Network and broadcast are excluded; /31 and /32 have no usable hosts.
pub fn num_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    let total = total_addresses(len)?;
    Ok(if total > 2 { total - 2 } else { 0 })
}

/// IPv4 address with a prefix length in 0-32.
///
/// The address is kept as given; [`cut_addr`] yields the network address.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Pair an address with a prefix, rejecting prefixes above 32.
    pub fn from_parts(addr: Ipv4Addr, prefix: u8) -> Result<Network, Box<dyn Error>> {
        if prefix > MAX_LENGTH {
            return Err(format!("Network length /{prefix} is too long").into());
        }
        Ok(Network { addr, prefix })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(30).unwrap(), 0xFFFFFFFC);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_mask_to_prefix() {
        assert_eq!(mask_to_prefix(Ipv4Addr::new(255, 255, 255, 0)).unwrap(), 24);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(255, 255, 255, 252)).unwrap(), 30);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(255, 255, 255, 255)).unwrap(), 32);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(0, 0, 0, 0)).unwrap(), 0);
        assert_eq!(mask_to_prefix(Ipv4Addr::new(128, 0, 0, 0)).unwrap(), 1);
        assert!(mask_to_prefix(Ipv4Addr::new(255, 0, 255, 0)).is_err());
        assert!(mask_to_prefix(Ipv4Addr::new(0, 0, 0, 255)).is_err());
        assert_eq!(
            mask_to_prefix(Ipv4Addr::new(255, 255, 0, 255))
                .unwrap_err()
                .to_string(),
            "255.255.0.255 is not a valid netmask"
        );
    }

    #[test]
    fn test_prefix_mask_agree() {
        for len in 0..=MAX_LENGTH {
            let mask = prefix_to_mask(len).unwrap();
            assert_eq!(mask_to_prefix(mask).unwrap(), len);
        }
        assert!(prefix_to_mask(33).is_err());
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(
            parse_octets("192.168.1.10").unwrap(),
            Ipv4Addr::new(192, 168, 1, 10)
        );
        assert_eq!(parse_octets("010.0.0.001").unwrap(), Ipv4Addr::new(10, 0, 0, 1));
        assert!(parse_octets("256.0.0.1").is_err());
        assert!(parse_octets("1.2.3").is_err());
        assert!(parse_octets("1.2.3.4.5").is_err());
        assert!(parse_octets("1..3.4").is_err());
        assert!(parse_octets("+1.2.3.4").is_err());
        assert!(parse_octets("0001.2.3.4").is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_num_hosts() {
        assert_eq!(num_hosts(0).unwrap(), 4294967294); // 2^32 - 2
        assert_eq!(num_hosts(8).unwrap(), 16777214);
        assert_eq!(num_hosts(16).unwrap(), 65534);
        assert_eq!(num_hosts(24).unwrap(), 254);
        assert_eq!(num_hosts(29).unwrap(), 6);
        assert_eq!(num_hosts(30).unwrap(), 2);
        assert_eq!(num_hosts(31).unwrap(), 0);
        assert_eq!(num_hosts(32).unwrap(), 0);
        assert!(num_hosts(33).is_err());
    }

    #[test]
    fn test_network_from_parts() {
        let net = Network::from_parts(Ipv4Addr::new(10, 0, 0, 5), 30).unwrap();
        assert_eq!(net.addr(), Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(net.prefix(), 30);
        assert_eq!(net.to_string(), "10.0.0.5/30");

        assert!(Network::from_parts(Ipv4Addr::new(10, 0, 0, 5), 0).is_ok());
        assert!(Network::from_parts(Ipv4Addr::new(10, 0, 0, 5), 32).is_ok());
        assert_eq!(
            Network::from_parts(Ipv4Addr::new(10, 0, 0, 5), 33)
                .unwrap_err()
                .to_string(),
            "Network length /33 is too long"
        );
    }
}
