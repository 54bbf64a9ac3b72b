//! VPC-specific attribute types

use vela_core::resource::Value;
use vela_core::schema::AttributeType;

/// Zone name within a region, e.g. "us-south-2"
pub fn zone() -> AttributeType {
    AttributeType::Custom {
        name: "Zone".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| {
            if let Value::String(s) = value {
                validate_zone(s)
            } else {
                Err("Expected string".to_string())
            }
        },
    }
}

fn validate_zone(zone: &str) -> Result<(), String> {
    let Some((region, suffix)) = zone.rsplit_once('-') else {
        return Err(format!(
            "Invalid zone '{}': expected region-N (e.g. us-south-2)",
            zone
        ));
    };
    if region.is_empty() || !region.contains('-') {
        return Err(format!(
            "Invalid zone '{}': expected region-N (e.g. us-south-2)",
            zone
        ));
    }
    match suffix.parse::<u8>() {
        Ok(n) if (1..=3).contains(&n) => Ok(()),
        _ => Err(format!(
            "Invalid zone '{}': zone number must be 1-3",
            zone
        )),
    }
}

/// BGP autonomous system number
pub fn bgp_asn() -> AttributeType {
    AttributeType::Custom {
        name: "BgpAsn".to_string(),
        base: Box::new(AttributeType::Int),
        validate: |value| {
            if let Value::Int(n) = value {
                if *n >= 1 && *n <= 4_294_967_295 {
                    Ok(())
                } else {
                    Err("ASN must be between 1 and 4294967295".to_string())
                }
            } else {
                Err("Expected integer".to_string())
            }
        },
    }
}

/// Share capacity in gigabytes
pub fn share_size() -> AttributeType {
    AttributeType::Custom {
        name: "ShareSize".to_string(),
        base: Box::new(AttributeType::Int),
        validate: |value| {
            if let Value::Int(n) = value {
                if (10..=32_000).contains(n) {
                    Ok(())
                } else {
                    Err("Share size must be between 10 and 32000 GB".to_string())
                }
            } else {
                Err("Expected integer".to_string())
            }
        },
    }
}

/// IPv4 address
pub fn ip_address() -> AttributeType {
    AttributeType::Custom {
        name: "IpAddress".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| {
            if let Value::String(s) = value {
                let octets: Vec<&str> = s.split('.').collect();
                if octets.len() == 4 && octets.iter().all(|o| o.parse::<u8>().is_ok()) {
                    Ok(())
                } else {
                    Err(format!("Invalid IPv4 address '{}'", s))
                }
            } else {
                Err("Expected string".to_string())
            }
        },
    }
}

/// VPN gateway mode
pub fn vpn_mode() -> AttributeType {
    AttributeType::Enum(vec!["policy".to_string(), "route".to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_accepts_region_with_zone_number() {
        let t = zone();
        assert!(t.validate(&Value::String("us-south-2".to_string())).is_ok());
        assert!(t.validate(&Value::String("eu-de-1".to_string())).is_ok());
        assert!(t.validate(&Value::String("jp-tok-3".to_string())).is_ok());
    }

    #[test]
    fn zone_rejects_bare_region() {
        let t = zone();
        assert!(t.validate(&Value::String("us-south".to_string())).is_err());
        assert!(t.validate(&Value::String("south-2".to_string())).is_err());
    }

    #[test]
    fn zone_rejects_out_of_range_number() {
        let t = zone();
        assert!(t.validate(&Value::String("us-south-0".to_string())).is_err());
        assert!(t.validate(&Value::String("us-south-9".to_string())).is_err());
    }

    #[test]
    fn bgp_asn_bounds() {
        let t = bgp_asn();
        assert!(t.validate(&Value::Int(64512)).is_ok());
        assert!(t.validate(&Value::Int(1)).is_ok());
        assert!(t.validate(&Value::Int(4_294_967_295)).is_ok());
        assert!(t.validate(&Value::Int(0)).is_err());
        assert!(t.validate(&Value::Int(4_294_967_296)).is_err());
    }

    #[test]
    fn share_size_bounds() {
        let t = share_size();
        assert!(t.validate(&Value::Int(500)).is_ok());
        assert!(t.validate(&Value::Int(10)).is_ok());
        assert!(t.validate(&Value::Int(9)).is_err());
        assert!(t.validate(&Value::Int(32_001)).is_err());
    }

    #[test]
    fn ip_address_validation() {
        let t = ip_address();
        assert!(t.validate(&Value::String("10.0.0.5".to_string())).is_ok());
        assert!(t.validate(&Value::String("10.0.0".to_string())).is_err());
        assert!(t.validate(&Value::String("10.0.0.256".to_string())).is_err());
        assert!(t.validate(&Value::Int(5)).is_err());
    }

    #[test]
    fn vpn_mode_variants() {
        let t = vpn_mode();
        assert!(t.validate(&Value::String("policy".to_string())).is_ok());
        assert!(t.validate(&Value::String("route".to_string())).is_ok());
        assert!(t.validate(&Value::String("transit".to_string())).is_err());
    }
}
