//! Shared reference shapes used across resource families

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::paging::Href;

/// Timestamp type used throughout the API
pub type Timestamp = DateTime<Utc>;

/// Reference to another resource by opaque ID
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
}

/// Reference to a named entity without an opaque ID (profiles)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Reference to a zone within the region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoneReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Bare IP address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpAddress {
    pub address: String,
}

/// Reserved IP bound to a subnet, referenced with its ID
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservedIpReference {
    pub address: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Identity-by-ID used in prototypes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceIdentity {
    pub id: String,
}

impl ResourceIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Identity-by-name used in prototypes (profiles, zones)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameIdentity {
    pub name: String,
}

impl NameIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Lifecycle state reported for most resources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Deleting,
    Failed,
    Pending,
    Stable,
    Suspended,
    Updating,
    Waiting,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Deleting => "deleting",
            LifecycleState::Failed => "failed",
            LifecycleState::Pending => "pending",
            LifecycleState::Stable => "stable",
            LifecycleState::Suspended => "suspended",
            LifecycleState::Updating => "updating",
            LifecycleState::Waiting => "waiting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_state_round_trips_snake_case() {
        let state: LifecycleState = serde_json::from_str("\"stable\"").unwrap();
        assert_eq!(state, LifecycleState::Stable);
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"stable\"");
    }

    #[test]
    fn reference_tolerates_missing_optional_fields() {
        let reference: ResourceReference =
            serde_json::from_str(r#"{"id":"r006-5b3c"}"#).unwrap();
        assert_eq!(reference.id, "r006-5b3c");
        assert!(reference.name.is_none());
        assert!(reference.crn.is_none());
    }
}
