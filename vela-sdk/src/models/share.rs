//! File share (storage instance) models

use serde::{Deserialize, Serialize};

use super::common::{
    Href, LifecycleState, NameIdentity, NamedReference, ResourceIdentity, ResourceReference,
    Timestamp, ZoneReference,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Share {
    pub id: String,
    pub href: String,
    pub crn: String,
    pub name: String,
    /// Capacity in gigabytes
    pub size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,
    pub profile: NamedReference,
    pub zone: ZoneReference,
    /// Encryption scheme; "provider_managed" unless a key was supplied
    pub encryption: String,
    pub lifecycle_state: LifecycleState,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShareCollection {
    #[serde(default)]
    pub shares: Vec<Share>,
    #[serde(default)]
    pub first: Option<Href>,
    #[serde(default)]
    pub next: Option<Href>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub total_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SharePrototype {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub size: i64,
    pub profile: NameIdentity,
    pub zone: NameIdentity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group: Option<ResourceIdentity>,
}

/// Size can only grow; the API rejects shrinking
#[derive(Debug, Clone, Serialize, Default)]
pub struct SharePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<NameIdentity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_patch_carries_only_changed_fields() {
        let patch = SharePatch {
            size: Some(1000),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({"size": 1000}));
    }
}
