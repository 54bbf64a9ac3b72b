//! Composite identifiers for child resources
//!
//! Children live under a parent collection path; their state identifier
//! joins both remote IDs with a `/` so a single string round-trips
//! through the engine's store.

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::ResourceId;

/// Join a parent and child remote ID into one identifier
pub fn composite_id(parent: &str, child: &str) -> String {
    format!("{}/{}", parent, child)
}

/// Split a composite identifier back into (parent, child)
pub fn split_composite_id(identifier: &str) -> Option<(&str, &str)> {
    let (parent, child) = identifier.split_once('/')?;
    if parent.is_empty() || child.is_empty() {
        return None;
    }
    Some((parent, child))
}

/// Split with a contextual error for handler use
pub(crate) fn parse_composite(
    identifier: &str,
    id: &ResourceId,
) -> ProviderResult<(String, String)> {
    match split_composite_id(identifier) {
        Some((parent, child)) => Ok((parent.to_string(), child.to_string())),
        None => Err(ProviderError::new(format!(
            "Invalid identifier '{}': expected parentID/childID",
            identifier
        ))
        .for_resource(id.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_round_trip() {
        let joined = composite_id("r014-server", "r014-peer");
        assert_eq!(joined, "r014-server/r014-peer");
        assert_eq!(
            split_composite_id(&joined),
            Some(("r014-server", "r014-peer"))
        );
    }

    #[test]
    fn split_rejects_malformed_identifiers() {
        assert_eq!(split_composite_id("no-separator"), None);
        assert_eq!(split_composite_id("/child"), None);
        assert_eq!(split_composite_id("parent/"), None);
    }

    #[test]
    fn parse_composite_reports_resource_context() {
        let id = ResourceId::new("route_server_peer", "edge");
        let err = parse_composite("bogus", &id).unwrap_err();
        assert!(err.to_string().contains("route_server_peer.edge"));
        assert!(err.to_string().contains("parentID/childID"));
    }
}
