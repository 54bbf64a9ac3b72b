//! File share operations
//!
//! Shares update in place: name, size (grow only), IOPS, and profile all
//! travel in one PATCH carrying just the changed fields.

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State};
use vela_sdk::models::{NameIdentity, ResourceIdentity, SharePatch, SharePrototype};

use crate::{
    VpcProvider, changed_int, changed_string, flatten, optional_int, optional_string,
    require_int, require_string,
};

impl VpcProvider {
    pub(crate) async fn read_share(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };

        match self.client().get_share(identifier).await {
            Ok(share) => Ok(State::existing(id, flatten::share_attributes(&share))
                .with_identifier(identifier)),
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => {
                Err(ProviderError::new(format!("Failed to get share: {}", e)).for_resource(id))
            }
        }
    }

    pub(crate) async fn create_share(&self, resource: &Resource) -> ProviderResult<State> {
        let size = require_int(resource, "size")?;
        let profile = require_string(resource, "profile")?;
        let zone = require_string(resource, "zone")?;

        let prototype = SharePrototype {
            name: optional_string(resource, "name"),
            size,
            profile: NameIdentity::new(profile),
            zone: NameIdentity::new(zone),
            iops: optional_int(resource, "iops"),
            resource_group: optional_string(resource, "resource_group").map(ResourceIdentity::new),
        };

        let share = self.client().create_share(&prototype).await.map_err(|e| {
            ProviderError::new(format!("Failed to create share: {}", e))
                .for_resource(resource.id.clone())
        })?;

        tracing::debug!("created share {}", share.id);
        self.read_share(resource, Some(&share.id)).await
    }

    pub(crate) async fn update_share(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let patch = SharePatch {
            name: changed_string(from, to, "name"),
            size: changed_int(from, to, "size"),
            iops: changed_int(from, to, "iops"),
            profile: changed_string(from, to, "profile").map(NameIdentity::new),
        };

        let has_changes = patch.name.is_some()
            || patch.size.is_some()
            || patch.iops.is_some()
            || patch.profile.is_some();

        if has_changes {
            self.client()
                .update_share(identifier, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!("Failed to update share: {}", e))
                        .for_resource(id.clone())
                })?;
        }

        self.read_share(to, Some(identifier)).await
    }

    pub(crate) async fn delete_share(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        match self.client().delete_share(identifier).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ProviderError::new(format!("Failed to delete share: {}", e))
                .for_resource(id.clone())),
        }
    }
}
