//! Instance network attachment operations
//!
//! Attachments are children of a server instance, addressed by an
//! instanceID/attachmentID composite identifier.

use vela_core::provider::{ProviderError, ProviderResult};
use vela_core::resource::{Resource, ResourceId, State, Value};
use vela_sdk::models::{
    InstanceNetworkAttachmentPatch, InstanceNetworkAttachmentPrototype, ResourceIdentity,
};

use crate::ids::{composite_id, parse_composite};
use crate::{VpcProvider, changed_string, flatten, optional_string, require_string};

impl VpcProvider {
    pub(crate) async fn read_instance_network_attachment(
        &self,
        resource: &Resource,
        identifier: Option<&str>,
    ) -> ProviderResult<State> {
        let id = resource.id.clone();

        let Some(identifier) = identifier else {
            return Ok(State::not_found(id));
        };
        let (instance_id, attachment_id) = parse_composite(identifier, &id)?;

        match self
            .client()
            .get_instance_network_attachment(&instance_id, &attachment_id)
            .await
        {
            Ok(attachment) => {
                let mut attributes = flatten::instance_network_attachment_attributes(&attachment);
                attributes.insert("instance".to_string(), Value::String(instance_id.clone()));
                Ok(State::existing(id, attributes).with_identifier(identifier))
            }
            Err(e) if e.is_not_found() => Ok(State::not_found(id)),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to get instance network attachment: {}",
                e
            ))
            .for_resource(id)),
        }
    }

    pub(crate) async fn create_instance_network_attachment(
        &self,
        resource: &Resource,
    ) -> ProviderResult<State> {
        let instance_id = require_string(resource, "instance")?;
        let interface_id = require_string(resource, "virtual_network_interface")?;

        let prototype = InstanceNetworkAttachmentPrototype {
            name: optional_string(resource, "name"),
            virtual_network_interface: ResourceIdentity::new(interface_id),
        };

        let attachment = self
            .client()
            .create_instance_network_attachment(&instance_id, &prototype)
            .await
            .map_err(|e| {
                ProviderError::new(format!(
                    "Failed to create instance network attachment: {}",
                    e
                ))
                .for_resource(resource.id.clone())
            })?;

        self.read_instance_network_attachment(
            resource,
            Some(&composite_id(&instance_id, &attachment.id)),
        )
        .await
    }

    pub(crate) async fn update_instance_network_attachment(
        &self,
        id: &ResourceId,
        identifier: &str,
        from: &State,
        to: &Resource,
    ) -> ProviderResult<State> {
        let (instance_id, attachment_id) = parse_composite(identifier, id)?;

        let patch = InstanceNetworkAttachmentPatch {
            name: changed_string(from, to, "name"),
        };

        if patch.name.is_some() {
            self.client()
                .update_instance_network_attachment(&instance_id, &attachment_id, &patch)
                .await
                .map_err(|e| {
                    ProviderError::new(format!(
                        "Failed to update instance network attachment: {}",
                        e
                    ))
                    .for_resource(id.clone())
                })?;
        }

        self.read_instance_network_attachment(to, Some(identifier))
            .await
    }

    pub(crate) async fn delete_instance_network_attachment(
        &self,
        id: &ResourceId,
        identifier: &str,
    ) -> ProviderResult<()> {
        let (instance_id, attachment_id) = parse_composite(identifier, id)?;

        match self
            .client()
            .delete_instance_network_attachment(&instance_id, &attachment_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(ProviderError::new(format!(
                "Failed to delete instance network attachment: {}",
                e
            ))
            .for_resource(id.clone())),
        }
    }
}
