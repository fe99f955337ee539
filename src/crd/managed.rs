//! # Managed Resources
//!
//! The `Managed` trait is the seam between managed resource kinds and the
//! credential resolution code: anything that can name a ProviderConfig can
//! have credentials resolved for it.

use crate::crd::common::{ProviderConfigReference, TypedReference};
use crate::crd::property::Property;
use kube::{Resource, ResourceExt};

/// A resource whose external state is reconciled using a ProviderConfig
pub trait Managed: Resource<DynamicType = ()> + Send + Sync {
    /// The ProviderConfig this resource authenticates with, if any
    fn provider_config_reference(&self) -> Option<&ProviderConfigReference>;

    /// Typed reference to this resource, as recorded in a ProviderConfigUsage
    fn typed_reference(&self) -> TypedReference
    where
        Self: Sized,
    {
        TypedReference {
            api_version: Self::api_version(&()).into_owned(),
            kind: Self::kind(&()).into_owned(),
            name: self.name_any(),
            uid: self.uid(),
        }
    }
}

impl Managed for Property {
    fn provider_config_reference(&self) -> Option<&ProviderConfigReference> {
        self.spec.resource_spec.provider_config_ref.as_ref()
    }
}
