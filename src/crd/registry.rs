//! # Type Registry
//!
//! Explicit registry of the kinds served by this provider.
//!
//! The registry is a plain value: build it once at startup (or in `crdgen`)
//! and pass it by reference to whatever needs type lookup or CRD rendering.

use crate::crd::property::Property;
use crate::crd::provider_config::{ProviderConfig, ProviderConfigUsage};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::core::GroupVersionKind;
use kube::{CustomResourceExt, Resource};

/// Type metadata for a single kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMetadata {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl TypeMetadata {
    /// Metadata of a statically typed resource
    pub fn of<K: Resource<DynamicType = ()>>() -> Self {
        Self {
            group: K::group(&()).into_owned(),
            version: K::version(&()).into_owned(),
            kind: K::kind(&()).into_owned(),
        }
    }

    /// `group/version`
    pub fn api_version(&self) -> String {
        format!("{}/{}", self.group, self.version)
    }

    /// `Kind.group`, e.g. `Property.akamai.crossplane.io`
    pub fn group_kind(&self) -> String {
        format!("{}.{}", self.kind, self.group)
    }

    /// `Kind.group/version`, e.g. `Property.akamai.crossplane.io/v1alpha1`
    pub fn kind_api_version(&self) -> String {
        format!("{}.{}", self.kind, self.api_version())
    }

    pub fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, &self.version, &self.kind)
    }
}

struct RegisteredType {
    metadata: TypeMetadata,
    crd: fn() -> CustomResourceDefinition,
}

impl std::fmt::Debug for RegisteredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredType")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Registry of every kind the provider defines
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: Vec<RegisteredType>,
}

impl TypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every kind served by the Akamai provider
    pub fn provider() -> Self {
        let mut registry = Self::new();
        registry
            .register::<ProviderConfig>()
            .register::<ProviderConfigUsage>()
            .register::<Property>();
        registry
    }

    /// Add a kind; registering the same kind twice is a no-op
    pub fn register<K>(&mut self) -> &mut Self
    where
        K: Resource<DynamicType = ()> + CustomResourceExt,
    {
        let metadata = TypeMetadata::of::<K>();
        if self.lookup(&metadata.kind).is_none() {
            self.types.push(RegisteredType {
                metadata,
                crd: K::crd,
            });
        }
        self
    }

    /// Metadata for a kind, if registered
    pub fn lookup(&self, kind: &str) -> Option<&TypeMetadata> {
        self.types
            .iter()
            .map(|t| &t.metadata)
            .find(|m| m.kind == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.metadata.kind.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render the CustomResourceDefinition of every registered kind
    pub fn crds(&self) -> Vec<CustomResourceDefinition> {
        self.types.iter().map(|t| (t.crd)()).collect()
    }

    /// Render every CRD as a multi-document YAML stream
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let mut out = String::new();
        for crd in self.crds() {
            out.push_str("---\n");
            out.push_str(&serde_yaml::to_string(&crd)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_metadata() {
        let registry = TypeRegistry::provider();
        let meta = registry.lookup("Property").unwrap();

        assert_eq!(meta.group_kind(), "Property.akamai.crossplane.io");
        assert_eq!(
            meta.kind_api_version(),
            "Property.akamai.crossplane.io/v1alpha1"
        );
        assert_eq!(meta.group_version_kind().version, "v1alpha1");
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = TypeRegistry::new();
        registry.register::<Property>().register::<Property>();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_kind_lookup() {
        assert!(TypeRegistry::provider().lookup("Bucket").is_none());
        assert!(TypeRegistry::new().is_empty());
    }
}
