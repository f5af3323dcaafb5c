//! Catalog loading and read-only access.
//!
//! The catalog is loaded once at startup, validated, and then shared between
//! handlers without locking.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;

use crate::errors::AppError;
use crate::filter;
use crate::models::{
    Audience, CatalogDocument, CatalogInfo, CatalogSource, FilterState, Resource, ResourceList,
    ResourceType, TagSummary, TypeCount, CATALOG_SCHEMA_VERSION,
};
use crate::models::is_wildcard_value;

/// Catalog document compiled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../data/resources.json");

/// The loaded resource catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    resources: Vec<Resource>,
    schema_version: u32,
    source: CatalogSource,
    loaded_at: String,
}

impl Catalog {
    /// Load the catalog embedded at build time.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_CATALOG, CatalogSource::Embedded)
    }

    /// Load a catalog document from a file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!(
                "Failed to read catalog {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&raw, CatalogSource::File(path.display().to_string()))
    }

    /// Load the override file when one is configured, the embedded catalog
    /// otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::embedded(),
        }
    }

    /// Parse and validate a catalog document.
    pub fn from_json(raw: &str, source: CatalogSource) -> Result<Self, AppError> {
        let document: CatalogDocument = serde_json::from_str(raw)
            .map_err(|e| AppError::Catalog(format!("Invalid catalog document: {}", e)))?;
        Self::from_document(document, source)
    }

    pub fn from_document(document: CatalogDocument, source: CatalogSource) -> Result<Self, AppError> {
        if document.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(AppError::Catalog(format!(
                "Unsupported catalog schema version {} (expected {})",
                document.schema_version, CATALOG_SCHEMA_VERSION
            )));
        }

        validate_resources(&document.resources)?;

        let catalog = Self {
            resources: document.resources,
            schema_version: document.schema_version,
            source,
            loaded_at: Utc::now().to_rfc3339(),
        };

        tracing::info!(
            "Catalog loaded with {} resources and {} tags",
            catalog.resources.len(),
            catalog.tags().len()
        );

        Ok(catalog)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Get a resource by ID.
    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Apply a filter state and package the result with its counts.
    pub fn list(&self, state: FilterState) -> ResourceList {
        let resources: Vec<Resource> = filter::filter(&self.resources, &state)
            .into_iter()
            .cloned()
            .collect();

        ResourceList {
            shown: resources.len(),
            total: self.resources.len(),
            resources,
            filters: state,
        }
    }

    /// Tag selector entries in sorted order, with usage counts.
    pub fn tags(&self) -> Vec<TagSummary> {
        filter::extract_tags(&self.resources)
            .into_iter()
            .map(|tag| {
                let count = self
                    .resources
                    .iter()
                    .filter(|r| r.tags.contains(&tag))
                    .count();
                TagSummary {
                    label: filter::tag_label(&tag),
                    tag,
                    count,
                }
            })
            .collect()
    }

    pub fn info(&self) -> CatalogInfo {
        let types = ResourceType::ALL
            .iter()
            .map(|ty| TypeCount {
                resource_type: *ty,
                count: self
                    .resources
                    .iter()
                    .filter(|r| r.resource_type == *ty)
                    .count(),
            })
            .collect();

        CatalogInfo {
            schema_version: self.schema_version,
            loaded_at: self.loaded_at.clone(),
            source: self.source.clone(),
            total: self.resources.len(),
            types,
            audiences: Audience::VALUES.to_vec(),
        }
    }
}

fn validate_resources(resources: &[Resource]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(resources.len());

    for (index, resource) in resources.iter().enumerate() {
        if resource.id.trim().is_empty() {
            return Err(AppError::Catalog(format!(
                "Resource at index {} has an empty id",
                index
            )));
        }
        if resource.title.trim().is_empty() {
            return Err(AppError::Catalog(format!(
                "Resource {} has an empty title",
                resource.id
            )));
        }
        if resource.file_url.trim().is_empty() {
            return Err(AppError::Catalog(format!(
                "Resource {} has an empty fileUrl",
                resource.id
            )));
        }
        if let Some(tag) = resource.tags.iter().find(|t| is_wildcard_value(t)) {
            return Err(AppError::Catalog(format!(
                "Resource {} has a reserved or empty tag '{}'",
                resource.id, tag
            )));
        }
        if !seen.insert(resource.id.as_str()) {
            return Err(AppError::Catalog(format!(
                "Duplicate resource id {}",
                resource.id
            )));
        }
    }

    Ok(())
}
