//! Catalog document and response shapes.

use serde::{Deserialize, Serialize};

use super::{Audience, FilterState, Resource, ResourceType};

/// Schema version understood by this build.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// The catalog as stored on disk or embedded in the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub schema_version: u32,
    pub resources: Vec<Resource>,
}

/// Where the loaded catalog came from.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "kind", content = "path")]
pub enum CatalogSource {
    Embedded,
    File(String),
}

/// Number of resources of one type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub count: usize,
}

/// Summary of the loaded catalog, used to populate selector controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogInfo {
    pub schema_version: u32,
    pub loaded_at: String,
    pub source: CatalogSource,
    pub total: usize,
    pub types: Vec<TypeCount>,
    pub audiences: Vec<Audience>,
}

/// One entry of the tag selector.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagSummary {
    pub tag: String,
    pub label: String,
    pub count: usize,
}

/// Filtered view of the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList {
    pub resources: Vec<Resource>,
    pub shown: usize,
    pub total: usize,
    pub filters: FilterState,
}
