//! Resource model matching the frontend Resource interface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a string does not name a known enumeration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Kind of downloadable asset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    Wallpaper,
    Coloring,
    Worksheet,
    TeacherPack,
}

impl ResourceType {
    /// Every type, in display order.
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Wallpaper,
        ResourceType::Coloring,
        ResourceType::Worksheet,
        ResourceType::TeacherPack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Wallpaper => "wallpaper",
            ResourceType::Coloring => "coloring",
            ResourceType::Worksheet => "worksheet",
            ResourceType::TeacherPack => "teacher-pack",
        }
    }
}

impl FromStr for ResourceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wallpaper" => Ok(ResourceType::Wallpaper),
            "coloring" => Ok(ResourceType::Coloring),
            "worksheet" => Ok(ResourceType::Worksheet),
            "teacher-pack" => Ok(ResourceType::TeacherPack),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a resource is meant for.
///
/// `All` is an ordinary value on a resource: it does not make the resource
/// match a `parents`, `teachers` or `students` query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Parents,
    Teachers,
    Students,
    All,
}

impl Audience {
    pub const VALUES: [Audience; 4] = [
        Audience::Parents,
        Audience::Teachers,
        Audience::Students,
        Audience::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Parents => "parents",
            Audience::Teachers => "teachers",
            Audience::Students => "students",
            Audience::All => "all",
        }
    }
}

impl FromStr for Audience {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parents" => Ok(Audience::Parents),
            "teachers" => Ok(Audience::Teachers),
            "students" => Ok(Audience::Students),
            "all" => Ok(Audience::All),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a resource is used. Display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    Home,
    Classroom,
    Both,
}

/// A downloadable asset entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub file_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub audience: Vec<Audience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    pub use_case: UseCase,
}
