//! Filter state driving catalog display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Audience, ResourceType};

/// Selector value meaning "no restriction on this dimension".
pub const WILDCARD: &str = "all";

/// One selector control: the wildcard, a recognized value, or a value the
/// catalog does not know about.
///
/// Unrecognized values are kept rather than rejected so that a stale or
/// hand-edited query string yields an empty result instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
    Unrecognized(String),
}

/// Whether a raw selector value means "no restriction".
pub fn is_wildcard_value(raw: &str) -> bool {
    let value = raw.trim();
    value.is_empty() || value == WILDCARD
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: FromStr> Selector<T> {
    /// Parse a raw selector value. Blank input is treated as the wildcard.
    ///
    /// Trimming only decides blank/wildcard; any other value is parsed as
    /// given so that it compares equal to the stored tag it came from.
    pub fn parse(raw: &str) -> Self {
        if is_wildcard_value(raw) {
            return Selector::All;
        }
        match raw.parse::<T>() {
            Ok(v) => Selector::Only(v),
            Err(_) => Selector::Unrecognized(raw.to_string()),
        }
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// Whether a single-valued field passes this selector.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => wanted == value,
            Selector::Unrecognized(_) => false,
        }
    }

    /// Whether a multi-valued field passes this selector (membership).
    pub fn admits_any(&self, values: &[T]) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => values.contains(wanted),
            Selector::Unrecognized(_) => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(WILDCARD),
            Selector::Only(v) => fmt::Display::fmt(v, f),
            Selector::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Selector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selector::parse(&raw))
    }
}

/// The current combination of search query and selector values.
///
/// Doubles as the query-string shape of `GET /api/resources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    #[serde(rename = "q", alias = "query")]
    pub query: String,
    #[serde(rename = "type")]
    pub resource_type: Selector<ResourceType>,
    pub tag: Selector<String>,
    pub audience: Selector<Audience>,
}

impl FilterState {
    /// True when no dimension restricts the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty()
            && self.resource_type.is_wildcard()
            && self.tag.is_wildcard()
            && self.audience.is_wildcard()
    }
}

#[cfg(test)]
impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Selector::Only(resource_type);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Selector::Only(tag.into());
        self
    }

    pub fn with_audience(mut self, audience: Audience) -> Self {
        self.audience = Selector::Only(audience);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::<ResourceType>::parse("all"), Selector::All);
        assert_eq!(Selector::<ResourceType>::parse("  "), Selector::All);
        assert_eq!(
            Selector::<ResourceType>::parse("teacher-pack"),
            Selector::Only(ResourceType::TeacherPack)
        );
        assert_eq!(
            Selector::<ResourceType>::parse("poster"),
            Selector::Unrecognized("poster".to_string())
        );
    }

    #[test]
    fn test_selector_keeps_raw_value() {
        assert_eq!(
            Selector::<String>::parse("kids "),
            Selector::Only("kids ".to_string())
        );
        assert_eq!(
            Selector::<ResourceType>::parse(" wallpaper"),
            Selector::Unrecognized(" wallpaper".to_string())
        );
        assert_eq!(Selector::<String>::parse(" all "), Selector::All);
    }

    #[test]
    fn test_audience_all_is_the_wildcard_selector() {
        // "all" as a selector value never narrows, even though it is also
        // a literal audience value on resources.
        assert_eq!(Selector::<Audience>::parse("all"), Selector::All);
    }

    #[test]
    fn test_selector_admits() {
        let sel = Selector::Only(Audience::Teachers);
        assert!(sel.admits_any(&[Audience::Parents, Audience::Teachers]));
        assert!(!sel.admits_any(&[Audience::All]));
        assert!(!Selector::<Audience>::Unrecognized("x".into()).admits_any(&Audience::VALUES));
        assert!(Selector::<Audience>::All.admits_any(&[]));
    }

    #[test]
    fn test_filter_state_from_query_string_shape() {
        let json = serde_json::json!({ "q": "Caiden", "type": "wallpaper", "tag": "desktop" });
        let state: FilterState = serde_json::from_value(json).unwrap();

        assert_eq!(state.query, "Caiden");
        assert_eq!(state.resource_type, Selector::Only(ResourceType::Wallpaper));
        assert_eq!(state.tag, Selector::Only("desktop".to_string()));
        assert_eq!(state.audience, Selector::All);
    }

    #[test]
    fn test_filter_state_serializes_raw_values() {
        let state = FilterState {
            resource_type: Selector::parse("poster"),
            ..FilterState::new().with_audience(Audience::Students)
        };
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["q"], "");
        assert_eq!(json["type"], "poster");
        assert_eq!(json["tag"], "all");
        assert_eq!(json["audience"], "students");
    }

    #[test]
    fn test_is_unrestricted() {
        assert!(FilterState::new().is_unrestricted());
        assert!(FilterState::new().with_query("   ").is_unrestricted());
        assert!(!FilterState::new().with_tag("kids").is_unrestricted());
    }
}
