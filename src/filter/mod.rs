//! Catalog filtering.
//!
//! Pure functions over a slice of resources: no I/O, no shared state, so the
//! result can be recomputed on every keystroke without caching.

use std::collections::BTreeSet;

use crate::models::{FilterState, Resource};

/// Separator placed between searchable fields before substring matching.
const SEARCH_FIELD_SEPARATOR: &str = " ";

/// Return the resources satisfying every active criterion of `state`, in
/// catalog order.
pub fn filter<'a>(catalog: &'a [Resource], state: &FilterState) -> Vec<&'a Resource> {
    if state.is_unrestricted() {
        return catalog.iter().collect();
    }

    let needle = search_needle(&state.query);

    let matched: Vec<&Resource> = catalog
        .iter()
        .filter(|resource| matches(resource, state, needle.as_deref()))
        .collect();

    tracing::debug!(
        query = %state.query,
        resource_type = %state.resource_type,
        tag = %state.tag,
        audience = %state.audience,
        shown = matched.len(),
        total = catalog.len(),
        "Filtered catalog"
    );

    matched
}

/// Every distinct tag across the catalog, sorted.
pub fn extract_tags(catalog: &[Resource]) -> BTreeSet<String> {
    catalog
        .iter()
        .flat_map(|resource| resource.tags.iter().cloned())
        .collect()
}

/// Display label for a tag selector option: first letter uppercased.
pub fn tag_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercased query, or `None` when the query is blank.
///
/// Only blankness is decided on the trimmed query; the needle itself keeps
/// its surrounding whitespace.
fn search_needle(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn matches(resource: &Resource, state: &FilterState, needle: Option<&str>) -> bool {
    if !state.resource_type.admits(&resource.resource_type) {
        return false;
    }

    if !state.tag.admits_any(&resource.tags) {
        return false;
    }

    // Literal membership: a resource marked `all` does not answer a
    // `teachers` query.
    if !state.audience.admits_any(&resource.audience) {
        return false;
    }

    match needle {
        Some(needle) => searchable_text(resource).contains(needle),
        None => true,
    }
}

fn searchable_text(resource: &Resource) -> String {
    let mut fields: Vec<&str> = Vec::with_capacity(resource.tags.len() + 2);
    fields.push(&resource.title);
    fields.push(resource.description.as_deref().unwrap_or(""));
    fields.extend(resource.tags.iter().map(String::as_str));
    fields.join(SEARCH_FIELD_SEPARATOR).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Audience, ResourceType, Selector, UseCase};
    use proptest::prelude::*;

    fn create_test_resource(
        id: &str,
        resource_type: ResourceType,
        title: &str,
        tags: &[&str],
        audience: &[Audience],
    ) -> Resource {
        Resource {
            id: id.to_string(),
            title: title.to_string(),
            resource_type,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            thumbnail: format!("/thumbnails/{}.png", id),
            file_url: format!("/downloads/{}.pdf", id),
            description: None,
            format: None,
            audience: audience.to_vec(),
            age_range: None,
            use_case: UseCase::Both,
        }
    }

    /// The two-record catalog used throughout the product docs.
    fn sample_catalog() -> Vec<Resource> {
        let mut a = create_test_resource(
            "a",
            ResourceType::Wallpaper,
            "Caiden Desktop Wallpaper",
            &["caiden", "desktop"],
            &[Audience::Parents],
        );
        a.description = Some("A bright desktop background".to_string());
        let b = create_test_resource(
            "b",
            ResourceType::Coloring,
            "Caiden Coloring Page",
            &["caiden", "kids"],
            &[Audience::Teachers, Audience::Students],
        );
        vec![a, b]
    }

    fn ids(resources: &[&Resource]) -> Vec<String> {
        resources.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_query_matches_title() {
        let catalog = sample_catalog();
        let state = FilterState::new().with_query("coloring");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["b"]);
    }

    #[test]
    fn test_type_filter() {
        let catalog = sample_catalog();
        let state = FilterState::new().with_type(ResourceType::Wallpaper);
        assert_eq!(ids(&filter(&catalog, &state)), vec!["a"]);
    }

    #[test]
    fn test_tag_filter_keeps_catalog_order() {
        let catalog = sample_catalog();
        let state = FilterState::new().with_tag("caiden");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["a", "b"]);
    }

    #[test]
    fn test_query_is_case_insensitive_and_searches_description() {
        let catalog = sample_catalog();
        let state = FilterState::new().with_query("BRIGHT");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["a"]);
    }

    #[test]
    fn test_query_spans_field_separator() {
        let catalog = sample_catalog();
        // title ends "Page", first tag is "caiden"
        let state = FilterState::new().with_query("page caiden");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["b"]);
    }

    #[test]
    fn test_query_whitespace_is_part_of_the_needle() {
        let catalog = sample_catalog();

        // "page" ends the title of "b" and is followed by the field separator.
        let state = FilterState::new().with_query("page ");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["b"]);

        let state = FilterState::new().with_query(" wallpaper");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["a"]);

        // "kids" is the last searchable field of "b": nothing follows it.
        let state = FilterState::new().with_query("kids ");
        assert!(filter(&catalog, &state).is_empty());
        let state = FilterState::new().with_query("kids");
        assert_eq!(ids(&filter(&catalog, &state)), vec!["b"]);
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let catalog = sample_catalog();
        let state = FilterState::new().with_query("   ");
        assert_eq!(filter(&catalog, &state).len(), 2);
    }

    #[test]
    fn test_audience_filter_is_literal_membership() {
        let mut catalog = sample_catalog();
        catalog.push(create_test_resource(
            "c",
            ResourceType::Worksheet,
            "Everyone Worksheet",
            &[],
            &[Audience::All],
        ));

        let teachers = FilterState::new().with_audience(Audience::Teachers);
        assert_eq!(ids(&filter(&catalog, &teachers)), vec!["b"]);

        let parents = FilterState::new().with_audience(Audience::Parents);
        assert_eq!(ids(&filter(&catalog, &parents)), vec!["a"]);
    }

    #[test]
    fn test_unrecognized_selectors_match_nothing() {
        let catalog = sample_catalog();

        let state = FilterState {
            resource_type: Selector::parse("poster"),
            ..FilterState::new()
        };
        assert!(filter(&catalog, &state).is_empty());

        let state = FilterState {
            audience: Selector::parse("grandparents"),
            ..FilterState::new()
        };
        assert!(filter(&catalog, &state).is_empty());
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let catalog = sample_catalog();
        let state = FilterState::new().with_tag("dinosaurs");
        assert!(filter(&catalog, &state).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let state = FilterState::new()
            .with_query("caiden")
            .with_type(ResourceType::Coloring);
        assert!(filter(&[], &state).is_empty());
        assert!(filter(&[], &FilterState::new()).is_empty());
        assert!(extract_tags(&[]).is_empty());
    }

    #[test]
    fn test_extract_tags_sorted_and_distinct() {
        let catalog = sample_catalog();
        let tags: Vec<String> = extract_tags(&catalog).into_iter().collect();
        assert_eq!(tags, vec!["caiden", "desktop", "kids"]);
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label("caiden"), "Caiden");
        assert_eq!(tag_label("sel"), "Sel");
        assert_eq!(tag_label("émotions"), "Émotions");
        assert_eq!(tag_label(""), "");
    }

    const TAG_POOL: &[&str] = &["caiden", "desktop", "kids", "sel", "emotions", "coloring"];
    const WORD_POOL: &[&str] = &["Caiden", "Coloring", "Page", "Brave", "Worksheet", "Calm"];

    fn arb_resource_type() -> impl Strategy<Value = ResourceType> {
        prop::sample::select(ResourceType::ALL.to_vec())
    }

    fn arb_audience() -> impl Strategy<Value = Audience> {
        prop::sample::select(Audience::VALUES.to_vec())
    }

    fn arb_resource() -> impl Strategy<Value = Resource> {
        (
            arb_resource_type(),
            prop::sample::subsequence(WORD_POOL.to_vec(), 1..=3),
            prop::sample::subsequence(TAG_POOL.to_vec(), 0..=3),
            prop::collection::vec(arb_audience(), 0..=3),
            prop::option::of(prop::sample::select(WORD_POOL.to_vec())),
        )
            .prop_map(|(resource_type, words, tags, audience, description)| {
                let mut resource =
                    create_test_resource("", resource_type, &words.join(" "), &tags, &audience);
                resource.description = description.map(|d| format!("A {} activity", d));
                resource
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Resource>> {
        prop::collection::vec(arb_resource(), 0..12).prop_map(|mut resources| {
            for (i, resource) in resources.iter_mut().enumerate() {
                resource.id = format!("res-{}", i);
            }
            resources
        })
    }

    fn arb_query() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(TAG_POOL.to_vec()).prop_map(str::to_string),
            prop::sample::select(WORD_POOL.to_vec()).prop_map(|w| w.to_uppercase()),
            "[a-z]{1,4}",
        ]
    }

    proptest! {
        #[test]
        fn prop_unrestricted_state_is_identity(catalog in arb_catalog()) {
            let shown = filter(&catalog, &FilterState::new());
            let expected: Vec<&Resource> = catalog.iter().collect();
            prop_assert_eq!(shown, expected);
        }

        #[test]
        fn prop_type_filter_partitions_catalog(
            catalog in arb_catalog(),
            resource_type in arb_resource_type(),
        ) {
            let state = FilterState::new().with_type(resource_type);
            let shown = filter(&catalog, &state);
            let others = catalog
                .iter()
                .filter(|r| r.resource_type != resource_type)
                .count();

            prop_assert!(shown.iter().all(|r| r.resource_type == resource_type));
            prop_assert_eq!(shown.len() + others, catalog.len());
        }

        #[test]
        fn prop_query_is_sound_and_complete(catalog in arb_catalog(), query in arb_query()) {
            let state = FilterState::new().with_query(query.clone());
            let shown = filter(&catalog, &state);
            let needle = query.to_lowercase();

            let contains = |r: &Resource| {
                r.title.to_lowercase().contains(&needle)
                    || r.description.as_deref().unwrap_or("").to_lowercase().contains(&needle)
                    || r.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            };

            for resource in &catalog {
                let included = shown.iter().any(|r| std::ptr::eq(*r, resource));
                if contains(resource) {
                    prop_assert!(included, "missing match {}", resource.id);
                }
                if included {
                    // A hit may straddle the field separator, but never for
                    // single-word needles drawn without spaces.
                    prop_assert!(contains(resource), "unsound match {}", resource.id);
                }
            }
        }

        #[test]
        fn prop_combined_filters_intersect(
            catalog in arb_catalog(),
            resource_type in arb_resource_type(),
            tag in prop::sample::select(TAG_POOL.to_vec()),
            audience in arb_audience(),
        ) {
            let by_type = filter(&catalog, &FilterState::new().with_type(resource_type));
            let by_tag = filter(&catalog, &FilterState::new().with_tag(tag));
            let by_audience = filter(&catalog, &FilterState::new().with_audience(audience));
            let combined = filter(
                &catalog,
                &FilterState::new()
                    .with_type(resource_type)
                    .with_tag(tag)
                    .with_audience(audience),
            );

            let expected: Vec<&Resource> = catalog
                .iter()
                .filter(|r| {
                    by_type.iter().any(|x| std::ptr::eq(*x, *r))
                        && by_tag.iter().any(|x| std::ptr::eq(*x, *r))
                        && by_audience.iter().any(|x| std::ptr::eq(*x, *r))
                })
                .collect();
            prop_assert_eq!(combined, expected);
        }

        #[test]
        fn prop_extract_tags_is_union(catalog in arb_catalog()) {
            let tags = extract_tags(&catalog);
            for resource in &catalog {
                for tag in &resource.tags {
                    prop_assert!(tags.contains(tag));
                }
            }
            for tag in &tags {
                prop_assert!(catalog.iter().any(|r| r.tags.contains(tag)));
            }
        }
    }
}
