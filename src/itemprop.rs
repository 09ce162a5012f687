//! Generic property lookups over one recipe fragment.
//!
//! Recipe Keeper tags every field of interest with an `itemprop` attribute
//! somewhere below the recipe container. All lookups here are read-only and
//! total: a missing property yields an empty or default value, never an
//! error.

use scraper::{ElementRef, Selector};

use crate::fractions::convert_fractions;

/// One `div.recipe-details` fragment with itemprop-aware accessors.
pub struct RecipeNode<'a>(pub ElementRef<'a>);

impl<'a> RecipeNode<'a> {
    /// Selector for descendants carrying `itemprop="{prop}"`, optionally
    /// restricted to a tag name. Property names are fixed internal literals,
    /// so the selector always parses.
    fn prop_selector(element: &str, prop: &str) -> Selector {
        Selector::parse(&format!("{element}[itemprop='{prop}']")).unwrap()
    }

    /// All descendant nodes with the given property, in document order.
    /// Pass `""` as `element` to match any tag.
    pub fn item_props(&self, element: &str, prop: &str) -> Vec<ElementRef<'a>> {
        let selector = Self::prop_selector(element, prop);
        self.0.select(&selector).collect()
    }

    /// Attribute of the first matching node, or `default` when there is no
    /// match or the attribute is missing.
    pub fn attr_or(&self, element: &str, prop: &str, attr: &str, default: &str) -> String {
        self.item_props(element, prop)
            .first()
            .and_then(|el| el.value().attr(attr))
            .unwrap_or(default)
            .to_string()
    }

    /// Concatenated text of the first matching node (any tag), or empty.
    pub fn prop_text(&self, prop: &str) -> String {
        self.item_props("", prop)
            .first()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
    }

    /// `content` attribute of the first matching `meta` node, or `default`.
    pub fn content_or(&self, prop: &str, default: &str) -> String {
        self.attr_or("meta", prop, "content", default)
    }

    /// Non-empty `content` attributes from every matching `meta` node,
    /// preserving document order. Not deduplicated.
    pub fn content_list(&self, prop: &str) -> Vec<String> {
        self.item_props("meta", prop)
            .iter()
            .filter_map(|el| el.value().attr("content"))
            .filter(|content| !content.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Trimmed, fraction-normalized text of each direct child element of the
    /// property-named container. Children that trim to nothing are dropped.
    pub fn child_text_list(&self, prop: &str) -> Vec<String> {
        let props = self.item_props("", prop);
        let Some(container) = props.first() else {
            return Vec::new();
        };

        container
            .children()
            .filter_map(ElementRef::wrap)
            .filter_map(|child| {
                let text = child.text().collect::<String>();
                let text = convert_fractions(text.trim());
                (!text.is_empty()).then_some(text)
            })
            .collect()
    }

    /// Courses, which the export splits between a text node and meta
    /// attributes for the extra entries. Encounter order is kept across both
    /// shapes.
    pub fn courses(&self) -> Vec<String> {
        self.item_props("", "recipeCourse")
            .iter()
            .filter_map(|el| match el.value().name() {
                "span" => Some(el.text().collect::<String>()),
                "meta" => el.value().attr("content").map(str::to_string),
                _ => None,
            })
            .filter(|course| !course.is_empty())
            .collect()
    }

    /// `src` of every `img.recipe-photos` node, skipping empties.
    pub fn photo_paths(&self) -> Vec<String> {
        let selector = Selector::parse("img.recipe-photos").unwrap();
        self.0
            .select(&selector)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())
            .map(str::to_string)
            .collect()
    }
}
