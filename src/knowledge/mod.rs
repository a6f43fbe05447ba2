//! Read-only Anime.js knowledge base.
//!
//! Three fixed tables: API components, runnable examples, and documentation
//! topics. Lookups go through [`normalize_key`] so `"Timeline"`,
//! `"timeline()"` and `"TIME_LINE"` all resolve to the same entry.

mod components;
mod docs;
mod examples;

/// An API entry point such as `anime()` or `anime.stagger()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Canonical name, e.g. `stagger`.
    pub name: &'static str,
    /// Grouping used by `list_anime_components`.
    pub category: &'static str,
    /// One paragraph summary.
    pub description: &'static str,
    /// Call syntax.
    pub syntax: &'static str,
    /// `(name, description)` pairs.
    pub parameters: &'static [(&'static str, &'static str)],
    /// What the call returns.
    pub returns: &'static str,
    /// Usage example.
    pub example: &'static str,
    /// Names of related components.
    pub related: &'static [&'static str],
}

/// A complete, copy-pasteable example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Example type identifier, e.g. `stagger-grid`.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// What the example demonstrates.
    pub description: &'static str,
    /// Grouping.
    pub category: &'static str,
    /// Search tags.
    pub tags: &'static [&'static str],
    /// Code listing.
    pub code: &'static str,
}

/// A documentation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocTopic {
    /// Topic identifier, e.g. `getting-started`.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Markdown body, starting with its own heading.
    pub content: &'static str,
}

/// Normalises an identifier for lookup: lower-cases, strips `()`, and drops
/// `-`, `_` and whitespace.
#[must_use]
pub fn normalize_key(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Search hits, grouped by table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchHits {
    /// Matching examples.
    pub examples: Vec<&'static Example>,
    /// Matching components.
    pub components: Vec<&'static Component>,
}

impl SearchHits {
    /// Returns `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty() && self.components.is_empty()
    }
}

/// Handle to the static tables.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    components: &'static [Component],
    examples: &'static [Example],
    docs: &'static [DocTopic],
}

impl KnowledgeBase {
    /// Returns the built-in Anime.js knowledge base.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            components: components::COMPONENTS,
            examples: examples::EXAMPLES,
            docs: docs::DOCS,
        }
    }

    /// All components.
    #[must_use]
    pub const fn components(&self) -> &'static [Component] {
        self.components
    }

    /// All examples.
    #[must_use]
    pub const fn examples(&self) -> &'static [Example] {
        self.examples
    }

    /// All documentation topics.
    #[must_use]
    pub const fn docs(&self) -> &'static [DocTopic] {
        self.docs
    }

    /// Distinct component categories, in table order.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for component in self.components {
            if !categories.contains(&component.category) {
                categories.push(component.category);
            }
        }
        categories
    }

    /// Finds a component by normalised name.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<&'static Component> {
        let key = normalize_key(name);
        // `anime.stagger` and `stagger` name the same thing.
        let key = key.strip_prefix("anime.").unwrap_or(&key);
        self.components
            .iter()
            .find(|c| normalize_key(c.name) == key)
    }

    /// Components in `category` (normalised), or all of them for `None`.
    #[must_use]
    pub fn components_in(&self, category: Option<&str>) -> Vec<&'static Component> {
        let wanted = category.map(normalize_key);
        self.components
            .iter()
            .filter(|c| {
                wanted
                    .as_deref()
                    .map_or(true, |w| normalize_key(c.category) == w)
            })
            .collect()
    }

    /// Finds an example by normalised type.
    #[must_use]
    pub fn example(&self, example_type: &str) -> Option<&'static Example> {
        let key = normalize_key(example_type);
        self.examples.iter().find(|e| normalize_key(e.id) == key)
    }

    /// Finds a documentation topic by normalised id.
    #[must_use]
    pub fn doc(&self, topic: &str) -> Option<&'static DocTopic> {
        let key = normalize_key(topic);
        self.docs.iter().find(|d| normalize_key(d.id) == key)
    }

    /// Case-insensitive substring search over examples (title, description,
    /// category, tags, code) and components (name, description, category,
    /// example).
    #[must_use]
    pub fn search(&self, query: &str) -> SearchHits {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchHits::default();
        }
        let hit = |field: &str| field.to_lowercase().contains(&needle);

        let examples = self
            .examples
            .iter()
            .filter(|e| {
                hit(e.title)
                    || hit(e.description)
                    || hit(e.category)
                    || e.tags.iter().any(|&t| hit(t))
                    || hit(e.code)
            })
            .collect();

        let components = self
            .components
            .iter()
            .filter(|c| hit(c.name) || hit(c.description) || hit(c.category) || hit(c.example))
            .collect();

        SearchHits {
            examples,
            components,
        }
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
