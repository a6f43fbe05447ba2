//! Request handlers.
//!
//! Each handler answers one method from the knowledge base, going through the
//! cache where the result is worth keeping. Cache keys are the method family
//! plus the normalised identifier, so `Timeline` and `timeline()` share an
//! entry, and a resource read of `anime://components/timeline` shares it too.
//!
//! Only successful lookups are cached. "Not found" answers depend on
//! arbitrary client input and are recomputed each time.

use std::fmt::Write as _;
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::ExpiringCache;
use crate::config::CacheTtls;
use crate::error::HandlerError;
use crate::knowledge::{normalize_key, Component, Example, KnowledgeBase};
use crate::mcp::catalog::{self, MARKDOWN, RESOURCE_SCHEME};
use crate::mcp::types::{GetPromptResult, PromptMessage, ResourceContents, ToolCallResult};
use crate::validation::sanitize_input;

/// Terms offered when a search finds nothing.
pub const SUGGESTED_SEARCH_TERMS: [&str; 10] = [
    "stagger", "timeline", "svg", "easing", "spring", "keyframes", "text", "scroll", "controls",
    "random",
];

/// Everything a handler may touch.
pub struct HandlerContext {
    knowledge: KnowledgeBase,
    cache: ExpiringCache<String>,
    ttls: CacheTtls,
}

impl HandlerContext {
    /// Creates a context over `knowledge` with an empty cache.
    #[must_use]
    pub fn new(knowledge: KnowledgeBase, ttls: CacheTtls) -> Self {
        Self {
            knowledge,
            cache: ExpiringCache::with_default_ttl(ttls.default),
            ttls,
        }
    }

    /// The knowledge base.
    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// The response cache.
    #[must_use]
    pub const fn cache(&self) -> &ExpiringCache<String> {
        &self.cache
    }

    /// Returns the cached text for `key`, or renders it. `render` returns
    /// `Err` for a not-found answer, which is passed through uncached.
    fn cached(
        &self,
        key: String,
        ttl: Duration,
        render: impl FnOnce() -> Result<String, String>,
    ) -> String {
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "Cache hit");
            return hit;
        }

        match render() {
            Ok(text) => {
                debug!(key = %key, ttl_secs = ttl.as_secs(), "Cache populated");
                self.cache.set_with_ttl(key, text.clone(), ttl);
                text
            }
            Err(not_found) => not_found,
        }
    }

    // ==================== Text lookups ====================

    fn component_text(&self, name: &str) -> String {
        let key = format!("component:{}", normalize_key(name));
        self.cached(key, self.ttls.component, || {
            self.knowledge
                .component(name)
                .map(render_component)
                .ok_or_else(|| self.component_not_found(name))
        })
    }

    fn component_list_text(&self, category: Option<&str>) -> String {
        let key = format!(
            "components:{}",
            category.map_or_else(|| "all".to_string(), normalize_key)
        );
        self.cached(key, self.ttls.list, || {
            let components = self.knowledge.components_in(category);
            if components.is_empty() {
                Err(format!(
                    "No components found in category '{}'.\n\nAvailable categories: {}",
                    category.unwrap_or_default(),
                    self.knowledge.categories().join(", ")
                ))
            } else {
                Ok(render_component_list(category, &components))
            }
        })
    }

    fn example_text(&self, example_type: &str) -> String {
        let key = format!("example:{}", normalize_key(example_type));
        self.cached(key, self.ttls.example, || {
            self.knowledge
                .example(example_type)
                .map(render_example)
                .ok_or_else(|| self.example_not_found(example_type))
        })
    }

    // No tool serves this index, so it lives for the configured default TTL.
    fn example_index_text(&self) -> String {
        self.cached("examples:all".to_string(), self.ttls.default, || {
            let mut text = String::from("# Anime.js Examples\n\n");
            for example in self.knowledge.examples() {
                let _ = writeln!(
                    text,
                    "- `{}`: {} ({})",
                    example.id, example.title, example.category
                );
            }
            Ok(text)
        })
    }

    fn search_text(&self, query: &str) -> String {
        let key = format!("search:{}", query.trim().to_lowercase());
        self.cached(key, self.ttls.search, || {
            let hits = self.knowledge.search(query);
            if hits.is_empty() {
                return Err(format!(
                    "No matches found for '{query}'.\n\nTry searching for: {}",
                    SUGGESTED_SEARCH_TERMS.join(", ")
                ));
            }

            let mut text = format!("# Search results for '{query}'\n\n");
            let _ = writeln!(text, "Found {} matching example(s).\n", hits.examples.len());
            for example in &hits.examples {
                let _ = writeln!(text, "## {} (`{}`)\n", example.title, example.id);
                let _ = writeln!(text, "{}\n", example.description);
                let _ = writeln!(text, "**Tags:** {}\n", example.tags.join(", "));
                let _ = writeln!(text, "```javascript\n{}\n```\n", example.code);
            }
            if !hits.components.is_empty() {
                text.push_str("## Matching components\n\n");
                for component in &hits.components {
                    let _ = writeln!(text, "- `{}` ({})", component.name, component.category);
                }
            }
            Ok(text)
        })
    }

    fn docs_text(&self, topic: &str) -> String {
        let key = format!("docs:{}", normalize_key(topic));
        self.cached(key, self.ttls.docs, || {
            self.knowledge
                .doc(topic)
                .map(|doc| doc.content.to_string())
                .ok_or_else(|| self.docs_not_found(topic))
        })
    }

    // ==================== Not-found answers ====================

    fn component_not_found(&self, name: &str) -> String {
        let mut text = format!("Component '{name}' not found.\n\nAvailable components:\n");
        for component in self.knowledge.components() {
            let _ = writeln!(text, "- {} ({})", component.name, component.category);
        }
        text
    }

    fn example_not_found(&self, example_type: &str) -> String {
        let mut text = format!("Example '{example_type}' not found.\n\nAvailable examples:\n");
        for example in self.knowledge.examples() {
            let _ = writeln!(text, "- {}: {}", example.id, example.title);
        }
        text
    }

    fn docs_not_found(&self, topic: &str) -> String {
        let mut text =
            format!("Documentation topic '{topic}' not found.\n\nAvailable topics:\n");
        for doc in self.knowledge.docs() {
            let _ = writeln!(text, "- {}: {}", doc.id, doc.title);
        }
        text
    }

    // ==================== Method handlers ====================

    /// `get_anime_component`
    pub(crate) fn get_component(&self, name: &str) -> Result<Value, HandlerError> {
        tool_result(self.component_text(name))
    }

    /// `list_anime_components`
    pub(crate) fn list_components(&self, category: Option<&str>) -> Result<Value, HandlerError> {
        tool_result(self.component_list_text(category))
    }

    /// `get_anime_example`
    pub(crate) fn get_example(&self, example_type: &str) -> Result<Value, HandlerError> {
        tool_result(self.example_text(example_type))
    }

    /// `search_anime_examples`
    pub(crate) fn search_examples(&self, query: &str) -> Result<Value, HandlerError> {
        tool_result(self.search_text(query))
    }

    /// `get_anime_docs`
    pub(crate) fn get_docs(&self, topic: &str) -> Result<Value, HandlerError> {
        tool_result(self.docs_text(topic))
    }

    /// `list_tools`
    pub(crate) fn list_tools(&self) -> Result<Value, HandlerError> {
        Ok(serde_json::json!({ "tools": catalog::tool_definitions() }))
    }

    /// `list_resources`
    pub(crate) fn list_resources(&self) -> Result<Value, HandlerError> {
        Ok(serde_json::json!({ "resources": catalog::resources(&self.knowledge) }))
    }

    /// `list_resource_templates`
    pub(crate) fn list_resource_templates(&self) -> Result<Value, HandlerError> {
        Ok(serde_json::json!({ "resourceTemplates": catalog::resource_templates() }))
    }

    /// `list_prompts`
    pub(crate) fn list_prompts(&self) -> Result<Value, HandlerError> {
        Ok(serde_json::json!({ "prompts": catalog::prompts() }))
    }

    /// `read_resource`
    pub(crate) fn read_resource(&self, uri: &str) -> Result<Value, HandlerError> {
        let text = match uri.strip_prefix(RESOURCE_SCHEME) {
            Some("components") => self.component_list_text(None),
            Some("examples") => self.example_index_text(),
            Some(path) => match path.split_once('/') {
                Some(("components", name)) => self.component_text(name),
                Some(("examples", example_type)) => self.example_text(example_type),
                Some(("docs", topic)) => self.docs_text(topic),
                _ => unknown_resource(uri),
            },
            None => unknown_resource(uri),
        };

        let contents = ResourceContents {
            uri: uri.to_string(),
            mime_type: MARKDOWN,
            text,
        };
        Ok(serde_json::json!({ "contents": [contents] }))
    }

    /// `get_prompt`
    pub(crate) fn get_prompt(
        &self,
        name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<Value, HandlerError> {
        let arg = |key: &str| {
            arguments
                .get(key)
                .and_then(Value::as_str)
                .map(sanitize_input)
                .filter(|s| !s.trim().is_empty())
        };

        let result = match name {
            "create-animation" => {
                let description = arg("description")
                    .unwrap_or_else(|| "a simple entrance animation".to_string());
                let target = arg("target").unwrap_or_else(|| ".element".to_string());
                GetPromptResult {
                    description: "Create an Anime.js animation".to_string(),
                    messages: vec![PromptMessage::user(format!(
                        "Create an Anime.js animation for the element(s) matching `{target}` \
                         that does the following: {description}\n\n\
                         Use the anime() function or anime.timeline() as appropriate. \
                         Look up APIs with get_anime_component and related code with \
                         search_anime_examples before writing the code, and explain the \
                         chosen easing and timing."
                    ))],
                }
            }
            "explain-component" => {
                let component = arg("component").unwrap_or_else(|| "anime".to_string());
                GetPromptResult {
                    description: format!("Explain the Anime.js {component} component"),
                    messages: vec![PromptMessage::user(format!(
                        "Explain how the Anime.js `{component}` API works, when to use it, \
                         and common mistakes. Base the explanation on this reference:\n\n{}",
                        self.component_text(&component)
                    ))],
                }
            }
            "debug-animation" => {
                let code = arg("code").unwrap_or_default();
                let issue = arg("issue").unwrap_or_else(|| "it does not behave as expected".to_string());
                GetPromptResult {
                    description: "Debug an Anime.js animation".to_string(),
                    messages: vec![PromptMessage::user(format!(
                        "This Anime.js animation has a problem: {issue}\n\n\
                         ```javascript\n{code}\n```\n\n\
                         Check the targets, property names and units, easing syntax, \
                         timeline offsets and autoplay settings, then suggest a fix."
                    ))],
                }
            }
            _ => {
                let names: Vec<_> = catalog::prompts().iter().map(|p| p.name).collect();
                GetPromptResult {
                    description: format!("Prompt '{name}' not found"),
                    messages: vec![PromptMessage::user(format!(
                        "Prompt '{name}' not found. Available prompts: {}",
                        names.join(", ")
                    ))],
                }
            }
        };

        Ok(serde_json::to_value(result)?)
    }
}

fn tool_result(text: String) -> Result<Value, HandlerError> {
    Ok(serde_json::to_value(ToolCallResult::text(text))?)
}

fn unknown_resource(uri: &str) -> String {
    let templates: Vec<_> = catalog::resource_templates()
        .iter()
        .map(|t| t.uri_template)
        .collect();
    format!(
        "Resource '{uri}' not found.\n\nAvailable resource templates:\n- {}",
        templates.join("\n- ")
    )
}

// ==================== Rendering ====================

fn render_component(component: &Component) -> String {
    // `anime(params)`, `anime.stagger(...)` and `animation.play()` are calls.
    let callable = component
        .syntax
        .split_once('(')
        .is_some_and(|(callee, _)| callee.rsplit('.').next() == Some(component.name));
    let heading = if callable {
        format!("{}()", component.name)
    } else {
        component.name.to_string()
    };

    let mut text = format!("# {heading}\n\n");
    let _ = writeln!(text, "**Category:** {}\n", component.category);
    let _ = writeln!(text, "{}\n", component.description);
    let _ = writeln!(text, "## Syntax\n\n```javascript\n{}\n```\n", component.syntax);

    if !component.parameters.is_empty() {
        text.push_str("## Parameters\n\n");
        for (name, description) in component.parameters {
            let _ = writeln!(text, "- `{name}`: {description}");
        }
        text.push('\n');
    }

    let _ = writeln!(text, "## Returns\n\n{}\n", component.returns);
    let _ = writeln!(text, "## Example\n\n```javascript\n{}\n```", component.example);

    if !component.related.is_empty() {
        let _ = write!(text, "\n## Related\n\n{}\n", component.related.join(", "));
    }
    text
}

fn render_component_list(category: Option<&str>, components: &[&Component]) -> String {
    let mut text = category.map_or_else(
        || "# Anime.js Components\n".to_string(),
        |c| format!("# Anime.js Components: {c}\n"),
    );

    let mut current = "";
    for component in components {
        if component.category != current {
            current = component.category;
            let _ = writeln!(text, "\n## {current}\n");
        }
        let _ = writeln!(text, "- **{}**: {}", component.name, first_sentence(component.description));
    }
    text
}

fn render_example(example: &Example) -> String {
    format!(
        "# {}\n\n{}\n\n**Category:** {}\n**Tags:** {}\n\n```javascript\n{}\n```\n",
        example.title,
        example.description,
        example.category,
        example.tags.join(", "),
        example.code
    )
}

fn first_sentence(text: &str) -> &str {
    text.find(". ").map_or(text, |end| &text[..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> HandlerContext {
        HandlerContext::new(KnowledgeBase::builtin(), CacheTtls::default())
    }

    fn text_of(value: &Value) -> &str {
        value["content"][0]["text"].as_str().unwrap()
    }

    #[test]
    fn component_response_mentions_call_syntax() {
        let ctx = context();
        let value = ctx.get_component("anime").unwrap();
        assert!(text_of(&value).contains("anime()"));
        assert_eq!(value["content"][0]["type"], "text");
    }

    #[test]
    fn heading_marks_callable_components() {
        let ctx = context();
        let heading = |name: &str| {
            let value = ctx.get_component(name).unwrap();
            text_of(&value).lines().next().unwrap().to_string()
        };
        assert_eq!(heading("anime.stagger"), "# stagger()");
        assert_eq!(heading("play"), "# play()");
        assert_eq!(heading("running"), "# running");
        assert_eq!(heading("finished"), "# finished");
    }

    #[tokio::test(start_paused = true)]
    async fn example_index_uses_default_ttl() {
        let ttls = CacheTtls {
            default: Duration::from_secs(10),
            ..CacheTtls::default()
        };
        let ctx = HandlerContext::new(KnowledgeBase::builtin(), ttls);
        ctx.read_resource("anime://examples").unwrap();
        ctx.get_component("stagger").unwrap();

        tokio::time::advance(Duration::from_secs(11)).await;
        assert!(ctx.cache().get("examples:all").is_none());
        assert!(ctx.cache().get("component:stagger").is_some());
    }

    #[test]
    fn component_lookup_ignores_case() {
        let ctx = context();
        let a = ctx.get_component("Timeline").unwrap();
        let b = ctx.get_component("timeline").unwrap();
        let c = ctx.get_component("TIMELINE").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(ctx.cache().size(), 1);
    }

    #[test]
    fn unknown_component_lists_alternatives_and_is_not_cached() {
        let ctx = context();
        let value = ctx.get_component("teleport").unwrap();
        let text = text_of(&value);
        assert!(text.contains("Component 'teleport' not found"));
        assert!(text.contains("- stagger (utilities)"));
        assert_eq!(ctx.cache().size(), 0);
    }

    #[test]
    fn second_lookup_is_served_from_cache() {
        let ctx = context();
        ctx.get_docs("timeline").unwrap();
        assert!(ctx.cache().get("docs:timeline").is_some());

        ctx.cache().set("docs:timeline", "cached copy".to_string());
        let value = ctx.get_docs("Timeline").unwrap();
        assert_eq!(text_of(&value), "cached copy");
    }

    #[test]
    fn list_filters_by_category() {
        let ctx = context();
        let value = ctx.list_components(Some("svg")).unwrap();
        let text = text_of(&value);
        assert!(text.contains("**path**"));
        assert!(text.contains("**setDashoffset**"));
        assert!(!text.contains("**timeline**"));

        let value = ctx.list_components(Some("nonsense")).unwrap();
        assert!(text_of(&value).contains("Available categories: core"));
    }

    #[test]
    fn list_all_groups_by_category() {
        let ctx = context();
        let value = ctx.list_components(None).unwrap();
        let text = text_of(&value);
        assert!(text.starts_with("# Anime.js Components\n"));
        assert!(text.contains("## core"));
        assert!(text.contains("## controls"));
    }

    #[test]
    fn search_finds_stagger_examples() {
        let ctx = context();
        let value = ctx.search_examples("stagger").unwrap();
        let text = text_of(&value);
        assert!(text.contains("stagger-grid"));
        assert!(text.contains("stagger-basic"));
    }

    #[test]
    fn empty_search_suggests_terms() {
        let ctx = context();
        let value = ctx.search_examples("zzzznomatch").unwrap();
        let text = text_of(&value);
        assert!(text.contains("No matches found for 'zzzznomatch'"));
        assert!(text.contains("Try searching for: stagger"));
    }

    #[test]
    fn docs_lookup_and_fallback() {
        let ctx = context();
        let value = ctx.get_docs("getting-started").unwrap();
        assert!(text_of(&value).contains("Getting Started with Anime.js"));

        let value = ctx.get_docs("unknown-topic").unwrap();
        let text = text_of(&value);
        assert!(text.contains("Available topics"));
        assert!(text.contains("- getting-started"));
    }

    #[test]
    fn example_lookup_and_fallback() {
        let ctx = context();
        let value = ctx.get_example("timeline_sequence").unwrap();
        assert!(text_of(&value).contains("# Timeline Sequence"));

        let value = ctx.get_example("hologram").unwrap();
        assert!(text_of(&value).contains("Available examples"));
    }

    #[test]
    fn resource_read_shares_tool_cache() {
        let ctx = context();
        let value = ctx.read_resource("anime://components/stagger").unwrap();
        assert_eq!(value["contents"][0]["uri"], "anime://components/stagger");
        assert_eq!(value["contents"][0]["mimeType"], "text/markdown");
        assert!(ctx.cache().get("component:stagger").is_some());
    }

    #[test]
    fn resource_indexes() {
        let ctx = context();
        let value = ctx.read_resource("anime://examples").unwrap();
        let text = value["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("`stagger-grid`"));

        let value = ctx.read_resource("anime://docs/svg").unwrap();
        let text = value["contents"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("# SVG Animation"));
    }

    #[test]
    fn unknown_resource_lists_templates() {
        let ctx = context();
        for uri in ["https://animejs.com", "anime://videos/intro"] {
            let value = ctx.read_resource(uri).unwrap();
            let text = value["contents"][0]["text"].as_str().unwrap();
            assert!(text.contains("anime://docs/{topic}"), "{uri}");
        }
    }

    #[test]
    fn listings_have_expected_keys() {
        let ctx = context();
        assert!(ctx.list_tools().unwrap()["tools"].is_array());
        assert!(ctx.list_resources().unwrap()["resources"].is_array());
        assert!(ctx.list_resource_templates().unwrap()["resourceTemplates"].is_array());
        assert!(ctx.list_prompts().unwrap()["prompts"].is_array());
    }

    #[test]
    fn explain_prompt_embeds_reference() {
        let ctx = context();
        let mut args = Map::new();
        args.insert("component".to_string(), Value::from("stagger"));
        let value = ctx.get_prompt("explain-component", &args).unwrap();
        let text = value["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("`stagger`"));
        assert!(text.contains("anime.stagger(value, options)"));
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn prompt_arguments_are_sanitised() {
        let ctx = context();
        let mut args = Map::new();
        args.insert(
            "description".to_string(),
            Value::from("fade in<script>alert(1)</script>"),
        );
        let value = ctx.get_prompt("create-animation", &args).unwrap();
        let text = value["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("fade in"));
        assert!(!text.contains("<script>"));
        assert!(text.contains("`.element`"));
    }

    #[test]
    fn unknown_prompt_lists_available() {
        let ctx = context();
        let value = ctx.get_prompt("haiku", &Map::new()).unwrap();
        assert!(value["description"].as_str().unwrap().contains("not found"));
        let text = value["messages"][0]["content"]["text"].as_str().unwrap();
        assert!(text.contains("debug-animation"));
    }

    #[test]
    fn first_sentence_cuts_at_period() {
        assert_eq!(first_sentence("One. Two."), "One.");
        assert_eq!(first_sentence("No period"), "No period");
    }
}
