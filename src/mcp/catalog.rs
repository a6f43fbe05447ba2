//! Static listings: tools, resources, resource templates and prompts.

use serde_json::json;

use crate::knowledge::KnowledgeBase;
use crate::mcp::types::{Prompt, PromptArgument, Resource, ResourceTemplate, ToolDefinition};

/// URI scheme for every resource this server exposes.
pub const RESOURCE_SCHEME: &str = "anime://";

/// MIME type of all resource bodies.
pub const MARKDOWN: &str = "text/markdown";

/// Names callable through tools/call.
pub const TOOL_NAMES: [&str; 5] = [
    "get_anime_component",
    "list_anime_components",
    "get_anime_example",
    "search_anime_examples",
    "get_anime_docs",
];

/// Returns `true` if `name` is a tool rather than a listing or resource method.
#[must_use]
pub fn is_tool(name: &str) -> bool {
    TOOL_NAMES.contains(&name)
}

/// Returns the tool definitions for tools/list.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_anime_component".to_string(),
            description: Some(
                "Get documentation for a specific Anime.js API component: description, \
                 syntax, parameters, return value, an example and related components. \
                 Names are matched case-insensitively; 'anime()', 'Timeline' and \
                 'anime.stagger' all work."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "componentName": {
                        "type": "string",
                        "description": "Component name, e.g. 'anime', 'timeline', 'stagger'"
                    }
                },
                "required": ["componentName"]
            }),
        },
        ToolDefinition {
            name: "list_anime_components".to_string(),
            description: Some(
                "List Anime.js API components, optionally filtered by category \
                 (core, timeline, utilities, svg, easings, controls)."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Optional: only list components in this category"
                    }
                }
            }),
        },
        ToolDefinition {
            name: "get_anime_example".to_string(),
            description: Some(
                "Get a complete code example by type, e.g. 'basic-animation', \
                 'stagger-grid', 'timeline-sequence', 'svg-line-drawing'."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "exampleType": {
                        "type": "string",
                        "description": "Example type identifier"
                    }
                },
                "required": ["exampleType"]
            }),
        },
        ToolDefinition {
            name: "search_anime_examples".to_string(),
            description: Some(
                "Search examples and components by keyword. Matches titles, descriptions, \
                 categories, tags and code, case-insensitively."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search text, e.g. 'stagger', 'svg', 'scroll'"
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: "get_anime_docs".to_string(),
            description: Some(
                "Get an Anime.js documentation page by topic, e.g. 'getting-started', \
                 'timeline', 'easing', 'svg'. Unknown topics return the topic list."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Documentation topic identifier"
                    }
                },
                "required": ["topic"]
            }),
        },
    ]
}

/// Returns the concrete resources for resources/list.
#[must_use]
pub fn resources(knowledge: &KnowledgeBase) -> Vec<Resource> {
    let mut resources = vec![
        Resource {
            uri: format!("{RESOURCE_SCHEME}components"),
            name: "Anime.js components".to_string(),
            description: Some("Index of every API component, grouped by category".to_string()),
            mime_type: MARKDOWN,
        },
        Resource {
            uri: format!("{RESOURCE_SCHEME}examples"),
            name: "Anime.js examples".to_string(),
            description: Some("Index of every code example".to_string()),
            mime_type: MARKDOWN,
        },
    ];

    resources.extend(knowledge.docs().iter().map(|doc| Resource {
        uri: format!("{RESOURCE_SCHEME}docs/{}", doc.id),
        name: doc.title.to_string(),
        description: None,
        mime_type: MARKDOWN,
    }));

    resources
}

/// Returns the templates for resources/templates/list.
#[must_use]
pub fn resource_templates() -> Vec<ResourceTemplate> {
    vec![
        ResourceTemplate {
            uri_template: "anime://components/{name}",
            name: "Anime.js component",
            description: "Reference for one API component",
            mime_type: MARKDOWN,
        },
        ResourceTemplate {
            uri_template: "anime://examples/{type}",
            name: "Anime.js example",
            description: "One complete code example",
            mime_type: MARKDOWN,
        },
        ResourceTemplate {
            uri_template: "anime://docs/{topic}",
            name: "Anime.js documentation",
            description: "One documentation topic",
            mime_type: MARKDOWN,
        },
    ]
}

/// Returns the prompts for prompts/list.
#[must_use]
pub fn prompts() -> Vec<Prompt> {
    vec![
        Prompt {
            name: "create-animation",
            description: "Write an Anime.js animation from a plain-language description",
            arguments: vec![
                PromptArgument {
                    name: "description",
                    description: "What the animation should do",
                    required: true,
                },
                PromptArgument {
                    name: "target",
                    description: "CSS selector of the element to animate",
                    required: false,
                },
            ],
        },
        Prompt {
            name: "explain-component",
            description: "Explain how an Anime.js API component works, with examples",
            arguments: vec![PromptArgument {
                name: "component",
                description: "Component name, e.g. 'stagger'",
                required: true,
            }],
        },
        Prompt {
            name: "debug-animation",
            description: "Find out why an Anime.js animation misbehaves",
            arguments: vec![
                PromptArgument {
                    name: "code",
                    description: "The animation code",
                    required: true,
                },
                PromptArgument {
                    name: "issue",
                    description: "What goes wrong",
                    required: false,
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_definitions_valid() {
        let tools = tool_definitions();
        assert_eq!(tools.len(), TOOL_NAMES.len());

        for tool in &tools {
            assert!(is_tool(&tool.name));
            assert!(tool.input_schema.is_object());
            assert!(crate::validation::schema_for(&tool.name).is_some());
        }
    }

    #[test]
    fn listings_are_not_tools() {
        assert!(!is_tool("list_tools"));
        assert!(!is_tool("read_resource"));
    }

    #[test]
    fn every_doc_is_a_resource() {
        let kb = KnowledgeBase::builtin();
        let resources = resources(&kb);
        assert_eq!(resources.len(), kb.docs().len() + 2);
        assert!(resources
            .iter()
            .any(|r| r.uri == "anime://docs/getting-started"));
    }

    #[test]
    fn prompt_names_are_unique() {
        let prompts = prompts();
        let mut names: Vec<_> = prompts.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), prompts.len());
    }
}
