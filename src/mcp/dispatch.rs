//! Request dispatch pipeline.
//!
//! Every request goes through the same stages:
//!
//! 1. Validate params against the method's schema (strings sanitised)
//! 2. Parse into a typed [`Request`]
//! 3. Run the handler under the `external` circuit breaker
//!
//! Handlers consult the cache themselves. A validation failure or unknown
//! method is rejected before the breaker is touched, so bad client input
//! never trips it.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::breaker::{BreakerConfig, BreakerError, CircuitBreaker};
use crate::cache::ExpiringCache;
use crate::config::{CacheTtls, Config};
use crate::error::{DispatchError, HandlerError};
use crate::knowledge::KnowledgeBase;
use crate::mcp::handlers::HandlerContext;
use crate::validation::{self, ValidationError, Violation};

/// Name of the breaker guarding handler execution.
pub const EXTERNAL_BREAKER: &str = "external";

/// Arguments of `get_anime_component`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentArgs {
    /// Component to describe.
    pub component_name: String,
}

/// Arguments of `list_anime_components`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListArgs {
    /// Optional category filter.
    #[serde(default)]
    pub category: Option<String>,
}

/// Arguments of `get_anime_example`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleArgs {
    /// Example identifier.
    pub example_type: String,
}

/// Arguments of `search_anime_examples`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,
}

/// Arguments of `get_anime_docs`.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsArgs {
    /// Topic identifier.
    pub topic: String,
}

/// Arguments of `read_resource`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResourceArgs {
    /// Resource URI.
    pub uri: String,
}

/// Arguments of `get_prompt`.
#[derive(Debug, Clone, Deserialize)]
pub struct PromptArgs {
    /// Prompt name.
    pub name: String,
    /// Prompt arguments. Non-string values are ignored.
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

/// A validated, typed request.
#[derive(Debug, Clone)]
pub enum Request {
    /// `get_anime_component`
    GetComponent(ComponentArgs),
    /// `list_anime_components`
    ListComponents(ListArgs),
    /// `get_anime_example`
    GetExample(ExampleArgs),
    /// `search_anime_examples`
    SearchExamples(SearchArgs),
    /// `get_anime_docs`
    GetDocs(DocsArgs),
    /// `list_tools`
    ListTools,
    /// `list_resources`
    ListResources,
    /// `list_resource_templates`
    ListResourceTemplates,
    /// `list_prompts`
    ListPrompts,
    /// `read_resource`
    ReadResource(ReadResourceArgs),
    /// `get_prompt`
    GetPrompt(PromptArgs),
}

impl Request {
    /// Parses already-validated params for `method`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownMethod`] for methods with no handler,
    /// and [`DispatchError::Validation`] if the params do not deserialise.
    pub fn parse(method: &str, params: Value) -> Result<Self, DispatchError> {
        fn args<T: for<'de> Deserialize<'de>>(
            method: &str,
            params: Value,
        ) -> Result<T, DispatchError> {
            serde_json::from_value(params).map_err(|e| {
                DispatchError::Validation(ValidationError {
                    method: method.to_string(),
                    violations: vec![Violation {
                        path: String::new(),
                        message: e.to_string(),
                    }],
                })
            })
        }

        Ok(match method {
            "get_anime_component" => Self::GetComponent(args(method, params)?),
            "list_anime_components" => Self::ListComponents(args(method, params)?),
            "get_anime_example" => Self::GetExample(args(method, params)?),
            "search_anime_examples" => Self::SearchExamples(args(method, params)?),
            "get_anime_docs" => Self::GetDocs(args(method, params)?),
            "list_tools" => Self::ListTools,
            "list_resources" => Self::ListResources,
            "list_resource_templates" => Self::ListResourceTemplates,
            "list_prompts" => Self::ListPrompts,
            "read_resource" => Self::ReadResource(args(method, params)?),
            "get_prompt" => Self::GetPrompt(args(method, params)?),
            _ => {
                return Err(DispatchError::UnknownMethod {
                    method: method.to_string(),
                })
            }
        })
    }

    /// Returns the method name this request was parsed from.
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::GetComponent(_) => "get_anime_component",
            Self::ListComponents(_) => "list_anime_components",
            Self::GetExample(_) => "get_anime_example",
            Self::SearchExamples(_) => "search_anime_examples",
            Self::GetDocs(_) => "get_anime_docs",
            Self::ListTools => "list_tools",
            Self::ListResources => "list_resources",
            Self::ListResourceTemplates => "list_resource_templates",
            Self::ListPrompts => "list_prompts",
            Self::ReadResource(_) => "read_resource",
            Self::GetPrompt(_) => "get_prompt",
        }
    }

    fn run(&self, ctx: &HandlerContext) -> Result<Value, HandlerError> {
        match self {
            Self::GetComponent(a) => ctx.get_component(&a.component_name),
            Self::ListComponents(a) => ctx.list_components(a.category.as_deref()),
            Self::GetExample(a) => ctx.get_example(&a.example_type),
            Self::SearchExamples(a) => ctx.search_examples(&a.query),
            Self::GetDocs(a) => ctx.get_docs(&a.topic),
            Self::ListTools => ctx.list_tools(),
            Self::ListResources => ctx.list_resources(),
            Self::ListResourceTemplates => ctx.list_resource_templates(),
            Self::ListPrompts => ctx.list_prompts(),
            Self::ReadResource(a) => ctx.read_resource(&a.uri),
            Self::GetPrompt(a) => {
                let empty = Map::new();
                ctx.get_prompt(&a.name, a.arguments.as_ref().unwrap_or(&empty))
            }
        }
    }
}

/// Routes method calls through validation, the breaker and the handlers.
pub struct Dispatcher {
    context: HandlerContext,
    breaker: CircuitBreaker,
}

impl Dispatcher {
    /// Creates a dispatcher using the cache and breaker settings in `config`.
    #[must_use]
    pub fn new(knowledge: KnowledgeBase, config: &Config) -> Self {
        Self::with_settings(
            knowledge,
            config.cache.ttls(),
            config.breaker.to_breaker_config(),
        )
    }

    /// Creates a dispatcher from explicit settings.
    #[must_use]
    pub fn with_settings(
        knowledge: KnowledgeBase,
        ttls: CacheTtls,
        breaker: BreakerConfig,
    ) -> Self {
        Self {
            context: HandlerContext::new(knowledge, ttls),
            breaker: CircuitBreaker::new(EXTERNAL_BREAKER, breaker),
        }
    }

    /// The response cache.
    #[must_use]
    pub const fn cache(&self) -> &ExpiringCache<String> {
        self.context.cache()
    }

    /// The breaker guarding handler execution.
    #[must_use]
    pub const fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Dispatches `method` with `params`.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] if validation fails, the method is
    /// unknown, the breaker is open, or the handler fails. Each failure is
    /// logged once here.
    pub async fn dispatch(
        &self,
        method: &str,
        params: Option<&Value>,
    ) -> Result<Value, DispatchError> {
        debug!(method, "Dispatching request");

        let result = self.dispatch_inner(method, params).await;
        if let Err(e) = &result {
            match e {
                DispatchError::Validation(_)
                | DispatchError::UnknownMethod { .. }
                | DispatchError::BreakerOpen { .. } => warn!(method, error = %e, "Request rejected"),
                DispatchError::Handler { .. } => error!(method, error = %e, "Request failed"),
            }
        }
        result
    }

    async fn dispatch_inner(
        &self,
        method: &str,
        params: Option<&Value>,
    ) -> Result<Value, DispatchError> {
        let params = validation::validate(method, params)?;
        let request = Request::parse(method, params)?;
        self.guarded(request.method(), |ctx| request.run(ctx)).await
    }

    /// Runs `handler` under the breaker, mapping its outcome.
    pub(crate) async fn guarded<F>(&self, method: &str, handler: F) -> Result<Value, DispatchError>
    where
        F: FnOnce(&HandlerContext) -> Result<Value, HandlerError>,
    {
        let ctx = &self.context;
        self.breaker
            .call(|| async move { handler(ctx) })
            .await
            .map_err(|e| match e {
                BreakerError::Open { name } => DispatchError::BreakerOpen { name },
                BreakerError::Failed(source) => DispatchError::Handler {
                    method: method.to_string(),
                    source,
                },
            })
    }
}
