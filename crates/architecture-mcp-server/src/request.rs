use rmcp::model::JsonObject;
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde_json::Value;

use crate::{ConsultationError, Result};

pub const DEFAULT_CONTEXT: &str = "Not specified";
pub const DEFAULT_DOMAIN: &str = "web";
pub const DEFAULT_COMPLEXITY: &str = "moderate";

pub const DOMAINS: [&str; 8] = [
    "web",
    "mobile",
    "microservices",
    "distributed",
    "cloud",
    "enterprise",
    "embedded",
    "data",
];

pub const COMPLEXITIES: [&str; 4] = ["simple", "moderate", "complex", "enterprise"];

/// Tool arguments as received from the host, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationArgs {
    pub question: Option<String>,
    pub context: Option<String>,
    pub domain: Option<String>,
    pub complexity: Option<String>,
}

impl ConsultationArgs {
    /// Decode field by field. String fields are kept even when another field
    /// is mistyped; the first mistyped field is returned as the error.
    pub fn from_arguments(arguments: Option<JsonObject>) -> (Self, Option<ConsultationError>) {
        let arguments = arguments.unwrap_or_default();
        let mut first_error = None;

        let mut field = |name: &str| match arguments.get(name) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(other) => {
                if first_error.is_none() {
                    first_error = Some(ConsultationError::request_validation(format!(
                        "Parameter '{}' must be a string, got {}",
                        name,
                        json_type_name(other)
                    )));
                }
                None
            }
        };

        let args = Self {
            question: field("question"),
            context: field("context"),
            domain: field("domain"),
            complexity: field("complexity"),
        };

        (args, first_error)
    }

    /// Check the request before it is forwarded upstream.
    pub fn validate(&self, strict_options: bool) -> Result<()> {
        match self.question.as_deref() {
            Some(q) if !q.trim().is_empty() => {}
            _ => {
                return Err(ConsultationError::request_validation(
                    "Missing required parameter: question",
                ))
            }
        }

        if strict_options {
            if let Some(domain) = self.domain.as_deref() {
                if !DOMAINS.contains(&domain) {
                    return Err(ConsultationError::request_validation(format!(
                        "Unsupported domain '{}', expected one of: {}",
                        domain,
                        DOMAINS.join(", ")
                    )));
                }
            }
            if let Some(complexity) = self.complexity.as_deref() {
                if !COMPLEXITIES.contains(&complexity) {
                    return Err(ConsultationError::request_validation(format!(
                        "Unsupported complexity '{}', expected one of: {}",
                        complexity,
                        COMPLEXITIES.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }
}

// Sanitized, with defaults applied. Doubles as the advertised input schema.
#[derive(Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct ConsultationRequest {
    /// The architecture or design question you need guidance on
    pub question: String,
    /// Additional context about your system, technology stack, or constraints
    #[serde(default = "default_context")]
    pub context: String,
    /// The domain or type of system architecture
    #[serde(default = "default_domain")]
    #[schemars(schema_with = "domain_schema")]
    pub domain: String,
    /// The complexity level of the system or problem
    #[serde(default = "default_complexity")]
    #[schemars(schema_with = "complexity_schema")]
    pub complexity: String,
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

fn default_domain() -> String {
    DEFAULT_DOMAIN.to_string()
}

fn default_complexity() -> String {
    DEFAULT_COMPLEXITY.to_string()
}

fn domain_schema(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "enum": DOMAINS,
        "description": "The domain or type of system architecture"
    })
}

fn complexity_schema(_generator: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "string",
        "enum": COMPLEXITIES,
        "description": "The complexity level of the system or problem"
    })
}

/// Remove `<` and `>`; every other character is kept.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

impl From<ConsultationArgs> for ConsultationRequest {
    fn from(args: ConsultationArgs) -> Self {
        Self {
            question: sanitize(args.question.as_deref().unwrap_or_default()),
            context: sanitize(args.context.as_deref().unwrap_or(DEFAULT_CONTEXT)),
            domain: args.domain.unwrap_or_else(default_domain),
            complexity: args.complexity.unwrap_or_else(default_complexity),
        }
    }
}

impl ConsultationRequest {
    pub fn is_known_domain(&self) -> bool {
        DOMAINS.contains(&self.domain.as_str())
    }

    pub fn is_known_complexity(&self) -> bool {
        COMPLEXITIES.contains(&self.complexity.as_str())
    }
}
