use thiserror::Error;

pub type Result<T, E = ConsultationError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ConsultationError {
    #[error("Invalid request: {0}")]
    RequestValidation(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Sampling request failed: {0}")]
    UpstreamCall(String),

    #[error("No response received from sampling request")]
    NoResponse,

    #[error("Invalid sampling response - no content received")]
    MissingContent,

    #[error("Invalid sampling response format - no text content found")]
    InvalidFormat,

    #[error("Empty response received from sampling")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConsultationError {
    pub fn request_validation(msg: impl Into<String>) -> Self {
        Self::RequestValidation(msg.into())
    }

    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    pub fn upstream_call(msg: impl Into<String>) -> Self {
        Self::UpstreamCall(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Taxonomy label shown as the error type in error envelopes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequestValidation(_) | Self::UnknownTool(_) => "RequestValidationError",
            Self::UpstreamCall(_) => "UpstreamCallError",
            Self::NoResponse | Self::MissingContent | Self::InvalidFormat | Self::EmptyResponse => {
                "UpstreamFormatError"
            }
            Self::Config(_) | Self::Io(_) | Self::Serialization(_) => "ConfigurationError",
        }
    }
}

impl From<ConsultationError> for rmcp::ErrorData {
    fn from(err: ConsultationError) -> Self {
        match err {
            ConsultationError::UnknownTool(_) | ConsultationError::RequestValidation(_) => {
                rmcp::ErrorData::invalid_params(err.to_string(), None)
            }
            _ => rmcp::ErrorData::internal_error(err.to_string(), None),
        }
    }
}
