use chrono::Utc;
use rmcp::model::{CallToolResult, Content, JsonObject};
use tracing::{error, info, warn};

use crate::config::ArchitectureServerConfig;
use crate::envelope;
use crate::prompt::render_prompt;
use crate::request::{ConsultationArgs, ConsultationRequest};
use crate::sampling::{SamplingHost, SamplingRequest};
use crate::{ConsultationError, Result};

/// Text returned to the caller; `is_error` flags a failure envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationResult {
    pub text: String,
    pub is_error: bool,
}

impl ConsultationResult {
    pub fn success(text: String) -> Self {
        Self {
            text,
            is_error: false,
        }
    }

    pub fn failure(text: String) -> Self {
        Self {
            text,
            is_error: true,
        }
    }

    pub fn into_call_tool_result(self) -> CallToolResult {
        let content = vec![Content::text(self.text)];
        if self.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

/// Stateless relay between consultation requests and a sampling host.
#[derive(Debug, Clone, Default)]
pub struct ConsultationRelay {
    config: ArchitectureServerConfig,
}

impl ConsultationRelay {
    pub fn new(config: ArchitectureServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ArchitectureServerConfig {
        &self.config
    }

    /// Decode raw tool arguments and consult. Never fails.
    pub async fn consult_arguments<H>(
        &self,
        host: &H,
        arguments: Option<JsonObject>,
    ) -> ConsultationResult
    where
        H: SamplingHost + ?Sized,
    {
        match ConsultationArgs::from_arguments(arguments) {
            (args, None) => self.consult(host, args).await,
            (args, Some(e)) => self.fail(&ConsultationRequest::from(args), e),
        }
    }

    /// Run one consultation. Every failure becomes a flagged envelope.
    pub async fn consult<H>(&self, host: &H, args: ConsultationArgs) -> ConsultationResult
    where
        H: SamplingHost + ?Sized,
    {
        let validation = args.validate(self.config.validation.strict_options);
        let request = ConsultationRequest::from(args);

        info!(
            domain = %request.domain,
            complexity = %request.complexity,
            "🏗️ Requesting architecture consultation"
        );

        if validation.is_ok() {
            if !request.is_known_domain() {
                warn!("Domain '{}' is not one of the advertised options", request.domain);
            }
            if !request.is_known_complexity() {
                warn!(
                    "Complexity '{}' is not one of the advertised options",
                    request.complexity
                );
            }
        }

        let outcome = match validation {
            Ok(()) => self.sample(host, &request).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(text) => ConsultationResult::success(text),
            Err(e) => self.fail(&request, e),
        }
    }

    async fn sample<H>(&self, host: &H, request: &ConsultationRequest) -> Result<String>
    where
        H: SamplingHost + ?Sized,
    {
        let sampling_request = SamplingRequest::new(render_prompt(request), &self.config.sampling);

        info!(
            max_tokens = sampling_request.max_tokens,
            temperature = sampling_request.temperature,
            "🔍 Sending architecture consultation request to host"
        );

        let reply = host
            .sample(sampling_request)
            .await?
            .ok_or(ConsultationError::NoResponse)?;

        info!("✅ Architecture consultation received");

        let guidance = reply.text()?;
        Ok(envelope::success(request, &guidance, &reply, Utc::now()))
    }

    fn fail(&self, request: &ConsultationRequest, err: ConsultationError) -> ConsultationResult {
        error!("❌ Architecture consultation failed ({}): {}", err.kind(), err);
        ConsultationResult::failure(envelope::failure(request, &err, Utc::now()))
    }
}
