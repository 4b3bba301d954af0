use chrono::{DateTime, Utc};

use crate::request::ConsultationRequest;
use crate::sampling::SamplingReply;
use crate::ConsultationError;

pub const DEFAULT_MODEL_LABEL: &str = "Advanced Architecture AI";
pub const DEFAULT_STOP_LABEL: &str = "Complete";

/// Wrap generated guidance with a title, the echoed request and reply metadata.
pub fn success(
    request: &ConsultationRequest,
    guidance: &str,
    reply: &SamplingReply,
    generated_at: DateTime<Utc>,
) -> String {
    format!(
        "# 🏗️ Senior Software Architect Consultation\n\
         \n\
         **AI-Enhanced Architecture Expert Consultation**\n\
         **Question:** {question}\n\
         **Domain:** {domain_upper}\n\
         **Complexity:** {complexity_upper}\n\
         **Generated:** {date}\n\
         \n\
         ---\n\
         \n\
         {guidance}\n\
         \n\
         ---\n\
         \n\
         ## 📊 Consultation Metadata\n\
         - **Consultation Method:** MCP Sampling (AI-Enhanced)\n\
         - **Expert Model:** {model}\n\
         - **Analysis Depth:** {depth}\n\
         - **Architectural Focus:** {domain} systems with {complexity} complexity\n\
         - **Input Parameters:**\n\
         \x20 - Question: {question}\n\
         \x20 - Context: {context}\n\
         \x20 - Domain: {domain}\n\
         \x20 - Complexity: {complexity}\n\
         \n\
         *This architectural guidance was generated using MCP Sampling capabilities with expert-level AI models specialized in software architecture and system design.*\n",
        question = request.question,
        context = request.context,
        domain = request.domain,
        complexity = request.complexity,
        domain_upper = request.domain.to_uppercase(),
        complexity_upper = request.complexity.to_uppercase(),
        date = generated_at.format("%Y-%m-%d"),
        guidance = guidance,
        model = reply.model.as_deref().unwrap_or(DEFAULT_MODEL_LABEL),
        depth = reply.stop_reason.as_deref().unwrap_or(DEFAULT_STOP_LABEL),
    )
}

/// Describe a failed consultation with troubleshooting guidance.
pub fn failure(
    request: &ConsultationRequest,
    error: &ConsultationError,
    failed_at: DateTime<Utc>,
) -> String {
    format!(
        "# ❌ Architecture Consultation Error\n\
         \n\
         **Error Details:**\n\
         - **Error Type:** {kind}\n\
         - **Message:** {message}\n\
         - **Timestamp:** {timestamp}\n\
         \n\
         **Requested Consultation:**\n\
         - **Question:** {question}\n\
         - **Domain:** {domain}\n\
         - **Complexity:** {complexity}\n\
         - **Context:** {context}\n\
         \n\
         **Troubleshooting:**\n\
         1. Ensure MCP Sampling is enabled in your client\n\
         2. Verify client has access to LLM models\n\
         3. Check network connectivity and API quotas\n\
         4. Validate input parameters are within acceptable limits\n\
         \n\
         **Alternative Solutions:**\n\
         - Try rephrasing your architecture question\n\
         - Reduce complexity if the request is too large\n\
         - Check with your MCP client configuration\n\
         \n\
         Please ensure MCP Sampling is properly configured and try again.",
        kind = error.kind(),
        message = error,
        timestamp = failed_at.to_rfc3339(),
        question = request.question,
        domain = request.domain,
        complexity = request.complexity,
        context = request.context,
    )
}
