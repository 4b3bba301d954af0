use crate::request::ConsultationRequest;

/// Render the nine-section consultation prompt sent to the host's model.
pub fn render_prompt(request: &ConsultationRequest) -> String {
    format!(
        "You are a Senior Software Architect with 15+ years of experience across various domains and technologies. \
         Please provide expert guidance on the following architecture question:\n\
         \n\
         **Question:** {question}\n\
         **Domain:** {domain} systems\n\
         **Complexity Level:** {complexity}\n\
         **Additional Context:** {context}\n\
         \n\
         Please structure your response with the following sections:\n\
         1. **Problem Analysis** - Break down the architectural challenge\n\
         2. **Recommended Architecture Pattern** - Suggest the most suitable pattern(s)\n\
         3. **Technical Implementation Strategy** - Specific technical guidance\n\
         4. **Design Principles & Best Practices** - Core principles to follow\n\
         5. **Technology Stack Recommendations** - Suggest appropriate technologies\n\
         6. **Quality Attributes** - Address performance, security, maintainability, scalability\n\
         7. **Risk Assessment** - Identify potential risks and mitigation strategies\n\
         8. **Implementation Roadmap** - Phased approach to implementation\n\
         9. **Code Examples** - Provide relevant code snippets or patterns if applicable\n\
         \n\
         Focus on practical, actionable advice that considers real-world constraints. \
         Be specific about trade-offs and explain your reasoning.",
        question = request.question,
        domain = request.domain,
        complexity = request.complexity,
        context = request.context,
    )
}
