use tracing::{debug, error};

use crate::error::AppError;
use crate::services::gemini::TextGenerator;
use crate::services::persona::{MODEL_NAME, build_prompt};

/// Run one relay turn for a message that is already trimmed and non-empty.
///
/// The reply is the response text, or the whole response rendered as JSON
/// when the model returned no (or empty) text.
pub async fn generate_reply(
    generator: &dyn TextGenerator,
    user_msg: &str,
) -> Result<String, AppError> {
    let prompt = build_prompt(user_msg);

    let response = generator
        .generate_content(MODEL_NAME, &prompt)
        .await
        .inspect_err(|e| error!(error = %e, "generation failed"))?;

    match response.text() {
        Some(text) if !text.is_empty() => Ok(text),
        _ => {
            debug!("response carried no text, falling back to raw rendering");
            Ok(response.to_string())
        }
    }
}
