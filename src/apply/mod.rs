//! Hands a validated configuration to the host.

use crate::bridge::{ApplyResponse, HostBridge};
use crate::error::{EngineError, EngineResult};
use crate::state::TypographyEditor;
use crate::validate::validate;

/// Styles the host reported as created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub styles: Vec<String>,
    pub message: Option<String>,
}

/// Validates the editor's config and, when valid, asks the host to create
/// the typography system. Never retries; the caller re-submits.
pub fn submit<B: HostBridge + ?Sized>(
    editor: &TypographyEditor,
    bridge: &B,
) -> EngineResult<ApplyReport> {
    let config = editor.config();
    let errors = validate(config, editor.available_styles());
    if !errors.is_valid() {
        tracing::debug!(name = %config.name, %errors, "refusing to submit invalid config");
        return Err(EngineError::Invalid(errors));
    }

    tracing::info!(
        name = %config.name,
        mode = ?config.scaling_mode,
        "submitting typography system"
    );
    let response = match bridge.create_typography_system(config) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(%err, "createTypographySystem failed");
            bridge.notify(&format!("Failed to create typography styles: {err}"));
            return Err(EngineError::Bridge(err));
        }
    };

    let ApplyResponse {
        success,
        styles,
        message,
    } = response;
    if !success {
        let message = message.unwrap_or_else(|| "unknown error".to_string());
        tracing::warn!(%message, "host rejected typography system");
        bridge.notify(&message);
        return Err(EngineError::Rejected { message });
    }

    bridge.notify(
        message
            .as_deref()
            .unwrap_or(&format!("Created {} text styles", styles.len())),
    );
    Ok(ApplyReport { styles, message })
}
