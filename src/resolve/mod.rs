//! Reconciles a chosen font or bound variable with the style names the host
//! actually offers.

use crate::model::{Font, FontSource, Variable, VariableValue};

/// Offered whenever a bound variable names no known family.
pub const FALLBACK_STYLES: [&str; 18] = [
    "Thin",
    "Thin Italic",
    "ExtraLight",
    "ExtraLight Italic",
    "Light",
    "Light Italic",
    "Regular",
    "Italic",
    "Medium",
    "Medium Italic",
    "SemiBold",
    "SemiBold Italic",
    "Bold",
    "Bold Italic",
    "ExtraBold",
    "ExtraBold Italic",
    "Black",
    "Black Italic",
];

pub fn fallback_styles() -> Vec<String> {
    FALLBACK_STYLES.iter().map(|style| style.to_string()).collect()
}

/// Style names selectable for the current font selection.
pub fn available_styles(
    font_source: FontSource,
    font_family: Option<&str>,
    selected_variable: Option<&Variable>,
    fonts: &[Font],
) -> Vec<String> {
    match font_source {
        FontSource::Type => font_family
            .and_then(|family| fonts.iter().find(|font| font.family == family))
            .map(|font| font.styles.clone())
            .unwrap_or_default(),
        FontSource::Variable => selected_variable
            .map(|variable| match_font(fonts, variable))
            .unwrap_or_default(),
    }
}

/// Family name a variable points at: its textual value, or the leaf of its name.
pub fn candidate_family(variable: &Variable) -> &str {
    variable
        .resolved_value
        .as_ref()
        .and_then(VariableValue::as_text)
        .unwrap_or_else(|| variable.leaf_name())
}

/// Exact family match first, then case-insensitive, then the fallback list.
pub fn match_font(fonts: &[Font], variable: &Variable) -> Vec<String> {
    let candidate = candidate_family(variable);

    if let Some(font) = fonts.iter().find(|font| font.family == candidate) {
        return font.styles.clone();
    }

    let lowered = candidate.to_lowercase();
    if let Some(font) = fonts
        .iter()
        .find(|font| font.family.to_lowercase() == lowered)
    {
        return font.styles.clone();
    }

    tracing::debug!(
        variable = %variable.name,
        candidate,
        "no font matched bound variable; using fallback styles"
    );
    fallback_styles()
}

pub fn search_fonts<'a>(fonts: &'a [Font], query: &str) -> Vec<&'a Font> {
    let needle = query.trim().to_lowercase();
    fonts
        .iter()
        .filter(|font| needle.is_empty() || font.family.to_lowercase().contains(&needle))
        .collect()
}

/// Matches against the variable name and its collection name.
pub fn search_variables<'a>(variables: &'a [Variable], query: &str) -> Vec<&'a Variable> {
    let needle = query.trim().to_lowercase();
    variables
        .iter()
        .filter(|variable| {
            needle.is_empty()
                || variable.name.to_lowercase().contains(&needle)
                || variable
                    .collection_name
                    .as_deref()
                    .is_some_and(|collection| collection.to_lowercase().contains(&needle))
        })
        .collect()
}
