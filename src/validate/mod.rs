//! Field-keyed validation of a typography configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::model::{line_height_to_percentage, FontSource, SizeEntry, TypographyConfig};
use crate::scale::MAX_AUTO_STEPS;

pub const LINE_HEIGHT_MIN_PERCENT: f64 = 50.0;
pub const LINE_HEIGHT_MAX_PERCENT: f64 = 500.0;
pub const LETTER_SPACING_MIN_PERCENT: f64 = -100.0;
pub const LETTER_SPACING_MAX_PERCENT: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationField {
    FontFamily,
    FontVariable,
    Styles,
    LineHeight,
    LetterSpacing,
    ScaleRatio,
    Steps,
    ManualSizes,
}

impl ValidationField {
    /// Key the UI uses to attach the message to a form field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontVariable => "fontVariable",
            Self::Styles => "styles",
            Self::LineHeight => "lineHeight",
            Self::LetterSpacing => "letterSpacing",
            Self::ScaleRatio => "scaleRatio",
            Self::Steps => "steps",
            Self::ManualSizes => "manualSizes",
        }
    }
}

impl fmt::Display for ValidationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValidationField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Validation failures keyed by field. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<ValidationField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ValidationField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: ValidationField) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn get(&self, field: ValidationField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ValidationField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ValidationField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

fn line_height_message() -> String {
    format!(
        "Line height must be between {LINE_HEIGHT_MIN_PERCENT}% and {LINE_HEIGHT_MAX_PERCENT}%"
    )
}

fn letter_spacing_message() -> String {
    format!(
        "Letter spacing must be between {LETTER_SPACING_MIN_PERCENT}% and {LETTER_SPACING_MAX_PERCENT}%"
    )
}

fn line_height_in_range(multiplier: f64) -> bool {
    let percentage = line_height_to_percentage(multiplier);
    (LINE_HEIGHT_MIN_PERCENT..=LINE_HEIGHT_MAX_PERCENT).contains(&percentage)
}

fn letter_spacing_in_range(percentage: f64) -> bool {
    (LETTER_SPACING_MIN_PERCENT..=LETTER_SPACING_MAX_PERCENT).contains(&percentage)
}

fn size_entry_is_valid(entry: &SizeEntry) -> bool {
    let size_ok = entry.is_size_bound() || entry.size > 0.0;
    let line_height_ok = entry.is_line_height_bound() || line_height_in_range(entry.line_height);
    let letter_spacing_ok =
        entry.is_letter_spacing_bound() || letter_spacing_in_range(entry.letter_spacing);

    !entry.name.trim().is_empty()
        && size_ok
        && line_height_ok
        && letter_spacing_ok
        && !entry.styles.is_empty()
}

/// Runs every rule that applies to the config's scaling mode.
pub fn validate(config: &TypographyConfig, available_styles: &[String]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match config.font_source {
        FontSource::Type => {
            let blank = config
                .font_family
                .as_deref()
                .map_or(true, |family| family.trim().is_empty());
            if blank {
                errors.insert(ValidationField::FontFamily, "Font family is required");
            }
        }
        FontSource::Variable => {
            if config.variable_id.is_none() {
                errors.insert(ValidationField::FontVariable, "Select a font variable");
            }
        }
    }

    if config.is_manual_scale() {
        validate_manual(config, available_styles, &mut errors);
    } else {
        validate_auto(config, available_styles, &mut errors);
    }

    if !errors.is_valid() {
        tracing::debug!(count = errors.len(), %errors, "typography config failed validation");
    }
    errors
}

fn validate_auto(
    config: &TypographyConfig,
    available_styles: &[String],
    errors: &mut ValidationErrors,
) {
    if config.has_font_selection() && !available_styles.is_empty() && config.styles.is_empty() {
        errors.insert(ValidationField::Styles, "Select at least one style");
    }

    if config.line_height_variable.is_none() && !line_height_in_range(config.line_height) {
        errors.insert(ValidationField::LineHeight, line_height_message());
    }

    if config.letter_spacing_variable.is_none() && !letter_spacing_in_range(config.letter_spacing)
    {
        errors.insert(ValidationField::LetterSpacing, letter_spacing_message());
    }

    if config.scale_ratio.map_or(true, |ratio| ratio == 0.0) {
        errors.insert(ValidationField::ScaleRatio, "Scale ratio is required");
    }

    if !(1..=MAX_AUTO_STEPS).contains(&config.steps) {
        errors.insert(
            ValidationField::Steps,
            format!("Steps must be between 1 and {MAX_AUTO_STEPS}"),
        );
    }
}

fn validate_manual(
    config: &TypographyConfig,
    available_styles: &[String],
    errors: &mut ValidationErrors,
) {
    if available_styles.is_empty() || config.manual_sizes.is_empty() {
        return;
    }

    if !config.manual_sizes.iter().all(size_entry_is_valid) {
        errors.insert(
            ValidationField::ManualSizes,
            format!(
                "Every size needs a name, a positive size, a line height between \
                 {LINE_HEIGHT_MIN_PERCENT}% and {LINE_HEIGHT_MAX_PERCENT}%, letter spacing \
                 between {LETTER_SPACING_MIN_PERCENT}% and {LETTER_SPACING_MAX_PERCENT}%, \
                 and at least one style"
            ),
        );
    }
}
