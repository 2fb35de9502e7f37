use serde::{Deserialize, Serialize};

use super::units::line_height_from_percentage;

pub const DEFAULT_INITIAL_SIZE: f64 = 12.0;
pub const DEFAULT_STEPS: u32 = 9;
pub const DEFAULT_LINE_HEIGHT_PERCENT: f64 = 120.0;
pub const DEFAULT_LETTER_SPACING: f64 = 0.0;
pub const DEFAULT_SCALE_RATIO: f64 = 1.2;

/// Where the typeface comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    #[default]
    Type,
    Variable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingMode {
    #[default]
    Auto,
    Manual,
    Tailwind,
}

impl ScalingMode {
    /// Whether sizes come from the explicit manual list instead of the ratio.
    pub const fn is_manual_scale(self) -> bool {
        match self {
            Self::Auto => false,
            Self::Manual | Self::Tailwind => true,
        }
    }
}

/// One rung of a manual scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeEntry {
    pub id: String,
    pub name: String,
    pub size: f64,
    /// Multiplier, e.g. `1.2`.
    pub line_height: f64,
    /// Percent of the font size, signed.
    pub letter_spacing: f64,
    pub styles: Vec<String>,
    #[serde(default)]
    pub text_case: TextCase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing_variable: Option<String>,
}

impl SizeEntry {
    pub fn new(id: impl Into<String>, size: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            size,
            line_height: line_height_from_percentage(DEFAULT_LINE_HEIGHT_PERCENT),
            letter_spacing: DEFAULT_LETTER_SPACING,
            styles: Vec::new(),
            text_case: TextCase::default(),
            size_variable: None,
            line_height_variable: None,
            letter_spacing_variable: None,
        }
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_size_bound(&self) -> bool {
        self.size_variable.is_some()
    }

    pub fn is_line_height_bound(&self) -> bool {
        self.line_height_variable.is_some()
    }

    pub fn is_letter_spacing_bound(&self) -> bool {
        self.letter_spacing_variable.is_some()
    }
}

/// Values a fresh configuration starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorDefaults {
    pub initial_size: f64,
    pub steps: u32,
    pub line_height_percent: f64,
    pub letter_spacing: f64,
    pub scale_ratio: f64,
    /// Ratio applied by each manual "add size" step.
    pub manual_ratio: f64,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            steps: DEFAULT_STEPS,
            line_height_percent: DEFAULT_LINE_HEIGHT_PERCENT,
            letter_spacing: DEFAULT_LETTER_SPACING,
            scale_ratio: DEFAULT_SCALE_RATIO,
            manual_ratio: DEFAULT_SCALE_RATIO,
        }
    }
}

/// Root configuration of one typography style system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    pub name: String,
    pub font_source: FontSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_id: Option<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    pub initial_size: f64,
    pub steps: u32,
    /// Multiplier, e.g. `1.2`.
    pub line_height: f64,
    pub letter_spacing: f64,
    #[serde(default)]
    pub text_case: TextCase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing_variable: Option<String>,
    #[serde(default)]
    pub scaling_mode: ScalingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_ratio: Option<f64>,
    #[serde(default)]
    pub manual_sizes: Vec<SizeEntry>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self::with_defaults(&EditorDefaults::default())
    }
}

impl TypographyConfig {
    pub fn with_defaults(defaults: &EditorDefaults) -> Self {
        let line_height = line_height_from_percentage(defaults.line_height_percent);
        let mut first_size = SizeEntry::new("1", defaults.initial_size);
        first_size.line_height = line_height;
        first_size.letter_spacing = defaults.letter_spacing;

        Self {
            name: String::new(),
            font_source: FontSource::Type,
            font_family: None,
            variable_id: None,
            styles: Vec::new(),
            initial_size: defaults.initial_size,
            steps: defaults.steps,
            line_height,
            letter_spacing: defaults.letter_spacing,
            text_case: TextCase::default(),
            line_height_variable: None,
            letter_spacing_variable: None,
            scaling_mode: ScalingMode::Auto,
            scale_ratio: Some(defaults.scale_ratio),
            manual_sizes: vec![first_size],
        }
    }

    pub const fn is_manual_scale(&self) -> bool {
        self.scaling_mode.is_manual_scale()
    }

    /// Whether a typeface has been picked for the active source.
    pub fn has_font_selection(&self) -> bool {
        match self.font_source {
            FontSource::Type => self
                .font_family
                .as_deref()
                .is_some_and(|family| !family.trim().is_empty()),
            FontSource::Variable => self.variable_id.is_some(),
        }
    }

    /// Switches the source and drops the identifier of the other one.
    pub fn set_font_source(&mut self, source: FontSource) {
        self.font_source = source;
        match source {
            FontSource::Type => self.variable_id = None,
            FontSource::Variable => self.font_family = None,
        }
    }

    pub fn manual_size(&self, id: &str) -> Option<&SizeEntry> {
        self.manual_sizes.iter().find(|entry| entry.id == id)
    }

    pub fn apply(&mut self, patch: TypographyConfigPatch) {
        let TypographyConfigPatch {
            name,
            font_source,
            font_family,
            variable_id,
            styles,
            initial_size,
            steps,
            line_height,
            letter_spacing,
            text_case,
            line_height_variable,
            letter_spacing_variable,
            scale_ratio,
            manual_sizes,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(font_family) = font_family {
            self.font_family = font_family;
        }
        if let Some(variable_id) = variable_id {
            self.variable_id = variable_id;
        }
        if let Some(source) = font_source {
            self.set_font_source(source);
        }
        if let Some(styles) = styles {
            self.styles = styles;
        }
        if let Some(initial_size) = initial_size {
            self.initial_size = initial_size;
        }
        if let Some(steps) = steps {
            self.steps = steps;
        }
        if let Some(line_height) = line_height {
            self.line_height = line_height;
        }
        if let Some(letter_spacing) = letter_spacing {
            self.letter_spacing = letter_spacing;
        }
        if let Some(text_case) = text_case {
            self.text_case = text_case;
        }
        if let Some(line_height_variable) = line_height_variable {
            self.line_height_variable = line_height_variable;
        }
        if let Some(letter_spacing_variable) = letter_spacing_variable {
            self.letter_spacing_variable = letter_spacing_variable;
        }
        if let Some(scale_ratio) = scale_ratio {
            self.scale_ratio = scale_ratio;
        }
        if let Some(manual_sizes) = manual_sizes {
            self.manual_sizes = manual_sizes;
        }
    }
}

/// Partial update merged shallowly into a [`TypographyConfig`].
///
/// Outer `None` leaves a field untouched; for optional fields the inner
/// `None` clears it. The scaling mode is changed through its own action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypographyConfigPatch {
    pub name: Option<String>,
    pub font_source: Option<FontSource>,
    pub font_family: Option<Option<String>>,
    pub variable_id: Option<Option<String>>,
    pub styles: Option<Vec<String>>,
    pub initial_size: Option<f64>,
    pub steps: Option<u32>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
    pub text_case: Option<TextCase>,
    pub line_height_variable: Option<Option<String>>,
    pub letter_spacing_variable: Option<Option<String>>,
    pub scale_ratio: Option<Option<f64>>,
    pub manual_sizes: Option<Vec<SizeEntry>>,
}

impl TypographyConfigPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn font_family(family: impl Into<String>) -> Self {
        Self {
            font_source: Some(FontSource::Type),
            font_family: Some(Some(family.into())),
            ..Self::default()
        }
    }

    pub fn line_height_percent(percentage: f64) -> Self {
        Self {
            line_height: Some(line_height_from_percentage(percentage)),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_new_editor_values() {
        let config = TypographyConfig::default();
        assert_eq!(config.initial_size, 12.0);
        assert_eq!(config.steps, 9);
        assert_eq!(config.line_height, 1.2);
        assert_eq!(config.scale_ratio, Some(1.2));
        assert_eq!(config.scaling_mode, ScalingMode::Auto);
        assert!(!config.is_manual_scale());
        assert_eq!(config.manual_sizes.len(), 1);
        assert_eq!(config.manual_sizes[0].id, "1");
        assert_eq!(config.manual_sizes[0].name, "1");
        assert!(config.manual_sizes[0].styles.is_empty());
    }

    #[test]
    fn manual_scale_flag_is_projection_of_mode() {
        assert!(!ScalingMode::Auto.is_manual_scale());
        assert!(ScalingMode::Manual.is_manual_scale());
        assert!(ScalingMode::Tailwind.is_manual_scale());
    }

    #[test]
    fn switching_font_source_clears_the_other_identifier() {
        let mut config = TypographyConfig::default();
        config.apply(TypographyConfigPatch::font_family("Inter"));
        assert_eq!(config.font_family.as_deref(), Some("Inter"));

        config.apply(TypographyConfigPatch {
            font_source: Some(FontSource::Variable),
            variable_id: Some(Some("var-1".to_string())),
            ..TypographyConfigPatch::default()
        });
        assert_eq!(config.font_source, FontSource::Variable);
        assert_eq!(config.variable_id.as_deref(), Some("var-1"));
        assert!(config.font_family.is_none());

        config.set_font_source(FontSource::Type);
        assert!(config.variable_id.is_none());
    }

    #[test]
    fn patch_merge_leaves_untouched_fields_alone() {
        let mut config = TypographyConfig::default();
        config.apply(TypographyConfigPatch {
            name: Some("Body".to_string()),
            steps: Some(5),
            scale_ratio: Some(None),
            ..TypographyConfigPatch::default()
        });

        assert_eq!(config.name, "Body");
        assert_eq!(config.steps, 5);
        assert_eq!(config.scale_ratio, None);
        assert_eq!(config.initial_size, 12.0);
        assert_eq!(config.line_height, 1.2);
    }

    #[test]
    fn config_serializes_with_host_field_names() {
        let mut config = TypographyConfig::default();
        config.apply(TypographyConfigPatch::font_family("Inter"));
        let value = serde_json::to_value(&config).expect("config should serialize");

        assert_eq!(value["fontSource"], "type");
        assert_eq!(value["fontFamily"], "Inter");
        assert_eq!(value["scalingMode"], "auto");
        assert_eq!(value["textCase"], "ORIGINAL");
        assert_eq!(value["manualSizes"][0]["lineHeight"], 1.2);
        assert!(value.get("variableId").is_none());
    }
}
