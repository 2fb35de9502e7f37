use serde::{Deserialize, Serialize};

/// The data type a host variable evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolvedType {
    String,
    Float,
    Boolean,
    Color,
    /// Any type the host adds later; never bindable.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

const fn opaque() -> f64 {
    1.0
}

/// Current value of a variable in the host's active mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Text(String),
    Number(f64),
    Flag(bool),
    Color(Rgba),
}

impl VariableValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// A host data binding. `id` is the stable identity; `name` may be
/// `/`-namespaced such as `typography/body/family`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub resolved_type: ResolvedType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<VariableValue>,
}

impl Variable {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resolved_type: ResolvedType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resolved_type,
            description: None,
            collection_name: None,
            resolved_value: None,
        }
    }

    pub fn with_value(mut self, value: VariableValue) -> Self {
        self.resolved_value = Some(value);
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection_name = Some(collection.into());
        self
    }

    /// Last `/`-delimited segment of the name.
    pub fn leaf_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(self.name.as_str())
    }

    pub const fn binds_font_family(&self) -> bool {
        matches!(self.resolved_type, ResolvedType::String)
    }

    pub const fn binds_number(&self) -> bool {
        matches!(self.resolved_type, ResolvedType::Float)
    }
}

/// Variables that can drive a font family.
pub fn string_variables(variables: &[Variable]) -> Vec<&Variable> {
    variables
        .iter()
        .filter(|variable| variable.binds_font_family())
        .collect()
}

/// Variables that can drive size, line height or letter spacing.
pub fn float_variables(variables: &[Variable]) -> Vec<&Variable> {
    variables
        .iter()
        .filter(|variable| variable.binds_number())
        .collect()
}
