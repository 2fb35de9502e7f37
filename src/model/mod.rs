//! Typed shape of a typography style configuration and the host data it
//! is built from.

mod font;
mod typography;
mod units;
mod variable;

pub use font::Font;
pub use typography::{
    EditorDefaults, FontSource, ScalingMode, SizeEntry, TextCase, TypographyConfig,
    TypographyConfigPatch, DEFAULT_INITIAL_SIZE, DEFAULT_LETTER_SPACING,
    DEFAULT_LINE_HEIGHT_PERCENT, DEFAULT_SCALE_RATIO, DEFAULT_STEPS,
};
pub use units::{line_height_from_percentage, line_height_to_percentage};
pub use variable::{float_variables, string_variables, ResolvedType, Rgba, Variable, VariableValue};
