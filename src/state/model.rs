use std::collections::BTreeSet;

use super::action::Popover;
use crate::model::{EditorDefaults, ScalingMode, TypographyConfig, Variable};
use crate::validate::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopoverStates {
    open: BTreeSet<Popover>,
}

impl PopoverStates {
    pub fn is_open(&self, popover: &Popover) -> bool {
        self.open.contains(popover)
    }

    pub fn set(&mut self, popover: Popover, open: bool) {
        if open {
            self.open.insert(popover);
        } else {
            self.open.remove(&popover);
        }
    }

    /// Drops popovers tied to a manual size that no longer exists.
    pub fn forget_manual_size(&mut self, id: &str) {
        self.open.retain(|popover| match popover {
            Popover::ManualSizeStyles(entry) | Popover::ManualSizeVariables(entry) => entry != id,
            _ => true,
        });
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Everything one style editor holds between UI events.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub config: TypographyConfig,
    pub selected_variable: Option<Variable>,
    pub search_query: String,
    pub is_expanded: bool,
    pub is_editing_name: bool,
    pub errors: ValidationErrors,
    pub popovers: PopoverStates,
    defaults: EditorDefaults,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorDefaults::default())
    }
}

impl EditorState {
    pub fn new(defaults: EditorDefaults) -> Self {
        Self {
            config: TypographyConfig::with_defaults(&defaults),
            selected_variable: None,
            search_query: String::new(),
            is_expanded: false,
            is_editing_name: false,
            errors: ValidationErrors::new(),
            popovers: PopoverStates::default(),
            defaults,
        }
    }

    pub fn defaults(&self) -> &EditorDefaults {
        &self.defaults
    }

    pub const fn scaling_mode(&self) -> ScalingMode {
        self.config.scaling_mode
    }

    pub const fn is_manual_scale(&self) -> bool {
        self.config.is_manual_scale()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_valid()
    }
}
