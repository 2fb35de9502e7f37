use crate::model::{ScalingMode, TypographyConfigPatch, Variable};
use crate::scale::SizeEntryUpdate;
use crate::validate::{ValidationErrors, ValidationField};

/// Popovers the panel can open while editing a style.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Popover {
    FontPicker,
    VariablePicker,
    StylePicker,
    ScaleRatio,
    TextCase,
    LineHeightVariable,
    LetterSpacingVariable,
    ManualSizeStyles(String),
    ManualSizeVariables(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypographyAction {
    SetConfig(TypographyConfigPatch),
    SetScalingMode(ScalingMode),
    SetVariable(Option<Variable>),
    SetSearchQuery(String),
    SetExpanded(bool),
    SetEditingName(bool),
    SetPopover { popover: Popover, open: bool },
    SetErrors(ValidationErrors),
    ClearError(ValidationField),
    AddManualSize {
        available_styles: Vec<String>,
        ratio: f64,
    },
    RemoveManualSize(String),
    UpdateManualSize {
        id: String,
        update: SizeEntryUpdate,
    },
    /// Gives entries without styles every available style.
    FillEmptyStyles(Vec<String>),
    ToggleStyle(String),
    SetAllStyles(Vec<String>),
    Reset,
}

impl TypographyAction {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetConfig(_) => "SetConfig",
            Self::SetScalingMode(_) => "SetScalingMode",
            Self::SetVariable(_) => "SetVariable",
            Self::SetSearchQuery(_) => "SetSearchQuery",
            Self::SetExpanded(_) => "SetExpanded",
            Self::SetEditingName(_) => "SetEditingName",
            Self::SetPopover { .. } => "SetPopover",
            Self::SetErrors(_) => "SetErrors",
            Self::ClearError(_) => "ClearError",
            Self::AddManualSize { .. } => "AddManualSize",
            Self::RemoveManualSize(_) => "RemoveManualSize",
            Self::UpdateManualSize { .. } => "UpdateManualSize",
            Self::FillEmptyStyles(_) => "FillEmptyStyles",
            Self::ToggleStyle(_) => "ToggleStyle",
            Self::SetAllStyles(_) => "SetAllStyles",
            Self::Reset => "Reset",
        }
    }

    /// Whether the action can change what the validator sees.
    pub const fn affects_config(&self) -> bool {
        !matches!(
            self,
            Self::SetSearchQuery(_)
                | Self::SetExpanded(_)
                | Self::SetEditingName(_)
                | Self::SetPopover { .. }
                | Self::SetErrors(_)
                | Self::ClearError(_)
        )
    }
}
