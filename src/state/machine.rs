use std::sync::Arc;

use super::{EditorState, TypographyAction};
use crate::catalog::Catalog;
use crate::model::{
    EditorDefaults, FontSource, ScalingMode, SizeEntry, TypographyConfig, TypographyConfigPatch,
};
use crate::resolve::available_styles;
use crate::scale::{
    auto_scale, create_new_manual_size, fill_empty_styles, remove_manual_size, size_ladder,
    tailwind_preset, update_manual_size,
};
use crate::validate::{validate, ValidationErrors};

/// Pure transition: consumes the previous state and returns the next one.
///
/// Never refuses an action; invalid data only shows up in `errors` once the
/// validator runs.
pub fn reduce(mut state: EditorState, action: TypographyAction) -> EditorState {
    use TypographyAction::*;
    match action {
        SetConfig(patch) => {
            state.config.apply(patch);
            let still_bound = match (&state.selected_variable, &state.config.variable_id) {
                (Some(variable), Some(id)) => &variable.id == id,
                _ => false,
            };
            if !still_bound {
                state.selected_variable = None;
            }
        }
        SetScalingMode(mode) => state.config.scaling_mode = mode,
        SetVariable(variable) => {
            match &variable {
                Some(selected) => {
                    state.config.set_font_source(FontSource::Variable);
                    state.config.variable_id = Some(selected.id.clone());
                }
                None => state.config.set_font_source(FontSource::Type),
            }
            state.selected_variable = variable;
        }
        SetSearchQuery(query) => state.search_query = query,
        SetExpanded(expanded) => state.is_expanded = expanded,
        SetEditingName(editing) => state.is_editing_name = editing,
        SetPopover { popover, open } => state.popovers.set(popover, open),
        SetErrors(errors) => state.errors = errors,
        ClearError(field) => {
            state.errors.remove(field);
        }
        AddManualSize {
            available_styles,
            ratio,
        } => {
            let entry =
                create_new_manual_size(&state.config.manual_sizes, &available_styles, ratio);
            state.config.manual_sizes.push(entry);
        }
        RemoveManualSize(id) => {
            state.config.manual_sizes = remove_manual_size(&state.config.manual_sizes, &id);
            state.popovers.forget_manual_size(&id);
        }
        UpdateManualSize { id, update } => {
            if !update_manual_size(&mut state.config.manual_sizes, &id, update) {
                tracing::debug!(id, "update for unknown manual size ignored");
            }
        }
        FillEmptyStyles(styles) => {
            fill_empty_styles(&mut state.config.manual_sizes, &styles);
        }
        ToggleStyle(style) => {
            let styles = &mut state.config.styles;
            match styles.iter().position(|selected| *selected == style) {
                Some(index) => {
                    styles.remove(index);
                }
                None => styles.push(style),
            }
        }
        SetAllStyles(styles) => state.config.styles = styles,
        Reset => return EditorState::new(*state.defaults()),
    }
    state
}

/// One open style editor: the reducer plus the values derived from it.
///
/// After every config-relevant dispatch the available style names are
/// resolved again from the catalog and the config is re-validated.
#[derive(Debug)]
pub struct TypographyEditor {
    state: EditorState,
    catalog: Arc<Catalog>,
    available_styles: Vec<String>,
}

impl TypographyEditor {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_defaults(catalog, EditorDefaults::default())
    }

    pub fn with_defaults(catalog: Arc<Catalog>, defaults: EditorDefaults) -> Self {
        let mut editor = Self {
            state: EditorState::new(defaults),
            catalog,
            available_styles: Vec::new(),
        };
        editor.refresh();
        editor
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn config(&self) -> &TypographyConfig {
        &self.state.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn available_styles(&self) -> &[String] {
        &self.available_styles
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    pub fn dispatch(&mut self, action: TypographyAction) {
        tracing::debug!(action = action.name(), "dispatch typography action");
        let affects_config = action.affects_config();
        let previous_mode = self.state.scaling_mode();

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        if affects_config {
            self.refresh();
        }

        let mode = self.state.scaling_mode();
        if mode != previous_mode {
            tracing::debug!(from = ?previous_mode, to = ?mode, "scaling mode changed");
            self.enter_scaling_mode(mode);
        }
    }

    /// Re-resolves styles and re-validates, e.g. after the catalog loads.
    ///
    /// A config bound to a variable id without a selected variable (such as
    /// a stored config merged through `SetConfig`) picks it up from the
    /// catalog first.
    pub fn refresh(&mut self) {
        if self.state.selected_variable.is_none()
            && self.state.config.font_source == FontSource::Variable
        {
            if let Some(id) = self.state.config.variable_id.as_deref() {
                self.state.selected_variable = self.catalog.find_variable(id);
            }
        }

        let fonts = self.catalog.fonts().snapshot();
        let config = &self.state.config;
        self.available_styles = available_styles(
            config.font_source,
            config.font_family.as_deref(),
            self.state.selected_variable.as_ref(),
            &fonts,
        );

        let errors = validate(&self.state.config, &self.available_styles);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, TypographyAction::SetErrors(errors));
    }

    fn enter_scaling_mode(&mut self, mode: ScalingMode) {
        match mode {
            ScalingMode::Auto => {}
            ScalingMode::Manual => {
                let styles = self.available_styles.clone();
                self.dispatch(TypographyAction::FillEmptyStyles(styles));
            }
            ScalingMode::Tailwind => {
                if !self.has_pristine_manual_sizes() {
                    tracing::debug!("keeping edited manual sizes instead of tailwind preset");
                    return;
                }
                let preset = tailwind_preset(&self.available_styles);
                self.dispatch(TypographyAction::SetConfig(TypographyConfigPatch {
                    manual_sizes: Some(preset),
                    ..TypographyConfigPatch::default()
                }));
            }
        }
    }

    /// Whether the manual list is empty or still the starting entry, ignoring
    /// the styles back-filled on entering manual mode.
    fn has_pristine_manual_sizes(&self) -> bool {
        let sizes = &self.state.config.manual_sizes;
        let initial = TypographyConfig::with_defaults(self.state.defaults()).manual_sizes;
        sizes.is_empty()
            || (sizes.len() == initial.len()
                && sizes.iter().zip(&initial).all(|(entry, start)| SizeEntry {
                    styles: start.styles.clone(),
                    ..entry.clone()
                } == *start))
    }

    /// Binds the font family to the catalog variable with `id`.
    ///
    /// Returns `false` and leaves the state alone when the id is unknown.
    pub fn select_variable(&mut self, id: &str) -> bool {
        match self.catalog.find_variable(id) {
            Some(variable) => {
                self.dispatch(TypographyAction::SetVariable(Some(variable)));
                true
            }
            None => {
                tracing::warn!(id, "variable not found in catalog");
                false
            }
        }
    }

    pub fn set_line_height_percent(&mut self, percentage: f64) {
        self.dispatch(TypographyAction::SetConfig(
            TypographyConfigPatch::line_height_percent(percentage),
        ));
    }

    /// Appends a rung scaled from the last one by the configured manual ratio.
    pub fn add_manual_size(&mut self) {
        let ratio = self.state.defaults().manual_ratio;
        self.dispatch(TypographyAction::AddManualSize {
            available_styles: self.available_styles.clone(),
            ratio,
        });
    }

    /// Auto-mode sizes; empty without a ratio.
    pub fn auto_scale(&self) -> Vec<f64> {
        let config = &self.state.config;
        config
            .scale_ratio
            .map(|ratio| auto_scale(config.initial_size, config.steps, ratio))
            .unwrap_or_default()
    }

    pub fn size_ladder(&self) -> Vec<SizeEntry> {
        size_ladder(&self.state.config)
    }

    pub fn reset(&mut self) {
        self.dispatch(TypographyAction::Reset);
    }
}

impl std::fmt::Display for TypographyEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TypographyEditor({:?}, {:?}, errors={})",
            self.state.config.name,
            self.state.scaling_mode(),
            self.state.errors.len()
        )
    }
}
