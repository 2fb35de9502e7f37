//! Size ladders: geometric auto scales and copy-forward manual entries.

mod manual;
mod preset;
mod ratio;

pub use manual::{
    create_new_manual_size, fill_empty_styles, next_size_id, remove_manual_size,
    update_manual_size, SizeEntryUpdate, MANUAL_DEFAULT_LETTER_SPACING,
    MANUAL_DEFAULT_LINE_HEIGHT, MANUAL_DEFAULT_RATIO, MANUAL_DEFAULT_SIZE,
};
pub use preset::{tailwind_preset, TAILWIND_TEXT_SCALE};
pub use ratio::{named_ratio, NamedRatio, NAMED_RATIOS};

use crate::model::{SizeEntry, TypographyConfig};

/// Longest auto ladder generated; the validator rejects larger counts.
pub const MAX_AUTO_STEPS: u32 = 100;

/// `steps` sizes where step `i` is `round(initial_size * ratio^i)`, capped at
/// [`MAX_AUTO_STEPS`].
pub fn auto_scale(initial_size: f64, steps: u32, ratio: f64) -> Vec<f64> {
    let steps = i32::try_from(steps.min(MAX_AUTO_STEPS)).unwrap_or(0);
    (0..steps)
        .map(|step| (initial_size * ratio.powi(step)).round())
        .collect()
}

/// Rungs the host creates styles for.
///
/// Auto mode expands the ratio into entries that share the config's line
/// height, letter spacing, case and styles; manual modes use their entries
/// as they are.
pub fn size_ladder(config: &TypographyConfig) -> Vec<SizeEntry> {
    if config.is_manual_scale() {
        return config.manual_sizes.clone();
    }

    let Some(ratio) = config.scale_ratio else {
        return Vec::new();
    };

    auto_scale(config.initial_size, config.steps, ratio)
        .into_iter()
        .enumerate()
        .map(|(index, size)| {
            let mut entry = SizeEntry::new((index + 1).to_string(), size);
            entry.line_height = config.line_height;
            entry.letter_spacing = config.letter_spacing;
            entry.text_case = config.text_case;
            entry.styles = config.styles.clone();
            entry.line_height_variable = config.line_height_variable.clone();
            entry.letter_spacing_variable = config.letter_spacing_variable.clone();
            entry
        })
        .collect()
}
