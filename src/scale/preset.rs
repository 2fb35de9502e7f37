use crate::model::SizeEntry;

/// Tailwind CSS text scale: `(name, font size px, line height px)`.
pub const TAILWIND_TEXT_SCALE: &[(&str, f64, f64)] = &[
    ("xs", 12.0, 16.0),
    ("sm", 14.0, 20.0),
    ("base", 16.0, 24.0),
    ("lg", 18.0, 28.0),
    ("xl", 20.0, 28.0),
    ("2xl", 24.0, 32.0),
    ("3xl", 30.0, 36.0),
    ("4xl", 36.0, 40.0),
    ("5xl", 48.0, 48.0),
    ("6xl", 60.0, 60.0),
    ("7xl", 72.0, 72.0),
    ("8xl", 96.0, 96.0),
    ("9xl", 128.0, 128.0),
];

pub fn tailwind_preset(available_styles: &[String]) -> Vec<SizeEntry> {
    TAILWIND_TEXT_SCALE
        .iter()
        .enumerate()
        .map(|(index, &(name, size, line_height_px))| {
            let mut entry = SizeEntry::new((index + 1).to_string(), size);
            entry.name = name.to_string();
            entry.line_height = line_height_px / size;
            entry.styles = available_styles.to_vec();
            entry
        })
        .collect()
}
