use crate::model::{SizeEntry, TextCase};

pub const MANUAL_DEFAULT_SIZE: f64 = 10.0;
pub const MANUAL_DEFAULT_LINE_HEIGHT: f64 = 1.2;
pub const MANUAL_DEFAULT_LETTER_SPACING: f64 = 0.0;
pub const MANUAL_DEFAULT_RATIO: f64 = 1.2;

/// Single-field edit of one manual size entry.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeEntryUpdate {
    Name(String),
    Size(f64),
    /// Multiplier.
    LineHeight(f64),
    LetterSpacing(f64),
    Styles(Vec<String>),
    TextCase(TextCase),
    SizeVariable(Option<String>),
    LineHeightVariable(Option<String>),
    LetterSpacingVariable(Option<String>),
}

impl SizeEntryUpdate {
    pub fn apply_to(self, entry: &mut SizeEntry) {
        match self {
            Self::Name(name) => entry.name = name,
            Self::Size(size) => entry.size = size,
            Self::LineHeight(line_height) => entry.line_height = line_height,
            Self::LetterSpacing(letter_spacing) => entry.letter_spacing = letter_spacing,
            Self::Styles(styles) => entry.styles = styles,
            Self::TextCase(text_case) => entry.text_case = text_case,
            Self::SizeVariable(id) => entry.size_variable = id,
            Self::LineHeightVariable(id) => entry.line_height_variable = id,
            Self::LetterSpacingVariable(id) => entry.letter_spacing_variable = id,
        }
    }
}

/// Id for the next entry: one above the highest numeric id in use.
///
/// For an unbroken `1..=n` sequence this is `n + 1`; after deletions it never
/// lands on a surviving id.
pub fn next_size_id(existing: &[SizeEntry]) -> String {
    let highest = existing
        .iter()
        .filter_map(|entry| entry.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let by_count = existing.len() as u64;
    (highest.max(by_count) + 1).to_string()
}

/// Builds the next rung by scaling the last entry by `ratio`.
pub fn create_new_manual_size(
    existing: &[SizeEntry],
    available_styles: &[String],
    ratio: f64,
) -> SizeEntry {
    let id = next_size_id(existing);
    let previous = existing.last();

    let base_size = previous.map_or(MANUAL_DEFAULT_SIZE, |entry| entry.size);
    let styles = match available_styles.first() {
        Some(first) => vec![first.clone()],
        None => previous.map(|entry| entry.styles.clone()).unwrap_or_default(),
    };

    SizeEntry {
        name: id.clone(),
        id,
        size: (base_size * ratio).round(),
        line_height: previous.map_or(MANUAL_DEFAULT_LINE_HEIGHT, |entry| entry.line_height),
        letter_spacing: previous
            .map_or(MANUAL_DEFAULT_LETTER_SPACING, |entry| entry.letter_spacing),
        styles,
        text_case: previous.map(|entry| entry.text_case).unwrap_or_default(),
        // The computed size would be shadowed by a copied binding.
        size_variable: None,
        line_height_variable: previous.and_then(|entry| entry.line_height_variable.clone()),
        letter_spacing_variable: previous
            .and_then(|entry| entry.letter_spacing_variable.clone()),
    }
}

pub fn remove_manual_size(entries: &[SizeEntry], id: &str) -> Vec<SizeEntry> {
    entries
        .iter()
        .filter(|entry| entry.id != id)
        .cloned()
        .collect()
}

/// Applies `update` to the entry with `id`; returns whether one matched.
pub fn update_manual_size(entries: &mut [SizeEntry], id: &str, update: SizeEntryUpdate) -> bool {
    match entries.iter_mut().find(|entry| entry.id == id) {
        Some(entry) => {
            update.apply_to(entry);
            true
        }
        None => false,
    }
}

/// Gives every entry without a style selection all of `available_styles`.
pub fn fill_empty_styles(entries: &mut [SizeEntry], available_styles: &[String]) -> usize {
    if available_styles.is_empty() {
        return 0;
    }
    let mut filled = 0;
    for entry in entries.iter_mut().filter(|entry| entry.styles.is_empty()) {
        entry.styles = available_styles.to_vec();
        filled += 1;
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, size: f64) -> SizeEntry {
        SizeEntry::new(id, size).with_styles(["Regular"])
    }

    #[test]
    fn add_scales_previous_entry_and_copies_forward() {
        let existing = vec![SizeEntry {
            line_height: 1.2,
            letter_spacing: 0.0,
            ..entry("1", 10.0)
        }];

        let next = create_new_manual_size(&existing, &[], 1.25);
        assert_eq!(next.id, "2");
        assert_eq!(next.name, "2");
        assert_eq!(next.size, 13.0);
        assert_eq!(next.line_height, 1.2);
        assert_eq!(next.letter_spacing, 0.0);
        assert_eq!(next.styles, vec!["Regular"]);
    }

    #[test]
    fn add_copies_spacing_bindings_but_not_size_binding() {
        let existing = vec![SizeEntry {
            size_variable: Some("size-var".to_string()),
            line_height_variable: Some("lh-var".to_string()),
            letter_spacing_variable: Some("ls-var".to_string()),
            text_case: TextCase::Upper,
            ..entry("1", 16.0)
        }];

        let next = create_new_manual_size(&existing, &[], 1.5);
        assert_eq!(next.size, 24.0);
        assert!(next.size_variable.is_none());
        assert_eq!(next.line_height_variable.as_deref(), Some("lh-var"));
        assert_eq!(next.letter_spacing_variable.as_deref(), Some("ls-var"));
        assert_eq!(next.text_case, TextCase::Upper);
    }

    #[test]
    fn add_without_entries_uses_defaults() {
        let next = create_new_manual_size(&[], &[], MANUAL_DEFAULT_RATIO);
        assert_eq!(next.id, "1");
        assert_eq!(next.size, 12.0);
        assert_eq!(next.line_height, MANUAL_DEFAULT_LINE_HEIGHT);
        assert!(next.styles.is_empty());
    }

    #[test]
    fn add_prefers_first_available_style() {
        let existing = vec![entry("1", 16.0).with_styles(["Bold", "Italic"])];
        let available = vec!["Light".to_string(), "Regular".to_string()];

        let next = create_new_manual_size(&existing, &available, 1.5);
        assert_eq!(next.styles, vec!["Light"]);
        assert_eq!(next.size, 24.0);
    }

    #[test]
    fn ids_never_collide_after_deletions() {
        let entries = vec![entry("1", 10.0), entry("2", 12.0), entry("3", 14.0)];
        let survivors = remove_manual_size(&entries, "1");
        let survivors = remove_manual_size(&survivors, "2");
        assert_eq!(next_size_id(&survivors), "4");

        let mut reordered = vec![entry("5", 10.0), entry("2", 12.0)];
        reordered.push(create_new_manual_size(&reordered, &[], 1.2));
        assert_eq!(reordered[2].id, "6");
    }

    #[test]
    fn remove_keeps_survivor_ids_and_order() {
        let entries = vec![entry("1", 10.0), entry("2", 12.0), entry("3", 14.0)];
        let survivors = remove_manual_size(&entries, "2");
        let ids: Vec<_> = survivors.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn update_touches_only_the_matching_entry() {
        let mut entries = vec![entry("1", 10.0), entry("2", 12.0)];
        let untouched = entries[0].clone();

        assert!(update_manual_size(&mut entries, "2", SizeEntryUpdate::Size(18.0)));
        assert!(update_manual_size(
            &mut entries,
            "2",
            SizeEntryUpdate::Name("Heading".to_string())
        ));
        assert!(!update_manual_size(&mut entries, "9", SizeEntryUpdate::Size(1.0)));

        assert_eq!(entries[0], untouched);
        assert_eq!(entries[1].size, 18.0);
        assert_eq!(entries[1].name, "Heading");
    }

    #[test]
    fn update_binds_and_unbinds_variables() {
        let mut entries = vec![entry("1", 10.0)];
        update_manual_size(
            &mut entries,
            "1",
            SizeEntryUpdate::SizeVariable(Some("size/body".to_string())),
        );
        assert!(entries[0].is_size_bound());

        update_manual_size(&mut entries, "1", SizeEntryUpdate::SizeVariable(None));
        assert!(!entries[0].is_size_bound());
    }

    #[test]
    fn fill_empty_styles_uses_every_available_style() {
        let mut entries = vec![SizeEntry::new("1", 12.0), entry("2", 14.0)];
        let available = vec!["Regular".to_string(), "Bold".to_string()];

        assert_eq!(fill_empty_styles(&mut entries, &available), 1);
        assert_eq!(entries[0].styles, vec!["Regular", "Bold"]);
        assert_eq!(entries[1].styles, vec!["Regular"]);

        let mut bare = vec![SizeEntry::new("1", 12.0)];
        assert_eq!(fill_empty_styles(&mut bare, &[]), 0);
        assert!(bare[0].styles.is_empty());
    }
}
