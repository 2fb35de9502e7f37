use serde::{Deserialize, Serialize};

/// A typeface family and its named style variants as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub styles: Vec<String>,
}

impl Font {
    pub fn new<I, S>(family: impl Into<String>, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            family: family.into(),
            styles: styles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_style(&self, style: &str) -> bool {
        self.styles.iter().any(|candidate| candidate == style)
    }
}
