//! Fonts and variables offered by the host, fetched once per panel and
//! shared by every editor through an `Arc<Catalog>`.

mod cache;

pub use cache::{CacheState, CatalogCache, LoadOutcome};

use crate::bridge::HostBridge;
use crate::model::{Font, Variable};

#[derive(Debug)]
pub struct Catalog {
    fonts: CatalogCache<Font>,
    variables: CatalogCache<Variable>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoadReport {
    pub fonts: LoadOutcome,
    pub variables: LoadOutcome,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            fonts: CatalogCache::new("fonts"),
            variables: CatalogCache::new("variables"),
        }
    }

    pub fn fonts(&self) -> &CatalogCache<Font> {
        &self.fonts
    }

    pub fn variables(&self) -> &CatalogCache<Variable> {
        &self.variables
    }

    pub fn is_loading(&self) -> bool {
        self.fonts.is_loading() || self.variables.is_loading()
    }

    /// First error among the two collections, for display.
    pub fn error(&self) -> Option<String> {
        self.fonts.error().or_else(|| self.variables.error())
    }

    pub fn load<B: HostBridge + ?Sized>(&self, bridge: &B) -> CatalogLoadReport {
        CatalogLoadReport {
            fonts: self.fonts.load(|| bridge.available_fonts()),
            variables: self.variables.load(|| bridge.available_variables()),
        }
    }

    pub fn revalidate<B: HostBridge + ?Sized>(&self, bridge: &B) -> CatalogLoadReport {
        tracing::info!("revalidating font and variable catalog");
        CatalogLoadReport {
            fonts: self.fonts.revalidate(|| bridge.available_fonts()),
            variables: self.variables.revalidate(|| bridge.available_variables()),
        }
    }

    pub fn find_variable(&self, id: &str) -> Option<Variable> {
        self.variables
            .snapshot()
            .iter()
            .find(|variable| variable.id == id)
            .cloned()
    }
}
