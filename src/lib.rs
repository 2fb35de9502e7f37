pub mod apply;
pub mod bridge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod scale;
pub mod state;
pub mod validate;

use std::sync::Arc;

pub use apply::{submit, ApplyReport};
pub use bridge::{ApplyResponse, HostBridge};
pub use catalog::Catalog;
pub use error::{BridgeError, EngineError, EngineResult};
pub use state::{reduce, EditorState, TypographyAction, TypographyEditor};
pub use validate::{validate, ValidationErrors, ValidationField};

/// Entrypoint for a host panel: loads the catalog once and opens an editor
/// seeded with the user's configured defaults.
pub fn open_editor<B: HostBridge + ?Sized>(catalog: Arc<Catalog>, bridge: &B) -> TypographyEditor {
    logging::init();
    tracing::info!("opening typography editor");

    let report = catalog.load(bridge);
    tracing::debug!(fonts = ?report.fonts, variables = ?report.variables, "catalog load finished");

    TypographyEditor::with_defaults(catalog, config::load_editor_defaults())
}
