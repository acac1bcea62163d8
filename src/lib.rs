//! Rondel: the document engine behind a carousel post editor.
//!
//! Everything below the UI shell lives here:
//!
//! - [`types`]: the document model (slides, elements, configuration)
//! - [`form`]: live form state with committed snapshots and stable row keys
//! - [`import`]: the JSON import pipeline feeding the "Load" dialogs
//! - [`export`]: the JSON export surface feeding the download links
//! - [`validate`]: value-constraint validation with per-field paths
//! - [`images`]: ingestion of uploaded and pasted image bytes
//!
//! The UI layer (dialogs, menubar, slide canvas) calls in through
//! [`form::DocumentForm`], [`import::FieldImporter`] and
//! [`export::ExportFile`].

pub mod constants;
pub mod export;
pub mod form;
pub mod images;
pub mod import;
pub mod types;
pub mod validate;
