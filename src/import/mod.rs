//! JSON import pipeline.
//!
//! Feeds the editor's two "Load" dialogs. Both ingestion routes, a file
//! picker and a paste box, converge on the same path:
//!
//! 1. Ingest: materialize the JSON text and parse it ([`FieldImporter`])
//! 2. Detect & normalize: match an accepted shape, drop content-free
//!    slides, upgrade interchange content to document form ([`shapes`])
//! 3. Reconcile: replace the target field on the live form ([`reconcile`])
//!
//! The routes differ only in how failures surface: the file route returns
//! raw [`ImportError`]s, the paste route wraps everything in
//! [`PasteRejection`] so the dialog can show the message inline.

mod error;
mod reconcile;
mod shapes;

pub use error::*;
pub use shapes::*;

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::form::DocumentForm;

// ============================================================================
// Targets & Reports
// ============================================================================

/// Which document field an import feeds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportTarget {
    /// The document configuration (brand, theme, fonts, page numbers)
    Config,
    /// The slide deck
    Slides,
}

impl ImportTarget {
    pub fn label(&self) -> &'static str {
        match self {
            ImportTarget::Config => "Settings",
            ImportTarget::Slides => "Content",
        }
    }

    pub fn all() -> &'static [ImportTarget] {
        &[ImportTarget::Config, ImportTarget::Slides]
    }
}

/// Summary of a successful import, for status lines and logging
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImportReport {
    pub target: ImportTarget,
    /// How many items landed on the form
    pub imported: usize,
    /// How many input slides were dropped for having no usable content
    pub filtered_out: usize,
    /// Generation of the bulk replace, for slide imports
    pub generation: Option<u64>,
}

// ============================================================================
// Field Importer
// ============================================================================

/// Imports JSON payloads into one field of a document form.
///
/// Borrows the form for its lifetime; construct one per dialog interaction.
pub struct FieldImporter<'form> {
    form: &'form mut DocumentForm,
    target: ImportTarget,
}

impl<'form> FieldImporter<'form> {
    pub fn new(form: &'form mut DocumentForm, target: ImportTarget) -> Self {
        Self { form, target }
    }

    /// Ingest from a file picker submission.
    ///
    /// An empty selection is a no-op, not an error. When several files are
    /// selected only the first is read; the rest are ignored.
    pub fn handle_file_submission(
        &mut self,
        files: &[PathBuf],
    ) -> ImportResult<Option<ImportReport>> {
        let Some(path) = files.first() else {
            tracing::debug!(target = self.target.label(), "file submission with no selection");
            return Ok(None);
        };
        if files.len() > 1 {
            tracing::debug!(
                ignored = files.len() - 1,
                "importing only the first selected file"
            );
        }
        let raw = fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw)?;
        self.apply(value).map(Some)
    }

    /// Ingest from the paste box.
    ///
    /// Every failure on this route comes back as a [`PasteRejection`] whose
    /// `Display` is the message to show under the box.
    pub fn handle_json_paste(&mut self, text: &str) -> Result<ImportReport, PasteRejection> {
        if text.trim().is_empty() {
            return Err(PasteRejection::Empty);
        }
        let value: Value = serde_json::from_str(text).map_err(PasteRejection::Json)?;
        self.apply(value).map_err(PasteRejection::from)
    }

    fn apply(&mut self, value: Value) -> ImportResult<ImportReport> {
        match self.target {
            ImportTarget::Config => {
                let config = shapes::parse_config(&value)?;
                reconcile::apply_config(self.form, config);
                Ok(ImportReport {
                    target: self.target,
                    imported: 1,
                    filtered_out: 0,
                    generation: None,
                })
            }
            ImportTarget::Slides => {
                let normalized = shapes::normalize_slides(&value)?;
                let applied = reconcile::apply_slides(self.form, normalized);
                Ok(ImportReport {
                    target: self.target,
                    imported: applied.imported,
                    filtered_out: applied.filtered_out,
                    generation: Some(applied.generation),
                })
            }
        }
    }
}
