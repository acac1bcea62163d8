//! Live form state for the document being edited.
//!
//! `DocumentForm` plays the role a form-state library plays under the
//! editor's UI: it owns the current document values, hands renderers a
//! committed snapshot of the slide list, and keeps per-row keys stable so a
//! renderer can track slides across edits.
//!
//! Bulk replaces (imports) are special. A replace swaps in the new rows and
//! registers a count correction that runs at the next [`DocumentForm::commit`],
//! so the row count always settles to the most recent import even if other
//! machinery re-appends rows in between. Corrections are generation-guarded:
//! a correction registered by import N does nothing once import N+1 has
//! landed.

use std::fmt;

use uuid::Uuid;

use crate::constants::{DEFAULT_DOCUMENT_FILENAME, MIN_IMAGE_EDGE, TRIM_REMOVAL_BUDGET};
use crate::types::{Document, DocumentConfig, Element, ImageRef, Slide};

// ============================================================================
// Field Keys & Rows
// ============================================================================

/// Stable identity of one slide row in the form's field array.
///
/// Keys are minted fresh whenever a row is created (append, insert, bulk
/// replace) and survive in-place edits and reorders, so renderers can use
/// them to keep per-slide state attached to the right slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldKey(Uuid);

impl FieldKey {
    fn mint() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the slide field array: the slide value plus its render key
#[derive(Clone, Debug)]
pub struct SlideRow {
    pub key: FieldKey,
    pub slide: Slide,
}

impl SlideRow {
    fn new(slide: Slide) -> Self {
        Self {
            key: FieldKey::mint(),
            slide,
        }
    }
}

/// A count correction registered by a bulk replace, waiting for the next
/// commit to run
#[derive(Clone, Copy, Debug)]
struct PendingTrim {
    generation: u64,
    expected_len: usize,
}

// ============================================================================
// Document Form
// ============================================================================

/// The live form state: current values plus the committed snapshot
pub struct DocumentForm {
    filename: String,
    config: DocumentConfig,
    rows: Vec<SlideRow>,
    committed: Vec<SlideRow>,
    import_generation: u64,
    pending_trim: Option<PendingTrim>,
}

impl DocumentForm {
    /// Open a form over the given document
    pub fn new(document: Document) -> Self {
        let rows: Vec<SlideRow> = document.slides.into_iter().map(SlideRow::new).collect();
        let committed = rows.clone();
        Self {
            filename: document.filename,
            config: document.config,
            rows,
            committed,
            import_generation: 0,
            pending_trim: None,
        }
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Working title of the document
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Current configuration values
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Mutable access to the configuration, for field-level edits
    pub fn config_mut(&mut self) -> &mut DocumentConfig {
        &mut self.config
    }

    /// The live slide rows, keys included
    pub fn rows(&self) -> &[SlideRow] {
        &self.rows
    }

    /// The committed snapshot renderers iterate over. Updated only by
    /// [`DocumentForm::commit`], so it can lag behind [`DocumentForm::rows`]
    pub fn fields(&self) -> &[SlideRow] {
        &self.committed
    }

    /// Number of live slides
    pub fn slide_count(&self) -> usize {
        self.rows.len()
    }

    /// The live slide at `index`, if it exists
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.rows.get(index).map(|row| &row.slide)
    }

    /// Iterate over the live slide values
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.rows.iter().map(|row| &row.slide)
    }

    /// Assemble a document from the current live values
    pub fn document(&self) -> Document {
        Document {
            filename: self.filename.clone(),
            config: self.config.clone(),
            slides: self.slides().cloned().collect(),
        }
    }

    /// Generation counter of the most recent bulk replace
    pub fn import_generation(&self) -> u64 {
        self.import_generation
    }

    /// Whether a count correction is waiting for the next commit
    pub fn has_pending_correction(&self) -> bool {
        self.pending_trim.is_some()
    }

    // ------------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------------

    /// Set the working title. Blank names fall back to the default
    pub fn set_filename(&mut self, filename: impl Into<String>) {
        let filename = filename.into();
        let trimmed = filename.trim();
        self.filename = if trimmed.is_empty() {
            DEFAULT_DOCUMENT_FILENAME.to_string()
        } else {
            trimmed.to_string()
        };
    }

    /// Replace the whole configuration, as a settings import does
    pub fn set_config(&mut self, config: DocumentConfig) {
        self.config = config;
    }

    /// Append a slide, minting a fresh key. Returns the new row's key
    pub fn append_slide(&mut self, slide: Slide) -> FieldKey {
        let row = SlideRow::new(slide);
        let key = row.key;
        self.rows.push(row);
        tracing::debug!(index = self.rows.len() - 1, "appended slide");
        key
    }

    /// Insert a slide at `index` (clamped to the end), minting a fresh key
    pub fn insert_slide(&mut self, index: usize, slide: Slide) -> FieldKey {
        let index = index.min(self.rows.len());
        let row = SlideRow::new(slide);
        let key = row.key;
        self.rows.insert(index, row);
        tracing::debug!(index, "inserted slide");
        key
    }

    /// Remove the slide at `index`, returning its value
    pub fn remove_slide(&mut self, index: usize) -> Option<Slide> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);
        tracing::debug!(index, "removed slide");
        Some(row.slide)
    }

    /// Move a slide from one position to another, preserving its key.
    /// Returns false if `from` is out of bounds
    pub fn move_slide(&mut self, from: usize, to: usize) -> bool {
        if from >= self.rows.len() {
            return false;
        }
        let row = self.rows.remove(from);
        let to = to.min(self.rows.len());
        self.rows.insert(to, row);
        tracing::debug!(from, to, "moved slide");
        true
    }

    /// Edit the slide at `index` in place, preserving its key.
    /// Returns false if the index is out of bounds
    pub fn update_slide(&mut self, index: usize, edit: impl FnOnce(&mut Slide)) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                edit(&mut row.slide);
                true
            }
            None => false,
        }
    }

    /// Edit one element of one slide in place.
    /// Returns false if either index is out of bounds
    pub fn update_element(
        &mut self,
        slide_index: usize,
        element_index: usize,
        edit: impl FnOnce(&mut Element),
    ) -> bool {
        match self
            .rows
            .get_mut(slide_index)
            .and_then(|row| row.slide.elements.get_mut(element_index))
        {
            Some(element) => {
                edit(element);
                true
            }
            None => false,
        }
    }

    /// Replace the background image of the slide at `index`
    pub fn set_background(&mut self, index: usize, background: ImageRef) -> bool {
        self.update_slide(index, |slide| slide.background_image = background)
    }

    /// Resize an image element, clamping both edges to the minimum.
    /// Returns false if the indices miss or the element is not an image
    pub fn resize_image_element(
        &mut self,
        slide_index: usize,
        element_index: usize,
        width: f32,
        height: f32,
    ) -> bool {
        let mut resized = false;
        self.update_element(slide_index, element_index, |element| {
            if let Some(image) = element.image_mut() {
                image.style.width = Some(width.max(MIN_IMAGE_EDGE));
                image.style.height = Some(height.max(MIN_IMAGE_EDGE));
                resized = true;
            }
        });
        resized
    }

    // ------------------------------------------------------------------------
    // Bulk Replace & Commit
    // ------------------------------------------------------------------------

    /// Replace the entire slide list, as a content import does. Every row
    /// gets a fresh key, and a count correction for the new length is
    /// registered to run at the next commit. Returns the new generation
    pub fn replace_slides(&mut self, slides: Vec<Slide>) -> u64 {
        if let Some(pending) = self.pending_trim {
            tracing::debug!(
                superseded = pending.generation,
                "new import supersedes a pending count correction"
            );
        }
        self.import_generation += 1;
        let expected_len = slides.len();
        self.rows = slides.into_iter().map(SlideRow::new).collect();
        self.pending_trim = Some(PendingTrim {
            generation: self.import_generation,
            expected_len,
        });
        tracing::info!(
            generation = self.import_generation,
            slides = expected_len,
            "replaced slide content"
        );
        self.import_generation
    }

    /// Acknowledge that callers have observed the current values: run any
    /// pending count correction, then refresh the committed snapshot.
    /// Returns how many excess rows were trimmed
    pub fn commit(&mut self) -> usize {
        let mut trimmed = 0;
        if let Some(pending) = self.pending_trim.take() {
            if pending.generation == self.import_generation {
                trimmed = self.trim_to(pending.expected_len);
            } else {
                tracing::debug!(
                    stale = pending.generation,
                    current = self.import_generation,
                    "dropping count correction from a superseded import"
                );
            }
        }
        self.committed = self.rows.clone();
        trimmed
    }

    /// Remove trailing rows until the live count matches `expected_len`,
    /// bounded by the removal budget. Never adds rows: if the live count is
    /// already at or below the expected length, nothing happens
    fn trim_to(&mut self, expected_len: usize) -> usize {
        let mut removed = 0;
        while self.rows.len() > expected_len {
            if removed == TRIM_REMOVAL_BUDGET {
                tracing::warn!(
                    expected = expected_len,
                    actual = self.rows.len(),
                    budget = TRIM_REMOVAL_BUDGET,
                    "count correction hit its removal budget before settling"
                );
                break;
            }
            self.rows.pop();
            removed += 1;
        }
        if removed > 0 {
            tracing::debug!(
                removed,
                len = self.rows.len(),
                "trimmed excess slide rows after import"
            );
        }
        removed
    }
}

impl Default for DocumentForm {
    fn default() -> Self {
        Self::new(Document::starter())
    }
}
