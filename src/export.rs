//! JSON export surface.
//!
//! Two artifacts mirror the two import targets: a settings file carrying
//! the configuration verbatim, and a content file carrying the slides
//! stripped down to the unstyled interchange shape the import pipeline
//! accepts back. Both serialize with 4-space indentation and can be
//! presented as a data-URI download or written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::constants::{CONTENT_EXPORT_SUFFIX, SETTINGS_EXPORT_SUFFIX};
use crate::form::DocumentForm;
use crate::types::{Element, Slide, UnstyledElement, UnstyledSlide};

// ============================================================================
// Content Transform
// ============================================================================

/// Strip slides down to the interchange shape: text elements with non-blank
/// text survive as `{"type", "text"}` pairs, everything else (styling,
/// backgrounds, image elements, blank text) is dropped. Slides left empty
/// by the transform are kept in place, except at the tail
pub fn slides_to_unstyled<'a>(slides: impl IntoIterator<Item = &'a Slide>) -> Vec<UnstyledSlide> {
    let mut out: Vec<UnstyledSlide> = slides
        .into_iter()
        .map(|slide| {
            let elements = slide.elements.iter().filter_map(unstyled_element).collect();
            UnstyledSlide::new(elements)
        })
        .collect();

    let before = out.len();
    trim_trailing_empty(&mut out);
    if out.len() < before {
        tracing::debug!(trimmed = before - out.len(), "dropped trailing empty slides from export");
    }
    out
}

fn unstyled_element(element: &Element) -> Option<UnstyledElement> {
    let text = element.text()?;
    if text.trim().is_empty() {
        return None;
    }
    Some(UnstyledElement::new(element.kind(), text))
}

/// Pop slides off the tail until one has content. Interior empty slides are
/// untouched, so positions before the last content-bearing slide are stable
pub fn trim_trailing_empty(slides: &mut Vec<UnstyledSlide>) {
    while slides.last().is_some_and(|slide| !slide.has_content()) {
        slides.pop();
    }
}

// ============================================================================
// Export Files
// ============================================================================

/// A ready-to-download export artifact: target filename plus JSON body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    filename: String,
    json: String,
}

impl ExportFile {
    /// The settings artifact: the current configuration, verbatim
    pub fn settings(form: &DocumentForm) -> Self {
        Self {
            filename: export_filename(form.filename(), SETTINGS_EXPORT_SUFFIX),
            json: pretty_json(form.config(), "{}"),
        }
    }

    /// The content artifact: the current slides in the interchange shape
    pub fn content(form: &DocumentForm) -> Self {
        let unstyled = slides_to_unstyled(form.slides());
        Self {
            filename: export_filename(form.filename(), CONTENT_EXPORT_SUFFIX),
            json: pretty_json(&unstyled, "[]"),
        }
    }

    /// Filename the artifact should be saved under
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The serialized JSON body
    pub fn json(&self) -> &str {
        &self.json
    }

    /// The artifact as a percent-encoded `data:` URI, usable as the href of
    /// a download link
    pub fn download_href(&self) -> String {
        format!(
            "data:text/json;charset=utf-8,{}",
            urlencoding::encode(&self.json)
        )
    }

    /// Write the artifact into `dir`, returning the full path
    pub fn write_to(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(&self.filename);
        fs::write(&path, &self.json)
            .with_context(|| format!("failed to write export to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote export file");
        Ok(path)
    }
}

fn export_filename(base: &str, suffix: &str) -> String {
    format!("{base}-{suffix}.json")
}

/// Serialize with 4-space indentation, matching the files the dialogs have
/// always produced. Falls back to the given empty payload if serialization
/// fails
fn pretty_json<T: Serialize>(value: &T, fallback: &str) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut serializer).is_err() {
        return fallback.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| fallback.to_string())
}
