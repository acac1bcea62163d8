//! Applying normalized payloads to the live form.
//!
//! The last stage of an import. Settings replace the configuration
//! wholesale; slide content replaces the field array through
//! [`DocumentForm::replace_slides`], which registers the count correction
//! that [`DocumentForm::commit`] later runs.

use crate::form::DocumentForm;
use crate::types::DocumentConfig;

use super::shapes::NormalizedSlides;

/// What a slide reconciliation did to the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AppliedSlides {
    pub(crate) generation: u64,
    pub(crate) imported: usize,
    pub(crate) filtered_out: usize,
}

pub(crate) fn apply_config(form: &mut DocumentForm, config: DocumentConfig) {
    form.set_config(config);
    tracing::info!("applied imported settings");
}

pub(crate) fn apply_slides(form: &mut DocumentForm, normalized: NormalizedSlides) -> AppliedSlides {
    let previous = form.slide_count();
    let imported = normalized.slides.len();
    let generation = form.replace_slides(normalized.slides);
    tracing::info!(
        imported,
        filtered_out = normalized.filtered_out,
        previous,
        generation,
        "applied imported slide content"
    );
    AppliedSlides {
        generation,
        imported,
        filtered_out: normalized.filtered_out,
    }
}
