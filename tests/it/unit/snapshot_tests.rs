//! Snapshot tests using the insta crate.
//!
//! Snapshot testing captures the exact wire shapes the dialogs exchange and
//! stores them in `.snap` files, so unintended format drift shows up as a
//! diff instead of a silent compatibility break.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use rondel::export::ExportFile;
use rondel::types::{DocumentConfig, Element, Slide, SlideTemplate};

use crate::helpers::TestFormBuilder;

// ============================================================================
// Configuration Wire Shape
// ============================================================================

#[test]
fn snapshot_starter_config() {
    let config = DocumentConfig::default();
    insta::assert_json_snapshot!("starter_config", config);
}

// ============================================================================
// Slide Wire Shape
// ============================================================================

#[test]
fn snapshot_intro_slide() {
    let slide = Slide::from_template(SlideTemplate::Intro);
    insta::assert_json_snapshot!("intro_slide", slide);
}

// ============================================================================
// Content Export Format
// ============================================================================

#[test]
fn snapshot_content_export() {
    let form = TestFormBuilder::new()
        .with_slide(Slide::new(vec![
            Element::title("Ship it"),
            Element::description("Every Tuesday"),
        ]))
        .build();
    let json = ExportFile::content(&form).json().to_string();
    insta::assert_snapshot!("content_export", json);
}
