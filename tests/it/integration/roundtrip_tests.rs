//! Export/Import Round Trip Tests
//!
//! The content export produces the same interchange shape the importer
//! accepts, and the settings export produces a payload the settings
//! importer accepts. These tests close the loop in both directions.

use serde_json::json;

use crate::helpers::{
    assert_slide_count, assert_title_text, empty_form, form_with_texts, init_logging,
    text_slide, TestFormBuilder,
};
use rondel::export::ExportFile;
use rondel::import::{normalize_slides, FieldImporter, ImportTarget};
use rondel::types::{Element, ImageRef, ImageSource, Slide};

#[test]
fn test_content_export_reimports_cleanly() {
    init_logging();
    let source = form_with_texts(&["Hook", "Point one", "Point two", "Call to action"]);
    let export = ExportFile::content(&source);

    let mut target = empty_form();
    let report = FieldImporter::new(&mut target, ImportTarget::Slides)
        .handle_json_paste(export.json())
        .unwrap();

    assert_eq!(report.imported, 4);
    assert_eq!(report.filtered_out, 0);
    assert_title_text(&target, 0, "Hook");
    assert_title_text(&target, 3, "Call to action");
}

#[test]
fn test_content_round_trip_drops_styling_only_slides() {
    init_logging();
    // Image-only and blank slides export as empty element lists; the tail
    // ones are trimmed at export, the interior one is filtered at import
    let source = TestFormBuilder::new()
        .with_text_slide("Keep front")
        .with_image_slide("https://example.com/mid.png")
        .with_text_slide("Keep back")
        .with_image_slide("https://example.com/tail.png")
        .build();

    let export = ExportFile::content(&source);
    let exported: Vec<serde_json::Value> = serde_json::from_str(export.json()).unwrap();
    assert_eq!(exported.len(), 3, "tail slide should be trimmed at export");

    let mut target = empty_form();
    let report = FieldImporter::new(&mut target, ImportTarget::Slides)
        .handle_json_paste(export.json())
        .unwrap();

    assert_eq!(report.imported, 2);
    assert_eq!(report.filtered_out, 1);
    assert_title_text(&target, 0, "Keep front");
    assert_title_text(&target, 1, "Keep back");
}

#[test]
fn test_content_round_trip_resets_styling_to_defaults() {
    init_logging();
    let mut styled = Slide::with_background(
        vec![Element::title("Styled once")],
        ImageRef::from_url("https://example.com/bg.png"),
    );
    styled.background_image.style.opacity = 40.0;
    let source = TestFormBuilder::new().with_slide(styled).build();

    let export = ExportFile::content(&source);
    let mut target = empty_form();
    FieldImporter::new(&mut target, ImportTarget::Slides)
        .handle_json_paste(export.json())
        .unwrap();

    let slide = target.slide(0).unwrap();
    assert_eq!(slide.background_image, ImageRef::background_default());
    assert_eq!(slide.elements, vec![Element::title("Styled once")]);
}

#[test]
fn test_settings_export_reimports_equal() {
    let mut source = empty_form();
    {
        let config = source.config_mut();
        config.brand.name = "Ada Lovelace".to_string();
        config.brand.handle = "@adamakes".to_string();
        config.theme.primary = "#112233".to_string();
        config.fonts.title = "syne".to_string();
        config.page_number.show_numbers = false;
    }
    let export = ExportFile::settings(&source);

    let mut target = empty_form();
    let report = FieldImporter::new(&mut target, ImportTarget::Config)
        .handle_json_paste(export.json())
        .unwrap();

    assert_eq!(report.imported, 1);
    assert_eq!(target.config(), source.config());
}

#[test]
fn test_styled_slides_survive_reserialization() {
    init_logging();
    // A styled deck serialized back to JSON must come through normalization
    // with its styling intact
    let mut slide = Slide::with_background(
        vec![
            Element::title("Styled"),
            Element::image(ImageSource::url("https://example.com/photo.png")),
        ],
        ImageRef::from_url("https://example.com/bg.png"),
    );
    slide.background_image.style.opacity = 55.0;
    if let Some(image) = slide.elements[1].image_mut() {
        image.style.width = Some(300.0);
        image.style.height = Some(200.0);
    }
    let slides = vec![slide];

    let value = serde_json::to_value(&slides).unwrap();
    let normalized = normalize_slides(&value).unwrap();

    assert_eq!(normalized.filtered_out, 0);
    assert_eq!(normalized.slides, slides);
}

#[test]
fn test_disk_round_trip_through_export_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let source = TestFormBuilder::new()
        .with_filename("launch")
        .with_text_slide("On disk and back")
        .build();

    let path = ExportFile::content(&source).write_to(dir.path()).unwrap();
    assert!(path.ends_with("launch-content.json"));

    let mut target = empty_form();
    let report = FieldImporter::new(&mut target, ImportTarget::Slides)
        .handle_file_submission(&[path])
        .unwrap()
        .unwrap();

    assert_eq!(report.imported, 1);
    assert_title_text(&target, 0, "On disk and back");
}

#[test]
fn test_double_round_trip_is_stable() {
    init_logging();
    let source = TestFormBuilder::new()
        .with_text_slide("Once")
        .with_slide(text_slide("Twice"))
        .with_image_slide("https://example.com/only-interior.png")
        .with_text_slide("Thrice")
        .build();

    let first = ExportFile::content(&source);
    let mut intermediate = empty_form();
    FieldImporter::new(&mut intermediate, ImportTarget::Slides)
        .handle_json_paste(first.json())
        .unwrap();
    intermediate.commit();

    let second = ExportFile::content(&intermediate);
    let mut target = empty_form();
    let report = FieldImporter::new(&mut target, ImportTarget::Slides)
        .handle_json_paste(second.json())
        .unwrap();

    // The first pass already dropped the image-only slide; the second pass
    // changes nothing further
    assert_eq!(report.imported, 3);
    assert_eq!(report.filtered_out, 0);
    assert_slide_count(&target, 3);
    assert_title_text(&target, 1, "Twice");
}

#[test]
fn test_starter_document_exports_and_reimports() {
    init_logging();
    let mut source = rondel::form::DocumentForm::default();
    let export = ExportFile::content(&source);

    let report = FieldImporter::new(&mut source, ImportTarget::Slides)
        .handle_json_paste(export.json())
        .unwrap();

    assert_eq!(report.imported, 4);
    source.commit();
    assert_slide_count(&source, 4);
    assert_title_text(&source, 0, "Your title here");
    assert_title_text(&source, 3, "Enjoyed this?");
}

#[test]
fn test_styled_import_with_trailing_empty_slide_exports_without_it() {
    init_logging();
    let mut form = empty_form();
    let payload = json!([
        {
            "elements": [{ "type": "title", "text": "Real content" }],
            "backgroundImage": { "source": { "type": "url", "src": "" } }
        },
        {
            "elements": [],
            "backgroundImage": { "source": { "type": "url", "src": "" } }
        },
    ]);

    let report = FieldImporter::new(&mut form, ImportTarget::Slides)
        .handle_json_paste(&payload.to_string())
        .unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.filtered_out, 1);

    let export = ExportFile::content(&form);
    let exported: Vec<serde_json::Value> = serde_json::from_str(export.json()).unwrap();
    assert_eq!(exported.len(), 1);
    assert_eq!(exported[0]["elements"][0]["text"], "Real content");
}

#[test]
fn test_mixed_shape_payload_is_rejected_whole() {
    // One interchange slide plus one styled slide matches neither shape
    let mut form = form_with_texts(&["Safe"]);
    let payload = json!([
        { "elements": [{ "type": "title", "text": "Bare" }] },
        {
            "elements": [{ "type": "title", "text": "Dressed" }],
            "backgroundImage": { "source": { "type": "url", "src": "" } }
        },
    ]);

    let result = FieldImporter::new(&mut form, ImportTarget::Slides)
        .handle_json_paste(&payload.to_string());

    assert!(result.is_err());
    assert_slide_count(&form, 1);
    assert_title_text(&form, 0, "Safe");
}
