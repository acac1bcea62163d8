//! Tests for value-constraint validation and issue reporting.

use rondel::types::{DocumentConfig, Element, ImageElement, ImageSource, ImageStyle, Slide};
use rondel::validate::{validate_config, validate_slides, ValidationError};

fn config_with_name(name: &str) -> DocumentConfig {
    let mut config = DocumentConfig::default();
    config.brand.name = name.to_string();
    config
}

fn slide_with_opacity(opacity: f32) -> Slide {
    let mut slide = Slide::new(vec![Element::title("x")]);
    slide.background_image.style.opacity = opacity;
    slide
}

#[test]
fn test_brand_name_at_limit_passes() {
    let config = config_with_name(&"x".repeat(30));
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_brand_name_over_limit_fails_with_path() {
    let config = config_with_name(&"x".repeat(31));
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.issues[0].path, "brand.name");
}

#[test]
fn test_brand_name_limit_counts_characters_not_bytes() {
    // 30 two-byte characters: 60 bytes but exactly at the limit
    let config = config_with_name(&"é".repeat(30));
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_theme_color_formats() {
    for bad in ["fff", "#fff", "#12345", "#gggggg", "red", ""] {
        let mut config = DocumentConfig::default();
        config.theme.primary = bad.to_string();
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.issues[0].path, "theme.primary", "accepted {:?}", bad);
    }

    let mut config = DocumentConfig::default();
    config.theme.primary = "#1A2B3C".to_string();
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_opacity_bounds() {
    assert!(validate_slides(&[slide_with_opacity(0.0)]).is_ok());
    assert!(validate_slides(&[slide_with_opacity(100.0)]).is_ok());

    for bad in [-1.0, 100.5, f32::NAN, f32::INFINITY] {
        let err = validate_slides(&[slide_with_opacity(bad)]).unwrap_err();
        assert_eq!(err.issues[0].path, "slides[0].backgroundImage.style.opacity");
    }
}

#[test]
fn test_element_image_dimensions_checked() {
    let mut style = ImageStyle::default();
    style.width = Some(0.0);
    style.height = Some(-4.0);
    let slide = Slide::new(vec![Element::Image(ImageElement {
        source: ImageSource::url("x"),
        style,
    })]);

    let err = validate_slides(&[slide]).unwrap_err();
    let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "slides[0].elements[0].style.width",
            "slides[0].elements[0].style.height"
        ]
    );
}

#[test]
fn test_avatar_style_checked_under_brand_path() {
    let mut config = DocumentConfig::default();
    config.brand.avatar.style.opacity = 250.0;
    let err = validate_config(&config).unwrap_err();
    assert_eq!(err.issues[0].path, "brand.avatar.style.opacity");
}

#[test]
fn test_issues_aggregate_across_slides() {
    let err = validate_slides(&[
        slide_with_opacity(101.0),
        slide_with_opacity(50.0),
        slide_with_opacity(-2.0),
    ])
    .unwrap_err();

    assert_eq!(err.issues.len(), 2);
    assert_eq!(err.issues[0].path, "slides[0].backgroundImage.style.opacity");
    assert_eq!(err.issues[1].path, "slides[2].backgroundImage.style.opacity");
}

#[test]
fn test_error_display_lists_every_issue() {
    let mut config = config_with_name(&"x".repeat(40));
    config.theme.background = "white".to_string();
    let err = validate_config(&config).unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("validation failed"));
    assert!(rendered.contains("brand.name"));
    assert!(rendered.contains("theme.background"));
}

#[test]
fn test_single_issue_constructor() {
    let err = ValidationError::single("slides", "expected an array of slides");
    assert_eq!(err.issues.len(), 1);
    assert_eq!(err.to_string(), "validation failed\n  slides: expected an array of slides");
}
