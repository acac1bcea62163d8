//! Constraint validation for document values.
//!
//! Structural problems (wrong types, missing fields) are caught by serde
//! during deserialization. This module covers the value constraints layered
//! on top: name lengths, opacity ranges, color formats, dimension sanity.
//! Every failed constraint is reported with the path of the offending field
//! so a dialog can point at exactly what is wrong.

use std::fmt;

use crate::constants::{MAX_BRAND_NAME_LEN, MAX_OPACITY, MIN_OPACITY};
use crate::types::{DocumentConfig, Element, ImageRef, ImageStyle, Slide};

// ============================================================================
// Issue & Error Types
// ============================================================================

/// A single failed constraint, tagged with the path of the offending field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path into the payload, e.g. `slides[2].backgroundImage.style.opacity`
    pub path: String,
    /// What is wrong with the value at that path
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// One or more failed constraints, aggregated across the whole payload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// A single-issue error, for faults found before field-level checks run
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                path: path.into(),
                message: message.into(),
            }],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for issue in &self.issues {
            write!(f, "\n  {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collects issues across a payload before deciding pass or fail
#[derive(Default)]
pub(crate) struct Issues {
    list: Vec<ValidationIssue>,
}

impl Issues {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.list.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    pub(crate) fn into_result(self) -> Result<(), ValidationError> {
        if self.list.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.list))
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Check every value constraint on a document configuration
pub fn validate_config(config: &DocumentConfig) -> Result<(), ValidationError> {
    let mut issues = Issues::new();

    let name_len = config.brand.name.chars().count();
    if name_len > MAX_BRAND_NAME_LEN {
        issues.push(
            "brand.name",
            format!("must be at most {MAX_BRAND_NAME_LEN} characters, got {name_len}"),
        );
    }
    check_image("brand.avatar", &config.brand.avatar, &mut issues);

    check_hex_color("theme.primary", &config.theme.primary, &mut issues);
    check_hex_color("theme.secondary", &config.theme.secondary, &mut issues);
    check_hex_color("theme.background", &config.theme.background, &mut issues);

    issues.into_result()
}

/// Check every value constraint on a slide deck
pub fn validate_slides(slides: &[Slide]) -> Result<(), ValidationError> {
    let mut issues = Issues::new();
    for (i, slide) in slides.iter().enumerate() {
        check_slide(&format!("slides[{i}]"), slide, &mut issues);
    }
    issues.into_result()
}

// ============================================================================
// Field Checks
// ============================================================================

fn check_slide(path: &str, slide: &Slide, issues: &mut Issues) {
    check_image(&format!("{path}.backgroundImage"), &slide.background_image, issues);
    for (i, element) in slide.elements.iter().enumerate() {
        if let Element::Image(img) = element {
            check_image_style(&format!("{path}.elements[{i}].style"), &img.style, issues);
        }
    }
}

fn check_image(path: &str, image: &ImageRef, issues: &mut Issues) {
    check_image_style(&format!("{path}.style"), &image.style, issues);
}

fn check_image_style(path: &str, style: &ImageStyle, issues: &mut Issues) {
    if !style.opacity.is_finite()
        || style.opacity < MIN_OPACITY
        || style.opacity > MAX_OPACITY
    {
        issues.push(
            format!("{path}.opacity"),
            format!(
                "must be between {MIN_OPACITY} and {MAX_OPACITY}, got {}",
                style.opacity
            ),
        );
    }
    if let Some(width) = style.width {
        check_dimension(&format!("{path}.width"), width, issues);
    }
    if let Some(height) = style.height {
        check_dimension(&format!("{path}.height"), height, issues);
    }
}

fn check_dimension(path: &str, value: f32, issues: &mut Issues) {
    if !value.is_finite() || value <= 0.0 {
        issues.push(path, format!("must be a positive number, got {value}"));
    }
}

fn check_hex_color(path: &str, value: &str, issues: &mut Issues) {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        issues.push(path, format!("must be a hex color like #1a2b3c, got {value:?}"));
    }
}
