//! Accepted payload shapes, shape detection, and normalization.
//!
//! A content import accepts two JSON shapes. The unstyled interchange shape
//! carries bare `{"type", "text"}` elements and nothing else; the styled
//! document shape carries full elements plus a required `backgroundImage`
//! per slide. Detection is two-tier: a strict probe for the interchange
//! shape first, then the document shape as the fallback. The probe is
//! strict enough that no payload can match both, so ordering never changes
//! the outcome.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::types::{
    Brand, DocumentConfig, Element, ElementKind, Fonts, PageNumbers, Slide, Theme,
    UnstyledElement, UnstyledSlide,
};
use crate::validate::{validate_config, validate_slides, Issues, ValidationError};

use super::error::{ImportError, ImportResult};

// ============================================================================
// Shape Detection
// ============================================================================

/// Which accepted shape a slides payload matched
#[derive(Debug)]
pub enum SlidesPayload {
    /// The unstyled interchange shape: content only
    Unstyled(Vec<UnstyledSlide>),
    /// The styled document shape: content plus styling
    Styled(Vec<Slide>),
}

impl SlidesPayload {
    /// Detect which shape a payload is in.
    ///
    /// The interchange probe never faults the import: any mismatch just
    /// falls through to the document shape, and only the document shape's
    /// failure is surfaced.
    pub fn detect(value: &Value) -> ImportResult<Self> {
        match probe_unstyled(value) {
            Ok(slides) => {
                tracing::debug!(slides = slides.len(), "payload matched the interchange shape");
                Ok(SlidesPayload::Unstyled(slides))
            }
            Err(reason) => {
                tracing::debug!(%reason, "payload is not interchange content, trying the document shape");
                Ok(SlidesPayload::Styled(parse_styled(value)?))
            }
        }
    }
}

/// Strict probe for the interchange shape. The first slide that carries
/// anything beyond `elements` of `{"type", "text"}` pairs rejects the
/// whole payload
fn probe_unstyled(value: &Value) -> Result<Vec<UnstyledSlide>, String> {
    let Some(items) = value.as_array() else {
        return Err("payload is not an array of slides".to_string());
    };
    let mut slides = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<UnstyledSlide>(item.clone()) {
            Ok(slide) => slides.push(slide),
            Err(err) => return Err(format!("slides[{i}]: {err}")),
        }
    }
    Ok(slides)
}

/// Parse the styled document shape, aggregating one issue per bad slide,
/// then run value-constraint validation over the result
fn parse_styled(value: &Value) -> ImportResult<Vec<Slide>> {
    let Some(items) = value.as_array() else {
        return Err(ValidationError::single("slides", "expected an array of slides").into());
    };
    let mut issues = Issues::new();
    let mut slides = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<Slide>(item.clone()) {
            Ok(slide) => slides.push(slide),
            Err(err) => issues.push(format!("slides[{i}]"), err.to_string()),
        }
    }
    issues.into_result()?;
    validate_slides(&slides)?;
    Ok(slides)
}

// ============================================================================
// Normalization
// ============================================================================

/// The outcome of normalizing a slides payload into document form
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSlides {
    /// Slides ready to replace the form's field array
    pub slides: Vec<Slide>,
    /// How many input slides were dropped for having no usable content
    pub filtered_out: usize,
}

/// Normalize a slides payload: detect its shape, drop content-free slides,
/// and upgrade interchange slides to the document shape
pub fn normalize_slides(value: &Value) -> ImportResult<NormalizedSlides> {
    match SlidesPayload::detect(value)? {
        SlidesPayload::Unstyled(slides) => upgrade_unstyled(slides),
        SlidesPayload::Styled(slides) => keep_content_bearing(slides),
    }
}

fn upgrade_unstyled(slides: Vec<UnstyledSlide>) -> ImportResult<NormalizedSlides> {
    let total = slides.len();
    let kept: Vec<UnstyledSlide> = slides
        .into_iter()
        .filter(|slide| slide.has_content())
        .collect();
    let filtered_out = total - kept.len();
    if filtered_out > 0 {
        tracing::warn!(filtered_out, "filtered out slides with no usable content");
    }

    let mut upgraded = Vec::with_capacity(kept.len());
    for (index, slide) in kept.into_iter().enumerate() {
        upgraded.push(upgrade_slide(index, slide)?);
    }
    Ok(NormalizedSlides {
        slides: upgraded,
        filtered_out,
    })
}

fn keep_content_bearing(slides: Vec<Slide>) -> ImportResult<NormalizedSlides> {
    let total = slides.len();
    let kept: Vec<Slide> = slides
        .into_iter()
        .filter(|slide| slide.has_content())
        .collect();
    let filtered_out = total - kept.len();
    if filtered_out > 0 {
        tracing::warn!(filtered_out, "filtered out slides with no usable content");
    }
    Ok(NormalizedSlides {
        slides: kept,
        filtered_out,
    })
}

/// Upgrade one interchange slide to the document shape, filling default
/// styling and the default background. Any element that cannot be upgraded
/// fails the whole import
fn upgrade_slide(index: usize, slide: UnstyledSlide) -> ImportResult<Slide> {
    let mut elements = Vec::with_capacity(slide.elements.len());
    for element in slide.elements {
        match upgrade_element(&element) {
            Some(upgraded) => elements.push(upgraded),
            None => {
                tracing::error!(index, kind = element.kind.label(), "failed to upgrade slide");
                return Err(ImportError::SlideUpgrade {
                    index,
                    message: format!(
                        "{} element cannot be upgraded without an image source",
                        element.kind.label()
                    ),
                });
            }
        }
    }
    Ok(Slide::new(elements))
}

/// Interchange elements carry only text, so image elements have nothing to
/// upgrade from
fn upgrade_element(element: &UnstyledElement) -> Option<Element> {
    match element.kind {
        ElementKind::Title => Some(Element::title(element.text.clone())),
        ElementKind::Subtitle => Some(Element::subtitle(element.text.clone())),
        ElementKind::Description => Some(Element::description(element.text.clone())),
        ElementKind::Image => None,
    }
}

// ============================================================================
// Config Parsing
// ============================================================================

/// Parse a settings payload into a document configuration, reporting
/// failures per section, then run value-constraint validation
pub fn parse_config(value: &Value) -> ImportResult<DocumentConfig> {
    let Some(obj) = value.as_object() else {
        return Err(ValidationError::single("config", "expected a JSON object").into());
    };

    let mut issues = Issues::new();
    let brand: Option<Brand> = parse_required_section(obj, "brand", &mut issues);
    let theme: Theme = parse_optional_section(obj, "theme", &mut issues);
    let fonts: Fonts = parse_optional_section(obj, "fonts", &mut issues);
    let page_number: PageNumbers = parse_optional_section(obj, "pageNumber", &mut issues);
    issues.into_result()?;

    let config = DocumentConfig {
        // into_result returned early unless every section parsed
        brand: brand.unwrap_or_default(),
        theme,
        fonts,
        page_number,
    };
    validate_config(&config)?;
    Ok(config)
}

fn parse_required_section<T: DeserializeOwned>(
    obj: &Map<String, Value>,
    key: &str,
    issues: &mut Issues,
) -> Option<T> {
    match obj.get(key) {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(section) => Some(section),
            Err(err) => {
                issues.push(key, err.to_string());
                None
            }
        },
        None => {
            issues.push(key, "missing required section");
            None
        }
    }
}

fn parse_optional_section<T: DeserializeOwned + Default>(
    obj: &Map<String, Value>,
    key: &str,
    issues: &mut Issues,
) -> T {
    match obj.get(key) {
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(section) => section,
            Err(err) => {
                issues.push(key, err.to_string());
                T::default()
            }
        },
        None => T::default(),
    }
}
