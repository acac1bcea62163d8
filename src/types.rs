//! Core types for the carousel document model.
//!
//! This module defines the data structures the rest of the engine operates on:
//! slides and their elements, image references, text styling, and the document
//! configuration (brand, theme, fonts, page numbers). All wire-facing structs
//! serialize to the camelCase JSON the editor's dialogs exchange.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DOCUMENT_FILENAME, PLACEHOLDER_AVATAR_URL, PLACEHOLDER_IMAGE_URL,
};

// ============================================================================
// Image Types
// ============================================================================

/// Where an image's bytes came from
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A remote URL fetched at render time
    #[default]
    Url,
    /// A file picked from disk, inlined as a data URI
    Upload,
    /// Clipboard bytes, inlined as a data URI
    Paste,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Url => "URL",
            SourceKind::Upload => "Upload",
            SourceKind::Paste => "Paste",
        }
    }

    pub fn all() -> &'static [SourceKind] {
        &[SourceKind::Url, SourceKind::Upload, SourceKind::Paste]
    }
}

/// An image source: the kind plus the URL or data URI to load
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    /// How the image was provided
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// URL or data URI
    pub src: String,
}

impl ImageSource {
    /// Reference a remote image by URL
    pub fn url(src: impl Into<String>) -> Self {
        Self {
            kind: SourceKind::Url,
            src: src.into(),
        }
    }

    /// Whether any source has been set yet
    pub fn is_set(&self) -> bool {
        !self.src.is_empty()
    }
}

/// How an image is fitted into its box
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectFit {
    /// Fill the box, cropping overflow
    #[default]
    Cover,
    /// Fit entirely inside the box, letterboxing as needed
    Contain,
    /// Stretch to the box, ignoring aspect ratio
    Fill,
}

impl ObjectFit {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectFit::Cover => "Cover",
            ObjectFit::Contain => "Contain",
            ObjectFit::Fill => "Fill",
        }
    }

    pub fn all() -> &'static [ObjectFit] {
        &[ObjectFit::Cover, ObjectFit::Contain, ObjectFit::Fill]
    }
}

/// Presentation styling for an image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyle {
    /// Opacity in percent, 0 (transparent) to 100 (opaque)
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    /// Fit mode within the image's box
    #[serde(default)]
    pub object_fit: ObjectFit,
    /// Explicit width in pixels, if the user resized the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Explicit height in pixels, if the user resized the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

fn default_opacity() -> f32 {
    100.0
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            opacity: default_opacity(),
            object_fit: ObjectFit::default(),
            width: None,
            height: None,
        }
    }
}

/// A styled image reference: source plus presentation styling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Where the image comes from
    pub source: ImageSource,
    /// How it is presented
    #[serde(default)]
    pub style: ImageStyle,
}

impl ImageRef {
    /// Reference a remote image by URL with default styling
    pub fn from_url(src: impl Into<String>) -> Self {
        Self {
            source: ImageSource::url(src),
            style: ImageStyle::default(),
        }
    }

    /// The background every new slide starts with: no source set, so the
    /// renderer falls back to the theme background color
    pub fn background_default() -> Self {
        Self::from_url("")
    }

    /// Placeholder avatar used until the user picks their own
    pub fn avatar_default() -> Self {
        Self::from_url(PLACEHOLDER_AVATAR_URL)
    }

    /// Placeholder content image used when an image element has no source
    pub fn placeholder() -> Self {
        Self::from_url(PLACEHOLDER_IMAGE_URL)
    }
}

// ============================================================================
// Text Styling
// ============================================================================

/// Relative font size step for a text element
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    pub fn all() -> &'static [FontSize] {
        &[FontSize::Small, FontSize::Medium, FontSize::Large]
    }
}

/// Horizontal alignment of a text element
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn label(&self) -> &'static str {
        match self {
            TextAlign::Left => "Left",
            TextAlign::Center => "Center",
            TextAlign::Right => "Right",
        }
    }

    pub fn all() -> &'static [TextAlign] {
        &[TextAlign::Left, TextAlign::Center, TextAlign::Right]
    }
}

/// Vertical placement of a text element within the slide body
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlign {
    pub fn label(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "Top",
            VerticalAlign::Center => "Center",
            VerticalAlign::Bottom => "Bottom",
        }
    }

    pub fn all() -> &'static [VerticalAlign] {
        &[VerticalAlign::Top, VerticalAlign::Center, VerticalAlign::Bottom]
    }
}

/// Presentation styling for a text element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Relative size step
    #[serde(default)]
    pub font_size: FontSize,
    /// Horizontal alignment
    #[serde(default)]
    pub align: TextAlign,
    /// Vertical placement within the slide body
    #[serde(default)]
    pub vertical_align: VerticalAlign,
}

// ============================================================================
// Elements
// ============================================================================

/// The role of an element on a slide
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Title,
    Subtitle,
    Description,
    Image,
}

impl ElementKind {
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Title => "Title",
            ElementKind::Subtitle => "Subtitle",
            ElementKind::Description => "Description",
            ElementKind::Image => "Image",
        }
    }

    pub fn all() -> &'static [ElementKind] {
        &[
            ElementKind::Title,
            ElementKind::Subtitle,
            ElementKind::Description,
            ElementKind::Image,
        ]
    }
}

/// A text-bearing element: the content string plus its styling
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    #[serde(default)]
    pub style: TextStyle,
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }
}

/// An image element: the source plus its styling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    pub source: ImageSource,
    #[serde(default)]
    pub style: ImageStyle,
}

impl ImageElement {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            style: ImageStyle::default(),
        }
    }
}

/// One element on a slide, discriminated by its `type` tag on the wire
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Title(TextElement),
    Subtitle(TextElement),
    Description(TextElement),
    Image(ImageElement),
}

impl Element {
    /// Create a title element with default styling
    pub fn title(text: impl Into<String>) -> Self {
        Element::Title(TextElement::new(text))
    }

    /// Create a subtitle element with default styling
    pub fn subtitle(text: impl Into<String>) -> Self {
        Element::Subtitle(TextElement::new(text))
    }

    /// Create a description element with default styling
    pub fn description(text: impl Into<String>) -> Self {
        Element::Description(TextElement::new(text))
    }

    /// Create an image element with default styling
    pub fn image(source: ImageSource) -> Self {
        Element::Image(ImageElement::new(source))
    }

    /// The role this element plays on the slide
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Title(_) => ElementKind::Title,
            Element::Subtitle(_) => ElementKind::Subtitle,
            Element::Description(_) => ElementKind::Description,
            Element::Image(_) => ElementKind::Image,
        }
    }

    /// The element's text content, if it has any
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Title(t) | Element::Subtitle(t) | Element::Description(t) => {
                Some(t.text.as_str())
            }
            Element::Image(_) => None,
        }
    }

    /// Mutable access to the text content, if it has any
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Element::Title(t) | Element::Subtitle(t) | Element::Description(t) => {
                Some(&mut t.text)
            }
            Element::Image(_) => None,
        }
    }

    /// The image payload, if this is an image element
    pub fn image_mut(&mut self) -> Option<&mut ImageElement> {
        match self {
            Element::Image(img) => Some(img),
            _ => None,
        }
    }

    /// Whether this element contributes visible content to its slide.
    /// Text elements count only when their text is non-blank; image
    /// elements always count.
    pub fn has_content(&self) -> bool {
        match self.text() {
            Some(text) => !text.trim().is_empty(),
            None => true,
        }
    }
}

// ============================================================================
// Unstyled Interchange Shape
// ============================================================================

/// A content-only element as carried by the interchange format:
/// `{"type": …, "text": …}` and nothing else.
///
/// Rejects any extra field, which is what keeps the interchange shape and
/// the styled document shape mutually exclusive during import.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnstyledElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub text: String,
}

impl UnstyledElement {
    pub fn new(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A content-only slide: an element list without any styling payload.
/// A missing `elements` key reads as an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnstyledSlide {
    #[serde(default)]
    pub elements: Vec<UnstyledElement>,
}

impl UnstyledSlide {
    pub fn new(elements: Vec<UnstyledElement>) -> Self {
        Self { elements }
    }

    /// Whether any element carries non-blank text
    pub fn has_content(&self) -> bool {
        self.elements.iter().any(|el| !el.text.trim().is_empty())
    }
}

// ============================================================================
// Slides
// ============================================================================

/// One slide: its element list plus the background image layer.
///
/// `backgroundImage` has no default on purpose: its presence is what marks a
/// payload as the styled document shape rather than the interchange shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub elements: Vec<Element>,
    pub background_image: ImageRef,
}

impl Slide {
    /// Create a slide with the default background
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            background_image: ImageRef::background_default(),
        }
    }

    /// Create a slide with an explicit background
    pub fn with_background(elements: Vec<Element>, background_image: ImageRef) -> Self {
        Self {
            elements,
            background_image,
        }
    }

    /// Whether this slide contributes visible content: at least one
    /// non-blank text element or one image element
    pub fn has_content(&self) -> bool {
        self.elements.iter().any(Element::has_content)
    }
}

/// Starter layouts offered by the "add slide" menu
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideTemplate {
    Intro,
    #[default]
    Content,
    Outro,
}

impl SlideTemplate {
    pub fn label(&self) -> &'static str {
        match self {
            SlideTemplate::Intro => "Intro",
            SlideTemplate::Content => "Content",
            SlideTemplate::Outro => "Outro",
        }
    }

    pub fn all() -> &'static [SlideTemplate] {
        &[
            SlideTemplate::Intro,
            SlideTemplate::Content,
            SlideTemplate::Outro,
        ]
    }
}

impl Slide {
    /// A pre-filled slide for the given template
    pub fn from_template(template: SlideTemplate) -> Self {
        match template {
            SlideTemplate::Intro => Slide::new(vec![
                Element::title("Your title here"),
                Element::subtitle("A one-liner that makes people swipe"),
            ]),
            SlideTemplate::Content => Slide::new(vec![
                Element::title("Main point"),
                Element::description("One idea per slide keeps the post easy to follow."),
            ]),
            SlideTemplate::Outro => Slide::new(vec![
                Element::title("Enjoyed this?"),
                Element::subtitle("Follow for more posts like this one"),
            ]),
        }
    }
}

// ============================================================================
// Document Configuration
// ============================================================================

/// The author identity shown on every slide
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Display name, at most 30 characters
    pub name: String,
    /// Social handle, e.g. `@janedoe`
    pub handle: String,
    /// Avatar image, falls back to a placeholder
    #[serde(default = "ImageRef::avatar_default")]
    pub avatar: ImageRef,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            handle: "@yourhandle".to_string(),
            avatar: ImageRef::avatar_default(),
        }
    }
}

/// The document color palette, as `#rrggbb` hex strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Accent color for titles and highlights
    #[serde(default = "default_primary_color")]
    pub primary: String,
    /// Secondary accent for subtitles and chrome
    #[serde(default = "default_secondary_color")]
    pub secondary: String,
    /// Slide background color
    #[serde(default = "default_background_color")]
    pub background: String,
}

fn default_primary_color() -> String {
    "#4f46e5".to_string()
}

fn default_secondary_color() -> String {
    "#818cf8".to_string()
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: default_primary_color(),
            secondary: default_secondary_color(),
            background: default_background_color(),
        }
    }
}

/// Font choices, stored as identifiers from the built-in font table
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    /// Font id for titles
    #[serde(default = "default_title_font")]
    pub title: String,
    /// Font id for body text
    #[serde(default = "default_body_font")]
    pub body: String,
}

fn default_title_font() -> String {
    "dm-serif-display".to_string()
}

fn default_body_font() -> String {
    "inter".to_string()
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            title: default_title_font(),
            body: default_body_font(),
        }
    }
}

/// Font table mapping font ids to CSS family names
static FONT_FAMILIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("inter", "Inter"),
        ("roboto", "Roboto"),
        ("open-sans", "Open Sans"),
        ("lato", "Lato"),
        ("montserrat", "Montserrat"),
        ("poppins", "Poppins"),
        ("space-grotesk", "Space Grotesk"),
        ("dm-serif-display", "DM Serif Display"),
        ("playfair-display", "Playfair Display"),
        ("archivo-black", "Archivo Black"),
        ("ultra", "Ultra"),
        ("syne", "Syne"),
    ])
});

/// Look up the family name for a font id
pub fn font_family(id: &str) -> Option<&'static str> {
    FONT_FAMILIES.get(id).copied()
}

impl Fonts {
    /// Family name for the title font, if the id is known
    pub fn title_family(&self) -> Option<&'static str> {
        font_family(&self.title)
    }

    /// Family name for the body font, if the id is known
    pub fn body_family(&self) -> Option<&'static str> {
        font_family(&self.body)
    }
}

/// Page number display settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNumbers {
    /// Whether slide numbers are rendered in the footer
    #[serde(default = "default_show_numbers")]
    pub show_numbers: bool,
}

fn default_show_numbers() -> bool {
    true
}

impl Default for PageNumbers {
    fn default() -> Self {
        Self {
            show_numbers: default_show_numbers(),
        }
    }
}

/// Everything about a document that is not slide content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConfig {
    pub brand: Brand,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub fonts: Fonts,
    #[serde(default)]
    pub page_number: PageNumbers,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            theme: Theme::default(),
            fonts: Fonts::default(),
            page_number: PageNumbers::default(),
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// A complete carousel document: configuration plus the slide deck
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Working title, used to derive export filenames
    #[serde(default = "default_filename")]
    pub filename: String,
    pub config: DocumentConfig,
    pub slides: Vec<Slide>,
}

fn default_filename() -> String {
    DEFAULT_DOCUMENT_FILENAME.to_string()
}

impl Document {
    /// The document a fresh session opens with: an intro, a couple of
    /// content slides, and an outro
    pub fn starter() -> Self {
        Self {
            filename: default_filename(),
            config: DocumentConfig::default(),
            slides: vec![
                Slide::from_template(SlideTemplate::Intro),
                Slide::from_template(SlideTemplate::Content),
                Slide::from_template(SlideTemplate::Content),
                Slide::from_template(SlideTemplate::Outro),
            ],
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::starter()
    }
}
