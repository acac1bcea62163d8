//! Engine-wide constants.
//!
//! Centralizes the limits the editor enforces and the defaults baked into
//! fresh documents, so they live in one place instead of being scattered
//! through the model and the import pipeline.

// ============================================================================
// Brand & Config Limits
// ============================================================================

/// Maximum length of the brand display name, in characters
pub const MAX_BRAND_NAME_LEN: usize = 30;

// ============================================================================
// Image Limits
// ============================================================================

/// Minimum image opacity (fully transparent)
pub const MIN_OPACITY: f32 = 0.0;

/// Maximum image opacity (fully opaque)
pub const MAX_OPACITY: f32 = 100.0;

/// Minimum edge length when resizing an image element, in pixels
pub const MIN_IMAGE_EDGE: f32 = 50.0;

/// Maximum display dimension for ingested images (scaled down if larger)
pub const MAX_UPLOAD_EDGE: f32 = 800.0;

/// Fallback URL rendered when an image element has no source yet
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x200";

/// Fallback avatar shown until the user picks their own
pub const PLACEHOLDER_AVATAR_URL: &str = "https://placehold.co/100x100";

// ============================================================================
// Import & Reconciliation
// ============================================================================

/// Upper bound on how many trailing rows a single count-correction pass
/// may remove after a bulk slide replace
pub const TRIM_REMOVAL_BUDGET: usize = 64;

// ============================================================================
// Export
// ============================================================================

/// Working title of a freshly created document
pub const DEFAULT_DOCUMENT_FILENAME: &str = "carousel";

/// Suffix appended to the document filename for a settings export
pub const SETTINGS_EXPORT_SUFFIX: &str = "settings";

/// Suffix appended to the document filename for a content export
pub const CONTENT_EXPORT_SUFFIX: &str = "content";
