use crate::domain::Layout;

/// Where images live when no base is configured.
pub const DEFAULT_BASE: &str = "images";

/// Files shown when a flat manifest cannot be fetched.
pub const DEFAULT_FALLBACK_IMAGES: [&str; 5] = [
    "image1.jpg",
    "image2.jpg",
    "image3.jpg",
    "image4.jpg",
    "image5.jpg",
];

/// Startup settings for a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Directory or URL holding `images.json` and the images themselves.
    pub base: String,
    pub layout: Layout,
    /// Used in place of the manifest for flat galleries when it is unavailable.
    pub fallback_images: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            layout: Layout::Flat,
            fallback_images: DEFAULT_FALLBACK_IMAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GalleryConfig {
    pub fn new(base: impl Into<String>, layout: Layout) -> Self {
        Self {
            base: base.into(),
            layout,
            ..Self::default()
        }
    }
}
