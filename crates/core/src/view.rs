use serde::Serialize;

use crate::domain::Layout;
use crate::error::Result;
use crate::keywords::FilterButton;
use crate::navigation::Screen;
use crate::{Action, Gallery};

pub const NO_IMAGES: &str = "No images found.";
pub const NO_EVENTS: &str = "No events found.";
pub const NO_IMAGES_IN_EVENT: &str = "No images in this event.";
pub const NO_MATCHES: &str = "No images match the selected tags.";

/// Preview shown for an event without images.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Everything a renderer needs to paint the gallery, derived after each transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub layout: Layout,
    pub screen: Screen,
    /// Name of the open event, if any.
    pub title: Option<String>,
    /// Event cards; only populated on the event grid.
    pub events: Vec<EventCard>,
    /// Filter bar; empty means hidden.
    pub filters: Vec<FilterButton>,
    /// Thumbnail grid over the visible images.
    pub grid: Vec<GridCell>,
    pub lightbox: Option<LightboxView>,
    /// Informational text shown in place of an empty grid.
    pub message: Option<String>,
}

impl GalleryView {
    /// Background scrolling is locked while the lightbox is showing.
    pub fn scroll_locked(&self) -> bool {
        self.lightbox.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub index: usize,
    pub name: String,
    pub photo_count: usize,
    /// First image of the event, or its placeholder when it has none.
    pub preview_url: String,
    pub hidden_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Position in the visible images, as accepted by `open_image`.
    pub index: usize,
    pub name: String,
    pub file: String,
    pub url: String,
    /// The image failed to load; its cell is not drawn.
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    pub index: usize,
    pub name: String,
    pub url: String,
    /// `"{index + 1} / {count}"`
    pub counter: String,
}

/// Paints a [`GalleryView`]. Implemented outside the core.
pub trait RenderAdapter {
    fn render(&mut self, view: &GalleryView);
}

impl<F: FnMut(&GalleryView)> RenderAdapter for F {
    fn render(&mut self, view: &GalleryView) {
        self(view)
    }
}

/// Drives a [`Gallery`]: apply a transition, derive the view, render it.
pub struct Session<R: RenderAdapter> {
    gallery: Gallery,
    renderer: R,
}

impl<R: RenderAdapter> Session<R> {
    pub fn new(gallery: Gallery, renderer: R) -> Self {
        Self { gallery, renderer }
    }

    /// Render the initial state.
    pub fn start(&mut self) {
        self.renderer.render(&self.gallery.view());
    }

    /// Apply `action`; if it changed the state, render it. Rejected actions and
    /// ignored keys render nothing.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if self.gallery.apply(action)? {
            self.renderer.render(&self.gallery.view());
        }
        Ok(())
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }
}
