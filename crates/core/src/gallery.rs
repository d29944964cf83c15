use std::collections::HashSet;

use crate::config::GalleryConfig;
use crate::domain::{EventRecord, GalleryModel, ImageRecord, Layout};
use crate::error::{Error, Result};
use crate::filter::TagSelection;
use crate::loader::{LoadedManifest, ManifestSource};
use crate::navigation::{Key, Lightbox, Screen};
use crate::view::{EventCard, GalleryView, GridCell, LightboxView, PLACEHOLDER_IMAGE};
use crate::{filter, keywords, loader, url, view};

/// A user interaction, as delivered by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTag(String),
    /// The "All" button: clear every selected tag.
    SelectAll,
    OpenImage(usize),
    CloseLightbox,
    NextImage,
    PrevImage,
    OpenEvent(usize),
    BackToEvents,
    Key(Key),
    /// The image at this URL failed to load.
    ImageFailed(String),
}

/// The main entry point: an immutable gallery model plus the selection state
/// derived from user interaction.
#[derive(Debug, Clone)]
pub struct Gallery {
    base: String,
    model: GalleryModel,
    screen: Screen,
    selection: TagSelection,
    visible: Vec<ImageRecord>,
    lightbox: Lightbox,
    failed: HashSet<String>,
}

impl Gallery {
    /// Build a gallery over `model`, resolving image URLs against `base`.
    pub fn new(model: GalleryModel, base: impl Into<String>) -> Self {
        let mut gallery = Self {
            base: base.into(),
            screen: match model.layout() {
                Layout::Flat => Screen::Images,
                Layout::Events => Screen::EventGrid,
            },
            model,
            selection: TagSelection::new(),
            visible: Vec::new(),
            lightbox: Lightbox::Closed,
            failed: HashSet::new(),
        };
        gallery.refilter();
        gallery
    }

    /// Fetch the manifest from `source` and build the gallery. Never fails;
    /// see [`loader::load_manifest`] for the fallback policy.
    pub fn load(source: &dyn ManifestSource, config: &GalleryConfig) -> (Self, loader::ManifestOrigin) {
        let LoadedManifest { model, origin } = loader::load_manifest(source, config);
        (Self::new(model, config.base.clone()), origin)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn model(&self) -> &GalleryModel {
        &self.model
    }

    pub fn layout(&self) -> Layout {
        self.model.layout()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selection(&self) -> &TagSelection {
        &self.selection
    }

    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// The images currently shown in the grid, after filtering.
    pub fn visible_images(&self) -> &[ImageRecord] {
        &self.visible
    }

    /// The open event, if any.
    pub fn current_event(&self) -> Option<&EventRecord> {
        self.screen
            .current_event()
            .and_then(|k| self.model.events().get(k))
    }

    /// The unfiltered collection the grid draws from: every image of a flat
    /// gallery, the open event's images, or nothing on the event grid.
    pub fn active_images(&self) -> &[ImageRecord] {
        match &self.model {
            GalleryModel::Flat(images) => images,
            GalleryModel::Events(_) => self
                .current_event()
                .map(|event| event.images.as_slice())
                .unwrap_or_default(),
        }
    }

    fn active_folder(&self) -> Option<&str> {
        self.current_event().map(|event| event.folder.as_str())
    }

    /// URL of an image of the active collection.
    pub fn image_url(&self, image: &ImageRecord) -> String {
        url::image_url(&self.base, self.active_folder(), &image.file)
    }

    fn require_image_screen(&self) -> Result<()> {
        if self.screen == Screen::EventGrid {
            return Err(Error::NoEventOpen);
        }
        Ok(())
    }

    /// Recompute the visible images from scratch and rewind the lightbox.
    fn refilter(&mut self) {
        self.visible = filter::filtered_images(self.active_images(), &self.selection);
        self.lightbox.collection_changed(self.visible.len());
    }

    // ── Filtering ────────────────────────────────────────────────────

    /// Toggle a filter tag. Returns whether the tag is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> Result<bool> {
        self.require_image_screen()?;
        let selected = self.selection.toggle(tag);
        self.refilter();
        tracing::debug!(tag, selected, visible = self.visible.len(), "Toggled tag");
        Ok(selected)
    }

    /// Clear the tag selection and show the whole collection.
    pub fn select_all(&mut self) {
        self.selection.clear();
        self.refilter();
    }

    // ── Lightbox ─────────────────────────────────────────────────────

    pub fn open_image(&mut self, index: usize) -> Result<()> {
        self.require_image_screen()?;
        self.lightbox.open(index, self.visible.len())
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    pub fn next_image(&mut self) {
        self.lightbox.next(self.visible.len());
    }

    pub fn prev_image(&mut self) {
        self.lightbox.prev(self.visible.len());
    }

    /// Keyboard navigation. Keys are ignored while the lightbox is closed;
    /// returns whether the key was handled.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.lightbox.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.close_lightbox(),
            Key::ArrowRight => self.next_image(),
            Key::ArrowLeft => self.prev_image(),
        }
        true
    }

    // ── Events ───────────────────────────────────────────────────────

    fn require_event_gallery(&self) -> Result<()> {
        if self.layout() != Layout::Events {
            return Err(Error::NotEventGallery);
        }
        Ok(())
    }

    /// Open event `k`: clear the filter and show that event's images.
    pub fn open_event(&mut self, k: usize) -> Result<()> {
        self.require_event_gallery()?;
        if k >= self.model.events().len() {
            return Err(Error::EventNotFound(k));
        }
        self.screen = Screen::EventOpen(k);
        self.selection.clear();
        self.lightbox.close();
        self.refilter();
        tracing::debug!(event = k, images = self.visible.len(), "Opened event");
        Ok(())
    }

    /// Return to the event grid, clearing the filter and closing the lightbox.
    pub fn back_to_events(&mut self) -> Result<()> {
        self.require_event_gallery()?;
        self.screen = Screen::EventGrid;
        self.selection.clear();
        self.lightbox.close();
        self.refilter();
        Ok(())
    }

    /// Hide the grid cell of an image whose resource failed to load.
    pub fn mark_image_failed(&mut self, url: impl Into<String>) {
        self.failed.insert(url.into());
    }

    /// Apply a renderer-delivered action. Returns whether the state changed;
    /// keys pressed while the lightbox is closed are ignored.
    pub fn apply(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::ToggleTag(tag) => {
                self.toggle_tag(&tag)?;
            }
            Action::SelectAll => self.select_all(),
            Action::OpenImage(index) => self.open_image(index)?,
            Action::CloseLightbox => self.close_lightbox(),
            Action::NextImage => self.next_image(),
            Action::PrevImage => self.prev_image(),
            Action::OpenEvent(k) => self.open_event(k)?,
            Action::BackToEvents => self.back_to_events()?,
            Action::Key(key) => return Ok(self.handle_key(key)),
            Action::ImageFailed(url) => self.mark_image_failed(url),
        }
        Ok(true)
    }

    // ── View ─────────────────────────────────────────────────────────

    /// Snapshot of the current state for a renderer.
    pub fn view(&self) -> GalleryView {
        let on_event_grid = self.screen == Screen::EventGrid;

        let events = if on_event_grid {
            self.model
                .events()
                .iter()
                .enumerate()
                .map(|(index, event)| {
                    let preview = event
                        .images
                        .first()
                        .map_or(PLACEHOLDER_IMAGE, |image| image.file.as_str());
                    let preview_url = url::image_url(&self.base, Some(&event.folder), preview);
                    EventCard {
                        index,
                        name: event.name.clone(),
                        photo_count: event.images.len(),
                        hidden_preview: self.failed.contains(&preview_url),
                        preview_url,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let grid: Vec<GridCell> = self
            .visible
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let url = self.image_url(image);
                GridCell {
                    index,
                    name: image.name.clone(),
                    file: image.file.clone(),
                    hidden: self.failed.contains(&url),
                    url,
                }
            })
            .collect();

        let lightbox = self.lightbox.index().and_then(|index| {
            self.visible.get(index).map(|image| LightboxView {
                index,
                name: image.name.clone(),
                url: self.image_url(image),
                counter: format!("{} / {}", index + 1, self.visible.len()),
            })
        });

        let message = if on_event_grid {
            self.model.is_empty().then(|| view::NO_EVENTS.to_string())
        } else if self.active_images().is_empty() {
            Some(match self.layout() {
                Layout::Flat => view::NO_IMAGES.to_string(),
                Layout::Events => view::NO_IMAGES_IN_EVENT.to_string(),
            })
        } else if self.visible.is_empty() {
            Some(view::NO_MATCHES.to_string())
        } else {
            None
        };

        GalleryView {
            layout: self.layout(),
            screen: self.screen,
            title: self.current_event().map(|event| event.name.clone()),
            events,
            filters: if on_event_grid {
                Vec::new()
            } else {
                keywords::filter_buttons(self.active_images(), &self.selection)
            },
            grid,
            lightbox,
            message,
        }
    }
}
