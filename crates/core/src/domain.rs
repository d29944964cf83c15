use serde::Serialize;

/// Display label for an event with neither a name nor a folder.
pub const UNTITLED_EVENT: &str = "Untitled event";

/// A single photo after normalization. `file` and `name` are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub file: String,
    pub name: String,
    pub keywords: Vec<String>,
}

impl ImageRecord {
    /// Build a record from a bare filename, without keywords.
    pub fn from_file(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
            keywords: Vec::new(),
        }
    }
}

/// A group of photos living under one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub folder: String,
    pub name: String,
    pub images: Vec<ImageRecord>,
}

/// Which manifest shape a gallery is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Layout {
    /// `{ "images": [...] }`
    #[default]
    Flat,
    /// `{ "events": [{ "folder", "name", "images" }] }`
    Events,
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Flat => write!(f, "flat"),
            Layout::Events => write!(f, "events"),
        }
    }
}

/// The canonical, immutable gallery model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GalleryModel {
    Flat(Vec<ImageRecord>),
    Events(Vec<EventRecord>),
}

impl GalleryModel {
    /// An empty model of the given layout.
    pub fn empty(layout: Layout) -> Self {
        match layout {
            Layout::Flat => GalleryModel::Flat(Vec::new()),
            Layout::Events => GalleryModel::Events(Vec::new()),
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            GalleryModel::Flat(_) => Layout::Flat,
            GalleryModel::Events(_) => Layout::Events,
        }
    }

    /// True when there is nothing to show at the top level.
    pub fn is_empty(&self) -> bool {
        match self {
            GalleryModel::Flat(images) => images.is_empty(),
            GalleryModel::Events(events) => events.is_empty(),
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        match self {
            GalleryModel::Flat(_) => &[],
            GalleryModel::Events(events) => events,
        }
    }
}
