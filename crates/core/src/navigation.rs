//! Lightbox and screen state machines.
//!
//! Both machines only ever hold indices that are valid for the collection they
//! were last told about; callers pass the current collection length on every
//! transition instead of the machine caching it.

use serde::Serialize;

use crate::error::{Error, Result};

/// Lightbox state over the currently visible images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index } => Some(*index),
            Lightbox::Closed => None,
        }
    }

    /// Show image `index` of a collection of `len`. Never opens on an empty collection.
    pub fn open(&mut self, index: usize, len: usize) -> Result<()> {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        *self = Lightbox::Open { index };
        Ok(())
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Advance with wrap-around. No-op while closed.
    pub fn next(&mut self, len: usize) {
        if let Lightbox::Open { index } = self {
            if len > 0 {
                *index = (*index + 1) % len;
            }
        }
    }

    /// Step back with wrap-around. No-op while closed.
    pub fn prev(&mut self, len: usize) {
        if let Lightbox::Open { index } = self {
            if len > 0 {
                *index = (*index + len - 1) % len;
            }
        }
    }

    /// The visible collection was recomputed: rewind to the first image, or
    /// close if nothing is left to show.
    pub fn collection_changed(&mut self, len: usize) {
        if self.is_open() {
            *self = if len == 0 {
                Lightbox::Closed
            } else {
                Lightbox::Open { index: 0 }
            };
        }
    }
}

/// Which screen is showing. Flat galleries stay on `Images`; event galleries
/// move between the event grid and one open event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Images,
    EventGrid,
    EventOpen(usize),
}

impl Screen {
    pub fn current_event(&self) -> Option<usize> {
        match self {
            Screen::EventOpen(k) => Some(*k),
            Screen::Images | Screen::EventGrid => None,
        }
    }
}

/// Keys the lightbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowRight,
    ArrowLeft,
}

impl Key {
    /// Parse a DOM-style key name (`"Escape"`, `"ArrowRight"`, `"ArrowLeft"`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(Key::Escape),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowLeft" => Some(Key::ArrowLeft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_valid_index() {
        let mut lb = Lightbox::Closed;
        lb.open(2, 3).unwrap();
        assert_eq!(lb, Lightbox::Open { index: 2 });
        assert_eq!(lb.index(), Some(2));
    }

    #[test]
    fn test_open_out_of_range() {
        let mut lb = Lightbox::Closed;
        let err = lb.open(3, 3).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_open_empty_collection_rejected() {
        let mut lb = Lightbox::Closed;
        assert!(lb.open(0, 0).is_err());
        assert!(!lb.is_open());
    }

    #[test]
    fn test_next_wraps() {
        let mut lb = Lightbox::Closed;
        lb.open(2, 3).unwrap();
        lb.next(3);
        assert_eq!(lb.index(), Some(0));
    }

    #[test]
    fn test_prev_wraps() {
        let mut lb = Lightbox::Closed;
        lb.open(0, 3).unwrap();
        lb.prev(3);
        assert_eq!(lb.index(), Some(2));
        lb.prev(3);
        assert_eq!(lb.index(), Some(1));
    }

    #[test]
    fn test_single_image_wraps_onto_itself() {
        let mut lb = Lightbox::Closed;
        lb.open(0, 1).unwrap();
        lb.next(1);
        assert_eq!(lb.index(), Some(0));
        lb.prev(1);
        assert_eq!(lb.index(), Some(0));
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut lb = Lightbox::Closed;
        lb.next(3);
        lb.prev(3);
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_close() {
        let mut lb = Lightbox::Open { index: 1 };
        lb.close();
        assert_eq!(lb, Lightbox::Closed);
    }

    // ── collection_changed ──────────────────────────────────────────

    #[test]
    fn test_collection_change_resets_index() {
        let mut lb = Lightbox::Closed;
        lb.open(2, 3).unwrap();
        lb.collection_changed(1);
        assert_eq!(lb.index(), Some(0));
    }

    #[test]
    fn test_collection_change_to_empty_closes() {
        let mut lb = Lightbox::Open { index: 2 };
        lb.collection_changed(0);
        assert_eq!(lb, Lightbox::Closed);
    }

    #[test]
    fn test_collection_change_while_closed_stays_closed() {
        let mut lb = Lightbox::Closed;
        lb.collection_changed(5);
        assert_eq!(lb, Lightbox::Closed);
    }

    // ── Key / Screen ────────────────────────────────────────────────

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_name("Enter"), None);
    }

    #[test]
    fn test_screen_current_event() {
        assert_eq!(Screen::Images.current_event(), None);
        assert_eq!(Screen::EventGrid.current_event(), None);
        assert_eq!(Screen::EventOpen(4).current_event(), Some(4));
    }
}
