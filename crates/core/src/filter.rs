use std::collections::BTreeSet;

use crate::domain::ImageRecord;
use crate::keywords::tag_key;

/// Selected filter tags. Two tags equal under [`tag_key`] are the same selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    keys: BTreeSet<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `tag` in or out of the selection. Returns whether it is now selected.
    /// Blank tags are ignored and never selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let key = tag_key(tag);
        if key.is_empty() {
            return false;
        }
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.keys.contains(&tag_key(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Selected keys (folded), in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// True if `image` carries at least one selected tag, or nothing is selected.
    pub fn matches(&self, image: &ImageRecord) -> bool {
        self.is_empty() || image.keywords.iter().any(|k| self.contains(k))
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = TagSelection::new();
        for tag in iter {
            let key = tag_key(tag.as_ref());
            if !key.is_empty() {
                selection.keys.insert(key);
            }
        }
        selection
    }
}

/// Images carrying any selected tag, in input order. An empty selection keeps everything.
pub fn filtered_images(images: &[ImageRecord], selected: &TagSelection) -> Vec<ImageRecord> {
    images
        .iter()
        .filter(|image| selected.matches(image))
        .cloned()
        .collect()
}
