use std::collections::HashSet;

use serde::Serialize;

use crate::domain::ImageRecord;
use crate::filter::TagSelection;

/// Label of the button that clears the tag selection.
pub const ALL_LABEL: &str = "All";

/// Case-insensitive identity of a tag: trimmed and lower-cased.
pub fn tag_key(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Distinct keywords across `images`, in first-seen order.
/// Keywords are trimmed; blanks are skipped; the first casing seen is kept.
pub fn unique_keywords(images: &[ImageRecord]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for keyword in images.iter().flat_map(|image| image.keywords.iter()) {
        let trimmed = keyword.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(tag_key(trimmed)) {
            unique.push(trimmed.to_string());
        }
    }

    unique
}

/// One button of the tag filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub label: String,
    /// `None` for the "All" button.
    pub tag: Option<String>,
    pub active: bool,
}

/// The filter bar for `images`: "All" followed by one button per keyword.
/// Empty when the collection has no keywords, in which case the bar is hidden.
pub fn filter_buttons(images: &[ImageRecord], selection: &TagSelection) -> Vec<FilterButton> {
    let keywords = unique_keywords(images);
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut buttons = Vec::with_capacity(keywords.len() + 1);
    buttons.push(FilterButton {
        label: ALL_LABEL.to_string(),
        tag: None,
        active: selection.is_empty(),
    });
    buttons.extend(keywords.into_iter().map(|keyword| FilterButton {
        active: selection.contains(&keyword),
        tag: Some(keyword.clone()),
        label: keyword,
    }));
    buttons
}
