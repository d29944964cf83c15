use serde_json::{Map, Value};

use crate::domain::{EventRecord, GalleryModel, ImageRecord, Layout, UNTITLED_EVENT};
use crate::error::{Error, Result};

/// Fields consulted, in order, for an image's path.
const FILE_FIELDS: [&str; 3] = ["file", "src", "path"];

/// One entry of a manifest `images` array, classified once.
#[derive(Debug, Clone, Copy)]
enum RawImageEntry<'a> {
    /// `"photo.jpg"`
    Bare(&'a str),
    /// `{ "file": "photo.jpg", "name": "...", "keywords": [...] }`
    Object(&'a Map<String, Value>),
    /// Numbers, nulls, nested arrays: nothing to salvage.
    Other,
}

impl<'a> From<&'a Value> for RawImageEntry<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => RawImageEntry::Bare(s),
            Value::Object(map) => RawImageEntry::Object(map),
            _ => RawImageEntry::Other,
        }
    }
}

impl RawImageEntry<'_> {
    /// Resolve into a canonical record. `position` is the 1-based index of the
    /// entry in the raw array, before any entries are dropped.
    fn into_record(self, position: usize) -> Option<ImageRecord> {
        let (file, name, keywords) = match self {
            RawImageEntry::Bare(file) => (file, None, Vec::new()),
            RawImageEntry::Object(map) => {
                let file = FILE_FIELDS
                    .iter()
                    .find_map(|field| non_empty_str(map, field))
                    .unwrap_or("");
                (file, non_empty_str(map, "name"), string_array(map.get("keywords")))
            }
            RawImageEntry::Other => return None,
        };

        if file.is_empty() {
            return None;
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => match strip_extension(file) {
                "" => format!("Photo {position}"),
                stem => stem.to_string(),
            },
        };

        Some(ImageRecord {
            file: file.to_string(),
            name,
            keywords,
        })
    }
}

fn non_empty_str<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    map.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Keep the string members of an array; anything that is not an array is empty.
fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Remove the last `.` and everything after it.
///
/// `"photo.jpg"` → `"photo"`, `"noext"` → `"noext"`, `""` → `""`.
pub fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(dot) => &file[..dot],
        None => file,
    }
}

/// Normalize a raw `images` array. Absent or non-array input yields an empty list;
/// entries without a resolvable file are dropped silently.
pub fn normalize_images(raw: &Value) -> Vec<ImageRecord> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let record = RawImageEntry::from(value).into_record(idx + 1);
            if record.is_none() {
                tracing::debug!(position = idx + 1, "Dropping manifest entry without a file");
            }
            record
        })
        .collect()
}

/// Normalize a raw `events` array. Each event's `images` goes through
/// [`normalize_images`]; entries that are not objects are dropped.
pub fn normalize_events(raw: &Value) -> Vec<EventRecord> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let Some(map) = value.as_object() else {
                tracing::debug!(position = idx + 1, "Dropping event entry that is not an object");
                return None;
            };

            let folder = map
                .get("folder")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let name = non_empty_str(map, "name")
                .map(str::to_string)
                .unwrap_or_else(|| {
                    if folder.is_empty() {
                        UNTITLED_EVENT.to_string()
                    } else {
                        folder.clone()
                    }
                });
            let images = normalize_images(map.get("images").unwrap_or(&Value::Null));

            Some(EventRecord {
                folder,
                name,
                images,
            })
        })
        .collect()
}

/// Parse an `images.json` document into the canonical model for `layout`.
///
/// Only a syntax error fails; missing or wrong-typed fields normalize to empty.
pub fn parse_manifest(text: &str, layout: Layout) -> Result<GalleryModel> {
    let doc: Value =
        serde_json::from_str(text).map_err(|e| Error::ManifestMalformed(e.to_string()))?;

    let model = match layout {
        Layout::Flat => GalleryModel::Flat(normalize_images(doc.get("images").unwrap_or(&Value::Null))),
        Layout::Events => {
            GalleryModel::Events(normalize_events(doc.get("events").unwrap_or(&Value::Null)))
        }
    };
    Ok(model)
}
