use std::fs;
use std::path::Path;

use photogallery_core::config::GalleryConfig;
use photogallery_core::domain::{GalleryModel, Layout};
use photogallery_core::loader::{DirSource, ManifestOrigin};
use photogallery_core::navigation::{Key, Lightbox, Screen};
use photogallery_core::view::{GalleryView, Session};
use photogallery_core::{Action, Gallery};

fn write_manifest(dir: &Path, body: &str) {
    fs::write(dir.join("images.json"), body).unwrap();
}

fn open(dir: &Path, layout: Layout) -> (Gallery, ManifestOrigin) {
    let config = GalleryConfig::new(dir.to_string_lossy(), layout);
    Gallery::load(&DirSource::new(dir), &config)
}

fn labels(view: &GalleryView) -> Vec<&str> {
    view.filters.iter().map(|b| b.label.as_str()).collect()
}

fn visible_files(gallery: &Gallery) -> Vec<&str> {
    gallery.visible_images().iter().map(|i| i.file.as_str()).collect()
}

// ── Flat manifest ────────────────────────────────────────────────

#[test]
fn test_flat_manifest_tag_filtering() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(
        tmp.path(),
        r#"{"images": [{"file":"a.jpg","keywords":["x"]}, {"file":"b.jpg","keywords":["y"]}]}"#,
    );

    let (mut gallery, origin) = open(tmp.path(), Layout::Flat);
    assert_eq!(origin, ManifestOrigin::Fetched);
    assert_eq!(labels(&gallery.view()), vec!["All", "x", "y"]);

    gallery.toggle_tag("x").unwrap();
    assert_eq!(visible_files(&gallery), vec!["a.jpg"]);

    gallery.toggle_tag("y").unwrap();
    assert_eq!(visible_files(&gallery), vec!["a.jpg", "b.jpg"]);

    gallery.select_all();
    assert!(gallery.view().filters[0].active);
}

#[test]
fn test_flat_manifest_mixed_entries() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(
        tmp.path(),
        r#"{"images": ["a.jpg", {"file": "", "name": "x"}, "c.png", {"src": "sub/d.webp", "name": "Dee"}]}"#,
    );

    let (gallery, _) = open(tmp.path(), Layout::Flat);
    let names: Vec<&str> = gallery.visible_images().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c", "Dee"]);

    let view = gallery.view();
    assert!(view.filters.is_empty());
    let base = tmp.path().to_string_lossy().to_string();
    assert_eq!(view.grid[2].url, format!("{base}/sub/d.webp"));
}

#[test]
fn test_flat_missing_manifest_uses_fallback() {
    let tmp = tempfile::tempdir().unwrap();

    let (gallery, origin) = open(tmp.path(), Layout::Flat);
    assert_eq!(origin, ManifestOrigin::Fallback);
    assert_eq!(
        visible_files(&gallery),
        vec!["image1.jpg", "image2.jpg", "image3.jpg", "image4.jpg", "image5.jpg"]
    );
}

#[test]
fn test_flat_broken_manifest_uses_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(tmp.path(), "{\"images\": [");

    let (gallery, origin) = open(tmp.path(), Layout::Flat);
    assert_eq!(origin, ManifestOrigin::Fallback);
    assert_eq!(gallery.visible_images().len(), 5);
}

#[test]
fn test_flat_empty_manifest_shows_message() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(tmp.path(), r#"{"images": []}"#);

    let (mut gallery, origin) = open(tmp.path(), Layout::Flat);
    assert_eq!(origin, ManifestOrigin::Fetched);
    assert_eq!(gallery.view().message.as_deref(), Some("No images found."));
    assert!(gallery.open_image(0).is_err());
}

// ── Lightbox through a session ───────────────────────────────────

#[test]
fn test_session_keyboard_navigation() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(tmp.path(), r#"{"images": ["1.jpg", "2.jpg", "3.jpg"]}"#);
    let (gallery, _) = open(tmp.path(), Layout::Flat);

    let mut counters: Vec<Option<String>> = Vec::new();
    let mut session = Session::new(gallery, |view: &GalleryView| {
        counters.push(view.lightbox.as_ref().map(|lb| lb.counter.clone()))
    });

    session.dispatch(Action::OpenImage(2)).unwrap();
    session.dispatch(Action::Key(Key::ArrowRight)).unwrap();
    session.dispatch(Action::Key(Key::ArrowLeft)).unwrap();
    session.dispatch(Action::Key(Key::Escape)).unwrap();
    // Ignored while closed; nothing is rendered.
    session.dispatch(Action::Key(Key::ArrowRight)).unwrap();
    assert_eq!(session.gallery().lightbox(), Lightbox::Closed);
    drop(session);

    assert_eq!(
        counters,
        vec![
            Some("3 / 3".to_string()),
            Some("1 / 3".to_string()),
            Some("3 / 3".to_string()),
            None,
        ]
    );
}

#[test]
fn test_filter_shrink_while_open() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(
        tmp.path(),
        r#"{"images": [
            {"file": "1.jpg", "keywords": ["a"]},
            {"file": "2.jpg", "keywords": ["a"]},
            {"file": "3.jpg", "keywords": ["b"]}
        ]}"#,
    );
    let (mut gallery, _) = open(tmp.path(), Layout::Flat);

    gallery.open_image(2).unwrap();
    gallery.toggle_tag("b").unwrap();
    assert_eq!(visible_files(&gallery), vec!["3.jpg"]);
    assert_eq!(gallery.lightbox(), Lightbox::Open { index: 0 });

    gallery.toggle_tag("b").unwrap();
    gallery.toggle_tag("c").unwrap();
    assert_eq!(gallery.lightbox(), Lightbox::Closed);
    assert!(gallery.view().lightbox.is_none());
}

// ── Event manifest ───────────────────────────────────────────────

#[test]
fn test_event_manifest_flow() {
    let tmp = tempfile::tempdir().unwrap();
    write_manifest(
        tmp.path(),
        r#"{"events": [
            {"folder": "2024-wedding", "name": "Wedding", "images": [
                {"file": "vows.jpg", "keywords": ["Ceremony"]},
                {"file": "cake.jpg", "keywords": ["food", "ceremony"]},
                "dance.jpg"
            ]},
            {"folder": "picnic", "images": []},
            {"images": ["x.jpg"]}
        ]}"#,
    );

    let (mut gallery, origin) = open(tmp.path(), Layout::Events);
    assert_eq!(origin, ManifestOrigin::Fetched);
    assert_eq!(gallery.screen(), Screen::EventGrid);

    let view = gallery.view();
    let names: Vec<&str> = view.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Wedding", "picnic", "Untitled event"]);

    gallery.open_event(0).unwrap();
    assert_eq!(labels(&gallery.view()), vec!["All", "Ceremony", "food"]);

    gallery.toggle_tag("CEREMONY").unwrap();
    assert_eq!(visible_files(&gallery), vec!["vows.jpg", "cake.jpg"]);
    gallery.open_image(1).unwrap();

    gallery.back_to_events().unwrap();
    assert_eq!(gallery.lightbox(), Lightbox::Closed);
    assert!(gallery.selection().is_empty());

    gallery.open_event(1).unwrap();
    assert_eq!(gallery.view().message.as_deref(), Some("No images in this event."));
}

#[test]
fn test_event_missing_manifest_is_empty() {
    let tmp = tempfile::tempdir().unwrap();

    let (gallery, origin) = open(tmp.path(), Layout::Events);
    assert_eq!(origin, ManifestOrigin::Unavailable);
    assert_eq!(*gallery.model(), GalleryModel::Events(Vec::new()));
    assert_eq!(gallery.view().message.as_deref(), Some("No events found."));
}
