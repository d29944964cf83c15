pub mod browse;
pub mod events;
pub mod ls;
pub mod show;
pub mod tags;

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use photogallery_core::config::GalleryConfig;
use photogallery_core::domain::{GalleryModel, Layout};
use photogallery_core::loader::{DirSource, ManifestOrigin, ManifestSource};
use photogallery_core::url::image_url;
use photogallery_core::view::PLACEHOLDER_IMAGE;
use photogallery_core::Gallery;

use crate::http::{is_remote, HttpSource};

/// Fetch the manifest behind a spinner and build the gallery.
pub fn load_gallery(config: &GalleryConfig) -> Gallery {
    let source: Box<dyn ManifestSource> = if is_remote(&config.base) {
        Box::new(HttpSource::new(&config.base))
    } else {
        Box::new(DirSource::new(&config.base))
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}").unwrap());
    pb.set_message(format!("Loading {}", source.location()));
    pb.enable_steady_tick(Duration::from_millis(80));

    let (mut gallery, origin) = Gallery::load(source.as_ref(), config);
    pb.finish_and_clear();

    match origin {
        ManifestOrigin::Fetched => {}
        ManifestOrigin::Fallback => {
            eprintln!("Manifest unavailable, showing the default image list.")
        }
        ManifestOrigin::Unavailable => eprintln!("Manifest unavailable."),
    }

    if !is_remote(&config.base) {
        hide_missing_images(&mut gallery);
    }
    gallery
}

/// Mark every image whose file is absent on disk as failed to load. Events
/// without images are checked for their placeholder instead.
fn hide_missing_images(gallery: &mut Gallery) {
    let base = gallery.base().to_string();
    let urls: Vec<String> = match gallery.model() {
        GalleryModel::Flat(images) => images
            .iter()
            .map(|image| image_url(&base, None, &image.file))
            .collect(),
        GalleryModel::Events(events) => events
            .iter()
            .flat_map(|event| {
                let base = base.as_str();
                let files: Vec<&str> = if event.images.is_empty() {
                    vec![PLACEHOLDER_IMAGE]
                } else {
                    event.images.iter().map(|image| image.file.as_str()).collect()
                };
                files
                    .into_iter()
                    .map(move |file| image_url(base, Some(&event.folder), file))
            })
            .collect(),
    };

    for url in urls {
        if !Path::new(&url).is_file() {
            tracing::debug!(%url, "Image missing on disk");
            gallery.mark_image_failed(url);
        }
    }
}

/// Open `event` (required for event galleries) and select `tags`.
pub(crate) fn prepare(gallery: &mut Gallery, event: Option<usize>, tags: &[String]) -> Result<()> {
    match (gallery.layout(), event) {
        (Layout::Events, Some(k)) => gallery.open_event(k)?,
        (Layout::Events, None) => {
            bail!("this gallery is grouped into events; pick one with --event <K> (see `gallery --events events`)")
        }
        (Layout::Flat, Some(_)) => bail!("--event only applies to event galleries (pass --events)"),
        (Layout::Flat, None) => {}
    }

    for tag in tags {
        if !gallery.selection().contains(tag) {
            gallery.toggle_tag(tag)?;
        }
    }
    Ok(())
}
