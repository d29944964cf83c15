use std::path::PathBuf;

use serde_json::Value;

use crate::config::GalleryConfig;
use crate::domain::{GalleryModel, Layout};
use crate::error::{Error, Result};
use crate::manifest;

/// Name of the manifest document under the gallery base.
pub const MANIFEST_FILE: &str = "images.json";

/// Raw result of fetching the manifest document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP-style status code; 2xx means OK.
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can produce the manifest document.
pub trait ManifestSource {
    /// Human-readable location, used in log output.
    fn location(&self) -> String;

    /// Fetch the manifest. Non-OK responses are returned as `Ok` with their
    /// status; `Err` means the fetch itself failed.
    fn fetch(&self) -> Result<FetchResponse>;
}

/// Reads `images.json` from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ManifestSource for DirSource {
    fn location(&self) -> String {
        self.root.join(MANIFEST_FILE).display().to_string()
    }

    fn fetch(&self) -> Result<FetchResponse> {
        match std::fs::read_to_string(self.root.join(MANIFEST_FILE)) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// How the model of a loaded gallery was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestOrigin {
    /// Parsed from the fetched manifest.
    Fetched,
    /// Manifest unavailable; the configured fallback list was used.
    Fallback,
    /// Manifest unavailable and no fallback applies (event galleries).
    Unavailable,
}

/// A normalized model plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedManifest {
    pub model: GalleryModel,
    pub origin: ManifestOrigin,
}

/// Fetch and normalize the manifest. Never fails: unavailable or unparseable
/// manifests degrade to the fallback list (flat) or an empty event list.
pub fn load_manifest(source: &dyn ManifestSource, config: &GalleryConfig) -> LoadedManifest {
    let outcome = source.fetch().and_then(|response| {
        if !response.is_ok() {
            return Err(Error::ManifestUnavailable {
                status: response.status,
            });
        }
        manifest::parse_manifest(&response.body, config.layout)
    });

    match outcome {
        Ok(model) => {
            tracing::info!(
                location = %source.location(),
                layout = %config.layout,
                "Loaded manifest"
            );
            LoadedManifest {
                model,
                origin: ManifestOrigin::Fetched,
            }
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                location = %source.location(),
                "Manifest unavailable, degrading"
            );
            degraded(config)
        }
    }
}

fn degraded(config: &GalleryConfig) -> LoadedManifest {
    match config.layout {
        Layout::Flat => LoadedManifest {
            model: GalleryModel::Flat(manifest::normalize_images(&Value::from(
                config.fallback_images.clone(),
            ))),
            origin: ManifestOrigin::Fallback,
        },
        Layout::Events => LoadedManifest {
            model: GalleryModel::empty(Layout::Events),
            origin: ManifestOrigin::Unavailable,
        },
    }
}
