/// Resolve the resource URL of an image: `{base}/{file}`, or
/// `{base}/{folder}/{file}` for event galleries. Empty segments and
/// duplicate slashes at the joins are skipped.
pub fn image_url(base: &str, folder: Option<&str>, file: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();

    for segment in [folder.unwrap_or_default(), file] {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        if !url.is_empty() {
            url.push('/');
        }
        url.push_str(segment);
    }

    url
}

/// URL of the manifest document under `base`.
pub fn manifest_url(base: &str) -> String {
    image_url(base, None, crate::loader::MANIFEST_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_flat() {
        assert_eq!(image_url("images", None, "a.jpg"), "images/a.jpg");
        assert_eq!(image_url("images/", None, "a.jpg"), "images/a.jpg");
    }

    #[test]
    fn test_image_url_event() {
        assert_eq!(image_url("images", Some("wedding"), "a.jpg"), "images/wedding/a.jpg");
        assert_eq!(image_url("images/", Some("/wedding/"), "a.jpg"), "images/wedding/a.jpg");
    }

    #[test]
    fn test_image_url_empty_folder() {
        assert_eq!(image_url("images", Some(""), "a.jpg"), "images/a.jpg");
    }

    #[test]
    fn test_image_url_nested_file_and_remote_base() {
        assert_eq!(
            image_url("https://example.com/gallery/", None, "2024/a.jpg"),
            "https://example.com/gallery/2024/a.jpg"
        );
    }

    #[test]
    fn test_image_url_empty_base() {
        assert_eq!(image_url("", None, "a.jpg"), "a.jpg");
    }

    #[test]
    fn test_manifest_url() {
        assert_eq!(manifest_url("images/"), "images/images.json");
    }
}
