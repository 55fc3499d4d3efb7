//! Input validation for media assignment. Validators return `None` on
//! success or a user-facing message describing the problem.

/// Validate that an uploaded file's MIME type is an image type.
pub fn validate_image_mime(mime: &str) -> Option<String> {
    if mime.trim().starts_with("image/") {
        None
    } else {
        Some("Invalid file type. Please select an image.".to_string())
    }
}

/// Validate that a string is a syntactically plausible URL: either a
/// `scheme://host/...` form with a non-empty host, or a self-contained
/// `data:image/...` URL.
pub fn validate_url(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Invalid URL. Please enter a valid image URL.".to_string());
    }
    if trimmed.starts_with("data:image/") {
        return None;
    }
    let Some((scheme, rest)) = trimmed.split_once("://") else {
        return Some("Invalid URL. Please enter a valid image URL.".to_string());
    };
    let host = rest.split('/').next().unwrap_or("");
    let scheme_ok = !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
    if !scheme_ok || host.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Some("Invalid URL. Please enter a valid image URL.".to_string());
    }
    None
}

/// Extract a YouTube video id by matching the known URL shapes: short
/// links (`youtu.be/…`), embeds (`/embed/…`), watch pages (`watch?v=…`),
/// extra-parameter forms (`&v=…`), and the legacy `/v/` and `/u/<c>/`
/// paths. A valid id is exactly 11 characters.
pub fn extract_video_id(url: &str) -> Option<String> {
    const MARKERS: [&str; 5] = ["youtu.be/", "/embed/", "watch?v=", "&v=", "/v/"];

    // Like the original pattern, prefer the rightmost marker occurrence.
    let mut start: Option<usize> = None;
    for marker in MARKERS {
        if let Some(pos) = url.rfind(marker) {
            let candidate = pos + marker.len();
            start = Some(start.map_or(candidate, |s| s.max(candidate)));
        }
    }
    // Legacy user form: /u/<one path char>/<id>
    if let Some(pos) = url.rfind("/u/") {
        let rest = &url[pos + 3..];
        if rest.len() >= 2 && rest.as_bytes()[1] == b'/' && rest.as_bytes()[0] != b'/' {
            let candidate = pos + 5;
            start = Some(start.map_or(candidate, |s| s.max(candidate)));
        }
    }

    let tail = &url[start?..];
    let id: String = tail
        .chars()
        .take_while(|c| !matches!(c, '#' | '&' | '?'))
        .collect();
    if id.chars().count() == 11 { Some(id) } else { None }
}

/// Embed URL for a validated video id.
pub fn video_embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

/// Thumbnail URL for a validated video id, used as the fallback poster.
pub fn video_thumbnail_url(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg")
}
