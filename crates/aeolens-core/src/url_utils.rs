use url::Url;

/// Prefix `https://` when the input carries no `http://` or `https://` scheme.
///
/// Surrounding whitespace is dropped; the rest of the input is left untouched.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Normalize a URL to its origin (scheme + host + optional port).
///
/// Falls back to trimming trailing slashes if the input cannot be parsed.
pub fn normalize_origin(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed
            .origin()
            .ascii_serialization()
            .trim_end_matches('/')
            .to_string(),
        Err(_) => input.trim_end_matches('/').to_string(),
    }
}

/// Resolve an `href` against the page it appears on.
pub fn resolve_link(page: &Url, href: &str) -> Option<Url> {
    page.join(href.trim()).ok()
}

/// Build the URL of a file served from the site root, e.g. `/robots.txt`.
pub fn root_file_url(origin: &str, path: &str) -> Option<Url> {
    Url::parse(origin).ok()?.join(path).ok()
}
