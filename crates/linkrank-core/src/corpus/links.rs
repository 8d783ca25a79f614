//! Anchor-tag link extraction

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract anchor-tag targets from page markup.
///
/// Absolute URLs and fragment-only hrefs are skipped; everything else is
/// returned verbatim as a candidate page name. Restricting targets to
/// pages actually in the corpus happens at graph construction.
pub fn extract_links(content: &str) -> Vec<String> {
    let mut links = Vec::new();

    for cap in HREF_RE.captures_iter(content) {
        if let Some(target) = cap.get(1) {
            let target = target.as_str();

            if target.starts_with("http://") || target.starts_with("https://") {
                continue;
            }
            if target.is_empty() || target.starts_with('#') {
                continue;
            }

            links.push(target.to_string());
        }
    }

    links
}
