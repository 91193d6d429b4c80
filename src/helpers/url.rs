//! URL helper functions

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// RFC 3986 scheme, e.g. `https:` or `mailto:`
    static ref SCHEME_RE: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").unwrap();
}

/// Whether a link already points somewhere absolute (has a scheme or is
/// protocol-relative)
///
/// # Examples
/// ```ignore
/// is_absolute_url("https://example.com") // -> true
/// is_absolute_url("/about")              // -> false
/// ```
pub fn is_absolute_url(link: &str) -> bool {
    link.starts_with("//") || SCHEME_RE.is_match(link)
}

/// Prepend the site path prefix to an internal link
///
/// # Examples
/// ```ignore
/// url_for("/en", "/about") // -> "/en/about"
/// url_for("/en/", "/about") // -> "/en/about"
/// ```
pub fn url_for(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path.to_string();
    }

    if path.starts_with('/') {
        format!("{}{}", prefix, path)
    } else {
        format!("{}/{}", prefix, path)
    }
}
