/// Whether a nav link pointing at `href` should be highlighted on `current_path`.
///
/// Exact matches always count. Otherwise both sides must be non-root and the
/// path must contain the href, so `/services/web` highlights `/services`
/// while the home link only lights up on `/`.
#[inline]
pub fn is_active_link(current_path: &str, href: &str) -> bool {
    if href.is_empty() {
        return false;
    }
    if href == current_path {
        return true;
    }
    current_path != "/" && href != "/" && current_path.contains(href)
}
