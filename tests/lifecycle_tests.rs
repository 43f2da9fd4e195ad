// Host-side tests for page lifecycle decisions.
mod common;

use common::core::lifecycle::PageHide;

#[test]
fn back_forward_cache_keeps_the_background() {
    let hide = PageHide::from_persisted(true);
    assert_eq!(hide, PageHide::Suspend);
    assert!(!hide.disposes());
}

#[test]
fn real_unload_disposes_the_background() {
    let hide = PageHide::from_persisted(false);
    assert_eq!(hide, PageHide::Unload);
    assert!(hide.disposes());
}
