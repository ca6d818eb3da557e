#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_item_is_none_in_non_browser_tests() {
    assert_eq!(get_item(StorageArea::Local, "user"), None);
    assert_eq!(get_item(StorageArea::Session, "user"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    set_item(StorageArea::Local, "user", "{}");
    remove_item(StorageArea::Local, "user");
    assert_eq!(get_item(StorageArea::Local, "user"), None);
}
