use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().load(), None);
}

#[test]
fn memory_store_save_then_clear() {
    let store = MemoryTokenStore::new();
    store.save("abc");
    assert_eq!(store.load().as_deref(), Some("abc"));
    store.save("def");
    assert_eq!(store.load().as_deref(), Some("def"));
    store.clear();
    assert_eq!(store.load(), None);
}

#[test]
fn memory_store_with_token_is_preloaded() {
    assert_eq!(MemoryTokenStore::with_token("t").load().as_deref(), Some("t"));
}

#[test]
fn browser_store_is_inert_outside_the_browser() {
    let store = BrowserTokenStore;
    store.save("abc");
    assert_eq!(store.load(), None);
    store.clear();
}
