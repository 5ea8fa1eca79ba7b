use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("token"), None);

    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);

    store.remove("token");
    assert_eq!(store.get("token"), None);
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("user", "{}");
    assert_eq!(b.get("user").as_deref(), Some("{}"));
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let store = MemoryStorage::new();
    store.set("token", "one");
    store.set("token", "two");
    assert_eq!(store.get("token").as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_off_browser() {
    let store = LocalStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
