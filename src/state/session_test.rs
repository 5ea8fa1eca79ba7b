use super::*;
use crate::util::storage::MemoryStorage;

fn store() -> (SessionStore, MemoryStorage) {
    let mem = MemoryStorage::new();
    (SessionStore::new(Arc::new(mem.clone())), mem)
}

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned(), ..User::default() }
}

#[test]
fn empty_store_reads_empty_session() {
    let (session, _) = store();
    assert_eq!(session.read(), Session::default());
    assert!(!session.has_token());
}

#[test]
fn save_then_read_round_trips() {
    let (session, mem) = store();
    session.save("tok-1", &ada());

    let read = session.read();
    assert_eq!(read.token.as_deref(), Some("tok-1"));
    assert_eq!(read.user, Some(ada()));
    assert_eq!(mem.get(TOKEN_KEY).as_deref(), Some("tok-1"));
}

#[test]
fn clear_removes_token_and_user_together() {
    let (session, mem) = store();
    session.save("tok-1", &ada());
    session.clear();

    assert_eq!(session.read(), Session::default());
    assert!(mem.is_empty());
}

#[test]
fn corrupt_user_reads_as_absent() {
    let (session, mem) = store();
    mem.set(TOKEN_KEY, "tok-1");
    mem.set(USER_KEY, "{not json");

    let read = session.read();
    assert_eq!(read.token.as_deref(), Some("tok-1"));
    assert_eq!(read.user, None);
}

#[test]
fn empty_token_counts_as_absent() {
    let (session, mem) = store();
    mem.set(TOKEN_KEY, "");
    assert!(!session.has_token());
}

#[test]
fn save_user_keeps_token() {
    let (session, _) = store();
    session.save("tok-1", &User::default());
    session.save_user(&ada());

    let read = session.read();
    assert_eq!(read.token.as_deref(), Some("tok-1"));
    assert_eq!(read.user.map(|u| u.name), Some("Ada".to_owned()));
}

#[test]
fn commit_persists_and_returns_user() {
    let (session, _) = store();
    let user = commit(&session, AuthResponse { token: "tok-9".to_owned(), user: ada() });

    assert_eq!(user, ada());
    assert_eq!(session.token().as_deref(), Some("tok-9"));
}
