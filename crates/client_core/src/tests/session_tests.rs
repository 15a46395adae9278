use super::*;

fn sample_session() -> Session {
    Session {
        id: AccountId(3),
        name: "John Doe".to_string(),
        username: "johndoe".to_string(),
        token: "jwt-token".to_string(),
    }
}

#[test]
fn missing_file_means_no_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path().join("session.json"));

    assert_eq!(store.load().expect("load"), None);
    assert!(matches!(store.require(), Err(ClientError::NoSession)));
}

#[test]
fn malformed_file_means_no_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    fs::write(&path, "{not json").expect("write");

    let store = FileSessionStore::new(&path);
    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn non_utf8_file_sends_user_to_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).expect("write");

    let store = FileSessionStore::new(&path);
    assert_eq!(store.load().expect("load"), None);
    let err = store.require().expect_err("no session");
    assert!(matches!(err, ClientError::NoSession));
    assert!(err.requires_login());
}

#[test]
fn blank_token_means_no_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");
    fs::write(
        &path,
        r#"{"id":1,"name":"a","username":"a","token":"  "}"#,
    )
    .expect("write");

    let store = FileSessionStore::new(&path);
    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn saves_loads_and_clears() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

    store.save(&sample_session()).expect("save");
    assert_eq!(store.require().expect("session"), sample_session());

    store.clear().expect("clear");
    assert_eq!(store.load().expect("load"), None);
    store.clear().expect("clearing twice is fine");
}

#[test]
fn login_response_drops_phone() {
    let response = LoginResponse {
        id: AccountId(3),
        name: "John Doe".to_string(),
        username: "johndoe".to_string(),
        phone: "0812".to_string(),
        token: "jwt-token".to_string(),
    };

    assert_eq!(Session::from(response), sample_session());
}

#[test]
fn memory_store_round_trip() {
    let store = MemorySessionStore::default();
    assert!(store.require().is_err());

    store.save(&sample_session()).expect("save");
    assert_eq!(store.load().expect("load"), Some(sample_session()));
}
