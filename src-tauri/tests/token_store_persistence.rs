use drive_auth_setup_lib::test_support;

fn sample_record() -> serde_json::Value {
    serde_json::json!({
        "access_token": "ya29.sample-access",
        "refresh_token": "1//sample-refresh",
        "scopes": test_support::drive_scopes(),
        "expires_at": 1_754_000_000i64,
    })
}

#[test]
fn write_creates_the_missing_parent_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let token_path = dir.path().join("config").join("gdrive").join("token.json");
    assert!(!token_path.parent().unwrap().exists());

    test_support::token_record_write_json(&token_path, sample_record()).expect("write");

    assert!(token_path.exists());
}

#[cfg(unix)]
#[test]
fn written_token_is_owner_read_write_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let token_path = dir.path().join("token.json");

    test_support::token_record_write_json(&token_path, sample_record()).expect("write");

    let mode = std::fs::metadata(&token_path)
        .expect("metadata")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600, "expected owner-only access");
}

#[test]
fn written_token_deserializes_into_a_complete_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let token_path = dir.path().join("token.json");

    test_support::token_record_write_json(&token_path, sample_record()).expect("write");
    let record = test_support::token_record_read_json(&token_path).expect("read");

    assert_eq!(record["access_token"], "ya29.sample-access");
    assert_eq!(record["refresh_token"], "1//sample-refresh");
    assert_eq!(
        record["scopes"],
        serde_json::json!(["https://www.googleapis.com/auth/drive.file"])
    );
    assert_eq!(record["expires_at"], 1_754_000_000i64);
}

#[test]
fn rewrite_replaces_the_record_wholesale() {
    let dir = tempfile::tempdir().expect("tempdir");
    let token_path = dir.path().join("token.json");

    test_support::token_record_write_json(&token_path, sample_record()).expect("first write");

    let mut replacement = sample_record();
    replacement["access_token"] = serde_json::json!("ya29.second-access");
    replacement["expires_at"] = serde_json::json!(null);
    test_support::token_record_write_json(&token_path, replacement).expect("second write");

    let record = test_support::token_record_read_json(&token_path).expect("read");
    assert_eq!(record["access_token"], "ya29.second-access");
    assert_eq!(record["expires_at"], serde_json::json!(null));
}
