mod support;

use drive_auth_setup_lib::test_support;

#[test]
fn nonexistent_credentials_file_is_a_credentials_error_and_writes_nothing() {
    let app = support::TestApp::new();
    let handle = app.handle();

    let credentials_path = app.home_dir().join("missing").join("client_secret.json");
    let token_path = app.home_dir().join("token.json");

    let err = tauri::async_runtime::block_on(test_support::authorize_and_store_json(
        &handle,
        &credentials_path,
        &token_path,
    ))
    .expect_err("flow must fail");

    let rendered: String = err.into();
    assert!(rendered.starts_with("CREDENTIALS_FILE:"), "got: {rendered}");
    assert!(!token_path.exists(), "no token may be written on failure");
}

#[test]
fn malformed_client_secret_is_an_auth_error_and_writes_nothing() {
    let app = support::TestApp::new();
    let handle = app.handle();

    let credentials_path = app.home_dir().join("client_secret.json");
    std::fs::write(&credentials_path, "not a client secret document").expect("write fixture");
    let token_path = app.home_dir().join("token.json");

    let err = tauri::async_runtime::block_on(test_support::authorize_and_store_json(
        &handle,
        &credentials_path,
        &token_path,
    ))
    .expect_err("flow must fail");

    let rendered: String = err.into();
    assert!(rendered.starts_with("AUTH_FAILED:"), "got: {rendered}");
    assert!(!token_path.exists(), "no token may be written on failure");
}
