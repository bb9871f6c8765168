//! CLI login tests against a mock identity service.
//!
//! The binary runs for real with an isolated HOME; the identity service is
//! a wiremock server on loopback. Tests block on the spawned process, so
//! they run on the multi-thread flavor to keep the mock server responsive.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli, run_cli_with_input, session_file};

fn mock_api(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

#[tokio::test(flavor = "multi_thread")]
async fn login_establishes_persisted_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .and(body_json(json!({ "mobileNumber": "9876543210" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiresInSeconds": 120
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/verify-otp"))
        .and(body_json(json!({
            "mobileNumber": "9876543210",
            "otp": "123456"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "mobileNumber": "9876543210", "name": "A. Vendor" }
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = mock_api(&server);

    let output = run_cli_with_input(
        &["--api", &api, "login", "--phone", "9876543210"],
        home.path(),
        "123456\n",
    );

    assert!(
        output.status.success(),
        "login failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Signed in successfully"));
    assert!(stdout.contains("9876543210"));

    assert!(session_file(home.path()).exists());

    // The session survives into the next invocation.
    let whoami = run_cli(&["whoami"], home.path());
    assert!(whoami.status.success());
    assert!(String::from_utf8_lossy(&whoami.stdout).contains("A. Vendor"));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_code_allows_retry_on_same_challenge() {
    let server = MockServer::start().await;

    // Exactly one challenge is opened; the retry does not restart the flow.
    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiresInSeconds": 120
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/verify-otp"))
        .and(body_json(json!({
            "mobileNumber": "9876543210",
            "otp": "000000"
        })))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Invalid OTP"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/verify-otp"))
        .and(body_json(json!({
            "mobileNumber": "9876543210",
            "otp": "123456"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "mobileNumber": "9876543210" }
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = mock_api(&server);

    let output = run_cli_with_input(
        &["--api", &api, "login", "--phone", "9876543210"],
        home.path(),
        "000000\n123456\n",
    );

    assert!(
        output.status.success(),
        "login failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // The server's message reaches the operator verbatim.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid OTP"), "stderr: {}", stderr);

    assert!(session_file(home.path()).exists());
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn resend_refreshes_challenge_mid_flow() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiresInSeconds": 120
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/resend-otp"))
        .and(body_json(json!({ "mobileNumber": "9876543210" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiresInSeconds": 90
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "mobileNumber": "9876543210" }
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = mock_api(&server);

    let output = run_cli_with_input(
        &["--api", &api, "login", "--phone", "9876543210"],
        home.path(),
        "resend\n123456\n",
    );

    assert!(
        output.status.success(),
        "login failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Code re-sent"));
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_phone_never_reaches_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = mock_api(&server);

    // Nine digits: rejected locally, then end-of-input aborts the prompt.
    let output = run_cli_with_input(
        &["--api", &api, "login", "--phone", "987654321"],
        home.path(),
        "",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid mobile number"),
        "stderr: {}",
        stderr
    );
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_code_never_reaches_verify() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "expiresInSeconds": 120
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/admin/auth/verify-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let api = mock_api(&server);

    // A 5-digit code fails the shape check; end-of-input then aborts.
    let output = run_cli_with_input(
        &["--api", &api, "login", "--phone", "9876543210"],
        home.path(),
        "12345\n",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid OTP"), "stderr: {}", stderr);
    server.verify().await;
}

#[test]
fn login_skips_when_already_authenticated() {
    // No server at all: a flow that consulted the network would fail.
    let home = TempDir::new().unwrap();
    let path = session_file(home.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"mobileNumber":"9876543210","name":"A. Vendor","loggedInAt":1712000000000}"#,
    )
    .unwrap();

    let output = run_cli(
        &["--api", "http://127.0.0.1:1", "login", "--phone", "9876543210"],
        home.path(),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Already signed in"));
    assert!(stdout.contains("9876543210"));
}

#[tokio::test(flavor = "multi_thread")]
async fn protected_view_passes_payload_through_after_login() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/vendors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vendors": [{ "id": "v-101", "name": "Sparkle Cleaning Co" }]
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    let path = session_file(home.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"mobileNumber":"9876543210","loggedInAt":1712000000000}"#,
    )
    .unwrap();

    let api = mock_api(&server);
    let output = run_cli(&["--api", &api, "vendors"], home.path());

    assert!(
        output.status.success(),
        "vendors failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sparkle Cleaning Co"));
}
