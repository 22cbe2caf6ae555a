//! Tests for the binary's exit status and printed output.

mod helpers;

use std::time::Duration;

use helpers::write_urls_to_file;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_url_processor"))
}

#[tokio::test]
async fn test_missing_input_file_exits_nonzero() {
    let output = binary()
        .arg("/nonexistent/urls.txt")
        .output()
        .await
        .expect("Failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open input file"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_per_url_failures_still_exit_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/resp200"))
        .respond_with(ResponseTemplate::new(200).set_body_string("200 OK"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/resp500"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let file = write_urls_to_file(&[
        format!("{}/resp200", server.uri()),
        format!("{}/resp500", server.uri()),
        "not a url".to_string(),
    ]);

    let output = tokio::time::timeout(
        Duration::from_secs(30),
        binary().arg(file.path()).args(["-n", "2", "-t", "2"]).output(),
    )
    .await
    .expect("binary must finish")
    .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("url: {}/resp200 size: 6 bytes time: ", server.uri())));
    assert!(stdout.contains(&format!(
        "client: url {}/resp500 unavailable: status code 500",
        server.uri()
    )));
    assert!(stdout.trim_end().ends_with("All urls processed"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid url \"not a url\""), "stderr: {stderr}");
}

#[tokio::test]
async fn test_zero_concurrency_is_rejected() {
    let file = write_urls_to_file(&[]);
    let output = binary()
        .arg(file.path())
        .args(["--req-num", "0"])
        .output()
        .await
        .expect("Failed to run binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[tokio::test]
async fn test_empty_file_prints_only_the_marker() {
    let file = write_urls_to_file(&[]);
    let output = binary()
        .arg(file.path())
        .output()
        .await
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\nAll urls processed\n");
}

#[tokio::test]
async fn test_closed_stdout_still_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let lines: Vec<String> = (0..20)
        .map(|i| format!("{}/page/{i}", server.uri()))
        .collect();
    let file = write_urls_to_file(&lines);

    // Reader end closed up front, like `url_processor urls.txt | head -0`
    let mut child = binary()
        .arg(file.path())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::null())
        .spawn()
        .expect("Failed to run binary");
    drop(child.stdout.take());

    let status = tokio::time::timeout(Duration::from_secs(30), child.wait())
        .await
        .expect("binary must finish")
        .expect("Failed to wait for binary");
    assert!(status.success(), "exit status: {status}");
}
