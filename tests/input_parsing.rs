//! Tests for how input lines are classified before any request is made.

use url_processor::{is_skippable, validate_url, InvalidUrl};

#[test]
fn test_accepts_absolute_urls_with_host() {
    for line in [
        "http://localhost:8080/resp200",
        "https://example.com",
        "https://example.com/path?q=1#frag",
        "http://127.0.0.1/",
        "http://[::1]:8080/",
        "ftp://files.example.com/readme.txt",
    ] {
        let url = validate_url(line).unwrap_or_else(|e| panic!("{line} rejected: {e}"));
        assert_eq!(url.as_str(), line, "printed form must be the input text");
    }
}

#[test]
fn test_rejects_relative_and_garbage_lines() {
    for line in ["example.com", "/resp200", "not a url", "http://", "://nohost"] {
        assert!(
            matches!(validate_url(line), Err(InvalidUrl::Syntax { .. })),
            "{line} should be a syntax error"
        );
    }
}

#[test]
fn test_rejects_urls_without_host() {
    for line in ["mailto:someone@example.com", "data:text/plain,hello", "urn:isbn:0451450523"] {
        assert!(
            matches!(validate_url(line), Err(InvalidUrl::MissingHost { .. })),
            "{line} should be missing a host"
        );
    }
}

#[test]
fn test_rejects_overlong_lines() {
    let line = format!("http://example.com/{}", "a".repeat(4096));
    match validate_url(&line) {
        Err(InvalidUrl::TooLong { length, max }) => {
            assert_eq!(length, line.len());
            assert_eq!(max, 2048);
        }
        other => panic!("expected TooLong, got {other:?}"),
    }
}

#[test]
fn test_invalid_message_names_the_line() {
    let err = validate_url("not a url").expect_err("invalid");
    assert!(err.to_string().starts_with("invalid url \"not a url\""));
}

#[test]
fn test_skippable_lines() {
    assert!(is_skippable(""));
    assert!(is_skippable("# a comment"));
    assert!(is_skippable("#http://example.com"));
    assert!(!is_skippable("http://example.com/#anchor"));
    assert!(!is_skippable("not a url"));
}
