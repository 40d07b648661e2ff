//! Integration tests for the kireme CLI

use assert_cmd::Command;
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kireme() -> Command {
    let mut cmd = Command::cargo_bin("kireme").unwrap();
    // Keep the environment from steering tests at the service.
    cmd.env_remove("KIREME_API_URL");
    cmd
}

/// Canned happy-path mock for `POST /segment`
macro_rules! mock_segment {
    ($server:expr, $body:expr $(,)?) => {
        $server.mock(|when, then| {
            when.method(POST).path("/segment");
            then.status(200)
                .header("content-type", "application/json")
                .body($body);
        })
    };
}

#[test]
fn test_help_command() {
    let mut cmd = kireme();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sentence segmentation service"));
}

#[test]
fn test_list_languages() {
    let mut cmd = kireme();
    cmd.arg("list").arg("languages");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("en - English"))
        .stdout(predicate::str::contains("fr - French"))
        .stdout(predicate::str::contains("de - German"))
        .stdout(predicate::str::contains("es - Spanish"));
}

#[test]
fn test_list_methods() {
    let mut cmd = kireme();
    cmd.arg("list").arg("methods");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("baseline"))
        .stdout(predicate::str::contains("spacy"));
}

#[test]
fn test_list_formats() {
    let mut cmd = kireme();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_segment_renders_numbered_sentences() {
    let server = MockServer::start();
    let mock = mock_segment!(
        &server,
        r#"{"sentences": ["Hi.", "Bye."], "count": 2, "method": "spacy", "language": "en"}"#,
    );

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("  Hi. Bye.  ")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. Hi."))
        .stdout(predicate::str::contains("2. Bye."))
        .stdout(predicate::str::contains("2 sentences found"))
        .stdout(predicate::str::contains("Method: SPACY | Language: EN"));

    // Exactly one POST per submission.
    mock.assert();
}

#[test]
fn test_segment_sends_the_trimmed_triple() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/segment")
            .json_body(serde_json::json!({
                "text": "Hi. Bye.",
                "language": "fr",
                "method": "spacy"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"sentences": ["Hi. Bye."], "count": 1, "method": "spacy", "language": "fr"}"#);
    });

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("\n  Hi. Bye. \t")
        .arg("--language")
        .arg("fr")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert().success();
    mock.assert();
}

#[test]
fn test_empty_text_never_reaches_the_network() {
    let server = MockServer::start();
    let mock = mock_segment!(&server, "{}");

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("   \n\t ")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please enter some text to segment."));

    assert_eq!(mock.hits(), 0);
}

#[test]
fn test_baseline_with_french_never_reaches_the_network() {
    let server = MockServer::start();
    let mock = mock_segment!(&server, "{}");

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Bonjour. Salut.")
        .arg("--language")
        .arg("fr")
        .arg("--method")
        .arg("baseline")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert().failure().stderr(predicate::str::contains(
        "Baseline method only supports English",
    ));

    assert_eq!(mock.hits(), 0);
}

#[test]
fn test_empty_sentence_list_shows_the_placeholder() {
    let server = MockServer::start();
    mock_segment!(
        &server,
        r#"{"sentences": [], "count": 0, "method": "spacy", "language": "en"}"#,
    );

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("....")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No sentences found."))
        .stdout(predicate::str::contains("1. ").not());
}

#[test]
fn test_json_output() {
    let server = MockServer::start();
    mock_segment!(
        &server,
        r#"{"sentences": ["Hi."], "count": 1, "method": "spacy", "language": "en"}"#,
    );

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Hi.")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("-f")
        .arg("json")
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sentences\""))
        .stdout(predicate::str::contains("\"count\": 1"));
}

#[test]
fn test_markdown_output_escapes_markup() {
    let server = MockServer::start();
    mock_segment!(
        &server,
        r#"{"sentences": ["<script>alert('x')</script> Hello."], "count": 1, "method": "spacy", "language": "en"}"#,
    );

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("ignored")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("-f")
        .arg("markdown")
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("&lt;script&gt;"))
        .stdout(predicate::str::contains("<script>").not())
        .stdout(predicate::str::contains("*1 sentence found*"));
}

#[test]
fn test_output_to_file() {
    let server = MockServer::start();
    mock_segment!(
        &server,
        r#"{"sentences": ["Hi.", "Bye."], "count": 2, "method": "spacy", "language": "en"}"#,
    );

    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("result.txt");

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Hi. Bye.")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("-o")
        .arg(&output_file)
        .arg("--quiet");

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("1. Hi."));
    assert!(content.contains("2 sentences found"));
}

#[test]
fn test_input_file_is_read() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/segment")
            .json_body(serde_json::json!({
                "text": "From a file.",
                "language": "en",
                "method": "spacy"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"sentences": ["From a file."], "count": 1, "method": "spacy", "language": "en"}"#);
    });

    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("input.txt");
    fs::write(&input_file, "From a file.\n").unwrap();

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("-i")
        .arg(&input_file)
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert().success();
    mock.assert();
}

#[test]
fn test_service_rejection_detail_is_surfaced() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/segment");
        then.status(400)
            .header("content-type", "application/json")
            .body(r#"{"detail": "Method 'regex' not supported. Use 'baseline' or 'spacy'"}"#);
    });

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Hi.")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Method 'regex' not supported"));
}

#[test]
fn test_service_rejection_without_detail_uses_the_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/segment");
        then.status(500).body("boom");
    });

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Hi.")
        .arg("--api-url")
        .arg(server.base_url())
        .arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Segmentation failed"));
}

#[test]
fn test_network_error_names_the_base_url() {
    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Hi.")
        .arg("--api-url")
        .arg("http://127.0.0.1:9")
        .arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("http://127.0.0.1:9"));
}

#[test]
fn test_invalid_language_argument() {
    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Hi.")
        .arg("--language")
        .arg("xx")
        .arg("--quiet");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_health_against_a_running_service() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status": "healthy", "message": "Sentence Segmentation API is running"}"#);
    });

    let mut cmd = kireme();
    cmd.arg("health").arg("--api-url").arg(server.base_url());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Backend API is running"));
}

#[test]
fn test_health_against_a_down_service() {
    let mut cmd = kireme();
    cmd.arg("health").arg("--api-url").arg("http://127.0.0.1:9");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("not reachable"));
}

#[test]
fn test_generated_config_round_trips_through_segment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/segment")
            .json_body(serde_json::json!({
                "text": "Guten Tag. Wie geht's?",
                "language": "de",
                "method": "spacy"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"sentences": ["Guten Tag.", "Wie geht's?"], "count": 2, "method": "spacy", "language": "de"}"#);
    });

    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("kireme.toml");

    let mut generate = kireme();
    generate
        .arg("generate-config")
        .arg("-o")
        .arg(&config_file);
    generate.assert().success();

    // Point the generated config at the mock and make German the default.
    let template = fs::read_to_string(&config_file).unwrap();
    let edited = template
        .replace("http://localhost:8000", &server.base_url())
        .replace("language = \"en\"", "language = \"de\"");
    fs::write(&config_file, edited).unwrap();

    let mut cmd = kireme();
    cmd.arg("segment")
        .arg("--text")
        .arg("Guten Tag. Wie geht's?")
        .arg("--config")
        .arg(&config_file)
        .arg("--quiet");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Method: SPACY | Language: DE"));
    mock.assert();
}
