use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use interview_engine::{load_resume, ApiSettings, FailureKind, InterviewApi, ReqwestApi};
use url::Url;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: Url::parse(&server.uri()).expect("server url"),
        ..ApiSettings::default()
    }
}

fn write_resume(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let file_path = dir.path().join(name);
    fs::write(&file_path, contents).expect("write resume file");
    file_path
}

#[tokio::test]
async fn upload_returns_keywords_from_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .and(body_string_contains("name=\"resume\""))
        .and(body_string_contains("fake pdf body"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "keywords": ["Python", "SQL"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = write_resume(&dir, "resume.pdf", b"fake pdf body");

    let settings = settings_for(&server);
    let api = ReqwestApi::new(settings).expect("api");
    let payload = load_resume(&resume_path, api.settings()).expect("load resume");
    assert_eq!(payload.file_name, "resume.pdf");
    assert_eq!(payload.mime, "application/pdf");

    let keywords = api.upload_resume(&payload).await.expect("upload ok");
    assert_eq!(keywords, vec!["Python", "SQL"]);
}

#[tokio::test]
async fn upload_maps_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = write_resume(&dir, "resume.pdf", b"pdf");

    let api = ReqwestApi::new(settings_for(&server)).expect("api");
    let payload = load_resume(&resume_path, api.settings()).expect("load resume");

    let err = api.upload_resume(&payload).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn upload_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = write_resume(&dir, "resume.pdf", b"pdf");

    let api = ReqwestApi::new(settings_for(&server)).expect("api");
    let payload = load_resume(&resume_path, api.settings()).expect("load resume");

    let err = api.upload_resume(&payload).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn upload_times_out_on_slow_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "keywords": [] })),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = write_resume(&dir, "resume.pdf", b"pdf");

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = ReqwestApi::new(settings).expect("api");
    let payload = load_resume(&resume_path, api.settings()).expect("load resume");

    let err = api.upload_resume(&payload).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[test]
fn unsupported_extension_is_rejected_locally() {
    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = write_resume(&dir, "resume.docx", b"doc");

    let err = load_resume(&resume_path, &ApiSettings::default()).unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedFileType {
            extension: "docx".to_string(),
        }
    );
}

#[test]
fn oversized_resume_is_rejected_locally() {
    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = write_resume(&dir, "resume.pdf", b"123456789");

    let settings = ApiSettings {
        max_resume_bytes: 8,
        ..ApiSettings::default()
    };

    let err = load_resume(&resume_path, &settings).unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 8,
            actual: 9,
        }
    );
}

#[test]
fn missing_resume_file_is_a_read_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let resume_path = dir.path().join("nope.pdf");

    let err = load_resume(&resume_path, &ApiSettings::default()).unwrap_err();
    assert_eq!(err.kind, FailureKind::FileRead);
}
