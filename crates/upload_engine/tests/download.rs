use std::fs;

use tempfile::TempDir;
use upload_engine::{ArtifactDownloader, DownloadSettings, FailureKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn downloader_for(server: &MockServer) -> ArtifactDownloader {
    ArtifactDownloader::new(DownloadSettings {
        base_url: server.uri(),
        ..DownloadSettings::default()
    })
}

#[tokio::test]
async fn relative_locator_is_saved_under_its_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download/ab12/Intro_to_X.docx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"docx-bytes".to_vec()))
        .mount(&server)
        .await;

    let out = TempDir::new().unwrap();
    let saved = downloader_for(&server)
        .download("/api/download/ab12/Intro_to_X.docx", out.path())
        .await
        .expect("download ok");

    assert_eq!(saved, out.path().join("Intro_to_X.docx"));
    assert_eq!(fs::read(&saved).unwrap(), b"docx-bytes");
}

#[tokio::test]
async fn absolute_locator_and_missing_dir_are_handled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/plan.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Plan"))
        .mount(&server)
        .await;

    let out = TempDir::new().unwrap();
    let nested = out.path().join("a").join("b");
    let downloader = ArtifactDownloader::new(DownloadSettings::default());
    let saved = downloader
        .download(&format!("{}/files/plan.md", server.uri()), &nested)
        .await
        .expect("download ok");

    assert_eq!(fs::read_to_string(saved).unwrap(), "# Plan");
}

#[tokio::test]
async fn missing_artifact_is_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/download/x/gone.docx"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let out = TempDir::new().unwrap();
    let err = downloader_for(&server)
        .download("/api/download/x/gone.docx", out.path())
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(!out.path().join("gone.docx").exists());
}

#[tokio::test]
async fn oversized_artifact_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/big.docx"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 64]))
        .mount(&server)
        .await;

    let out = TempDir::new().unwrap();
    let downloader = ArtifactDownloader::new(DownloadSettings {
        base_url: server.uri(),
        max_bytes: 16,
        ..DownloadSettings::default()
    });
    let err = downloader.download("/big.docx", out.path()).await.unwrap_err();

    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 16, .. }
    ));
    assert!(!out.path().join("big.docx").exists());
}
