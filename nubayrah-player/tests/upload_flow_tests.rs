//! Upload controller end to end over the in-memory catalogue.

mod common;

use common::Harness;
use nubayrah_player::domains::notification::messages::NotificationMessage;
use nubayrah_player::domains::notification::{OperationKind, Severity};
use nubayrah_player::domains::upload::messages::UploadMessage;
use nubayrah_player::infra::api_types::{
    FailureKind, OperationOutcome, StatusLine, UploadFile,
};
use nubayrah_player::infra::testing::StubCatalogueService;
use tempfile::TempDir;

#[tokio::test]
async fn created_upload_refreshes_only_after_dismissal() {
    let stub = StubCatalogueService::default();
    stub.add_book("Hyperion", "Dan Simmons");
    let mut harness = Harness::booted(stub).await;

    harness
        .send(UploadMessage::SelectFile(UploadFile::new(
            "ilium.epub",
            vec![0x50u8, 0x4b, 0x03, 0x04],
        )))
        .await;
    harness.send(UploadMessage::Submit).await;

    let upload = &harness.state.domains.upload.state;
    let label = upload.status_label().expect("status shown");
    assert!(label.starts_with("201"), "unexpected label {label}");
    assert_eq!(harness.catalogue.uploaded_files(), ["ilium.epub"]);

    // The server now has two books, the listing still shows one.
    assert_eq!(harness.catalogue.books().len(), 2);
    assert_eq!(harness.snapshot_titles(), ["Hyperion"]);
    assert_eq!(harness.catalogue.list_calls(), 1);

    let notification = &harness.state.domains.notification.state;
    assert!(notification.visible());
    assert_eq!(notification.operation(), Some(OperationKind::Upload));
    assert_eq!(notification.severity(), Some(Severity::Info));

    harness.send(NotificationMessage::Dismiss).await;
    assert_eq!(harness.catalogue.list_calls(), 2);
    assert_eq!(harness.snapshot_titles(), ["Hyperion", "ilium"]);
}

#[tokio::test]
async fn unexpected_upload_status_is_a_failure_banner() {
    let stub = StubCatalogueService::default();
    stub.script_upload(OperationOutcome::success(reqwest::StatusCode::OK));
    let mut harness = Harness::booted(stub).await;

    harness
        .send(UploadMessage::SelectFile(UploadFile::new(
            "olympos.epub",
            vec![9u8; 4],
        )))
        .await;
    harness.send(UploadMessage::Submit).await;

    assert_eq!(
        harness.state.domains.notification.state.severity(),
        Some(Severity::Failure)
    );
}

#[tokio::test]
async fn submit_without_selection_is_local_failure() {
    let mut harness = Harness::booted(StubCatalogueService::default()).await;

    harness.send(UploadMessage::Submit).await;

    let outcome = harness
        .state
        .domains
        .upload
        .state
        .last_outcome
        .clone()
        .expect("outcome stored");
    assert_eq!(outcome.failure_kind(), Some(FailureKind::LocalPrecondition));
    assert_eq!(outcome.status(), None);
    assert_eq!(harness.catalogue.upload_calls(), 0);
    assert!(!harness.state.domains.notification.state.visible());
}

#[tokio::test]
async fn selection_survives_submit_and_can_be_resent() {
    let stub = StubCatalogueService::default();
    stub.script_upload(OperationOutcome::status_failure(
        StatusLine::new(409, "Conflict"),
        "book already exists",
    ));
    let mut harness = Harness::booted(stub).await;

    harness
        .send(UploadMessage::SelectFile(UploadFile::new(
            "endymion.epub",
            vec![1u8; 16],
        )))
        .await;
    harness.send(UploadMessage::Submit).await;
    harness.send(UploadMessage::Submit).await;

    assert_eq!(harness.catalogue.upload_calls(), 2);
    assert_eq!(
        harness.state.domains.upload.state.status_label().as_deref(),
        Some("409 Conflict")
    );
    assert!(harness.state.domains.upload.state.selected.is_some());
}

#[tokio::test]
async fn duplicate_submit_while_in_flight_is_ignored() {
    let mut harness = Harness::booted(StubCatalogueService::default()).await;
    harness
        .send(UploadMessage::SelectFile(UploadFile::new("a.epub", vec![7u8])))
        .await;

    let first = harness.send_detached(UploadMessage::Submit);
    let second = harness.send_detached(UploadMessage::Submit);
    harness.run(first).await;
    harness.run(second).await;

    assert_eq!(harness.catalogue.upload_calls(), 1);
    assert!(!harness.state.domains.upload.state.in_flight);
}

#[tokio::test]
async fn file_selected_from_disk_is_uploaded_with_its_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("the-fall-of-hyperion.epub");
    std::fs::write(&path, b"PK\x03\x04 fake epub").unwrap();
    let mut harness = Harness::booted(StubCatalogueService::default()).await;

    harness
        .send(UploadMessage::PathInputChanged(format!(
            "  {}  ",
            path.display()
        )))
        .await;
    harness.send(UploadMessage::LoadPathInput).await;
    harness.send(UploadMessage::Submit).await;

    assert_eq!(
        harness.catalogue.uploaded_files(),
        ["the-fall-of-hyperion.epub"]
    );
    assert_eq!(
        harness.state.domains.upload.state.status_label().as_deref(),
        Some("201 Created")
    );
}

#[tokio::test]
async fn blank_path_input_reports_no_file() {
    let mut harness = Harness::booted(StubCatalogueService::default()).await;

    harness.send(UploadMessage::PathInputChanged("   ".into())).await;
    harness.send(UploadMessage::LoadPathInput).await;

    assert_eq!(
        harness.state.domains.upload.state.status_label().as_deref(),
        Some("no file selected")
    );
    assert!(harness.state.domains.upload.state.selected.is_none());
}
