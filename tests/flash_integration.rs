// SPDX-License-Identifier: MPL-2.0
use iced_flash::flash::{
    self, handoff, Category, FlashStyle, Placement, ToastRequest, ToastSink,
};
use std::time::Duration;
use tempfile::tempdir;

#[derive(Default)]
struct RecordingSink {
    requests: Vec<ToastRequest>,
}

impl ToastSink for RecordingSink {
    fn display(&mut self, request: ToastRequest) {
        self.requests.push(request);
    }
}

#[test]
fn queued_descriptors_flow_from_file_to_display() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let handoff_path = dir.path().join(handoff::HANDOFF_FILE);

    // 1. An outer process queues two messages for the next run
    std::fs::write(
        &handoff_path,
        r#"
[[message]]
category = "success"
text = "Saved."

[[message]]
category = "danger"
text = "Failed to save."
"#,
    )
    .expect("Failed to write handoff document");

    // 2. Startup consumes the document into a board
    let mut board = handoff::consume(&handoff_path)
        .expect("Failed to read handoff document")
        .expect("Handoff document should yield a board");

    // 3. Presentation submits one toast per message, in document order
    let mut sink = RecordingSink::default();
    let submitted = flash::present(Some(&mut board), &mut sink);

    assert_eq!(submitted, 2);
    assert_eq!(sink.requests[0].content.text, "Saved.");
    assert_eq!(sink.requests[0].content.icon, Some("✅"));
    assert_eq!(
        sink.requests[0].options.background,
        FlashStyle::of(Category::Success).background()
    );
    assert_eq!(sink.requests[1].content.text, "Failed to save.");
    assert_eq!(sink.requests[1].content.icon, Some("❌"));
    assert_eq!(
        sink.requests[1].options.background,
        FlashStyle::of(Category::Danger).background()
    );

    // The document was consumed, so a second run starts clean
    assert!(!handoff_path.exists());
    let second = handoff::consume(&handoff_path).expect("Failed to re-read handoff path");
    assert!(second.is_none());
}

#[test]
fn missing_handoff_document_shows_nothing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let handoff_path = dir.path().join(handoff::HANDOFF_FILE);

    let board = handoff::consume(&handoff_path).expect("Failed to read handoff path");
    assert!(board.is_none());

    let mut sink = RecordingSink::default();
    assert_eq!(flash::present(None, &mut sink), 0);
    assert!(sink.requests.is_empty());
}

#[test]
fn every_submission_uses_the_fixed_flash_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let handoff_path = dir.path().join(handoff::HANDOFF_FILE);

    std::fs::write(
        &handoff_path,
        r#"
[[message]]
category = "info"
text = "Heads up."

[[message]]
category = "unrecognized"
text = "Odd one out."
"#,
    )
    .expect("Failed to write handoff document");

    let mut board = handoff::consume(&handoff_path)
        .expect("Failed to read handoff document")
        .expect("Handoff document should yield a board");

    let mut sink = RecordingSink::default();
    flash::present(Some(&mut board), &mut sink);

    for request in &sink.requests {
        let options = &request.options;
        assert_eq!(options.duration, Duration::from_millis(5000));
        assert!(options.closable);
        assert_eq!(options.placement, Placement::TopCenter);
        assert!(options.pause_on_hover);
        assert_eq!(options.padding, 0.0);
    }

    // Unknown categories still render, just without an icon
    assert_eq!(sink.requests[1].content.icon, None);
    assert_eq!(sink.requests[1].content.text, "Odd one out.");
}
