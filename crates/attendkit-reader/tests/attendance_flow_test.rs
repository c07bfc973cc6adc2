//! Integration tests for the end-to-end attendance flow.
//!
//! Drives the full reader loop over the channel-based mock devices: badge
//! presentations go in through the mock RFID handle, camera responses go
//! in as raw bytes through the mock link, and every user-visible outcome
//! is asserted on the mock panel.

use attendkit_core::Uid;
use attendkit_directory::{UserDirectory, UserRecord};
use attendkit_hardware::mock::{
    MockPanel, MockPanelHandle, MockRemoteLink, MockRemoteLinkHandle, MockRfid, MockRfidHandle,
};
use attendkit_hardware::{BeepPattern, LedColor};
use attendkit_reader::{AttendanceController, ReaderLoop, ReaderState};

// ============================================================================
// Test Fixtures
// ============================================================================

mod roster {
    use attendkit_core::Uid;

    pub const TAZ: Uid = Uid::new([0x9B, 0x3D, 0x42, 0x05]);
    pub const JAMIL: Uid = Uid::new([0x6D, 0x7E, 0x6A, 0x05]);
    pub const STRANGER: Uid = Uid::new([0x11, 0x22, 0x33, 0x44]);
}

struct Rig {
    reader: ReaderLoop<MockRfid, MockRemoteLink, MockPanel>,
    rfid: MockRfidHandle,
    link: MockRemoteLinkHandle,
    panel: MockPanelHandle,
}

fn rig() -> Rig {
    let directory = UserDirectory::new(vec![
        UserRecord::new(roster::TAZ, "Taz", "202314100", "CSE"),
        UserRecord::new(roster::JAMIL, "Jamil", "202314102", "CSE"),
    ]);
    let (rfid, rfid_handle) = MockRfid::new();
    let (link, link_handle) = MockRemoteLink::new();
    let (panel, panel_handle) = MockPanel::new();

    Rig {
        reader: ReaderLoop::new(AttendanceController::new(directory), rfid, link, panel),
        rfid: rfid_handle,
        link: link_handle,
        panel: panel_handle,
    }
}

async fn authorize(rig: &mut Rig, uid: Uid) {
    rig.rfid.present_card(uid).await.unwrap();
    rig.reader.tick().await.unwrap();
    assert_eq!(rig.reader.state(), ReaderState::AwaitingVerification);
    rig.panel.clear();
}

// ============================================================================
// Happy Path
// ============================================================================

#[tokio::test]
async fn test_full_attendance_scenario() {
    let mut r = rig();

    // Authorized scan: greeting plus a verification request on the wire.
    r.rfid.present_card(roster::TAZ).await.unwrap();
    r.reader.tick().await.unwrap();

    assert_eq!(r.reader.state(), ReaderState::AwaitingVerification);
    let greeting = r.panel.last().unwrap();
    assert_eq!(greeting.line1, "Hello Taz");
    assert_eq!(greeting.line2, "ID: 202314100");
    assert_eq!(greeting.led, LedColor::Green);

    let request = r.link.try_next_request().unwrap();
    assert_eq!(
        String::from_utf8(request.to_wire()).unwrap(),
        "FACE_REQUEST\nNAME:Taz\nID:202314100\nEND_REQUEST\n"
    );

    // Another badge while awaiting: busy, dropped, no second request.
    r.rfid.present_card(roster::JAMIL).await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.panel.last().unwrap().line1, "Please wait...");
    assert!(r.link.try_next_request().is_none());
    assert_eq!(r.reader.state(), ReaderState::AwaitingVerification);

    // Camera confirms.
    r.link.feed_line("FACE_VERIFIED:Taz").await.unwrap();
    r.reader.tick().await.unwrap();

    let verdict = r.panel.last().unwrap();
    assert_eq!(verdict.line1, "VERIFIED!");
    assert_eq!(verdict.line2, "Taz present");
    assert_eq!(verdict.led, LedColor::Green);
    assert_eq!(verdict.beep, BeepPattern::Success);
    assert_eq!(r.reader.state(), ReaderState::Idle);
}

#[tokio::test]
async fn test_high_confidence_then_verdict() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    // High confidence alone completes nothing.
    r.link.feed_line("FACE_CONFIDENCE:92.3").await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.reader.state(), ReaderState::AwaitingVerification);
    assert_eq!(r.panel.count(), 0);

    r.link.feed_line("FACE_VERIFIED:Taz").await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.reader.state(), ReaderState::Idle);
    assert_eq!(r.panel.last().unwrap().line1, "VERIFIED!");
}

// ============================================================================
// Denial and Failure Paths
// ============================================================================

#[tokio::test]
async fn test_unknown_badge_denied() {
    let mut r = rig();

    r.rfid.present_card(roster::STRANGER).await.unwrap();
    r.reader.tick().await.unwrap();

    assert_eq!(r.reader.state(), ReaderState::Idle);
    let denial = r.panel.last().unwrap();
    assert_eq!(denial.line1, "ACCESS DENIED");
    assert_eq!(denial.line2, "Unknown card");
    assert_eq!(denial.led, LedColor::Red);
    assert_eq!(denial.beep, BeepPattern::Error);
    assert!(r.link.try_next_request().is_none());
}

#[tokio::test]
async fn test_mismatched_verdict_fails() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    r.link.feed_line("FACE_VERIFIED:Jamil").await.unwrap();
    r.reader.tick().await.unwrap();

    let failure = r.panel.last().unwrap();
    assert_eq!(failure.line2, "Face mismatch");
    assert_eq!(failure.led, LedColor::Red);
    assert_eq!(r.reader.state(), ReaderState::Idle);
}

#[tokio::test]
async fn test_low_confidence_fails() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    r.link.feed_line("FACE_CONFIDENCE:69.9").await.unwrap();
    r.reader.tick().await.unwrap();

    assert_eq!(r.panel.last().unwrap().line2, "Low confidence");
    assert_eq!(r.reader.state(), ReaderState::Idle);
}

#[tokio::test]
async fn test_face_not_found_and_unknown_face() {
    for (line, expected) in [
        ("FACE_NOT_FOUND", "Face not detected"),
        ("FACE_UNKNOWN", "Unknown face"),
    ] {
        let mut r = rig();
        authorize(&mut r, roster::TAZ).await;

        r.link.feed_line(line).await.unwrap();
        r.reader.tick().await.unwrap();

        assert_eq!(r.panel.last().unwrap().line2, expected);
        assert_eq!(r.reader.state(), ReaderState::Idle);
    }
}

#[tokio::test]
async fn test_reader_recovers_after_failure() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    r.link.feed_line("FACE_NOT_FOUND").await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.reader.state(), ReaderState::Idle);

    // The user re-presents the card; a fresh session starts.
    r.rfid.present_card(roster::TAZ).await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.reader.state(), ReaderState::AwaitingVerification);
    assert!(r.link.try_next_request().is_some());
}

// ============================================================================
// Link Robustness
// ============================================================================

#[tokio::test]
async fn test_fragmented_bytes_across_ticks() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    // One verdict, dribbled in over several polls.
    for chunk in [&b"FACE"[..], b"_VERIF", b"IED:T", b"az\r\n"] {
        assert_eq!(r.reader.state(), ReaderState::AwaitingVerification);
        r.link.feed_bytes(chunk).await.unwrap();
        r.reader.tick().await.unwrap();
    }

    assert_eq!(r.reader.state(), ReaderState::Idle);
    assert_eq!(r.panel.count(), 1);
    assert_eq!(r.panel.last().unwrap().line1, "VERIFIED!");
}

#[tokio::test]
async fn test_camera_noise_does_not_disturb_session() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    r.link.feed_line("ets Jul 29 2019 12:21:46").await.unwrap();
    r.link.feed_line("").await.unwrap();
    r.reader.tick().await.unwrap();

    assert_eq!(r.reader.state(), ReaderState::AwaitingVerification);
    assert_eq!(r.panel.count(), 0);
}

#[tokio::test]
async fn test_late_verdict_after_reset_dropped() {
    let mut r = rig();
    authorize(&mut r, roster::TAZ).await;

    r.link.feed_line("FACE_NOT_FOUND").await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.reader.state(), ReaderState::Idle);
    r.panel.clear();

    // A verdict straggling in after the session ended changes nothing.
    r.link.feed_line("FACE_VERIFIED:Taz").await.unwrap();
    r.reader.tick().await.unwrap();
    assert_eq!(r.reader.state(), ReaderState::Idle);
    assert_eq!(r.panel.count(), 0);
}
