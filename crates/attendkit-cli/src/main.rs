//! Demo binary for the attendance pipeline.
//!
//! `attendkit reader` drives the reader loop through a scripted attendance
//! scenario on mock devices, rendering every panel notification to stdout.
//! `attendkit camera [addr]` serves the camera node's frame endpoints with a
//! placeholder image.

use anyhow::{Context, Result, bail};
use attendkit_camera::StaticFrameSource;
use attendkit_core::Uid;
use attendkit_directory::{UserDirectory, UserRecord};
use attendkit_hardware::mock::{MockPanel, MockPanelHandle, MockRemoteLink, MockRfid};
use attendkit_hardware::Notification;
use attendkit_reader::{AttendanceController, ReaderLoop};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CAMERA_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("reader") => run_reader_demo().await,
        Some("camera") => {
            let addr = args.next().unwrap_or_else(|| DEFAULT_CAMERA_ADDR.into());
            run_camera(&addr).await
        }
        Some(other) => bail!("unknown command '{other}' (expected 'reader' or 'camera')"),
        None => {
            eprintln!("usage: attendkit reader");
            eprintln!("       attendkit camera [addr]");
            Ok(())
        }
    }
}

/// Built-in demo roster.
fn sample_directory() -> UserDirectory {
    UserDirectory::new(vec![
        UserRecord::new(Uid::new([0x9B, 0x3D, 0x42, 0x05]), "Taz", "202314100", "CSE"),
        UserRecord::new(
            Uid::new([0x6D, 0x7E, 0x6A, 0x05]),
            "Jamil",
            "202314102",
            "CSE",
        ),
        UserRecord::new(
            Uid::new([0x77, 0xB7, 0x47, 0x05]),
            "Tamim",
            "202314083",
            "CSE",
        ),
    ])
}

async fn run_camera(addr: &str) -> Result<()> {
    info!(addr, "starting camera frame server");
    attendkit_camera::serve(addr, StaticFrameSource::placeholder())
        .await
        .with_context(|| format!("camera server failed on {addr}"))
}

/// Plays a scripted scan/response scenario through the real reader loop,
/// with mock devices standing in for the RFID reader, the serial link to
/// the camera node, and the LCD/LED/buzzer panel.
async fn run_reader_demo() -> Result<()> {
    banner("Attendance", "System");
    banner("Ready to Scan", "Show your card");

    let (rfid, rfid_handle) = MockRfid::new();
    let (link, mut link_handle) = MockRemoteLink::new();
    let (panel, panel_handle) = MockPanel::new();
    let controller = AttendanceController::new(sample_directory());
    let mut reader = ReaderLoop::new(controller, rfid, link, panel);

    // Taz badges in and the camera confirms; the backend records the entry.
    info!("-- scenario: successful verification --");
    rfid_handle
        .present_card(Uid::new([0x9B, 0x3D, 0x42, 0x05]))
        .await?;
    reader.tick().await?;
    if let Some(request) = link_handle.try_next_request() {
        info!(name = %request.name, id = %request.id, "verification request sent to camera node");
    }
    link_handle.feed_line("FACE_CONFIDENCE:91.2").await?;
    link_handle.feed_line("FACE_VERIFIED:Taz").await?;
    reader.tick().await?;
    link_handle.feed_line("SHEETS_SUCCESS").await?;
    reader.tick().await?;
    drain(&panel_handle);

    // An unregistered badge is denied without contacting the camera.
    info!("-- scenario: unknown card --");
    rfid_handle
        .present_card(Uid::new([0xDE, 0xAD, 0xBE, 0xEF]))
        .await?;
    reader.tick().await?;
    drain(&panel_handle);

    // Jamil badges in but nobody is in front of the camera.
    info!("-- scenario: face not detected --");
    rfid_handle
        .present_card(Uid::new([0x6D, 0x7E, 0x6A, 0x05]))
        .await?;
    reader.tick().await?;
    let _ = link_handle.try_next_request();
    link_handle.feed_line("FACE_NOT_FOUND").await?;
    reader.tick().await?;
    drain(&panel_handle);

    banner("Ready to Scan", "Show your card");
    Ok(())
}

fn drain(panel: &MockPanelHandle) {
    for notification in panel.notifications() {
        show(&notification);
    }
    panel.clear();
}

/// Prints two display lines with no LED or buzzer activity.
fn banner(line1: &str, line2: &str) {
    println!("+------------------+");
    println!("| {line1:<16} |");
    println!("| {line2:<16} |");
    println!("+------------------+");
}

/// Renders a notification the way the 16x2 panel would show it.
fn show(n: &Notification) {
    println!("+------------------+");
    println!("| {:<16} |", n.line1);
    println!("| {:<16} |", n.line2);
    println!(
        "+------------------+  led: {:?}  beep: {:?} ({}ms)",
        n.led,
        n.beep,
        n.beep.total_duration_ms()
    );
}
