//! The camera node's HTTP frame server.
//!
//! A deliberately plain request/response server with no state machine: the
//! external face-recognition process polls `/cam-lo.jpg` for frames, and a
//! human can hit `/` for a status page. Capture failures return `500` with
//! a plain-text body and are never retried server-side. No authentication;
//! the endpoint lives on a trusted local network.

use crate::frame::{FrameSource, Resolution};
use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::{error, info};

/// Build the frame-serving router around a capture source.
pub fn router<S>(source: S) -> Router
where
    S: FrameSource + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/cam-lo.jpg", get(frame_low::<S>))
        .route("/cam-hi.jpg", get(frame_high::<S>))
        .route("/capture", get(frame_high::<S>))
        .with_state(source)
}

/// Bind `addr` and serve frames until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve<S>(addr: &str, source: S) -> std::io::Result<()>
where
    S: FrameSource + Clone + Send + Sync + 'static,
{
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "camera frame server listening");
    axum::serve(listener, router(source)).await
}

async fn index() -> Html<&'static str> {
    Html(
        "<html><body>\
         <h1>Camera Frame Server</h1>\
         <p>Available endpoints:</p>\
         <ul>\
         <li><a href='/cam-lo.jpg'>/cam-lo.jpg</a> - Low resolution image</li>\
         <li><a href='/cam-hi.jpg'>/cam-hi.jpg</a> - High resolution image</li>\
         <li><a href='/capture'>/capture</a> - Capture image</li>\
         </ul>\
         </body></html>",
    )
}

async fn frame_low<S: FrameSource>(State(source): State<S>) -> Response {
    capture_response(&source, Resolution::Low).await
}

async fn frame_high<S: FrameSource>(State(source): State<S>) -> Response {
    capture_response(&source, Resolution::High).await
}

async fn capture_response<S: FrameSource>(source: &S, resolution: Resolution) -> Response {
    match source.capture(resolution).await {
        Ok(frame) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "image/jpeg"),
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            ],
            frame,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "camera capture failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Camera capture failed").into_response()
        }
    }
}
