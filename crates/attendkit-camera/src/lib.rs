//! HTTP frame server for the camera node.
//!
//! The camera node is the simpler half of the attendance pipeline: it
//! exposes JPEG frames over HTTP for an external face-recognition consumer
//! and keeps no session state of its own. This crate provides the
//! [`FrameSource`] capture abstraction and the axum [`router`] that serves
//! it.

mod frame;
mod server;

pub use frame::{
    CameraError, FailingFrameSource, FrameSource, Resolution, Result, StaticFrameSource,
};
pub use server::{router, serve};
