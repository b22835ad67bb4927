// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image capture for BugSnap.
//!
//! Two ways in: reading an image file from disk, or grabbing a frame from
//! a camera session. Either way the output is a base64 data URI ready for
//! the identification provider and the history slot.

pub mod camera;
pub mod command;
pub mod file;

pub use camera::{CameraDevice, CameraSession, CameraState, CameraStream, Facing};
pub use command::CommandCamera;
pub use file::read_image_file;
