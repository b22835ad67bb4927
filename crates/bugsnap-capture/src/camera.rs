// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Camera session state machine.
//!
//! A session moves `Closed -> Requesting -> Streaming` and back to
//! `Closed` on every exit path. The hard invariant: once a stream has been
//! acquired, its tracks are always released, whether the session ends by
//! capture, by cancel, or by a failed frame grab.

use async_trait::async_trait;
use bugsnap_core::{BugsnapError, datauri};
use tracing::{debug, warn};

/// Which camera to ask the device for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Rear camera, preferred for photographing insects.
    #[default]
    Back,
    /// Front camera.
    Front,
}

impl Facing {
    pub fn toggle(self) -> Self {
        match self {
            Self::Back => Self::Front,
            Self::Front => Self::Back,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Front => "front",
        }
    }
}

/// Lifecycle of a camera session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Closed,
    /// Waiting on the device to grant a stream.
    Requesting,
    /// A live stream is held and a frame can be grabbed.
    Streaming,
}

/// A granted camera stream.
#[async_trait]
pub trait CameraStream: Send {
    /// Grabs one frame as raw encoded image bytes.
    async fn grab_frame(&mut self) -> Result<Vec<u8>, BugsnapError>;

    /// Releases the underlying device tracks. Must be idempotent.
    async fn stop_tracks(&mut self);

    /// Whether the stream still holds live tracks.
    fn is_live(&self) -> bool;
}

/// A camera backend that can grant streams.
#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn request_stream(&self, facing: Facing) -> Result<Box<dyn CameraStream>, BugsnapError>;
}

/// Drives one camera session over a [`CameraDevice`].
pub struct CameraSession<D: CameraDevice> {
    device: D,
    facing: Facing,
    state: CameraState,
    stream: Option<Box<dyn CameraStream>>,
}

impl<D: CameraDevice> CameraSession<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            facing: Facing::default(),
            state: CameraState::Closed,
            stream: None,
        }
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Flips between front and back camera. Takes effect on the next
    /// [`open`](Self::open); an already-open session is reopened by the
    /// caller.
    pub fn toggle_facing(&mut self) {
        self.facing = self.facing.toggle();
    }

    /// Requests a stream from the device.
    ///
    /// On denial the session lands back in `Closed` and the error is a
    /// recoverable [`BugsnapError::Camera`].
    pub async fn open(&mut self) -> Result<(), BugsnapError> {
        if self.state == CameraState::Streaming {
            return Ok(());
        }

        self.state = CameraState::Requesting;
        debug!(facing = self.facing.as_str(), "requesting camera stream");

        match self.device.request_stream(self.facing).await {
            Ok(stream) => {
                self.stream = Some(stream);
                self.state = CameraState::Streaming;
                Ok(())
            }
            Err(e) => {
                self.state = CameraState::Closed;
                warn!(error = %e, "camera stream request denied");
                Err(BugsnapError::Camera {
                    message: format!("could not open camera: {e}"),
                })
            }
        }
    }

    /// Grabs one frame, closes the session, and returns the frame as a
    /// data URI.
    ///
    /// Tracks are released and the state reset to `Closed` before the grab
    /// result is propagated, so a failed grab never leaks a live stream.
    pub async fn capture(&mut self) -> Result<String, BugsnapError> {
        let mut stream = self.stream.take().ok_or_else(|| BugsnapError::Camera {
            message: "no camera stream open".into(),
        })?;

        let grabbed = stream.grab_frame().await;
        stream.stop_tracks().await;
        self.state = CameraState::Closed;

        let bytes = grabbed?;
        let mime = datauri::sniff_mime(&bytes);
        debug!(mime, len = bytes.len(), "frame captured");
        Ok(datauri::encode(mime, &bytes))
    }

    /// Closes the session without capturing. Safe to call in any state.
    pub async fn cancel(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop_tracks().await;
        }
        self.state = CameraState::Closed;
    }
}
