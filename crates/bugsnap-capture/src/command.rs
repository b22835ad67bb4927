// SPDX-FileCopyrightText: 2026 BugSnap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shell-command camera backend.
//!
//! Bridges to whatever capture tool the host has (`imagesnap`,
//! `fswebcam`, `libcamera-still`, ...) via a user-configured command line.
//! The command must write one image to the `{output}` placeholder path; an
//! optional `{facing}` placeholder receives `front` or `back`.

use async_trait::async_trait;
use bugsnap_core::BugsnapError;
use tracing::debug;

use crate::camera::{CameraDevice, CameraStream, Facing};

/// Camera backend that shells out to a configured capture command.
#[derive(Debug, Clone)]
pub struct CommandCamera {
    command: Option<String>,
}

impl CommandCamera {
    /// Creates a backend from the configured command line, if any.
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl CameraDevice for CommandCamera {
    async fn request_stream(&self, facing: Facing) -> Result<Box<dyn CameraStream>, BugsnapError> {
        let command = match &self.command {
            Some(c) if !c.trim().is_empty() => c.clone(),
            _ => {
                return Err(BugsnapError::Camera {
                    message: "no capture command configured (set camera.capture_command)".into(),
                });
            }
        };

        Ok(Box::new(CommandStream {
            command,
            facing,
            live: true,
        }))
    }
}

struct CommandStream {
    command: String,
    facing: Facing,
    live: bool,
}

#[async_trait]
impl CameraStream for CommandStream {
    async fn grab_frame(&mut self) -> Result<Vec<u8>, BugsnapError> {
        let dir = tempfile::tempdir().map_err(|e| BugsnapError::Capture {
            message: "could not create temp dir for camera frame".into(),
            source: Some(Box::new(e)),
        })?;
        let output = dir.path().join("frame.img");

        let line = self
            .command
            .replace("{output}", &output.to_string_lossy())
            .replace("{facing}", self.facing.as_str());
        debug!(command = %line, "running capture command");

        let status = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(&line)
            .status()
            .await
            .map_err(|e| BugsnapError::Capture {
                message: format!("failed to run capture command: {line}"),
                source: Some(Box::new(e)),
            })?;

        if !status.success() {
            return Err(BugsnapError::Capture {
                message: format!("capture command exited with {status}"),
                source: None,
            });
        }

        let bytes = tokio::fs::read(&output)
            .await
            .map_err(|e| BugsnapError::Capture {
                message: "capture command produced no output image".into(),
                source: Some(Box::new(e)),
            })?;

        if bytes.is_empty() {
            return Err(BugsnapError::Capture {
                message: "capture command produced an empty image".into(),
                source: None,
            });
        }

        Ok(bytes)
    }

    async fn stop_tracks(&mut self) {
        // Nothing persistent to release; the command runs per frame.
        self.live = false;
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraSession;

    #[tokio::test]
    async fn unconfigured_command_is_a_camera_error() {
        let mut session = CameraSession::new(CommandCamera::new(None));
        let err = session.open().await.unwrap_err();
        assert!(matches!(err, BugsnapError::Camera { .. }));
        assert!(err.to_string().contains("capture_command"));
    }

    #[tokio::test]
    async fn blank_command_is_a_camera_error() {
        let mut session = CameraSession::new(CommandCamera::new(Some("   ".into())));
        assert!(session.open().await.is_err());
    }

    #[tokio::test]
    async fn command_output_becomes_a_frame() {
        let camera =
            CommandCamera::new(Some(r"printf '\211PNG\r\n' > {output}".into()));
        let mut session = CameraSession::new(camera);

        session.open().await.unwrap();
        let uri = session.capture().await.unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn facing_placeholder_is_substituted() {
        let camera = CommandCamera::new(Some("printf '%s' {facing} > {output}".into()));
        let mut session = CameraSession::new(camera);
        session.toggle_facing(); // back -> front

        session.open().await.unwrap();
        let uri = session.capture().await.unwrap();
        // "front" carries no image magic, so it sniffs as the JPEG default.
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        let payload = bugsnap_core::datauri::payload(&uri);
        use base64::Engine as _;
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        assert_eq!(bytes, b"front");
    }

    #[tokio::test]
    async fn failing_command_is_a_capture_error() {
        let camera = CommandCamera::new(Some("exit 3".into()));
        let mut session = CameraSession::new(camera);

        session.open().await.unwrap();
        let err = session.capture().await.unwrap_err();
        assert!(matches!(err, BugsnapError::Capture { .. }));
        assert_eq!(session.state(), crate::camera::CameraState::Closed);
    }

    #[tokio::test]
    async fn command_writing_nothing_is_a_capture_error() {
        let camera = CommandCamera::new(Some("true".into()));
        let mut session = CameraSession::new(camera);

        session.open().await.unwrap();
        assert!(session.capture().await.is_err());
    }
}
