//! Camera capability stubs.
//!
//! The desktop build ships without a camera backend; a scan attempt reports
//! the missing capability through the normal error path. Tests drive the
//! scan loop with their own frame sources.

use crate::domain::{BarcodeDecoder, CameraError, CameraFrame, FrameSource};

/// Frame source used when no camera backend is wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCamera;

impl FrameSource for NoCamera {
    fn next_frame(&mut self) -> Result<CameraFrame, CameraError> {
        Err(CameraError::Unavailable)
    }
}

/// Decoder counterpart of [`NoCamera`]; never yields a payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDecoder;

impl BarcodeDecoder for NoopDecoder {
    fn decode(&self, _frame: &CameraFrame) -> Vec<String> {
        Vec::new()
    }
}
