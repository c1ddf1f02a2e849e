//! Barcode capture loop: read frames, decode, resolve to a product name.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use thiserror::Error;

use super::ports::{BarcodeDecoder, CameraError, FrameSource, ProductLookup};

/// Cooperative cancel signal for a running scan; clone it into whatever
/// control stops the scan.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to access the camera.")]
    Camera(#[from] CameraError),
}

/// Reads frames until a decoded payload resolves to a known product, then
/// returns its display name. `Ok(None)` means the scan was cancelled.
/// Payloads with no matching product keep the loop running, as does a failed
/// lookup; only success, cancellation, and a camera failure terminate it.
pub async fn resolve_scanned_item<F, D, L>(
    frames: &mut F,
    decoder: &D,
    lookup: &L,
    cancel: &CancelFlag,
) -> Result<Option<String>, ScanError>
where
    F: FrameSource,
    D: BarcodeDecoder,
    L: ProductLookup,
{
    loop {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        let frame = frames.next_frame()?;
        for payload in decoder.decode(&frame) {
            match lookup.product_name(&payload).await {
                Ok(Some(name)) => return Ok(Some(name)),
                Ok(None) => println!("[scan] no product for barcode {payload}"),
                Err(error) => println!("[scan] lookup failed for barcode {payload}: {error}"),
            }
        }
    }
}
