use candle_core::Device;
use tracing::{info, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use super::error::EmbeddingError;

/// Picks the compute device for the sentence encoder.
///
/// GPU backends are only tried when compiled in (`metal` / `cuda` features); anything that
/// fails to initialize drops through to the CPU, which always works.
pub fn select_device() -> Device {
    #[cfg(feature = "metal")]
    match metal_device() {
        Ok(device) => {
            info!("Using Metal GPU for sentence embeddings");
            return device;
        }
        Err(e) => warn!(error = %e, "Skipping Metal"),
    }

    #[cfg(feature = "cuda")]
    match cuda_device() {
        Ok(device) => {
            info!("Using CUDA GPU for sentence embeddings");
            return device;
        }
        Err(e) => warn!(error = %e, "Skipping CUDA"),
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        warn!("No GPU device initialized, using CPU");
    } else {
        info!("No GPU backend compiled, using CPU");
    }
    Device::Cpu
}

#[cfg(feature = "metal")]
fn metal_device() -> Result<Device, EmbeddingError> {
    Device::new_metal(0).map_err(|e| EmbeddingError::DeviceUnavailable {
        device: "metal".to_string(),
        reason: e.to_string(),
    })
}

#[cfg(feature = "cuda")]
fn cuda_device() -> Result<Device, EmbeddingError> {
    Device::new_cuda(0).map_err(|e| EmbeddingError::DeviceUnavailable {
        device: "cuda".to_string(),
        reason: e.to_string(),
    })
}
