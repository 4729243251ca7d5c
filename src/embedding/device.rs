use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;

/// Picks the compute device for model inference.
///
/// GPU backends are only tried when compiled in (`metal` / `cuda` features);
/// every failure is logged and the CPU is used as the last resort, so this
/// only errors if no device at all can be produced.
pub fn select_device() -> Result<Device, EmbeddingError> {
    let mut failures: Vec<String> = Vec::new();

    if let Some(device) = try_metal(&mut failures) {
        return Ok(device);
    }

    if let Some(device) = try_cuda(&mut failures) {
        return Ok(device);
    }

    if cfg!(any(feature = "metal", feature = "cuda")) {
        let reason = if failures.is_empty() {
            "no GPU device available".to_string()
        } else {
            failures.join("; ")
        };
        warn!(reason = %reason, "Falling back to CPU device");
    } else {
        debug!("No GPU backend compiled, using CPU device");
    }

    Ok(Device::Cpu)
}

#[cfg(feature = "metal")]
fn try_metal(failures: &mut Vec<String>) -> Option<Device> {
    match Device::new_metal(0) {
        Ok(device) => {
            info!("Using Metal GPU acceleration");
            Some(device)
        }
        Err(e) => {
            warn!(error = %e, "Metal device unavailable");
            failures.push(format!("metal failed: {e}"));
            None
        }
    }
}

#[cfg(not(feature = "metal"))]
fn try_metal(_failures: &mut Vec<String>) -> Option<Device> {
    None
}

#[cfg(feature = "cuda")]
fn try_cuda(failures: &mut Vec<String>) -> Option<Device> {
    match Device::new_cuda(0) {
        Ok(device) => {
            info!("Using CUDA GPU acceleration");
            Some(device)
        }
        Err(e) => {
            warn!(error = %e, "CUDA device unavailable");
            failures.push(format!("cuda failed: {e}"));
            None
        }
    }
}

#[cfg(not(feature = "cuda"))]
fn try_cuda(_failures: &mut Vec<String>) -> Option<Device> {
    None
}
