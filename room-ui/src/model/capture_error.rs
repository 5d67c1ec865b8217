use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// Camera acquisition failures, classified from the `DOMException` name that
/// `getUserMedia` rejects with. Everything the browser reports that we don't
/// recognize lands in [`CaptureError::Other`] with its debug detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureError {
    /// The user (or a browser policy) refused camera access.
    PermissionDenied,
    /// No video input device is attached.
    DeviceNotFound,
    /// A device exists but another application holds it.
    DeviceBusy,
    /// Any other rejection (overconstrained, aborted, security, ...).
    Other(String),
}

impl CaptureError {
    /// The message shown inside the webcam placeholder.
    pub fn user_message(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied => {
                "Camera access denied. Please allow camera permissions."
            }
            CaptureError::DeviceNotFound => "No camera found on this device.",
            CaptureError::DeviceBusy => "Camera is already in use by another application.",
            CaptureError::Other(_) => "Unable to access camera",
        }
    }

    fn classify(name: &str, detail: String) -> Self {
        match name {
            "NotAllowedError" => CaptureError::PermissionDenied,
            "NotFoundError" => CaptureError::DeviceNotFound,
            "NotReadableError" => CaptureError::DeviceBusy,
            _ => CaptureError::Other(detail),
        }
    }
}

impl From<JsValue> for CaptureError {
    fn from(err: JsValue) -> Self {
        match err.dyn_ref::<DomException>() {
            Some(ex) => Self::classify(&ex.name(), format!("{}: {}", ex.name(), ex.message())),
            None => CaptureError::Other(format!("{err:?}")),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::PermissionDenied => write!(f, "camera permission denied"),
            CaptureError::DeviceNotFound => write!(f, "no camera attached"),
            CaptureError::DeviceBusy => write!(f, "camera held by another application"),
            CaptureError::Other(detail) => write!(f, "{detail}"),
        }
    }
}
