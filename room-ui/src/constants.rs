// Ideal capture geometry requested from the camera; the browser may hand
// back something smaller.
pub const VIDEO_WIDTH: i32 = 1280i32;
pub const VIDEO_HEIGHT: i32 = 720i32;

/// Element id of the candidate's `<video>` surface.
pub const VIDEO_ELEMENT_ID: &str = "candidate-video";

/// Element id of the fallback block shown while no stream is bound.
pub const PLACEHOLDER_ELEMENT_ID: &str = "webcam-placeholder";

/// Delay between the first render and the camera permission request.
pub const WEBCAM_START_DELAY_MS: u32 = 1000;

/// Default length of one interviewer "speaking" pulse.
pub const SPEAKING_PULSE_MS: u32 = 3000;
