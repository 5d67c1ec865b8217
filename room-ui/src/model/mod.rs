pub mod capture_error;
pub mod speaking_indicator;
pub mod webcam_session;
