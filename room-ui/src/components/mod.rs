pub mod camera_button;
pub mod interview_room;
pub mod webcam_placeholder;
