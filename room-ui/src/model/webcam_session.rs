/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

use std::cell::RefCell;
use std::rc::Rc;

use gloo_utils::{document, window};
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::ConstrainDoubleRange;
use web_sys::HtmlElement;
use web_sys::HtmlVideoElement;
use web_sys::MediaStream;
use web_sys::MediaStreamConstraints;
use web_sys::MediaStreamTrack;
use web_sys::MediaTrackConstraints;

use super::capture_error::CaptureError;
use crate::constants::{PLACEHOLDER_ELEMENT_ID, VIDEO_ELEMENT_ID, VIDEO_HEIGHT, VIDEO_WIDTH};

/// The page surfaces the session mutates. Injected so the session can be
/// exercised against detached elements in tests instead of a live page.
pub trait RoomSurfaces {
    /// The `<video>` element rendering the live stream.
    fn display_surface(&self) -> Option<HtmlVideoElement>;

    /// The fallback block shown while no stream is bound.
    fn placeholder(&self) -> Option<HtmlElement>;
}

/// Resolves the surfaces from the live document by their stable ids.
#[derive(Clone, Default)]
pub struct DocumentSurfaces;

impl RoomSurfaces for DocumentSurfaces {
    fn display_surface(&self) -> Option<HtmlVideoElement> {
        document()
            .get_element_by_id(VIDEO_ELEMENT_ID)
            .and_then(|elem| elem.dyn_into::<HtmlVideoElement>().ok())
    }

    fn placeholder(&self) -> Option<HtmlElement> {
        document()
            .get_element_by_id(PLACEHOLDER_ELEMENT_ID)
            .and_then(|elem| elem.dyn_into::<HtmlElement>().ok())
    }
}

/// [WebcamSession] owns the live camera stream for the interview page.
///
/// At most one stream is held at a time. [`initialize`](Self::initialize)
/// releases any previous stream before requesting a new one, and
/// [`stop`](Self::stop) may be called at any point, including twice in a row.
///
/// The stream lives behind an `Rc<RefCell<..>>` so that a clone of the
/// session can be moved into the `spawn_local` that awaits the browser's
/// permission prompt, the single suspension point in this module.
#[derive(Clone)]
pub struct WebcamSession<S: RoomSurfaces> {
    stream: Rc<RefCell<Option<MediaStream>>>,
    surfaces: S,
}

impl<S: RoomSurfaces> WebcamSession<S> {
    pub fn new(surfaces: S) -> Self {
        Self {
            stream: Rc::new(RefCell::new(None)),
            surfaces,
        }
    }

    /// Whether a stream is currently held.
    pub fn is_active(&self) -> bool {
        self.stream.borrow().is_some()
    }

    /// Whether the video track is currently transmitting. `false` when no
    /// session is live.
    pub fn is_enabled(&self) -> bool {
        self.video_track().map(|t| t.enabled()).unwrap_or(false)
    }

    /// Request the camera and bind the resulting stream to the display
    /// surface. Any previously held stream is released first, so calling
    /// this while a session is live swaps it for a fresh one.
    ///
    /// Resolves once the browser grants or denies the request; no timeout
    /// is applied on top of the browser's own prompt handling.
    pub async fn initialize(&self) -> Result<(), CaptureError> {
        self.stop();
        let stream = request_camera().await?;
        self.bind(&stream);
        *self.stream.borrow_mut() = Some(stream);
        info!("Webcam initialized successfully");
        Ok(())
    }

    /// Flip the video track's enabled flag and fade the display surface to
    /// match. Returns the new state, or `None` when no session or track is
    /// live (not an error).
    pub fn toggle(&self) -> Option<bool> {
        let track = self.video_track()?;
        let enabled = !track.enabled();
        track.set_enabled(enabled);
        if let Some(video) = self.surfaces.display_surface() {
            let _ = video
                .style()
                .set_property("opacity", if enabled { "1" } else { "0" });
        }
        Some(enabled)
    }

    /// Stop every track, drop the stream, unbind the display surface, and
    /// put the placeholder back. A second call in a row is a no-op.
    pub fn stop(&self) {
        let stream = match self.stream.borrow_mut().take() {
            Some(stream) => stream,
            None => return,
        };
        for track in stream.get_tracks().iter() {
            track.unchecked_into::<MediaStreamTrack>().stop();
        }
        if let Some(video) = self.surfaces.display_surface() {
            video.set_src_object(None);
        }
        if let Some(placeholder) = self.surfaces.placeholder() {
            let _ = placeholder.style().set_property("display", "flex");
        }
    }

    fn bind(&self, stream: &MediaStream) {
        if let Some(video) = self.surfaces.display_surface() {
            video.set_src_object(Some(stream));
            video.set_muted(true);
            let _ = video.play();
            // A fresh track starts enabled; the surface opacity must agree
            // even if the previous session was toggled off.
            let _ = video.style().set_property("opacity", "1");
        }
        if let Some(placeholder) = self.surfaces.placeholder() {
            let _ = placeholder.style().set_property("display", "none");
        }
    }

    // The constraint set only ever requests one video track.
    fn video_track(&self) -> Option<MediaStreamTrack> {
        let stream = self.stream.borrow();
        let track = stream.as_ref()?.get_video_tracks().get(0);
        if track.is_undefined() {
            return None;
        }
        Some(track.unchecked_into())
    }
}

async fn request_camera() -> Result<MediaStream, CaptureError> {
    let media_devices = window()
        .navigator()
        .media_devices()
        .map_err(CaptureError::from)?;

    let constraints = MediaStreamConstraints::new();

    let video = MediaTrackConstraints::new();
    let width = ConstrainDoubleRange::new();
    width.set_ideal(VIDEO_WIDTH as f64);
    video.set_width(&width);
    let height = ConstrainDoubleRange::new();
    height.set_ideal(VIDEO_HEIGHT as f64);
    video.set_height(&height);
    video.set_facing_mode(&"user".into());
    constraints.set_video(&video);

    // Audio stays off, the interview page only captures video.
    constraints.set_audio(&false.into());

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(CaptureError::from)?;
    let stream = JsFuture::from(promise).await.map_err(CaptureError::from)?;

    Ok(stream.unchecked_into::<MediaStream>())
}
