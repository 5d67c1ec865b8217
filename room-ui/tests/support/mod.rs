// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for room-ui browser tests.
//
// Provides mount/cleanup helpers and detached stand-in surfaces so the
// webcam session can be exercised without mounting the full component tree.
// Camera acquisition in these tests relies on `webdriver.json` configuring
// Chrome with `--use-fake-device-for-media-stream` and
// `--use-fake-ui-for-media-stream`.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlVideoElement};

use interview_room_ui::model::webcam_session::RoomSurfaces;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Stand-in page surfaces
// ---------------------------------------------------------------------------

/// A `<video>` and a placeholder `<div>` attached directly to `<body>`,
/// implementing `RoomSurfaces` for session tests.
#[derive(Clone)]
pub struct TestSurfaces {
    pub video: HtmlVideoElement,
    pub placeholder: HtmlElement,
}

impl TestSurfaces {
    pub fn new() -> Self {
        let document = gloo_utils::document();
        let video = document
            .create_element("video")
            .unwrap()
            .unchecked_into::<HtmlVideoElement>();
        let placeholder = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        let body = document.body().unwrap();
        body.append_child(&video).unwrap();
        body.append_child(&placeholder).unwrap();
        Self { video, placeholder }
    }

    pub fn remove(&self) {
        self.video.remove();
        self.placeholder.remove();
    }

    pub fn placeholder_display(&self) -> String {
        self.placeholder
            .style()
            .get_property_value("display")
            .unwrap()
    }

    pub fn video_opacity(&self) -> String {
        self.video.style().get_property_value("opacity").unwrap()
    }
}

impl RoomSurfaces for TestSurfaces {
    fn display_surface(&self) -> Option<HtmlVideoElement> {
        Some(self.video.clone())
    }

    fn placeholder(&self) -> Option<HtmlElement> {
        Some(self.placeholder.clone())
    }
}
