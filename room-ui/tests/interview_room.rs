// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the interview room shell and its placeholder.
//
// These follow the pattern used by the Yew framework's own test suite:
// render into a mount-point div, yield to the scheduler with
// `sleep(Duration::ZERO)`, then assert on the DOM.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use support::{cleanup, create_mount_point};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use interview_room_ui::components::interview_room::InterviewRoom;
use interview_room_ui::components::webcam_placeholder::WebcamPlaceholder;
use interview_room_ui::model::capture_error::CaptureError;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// InterviewRoom shell
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn room_renders_surfaces_and_controls() {
    let mount = create_mount_point();
    yew::Renderer::<InterviewRoom>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    assert!(
        mount.query_selector("#candidate-video").unwrap().is_some(),
        "candidate video surface should be rendered"
    );
    assert!(
        mount
            .query_selector("#webcam-placeholder")
            .unwrap()
            .is_some(),
        "placeholder should be rendered before the stream is bound"
    );
    assert!(
        mount
            .query_selector(".ai-interviewer-container")
            .unwrap()
            .is_some(),
        "interviewer tile should be rendered"
    );
    assert!(
        mount
            .query_selector(".video-control-button")
            .unwrap()
            .is_some(),
        "camera toggle should be rendered"
    );

    cleanup(&mount);
}

// ---------------------------------------------------------------------------
// WebcamPlaceholder states
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn placeholder_without_error_shows_connecting_hint() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <WebcamPlaceholder error={None::<CaptureError>} on_retry={Callback::noop()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let hint = mount.query_selector(".placeholder-hint").unwrap().unwrap();
    assert_eq!(hint.text_content().unwrap(), "Connecting to your camera...");
    assert!(
        mount.query_selector(".retry-button").unwrap().is_none(),
        "no retry control without an error"
    );

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn permission_denied_shows_message_and_retry_control() {
    #[derive(Properties, PartialEq)]
    struct Props {
        on_retry: Callback<MouseEvent>,
    }
    #[function_component(Wrapper)]
    fn wrapper(props: &Props) -> Html {
        html! {
            <WebcamPlaceholder
                error={Some(CaptureError::PermissionDenied)}
                on_retry={props.on_retry.clone()}
            />
        }
    }

    let retried = Rc::new(Cell::new(false));
    let on_retry = {
        let retried = retried.clone();
        Callback::from(move |_| retried.set(true))
    };

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), Props { on_retry }).render();
    sleep(Duration::ZERO).await;

    let message = mount.query_selector(".placeholder-error").unwrap().unwrap();
    assert_eq!(
        message.text_content().unwrap(),
        "Camera access denied. Please allow camera permissions."
    );

    let button = mount
        .query_selector(".retry-button")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert_eq!(button.text_content().unwrap(), "Try Again");

    button.click();
    sleep(Duration::ZERO).await;
    assert!(
        retried.get(),
        "clicking Try Again should re-invoke initialization"
    );

    cleanup(&mount);
}
