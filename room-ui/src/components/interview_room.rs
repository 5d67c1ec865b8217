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

//! The interview room page shell: interviewer tile, candidate video tile
//! with its placeholder, and the camera control bar.

use gloo_timers::callback::Timeout;
use gloo_utils::window;
use log::{debug, error};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::camera_button::CameraButton;
use crate::components::webcam_placeholder::WebcamPlaceholder;
use crate::constants::{SPEAKING_PULSE_MS, VIDEO_ELEMENT_ID, WEBCAM_START_DELAY_MS};
use crate::model::capture_error::CaptureError;
use crate::model::speaking_indicator::simulate_speaking;
use crate::model::webcam_session::{DocumentSurfaces, WebcamSession};

pub enum Msg {
    StartWebcam,
    WebcamReady,
    WebcamFailed(CaptureError),
    ToggleCamera,
}

#[derive(Properties, Debug, PartialEq, Default)]
pub struct InterviewRoomProps {}

pub struct InterviewRoom {
    session: WebcamSession<DocumentSurfaces>,
    video_enabled: bool,
    error: Option<CaptureError>,
    unload_listener: Closure<dyn FnMut()>,
}

impl Component for InterviewRoom {
    type Message = Msg;
    type Properties = InterviewRoomProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let session = WebcamSession::new(DocumentSurfaces);

        // The browser gives no destroy hook on a hard navigation, so the
        // device release also hangs off beforeunload.
        let unload_listener = {
            let session = session.clone();
            Closure::wrap(Box::new(move || session.stop()) as Box<dyn FnMut()>)
        };
        let _ = window().add_event_listener_with_callback(
            "beforeunload",
            unload_listener.as_ref().unchecked_ref(),
        );

        Self {
            session,
            video_enabled: false,
            error: None,
            unload_listener,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            let timeout = Timeout::new(WEBCAM_START_DELAY_MS, move || {
                link.send_message(Msg::StartWebcam);
            });
            timeout.forget();
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartWebcam => {
                let session = self.session.clone();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match session.initialize().await {
                        Ok(()) => link.send_message(Msg::WebcamReady),
                        Err(e) => link.send_message(Msg::WebcamFailed(e)),
                    }
                });
                self.error = None;
                true
            }
            Msg::WebcamReady => {
                self.video_enabled = true;
                simulate_speaking(SPEAKING_PULSE_MS);
                true
            }
            Msg::WebcamFailed(e) => {
                error!("Error accessing webcam: {e}");
                self.video_enabled = false;
                self.error = Some(e);
                true
            }
            Msg::ToggleCamera => match self.session.toggle() {
                Some(enabled) => {
                    self.video_enabled = enabled;
                    true
                }
                None => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| Msg::ToggleCamera);
        let retry = ctx.link().callback(|_| Msg::StartWebcam);
        html! {
            <div class="interview-room">
                <div class="ai-interviewer-container">
                    <div class="interviewer-avatar">
                        <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path>
                            <circle cx="12" cy="7" r="4"></circle>
                        </svg>
                        <span class="interviewer-name">{ "Interviewer" }</span>
                    </div>
                </div>
                <div class="candidate-container">
                    <video id={VIDEO_ELEMENT_ID} class="candidate-video" autoplay=true></video>
                    <WebcamPlaceholder error={self.error.clone()} on_retry={retry} />
                </div>
                <div class="controls-bar">
                    <CameraButton enabled={self.video_enabled} onclick={toggle} />
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        debug!("destroying interview room");
        let _ = window().remove_event_listener_with_callback(
            "beforeunload",
            self.unload_listener.as_ref().unchecked_ref(),
        );
        self.session.stop();
    }
}
