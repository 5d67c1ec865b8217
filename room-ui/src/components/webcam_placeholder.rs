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

//! Fallback block shown in the candidate tile while no stream is bound.
//!
//! Content is state-driven: a connecting hint before the first acquisition,
//! or the classified failure message plus a retry control. Visibility is
//! mutated by [`WebcamSession`](crate::model::webcam_session::WebcamSession)
//! through its surfaces, not by this component.

use yew::prelude::*;

use crate::constants::PLACEHOLDER_ELEMENT_ID;
use crate::model::capture_error::CaptureError;

#[derive(Properties, PartialEq)]
pub struct WebcamPlaceholderProps {
    pub error: Option<CaptureError>,
    pub on_retry: Callback<MouseEvent>,
}

#[function_component(WebcamPlaceholder)]
pub fn webcam_placeholder(props: &WebcamPlaceholderProps) -> Html {
    html! {
        <div id={PLACEHOLDER_ELEMENT_ID} class="webcam-placeholder">
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M16 16v1a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V7a2 2 0 0 1 2-2h2m5.66 0H14a2 2 0 0 1 2 2v3.34l1 1L23 7v10"></path>
                <line x1="1" y1="1" x2="23" y2="23"></line>
            </svg>
            {
                if let Some(error) = &props.error {
                    html! {
                        <>
                            <p class="placeholder-error">{ error.user_message() }</p>
                            <button class="retry-button" onclick={props.on_retry.clone()}>
                                { "Try Again" }
                            </button>
                        </>
                    }
                } else {
                    html! {
                        <p class="placeholder-hint">{ "Connecting to your camera..." }</p>
                    }
                }
            }
        </div>
    }
}
