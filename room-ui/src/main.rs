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

use log::Level;
use yew::prelude::*;

use interview_room_ui::components::interview_room::InterviewRoom;

#[function_component(App)]
fn app() -> Html {
    html! {
        <InterviewRoom />
    }
}

fn main() {
    let _ = console_log::init_with_level(Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Interview room loaded");
    yew::Renderer::<App>::new().render();
}
