use gloo_timers::callback::Timeout;
use gloo_utils::document;

/// CSS hook the interview page animates against.
const SPEAKING_CLASS: &str = "speaking";

/// The interviewer tile is selected structurally rather than by id.
const INTERVIEWER_SELECTOR: &str = ".ai-interviewer-container";

/// Light up the interviewer tile for `duration_ms`.
///
/// Purely cosmetic and unrelated to the capture session. Overlapping calls
/// each schedule their own removal timer; there is no debouncing. Does
/// nothing when no interviewer container is on the page.
pub fn simulate_speaking(duration_ms: u32) {
    let container = match document().query_selector(INTERVIEWER_SELECTOR) {
        Ok(Some(container)) => container,
        _ => return,
    };
    let _ = container.class_list().add_1(SPEAKING_CLASS);
    let timeout = Timeout::new(duration_ms, move || {
        let _ = container.class_list().remove_1(SPEAKING_CLASS);
    });
    timeout.forget();
}
