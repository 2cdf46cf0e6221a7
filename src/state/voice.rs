//! Voice Capture
//!
//! Speech-to-text for the intake and chat inputs via the browser
//! SpeechRecognition API. Chrome still ships the constructor under the
//! `webkitSpeechRecognition` name, so construction falls back through
//! `Reflect` when the unprefixed form is missing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

/// Whether this browser exposes speech recognition at all
pub fn supported() -> bool {
    recognizer().is_some()
}

fn recognizer() -> Option<SpeechRecognition> {
    if let Ok(recognition) = SpeechRecognition::new() {
        return Some(recognition);
    }

    let window = web_sys::window()?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("webkitSpeechRecognition")).ok()?;
    if !ctor.is_function() {
        return None;
    }

    js_sys::Reflect::construct(&ctor.unchecked_into::<js_sys::Function>(), &js_sys::Array::new())
        .ok()
        .map(|recognition| recognition.unchecked_into())
}

/// Listen for a single utterance and pass the transcript to `on_text`.
///
/// Returns `false` when recognition is unavailable or refuses to start,
/// so callers can hide or disable their microphone buttons.
pub fn capture(on_text: impl Fn(String) + 'static) -> bool {
    let recognition = match recognizer() {
        Some(recognition) => recognition,
        None => return false,
    };

    recognition.set_lang("en-IN");
    recognition.set_interim_results(false);
    recognition.set_max_alternatives(1);

    let on_result = Closure::wrap(Box::new(move |event: SpeechRecognitionEvent| {
        let transcript = event
            .results()
            .and_then(|results| results.get(0))
            .and_then(|result| result.get(0))
            .map(|alternative| alternative.transcript())
            .unwrap_or_default();

        if !transcript.is_empty() {
            on_text(transcript);
        }
    }) as Box<dyn FnMut(SpeechRecognitionEvent)>);

    recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));
    on_result.forget();

    match recognition.start() {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("Speech recognition failed to start: {:?}", e).into());
            false
        }
    }
}
