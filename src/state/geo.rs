//! Live Location
//!
//! One-shot geolocation lookup used by the guided intake form. The fix is
//! best-effort: denial, timeout, or an unsupported browser all resolve to
//! `None` and the form stays fully usable.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A captured latitude/longitude pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Human-readable coordinates at street-level precision
    pub fn label(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Request the device position once and hand the outcome to `on_fix`.
///
/// The browser prompt can sit unanswered indefinitely, so the lookup is
/// capped at ten seconds before the error callback fires.
pub fn locate(on_fix: impl Fn(Option<GeoPoint>) + 'static) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            on_fix(None);
            return;
        }
    };

    let geolocation = match window.navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(_) => {
            on_fix(None);
            return;
        }
    };

    let on_fix = Rc::new(on_fix);

    let on_success = {
        let on_fix = Rc::clone(&on_fix);
        Closure::wrap(Box::new(move |position: web_sys::Position| {
            let coords = position.coords();
            on_fix(Some(GeoPoint {
                lat: coords.latitude(),
                lng: coords.longitude(),
            }));
        }) as Box<dyn FnMut(web_sys::Position)>)
    };

    let on_error = {
        let on_fix = Rc::clone(&on_fix);
        Closure::wrap(Box::new(move |_error: web_sys::PositionError| {
            on_fix(None);
        }) as Box<dyn FnMut(web_sys::PositionError)>)
    };

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(10_000);

    let requested = geolocation.get_current_position_with_error_callback_and_options(
        on_success.as_ref().unchecked_ref(),
        Some(on_error.as_ref().unchecked_ref()),
        &options,
    );

    if let Err(e) = requested {
        web_sys::console::error_1(&format!("Geolocation request failed: {:?}", e).into());
        on_fix(None);
    }

    // Leak the callbacks; the browser owns them from here
    on_success.forget();
    on_error.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_uses_five_decimals() {
        let point = GeoPoint {
            lat: 12.971598765,
            lng: 77.594562345,
        };
        assert_eq!(point.label(), "12.97160, 77.59456");
    }
}
