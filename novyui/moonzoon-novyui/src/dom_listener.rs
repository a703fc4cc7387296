use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Raw DOM event listener that is removed again when dropped.
///
/// Keep the guard alive with `after_remove` instead of `Closure::forget` so
/// elements that come and go do not pile up listeners.
pub struct DomListener {
    target: web_sys::EventTarget,
    event_type: &'static str,
    capture: bool,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl DomListener {
    pub fn new(
        target: &web_sys::EventTarget,
        event_type: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        Self::register(target, event_type, false, handler)
    }

    /// Listens in the capture phase, e.g. to see `scroll` of any descendant.
    pub fn new_capturing(
        target: &web_sys::EventTarget,
        event_type: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        Self::register(target, event_type, true, handler)
    }

    fn register(
        target: &web_sys::EventTarget,
        event_type: &'static str,
        capture: bool,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        if target
            .add_event_listener_with_callback_and_bool(event_type, closure.as_ref().unchecked_ref(), capture)
            .is_err()
        {
            zoon::eprintln!("DOM: failed to listen to '{}'", event_type);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event_type,
            capture,
            closure,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}
