use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a zero-argument listener and hand the closure back so the caller
/// can detach it on teardown. Leaking the closure here would keep a callback
/// firing against a torn-down renderer.
pub fn listen(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut() + 'static,
) -> Closure<dyn FnMut()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure
}

pub fn unlisten(target: &web::EventTarget, event: &str, closure: &Closure<dyn FnMut()>) {
    _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
}
