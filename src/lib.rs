#![cfg(target_arch = "wasm32")]
//! Decorative animated starfield for a site background: a fixed,
//! full-viewport, pointer-transparent canvas layer driven by
//! requestAnimationFrame. The particle model and population logic live in
//! `core` and are exercised by host-side tests; this crate root is the web
//! glue.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use crate::core::{Theme, Variant};
use frame::App;

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// Mount the starfield layer and start animating. `variant` is "classic" or
/// "enhanced"; `theme` is "dark" or "light". A previously mounted layer is
/// torn down first.
#[wasm_bindgen]
pub fn starfield_start(variant: &str, theme: &str) {
    starfield_stop();
    let variant = Variant::parse(variant);
    let theme = Theme::parse(theme);
    match frame::mount(variant, theme) {
        Ok(app) => APP.with(|cell| *cell.borrow_mut() = Some(app)),
        Err(e) => log::error!("starfield init error: {e:?}"),
    }
}

/// Swap the theme. Affects the star color and layer blend only, never the
/// particle state.
#[wasm_bindgen]
pub fn starfield_set_theme(theme: &str) {
    let theme = Theme::parse(theme);
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.borrow_mut().set_theme(theme);
        }
    });
}

/// Cancel the pending frame, detach the resize/visibility listeners, and
/// release the surface.
#[wasm_bindgen]
pub fn starfield_stop() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().take() {
            app.borrow_mut().teardown();
        }
    });
}
