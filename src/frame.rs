use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::star_color;
use crate::core::{Driver, FrameScheduler, Starfield, Theme, Variant};
use crate::render::CanvasPainter;
use crate::{dom, events};

/// requestAnimationFrame-backed scheduler. Holds the shared tick closure so
/// the driver can issue a request from any callback it runs in.
pub struct RafScheduler {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafScheduler {
    fn new() -> Self {
        Self {
            tick: Rc::new(RefCell::new(None)),
        }
    }

    fn install(&self, closure: Closure<dyn FnMut()>) {
        *self.tick.borrow_mut() = Some(closure);
    }

    /// Drop the tick closure; breaks the cycle back to the app on teardown.
    fn clear(&self) {
        self.tick.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> i32 {
        let tick = self.tick.borrow();
        let (Some(window), Some(cb)) = (web::window(), tick.as_ref()) else {
            return 0;
        };
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .unwrap_or(0)
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

/// One mounted starfield: field, driver, surface, and the listeners that
/// feed them. There is at most one per page.
pub struct App {
    field: Starfield,
    driver: Driver,
    scheduler: RafScheduler,
    canvas: web::HtmlCanvasElement,
    theme: Theme,
    created_canvas: bool,
    resize_listener: Option<Closure<dyn FnMut()>>,
    visibility_listener: Option<Closure<dyn FnMut()>>,
}

pub fn mount(variant: Variant, theme: Theme) -> anyhow::Result<Rc<RefCell<App>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (canvas, created_canvas) = dom::background_canvas(&document, variant, theme)?;
    let (width, height) = dom::viewport_size(&window);
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);

    let seed = js_sys::Date::now() as u64;
    let field = Starfield::new(variant.config(), width, height, seed);
    log::info!(
        "starfield: {:?}/{:?}, {} stars over {}x{}",
        variant,
        theme,
        field.len(),
        width,
        height
    );

    let app = Rc::new(RefCell::new(App {
        field,
        driver: Driver::new(),
        scheduler: RafScheduler::new(),
        canvas,
        theme,
        created_canvas,
        resize_listener: None,
        visibility_listener: None,
    }));

    let tick_app = app.clone();
    let tick = Closure::wrap(Box::new(move || {
        tick_app.borrow_mut().on_frame();
    }) as Box<dyn FnMut()>);
    app.borrow().scheduler.install(tick);

    let resize_app = app.clone();
    let resize_listener = events::listen(&window, "resize", move || {
        if let Some(window) = web::window() {
            let (width, height) = dom::viewport_size(&window);
            resize_app.borrow_mut().handle_resize(width, height);
        }
    });

    let visibility_app = app.clone();
    let visibility_document = document.clone();
    let visibility_listener = events::listen(&document, "visibilitychange", move || {
        let visible = !visibility_document.hidden();
        visibility_app.borrow_mut().handle_visibility(visible);
    });

    {
        let mut a = app.borrow_mut();
        a.resize_listener = Some(resize_listener);
        a.visibility_listener = Some(visibility_listener);
        let App {
            driver, scheduler, ..
        } = &mut *a;
        driver.start(scheduler);
    }

    Ok(app)
}

impl App {
    fn on_frame(&mut self) {
        let App {
            field,
            driver,
            scheduler,
            canvas,
            theme,
            ..
        } = self;
        if !driver.frame_fired(scheduler) {
            // Late callback after suspend or teardown.
            return;
        }
        // The surface can detach while a callback is queued; skip the frame
        // rather than fail the page.
        let Some(ctx) = context_2d(canvas) else {
            return;
        };
        let color = star_color(field.config().variant, *theme);
        let mut painter = CanvasPainter::new(&ctx, color);
        field.frame(&mut painter);
    }

    fn handle_resize(&mut self, width: f32, height: f32) {
        // Resizing the backing store implicitly clears prior pixels.
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
        self.field.resize(width, height);
    }

    fn handle_visibility(&mut self, visible: bool) {
        let App {
            driver, scheduler, ..
        } = self;
        driver.set_visible(visible, scheduler);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        dom::apply_layer_style(&self.canvas, self.field.config().variant, theme);
    }

    pub fn teardown(&mut self) {
        {
            let App {
                driver, scheduler, ..
            } = self;
            driver.shutdown(scheduler);
        }
        if let Some(window) = web::window() {
            if let Some(listener) = self.resize_listener.take() {
                events::unlisten(&window, "resize", &listener);
            }
            if let Some(document) = window.document() {
                if let Some(listener) = self.visibility_listener.take() {
                    events::unlisten(&document, "visibilitychange", &listener);
                }
            }
        }
        self.scheduler.clear();
        if self.created_canvas {
            self.canvas.remove();
        }
        log::info!("starfield: stopped");
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}
