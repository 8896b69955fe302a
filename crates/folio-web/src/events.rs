//! Listener wiring between the DOM and the core state cells.
//!
//! Every subscription is held in a `ListenerGuard`: the closure stays alive
//! for as long as the guard does, and dropping the guard deregisters the
//! listener on every exit path. Nothing here leaks across mount/unmount
//! cycles.

use folio_core::scene::state::SceneState;
use folio_core::ui::form::ContactForm;
use folio_core::ui::scrollspy::{MobileMenu, NavPhase, ScrollSpy};
use folio_core::ui::tilt::TiltState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlTextAreaElement, Location, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
};

/// Scoped event subscription: registered on construction, deregistered on
/// drop.
pub struct ListenerGuard {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

// ── Scroll-spy ───────────────────────────────────────────────────────

fn apply_nav_phase(nav: &HtmlElement, phase: NavPhase) {
    let classes = nav.class_list();
    let _ = match phase {
        NavPhase::Scrolled => classes.add_1("nav-scrolled"),
        NavPhase::Top => classes.remove_1("nav-scrolled"),
    };
}

/// Watch the scrolling container and restyle the bar on phase transitions.
/// The initial phase is applied synchronously, before any scroll event.
pub fn wire_scrollspy(main: &HtmlElement, nav: &HtmlElement) -> Result<ListenerGuard, JsValue> {
    let spy = Rc::new(RefCell::new(ScrollSpy::new(main.scroll_top() as f32)));
    apply_nav_phase(nav, spy.borrow().phase());

    let container = main.clone();
    let nav = nav.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(phase) = spy.borrow_mut().observe(container.scroll_top() as f32) {
            apply_nav_phase(&nav, phase);
        }
    });
    ListenerGuard::new(main.as_ref(), "scroll", callback)
}

// ── Navigation links and mobile menu ─────────────────────────────────

fn apply_menu_state(menu_el: &HtmlElement, open: bool) {
    let classes = menu_el.class_list();
    let _ = if open {
        classes.add_1("menu-open")
    } else {
        classes.remove_1("menu-open")
    };
}

/// Anchor navigation: suppress the default jump and smooth-scroll to the
/// section. A missing anchor is a silent no-op. Any activation closes the
/// mobile menu.
pub fn wire_nav_link(
    document: &Document,
    link: &HtmlElement,
    anchor: &'static str,
    menu: Rc<RefCell<MobileMenu>>,
    menu_el: HtmlElement,
) -> Result<ListenerGuard, JsValue> {
    let doc = document.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Some(target) = doc.get_element_by_id(anchor) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        menu.borrow_mut().link_activated();
        apply_menu_state(&menu_el, false);
    });
    ListenerGuard::new(link.as_ref(), "click", callback)
}

pub fn wire_menu_toggle(
    button: &HtmlElement,
    menu: Rc<RefCell<MobileMenu>>,
    menu_el: HtmlElement,
) -> Result<ListenerGuard, JsValue> {
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let open = menu.borrow_mut().toggle();
        apply_menu_state(&menu_el, open);
    });
    ListenerGuard::new(button.as_ref(), "click", callback)
}

// ── Pointer tilt ─────────────────────────────────────────────────────

/// Feed pointer offsets into one card's tilt spring. The rotation itself is
/// written by the frame loop, not here.
pub fn wire_tilt(
    card: &HtmlElement,
    state: Rc<RefCell<TiltState>>,
) -> Result<Vec<ListenerGuard>, JsValue> {
    let surface = card.clone();
    let move_state = state.clone();
    let on_move = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let rect = surface.get_bounding_client_rect();
            let local = Vec2::new(
                mouse.client_x() as f32 - rect.left() as f32,
                mouse.client_y() as f32 - rect.top() as f32,
            );
            let size = Vec2::new(rect.width() as f32, rect.height() as f32);
            let offset = TiltState::normalized_offset(local, size);
            move_state.borrow_mut().pointer_move(offset.x, offset.y);
        }
    });

    let leave_state = state;
    let on_leave = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        leave_state.borrow_mut().pointer_leave();
    });

    Ok(vec![
        ListenerGuard::new(card.as_ref(), "mousemove", on_move)?,
        ListenerGuard::new(card.as_ref(), "mouseleave", on_leave)?,
    ])
}

// ── Project-card spotlight ───────────────────────────────────────────

/// CSS length values for the spotlight center, in card-local pixels.
fn spot_properties(x: f64, y: f64) -> (String, String) {
    (format!("{x:.1}px"), format!("{y:.1}px"))
}

/// Track the cursor over a card with `--spot-x`/`--spot-y` custom
/// properties; the stylesheet paints a radial gradient at that point.
pub fn wire_spotlight(card: &HtmlElement) -> Result<ListenerGuard, JsValue> {
    let surface = card.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let rect = surface.get_bounding_client_rect();
            let (x, y) = spot_properties(
                f64::from(mouse.client_x()) - rect.left(),
                f64::from(mouse.client_y()) - rect.top(),
            );
            let style = surface.style();
            let _ = style.set_property("--spot-x", &x);
            let _ = style.set_property("--spot-y", &y);
        }
    });
    ListenerGuard::new(card.as_ref(), "mousemove", callback)
}

// ── Contact form ─────────────────────────────────────────────────────

/// Mirror one input's edits into the shared form state, field by field.
pub fn wire_text_field(
    input: &HtmlInputElement,
    form: Rc<RefCell<ContactForm>>,
    apply: fn(&mut ContactForm, String),
) -> Result<ListenerGuard, JsValue> {
    let field = input.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        apply(&mut form.borrow_mut(), field.value());
    });
    ListenerGuard::new(input.as_ref(), "input", callback)
}

pub fn wire_message_field(
    input: &HtmlTextAreaElement,
    form: Rc<RefCell<ContactForm>>,
) -> Result<ListenerGuard, JsValue> {
    let field = input.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        form.borrow_mut().message = field.value();
    });
    ListenerGuard::new(input.as_ref(), "input", callback)
}

/// Submit: suppress the default submission and hand off to the mail client.
/// The outcome of the navigation is not observed, and the fields are left
/// as the user typed them.
pub fn wire_form_submit(
    form_el: &HtmlElement,
    form: Rc<RefCell<ContactForm>>,
    location: Location,
) -> Result<ListenerGuard, JsValue> {
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let link = form.borrow().mailto_link();
        if let Err(err) = location.set_href(&link) {
            log::warn!("mail hand-off navigation failed: {:?}", err);
        }
    });
    ListenerGuard::new(form_el.as_ref(), "submit", callback)
}

// ── Scene pointer input ──────────────────────────────────────────────

/// Forward document-level pointer input to the scene, in canvas-local
/// coordinates. Listening on the document keeps camera drags alive when the
/// cursor crosses the foreground content.
fn canvas_pos(canvas: &HtmlCanvasElement, mouse: &MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        mouse.client_x() as f32 - rect.left() as f32,
        mouse.client_y() as f32 - rect.top() as f32,
    )
}

pub fn wire_scene_pointer(
    document: &Document,
    canvas: &HtmlCanvasElement,
    scene: Rc<RefCell<SceneState>>,
) -> Result<Vec<ListenerGuard>, JsValue> {
    let down_canvas = canvas.clone();
    let down_scene = scene.clone();
    let on_down = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let (x, y) = canvas_pos(&down_canvas, mouse);
            down_scene.borrow_mut().pointer_down(x, y);
        }
    });

    let move_canvas = canvas.clone();
    let move_scene = scene.clone();
    let on_move = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let (x, y) = canvas_pos(&move_canvas, mouse);
            move_scene.borrow_mut().pointer_move(x, y);
        }
    });

    let up_scene = scene;
    let on_up = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        up_scene.borrow_mut().pointer_up();
    });

    Ok(vec![
        ListenerGuard::new(document.as_ref(), "mousedown", on_down)?,
        ListenerGuard::new(document.as_ref(), "mousemove", on_move)?,
        ListenerGuard::new(document.as_ref(), "mouseup", on_up)?,
    ])
}

// ── Viewport resize ──────────────────────────────────────────────────

pub fn wire_resize(
    window: &web_sys::Window,
    canvas: &HtmlCanvasElement,
    scene: Rc<RefCell<SceneState>>,
) -> Result<ListenerGuard, JsValue> {
    let win = window.clone();
    let surface = canvas.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let (w, h) = viewport_size(&win);
        surface.set_width(w as u32);
        surface.set_height(h as u32);
        scene.borrow_mut().resize(w as f32, h as f32);
    });
    ListenerGuard::new(window.as_ref(), "resize", callback)
}

/// Current viewport size in CSS pixels, with a sane fallback.
pub fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_values_are_px_lengths() {
        let (x, y) = spot_properties(312.25, 0.0);
        assert_eq!(x, "312.2px");
        assert_eq!(y, "0.0px");
    }

    #[test]
    fn spotlight_handles_positions_left_of_the_card() {
        // A drag entering from outside can report a negative local offset.
        let (x, _) = spot_properties(-4.5, 10.0);
        assert_eq!(x, "-4.5px");
    }
}
