//! Mount sequence and the per-frame animation loop.
//!
//! One `requestAnimationFrame` callback drives everything animated: the
//! background scene repaint and every tilt spring. Settled cards skip their
//! style write, so an idle page costs one canvas pass per frame and nothing
//! else.

use crate::dom;
use crate::events::{self, ListenerGuard};
use folio_core::scene::sphere::Rgb;
use folio_core::scene::state::{ScenePoint, SceneState};
use folio_core::ui::form::ContactForm;
use folio_core::ui::scrollspy::MobileMenu;
use folio_core::ui::tilt::TiltState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

/// Star-field seed; fixed so every visit shows the same sky.
const SCENE_SEED: u64 = 0x5EED_F011;

/// Frame delta assumed before the first timestamp pair is available.
const DEFAULT_DT: f32 = 1.0 / 60.0;

type FrameHandle = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

struct TiltCard {
    element: HtmlElement,
    state: Rc<RefCell<TiltState>>,
    at_rest: bool,
}

/// Owns every listener guard and the frame closure. Dropping the runner
/// deregisters all listeners and lets the loop lapse after the pending
/// frame.
pub struct AppRunner {
    _guards: Vec<ListenerGuard>,
    _frame: FrameHandle,
}

impl AppRunner {
    pub fn mount() -> Result<AppRunner, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let page = dom::build_page(&document, &body)?;

        let (width, height) = events::viewport_size(&window);
        page.canvas.set_width(width as u32);
        page.canvas.set_height(height as u32);
        let context = page
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let scene = Rc::new(RefCell::new(SceneState::new(
            width as f32,
            height as f32,
            SCENE_SEED,
        )));

        let mut guards = Vec::new();
        guards.push(events::wire_scrollspy(&page.main, &page.nav)?);

        let menu = Rc::new(RefCell::new(MobileMenu::new()));
        for (link, id) in &page.nav_links {
            guards.push(events::wire_nav_link(
                &document,
                link,
                id.as_str(),
                menu.clone(),
                page.mobile_menu.clone(),
            )?);
        }
        guards.push(events::wire_menu_toggle(
            &page.menu_button,
            menu,
            page.mobile_menu.clone(),
        )?);

        let mut tilt_cards = Vec::new();
        for (element, config) in &page.tilt_cards {
            let state = Rc::new(RefCell::new(TiltState::new(*config)));
            guards.extend(events::wire_tilt(element, state.clone())?);
            tilt_cards.push(TiltCard {
                element: element.clone(),
                state,
                at_rest: true,
            });
        }

        for card in &page.spotlight_cards {
            guards.push(events::wire_spotlight(card)?);
        }

        let form = Rc::new(RefCell::new(ContactForm::new()));
        guards.push(events::wire_text_field(&page.field_name, form.clone(), |f, v| {
            f.name = v;
        })?);
        guards.push(events::wire_text_field(&page.field_email, form.clone(), |f, v| {
            f.email = v;
        })?);
        guards.push(events::wire_text_field(&page.field_subject, form.clone(), |f, v| {
            f.subject = v;
        })?);
        guards.push(events::wire_message_field(&page.field_message, form.clone())?);
        guards.push(events::wire_form_submit(&page.form, form, window.location())?);

        guards.extend(events::wire_scene_pointer(&document, &page.canvas, scene.clone())?);
        guards.push(events::wire_resize(&window, &page.canvas, scene.clone())?);

        let frame = start_frame_loop(&window, context, page.canvas.clone(), scene, tilt_cards)?;

        log::info!("folio: page built, {} listeners wired", guards.len());

        Ok(AppRunner {
            _guards: guards,
            _frame: frame,
        })
    }
}

// ── Frame loop ───────────────────────────────────────────────────────

fn start_frame_loop(
    window: &Window,
    context: CanvasRenderingContext2d,
    canvas: HtmlCanvasElement,
    scene: Rc<RefCell<SceneState>>,
    mut cards: Vec<TiltCard>,
) -> Result<FrameHandle, JsValue> {
    let handle: FrameHandle = Rc::new(RefCell::new(None));
    let scheduled = handle.clone();
    let win = window.clone();

    let mut last_timestamp: Option<f64> = None;
    let mut points: Vec<ScenePoint> = Vec::new();

    let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let dt = match last_timestamp.replace(timestamp) {
            Some(previous) => ((timestamp - previous) / 1000.0) as f32,
            None => DEFAULT_DT,
        };

        {
            let mut scene = scene.borrow_mut();
            scene.tick(dt);
            scene.build_draw_list(&mut points);
        }
        paint(&context, &canvas, &points);

        for card in cards.iter_mut() {
            let mut tilt = card.state.borrow_mut();
            tilt.tick(dt);
            if !tilt.is_settled() {
                card.at_rest = false;
                write_transform(&card.element, tilt.rotation_deg());
            } else if !card.at_rest {
                // One final write so the card rests at its exact angles.
                card.at_rest = true;
                write_transform(&card.element, tilt.rotation_deg());
            }
        }

        if let Some(callback) = scheduled.borrow().as_ref() {
            let _ = win.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    });

    *handle.borrow_mut() = Some(closure);
    if let Some(callback) = handle.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(handle)
}

// ── Canvas painting ──────────────────────────────────────────────────

fn paint(context: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, points: &[ScenePoint]) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    context.set_global_alpha(1.0);
    context.set_fill_style_str("#000000");
    context.fill_rect(0.0, 0.0, width, height);

    // The list is color-coherent (stars, then mostly sphere), so only set
    // the fill style on changes.
    let mut active: Option<Rgb> = None;
    for point in points {
        if active != Some(point.color) {
            context.set_fill_style_str(&css_color(point.color));
            active = Some(point.color);
        }
        context.set_global_alpha(point.alpha as f64);

        let radius = f64::from(point.radius.max(0.2));
        let x = f64::from(point.pos.x);
        let y = f64::from(point.pos.y);
        if radius < 1.2 {
            // A path per star is too slow at this count.
            context.fill_rect(x - radius, y - radius, radius * 2.0, radius * 2.0);
        } else {
            context.begin_path();
            let _ = context.arc(x, y, radius, 0.0, std::f64::consts::TAU);
            context.fill();
        }
    }
    context.set_global_alpha(1.0);
}

fn css_color(color: Rgb) -> String {
    format!(
        "rgb({}, {}, {})",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn write_transform(element: &HtmlElement, (rx, ry): (f32, f32)) {
    let _ = element.style().set_property(
        "transform",
        &format!("perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)"),
    );
}
