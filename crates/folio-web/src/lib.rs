//! WASM entry point for the portfolio page.
//!
//! Mounting builds the entire DOM from the core content catalog, wires every
//! listener, and starts the animation loop. The runner is kept alive in
//! thread-local storage; dropping it would deregister every listener and
//! stop the loop.

pub mod dom;
pub mod events;
pub mod runner;

pub use runner::AppRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static APP: RefCell<Option<AppRunner>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = AppRunner::mount()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("folio: mounted");
    Ok(())
}
