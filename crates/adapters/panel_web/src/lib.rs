//! # z407-panel-web
//!
//! The control panel as it runs in the browser.
//!
//! On load, [`start`] looks up the three display regions, polls `/status`
//! immediately and then every [`POLL_INTERVAL_MS`] milliseconds. Buttons call
//! the exported `callApi(endpoint)` to fire an action.
//!
//! Built with `wasm-pack build --target web --out-dir static/pkg`.

mod client;
mod dom;

use std::cell::OnceCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use z407_app::services::panel_context::PanelContext;
use z407_domain::action::ActionEndpoint;
use z407_domain::panel::POLL_INTERVAL_MS;

use crate::client::BrowserClient;
use crate::dom::{AlertNotifier, DomRenderer};

type Panel = PanelContext<BrowserClient, DomRenderer, AlertNotifier>;

thread_local! {
    static PANEL: OnceCell<Rc<Panel>> = const { OnceCell::new() };
}

/// Page entry point.
///
/// # Errors
///
/// Fails when the page lacks one of the display regions or a `window`.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let panel = Rc::new(PanelContext::new(
        BrowserClient,
        DomRenderer::from_document()?,
        AlertNotifier::from_window()?,
    ));
    PANEL
        .with(|cell| cell.set(Rc::clone(&panel)))
        .map_err(|_| JsValue::from_str("panel already started"))?;

    spawn_poll(Rc::clone(&panel));
    // Ticks never wait for the previous poll to settle.
    Interval::new(POLL_INTERVAL_MS, move || spawn_poll(Rc::clone(&panel))).forget();

    Ok(())
}

/// Fire one action, as wired to the panel's buttons.
#[wasm_bindgen(js_name = callApi)]
pub async fn call_api(endpoint: String) {
    let Some(panel) = PANEL.with(|cell| cell.get().cloned()) else {
        return;
    };

    match ActionEndpoint::new(&endpoint) {
        Ok(endpoint) => {
            panel.call_action(&endpoint).await;
        }
        Err(err) => panel.alert(&format!("Failed to call {endpoint}: {err}")),
    }
}

fn spawn_poll(panel: Rc<Panel>) {
    spawn_local(async move {
        panel.check_status().await;
    });
}
