//! Browser glue for the pick-a-star widget.
//!
//! Binds click listeners to the stars and the close button, keeps the single
//! [`SelectionFlow`] for the page in a thread-local, and turns the flow's
//! [`Wait`]s into `setTimeout` callbacks.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::config::WidgetConfig;
use crate::flow::{OptionId, SelectionFlow, Wait};
use crate::selector::OsRandom;

mod dom;

pub use dom::DomPresenter;

type Widget = SelectionFlow<OsRandom, DomPresenter>;

thread_local! {
    static WIDGET: std::cell::RefCell<Option<Widget>> = const { std::cell::RefCell::new(None) };
}

/// Start the widget with the stock configuration.
#[wasm_bindgen]
pub fn start_widget() -> Result<(), JsValue> {
    start_with(WidgetConfig::default())
}

/// Start the widget with a JSON configuration (any omitted field keeps its default).
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_widget_with_config(json: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start_with(config)
}

/// Whether the widget currently refuses selections. `true` before start.
#[wasm_bindgen]
pub fn widget_locked() -> bool {
    WIDGET.with(|cell| cell.borrow().as_ref().is_none_or(|flow| flow.is_locked()))
}

pub fn start_with(config: WidgetConfig) -> Result<(), JsValue> {
    if WIDGET.with(|cell| cell.borrow().is_some()) {
        log::warn!("widget already started; ignoring second start");
        return Ok(());
    }
    let table = config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Resolve every element before touching the page, so a missing one
    // leaves nothing behind and a later start can retry cleanly.
    let stars = query_all(&doc, &config.dom.star_selector)?;
    let close = element_by_id(&doc, &config.dom.close_button_id)?;
    let presenter = DomPresenter {
        stars: stars.clone(),
        modal: element_by_id(&doc, &config.dom.modal_id)?,
        prize_text: element_by_id(&doc, &config.dom.prize_text_id)?,
        confetti: element_by_id(&doc, &config.dom.confetti_id)?,
        hide_delay_ms: config.hide_delay_ms,
        confetti_config: config.confetti.clone(),
        rng: os_random()?,
        hide_timer: None,
        doc: doc.clone(),
    };
    let flow = SelectionFlow::new(table, stars.len(), config.timings, os_random()?, presenter)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    bind_listeners(&stars, &close)?;
    flow.presenter().begin_landing();
    let entry = flow.start();
    WIDGET.with(|cell| cell.replace(Some(flow)));
    schedule(entry);
    log::info!("widget started with {} stars", stars.len());
    Ok(())
}

// Listeners only reach the flow through `WIDGET`, so they are inert until the
// flow is installed.
fn bind_listeners(stars: &[Element], close: &Element) -> Result<(), JsValue> {
    // Star click listeners
    for (i, star) in stars.iter().enumerate() {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let wait = WIDGET.with(|cell| {
                cell.borrow_mut()
                    .as_mut()
                    .and_then(|flow| flow.select(OptionId(i)))
            });
            if let Some(wait) = wait {
                schedule(wait);
            }
        }) as Box<dyn FnMut(_)>);
        star.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Close button
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        WIDGET.with(|cell| {
            if let Some(flow) = cell.borrow_mut().as_mut() {
                flow.dismiss();
            }
        });
    }) as Box<dyn FnMut(_)>);
    close.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn schedule(wait: Wait) {
    Timeout::new(wait.after_ms, move || {
        WIDGET.with(|cell| {
            if let Some(flow) = cell.borrow_mut().as_mut() {
                flow.elapse(wait.timer);
            }
        });
    })
    .forget();
}

fn os_random() -> Result<OsRandom, JsValue> {
    OsRandom::new().map_err(|e| JsValue::from_str(&format!("rng unavailable: {e}")))
}

fn element_by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = doc.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(node) = nodes.get(i) {
            out.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(out)
}
