// Browser-only: a start that fails on a missing element must leave nothing
// installed, so the page can retry once the markup is complete.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

const STARS_AND_MODAL: &str = r#"<div class="star"></div><div class="star"></div>
    <div id="result" class="hidden"><p id="prize-text"></p></div>
    <div id="confetti"></div>"#;

#[wasm_bindgen_test]
async fn failed_start_can_be_retried() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();
    let config = r#"{ "entryDelayMs": 10, "revealDelayMs": 20 }"#;

    body.set_inner_html(STARS_AND_MODAL);
    let err = star_bonus::widget::start_widget_with_config(config).unwrap_err();
    assert!(err.as_string().unwrap_or_default().contains("close-btn"));
    assert!(star_bonus::widget::widget_locked());
    assert_eq!(doc.query_selector_all(".star.landing").unwrap().length(), 0);

    body.set_inner_html(&format!(
        "{STARS_AND_MODAL}<button id=\"close-btn\"></button>"
    ));
    star_bonus::widget::start_widget_with_config(config).unwrap();
    TimeoutFuture::new(30).await;
    assert!(!star_bonus::widget::widget_locked());

    let star: HtmlElement = doc.query_selector(".star").unwrap().unwrap().dyn_into().unwrap();
    star.click();
    TimeoutFuture::new(50).await;
    let close: HtmlElement = doc.get_element_by_id("close-btn").unwrap().dyn_into().unwrap();
    close.click();
    assert!(!star_bonus::widget::widget_locked());
}
