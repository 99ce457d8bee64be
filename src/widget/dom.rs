// DOM-backed presenter: class toggling on the stars, the result modal and the
// confetti layer. All timing beyond the core's waits (modal fade, confetti
// cleanup) is scheduled here with one-shot timeouts.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::confetti::{self, ConfettiConfig, ConfettiPiece};
use crate::flow::{OptionId, Presenter};
use crate::prize::Prize;
use crate::selector::OsRandom;

pub struct DomPresenter {
    pub(super) doc: Document,
    pub(super) stars: Vec<Element>,
    pub(super) modal: Element,
    pub(super) prize_text: Element,
    pub(super) confetti: Element,
    pub(super) hide_delay_ms: u32,
    pub(super) confetti_config: ConfettiConfig,
    /// Separate stream from the prize draw so visuals never shift outcomes.
    pub(super) rng: OsRandom,
    /// Pending `hidden` class for the modal. Dropping it clears the timeout,
    /// so a new selection cancels a fade-out that has not finished yet.
    pub(super) hide_timer: Option<Timeout>,
}

impl DomPresenter {
    /// Put every star into its landing pose.
    pub fn begin_landing(&self) {
        for star in &self.stars {
            star.class_list().add_1("landing").ok();
        }
    }

    fn clear_stars(&self) {
        for star in &self.stars {
            star.class_list().remove_2("selected", "pop").ok();
        }
    }

    fn cancel_hide(&mut self) {
        if self.hide_timer.take().is_some() {
            log::debug!("pending modal hide cancelled");
        }
    }

    fn explode_confetti(&mut self) {
        self.confetti.set_inner_html("");
        for piece in confetti::burst(&self.confetti_config, &mut self.rng) {
            if let Err(err) = self.spawn_piece(&piece) {
                log::warn!("confetti piece dropped: {err:?}");
            }
        }
    }

    fn spawn_piece(&self, piece: &ConfettiPiece) -> Result<(), JsValue> {
        let el = self.doc.create_element("div")?;
        el.set_class_name("confetti-item");
        el.set_attribute("style", &piece.style())?;
        el.set_text_content(Some(&piece.emoji));
        self.confetti.append_child(&el)?;
        let fall = animate_fall(&el, piece);
        Timeout::new(piece.remove_after_ms(), move || el.remove()).forget();
        fall
    }
}

/// Play the piece's fall with `Element.animate`. Called through `Reflect`
/// because web-sys only exposes `animate` behind its unstable-API cfg.
fn animate_fall(el: &Element, piece: &ConfettiPiece) -> Result<(), JsValue> {
    let frames = Array::new();
    for (transform, opacity) in piece.keyframes() {
        let frame = Object::new();
        Reflect::set(&frame, &"transform".into(), &transform.into())?;
        Reflect::set(&frame, &"opacity".into(), &opacity.into())?;
        frames.push(&frame);
    }
    let options = Object::new();
    Reflect::set(&options, &"duration".into(), &piece.duration_ms.into())?;
    Reflect::set(&options, &"easing".into(), &confetti::FALL_EASING.into())?;
    Reflect::set(&options, &"fill".into(), &"forwards".into())?;

    let animate: Function = Reflect::get(el, &"animate".into())?.dyn_into()?;
    animate.call2(el, &frames, &options)?;
    Ok(())
}

impl Presenter for DomPresenter {
    fn on_selection_start(&mut self, option: OptionId) {
        self.cancel_hide();
        self.clear_stars();
        if let Some(star) = self.stars.get(option.0) {
            star.class_list().add_2("selected", "pop").ok();
        }
    }

    fn on_result(&mut self, prize: &Prize) {
        self.cancel_hide();
        self.prize_text.set_text_content(Some(&prize.label));
        let classes = self.modal.class_list();
        classes.remove_1("hidden").ok();
        classes.add_1("show").ok();
        self.explode_confetti();
    }

    fn on_result_dismissed(&mut self) {
        self.modal.class_list().remove_1("show").ok();
        let modal = self.modal.clone();
        self.hide_timer = Some(Timeout::new(self.hide_delay_ms, move || {
            modal.class_list().add_1("hidden").ok();
        }));
        self.confetti.set_inner_html("");
        self.clear_stars();
    }

    fn on_ready(&mut self) {
        for star in &self.stars {
            star.class_list().remove_1("landing").ok();
        }
    }
}
