//! Interaction lock for the pick-a-star widget.
//!
//! ```text
//!   start ─▶ Animating{None} ──EntrySettled──▶ Idle
//!                                              │  select(x)
//!   Idle ◀──dismiss── PresentingResult ◀──RevealElapsed── Animating{Some(x)}
//! ```
//!
//! Only `Idle` accepts a selection. Events that arrive in any other phase
//! (double clicks, a dismiss with nothing on screen, stale timers) are dropped
//! without side effects. Timed waits are not run here: transitions that need
//! one hand back a [`Wait`] and the host calls [`SelectionFlow::elapse`] when
//! it fires.

use crate::error::ConfigError;
use crate::prize::{Prize, PrizeTable};
use crate::selector::{RandomSource, select_index};

/// Index of a selectable option (one star on the page).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptionId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// Locked while an animation plays. `chosen` is `None` during the entry
    /// sequence and `Some` during a reveal.
    Animating { chosen: Option<OptionId> },
    Idle,
    /// Locked until the user dismisses the result. `prize` indexes the table.
    PresentingResult { chosen: OptionId, prize: usize },
}

impl Phase {
    pub fn is_locked(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

/// Outputs the core drives; rendering lives behind this trait.
pub trait Presenter {
    fn on_selection_start(&mut self, option: OptionId);
    fn on_result(&mut self, prize: &Prize);
    fn on_result_dismissed(&mut self);
    fn on_ready(&mut self);
}

/// Delays standing in for animation completion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Timings {
    /// Landing animation before the first selection is accepted.
    pub entry_delay_ms: u32,
    /// Pop/flip animation between a click and the prize reveal.
    pub reveal_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            entry_delay_ms: 900,
            reveal_delay_ms: 700,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    EntrySettled,
    RevealElapsed,
}

/// A timed wait the host must schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wait {
    pub after_ms: u32,
    pub timer: Timer,
}

pub struct SelectionFlow<R, P> {
    table: PrizeTable,
    option_count: usize,
    timings: Timings,
    phase: Phase,
    rng: R,
    presenter: P,
}

impl<R: RandomSource, P: Presenter> SelectionFlow<R, P> {
    pub fn new(
        table: PrizeTable,
        option_count: usize,
        timings: Timings,
        rng: R,
        presenter: P,
    ) -> Result<Self, ConfigError> {
        if option_count == 0 {
            return Err(ConfigError::NoOptions);
        }
        Ok(Self {
            table,
            option_count,
            timings,
            phase: Phase::Animating { chosen: None },
            rng,
            presenter,
        })
    }

    /// Begin the entry sequence. The returned wait unlocks the widget.
    pub fn start(&self) -> Wait {
        log::debug!(
            "entry sequence started, settling in {}ms",
            self.timings.entry_delay_ms
        );
        Wait {
            after_ms: self.timings.entry_delay_ms,
            timer: Timer::EntrySettled,
        }
    }

    /// User picked `option`. Returns the reveal wait, or `None` if ignored.
    pub fn select(&mut self, option: OptionId) -> Option<Wait> {
        if self.phase.is_locked() {
            log::debug!("selection of {option:?} ignored, phase {:?}", self.phase);
            return None;
        }
        if option.0 >= self.option_count {
            log::warn!(
                "selection of {option:?} ignored, only {} options",
                self.option_count
            );
            return None;
        }
        self.phase = Phase::Animating {
            chosen: Some(option),
        };
        log::info!("option {} selected", option.0);
        self.presenter.on_selection_start(option);
        Some(Wait {
            after_ms: self.timings.reveal_delay_ms,
            timer: Timer::RevealElapsed,
        })
    }

    /// A scheduled wait fired. Returns whether it caused a transition.
    pub fn elapse(&mut self, timer: Timer) -> bool {
        match (timer, self.phase.clone()) {
            (Timer::EntrySettled, Phase::Animating { chosen: None }) => {
                self.phase = Phase::Idle;
                log::info!("widget ready");
                self.presenter.on_ready();
                true
            }
            (Timer::RevealElapsed, Phase::Animating { chosen: Some(chosen) }) => {
                let prize = select_index(&self.table, &mut self.rng);
                self.phase = Phase::PresentingResult { chosen, prize };
                let prize = &self.table.as_slice()[prize];
                log::info!("option {} revealed {:?}", chosen.0, prize.label);
                self.presenter.on_result(prize);
                true
            }
            (timer, phase) => {
                log::debug!("stale timer {timer:?} ignored in phase {phase:?}");
                false
            }
        }
    }

    /// User closed the result. Returns whether the widget was unlocked.
    pub fn dismiss(&mut self) -> bool {
        if !matches!(self.phase, Phase::PresentingResult { .. }) {
            log::debug!("dismiss ignored, phase {:?}", self.phase);
            return false;
        }
        self.phase = Phase::Idle;
        log::info!("result dismissed");
        self.presenter.on_result_dismissed();
        true
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Option currently marked as chosen, if any.
    pub fn chosen(&self) -> Option<OptionId> {
        match self.phase {
            Phase::Animating { chosen } => chosen,
            Phase::PresentingResult { chosen, .. } => Some(chosen),
            Phase::Idle => None,
        }
    }

    pub fn current_prize(&self) -> Option<&Prize> {
        match self.phase {
            Phase::PresentingResult { prize, .. } => self.table.get(prize),
            _ => None,
        }
    }

    pub fn table(&self) -> &PrizeTable {
        &self.table
    }

    pub fn option_count(&self) -> usize {
        self.option_count
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
