//! Star Bonus core crate.
//!
//! A "pick a star" promotional widget: the visitor clicks one of the stars,
//! the star pops, and a weighted-random prize is revealed in a modal with a
//! burst of emoji confetti. The selection logic (`prize`, `selector`, `flow`)
//! is plain Rust and tested natively; `widget` binds it to the page.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod confetti;
pub mod error;
pub mod flow;
mod logging;
pub mod prize;
pub mod selector;
pub mod widget;

pub use config::{DomIds, WidgetConfig};
pub use error::ConfigError;
pub use flow::{OptionId, Phase, Presenter, SelectionFlow, Timer, Timings, Wait};
pub use prize::{Prize, PrizeTable, default_prizes};
pub use selector::{OsRandom, RandomSource, select_index, select_prize};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}
