//! Emoji confetti burst shown alongside a revealed prize.
//!
//! Only the particle parameters are computed here; the DOM side turns each
//! [`ConfettiPiece`] into an absolutely positioned element and plays its
//! [`keyframes`](ConfettiPiece::keyframes) through `Element.animate`.

use crate::selector::RandomSource;

pub const DEFAULT_EMOJIS: [&str; 5] = ["✨", "🎉", "⭐️", "💫", "🎊"];

/// Extra time a piece stays in the DOM after its fall ends.
pub const REMOVE_GRACE_MS: u32 = 200;

/// Upper bound on pieces per burst; each one is a DOM node.
pub const MAX_CONFETTI: usize = 200;

pub const FALL_EASING: &str = "cubic-bezier(.2,.8,.2,1)";

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConfettiConfig {
    pub count: usize,
    pub emojis: Vec<String>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            count: 24,
            emojis: DEFAULT_EMOJIS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub emoji: String,
    pub left_pct: f64,
    pub top_pct: f64,
    pub font_px: f64,
    pub opacity: f64,
    pub rotate_from_deg: f64,
    pub fall_vh: f64,
    pub rotate_to_deg: f64,
    pub duration_ms: u32,
}

impl ConfettiPiece {
    /// Inline style for the start pose.
    pub fn style(&self) -> String {
        format!(
            "position:absolute; left:{:.2}%; top:{:.2}%; font-size:{:.1}px; opacity:{:.2}; \
             transform:translateY(0) rotate({:.1}deg);",
            self.left_pct, self.top_pct, self.font_px, self.opacity, self.rotate_from_deg,
        )
    }

    /// Start and end frames of the fall as `(transform, opacity)`.
    pub fn keyframes(&self) -> [(String, f64); 2] {
        [
            (format!("translateY(0) rotate({:.1}deg)", self.rotate_from_deg), 1.0),
            (
                format!(
                    "translateY({:.1}vh) rotate({:.1}deg)",
                    self.fall_vh, self.rotate_to_deg
                ),
                0.2,
            ),
        ]
    }

    pub fn remove_after_ms(&self) -> u32 {
        self.duration_ms + REMOVE_GRACE_MS
    }
}

pub fn burst<R: RandomSource + ?Sized>(config: &ConfettiConfig, rng: &mut R) -> Vec<ConfettiPiece> {
    if config.emojis.is_empty() {
        return Vec::new();
    }
    (0..config.count)
        .map(|_| {
            let left_pct = rng.next_unit() * 100.0;
            let top_pct = -10.0 - rng.next_unit() * 10.0;
            let font_px = 12.0 + rng.next_unit() * 28.0;
            let opacity = 0.6 + rng.next_unit() * 0.4;
            let rotate_from_deg = rng.next_unit() * 360.0;
            let idx = ((rng.next_unit() * config.emojis.len() as f64) as usize)
                .min(config.emojis.len() - 1);
            let duration_ms = 1500 + (rng.next_unit() * 1200.0) as u32;
            let fall_vh = 60.0 + rng.next_unit() * 140.0;
            let rotate_to_deg = rng.next_unit() * 720.0 - 360.0;
            ConfettiPiece {
                emoji: config.emojis[idx].clone(),
                left_pct,
                top_pct,
                font_px,
                opacity,
                rotate_from_deg,
                fall_vh,
                rotate_to_deg,
                duration_ms,
            }
        })
        .collect()
}
