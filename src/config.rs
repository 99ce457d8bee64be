//! Widget configuration: prizes, timings, confetti and the page elements the
//! widget binds to. Defaults reproduce the stock promotional page; pages can
//! override any part through JSON (`serde_json` feature).

use crate::confetti::{ConfettiConfig, MAX_CONFETTI};
use crate::error::ConfigError;
use crate::flow::Timings;
use crate::prize::{Prize, PrizeTable, default_prizes};

/// Selectors/ids of the elements the page provides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DomIds {
    /// CSS selector matching the star buttons, in option order.
    pub star_selector: String,
    pub modal_id: String,
    pub prize_text_id: String,
    pub close_button_id: String,
    pub confetti_id: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            star_selector: ".star".into(),
            modal_id: "result".into(),
            prize_text_id: "prize-text".into(),
            close_button_id: "close-btn".into(),
            confetti_id: "confetti".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WidgetConfig {
    pub prizes: Vec<Prize>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub timings: Timings,
    /// Delay between dropping the modal's `show` class and adding `hidden`,
    /// so the fade-out transition can finish.
    pub hide_delay_ms: u32,
    pub confetti: ConfettiConfig,
    pub dom: DomIds,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            prizes: default_prizes(),
            timings: Timings::default(),
            hide_delay_ms: 260,
            confetti: ConfettiConfig::default(),
            dom: DomIds::default(),
        }
    }
}

impl WidgetConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        // Surface bad prize lists at load time rather than at first click.
        config.validate()?;
        Ok(config)
    }

    /// Check everything that can be wrong without a page: prizes and the
    /// confetti burst size.
    pub fn validate(&self) -> Result<PrizeTable, ConfigError> {
        if self.confetti.count > MAX_CONFETTI {
            return Err(ConfigError::TooMuchConfetti {
                count: self.confetti.count,
                max: MAX_CONFETTI,
            });
        }
        self.prize_table()
    }

    pub fn prize_table(&self) -> Result<PrizeTable, ConfigError> {
        PrizeTable::new(self.prizes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_stock_page() {
        let cfg = WidgetConfig::default();
        assert_eq!(cfg.dom.star_selector, ".star");
        assert_eq!(cfg.dom.close_button_id, "close-btn");
        assert_eq!(cfg.hide_delay_ms, 260);
        assert_eq!(cfg.timings.reveal_delay_ms, 700);
        assert_eq!(cfg.prize_table().unwrap().len(), 3);
    }

    #[test]
    fn empty_prize_list_fails_validation() {
        let cfg = WidgetConfig {
            prizes: Vec::new(),
            ..WidgetConfig::default()
        };
        assert_eq!(cfg.prize_table(), Err(ConfigError::NoPrizes));
    }

    #[test]
    fn oversized_confetti_burst_is_rejected() {
        let mut cfg = WidgetConfig::default();
        cfg.confetti.count = MAX_CONFETTI;
        assert!(cfg.validate().is_ok());
        cfg.confetti.count = MAX_CONFETTI + 1;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooMuchConfetti {
                count: MAX_CONFETTI + 1,
                max: MAX_CONFETTI
            })
        );
    }
}
