//! Prize records and the validated table the selector draws from.

use crate::error::ConfigError;

/// One possible outcome of a selection.
///
/// `weight` is optional in configuration; a missing weight counts as 1.
/// `bonus_percent` and `chips` describe the reward for display and do not
/// influence selection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prize {
    pub label: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub weight: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "bonusPercent", skip_serializing_if = "Option::is_none")
    )]
    pub bonus_percent: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub chips: Option<u32>,
}

impl Prize {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            weight: None,
            bonus_percent: None,
            chips: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_reward(mut self, bonus_percent: u32, chips: u32) -> Self {
        self.bonus_percent = Some(bonus_percent);
        self.chips = Some(chips);
        self
    }

    /// Effective selection weight (`weight` or 1).
    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

/// The promotional prizes shipped with the page.
pub fn default_prizes() -> Vec<Prize> {
    vec![
        Prize::new("100% de bono + 1000 fichas")
            .with_reward(100, 1000)
            .with_weight(1.0),
        Prize::new("150% de bono + 1500 fichas")
            .with_reward(150, 1500)
            .with_weight(1.0),
        Prize::new("200% de bono + 2000 fichas")
            .with_reward(200, 2000)
            .with_weight(1.0),
    ]
}

/// Non-empty, immutable prize list whose weights are all finite and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct PrizeTable {
    prizes: Vec<Prize>,
    total: f64,
}

impl PrizeTable {
    pub fn new(prizes: Vec<Prize>) -> Result<Self, ConfigError> {
        if prizes.is_empty() {
            return Err(ConfigError::NoPrizes);
        }
        for (index, prize) in prizes.iter().enumerate() {
            let weight = prize.weight();
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    index,
                    label: prize.label.clone(),
                    weight,
                });
            }
        }
        let total: f64 = prizes.iter().map(Prize::weight).sum();
        // Individually valid weights can still overflow to infinity.
        if !total.is_finite() || total <= 0.0 {
            return Err(ConfigError::InvalidTotal { total });
        }
        Ok(Self { prizes, total })
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Theoretical selection probability of the prize at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.prizes.get(index).map(|p| p.weight() / self.total)
    }

    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    // Always false once constructed; kept for the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prize> {
        self.prizes.iter()
    }

    pub fn as_slice(&self) -> &[Prize] {
        &self.prizes
    }
}
