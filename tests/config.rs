// JSON configuration loading (serde_json feature, on by default).
#![cfg(feature = "serde_json")]

use star_bonus::{ConfigError, WidgetConfig};

#[test]
fn empty_object_yields_defaults() {
    let cfg = WidgetConfig::from_json("{}").unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn prizes_and_timings_override_defaults() {
    let cfg = WidgetConfig::from_json(
        r#"{
            "prizes": [
                { "label": "100% de bono + 1000 fichas", "bonusPercent": 100, "chips": 1000, "weight": 70 },
                { "label": "150% de bono + 1500 fichas", "weight": 20 },
                { "label": "Free spin" }
            ],
            "revealDelayMs": 1000,
            "hideDelayMs": 300,
            "dom": { "starSelector": "button.star" }
        }"#,
    )
    .unwrap();
    let table = cfg.prize_table().unwrap();
    assert_eq!(table.len(), 3);
    assert!((table.total_weight() - 91.0).abs() < 1e-9);
    assert_eq!(table.get(0).and_then(|p| p.bonus_percent), Some(100));
    assert_eq!(table.get(2).and_then(|p| p.weight), None);
    assert_eq!(cfg.timings.reveal_delay_ms, 1000);
    assert_eq!(cfg.timings.entry_delay_ms, 900);
    assert_eq!(cfg.hide_delay_ms, 300);
    assert_eq!(cfg.dom.star_selector, "button.star");
    assert_eq!(cfg.dom.modal_id, "result");
}

#[test]
fn empty_prize_list_fails_fast() {
    assert_eq!(
        WidgetConfig::from_json(r#"{ "prizes": [] }"#),
        Err(ConfigError::NoPrizes)
    );
}

#[test]
fn non_positive_weight_fails_fast() {
    let err = WidgetConfig::from_json(r#"{ "prizes": [{ "label": "x", "weight": 0 }] }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidWeight { index: 0, .. }), "{err}");
}

#[test]
fn malformed_json_is_reported() {
    let err = WidgetConfig::from_json("{ prizes: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid widget config JSON"));
}

#[test]
fn huge_confetti_count_fails_fast() {
    let err = WidgetConfig::from_json(r#"{ "confetti": { "count": 1000000 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::TooMuchConfetti { count: 1_000_000, .. }), "{err}");
    let ok = WidgetConfig::from_json(r#"{ "confetti": { "count": 200 } }"#).unwrap();
    assert_eq!(ok.confetti.count, 200);
}
