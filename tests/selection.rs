// Native tests for the weighted prize draw.

#[cfg(not(target_arch = "wasm32"))]
use rand::rngs::StdRng;
#[cfg(not(target_arch = "wasm32"))]
use rand::{Rng, SeedableRng};
use star_bonus::selector::draw_at;
use star_bonus::{Prize, PrizeTable, select_index, select_prize};

fn weighted(weights: &[f64]) -> PrizeTable {
    PrizeTable::new(
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Prize::new(format!("prize {i}")).with_weight(*w))
            .collect(),
    )
    .unwrap()
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn frequencies_converge_to_weights() {
    let table = weighted(&[70.0, 20.0, 10.0]);
    let mut rng = StdRng::seed_from_u64(0x5747_4152);
    let mut source = || rng.random::<f64>();
    let mut counts = [0usize; 3];
    for _ in 0..10_000 {
        counts[select_index(&table, &mut source)] += 1;
    }
    let expected = [7000.0, 2000.0, 1000.0];
    for (count, want) in counts.iter().zip(expected) {
        // ±3% of the draw count
        assert!(
            (*count as f64 - want).abs() <= 300.0,
            "counts {counts:?} drifted from {expected:?}"
        );
    }
}

#[test]
fn equal_weights_are_roughly_uniform() {
    let table = PrizeTable::new(star_bonus::default_prizes()).unwrap();
    let mut rng = star_bonus::OsRandom::from_seed(2024);
    let mut counts = [0usize; 3];
    for _ in 0..9_000 {
        counts[select_index(&table, &mut rng)] += 1;
    }
    for count in counts {
        assert!((2700..=3300).contains(&count), "counts {counts:?}");
    }
}

#[test]
fn zero_sample_returns_first_prize() {
    let table = weighted(&[70.0, 20.0, 10.0]);
    assert_eq!(select_prize(&table, &mut || 0.0).label, "prize 0");
}

#[test]
fn top_of_range_returns_last_prize() {
    let table = weighted(&[70.0, 20.0, 10.0]);
    assert_eq!(draw_at(&table, table.total_weight()), 2);
    let just_below = 1.0 - f64::EPSILON;
    assert_eq!(select_prize(&table, &mut || just_below).label, "prize 2");
}

#[test]
fn missing_weight_behaves_like_weight_one() {
    let implicit = PrizeTable::new(vec![
        Prize::new("a"),
        Prize::new("b").with_weight(3.0),
    ])
    .unwrap();
    let explicit = weighted(&[1.0, 3.0]);
    assert_eq!(implicit.total_weight(), explicit.total_weight());
    for step in 0..=100 {
        let u = step as f64 / 100.0 * (1.0 - f64::EPSILON);
        assert_eq!(
            select_index(&implicit, &mut || u),
            select_index(&explicit, &mut || u),
            "diverged at u={u}"
        );
    }
}

#[test]
fn single_prize_always_wins() {
    let table = weighted(&[0.25]);
    for u in [0.0, 0.3, 0.999_999] {
        assert_eq!(select_index(&table, &mut || u), 0);
    }
}
