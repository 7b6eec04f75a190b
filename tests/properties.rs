//! Structural properties of the test that must hold for any valid input.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use welch_t::{welch_t, Sample, TTestResult, WelchTTest};

fn sample(values: &[f64]) -> Sample {
    Sample::new(values.to_vec()).unwrap()
}

/// Deterministic normal draws for simulation-based properties.
fn draw_normal(rng: &mut Xoshiro256PlusPlus, mean: f64, sd: f64, n: usize) -> Sample {
    let normal = Normal::new(mean, sd).unwrap();
    Sample::new((0..n).map(|_| normal.sample(rng)).collect()).unwrap()
}

fn fixture_pairs() -> Vec<(Sample, Sample)> {
    vec![
        (
            sample(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            sample(&[6.0, 7.0, 8.0, 9.0, 10.0]),
        ),
        (
            sample(&[2.1, 3.4, 1.9, 4.2, 3.3, 2.8]),
            sample(&[5.0, 4.1, 6.3, 5.8]),
        ),
        (
            sample(&[-1.5, 0.3, 2.2]),
            sample(&[0.1, 0.2, 0.15, 0.05, 0.3, -0.1, 0.25]),
        ),
    ]
}

#[test]
fn t_statistic_is_antisymmetric_under_swap() {
    for (a, b) in fixture_pairs() {
        let ab = welch_t(&a, &b).unwrap();
        let ba = welch_t(&b, &a).unwrap();
        assert!(
            (ab.t_statistic + ba.t_statistic).abs() < 1e-12,
            "t(A,B) = {}, t(B,A) = {}",
            ab.t_statistic,
            ba.t_statistic
        );
    }
}

#[test]
fn p_value_and_df_are_invariant_under_swap() {
    for (a, b) in fixture_pairs() {
        let ab = welch_t(&a, &b).unwrap();
        let ba = welch_t(&b, &a).unwrap();
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
        assert!((ab.degrees_of_freedom - ba.degrees_of_freedom).abs() < 1e-12);
    }
}

#[test]
fn confidence_interval_mirrors_under_swap() {
    for (a, b) in fixture_pairs() {
        let ab = welch_t(&a, &b).unwrap();
        let ba = welch_t(&b, &a).unwrap();
        assert!((ab.confidence_interval.0 + ba.confidence_interval.1).abs() < 1e-10);
        assert!((ab.confidence_interval.1 + ba.confidence_interval.0).abs() < 1e-10);
    }
}

#[test]
fn df_lies_between_welch_bounds() {
    // Welch df is not bounded by min(n_a, n_b) - 1 alone; the guaranteed
    // range is [min(n_a - 1, n_b - 1), (n_a - 1) + (n_b - 1)].
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for &(n_a, n_b) in &[(2usize, 2usize), (3, 9), (5, 5), (12, 4), (30, 7)] {
        let a = draw_normal(&mut rng, 0.0, 1.0, n_a);
        let b = draw_normal(&mut rng, 0.3, 2.5, n_b);
        let result = welch_t(&a, &b).unwrap();

        let low = (n_a.min(n_b) - 1) as f64;
        let high = (n_a - 1 + n_b - 1) as f64;
        assert!(
            result.degrees_of_freedom >= low - 1e-9
                && result.degrees_of_freedom <= high + 1e-9,
            "df = {} outside [{}, {}] for n_a={}, n_b={}",
            result.degrees_of_freedom,
            low,
            high,
            n_a,
            n_b
        );
    }
}

#[test]
fn interval_always_contains_the_point_estimate() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
    for level in [0.5, 0.8, 0.9, 0.95, 0.99, 0.999] {
        let a = draw_normal(&mut rng, 1.0, 2.0, 14);
        let b = draw_normal(&mut rng, -0.5, 0.7, 9);
        let result = WelchTTest::new()
            .confidence_level(level)
            .compute(&a, &b)
            .unwrap();

        let (low, high) = result.confidence_interval;
        assert!(
            low <= result.mean_difference && result.mean_difference <= high,
            "CI ({}, {}) at level {} excludes point estimate {}",
            low,
            high,
            level,
            result.mean_difference
        );
    }
}

#[test]
fn p_value_stays_in_unit_interval() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(23);
    for i in 0..50 {
        let shift = (i as f64) * 0.2;
        let a = draw_normal(&mut rng, 0.0, 1.0, 8);
        let b = draw_normal(&mut rng, shift, 1.0, 8);
        let result = welch_t(&a, &b).unwrap();
        assert!((0.0..=1.0).contains(&result.p_value));
    }
}

#[test]
fn interval_narrows_as_samples_grow() {
    // In expectation over repeated draws from the same distributions,
    // larger samples give a narrower interval for the mean difference.
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let replicates = 50;

    let mean_width = |n: usize, rng: &mut Xoshiro256PlusPlus| -> f64 {
        let total: f64 = (0..replicates)
            .map(|_| {
                let a = draw_normal(rng, 0.0, 1.0, n);
                let b = draw_normal(rng, 0.5, 1.0, n);
                welch_t(&a, &b).unwrap().interval_width()
            })
            .sum();
        total / replicates as f64
    };

    let width_small = mean_width(10, &mut rng);
    let width_medium = mean_width(40, &mut rng);
    let width_large = mean_width(160, &mut rng);

    assert!(
        width_small > width_medium && width_medium > width_large,
        "widths did not shrink: {} / {} / {}",
        width_small,
        width_medium,
        width_large
    );
}

#[test]
fn result_is_deterministic() {
    let a = sample(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = sample(&[6.0, 7.0, 8.0, 9.0, 10.0]);
    let first: TTestResult = welch_t(&a, &b).unwrap();
    let second: TTestResult = welch_t(&a, &b).unwrap();
    assert_eq!(first, second);
}
