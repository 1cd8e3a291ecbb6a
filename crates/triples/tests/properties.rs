//! Property checks over random grids and thresholds.

use proptest::prelude::*;
use triples::{generate_triples, render_listing, Candidates, NumberFormat, Params};

fn grid_params() -> impl Strategy<Value = Params> {
    (
        1.0f64..12.0,
        prop::sample::select(vec![0.25f64, 0.5, 1.0, 1.5]),
        1.0f64..12.0,
        prop::sample::select(vec![0.25f64, 0.5, 1.0]),
        0.0f64..0.05,
    )
        .prop_map(|(max_x, step_x, max_y, step_y, threshold)| Params {
            max_x,
            step_x,
            max_y,
            step_y,
            threshold,
        })
}

fn is_multiple(v: f64, step: f64) -> bool {
    let k = v / step;
    (k - k.round()).abs() < 1e-9 && k.round() >= 1.0
}

proptest! {
    #[test]
    fn candidates_are_canonical_multiples(p in grid_params()) {
        for t in Candidates::new(&p) {
            prop_assert!(t.y() > 0.0);
            prop_assert!(t.x() >= t.y());
            prop_assert!(t.x() <= p.max_x);
            prop_assert!(t.y() <= p.max_y);
            prop_assert!(is_multiple(t.x(), p.step_x));
            prop_assert!(is_multiple(t.y(), p.step_y));
        }
    }

    #[test]
    fn accepted_triples_respect_threshold(p in grid_params()) {
        for t in generate_triples(&p) {
            prop_assert!(t.relative_error() <= p.threshold);
        }
    }

    #[test]
    fn output_is_sorted_and_counted(p in grid_params()) {
        let triples = generate_triples(&p);
        for w in triples.windows(2) {
            prop_assert!(w[0].angle() <= w[1].angle());
        }
        let lines = render_listing(&triples, &NumberFormat::default());
        prop_assert_eq!(lines.len(), triples.len() + 1);
        prop_assert_eq!(
            lines.last().cloned(),
            Some(format!("Number of triples: {}", triples.len()))
        );
    }

    #[test]
    fn filter_is_exactly_the_threshold_predicate(p in grid_params()) {
        let expected = Candidates::new(&p)
            .filter(|t| t.relative_error() <= p.threshold)
            .count();
        prop_assert_eq!(generate_triples(&p).len(), expected);
    }

    #[test]
    fn runs_are_deterministic(p in grid_params()) {
        let fmt = NumberFormat::default();
        prop_assert_eq!(
            render_listing(&generate_triples(&p), &fmt),
            render_listing(&generate_triples(&p), &fmt)
        );
    }

    #[test]
    fn formatted_numbers_have_at_most_one_decimal(v in 0.0f64..1000.0) {
        let s = NumberFormat::default().format(v);
        prop_assert!(!s.ends_with(".0"));
        match s.split_once('.') {
            Some((_, frac)) => prop_assert_eq!(frac.len(), 1),
            None => prop_assert!(s.chars().all(|c| c.is_ascii_digit())),
        }
    }
}

#[test]
fn json_records_serialize() {
    let triples = generate_triples(&Params::default());
    let records: Vec<_> = triples.iter().map(|t| t.record()).collect();
    let doc = serde_json::to_value(&records).unwrap();
    let arr = doc.as_array().unwrap();
    assert_eq!(arr.len(), triples.len());
    assert!(arr[0].get("relative_error").is_some());
    assert!(arr[0].get("angle").is_some());
}
