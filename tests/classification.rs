// Property tests for extraction, quantile breaks, and bucket assignment.

use demomap::{
    Breaks, Metric, NO_DATA_COLOR, Properties, RawValue, bucket_index, classify, compute_breaks, extract_value,
};
use proptest::prelude::*;

fn any_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => 0.0f64..1000.0,
        1 => Just(0.0),
        1 => Just(f64::NAN),
        1 => -100.0f64..0.0,
        1 => Just(f64::INFINITY),
    ]
}

fn raw_number() -> impl Strategy<Value = Option<RawValue>> {
    prop_oneof![
        Just(None),
        (0u32..100_000).prop_map(|v| Some(RawValue::Number(v as f64))),
        (0u32..100_000).prop_map(|v| Some(RawValue::Text(format!("{v}")))),
        "[a-z%, ]{0,6}".prop_map(|s| Some(RawValue::Text(s))),
    ]
}

proptest! {
    #[test]
    fn breaks_have_fixed_length_and_never_decrease(
        values in prop::collection::vec(any_value(), 0..60),
        buckets in 1usize..10,
    ) {
        let breaks = compute_breaks(&values, buckets);
        prop_assert_eq!(breaks.len(), buckets + 1);
        prop_assert!(breaks.as_slice().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(breaks.as_slice().iter().all(|b| b.is_finite() && *b >= 0.0));
    }

    #[test]
    fn classification_is_monotonic(
        values in prop::collection::vec(0.0f64..100.0, 1..40),
        a in 0.0f64..100.0,
        b in 0.0f64..100.0,
    ) {
        let breaks = compute_breaks(&values, 5);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo, hi) = (lo.clamp(breaks.min(), breaks.max()), hi.clamp(breaks.min(), breaks.max()));
        prop_assert!(bucket_index(Some(lo), &breaks) <= bucket_index(Some(hi), &breaks));
    }

    #[test]
    fn missing_values_always_get_no_data_color(
        thresholds in prop::collection::vec(0.0f64..100.0, 1..8),
        metric in prop::sample::select(Metric::ALL.to_vec()),
    ) {
        let breaks = Breaks::from(thresholds);
        prop_assert_eq!(classify(None, &breaks, metric.palette()), NO_DATA_COLOR);
        prop_assert_eq!(classify(Some(f64::NAN), &breaks, metric.palette()), NO_DATA_COLOR);
    }

    #[test]
    fn ratio_metrics_are_zero_without_population(
        population in prop_oneof![Just(None), Just(Some(RawValue::Number(0.0))), (-1000i32..=0).prop_map(|v| Some(RawValue::Text(v.to_string())))],
        white in raw_number(),
        black in raw_number(),
        asian in raw_number(),
        latino in raw_number(),
    ) {
        let props = Properties { population, white, black, asian, latino, ..Properties::default() };
        for metric in [Metric::White, Metric::Black, Metric::Asian, Metric::Latino, Metric::NonWhite] {
            prop_assert_eq!(extract_value(&props, metric), 0.0);
        }
    }

    #[test]
    fn extraction_is_total_and_deterministic(
        population in raw_number(),
        white in raw_number(),
        foreign_born_pct in raw_number(),
        latino_pct in raw_number(),
    ) {
        let props = Properties { population, white, foreign_born_pct, latino_pct, ..Properties::default() };
        let before = props.clone();
        for metric in Metric::ALL {
            let first = extract_value(&props, metric);
            prop_assert!(first.is_finite() && first >= 0.0);
            prop_assert_eq!(first, extract_value(&props, metric));
        }
        prop_assert_eq!(props, before);
    }
}
