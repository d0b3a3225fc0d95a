//! Property tests for the evaluation metrics

use proptest::prelude::*;
use sessbound_core::{BoundaryEvaluator, EvaluatorConfig, ValidationError};

fn label_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (1usize..64).prop_flat_map(|n| {
        (
            prop::collection::vec(0u8..=1, n),
            prop::collection::vec(0u8..=1, n),
        )
    })
}

fn evaluator() -> BoundaryEvaluator {
    let config = EvaluatorConfig::builder()
        .tolerance_levels(vec![0, 1, 2, 3, 5, 8])
        .build()
        .unwrap();
    BoundaryEvaluator::new(config).unwrap()
}

proptest! {
    #[test]
    fn within_zero_equals_exact((p, g) in label_pair()) {
        let result = evaluator().evaluate_labels(&p, &g).unwrap();
        prop_assert_eq!(result.within_k_accuracy(0), Some(result.exact_accuracy));
    }

    #[test]
    fn identical_sequences_are_exact((p, _) in label_pair()) {
        let result = evaluator().evaluate_labels(&p, &p).unwrap();
        prop_assert_eq!(result.exact_accuracy, 1.0);
        prop_assert_eq!(result.boundary_count_diff, 0);
        prop_assert_eq!(result.pk_score, 0.0);
        prop_assert_eq!(result.window_diff, 0.0);
    }

    #[test]
    fn within_k_is_monotonic((p, g) in label_pair()) {
        let result = evaluator().evaluate_labels(&p, &g).unwrap();
        for pair in result.within_k.windows(2) {
            prop_assert!(pair[0].accuracy <= pair[1].accuracy);
            prop_assert!(pair[0].boundary_f1 <= pair[1].boundary_f1);
        }
    }

    #[test]
    fn ratios_stay_in_unit_interval((p, g) in label_pair()) {
        let result = evaluator().evaluate_labels(&p, &g).unwrap();
        let mut ratios = vec![
            result.exact_accuracy,
            result.precision,
            result.recall,
            result.f1_score,
            result.windowed_accuracy,
            result.boundary_precision,
            result.boundary_recall,
            result.true_positive_rate,
            result.false_positive_rate,
            result.pk_score,
            result.window_diff,
        ];
        ratios.extend(result.within_k.iter().map(|s| s.accuracy));
        ratios.extend(result.within_k.iter().map(|s| s.boundary_f1));
        for value in ratios {
            prop_assert!((0.0..=1.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn confusion_counts_cover_every_position((p, g) in label_pair()) {
        let result = evaluator().evaluate_labels(&p, &g).unwrap();
        prop_assert_eq!(result.confusion.total(), p.len());
        prop_assert_eq!(
            result.predicted_boundaries,
            result.confusion.true_positives + result.confusion.false_positives
        );
    }

    #[test]
    fn distances_defined_iff_both_sides_have_boundaries((p, g) in label_pair()) {
        let result = evaluator().evaluate_labels(&p, &g).unwrap();
        let defined = result.predicted_boundaries > 0 && result.actual_boundaries > 0;
        prop_assert_eq!(result.mean_distance.is_some(), defined);
        prop_assert_eq!(result.median_distance.is_some(), defined);
        if let (Some(min), Some(max)) = (result.min_distance, result.max_distance) {
            prop_assert!(min <= max);
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected(p in prop::collection::vec(0u8..=1, 1..32), extra in 1usize..8) {
        let mut g = p.clone();
        g.extend(std::iter::repeat(0).take(extra));
        let err = evaluator().evaluate_labels(&p, &g).unwrap_err();
        prop_assert_eq!(
            err,
            ValidationError::LengthMismatch { predictions: p.len(), ground_truth: p.len() + extra }
        );
    }
}
