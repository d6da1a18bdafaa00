//! Integration tests for the scale scoring engine.
//!
//! Covers the scoring contract: determinism, the CAM boolean algorithm,
//! sum-scale additivity, and the distinction between an unanswered scale
//! (no result) and an answered total of zero.

use saba_scales::answers::{
    AssessmentAnswers, BarthelAnswers, CamAnswers, CfsAnswers, MocaAnswers, TinettiAnswers,
};
use saba_scales::scoring::ScaleId;
use saba_scales::{all_scales, get_scale, score_all};

fn cam_answers(acute: bool, inattention: bool, disorganized: bool, altered: bool) -> AssessmentAnswers {
    AssessmentAnswers {
        cam: Some(CamAnswers {
            acute_onset_fluctuating: Some(acute),
            inattention: Some(inattention),
            disorganized_thinking: Some(disorganized),
            altered_consciousness: Some(altered),
        }),
        ..Default::default()
    }
}

/// CAM is positive iff (acute AND inattention) AND (disorganized OR
/// altered). All 16 input combinations.
#[test]
fn cam_truth_table() {
    for bits in 0..16u8 {
        let acute = bits & 1 != 0;
        let inattention = bits & 2 != 0;
        let disorganized = bits & 4 != 0;
        let altered = bits & 8 != 0;

        let expected = (acute && inattention) && (disorganized || altered);

        let answers = cam_answers(acute, inattention, disorganized, altered);
        let result = get_scale(ScaleId::Cam).score(&answers).expect("answered CAM must score");

        assert_eq!(
            result.positive,
            Some(expected),
            "CAM({acute}, {inattention}, {disorganized}, {altered})"
        );
        assert_eq!(result.total, None, "CAM has no numeric total");
    }
}

/// Adding one more answered item with value v raises a sum-scale total by
/// exactly v.
#[test]
fn sum_scale_additivity() {
    let mut answers = AssessmentAnswers {
        moca: Some(MocaAnswers {
            naming: Some(3.0),
            attention: Some(4.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let before = get_scale(ScaleId::Moca)
        .score(&answers)
        .unwrap()
        .total
        .unwrap();

    answers.moca.as_mut().unwrap().orientation = Some(5.0);
    let after = get_scale(ScaleId::Moca)
        .score(&answers)
        .unwrap()
        .total
        .unwrap();

    assert_eq!(after, before + 5.0);
}

/// An unanswered scale yields no result; a single answered zero yields a
/// result with total 0. The two outcomes are distinguishable.
#[test]
fn omission_is_not_zero() {
    let unanswered = AssessmentAnswers::default();
    assert!(get_scale(ScaleId::Barthel).score(&unanswered).is_none());

    let zero = AssessmentAnswers {
        barthel: Some(BarthelAnswers {
            feeding: Some(0.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let result = get_scale(ScaleId::Barthel).score(&zero).unwrap();
    assert_eq!(result.total, Some(0.0));
}

/// A partially completed form is still scored over the answered items.
#[test]
fn partial_scale_scores_partial_sum() {
    let answers = AssessmentAnswers {
        barthel: Some(BarthelAnswers {
            feeding: Some(10.0),
            mobility: Some(15.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let result = get_scale(ScaleId::Barthel).score(&answers).unwrap();
    assert_eq!(result.total, Some(25.0));
}

/// Repeated scoring of fixed answers yields identical results in
/// identical order.
#[test]
fn scoring_is_deterministic() {
    let answers = AssessmentAnswers {
        cfs: Some(CfsAnswers { score: Some(6.0) }),
        tinetti: Some(TinettiAnswers {
            balance: Some(8.0),
            gait: Some(9.0),
        }),
        cam: Some(CamAnswers {
            acute_onset_fluctuating: Some(true),
            inattention: Some(true),
            disorganized_thinking: Some(false),
            altered_consciousness: Some(true),
        }),
        ..Default::default()
    };

    let first = serde_json::to_value(score_all(&answers)).unwrap();
    let second = serde_json::to_value(score_all(&answers)).unwrap();
    assert_eq!(first, second);
}

/// The frailty scale passes the selected ordinal through unchanged.
#[test]
fn cfs_is_a_passthrough() {
    let answers = AssessmentAnswers {
        cfs: Some(CfsAnswers { score: Some(6.0) }),
        ..Default::default()
    };
    let result = get_scale(ScaleId::Cfs).score(&answers).unwrap();
    assert_eq!(result.total, Some(6.0));
    assert_eq!(result.interpretation, "Living with moderate frailty");
}

/// Balance and gait sum independently; all three values are retained.
#[test]
fn tinetti_retains_balance_gait_and_total() {
    let answers = AssessmentAnswers {
        tinetti: Some(TinettiAnswers {
            balance: Some(8.0),
            gait: Some(9.0),
        }),
        ..Default::default()
    };
    let result = get_scale(ScaleId::Tinetti).score(&answers).unwrap();

    assert_eq!(result.total, Some(17.0));
    assert_eq!(result.subtotals.len(), 2);
    assert_eq!(result.subtotals[0].id, "balance");
    assert_eq!(result.subtotals[0].value, 8.0);
    assert_eq!(result.subtotals[1].id, "gait");
    assert_eq!(result.subtotals[1].value, 9.0);
    assert_eq!(result.interpretation, "High fall risk");
}

/// Empty answers score to an empty result set, not an error.
#[test]
fn empty_answers_score_to_nothing() {
    assert!(score_all(&AssessmentAnswers::default()).is_empty());
}

/// Registry sanity: nine scales, unique IDs, lookup round-trips.
#[test]
fn registry_covers_all_nine_scales() {
    let scales = all_scales();
    assert_eq!(scales.len(), 9);

    for scale in &scales {
        let looked_up = get_scale(scale.id());
        assert_eq!(looked_up.name(), scale.name());
    }
}
