//! Integration tests for the intervention rule engine.
//!
//! Covers the engine contract: declaration-order concatenation, rule
//! composition without exclusivity, missing-score short-circuit, and the
//! clinical trigger scenarios.

use saba_rules::{InterventionDomain, Priority, RuleContext, evaluate};
use saba_scales::answers::{
    AssessmentAnswers, CamAnswers, CfsAnswers, Gds15Answers, MnaSfAnswers, TinettiAnswers,
};
use saba_scales::score_all;

fn run(answers: &AssessmentAnswers) -> Vec<saba_rules::InterventionRecord> {
    let scores = score_all(answers);
    evaluate(&RuleContext {
        scores: &scores,
        answers,
    })
}

/// CFS of 6 triggers the frailty bundle with both High-priority records.
#[test]
fn cfs_six_triggers_frailty_bundle() {
    let answers = AssessmentAnswers {
        cfs: Some(CfsAnswers { score: Some(6.0) }),
        ..Default::default()
    };
    let interventions = run(&answers);

    assert!(interventions.iter().any(|r| {
        r.action == "Initiate Frailty Care Bundle"
            && r.priority == Priority::High
            && r.domain == InterventionDomain::Frailty
    }));
    assert!(interventions.iter().any(|r| {
        r.action == "Perform full Comprehensive Geriatric Assessment"
            && r.priority == Priority::High
    }));
}

/// Frailty plus an at-risk nutrition screen appends the extra, more
/// specific record; the standalone nutrition rule fires as well — rules
/// compose, they do not exclude one another.
#[test]
fn frailty_with_malnutrition_composes() {
    let answers = AssessmentAnswers {
        cfs: Some(CfsAnswers { score: Some(5.0) }),
        mna_sf: Some(MnaSfAnswers {
            food_intake_decline: Some(1.0),
            weight_loss: Some(2.0),
            mobility: Some(1.0),
            acute_stress: Some(2.0),
            neuropsychological: Some(1.0),
            bmi_or_calf: Some(2.0),
        }),
        ..Default::default()
    };
    let interventions = run(&answers);

    let nutrition: Vec<_> = interventions
        .iter()
        .filter(|r| r.domain == InterventionDomain::Nutrition)
        .collect();
    assert_eq!(nutrition.len(), 2);
    assert_eq!(nutrition[0].priority, Priority::High);
    assert_eq!(nutrition[1].priority, Priority::Medium);
}

/// Tinetti below the 19-point cut triggers the falls bundle; at or above
/// it the rule stays silent.
#[test]
fn tinetti_cutoff_gates_falls_bundle() {
    let below = AssessmentAnswers {
        tinetti: Some(TinettiAnswers {
            balance: Some(8.0),
            gait: Some(9.0),
        }),
        ..Default::default()
    };
    let falls: Vec<_> = run(&below)
        .into_iter()
        .filter(|r| r.domain == InterventionDomain::Falls)
        .collect();
    assert!(!falls.is_empty());
    assert!(falls.iter().any(|r| r.priority == Priority::High));

    let above = AssessmentAnswers {
        tinetti: Some(TinettiAnswers {
            balance: Some(11.0),
            gait: Some(9.0),
        }),
        ..Default::default()
    };
    assert!(
        run(&above)
            .iter()
            .all(|r| r.domain != InterventionDomain::Falls)
    );
}

/// A positive CAM fires the delirium rules; a negative one does not.
#[test]
fn cam_gates_delirium_protocol() {
    let positive = AssessmentAnswers {
        cam: Some(CamAnswers {
            acute_onset_fluctuating: Some(true),
            inattention: Some(true),
            disorganized_thinking: Some(true),
            altered_consciousness: Some(false),
        }),
        ..Default::default()
    };
    assert!(
        run(&positive)
            .iter()
            .any(|r| r.domain == InterventionDomain::Delirium)
    );

    let negative = AssessmentAnswers {
        cam: Some(CamAnswers {
            acute_onset_fluctuating: Some(true),
            inattention: Some(false),
            disorganized_thinking: Some(true),
            altered_consciousness: Some(true),
        }),
        ..Default::default()
    };
    assert!(
        run(&negative)
            .iter()
            .all(|r| r.domain != InterventionDomain::Delirium)
    );
}

/// Severe depression escalates: the Medium evaluation record and the High
/// referral are both emitted.
#[test]
fn severe_depression_escalates() {
    let answers = AssessmentAnswers {
        gds15: Some(Gds15Answers {
            satisfied_with_life: Some(1.0),
            dropped_activities: Some(1.0),
            life_feels_empty: Some(1.0),
            often_bored: Some(1.0),
            good_spirits: Some(1.0),
            afraid_of_bad_things: Some(1.0),
            happy_most_of_time: Some(1.0),
            often_helpless: Some(1.0),
            prefers_to_stay_home: Some(1.0),
            memory_problems: Some(1.0),
            wonderful_to_be_alive: Some(1.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let depression: Vec<_> = run(&answers)
        .into_iter()
        .filter(|r| r.domain == InterventionDomain::Depression)
        .collect();

    assert_eq!(depression.len(), 2);
    assert_eq!(depression[0].priority, Priority::Medium);
    assert_eq!(depression[1].priority, Priority::High);
}

/// The surprise question feeds goals-of-care directly, without a scale.
#[test]
fn surprise_question_triggers_goals_of_care() {
    let answers = AssessmentAnswers {
        surprise_question: Some(false),
        ..Default::default()
    };
    assert!(
        run(&answers)
            .iter()
            .any(|r| r.domain == InterventionDomain::GoalsOfCare)
    );

    let surprised = AssessmentAnswers {
        surprise_question: Some(true),
        ..Default::default()
    };
    assert!(run(&surprised).is_empty());
}

/// A rule referencing an unanswered scale simply does not fire.
#[test]
fn missing_scores_short_circuit() {
    let answers = AssessmentAnswers {
        cfs: Some(CfsAnswers { score: Some(3.0) }),
        ..Default::default()
    };
    // CFS present but below threshold; every other scale absent.
    assert!(run(&answers).is_empty());
}

/// Re-running the engine on unchanged input yields the identical list in
/// the identical order.
#[test]
fn evaluation_is_idempotent() {
    let answers = AssessmentAnswers {
        cfs: Some(CfsAnswers { score: Some(7.0) }),
        tinetti: Some(TinettiAnswers {
            balance: Some(6.0),
            gait: Some(5.0),
        }),
        surprise_question: Some(false),
        ..Default::default()
    };

    assert_eq!(run(&answers), run(&answers));
}

/// Empty answers produce no scores and no interventions.
#[test]
fn empty_input_is_empty_output() {
    let answers = AssessmentAnswers::default();
    assert!(score_all(&answers).is_empty());
    assert!(run(&answers).is_empty());
}
