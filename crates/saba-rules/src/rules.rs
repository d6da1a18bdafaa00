//! The rule set, in fixed declaration order.
//!
//! A rule whose predicate references a scale with no score does not fire;
//! a missing score is never an error. Rules compose rather than exclude:
//! several domains can and do fire on the same score set.

use saba_scales::answers::AssessmentAnswers;
use saba_scales::scoring::{ScaleId, ScoreResult};

use crate::intervention::{InterventionDomain, InterventionRecord, Priority};

/// Borrowed view of one scoring pass, handed to every rule.
pub struct RuleContext<'a> {
    pub scores: &'a [ScoreResult],
    pub answers: &'a AssessmentAnswers,
}

impl RuleContext<'_> {
    pub fn result(&self, id: ScaleId) -> Option<&ScoreResult> {
        self.scores.iter().find(|s| s.scale_id == id)
    }

    pub fn total(&self, id: ScaleId) -> Option<f64> {
        self.result(id).and_then(|s| s.total)
    }

    pub fn positive(&self, id: ScaleId) -> Option<bool> {
        self.result(id).and_then(|s| s.positive)
    }
}

/// One guarded block: fire `emit` iff `applies` holds.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&RuleContext) -> bool,
    pub emit: fn(&RuleContext) -> Vec<InterventionRecord>,
}

/// Evaluate every rule in declaration order, concatenating emissions.
pub fn evaluate(ctx: &RuleContext) -> Vec<InterventionRecord> {
    RULES.iter().fold(Vec::new(), |mut acc, rule| {
        if (rule.applies)(ctx) {
            acc.extend((rule.emit)(ctx));
        }
        acc
    })
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "frailty_bundle",
        applies: frailty_applies,
        emit: frailty_emit,
    },
    Rule {
        name: "severe_frailty_planning",
        applies: severe_frailty_applies,
        emit: severe_frailty_emit,
    },
    Rule {
        name: "fall_risk_bundle",
        applies: fall_risk_applies,
        emit: fall_risk_emit,
    },
    Rule {
        name: "delirium_protocol",
        applies: delirium_applies,
        emit: delirium_emit,
    },
    Rule {
        name: "depression_workup",
        applies: depression_applies,
        emit: depression_emit,
    },
    Rule {
        name: "cognition_workup",
        applies: cognition_applies,
        emit: cognition_emit,
    },
    Rule {
        name: "pressure_injury_prevention",
        applies: pressure_injury_applies,
        emit: pressure_injury_emit,
    },
    Rule {
        name: "goals_of_care",
        applies: goals_of_care_applies,
        emit: goals_of_care_emit,
    },
    Rule {
        name: "nutrition_followup",
        applies: nutrition_applies,
        emit: nutrition_emit,
    },
];

fn frailty_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::Cfs).is_some_and(|t| t >= 5.0)
}

fn frailty_emit(ctx: &RuleContext) -> Vec<InterventionRecord> {
    let mut records = vec![
        InterventionRecord::new(
            InterventionDomain::Frailty,
            Priority::High,
            "Initiate Frailty Care Bundle",
            "Clinical Frailty Scale of 5 or more indicates at least mild frailty",
            Some("Rockwood K et al., CMAJ 2005"),
        ),
        InterventionRecord::new(
            InterventionDomain::Frailty,
            Priority::High,
            "Perform full Comprehensive Geriatric Assessment",
            "Frail older adults benefit from structured multidomain assessment",
            Some("BGS Fit for Frailty 2014"),
        ),
    ];

    // Frail and undernourished gates an extra, more specific record.
    if ctx.total(ScaleId::MnaSf).is_some_and(|t| t <= 11.0) {
        records.push(InterventionRecord::new(
            InterventionDomain::Nutrition,
            Priority::High,
            "Refer to dietitian and start oral nutritional supplementation",
            "Frailty combined with MNA-SF at-risk score",
            Some("ESPEN geriatric nutrition guideline 2022"),
        ));
    }

    records
}

fn severe_frailty_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::Cfs).is_some_and(|t| t >= 7.0)
}

fn severe_frailty_emit(_ctx: &RuleContext) -> Vec<InterventionRecord> {
    vec![InterventionRecord::new(
        InterventionDomain::Frailty,
        Priority::Medium,
        "Plan for full care dependence and caregiver support",
        "Clinical Frailty Scale of 7 or more indicates severe frailty",
        None,
    )]
}

fn fall_risk_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::Tinetti).is_some_and(|t| t < 19.0)
}

fn fall_risk_emit(_ctx: &RuleContext) -> Vec<InterventionRecord> {
    vec![
        InterventionRecord::new(
            InterventionDomain::Falls,
            Priority::High,
            "Start multifactorial fall-risk intervention",
            "Tinetti POMA total below 19 indicates high fall risk",
            Some("Tinetti ME, JAGS 1986"),
        ),
        InterventionRecord::new(
            InterventionDomain::Falls,
            Priority::Medium,
            "Prescribe strength and balance training; check vitamin D status",
            "Exercise programs reduce fall rate in high-risk older adults",
            Some("USPSTF falls prevention 2018"),
        ),
    ]
}

fn delirium_applies(ctx: &RuleContext) -> bool {
    ctx.positive(ScaleId::Cam).is_some_and(|p| p)
}

fn delirium_emit(_ctx: &RuleContext) -> Vec<InterventionRecord> {
    vec![
        InterventionRecord::new(
            InterventionDomain::Delirium,
            Priority::High,
            "Start non-pharmacologic delirium protocol",
            "CAM screen positive for delirium",
            Some("Inouye SK, Ann Intern Med 1990"),
        ),
        InterventionRecord::new(
            InterventionDomain::Delirium,
            Priority::High,
            "Search for precipitants including full medication review",
            "Delirium is frequently drug-induced or multifactorial in older adults",
            None,
        ),
    ]
}

fn depression_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::Gds15).is_some_and(|t| t >= 5.0)
}

fn depression_emit(ctx: &RuleContext) -> Vec<InterventionRecord> {
    let mut records = vec![InterventionRecord::new(
        InterventionDomain::Depression,
        Priority::Medium,
        "Perform structured depression evaluation",
        "GDS-15 of 5 or more is suggestive of depression",
        Some("Sheikh JI, Yesavage JA 1986"),
    )];

    if ctx.total(ScaleId::Gds15).is_some_and(|t| t >= 10.0) {
        records.push(InterventionRecord::new(
            InterventionDomain::Depression,
            Priority::High,
            "Refer to psychiatry",
            "GDS-15 of 10 or more is consistent with severe depression",
            None,
        ));
    }

    records
}

fn cognition_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::Moca).is_some_and(|t| t < 26.0)
}

fn cognition_emit(ctx: &RuleContext) -> Vec<InterventionRecord> {
    let mut records = vec![InterventionRecord::new(
        InterventionDomain::Cognition,
        Priority::Medium,
        "Start structured cognitive work-up",
        "MoCA below 26 indicates possible cognitive impairment",
        Some("Nasreddine ZS, JAGS 2005"),
    )];

    if ctx.total(ScaleId::Moca).is_some_and(|t| t < 18.0) {
        records.push(InterventionRecord::new(
            InterventionDomain::Cognition,
            Priority::High,
            "Refer to memory clinic; assess decision-making capacity",
            "MoCA below 18 suggests significant cognitive impairment",
            None,
        ));
    }

    records
}

fn pressure_injury_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::Braden).is_some_and(|t| t <= 18.0)
}

fn pressure_injury_emit(ctx: &RuleContext) -> Vec<InterventionRecord> {
    let priority = if ctx.total(ScaleId::Braden).is_some_and(|t| t <= 12.0) {
        Priority::High
    } else {
        Priority::Medium
    };

    vec![InterventionRecord::new(
        InterventionDomain::PressureInjury,
        priority,
        "Start pressure-redistribution surface and repositioning schedule",
        "Braden score of 18 or less indicates pressure-injury risk",
        Some("Bergstrom N, Nurs Res 1987"),
    )]
}

fn goals_of_care_applies(ctx: &RuleContext) -> bool {
    ctx.answers.surprise_question == Some(false)
}

fn goals_of_care_emit(_ctx: &RuleContext) -> Vec<InterventionRecord> {
    vec![InterventionRecord::new(
        InterventionDomain::GoalsOfCare,
        Priority::High,
        "Hold an advance-care-planning conversation",
        "Clinician would not be surprised by death within 12 months",
        Some("Moss AH, CJASN 2008"),
    )]
}

fn nutrition_applies(ctx: &RuleContext) -> bool {
    ctx.total(ScaleId::MnaSf).is_some_and(|t| t <= 11.0)
}

fn nutrition_emit(_ctx: &RuleContext) -> Vec<InterventionRecord> {
    vec![InterventionRecord::new(
        InterventionDomain::Nutrition,
        Priority::Medium,
        "Complete full nutritional assessment and food-intake review",
        "MNA-SF screen at risk or malnourished",
        None,
    )]
}
