//! Prescribing-appropriateness checks in the Beers / STOPP-START mold:
//! a fixed table of avoid/caution entries gated by age or condition, and
//! condition-triggered recommendations for omitted therapy.
//!
//! Age-gated rules are skipped entirely when age is unknown; condition
//! gates match case-insensitive substrings of the free-text condition
//! list, in English or Hebrew.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use saba_core::models::patient::PatientContext;

use crate::interactions::Severity;
use crate::lexicon::{DrugClass, DrugEntry, Lexicon};

/// One avoid/caution hit for a prescribed drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InappropriateFinding {
    pub drug: String,
    pub severity: Severity,
    pub criterion: String,
    pub recommendation: String,
}

/// A positive, additive-therapy recommendation: the condition is present
/// but no drug of the indicated class is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StartRecommendation {
    pub condition: String,
    pub missing_class: String,
    pub recommendation: String,
}

struct AvoidRule {
    drug: Option<&'static str>,
    class: Option<DrugClass>,
    min_age: Option<u32>,
    /// Any-of condition keywords; empty means no condition gate.
    conditions: &'static [&'static str],
    severity: Severity,
    criterion: &'static str,
    recommendation: &'static str,
}

static AVOID_RULES: &[AvoidRule] = &[
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Benzodiazepine),
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Major,
        criterion: "Benzodiazepines in older adults increase falls, fracture, and delirium risk",
        recommendation: "Taper and discontinue; prefer sleep hygiene or melatonin",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::ZDrug),
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Moderate,
        criterion: "Z-drug hypnotics carry benzodiazepine-like fall and fracture risk",
        recommendation: "Taper and discontinue; address sleep non-pharmacologically",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Tca),
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Major,
        criterion: "Tricyclic antidepressants are highly anticholinergic and cause orthostatic hypotension",
        recommendation: "Switch to an SSRI or other safer antidepressant",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::FirstGenAntihistamine),
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Major,
        criterion: "First-generation antihistamines are strongly anticholinergic",
        recommendation: "Use a second-generation antihistamine instead",
    },
    AvoidRule {
        drug: Some("glibenclamide"),
        class: None,
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Major,
        criterion: "Glibenclamide causes prolonged hypoglycemia in older adults",
        recommendation: "Switch to a shorter-acting agent",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Nsaid),
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Moderate,
        criterion: "Chronic NSAID use in older adults: gastrointestinal bleeding and renal injury risk",
        recommendation: "Limit duration; co-prescribe gastroprotection if unavoidable",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Nsaid),
        min_age: None,
        conditions: &["heart failure", "אי ספיקת לב"],
        severity: Severity::Major,
        criterion: "NSAIDs cause fluid retention and worsen heart failure",
        recommendation: "Avoid NSAIDs; use paracetamol-based analgesia",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Nsaid),
        min_age: None,
        conditions: &["chronic kidney", "ckd", "אי ספיקת כליות"],
        severity: Severity::Major,
        criterion: "NSAIDs accelerate renal function decline in chronic kidney disease",
        recommendation: "Avoid NSAIDs; review analgesic plan",
    },
    AvoidRule {
        drug: Some("oxybutynin"),
        class: None,
        min_age: None,
        conditions: &["dementia", "דמנציה"],
        severity: Severity::Major,
        criterion: "Oxybutynin worsens cognition in dementia",
        recommendation: "Stop, or switch to a bladder agent with less CNS penetration",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Antipsychotic),
        min_age: None,
        conditions: &["dementia", "דמנציה"],
        severity: Severity::Major,
        criterion: "Antipsychotics in dementia increase stroke and mortality risk",
        recommendation: "Reserve for refractory distress after non-drug measures; review regularly",
    },
    AvoidRule {
        drug: None,
        class: Some(DrugClass::Ppi),
        min_age: Some(65),
        conditions: &[],
        severity: Severity::Minor,
        criterion: "Proton-pump inhibitor beyond 8 weeks without a maintenance indication",
        recommendation: "Confirm ongoing indication or step down",
    },
];

struct StartRule {
    conditions: &'static [&'static str],
    condition_label: &'static str,
    required_classes: &'static [DrugClass],
    missing_label: &'static str,
    recommendation: &'static str,
}

static START_RULES: &[StartRule] = &[
    StartRule {
        conditions: &["atrial fibrillation", "afib", "פרפור"],
        condition_label: "Atrial fibrillation",
        required_classes: &[DrugClass::Anticoagulant],
        missing_label: "oral anticoagulant",
        recommendation: "Consider oral anticoagulation after stroke-risk scoring",
    },
    StartRule {
        conditions: &["osteoporosis", "fragility fracture", "אוסטאופורוזיס"],
        condition_label: "Osteoporosis",
        required_classes: &[DrugClass::Bisphosphonate],
        missing_label: "bisphosphonate",
        recommendation: "Consider bisphosphonate therapy with calcium and vitamin D",
    },
    StartRule {
        conditions: &["diabetes", "סוכרת"],
        condition_label: "Diabetes mellitus",
        required_classes: &[DrugClass::Statin],
        missing_label: "statin",
        recommendation: "Consider a statin for cardiovascular risk reduction",
    },
    StartRule {
        conditions: &["heart failure", "אי ספיקת לב"],
        condition_label: "Heart failure",
        required_classes: &[DrugClass::AceInhibitor, DrugClass::Arb],
        missing_label: "ACE inhibitor or ARB",
        recommendation: "Consider an ACE inhibitor (or ARB) unless contraindicated",
    },
    StartRule {
        conditions: &["heart failure", "אי ספיקת לב"],
        condition_label: "Heart failure",
        required_classes: &[DrugClass::BetaBlocker],
        missing_label: "evidence-based beta blocker",
        recommendation: "Consider an evidence-based beta blocker unless contraindicated",
    },
    StartRule {
        conditions: &["myocardial infarction", "post mi", "אוטם"],
        condition_label: "Prior myocardial infarction",
        required_classes: &[DrugClass::Antiplatelet],
        missing_label: "antiplatelet",
        recommendation: "Consider antiplatelet therapy for secondary prevention",
    },
    StartRule {
        conditions: &["myocardial infarction", "post mi", "אוטם"],
        condition_label: "Prior myocardial infarction",
        required_classes: &[DrugClass::Statin],
        missing_label: "statin",
        recommendation: "Consider a statin for secondary prevention",
    },
];

/// Check each resolved medication against the avoid/caution table.
pub fn check_inappropriate(
    names: &[String],
    ctx: &PatientContext,
    lexicon: &Lexicon,
) -> Vec<InappropriateFinding> {
    let entries: Vec<&'static DrugEntry> = names
        .iter()
        .filter_map(|n| lexicon.find_drug(n))
        .collect();

    let mut findings = Vec::new();
    for entry in &entries {
        for rule in AVOID_RULES {
            if !rule_matches_drug(rule, entry) {
                continue;
            }
            if let Some(min_age) = rule.min_age
                && !ctx.age.is_some_and(|a| a >= min_age)
            {
                continue;
            }
            if !rule.conditions.is_empty()
                && !rule.conditions.iter().any(|kw| ctx.has_condition(kw))
            {
                continue;
            }
            findings.push(InappropriateFinding {
                drug: entry.name.to_string(),
                severity: rule.severity,
                criterion: rule.criterion.to_string(),
                recommendation: rule.recommendation.to_string(),
            });
        }
    }
    findings
}

fn rule_matches_drug(rule: &AvoidRule, entry: &DrugEntry) -> bool {
    match (rule.drug, rule.class) {
        (Some(name), _) => name == entry.name,
        (None, Some(class)) => entry.has_class(class),
        (None, None) => false,
    }
}

/// Emit a recommendation for each condition whose indicated drug class is
/// absent from the medication list.
pub fn check_start(
    names: &[String],
    ctx: &PatientContext,
    lexicon: &Lexicon,
) -> Vec<StartRecommendation> {
    if ctx.conditions.is_empty() {
        return Vec::new();
    }

    let entries: Vec<&'static DrugEntry> = names
        .iter()
        .filter_map(|n| lexicon.find_drug(n))
        .collect();

    let mut recommendations = Vec::new();
    for rule in START_RULES {
        let condition_present = rule.conditions.iter().any(|kw| ctx.has_condition(kw));
        if !condition_present {
            continue;
        }
        let class_covered = entries.iter().any(|e| {
            rule.required_classes.iter().any(|c| e.has_class(*c))
        });
        if class_covered {
            continue;
        }
        recommendations.push(StartRecommendation {
            condition: rule.condition_label.to_string(),
            missing_class: rule.missing_label.to_string(),
            recommendation: rule.recommendation.to_string(),
        });
    }
    recommendations
}
