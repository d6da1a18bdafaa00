//! Integration tests for the medication safety analyzer.
//!
//! Covers the normalize-then-analyze flow end to end: Hebrew brand-name
//! resolution, interaction symmetry, class-pattern rules, age- and
//! condition-gated appropriateness checks, anticholinergic burden
//! monotonicity, and empty-input degradation.

use saba_core::models::patient::PatientContext;
use saba_meds::appropriateness::{check_inappropriate, check_start};
use saba_meds::burden::anticholinergic_burden;
use saba_meds::interactions::{Severity, check_interactions};
use saba_meds::lexicon::Lexicon;
use saba_meds::normalize::{DEFAULT_THRESHOLD, resolve_medications};
use saba_meds::safety::analyze;

fn lexicon() -> &'static Lexicon {
    Lexicon::builtin()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A Hebrew medication list resolves to canonical names and flags exactly
/// one Major interaction between them.
#[test]
fn hebrew_list_resolves_and_flags_interaction() {
    let mentions = resolve_medications("קומדין, אספירין", lexicon(), DEFAULT_THRESHOLD);
    let report = analyze(&mentions, &PatientContext::default(), lexicon());

    let major: Vec<_> = report
        .interactions
        .iter()
        .filter(|f| f.severity == Severity::Major)
        .collect();
    assert_eq!(major.len(), 1);
    assert_eq!(major[0].drugs, vec!["aspirin", "warfarin"]);
    assert_eq!(report.interactions.len(), 1);
}

/// The same pair in either order produces identical finding content.
#[test]
fn interaction_findings_are_symmetric() {
    let forward = check_interactions(&names(&["warfarin", "aspirin"]), lexicon());
    let reverse = check_interactions(&names(&["aspirin", "warfarin"]), lexicon());
    assert_eq!(forward, reverse);

    let forward = check_interactions(&names(&["digoxin", "furosemide", "amiodarone"]), lexicon());
    let mut reverse =
        check_interactions(&names(&["amiodarone", "furosemide", "digoxin"]), lexicon());
    // Multiset equality: pair iteration order may differ with three drugs.
    assert_eq!(forward.len(), reverse.len());
    for finding in &forward {
        let i = reverse
            .iter()
            .position(|f| f == finding)
            .expect("finding present regardless of order");
        reverse.remove(i);
    }
}

/// Two NSAIDs together trigger the duplication class rule.
#[test]
fn nsaid_duplication_is_flagged() {
    let findings = check_interactions(&names(&["ibuprofen", "naproxen"]), lexicon());
    assert!(findings.iter().any(|f| {
        f.severity == Severity::Major && f.drugs == vec!["ibuprofen", "naproxen"]
    }));
}

/// An ACE inhibitor with an ARB triggers the dual-blockade class rule.
#[test]
fn acei_with_arb_is_flagged() {
    let findings = check_interactions(&names(&["ramipril", "losartan"]), lexicon());
    assert!(findings.iter().any(|f| {
        f.severity == Severity::Major && f.drugs == vec!["losartan", "ramipril"]
    }));
}

/// An anticoagulant with an NSAID is flagged through the class rule even
/// without an explicit pair entry.
#[test]
fn anticoagulant_with_nsaid_is_flagged() {
    let findings = check_interactions(&names(&["apixaban", "ibuprofen"]), lexicon());
    assert!(findings.iter().any(|f| {
        f.severity == Severity::Major && f.drugs == vec!["apixaban", "ibuprofen"]
    }));
}

/// Three CNS-active drugs trigger the sedative-load warning.
#[test]
fn cns_load_is_flagged_at_three() {
    let two = check_interactions(&names(&["lorazepam", "zolpidem"]), lexicon());
    assert!(two.iter().all(|f| !f.description.contains("CNS-active")));

    let three = check_interactions(&names(&["lorazepam", "zolpidem", "tramadol"]), lexicon());
    assert!(three.iter().any(|f| f.description.contains("CNS-active")));
}

/// Adding a recognized anticholinergic never decreases the burden total.
#[test]
fn anticholinergic_burden_is_monotonic() {
    let base = anticholinergic_burden(&names(&["sertraline"]), lexicon());
    assert_eq!(base.total, 1);

    let extended = anticholinergic_burden(&names(&["sertraline", "oxybutynin"]), lexicon());
    assert_eq!(extended.total, 4);
    assert!(extended.total >= base.total);
    assert!(extended.is_high());

    let contributions: Vec<_> = extended
        .contributions
        .iter()
        .map(|c| (c.drug.as_str(), c.points))
        .collect();
    assert_eq!(contributions, vec![("sertraline", 1), ("oxybutynin", 3)]);
}

/// Unrecognized and zero-point drugs contribute nothing.
#[test]
fn burden_ignores_non_anticholinergics() {
    let result = anticholinergic_burden(&names(&["metformin", "unknown-drug"]), lexicon());
    assert_eq!(result.total, 0);
    assert!(result.contributions.is_empty());
}

/// Age-gated avoid rules fire at 65 and stay silent when age is unknown.
#[test]
fn benzodiazepine_avoid_rule_is_age_gated() {
    let meds = names(&["lorazepam"]);

    let older = PatientContext {
        age: Some(80),
        ..Default::default()
    };
    let findings = check_inappropriate(&meds, &older, lexicon());
    assert!(findings.iter().any(|f| {
        f.drug == "lorazepam" && f.severity == Severity::Major
    }));

    let unknown_age = PatientContext::default();
    assert!(check_inappropriate(&meds, &unknown_age, lexicon()).is_empty());
}

/// Condition-gated rules fire regardless of age.
#[test]
fn nsaid_with_heart_failure_is_flagged() {
    let ctx = PatientContext {
        conditions: vec!["Heart failure, NYHA II".to_string()],
        ..Default::default()
    };
    let findings = check_inappropriate(&names(&["ibuprofen"]), &ctx, lexicon());
    assert!(findings.iter().any(|f| {
        f.drug == "ibuprofen" && f.severity == Severity::Major
    }));
}

/// Atrial fibrillation without an anticoagulant yields a START
/// recommendation; adding one silences it.
#[test]
fn afib_without_anticoagulant_recommends_starting_one() {
    let ctx = PatientContext {
        conditions: vec!["Atrial fibrillation".to_string()],
        ..Default::default()
    };

    let without = check_start(&names(&["metformin"]), &ctx, lexicon());
    assert!(without.iter().any(|r| r.missing_class == "oral anticoagulant"));

    let with = check_start(&names(&["metformin", "apixaban"]), &ctx, lexicon());
    assert!(with.iter().all(|r| r.missing_class != "oral anticoagulant"));
}

/// Hebrew condition keywords gate START rules too.
#[test]
fn hebrew_condition_keyword_matches() {
    let ctx = PatientContext {
        conditions: vec!["פרפור פרוזדורים".to_string()],
        ..Default::default()
    };
    let recs = check_start(&[], &ctx, lexicon());
    assert!(recs.iter().any(|r| r.condition == "Atrial fibrillation"));
}

/// Empty inputs degrade to an all-empty report, never an error.
#[test]
fn empty_input_yields_empty_report() {
    let mentions = resolve_medications("", lexicon(), DEFAULT_THRESHOLD);
    assert!(mentions.is_empty());

    let report = analyze(&mentions, &PatientContext::default(), lexicon());
    assert!(report.interactions.is_empty());
    assert!(report.inappropriate.is_empty());
    assert!(report.start_recommendations.is_empty());
    assert_eq!(report.anticholinergic.total, 0);
}
