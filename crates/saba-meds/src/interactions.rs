//! Drug-drug interaction checking: an explicit named-pair table plus a
//! small set of class-pattern rules. Findings are symmetric — the same
//! pair in either order produces identical content — and several rules
//! may fire for one pair.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lexicon::{DrugClass, DrugEntry, Lexicon};

/// Interaction severity tiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minor,
    Moderate,
    Major,
    Contraindicated,
}

/// One triggered interaction rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InteractionFinding {
    /// Canonical names involved, sorted alphabetically.
    pub drugs: Vec<String>,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

struct PairRule {
    a: &'static str,
    b: &'static str,
    severity: Severity,
    description: &'static str,
    recommendation: &'static str,
}

static PAIR_RULES: &[PairRule] = &[
    PairRule {
        a: "warfarin",
        b: "aspirin",
        severity: Severity::Major,
        description: "Combined anticoagulant and antiplatelet therapy markedly increases bleeding risk",
        recommendation: "Avoid unless a compelling indication exists; add gastroprotection and monitor INR closely",
    },
    PairRule {
        a: "digoxin",
        b: "furosemide",
        severity: Severity::Moderate,
        description: "Diuretic-induced hypokalemia potentiates digoxin toxicity",
        recommendation: "Monitor potassium and digoxin level; replete electrolytes",
    },
    PairRule {
        a: "digoxin",
        b: "amiodarone",
        severity: Severity::Moderate,
        description: "Amiodarone raises serum digoxin concentration",
        recommendation: "Halve the digoxin dose and monitor level",
    },
    PairRule {
        a: "simvastatin",
        b: "amiodarone",
        severity: Severity::Moderate,
        description: "Amiodarone inhibits simvastatin metabolism, raising myopathy risk",
        recommendation: "Limit simvastatin to 20 mg daily or switch statin",
    },
    PairRule {
        a: "methotrexate",
        b: "trimethoprim",
        severity: Severity::Major,
        description: "Combined folate antagonism can cause pancytopenia",
        recommendation: "Avoid the combination; use an alternative antibiotic",
    },
    PairRule {
        a: "sildenafil",
        b: "isosorbide dinitrate",
        severity: Severity::Contraindicated,
        description: "Phosphodiesterase-5 inhibitor with nitrate causes profound hypotension",
        recommendation: "Never combine",
    },
    PairRule {
        a: "sildenafil",
        b: "nitroglycerin",
        severity: Severity::Contraindicated,
        description: "Phosphodiesterase-5 inhibitor with nitrate causes profound hypotension",
        recommendation: "Never combine",
    },
];

/// Check a resolved medication list for interactions.
///
/// Unknown names are ignored; an empty list yields an empty finding set.
pub fn check_interactions(names: &[String], lexicon: &Lexicon) -> Vec<InteractionFinding> {
    let entries: Vec<&'static DrugEntry> = names
        .iter()
        .filter_map(|n| lexicon.find_drug(n))
        .collect();

    let mut findings = Vec::new();

    // (i) explicit named pairs, every unordered combination once
    for (i, a) in entries.iter().enumerate() {
        for b in entries.iter().skip(i + 1) {
            for rule in PAIR_RULES {
                let hit = (rule.a == a.name && rule.b == b.name)
                    || (rule.a == b.name && rule.b == a.name);
                if hit {
                    findings.push(pair_finding(
                        a.name,
                        b.name,
                        rule.severity,
                        rule.description,
                        rule.recommendation,
                    ));
                }
            }
        }
    }

    // (ii) class-pattern rules
    findings.extend(nsaid_duplication(&entries));
    findings.extend(acei_plus_arb(&entries));
    findings.extend(dual_anticoagulation(&entries));
    findings.extend(anticoagulant_plus_nsaid(&entries));
    findings.extend(lithium_plus_nsaid(&entries));
    findings.extend(ssri_plus_nsaid(&entries));
    findings.extend(tramadol_plus_ssri(&entries));
    findings.extend(potassium_sparing_with_ras_blocker(&entries));
    findings.extend(cns_depressant_load(&entries));

    findings
}

fn pair_finding(
    a: &str,
    b: &str,
    severity: Severity,
    description: &str,
    recommendation: &str,
) -> InteractionFinding {
    let mut drugs = vec![a.to_string(), b.to_string()];
    drugs.sort();
    InteractionFinding {
        drugs,
        severity,
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

fn group_finding(
    mut drugs: Vec<String>,
    severity: Severity,
    description: &str,
    recommendation: &str,
) -> InteractionFinding {
    drugs.sort();
    InteractionFinding {
        drugs,
        severity,
        description: description.to_string(),
        recommendation: recommendation.to_string(),
    }
}

fn of_class<'a>(entries: &[&'a DrugEntry], class: DrugClass) -> Vec<&'a DrugEntry> {
    entries.iter().copied().filter(|e| e.has_class(class)).collect()
}

fn nsaid_duplication(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    let nsaids = of_class(entries, DrugClass::Nsaid);
    if nsaids.len() < 2 {
        return Vec::new();
    }
    vec![group_finding(
        nsaids.iter().map(|e| e.name.to_string()).collect(),
        Severity::Major,
        "More than one NSAID prescribed concurrently",
        "Stop all but one NSAID; duplication adds toxicity without benefit",
    )]
}

fn acei_plus_arb(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    let aceis = of_class(entries, DrugClass::AceInhibitor);
    let arbs = of_class(entries, DrugClass::Arb);
    if aceis.is_empty() || arbs.is_empty() {
        return Vec::new();
    }
    let drugs = aceis
        .iter()
        .chain(arbs.iter())
        .map(|e| e.name.to_string())
        .collect();
    vec![group_finding(
        drugs,
        Severity::Major,
        "ACE inhibitor combined with ARB: hyperkalemia and renal failure risk",
        "Use one renin-angiotensin blocker, not both",
    )]
}

fn dual_anticoagulation(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    let anticoagulants = of_class(entries, DrugClass::Anticoagulant);
    if anticoagulants.len() < 2 {
        return Vec::new();
    }
    vec![group_finding(
        anticoagulants.iter().map(|e| e.name.to_string()).collect(),
        Severity::Major,
        "More than one anticoagulant prescribed concurrently",
        "Confirm intentional bridging; otherwise continue a single agent",
    )]
}

fn anticoagulant_plus_nsaid(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    let anticoagulants = of_class(entries, DrugClass::Anticoagulant);
    let nsaids = of_class(entries, DrugClass::Nsaid);
    let mut findings = Vec::new();
    for ac in &anticoagulants {
        for nsaid in &nsaids {
            findings.push(pair_finding(
                ac.name,
                nsaid.name,
                Severity::Major,
                "NSAID with anticoagulant substantially increases gastrointestinal bleeding risk",
                "Avoid the NSAID; prefer paracetamol for analgesia",
            ));
        }
    }
    findings
}

fn lithium_plus_nsaid(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    if !entries.iter().any(|e| e.name == "lithium") {
        return Vec::new();
    }
    of_class(entries, DrugClass::Nsaid)
        .iter()
        .map(|nsaid| {
            pair_finding(
                "lithium",
                nsaid.name,
                Severity::Major,
                "NSAIDs reduce lithium clearance and can cause toxicity",
                "Avoid NSAIDs; monitor lithium level if unavoidable",
            )
        })
        .collect()
}

fn ssri_plus_nsaid(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    let ssris = of_class(entries, DrugClass::Ssri);
    let nsaids = of_class(entries, DrugClass::Nsaid);
    let mut findings = Vec::new();
    for ssri in &ssris {
        for nsaid in &nsaids {
            findings.push(pair_finding(
                ssri.name,
                nsaid.name,
                Severity::Moderate,
                "SSRI with NSAID increases upper gastrointestinal bleeding risk",
                "Consider gastroprotection or an alternative analgesic",
            ));
        }
    }
    findings
}

fn tramadol_plus_ssri(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    if !entries.iter().any(|e| e.name == "tramadol") {
        return Vec::new();
    }
    of_class(entries, DrugClass::Ssri)
        .iter()
        .map(|ssri| {
            pair_finding(
                "tramadol",
                ssri.name,
                Severity::Moderate,
                "Tramadol with SSRI raises serotonin syndrome and seizure risk",
                "Prefer a non-serotonergic analgesic",
            )
        })
        .collect()
}

fn potassium_sparing_with_ras_blocker(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    if !entries.iter().any(|e| e.name == "spironolactone") {
        return Vec::new();
    }
    let mut findings = Vec::new();
    for blocker in entries
        .iter()
        .filter(|e| e.has_class(DrugClass::AceInhibitor) || e.has_class(DrugClass::Arb))
    {
        findings.push(pair_finding(
            "spironolactone",
            blocker.name,
            Severity::Moderate,
            "Potassium-sparing diuretic with renin-angiotensin blocker: hyperkalemia risk",
            "Monitor potassium and renal function",
        ));
    }
    findings
}

fn cns_depressant_load(entries: &[&DrugEntry]) -> Vec<InteractionFinding> {
    const CNS_CLASSES: [DrugClass; 5] = [
        DrugClass::Benzodiazepine,
        DrugClass::ZDrug,
        DrugClass::Opioid,
        DrugClass::Tca,
        DrugClass::Antipsychotic,
    ];
    let cns: Vec<&DrugEntry> = entries
        .iter()
        .copied()
        .filter(|e| CNS_CLASSES.iter().any(|c| e.has_class(*c)))
        .collect();
    if cns.len() < 3 {
        return Vec::new();
    }
    vec![group_finding(
        cns.iter().map(|e| e.name.to_string()).collect(),
        Severity::Moderate,
        "Three or more CNS-active drugs: sedation, falls, and fracture risk",
        "Deprescribe where possible; reassess each agent's indication",
    )]
}
