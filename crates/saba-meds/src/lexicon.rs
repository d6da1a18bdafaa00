//! Static reference tables: canonical drugs with brand aliases (including
//! the Hebrew brand names common on Israeli medication lists), drug-class
//! tags, anticholinergic point values, and dosing/medical abbreviations.
//!
//! The tables are plain statics, immutable for the lifetime of the
//! process. Callers receive them through `Lexicon::builtin()` and pass
//! `&Lexicon` into the matcher, normalizer, and analyzer so those stay
//! independently testable against a substitute lexicon.

/// Pharmacological class tags used by the class-pattern interaction rules
/// and the appropriateness tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrugClass {
    Nsaid,
    AceInhibitor,
    Arb,
    Anticoagulant,
    Antiplatelet,
    Benzodiazepine,
    ZDrug,
    Opioid,
    Ssri,
    Tca,
    Antipsychotic,
    FirstGenAntihistamine,
    Antihistamine,
    Diuretic,
    BetaBlocker,
    Statin,
    Ppi,
    Sulfonylurea,
    Bisphosphonate,
    Nitrate,
}

/// One canonical drug with its recognized aliases.
#[derive(Debug, Clone, Copy)]
pub struct DrugEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub classes: &'static [DrugClass],
    /// Anticholinergic burden contribution, 0-3.
    pub acb_points: u8,
}

impl DrugEntry {
    pub fn has_class(&self, class: DrugClass) -> bool {
        self.classes.contains(&class)
    }
}

/// Whole-word shorthand expanded inline by the normalizer.
#[derive(Debug, Clone, Copy)]
pub struct AbbreviationEntry {
    pub short: &'static str,
    pub expansion: &'static str,
}

/// The complete immutable reference data set.
pub struct Lexicon {
    pub drugs: &'static [DrugEntry],
    pub abbreviations: &'static [AbbreviationEntry],
}

impl Lexicon {
    /// The built-in tables. Loaded once; every call returns the same
    /// reference.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Exact lookup of a canonical drug by name (case-insensitive).
    pub fn find_drug(&self, canonical: &str) -> Option<&'static DrugEntry> {
        self.drugs
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(canonical))
    }

    /// Exact whole-token abbreviation lookup (case-insensitive).
    pub fn find_abbreviation(&self, token: &str) -> Option<&'static AbbreviationEntry> {
        self.abbreviations
            .iter()
            .find(|a| a.short.eq_ignore_ascii_case(token))
    }
}

static BUILTIN: Lexicon = Lexicon {
    drugs: DRUGS,
    abbreviations: ABBREVIATIONS,
};

use DrugClass::*;

static DRUGS: &[DrugEntry] = &[
    // Anticoagulants / antiplatelets
    DrugEntry { name: "warfarin", aliases: &["coumadin", "קומדין"], classes: &[Anticoagulant], acb_points: 1 },
    DrugEntry { name: "apixaban", aliases: &["eliquis", "אליקוויס"], classes: &[Anticoagulant], acb_points: 0 },
    DrugEntry { name: "rivaroxaban", aliases: &["xarelto", "קסרלטו"], classes: &[Anticoagulant], acb_points: 0 },
    DrugEntry { name: "dabigatran", aliases: &["pradaxa"], classes: &[Anticoagulant], acb_points: 0 },
    DrugEntry { name: "enoxaparin", aliases: &["clexane", "קלקסן"], classes: &[Anticoagulant], acb_points: 0 },
    DrugEntry { name: "aspirin", aliases: &["micropirin", "cartia", "אספירין", "מיקרופירין"], classes: &[Antiplatelet], acb_points: 0 },
    DrugEntry { name: "clopidogrel", aliases: &["plavix", "פלביקס"], classes: &[Antiplatelet], acb_points: 0 },
    // Analgesics / NSAIDs
    DrugEntry { name: "ibuprofen", aliases: &["nurofen", "advil", "אדויל", "נורופן"], classes: &[Nsaid], acb_points: 0 },
    DrugEntry { name: "naproxen", aliases: &["naxyn", "נקסין"], classes: &[Nsaid], acb_points: 0 },
    DrugEntry { name: "diclofenac", aliases: &["voltaren", "abitren", "וולטרן"], classes: &[Nsaid], acb_points: 0 },
    DrugEntry { name: "celecoxib", aliases: &["celebra"], classes: &[Nsaid], acb_points: 0 },
    DrugEntry { name: "etodolac", aliases: &["etopan", "אטופן"], classes: &[Nsaid], acb_points: 0 },
    DrugEntry { name: "paracetamol", aliases: &["acamol", "acetaminophen", "dexamol", "אקמול", "דקסמול"], classes: &[], acb_points: 0 },
    DrugEntry { name: "tramadol", aliases: &["tramadex", "טרמדקס"], classes: &[Opioid], acb_points: 0 },
    DrugEntry { name: "oxycodone", aliases: &["oxycod", "targin"], classes: &[Opioid], acb_points: 0 },
    DrugEntry { name: "morphine", aliases: &["oramorph"], classes: &[Opioid], acb_points: 0 },
    DrugEntry { name: "codeine", aliases: &[], classes: &[Opioid], acb_points: 1 },
    DrugEntry { name: "fentanyl", aliases: &["durogesic"], classes: &[Opioid], acb_points: 0 },
    // Diabetes
    DrugEntry { name: "metformin", aliases: &["glucophage", "glucomin", "מטפורמין"], classes: &[], acb_points: 0 },
    DrugEntry { name: "glibenclamide", aliases: &["glyburide", "gluben"], classes: &[Sulfonylurea], acb_points: 0 },
    // Cardiovascular
    DrugEntry { name: "lisinopril", aliases: &[], classes: &[AceInhibitor], acb_points: 0 },
    DrugEntry { name: "enalapril", aliases: &["enaladex", "אנלדקס"], classes: &[AceInhibitor], acb_points: 0 },
    DrugEntry { name: "ramipril", aliases: &["tritace", "טריטייס"], classes: &[AceInhibitor], acb_points: 0 },
    DrugEntry { name: "captopril", aliases: &[], classes: &[AceInhibitor], acb_points: 0 },
    DrugEntry { name: "losartan", aliases: &["ocsaar", "אוקסאר"], classes: &[Arb], acb_points: 0 },
    DrugEntry { name: "valsartan", aliases: &["diovan", "דיובן"], classes: &[Arb], acb_points: 0 },
    DrugEntry { name: "candesartan", aliases: &["atacand"], classes: &[Arb], acb_points: 0 },
    DrugEntry { name: "amlodipine", aliases: &["norvasc", "amlow", "נורבסק"], classes: &[], acb_points: 0 },
    DrugEntry { name: "furosemide", aliases: &["fusid", "פוסיד"], classes: &[Diuretic], acb_points: 1 },
    DrugEntry { name: "hydrochlorothiazide", aliases: &["disothiazide"], classes: &[Diuretic], acb_points: 0 },
    DrugEntry { name: "spironolactone", aliases: &["aldactone", "אלדקטון"], classes: &[Diuretic], acb_points: 0 },
    DrugEntry { name: "digoxin", aliases: &["lanoxin"], classes: &[], acb_points: 1 },
    DrugEntry { name: "bisoprolol", aliases: &["concor", "cardiloc", "קונקור"], classes: &[BetaBlocker], acb_points: 0 },
    DrugEntry { name: "metoprolol", aliases: &["neobloc", "lopresor"], classes: &[BetaBlocker], acb_points: 1 },
    DrugEntry { name: "atenolol", aliases: &["normiten", "נורמיטן"], classes: &[BetaBlocker], acb_points: 1 },
    DrugEntry { name: "carvedilol", aliases: &["dimitone"], classes: &[BetaBlocker], acb_points: 0 },
    DrugEntry { name: "amiodarone", aliases: &["procor", "פרוקור"], classes: &[], acb_points: 0 },
    DrugEntry { name: "atorvastatin", aliases: &["lipitor", "litorva", "ליפיטור"], classes: &[Statin], acb_points: 0 },
    DrugEntry { name: "simvastatin", aliases: &["simvacor", "סימבקור"], classes: &[Statin], acb_points: 0 },
    DrugEntry { name: "rosuvastatin", aliases: &["crestor", "קרסטור"], classes: &[Statin], acb_points: 0 },
    DrugEntry { name: "isosorbide dinitrate", aliases: &["isoket", "איזוקט"], classes: &[Nitrate], acb_points: 0 },
    DrugEntry { name: "nitroglycerin", aliases: &["nitroderm", "ניטרודרם"], classes: &[Nitrate], acb_points: 0 },
    // Gastrointestinal
    DrugEntry { name: "omeprazole", aliases: &["omepradex", "losec", "אומפרדקס"], classes: &[Ppi], acb_points: 0 },
    DrugEntry { name: "esomeprazole", aliases: &["nexium", "נקסיום"], classes: &[Ppi], acb_points: 0 },
    DrugEntry { name: "pantoprazole", aliases: &["controloc"], classes: &[Ppi], acb_points: 0 },
    // Sedative-hypnotics
    DrugEntry { name: "diazepam", aliases: &["valium", "assival", "אסיבל"], classes: &[Benzodiazepine], acb_points: 0 },
    DrugEntry { name: "lorazepam", aliases: &["lorivan", "לוריבן"], classes: &[Benzodiazepine], acb_points: 0 },
    DrugEntry { name: "clonazepam", aliases: &["clonex", "rivotril", "קלונקס"], classes: &[Benzodiazepine], acb_points: 0 },
    DrugEntry { name: "oxazepam", aliases: &["vaben", "ובן"], classes: &[Benzodiazepine], acb_points: 0 },
    DrugEntry { name: "brotizolam", aliases: &["bondormin", "בונדורמין"], classes: &[Benzodiazepine], acb_points: 0 },
    DrugEntry { name: "zolpidem", aliases: &["stilnox", "ambien", "סטילנוקס"], classes: &[ZDrug], acb_points: 0 },
    DrugEntry { name: "zopiclone", aliases: &["imovane", "nocturno", "אימובן"], classes: &[ZDrug], acb_points: 0 },
    // Antidepressants / antipsychotics
    DrugEntry { name: "amitriptyline", aliases: &["elatrol", "elatrolet", "אלטרול"], classes: &[Tca], acb_points: 3 },
    DrugEntry { name: "nortriptyline", aliases: &[], classes: &[Tca], acb_points: 3 },
    DrugEntry { name: "sertraline", aliases: &["lustral", "zoloft", "לוסטרל"], classes: &[Ssri], acb_points: 1 },
    DrugEntry { name: "escitalopram", aliases: &["cipralex", "ציפרלקס"], classes: &[Ssri], acb_points: 1 },
    DrugEntry { name: "citalopram", aliases: &["recital", "ריסיטל"], classes: &[Ssri], acb_points: 1 },
    DrugEntry { name: "fluoxetine", aliases: &["prozac", "פרוזק"], classes: &[Ssri], acb_points: 1 },
    DrugEntry { name: "paroxetine", aliases: &["seroxat", "paxxet"], classes: &[Ssri], acb_points: 3 },
    DrugEntry { name: "venlafaxine", aliases: &["efexor", "viepax", "אפקסור"], classes: &[], acb_points: 1 },
    DrugEntry { name: "mirtazapine", aliases: &["miro", "remeron", "מירו"], classes: &[], acb_points: 1 },
    DrugEntry { name: "trazodone", aliases: &["trazodil"], classes: &[], acb_points: 1 },
    DrugEntry { name: "lithium", aliases: &["licarbium"], classes: &[], acb_points: 0 },
    DrugEntry { name: "haloperidol", aliases: &["haldol"], classes: &[Antipsychotic], acb_points: 1 },
    DrugEntry { name: "risperidone", aliases: &["risperdal", "ריספרדל"], classes: &[Antipsychotic], acb_points: 1 },
    DrugEntry { name: "quetiapine", aliases: &["seroquel", "סרוקוול"], classes: &[Antipsychotic], acb_points: 3 },
    DrugEntry { name: "olanzapine", aliases: &["zyprexa", "זיפרקסה"], classes: &[Antipsychotic], acb_points: 3 },
    // Bladder antispasmodics
    DrugEntry { name: "oxybutynin", aliases: &["novitropan", "נוביטרופן"], classes: &[], acb_points: 3 },
    DrugEntry { name: "tolterodine", aliases: &["detrusitol"], classes: &[], acb_points: 3 },
    DrugEntry { name: "solifenacin", aliases: &["vesicare", "וסיקר"], classes: &[], acb_points: 3 },
    // Antihistamines
    DrugEntry { name: "diphenhydramine", aliases: &["benadryl"], classes: &[FirstGenAntihistamine], acb_points: 3 },
    DrugEntry { name: "hydroxyzine", aliases: &["otarex", "אוטרקס"], classes: &[FirstGenAntihistamine], acb_points: 3 },
    DrugEntry { name: "promethazine", aliases: &["phenergan", "פנרגן"], classes: &[FirstGenAntihistamine], acb_points: 3 },
    DrugEntry { name: "chlorpheniramine", aliases: &["ahiston", "אהיסטון"], classes: &[FirstGenAntihistamine], acb_points: 3 },
    DrugEntry { name: "loratadine", aliases: &["loratem", "לורסטין"], classes: &[Antihistamine], acb_points: 0 },
    // Endocrine / bone / miscellaneous
    DrugEntry { name: "levothyroxine", aliases: &["eltroxin", "euthyrox", "אלטרוקסין"], classes: &[], acb_points: 0 },
    DrugEntry { name: "prednisone", aliases: &[], classes: &[], acb_points: 1 },
    DrugEntry { name: "alendronate", aliases: &["fosalan", "fosamax", "פוסלן"], classes: &[Bisphosphonate], acb_points: 0 },
    DrugEntry { name: "risedronate", aliases: &["actonel"], classes: &[Bisphosphonate], acb_points: 0 },
    DrugEntry { name: "colchicine", aliases: &[], classes: &[], acb_points: 0 },
    DrugEntry { name: "allopurinol", aliases: &["zylol", "זילול"], classes: &[], acb_points: 0 },
    DrugEntry { name: "methotrexate", aliases: &[], classes: &[], acb_points: 0 },
    DrugEntry { name: "trimethoprim", aliases: &["resprim", "septrin", "bactrim", "רספרים"], classes: &[], acb_points: 0 },
    DrugEntry { name: "ciprofloxacin", aliases: &["cipro", "ציפרו"], classes: &[], acb_points: 0 },
    DrugEntry { name: "sildenafil", aliases: &["viagra", "tarim", "ויאגרה"], classes: &[], acb_points: 0 },
    DrugEntry { name: "donepezil", aliases: &["aricept", "memorit", "אריספט"], classes: &[], acb_points: 0 },
    DrugEntry { name: "memantine", aliases: &["ebixa", "ממנטין"], classes: &[], acb_points: 0 },
];

static ABBREVIATIONS: &[AbbreviationEntry] = &[
    AbbreviationEntry { short: "od", expansion: "once daily" },
    AbbreviationEntry { short: "qd", expansion: "once daily" },
    AbbreviationEntry { short: "bd", expansion: "twice daily" },
    AbbreviationEntry { short: "bid", expansion: "twice daily" },
    AbbreviationEntry { short: "tds", expansion: "three times daily" },
    AbbreviationEntry { short: "tid", expansion: "three times daily" },
    AbbreviationEntry { short: "qid", expansion: "four times daily" },
    AbbreviationEntry { short: "hs", expansion: "at bedtime" },
    AbbreviationEntry { short: "nocte", expansion: "at night" },
    AbbreviationEntry { short: "mane", expansion: "in the morning" },
    AbbreviationEntry { short: "prn", expansion: "as needed" },
    AbbreviationEntry { short: "stat", expansion: "immediately" },
    AbbreviationEntry { short: "po", expansion: "by mouth" },
    AbbreviationEntry { short: "sl", expansion: "sublingual" },
    AbbreviationEntry { short: "sc", expansion: "subcutaneous" },
    AbbreviationEntry { short: "im", expansion: "intramuscular" },
    AbbreviationEntry { short: "iv", expansion: "intravenous" },
    AbbreviationEntry { short: "ac", expansion: "before meals" },
    AbbreviationEntry { short: "pc", expansion: "after meals" },
    AbbreviationEntry { short: "htn", expansion: "hypertension" },
    AbbreviationEntry { short: "dm", expansion: "diabetes mellitus" },
    AbbreviationEntry { short: "chf", expansion: "congestive heart failure" },
    AbbreviationEntry { short: "af", expansion: "atrial fibrillation" },
    AbbreviationEntry { short: "ckd", expansion: "chronic kidney disease" },
    AbbreviationEntry { short: "copd", expansion: "chronic obstructive pulmonary disease" },
    AbbreviationEntry { short: "uti", expansion: "urinary tract infection" },
    AbbreviationEntry { short: "cva", expansion: "stroke" },
    AbbreviationEntry { short: "tia", expansion: "transient ischemic attack" },
    AbbreviationEntry { short: "mi", expansion: "myocardial infarction" },
    AbbreviationEntry { short: "bph", expansion: "benign prostatic hyperplasia" },
    AbbreviationEntry { short: "gerd", expansion: "gastroesophageal reflux disease" },
    AbbreviationEntry { short: "adl", expansion: "activities of daily living" },
];
