//! Raw-form-value adapter: the only place untyped form input becomes
//! typed answer records.
//!
//! Form values arrive as whatever the UI submitted — numbers, numeric
//! strings, booleans. A present-but-malformed value coerces to 0 (scoring
//! functions are total over bad input); an absent key stays unanswered.
//! The engine itself never sees raw values.

use serde_json::Value;

use saba_scales::answers::{
    AssessmentAnswers, BarthelAnswers, BradenAnswers, CamAnswers, CfsAnswers, Gds15Answers,
    IadlAnswers, MnaSfAnswers, MocaAnswers, TinettiAnswers,
};

/// Translate a raw `scale -> item -> value` object into typed answers.
pub fn adapt_answers(raw: &Value) -> AssessmentAnswers {
    let Some(map) = raw.as_object() else {
        return AssessmentAnswers::default();
    };

    AssessmentAnswers {
        moca: map.get("moca").map(adapt_moca),
        gds15: map.get("gds15").map(adapt_gds15),
        barthel: map.get("barthel").map(adapt_barthel),
        iadl: map.get("iadl").map(adapt_iadl),
        mna_sf: map.get("mna_sf").map(adapt_mna_sf),
        braden: map.get("braden").map(adapt_braden),
        cam: map.get("cam").map(adapt_cam),
        tinetti: map.get("tinetti").map(adapt_tinetti),
        cfs: map.get("cfs").map(adapt_cfs),
        surprise_question: map.get("surprise_question").map(coerce_bool),
    }
}

fn item(scale: &Value, key: &str) -> Option<f64> {
    scale.get(key).map(coerce_number)
}

fn bool_item(scale: &Value, key: &str) -> Option<bool> {
    scale.get(key).map(coerce_bool)
}

/// Coerce a present raw value to a number; anything non-numeric is 0.
fn coerce_number(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

fn coerce_bool(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::String(s) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1")
        }
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

fn adapt_moca(scale: &Value) -> MocaAnswers {
    MocaAnswers {
        visuospatial: item(scale, "visuospatial"),
        naming: item(scale, "naming"),
        attention: item(scale, "attention"),
        language: item(scale, "language"),
        abstraction: item(scale, "abstraction"),
        delayed_recall: item(scale, "delayed_recall"),
        orientation: item(scale, "orientation"),
    }
}

fn adapt_gds15(scale: &Value) -> Gds15Answers {
    Gds15Answers {
        satisfied_with_life: item(scale, "satisfied_with_life"),
        dropped_activities: item(scale, "dropped_activities"),
        life_feels_empty: item(scale, "life_feels_empty"),
        often_bored: item(scale, "often_bored"),
        good_spirits: item(scale, "good_spirits"),
        afraid_of_bad_things: item(scale, "afraid_of_bad_things"),
        happy_most_of_time: item(scale, "happy_most_of_time"),
        often_helpless: item(scale, "often_helpless"),
        prefers_to_stay_home: item(scale, "prefers_to_stay_home"),
        memory_problems: item(scale, "memory_problems"),
        wonderful_to_be_alive: item(scale, "wonderful_to_be_alive"),
        feels_worthless: item(scale, "feels_worthless"),
        full_of_energy: item(scale, "full_of_energy"),
        situation_hopeless: item(scale, "situation_hopeless"),
        others_better_off: item(scale, "others_better_off"),
    }
}

fn adapt_barthel(scale: &Value) -> BarthelAnswers {
    BarthelAnswers {
        feeding: item(scale, "feeding"),
        bathing: item(scale, "bathing"),
        grooming: item(scale, "grooming"),
        dressing: item(scale, "dressing"),
        bowels: item(scale, "bowels"),
        bladder: item(scale, "bladder"),
        toilet_use: item(scale, "toilet_use"),
        transfers: item(scale, "transfers"),
        mobility: item(scale, "mobility"),
        stairs: item(scale, "stairs"),
    }
}

fn adapt_iadl(scale: &Value) -> IadlAnswers {
    IadlAnswers {
        telephone: item(scale, "telephone"),
        shopping: item(scale, "shopping"),
        food_preparation: item(scale, "food_preparation"),
        housekeeping: item(scale, "housekeeping"),
        laundry: item(scale, "laundry"),
        transportation: item(scale, "transportation"),
        medications: item(scale, "medications"),
        finances: item(scale, "finances"),
    }
}

fn adapt_mna_sf(scale: &Value) -> MnaSfAnswers {
    MnaSfAnswers {
        food_intake_decline: item(scale, "food_intake_decline"),
        weight_loss: item(scale, "weight_loss"),
        mobility: item(scale, "mobility"),
        acute_stress: item(scale, "acute_stress"),
        neuropsychological: item(scale, "neuropsychological"),
        bmi_or_calf: item(scale, "bmi_or_calf"),
    }
}

fn adapt_braden(scale: &Value) -> BradenAnswers {
    BradenAnswers {
        sensory_perception: item(scale, "sensory_perception"),
        moisture: item(scale, "moisture"),
        activity: item(scale, "activity"),
        mobility: item(scale, "mobility"),
        nutrition: item(scale, "nutrition"),
        friction_shear: item(scale, "friction_shear"),
    }
}

fn adapt_cam(scale: &Value) -> CamAnswers {
    CamAnswers {
        acute_onset_fluctuating: bool_item(scale, "acute_onset_fluctuating"),
        inattention: bool_item(scale, "inattention"),
        disorganized_thinking: bool_item(scale, "disorganized_thinking"),
        altered_consciousness: bool_item(scale, "altered_consciousness"),
    }
}

fn adapt_tinetti(scale: &Value) -> TinettiAnswers {
    TinettiAnswers {
        balance: item(scale, "balance"),
        gait: item(scale, "gait"),
    }
}

fn adapt_cfs(scale: &Value) -> CfsAnswers {
    CfsAnswers {
        score: item(scale, "score"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_strings_coerce_to_numbers() {
        let answers = adapt_answers(&json!({"cfs": {"score": "6"}}));
        assert_eq!(answers.cfs.unwrap().score, Some(6.0));
    }

    #[test]
    fn malformed_values_coerce_to_zero() {
        let answers = adapt_answers(&json!({"cfs": {"score": "a lot"}}));
        assert_eq!(answers.cfs.unwrap().score, Some(0.0));
    }

    #[test]
    fn absent_items_stay_unanswered() {
        let answers = adapt_answers(&json!({"moca": {"naming": 2}}));
        let moca = answers.moca.unwrap();
        assert_eq!(moca.naming, Some(2.0));
        assert_eq!(moca.orientation, None);
        assert!(answers.barthel.is_none());
    }

    #[test]
    fn boolean_strings_adapt_for_cam() {
        let answers = adapt_answers(&json!({
            "cam": {"acute_onset_fluctuating": "yes", "inattention": true}
        }));
        let cam = answers.cam.unwrap();
        assert_eq!(cam.acute_onset_fluctuating, Some(true));
        assert_eq!(cam.inattention, Some(true));
        assert_eq!(cam.disorganized_thinking, None);
    }

    #[test]
    fn non_object_input_yields_empty_answers() {
        assert!(adapt_answers(&json!("nonsense")).is_empty());
        assert!(adapt_answers(&json!(null)).is_empty());
    }
}
