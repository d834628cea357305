use pretty_assertions::assert_eq;
use valora_core::models::item::{RiskItem, Ratings};
use valora_core::models::rating::RiskRating;
use valora_core::models::subject::{Gender, Subject};
use valora_core::models::work_trial::{ConditionScore, ConditionScores, WorkTrialLevel};

#[test]
fn rating_labels_parse_case_insensitively() {
    assert_eq!(RiskRating::from_label("ALTO"), RiskRating::High);
    assert_eq!(RiskRating::from_label("Medio"), RiskRating::Medium);
    assert_eq!(RiskRating::from_label("bajo"), RiskRating::Low);
}

#[test]
fn unrecognised_labels_are_unrated() {
    assert_eq!(RiskRating::from_label(""), RiskRating::Unrated);
    assert_eq!(RiskRating::from_label("na"), RiskRating::Unrated);
    assert_eq!(RiskRating::from_label("severo"), RiskRating::Unrated);
}

#[test]
fn padded_labels_are_not_trimmed() {
    assert_eq!(RiskRating::from_label(" alto "), RiskRating::Unrated);
    assert_eq!(RiskRating::from_label("medio\n"), RiskRating::Unrated);

    let item: RiskItem = serde_json::from_str(r#"{ "calificacion": " alto" }"#).unwrap();
    assert_eq!(item.rating, RiskRating::Unrated);
}

#[test]
fn strict_parse_rejects_unknown_labels() {
    assert_eq!("high".parse::<RiskRating>().unwrap(), RiskRating::High);
    assert!("severo".parse::<RiskRating>().is_err());
}

#[test]
fn item_accepts_portal_field_names() {
    let json = r#"{
        "Trabajo en horario nocturno": { "calificacion": "alto", "observaciones": "turnos rotativos" },
        "Días de trabajo consecutivo sin descanso": { "rating": null },
        "Volumen de carga laboral": {}
    }"#;

    let ratings: Ratings = serde_json::from_str(json).unwrap();
    assert_eq!(
        ratings["Trabajo en horario nocturno"],
        RiskItem {
            rating: RiskRating::High,
            observations: "turnos rotativos".to_string(),
        }
    );
    assert_eq!(
        ratings["Días de trabajo consecutivo sin descanso"].rating,
        RiskRating::Unrated
    );
    assert_eq!(ratings["Volumen de carga laboral"].rating, RiskRating::Unrated);
}

#[test]
fn rating_serializes_as_spanish_label() {
    let item = RiskItem::rated(RiskRating::Medium);
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["rating"], "medio");

    let unrated = serde_json::to_value(RiskItem::default()).unwrap();
    assert_eq!(unrated["rating"], "");
}

#[test]
fn subject_defaults_to_unspecified_gender() {
    let subject: Subject = serde_json::from_str(r#"{ "nombre_trabajador": "Juan Pérez" }"#).unwrap();
    assert_eq!(subject.gender, Gender::Unspecified);
    assert_eq!(subject.diagnosis(), None);

    let with_empty = Subject::new("Juan Pérez").with_diagnosis("");
    assert_eq!(with_empty.diagnosis(), None);
}

#[test]
fn condition_scores_accept_portal_field_names() {
    let json = r#"{
        "Trabajo en horario nocturno": { "fr": 5, "exp": 4, "int": 3 },
        "Días de trabajo consecutivo sin descanso": { "fr": 2 }
    }"#;

    let scores: ConditionScores = serde_json::from_str(json).unwrap();
    assert_eq!(scores["Trabajo en horario nocturno"], ConditionScore::new(5, 4, 3));
    assert_eq!(scores["Trabajo en horario nocturno"].total(), Some(12));
    assert_eq!(scores["Días de trabajo consecutivo sin descanso"].total(), None);
}

#[test]
fn work_trial_levels_use_portal_values_and_report_labels() {
    let level: WorkTrialLevel = serde_json::from_str(r#""riesgo_muy_alto""#).unwrap();
    assert_eq!(level, WorkTrialLevel::VeryHigh);
    assert_eq!(level.to_string(), "RIESGO MUY ALTO");
    assert_eq!(
        serde_json::to_value(WorkTrialLevel::NoRisk).unwrap(),
        "sin_riesgo"
    );
    assert!(serde_json::from_str::<WorkTrialLevel>(r#""alto""#).is_err());
}
