//! Gendered referring expressions for the report text.

use serde::Serialize;
use valora_core::models::subject::{Gender, Subject};

/// Legacy guess used when no gender is supplied: the name contains `"a "`.
///
/// Known to misclassify many names (any single given name, names such as
/// "Joshua Pérez"). Kept verbatim so reports match the ones already issued;
/// pending product review.
pub fn guess_from_name(name: &str) -> Gender {
    if name.contains("a ") {
        Gender::Feminine
    } else {
        Gender::Masculine
    }
}

/// The explicit gender, or the name heuristic when unspecified.
pub fn resolve(subject: &Subject) -> Gender {
    match subject.gender {
        Gender::Unspecified => {
            let guessed = guess_from_name(&subject.name);
            tracing::debug!(gender = %guessed, "gender not supplied, guessed from name");
            guessed
        }
        explicit => explicit,
    }
}

/// Every gendered phrase the concept templates substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Referents {
    /// "la afiliada" / "el afiliado"
    pub affiliate: &'static str,
    /// "LA TRABAJADORA" / "EL TRABAJADOR"
    pub worker_heading: &'static str,
    /// "La trabajadora" / "El trabajador"
    pub worker_capitalized: &'static str,
    /// "la trabajadora" / "el trabajador"
    pub worker: &'static str,
    /// "a la trabajadora" / "al trabajador"
    pub to_worker: &'static str,
    /// "de la trabajadora" / "del trabajador"
    pub of_worker: &'static str,
    /// "de la paciente" / "del paciente"
    pub of_patient: &'static str,
}

impl Referents {
    pub fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Feminine => Self {
                affiliate: "la afiliada",
                worker_heading: "LA TRABAJADORA",
                worker_capitalized: "La trabajadora",
                worker: "la trabajadora",
                to_worker: "a la trabajadora",
                of_worker: "de la trabajadora",
                of_patient: "de la paciente",
            },
            Gender::Masculine | Gender::Unspecified => Self {
                affiliate: "el afiliado",
                worker_heading: "EL TRABAJADOR",
                worker_capitalized: "El trabajador",
                worker: "el trabajador",
                to_worker: "al trabajador",
                of_worker: "del trabajador",
                of_patient: "del paciente",
            },
        }
    }

    pub fn for_subject(subject: &Subject) -> Self {
        Self::for_gender(resolve(subject))
    }
}
