//! Template table of the psychological concept.
//!
//! The concept is an ordered list of sections, each a Tera template plus
//! the separator that follows it. Recommendation items are separate
//! templates rendered first and numbered by their block. The wording is
//! fixed report content; edit it here only.

use serde::Serialize;

use crate::gender::Referents;

/// Values every section template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ConceptContext<'a> {
    pub referents: &'a Referents,
    pub diagnosis: Option<&'a str>,
    /// Overall level, upper-cased. Empty when nothing was evaluated.
    pub level: String,
    /// Overall average formatted `X.XX`.
    pub average: String,
    pub high_risk: &'a [String],
    pub medium_risk: &'a [String],
    pub workload_high_risk: bool,
    pub worker_recommendations: Vec<String>,
    pub employer_recommendations: Vec<String>,
}

/// Values every recommendation item template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationContext<'a> {
    pub referents: &'a Referents,
    pub workload_high_risk: bool,
}

/// One block of the concept.
pub struct Section {
    pub name: &'static str,
    pub template: &'static str,
    /// Appended after the rendered template.
    pub suffix: &'static str,
    pub applies: fn(&ConceptContext<'_>) -> bool,
}

fn always(_: &ConceptContext<'_>) -> bool {
    true
}

fn has_high_risk(context: &ConceptContext<'_>) -> bool {
    !context.high_risk.is_empty()
}

fn has_medium_risk(context: &ConceptContext<'_>) -> bool {
    !context.medium_risk.is_empty()
}

/// Sections in output order. Low-risk categories are never listed.
pub const SECTIONS: &[Section] = &[
    Section {
        name: "opening",
        template: "Una vez evaluada {{ referents.affiliate }} del asunto\
{% if diagnosis %}, quien presenta un diagnóstico de {{ diagnosis }}{% endif %}, \
nos permitimos manifestar las recomendaciones que a continuación se mencionan, \
las cuales se emiten con el objetivo de prevenir agravamiento de su estado de salud \
y favorecer su rehabilitación, lo anterior de conformidad con los artículos 2°, 4° \
y 8° de la Ley 776 de 2002.",
        suffix: "\n\n",
        applies: always,
    },
    Section {
        name: "risk_analysis",
        template: "ANÁLISIS DE FACTORES DE RIESGO PSICOSOCIAL:\n\n\
El análisis de los factores de riesgo psicosocial indica un nivel de riesgo \
{{ level }} general ({{ average }}/3.0).",
        suffix: "\n\n",
        applies: always,
    },
    Section {
        name: "high_risk",
        template: "Se identifican factores de ALTO RIESGO en:\n\
{% for category in high_risk %}- {{ category }}\n{% endfor %}",
        suffix: "\n",
        applies: has_high_risk,
    },
    Section {
        name: "medium_risk",
        template: "Se identifican factores de RIESGO MEDIO en:\n\
{% for category in medium_risk %}- {{ category }}\n{% endfor %}",
        suffix: "\n",
        applies: has_medium_risk,
    },
    Section {
        name: "worker_recommendations",
        template: "\nRECOMENDACIONES PARA {{ referents.worker_heading }}:\n\n\
{% for item in worker_recommendations %}{{ loop.index }}. {{ item }}\n\n{% endfor %}",
        suffix: "",
        applies: always,
    },
    Section {
        name: "employer_recommendations",
        template: "\nRECOMENDACIONES PARA LA EMPRESA:\n\n\
{% for item in employer_recommendations %}{{ loop.index }}. {{ item }}\n\n{% endfor %}",
        suffix: "",
        applies: always,
    },
    Section {
        name: "validity",
        template: "\nEstas recomendaciones tienen una vigencia de doce meses luego de la \
realización de las mismas.",
        suffix: "",
        applies: always,
    },
];

/// Recommendations addressed to the worker, in numbered order.
pub const WORKER_RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        "worker_treatment",
        "Continuar con el tratamiento por psiquiatría y psicología, siguiendo las \
indicaciones dadas de forma proactiva y comprometida con el proceso.",
    ),
    (
        "worker_disclosure",
        "Continuar facilitando la información clara, veraz y completa sobre su estado de \
salud a la organización de conformidad con lo dispuesto en el art 27 de la Ley 1562 de 2012.",
    ),
    (
        "worker_good_practices",
        "Mantenimiento de buenas prácticas laborales dispuestas por la organización que \
apoyan el desarrollo de la labor: cumplir el horario de trabajo asignado, participar en \
retroalimentaciones y/o reuniones del grupo de trabajo para estar al tanto de los cambios \
de la organización o bien para mejora del desempeño individual o grupal y mantener una \
actitud receptiva y propositiva frente a las oportunidades de mejora de su desempeño.",
    ),
    (
        "worker_commitment",
        "Mantener el compromiso y cumplimiento a las normas, responsabilidades, funciones y \
metas a corto plazo asignadas a su cargo por la organización.",
    ),
    (
        "worker_breaks",
        "Realizar pausas periódicas cortas, alternar tareas y cambiar de actividad en la \
medida en que sea posible, para contrarrestar el estatismo postural y la tensión muscular.",
    ),
    (
        "worker_support_network",
        "Se recomienda incrementar la interacción con las personas del grupo de trabajo o \
bien con grupos sociales externos a fin de fortalecer la red de apoyo social como factor \
protector.",
    ),
    (
        "worker_recreation",
        "Se sugiere {{ referents.to_worker }} incluir en su práctica diaria y/o semanal \
actividades deportivas, lúdicas y/o recreativas que favorezcan la liberación de emociones \
o tensiones y un estilo de vida saludable.",
    ),
];

/// Recommendations addressed to the employer, in numbered order.
pub const EMPLOYER_RECOMMENDATIONS: &[(&str, &str)] = &[
    (
        "employer_rehabilitation",
        "Participar del proceso de rehabilitación integral, informando {{ referents.to_worker }} \
por escrito de las recomendaciones médico-laborales que debe tener en cuenta, conforme a su \
capacidad laboral actual, con el fin de poder llevar a cabo el seguimiento del cumplimiento \
de estas.",
    ),
    (
        "employer_appointments",
        "Permitir los permisos para las citas y controles que el médico y psicóloga tratantes \
consideren necesarios.",
    ),
    (
        "employer_privacy",
        "Mantener la privacidad adecuada en el uso de información con respecto a la historia \
clínica {{ referents.of_patient }}.",
    ),
    (
        "employer_fair_treatment",
        "Se sugiere favorecer el buen trato y la no discriminación hacia {{ referents.worker }}, \
evitando la estigmatización y retroalimentando su desempeño de forma periódica y asertiva \
para favorecer el desarrollo y mejoramiento del trabajo.",
    ),
    (
        "employer_schedule",
        "{{ referents.worker_capitalized }} debe cumplir el horario establecido por su empresa. \
Se sugiere no asignar horas extras, horarios extendidos, turnos nocturnos o en fin de semana. \
Esto incluye no asignar trabajo fuera del horario laboral.",
    ),
    (
        "employer_workload",
        "Se sugiere a su jefe directo, evaluar la carga laboral\
{% if workload_high_risk %}, definir claramente las funciones {{ referents.of_worker }} acorde \
a sus capacidades y aptitudes, teniendo en cuenta la condición de salud \
{{ referents.of_patient }} y su capacidad laboral actual.\
{% else %} y definir claramente las funciones {{ referents.of_worker }} acorde a sus \
capacidades y aptitudes.{% endif %}",
    ),
    (
        "employer_stability",
        "Se recomienda dar estabilidad a los cargos asignados.",
    ),
    (
        "employer_feedback",
        "Retroalimentar periódicamente el desempeño {{ referents.of_worker }} de forma clara, \
oportuna y útil para favorecer el desarrollo y mejoramiento del trabajo.",
    ),
];

/// Title fragments that mark a high-risk category as workload related.
pub const WORKLOAD_MARKERS: &[&str] = &["Demandas", "Carga"];
