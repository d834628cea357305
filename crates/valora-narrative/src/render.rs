use tera::{Context, Tera};

use valora_core::models::category::CategoryAggregate;
use valora_core::models::profile::OverallRiskProfile;
use valora_core::models::subject::Subject;
use valora_scoring::synthesize::synthesize_overall;

use crate::error::NarrativeError;
use crate::gender::Referents;
use crate::sections::{
    ConceptContext, RecommendationContext, EMPLOYER_RECOMMENDATIONS, SECTIONS,
    WORKER_RECOMMENDATIONS, WORKLOAD_MARKERS,
};

/// One rendered block of the concept, separator included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub name: &'static str,
    pub text: String,
}

/// Generate the psychological concept for an already synthesized profile.
///
/// Degenerate input (nothing evaluated, no name, no diagnosis) still
/// renders; errors only come from the template engine itself.
pub fn generate_concept(
    profile: &OverallRiskProfile,
    subject: &Subject,
) -> Result<String, NarrativeError> {
    let concept: String = render_sections(profile, subject)?
        .into_iter()
        .map(|section| section.text)
        .collect();
    tracing::debug!(chars = concept.chars().count(), "generated concept");
    Ok(concept)
}

/// Synthesize the overall profile from category aggregates, then generate
/// the concept for it.
pub fn generate_concept_from_aggregates(
    aggregates: &[CategoryAggregate],
    subject: &Subject,
) -> Result<String, NarrativeError> {
    generate_concept(&synthesize_overall(aggregates), subject)
}

/// Render every applicable section, in order.
pub fn render_sections(
    profile: &OverallRiskProfile,
    subject: &Subject,
) -> Result<Vec<RenderedSection>, NarrativeError> {
    let tera = build_engine()?;
    let referents = Referents::for_subject(subject);
    let workload_high_risk = workload_at_high_risk(profile);

    let item_context = Context::from_serialize(RecommendationContext {
        referents: &referents,
        workload_high_risk,
    })?;
    let worker_recommendations = render_items(&tera, WORKER_RECOMMENDATIONS, &item_context)?;
    let employer_recommendations = render_items(&tera, EMPLOYER_RECOMMENDATIONS, &item_context)?;

    let context = ConceptContext {
        referents: &referents,
        diagnosis: subject.diagnosis(),
        level: profile.level.as_str().to_uppercase(),
        average: format!("{:.2}", profile.overall_average),
        high_risk: &profile.high_risk_categories,
        medium_risk: &profile.medium_risk_categories,
        workload_high_risk,
        worker_recommendations,
        employer_recommendations,
    };
    let tera_context = Context::from_serialize(&context)?;

    SECTIONS
        .iter()
        .filter(|section| (section.applies)(&context))
        .map(|section| -> Result<RenderedSection, NarrativeError> {
            let mut text = tera.render(section.name, &tera_context)?;
            text.push_str(section.suffix);
            Ok(RenderedSection {
                name: section.name,
                text,
            })
        })
        .collect()
}

/// Whether any high-risk category title names a workload dimension.
/// Case-sensitive, so upper-cased titles do not match.
pub fn workload_at_high_risk(profile: &OverallRiskProfile) -> bool {
    profile
        .high_risk_categories
        .iter()
        .any(|title| WORKLOAD_MARKERS.iter().any(|marker| title.contains(marker)))
}

fn build_engine() -> Result<Tera, NarrativeError> {
    let templates = SECTIONS
        .iter()
        .map(|section| (section.name, section.template))
        .chain(WORKER_RECOMMENDATIONS.iter().copied())
        .chain(EMPLOYER_RECOMMENDATIONS.iter().copied());

    let mut tera = Tera::default();
    tera.add_raw_templates(templates)
        .map_err(|e| NarrativeError::TemplateParse(e.to_string()))?;
    Ok(tera)
}

fn render_items(
    tera: &Tera,
    items: &[(&'static str, &'static str)],
    context: &Context,
) -> Result<Vec<String>, NarrativeError> {
    let rendered = items
        .iter()
        .map(|(name, _)| tera.render(name, context))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered)
}
