use pretty_assertions::assert_eq;
use valora_core::models::category::CategoryConfig;
use valora_core::models::item::{Ratings, RiskItem};
use valora_core::models::rating::RiskRating;
use valora_core::models::work_trial::{ConditionScore, ConditionScores, ExpertLevels, WorkTrialLevel};
use valora_narrative::summary::{render_summary, render_work_trial_summary};
use valora_scoring::aggregate::aggregate_all;
use valora_scoring::baremo::{concordance, score_dimensions};
use valora_scoring::get_battery;
use valora_scoring::synthesize::synthesize_overall;

fn categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("rol", "Consistencia de Rol", &["r1", "r2", "r3"]),
        CategoryConfig::new("carga", "Demandas de Carga Mental", &["c1", "c2"]),
        CategoryConfig::new("jornada", "Demandas de la Jornada de Trabajo", &["j1", "j2"]),
    ]
}

#[test]
fn summarises_every_category_and_partition() {
    let ratings: Ratings = [
        ("r1", RiskRating::Low),
        ("r2", RiskRating::Low),
        ("r3", RiskRating::Medium),
        ("c1", RiskRating::High),
        ("c2", RiskRating::High),
    ]
    .into_iter()
    .map(|(id, rating)| (id.to_string(), RiskItem::rated(rating)))
    .collect();

    let aggregates = aggregate_all(&ratings, &categories());
    let profile = synthesize_overall(&aggregates);

    assert_eq!(
        render_summary(&aggregates, &profile),
        "Nivel de riesgo general: MEDIO (2.17/3.0)\n\
\n\
Promedios por categoría:\n\
- Consistencia de Rol: 1.33 [BAJO] (3 de 3 items evaluados)\n\
- Demandas de Carga Mental: 3.00 [ALTO] (2 de 2 items evaluados)\n\
- Demandas de la Jornada de Trabajo: - [N/A] (0 de 2 items evaluados)\n\
\n\
Alto riesgo: Demandas de Carga Mental\n\
Bajo riesgo: Consistencia de Rol\n"
    );
}

#[test]
fn nothing_evaluated_reads_as_unevaluated() {
    let aggregates = aggregate_all(&Ratings::new(), &categories());
    let profile = synthesize_overall(&aggregates);

    let summary = render_summary(&aggregates, &profile);
    assert!(summary.starts_with("Nivel de riesgo general: SIN EVALUAR (0.00/3.0)\n"));
    assert!(summary.ends_with("- Demandas de la Jornada de Trabajo: - [N/A] (0 de 2 items evaluados)\n"));
}

#[test]
fn work_trial_summary_lists_levels_and_concordance() {
    let battery = get_battery("prueba_trabajo").unwrap();
    let scores: ConditionScores = [
        ("Trabajo en horario nocturno", ConditionScore::new(7, 7, 7)),
        ("Días de trabajo consecutivo sin descanso", ConditionScore::new(7, 6, 6)),
    ]
    .into_iter()
    .map(|(condition, score)| (condition.to_string(), score))
    .collect();
    let expert: ExpertLevels = [
        ("demandas_jornada".to_string(), WorkTrialLevel::High),
        ("consistencia_rol".to_string(), WorkTrialLevel::NoRisk),
    ]
    .into_iter()
    .collect();

    let dimensions = score_dimensions(battery.as_ref(), &scores, &expert).unwrap();
    let summary = render_work_trial_summary(&dimensions, &concordance(&dimensions));

    assert!(summary.starts_with(
        "Puntuación por dimensión:\n\
- Demandas Cuantitativas de Trabajo: 0 [SIN RIESGO] (0 de 3 condiciones calificadas)\n"
    ));
    assert!(summary.contains(
        "- Consistencia de Rol: 0 [SIN RIESGO] (0 de 4 condiciones calificadas) experto: SIN RIESGO\n"
    ));
    assert!(summary.ends_with(
        "- Demandas de la Jornada de Trabajo: 40 [RIESGO MUY ALTO] (2 de 2 condiciones calificadas) experto: RIESGO ALTO\n\
\n\
Concordancia: Consistencia de Rol\n\
No concordancia: Demandas de la Jornada de Trabajo\n"
    ));
}
