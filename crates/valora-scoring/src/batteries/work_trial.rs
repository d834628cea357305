use valora_core::models::category::CategoryConfig;

use crate::baremo::Baremo;
use crate::{Battery, ScoringMethod};

/// Risk conditions of the work trial (prueba de trabajo) form.
/// 33 conditions in 7 dimensions, numbered 1–33 across the form. Each
/// condition scores frequency + exposure + intensity (0–21).
pub struct WorkTrial;

/// Cut points per dimension: sin riesgo, bajo, medio, alto, muy alto.
const BAREMOS: &[(&str, Baremo)] = &[
    ("demandas_cuantitativas", Baremo::new(12.6, 25.3, 38.0, 50.6, 63.0)),
    ("demandas_carga_mental", Baremo::new(21.0, 42.0, 63.0, 84.0, 105.0)),
    ("demandas_emocionales", Baremo::new(12.6, 25.3, 38.0, 50.6, 63.0)),
    ("exigencias_responsabilidad", Baremo::new(25.2, 50.4, 75.6, 100.8, 126.0)),
    ("consistencia_rol", Baremo::new(16.8, 33.6, 50.4, 67.2, 84.0)),
    ("demandas_ambientales", Baremo::new(42.0, 84.0, 126.0, 168.0, 210.0)),
    ("demandas_jornada", Baremo::new(8.4, 16.8, 25.2, 33.6, 42.0)),
];

impl Battery for WorkTrial {
    fn id(&self) -> &str {
        "prueba_trabajo"
    }

    fn name(&self) -> &str {
        "Prueba de Trabajo"
    }

    fn method(&self) -> ScoringMethod {
        ScoringMethod::Baremo
    }

    fn baremo(&self, key: &str) -> Option<Baremo> {
        BAREMOS
            .iter()
            .find(|(dimension, _)| *dimension == key)
            .map(|(_, baremo)| *baremo)
    }

    fn categories(&self) -> &[CategoryConfig] {
        static CATEGORIES: std::sync::LazyLock<Vec<CategoryConfig>> =
            std::sync::LazyLock::new(|| {
                let dimensions: [(&str, &str, &[&str]); 7] = [
                    (
                        "demandas_cuantitativas",
                        "Demandas Cuantitativas de Trabajo",
                        &[
                            "Ritmo de trabajo acelerado o bajo presión de tiempo",
                            "Imposibilidad de hacer pausas dentro de la jornada",
                            "Tiempo adicional para cumplir con el trabajo asignado",
                        ],
                    ),
                    (
                        "demandas_carga_mental",
                        "Demandas de Carga Mental",
                        &[
                            "Exigencia de memoria, atención y concentración",
                            "Exigencia de altos niveles de detalle o precisión",
                            "Elevada cantidad de información que se usa bajo presión de tiempo",
                            "Elevada cantidad de información que se usa de forma simultánea",
                            "La información necesaria para realizar el trabajo es compleja",
                        ],
                    ),
                    (
                        "demandas_emocionales",
                        "Demandas emocionales",
                        &[
                            "Exposición a sentimientos, emociones y trato negativo de usuarios o clientes",
                            "Exposición a situaciones emocionalmente devastadoras",
                            "Requerimiento de ocultar o simular emociones o sentimientos",
                        ],
                    ),
                    (
                        "exigencias_responsabilidad",
                        "Exigencias de Responsabilidad del Cargo",
                        &[
                            "Responsabilidad directa por la vida, salud o seguridad de otras personas",
                            "Responsabilidad directa por supervisión de personal",
                            "Responsabilidad directa por resultados del área de trabajo",
                            "Responsabilidad directa por bienes de elevada cuantía",
                            "Responsabilidad directa por dinero de la organización",
                            "Responsabilidad directa por información confidencial",
                        ],
                    ),
                    (
                        "consistencia_rol",
                        "Consistencia de Rol",
                        &[
                            "Falta de recursos, personas o herramientas necesarias para desarrollar el trabajo",
                            "Órdenes contradictorias provenientes de una o varias personas",
                            "Solicitudes o requerimientos innecesarios en el trabajo",
                            "Solicitudes o requerimientos que van en contra de principios éticos, técnicos, de seguridad o de calidad o servicio del producto",
                        ],
                    ),
                    (
                        "demandas_ambientales",
                        "Demandas Ambientales y de Esfuerzo Físico",
                        &[
                            "Ruido que afecta negativamente",
                            "Iluminación que afecta negativamente",
                            "Temperatura que afecta negativamente",
                            "Condiciones de Ventilación que afecten negativamente",
                            "Distribución y características del puesto, equipos o herramientas que afectan negativamente",
                            "Condiciones de orden y aseo que afecten negativamente",
                            "Preocupación por exposición a agentes biológicos",
                            "Preocupación por exposición a agentes químicos",
                            "Preocupación ante la posibilidad de sufrir un accidente de trabajo",
                            "Exigencias de esfuerzo físico que afectan negativamente",
                        ],
                    ),
                    (
                        "demandas_jornada",
                        "Demandas de la Jornada de Trabajo",
                        &[
                            "Trabajo en horario nocturno",
                            "Días de trabajo consecutivo sin descanso",
                        ],
                    ),
                ];

                dimensions
                    .iter()
                    .map(|(key, title, items)| CategoryConfig::new(key, title, items))
                    .collect()
            });
        &CATEGORIES
    }
}
