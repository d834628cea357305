use valora_core::models::category::CategoryConfig;

use crate::Battery;

/// Psychosocial risk factors of the psychological assessment form.
/// 43 items in 7 categories, each rated bajo/medio/alto. Item ids are the
/// item texts, which is how the form keys its ratings.
pub struct PsychologicalAssessment;

impl Battery for PsychologicalAssessment {
    fn id(&self) -> &str {
        "valoracion_psicologica"
    }

    fn name(&self) -> &str {
        "Valoración Psicológica"
    }

    fn categories(&self) -> &[CategoryConfig] {
        static CATEGORIES: std::sync::LazyLock<Vec<CategoryConfig>> =
            std::sync::LazyLock::new(|| {
                vec![
                    CategoryConfig::new(
                        "demandas_cuantitativas",
                        "DEMANDAS CUANTITATIVAS DEL TRABAJO",
                        &[
                            "Ritmo de trabajo acelerado o bajo presión de tiempo",
                            "Imposibilidad de hacer pausas dentro de la jornada",
                            "Tiempo adicional para cumplir con el trabajo asignado",
                            "Volumen de carga laboral",
                        ],
                    ),
                    CategoryConfig::new(
                        "demandas_carga_mental",
                        "Demandas de Carga Mental",
                        &[
                            "Exigencia de memoria, atención y concentración",
                            "Exigencia de altos niveles de detalle o precisión",
                            "Elevada cantidad de Información que se usa bajo presión de tiempo",
                            "Elevada cantidad de información que se usa de forma simultánea",
                            "La información necesaria para realizar el trabajo es compleja",
                            "Ejecución de tareas de alta carga cognitiva",
                            "Cantidad de tareas que exigen realización bajo presión de tiempo",
                            "Percepción de agotamiento al final de la jornada",
                        ],
                    ),
                    CategoryConfig::new(
                        "demandas_emocionales",
                        "Demandas Emocionales",
                        &[
                            "Exposición a sentimientos, emociones y trato negativo de usuarios o clientes",
                            "Exposición a situaciones emocionalmente devastadoras",
                            "Impacto emocional de la tarea en el ámbito extralaboral",
                            "Posibilidad de cometer errores dentro de la realización de la tarea que afecten el resultado de los procesos",
                            "Grado de tensión sobre la realización de la tarea",
                            "Percepción de monotonía o actividad repetitiva de la tarea",
                        ],
                    ),
                    CategoryConfig::new(
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
                    CategoryConfig::new(
                        "consistencia_rol",
                        "Consistencia de Rol",
                        &[
                            "Falta de recursos, personas o herramientas necesarias para desarrollar el trabajo",
                            "Órdenes contradictorias provenientes de una o varias personas",
                            "Solicitudes o requerimientos innecesarios en el trabajo",
                            "Solicitudes o requerimientos que van en contra de principios éticos, técnicos, de seguridad o de calidad o servicio del producto",
                            "Variación eventual o continua de la tarea asignada",
                            "Realización de tareas simultáneas",
                            "Las tareas exigen actualización de conocimientos de manera constante",
                        ],
                    ),
                    CategoryConfig::new(
                        "demandas_ambientales",
                        "Demandas Ambientales y de Esfuerzo Físico",
                        &[
                            "Ruido que afecta negativamente la calidad de la tarea",
                            "Iluminación que afecta negativamente la calidad de la tarea",
                            "Temperatura que afecta negativamente",
                            "Condiciones de Ventilación que afecten negativamente la calidad de la tarea",
                            "Distribución y características del puesto, equipos o herramientas que afectan negativamente la calidad de la tarea",
                            "Condiciones de orden y aseo que afecten negativamente la calidad de la tarea",
                            "Preocupación por exposición a agentes biológicos",
                            "Preocupación por exposición a agentes químicos",
                            "Exigencias de esfuerzo físico que afectan negativamente la calidad de la tarea",
                            "Preocupación ante la posibilidad de sufrir un accidente de trabajo",
                        ],
                    ),
                    CategoryConfig::new(
                        "demandas_jornada",
                        "Demandas de la Jornada de Trabajo",
                        &[
                            "Trabajo en horario nocturno",
                            "Días de trabajo consecutivo sin descanso",
                        ],
                    ),
                ]
            });
        &CATEGORIES
    }
}
