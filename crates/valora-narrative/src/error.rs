use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),
}

impl From<tera::Error> for NarrativeError {
    fn from(e: tera::Error) -> Self {
        NarrativeError::TemplateRender(e.to_string())
    }
}
