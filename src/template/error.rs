use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Can't read the template file.")]
    CantReadTemplateFile(std::io::Error),
    #[error("The template doesn't compile [error: {0}]")]
    InvalidTemplate(tera::Error),
    #[error("The message can't be rendered for this recipient [error: {0}]")]
    CantRenderMessage(tera::Error),
}
