#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not a link: {0:?}")]
    NotALink(String),

    #[error("Invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}
