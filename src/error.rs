pub type SynthResult<T> = Result<T, SynthError>;

#[derive(thiserror::Error, Debug)]
pub enum SynthError {
    #[error("unknown difficulty tier: '{0}' (expected easy, medium, hard or insane)")]
    UnknownTier(String),

    #[error("font error: {0}")]
    Font(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SynthError {
    pub fn unknown_tier(name: impl Into<String>) -> Self {
        Self::UnknownTier(name.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}
