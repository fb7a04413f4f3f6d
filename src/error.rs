pub type GridloopResult<T> = Result<T, GridloopError>;

#[derive(thiserror::Error, Debug)]
pub enum GridloopError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("scheduling error: {0}")]
    Scheduling(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GridloopError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    pub fn scheduling(msg: impl Into<String>) -> Self {
        Self::Scheduling(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            GridloopError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            GridloopError::animation("x")
                .to_string()
                .contains("animation error:")
        );
        assert!(
            GridloopError::scheduling("x")
                .to_string()
                .contains("scheduling error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GridloopError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
