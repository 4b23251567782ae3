//! # Framework Errors

/// Errors raised by the actor plumbing itself.
///
/// Entity failures travel through [`FrameworkError::EntityError`] untouched, so a typed
/// client can downcast them back to its own error enum.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recover the entity's own error type, if that is what this error carries.
    ///
    /// Anything else is handed to `fallback` as a message.
    pub fn into_entity_error<E>(self, fallback: impl FnOnce(String) -> E) -> E
    where
        E: std::error::Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => *typed,
                Err(other) => fallback(other.to_string()),
            },
            other => fallback(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum Sample {
        #[error("typed: {0}")]
        Typed(u32),
        #[error("comm: {0}")]
        Comm(String),
    }

    #[test]
    fn entity_error_downcasts_to_original_type() {
        let err = FrameworkError::EntityError(Box::new(Sample::Typed(7)));
        assert_eq!(err.into_entity_error(Sample::Comm), Sample::Typed(7));
    }

    #[test]
    fn plumbing_errors_fall_back_to_message() {
        let err = FrameworkError::NotFound("session_3".into());
        assert_eq!(
            err.into_entity_error(Sample::Comm),
            Sample::Comm("Item not found: session_3".into())
        );

        let foreign = FrameworkError::EntityError(Box::new(std::io::Error::other("disk")));
        assert_eq!(foreign.into_entity_error(Sample::Comm), Sample::Comm("disk".into()));
    }
}
