use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::{CardIndex, WizardButton};

pub type Result<T> = std::result::Result<T, WizardError>;

///
/// errors produced by wizard navigation.
///
/// `IncompleteCard`, `NoHandler` and `SubmitUnavailable` are ordinary
/// runtime conditions, the rest mean the embedding layer broke the
/// button gating contract
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("card {index} is not answered completely")]
    IncompleteCard {
        index: CardIndex,
        missing: Vec<String>,
    },

    #[error("retreat requested with empty navigation history")]
    EmptyHistory,

    #[error("target card {target} is outside of the wizard (0..{card_count})")]
    TargetOutOfRange {
        target: CardIndex,
        card_count: usize,
    },

    #[error("no handler configured for {0:?}")]
    NoHandler(WizardButton),

    #[error("submit is not available on card {index}")]
    SubmitUnavailable { index: CardIndex },
}

impl WizardError {
    /// true for invariant violations that must never be silently recovered from
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            WizardError::EmptyHistory | WizardError::TargetOutOfRange { .. }
        )
    }
}

///
/// errors produced while loading and checking a wizard definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read definition {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Syntax Error ({message})")]
    Syntax {
        message: String,
        span: Option<std::ops::Range<usize>>,
    },

    #[error("Schema Error: {0}")]
    Schema(String),

    #[error("failed to serialize definition: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl From<toml::de::Error> for DefinitionError {
    fn from(e: toml::de::Error) -> Self {
        DefinitionError::Syntax {
            message: e.message().to_string(),
            span: e.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatal_classification() {
        assert!(WizardError::EmptyHistory.is_fatal());
        assert!(WizardError::TargetOutOfRange {
            target: 9,
            card_count: 4
        }
        .is_fatal());
        assert!(!WizardError::IncompleteCard {
            index: 1,
            missing: vec!["opt01".to_owned()]
        }
        .is_fatal());
        assert!(!WizardError::NoHandler(WizardButton::Submit).is_fatal());
    }

    #[test]
    fn messages() {
        let e = WizardError::IncompleteCard {
            index: 2,
            missing: vec!["a".to_owned(), "b".to_owned()],
        };
        assert_eq!("card 2 is not answered completely", e.to_string());
        assert_eq!(
            "target card 7 is outside of the wizard (0..4)",
            WizardError::TargetOutOfRange {
                target: 7,
                card_count: 4
            }
            .to_string()
        );
    }
}
