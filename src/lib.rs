pub mod config_location;
pub mod console;
pub mod errors;
pub mod wizard;

pub use errors::{DefinitionError, Result, WizardError};
pub use wizard::{
    Card, CardContainer, CardIndex, FieldValues, MemoryCardContainer, Wizard, WizardButton,
    WizardDefinition,
};

#[cfg(feature = "ui")]
pub mod ui;
