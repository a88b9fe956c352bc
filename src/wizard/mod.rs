mod branch;
mod buttons;
mod card;
mod card_container;
mod memory_container;
mod sequence;
mod validation;
mod wizard;
mod wizard_definition;

pub use branch::BranchResolver;
pub use buttons::{ButtonStates, WizardButton};
pub use card::{BranchRule, Card, CardIndex, FieldDecl, FieldValues};
pub use card_container::CardContainer;
pub use memory_container::MemoryCardContainer;
pub use sequence::{CardSequence, NavigationState};
pub use validation::ValidationGate;
pub use wizard::{
    CancelHandler, SubmitHandler, Wizard, INCOMPLETE_CARD_MESSAGE, INCOMPLETE_CARD_TITLE,
    SHOW_NOTICE_TITLE,
};
pub use wizard_definition::{CardDefinition, FieldDefinition, SequenceControl, WizardDefinition};
