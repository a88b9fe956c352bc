use super::buttons::WizardButton;
use super::card::{CardIndex, FieldValues};

///
/// everything the wizard needs from whatever displays the cards.
///
/// the wizard never looks at widgets, it only asks the container
/// to show a card, reads back answers and pushes button states
pub trait CardContainer {
    ///
    /// false until the root widget exists.
    /// value collection returns nothing while not mounted
    fn is_mounted(&self) -> bool {
        true
    }

    fn active_card_index(&self) -> CardIndex;

    ///
    /// build card widgets if not done yet, and make the card the visible one.
    /// must be safe to call for an already rendered card
    fn render_and_activate(&mut self, index: CardIndex);

    fn is_card_rendered(&self, index: CardIndex) -> bool;

    /// answers of a rendered card, empty for unrendered ones
    fn field_values(&self, index: CardIndex) -> FieldValues;

    fn is_card_structurally_valid(&self, index: CardIndex) -> bool;

    fn reset_card_fields(&mut self, index: CardIndex);

    fn set_button_state(&mut self, button: WizardButton, enabled: bool);

    fn set_button_visible(&mut self, button: WizardButton, visible: bool);

    /// show a message to the user, like validation failure
    fn show_notice(&mut self, title: &str, text: &str);
}
