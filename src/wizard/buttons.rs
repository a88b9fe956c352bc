use super::card::CardIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardButton {
    Prev,
    Next,
    Submit,
    Cancel,
}

///
/// enabled state of navigation buttons, derived after every transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub prev: bool,
    pub next: bool,
    pub submit: bool,
}

impl ButtonStates {
    ///
    /// Prev is available anywhere but the first card, provided there is
    /// somewhere to go back to. the last card trades Next for Submit
    pub fn derive(index: CardIndex, card_count: usize, has_history: bool) -> Self {
        let is_last = index + 1 >= card_count;
        ButtonStates {
            prev: index != 0 && has_history,
            next: !is_last,
            submit: is_last,
        }
    }

    pub fn is_enabled(&self, button: WizardButton) -> bool {
        match button {
            WizardButton::Prev => self.prev,
            WizardButton::Next => self.next,
            WizardButton::Submit => self.submit,
            WizardButton::Cancel => true,
        }
    }

    /// (button, enabled) pairs in toolbar order
    pub fn pairs(&self) -> [(WizardButton, bool); 3] {
        [
            (WizardButton::Prev, self.prev),
            (WizardButton::Next, self.next),
            (WizardButton::Submit, self.submit),
        ]
    }
}
