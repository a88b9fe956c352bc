use log::{debug, error, info, warn};

use super::branch::BranchResolver;
use super::buttons::{ButtonStates, WizardButton};
use super::card::{Card, CardIndex, FieldValues};
use super::card_container::CardContainer;
use super::sequence::{CardSequence, NavigationState};
use super::validation::ValidationGate;
use crate::errors::{Result, WizardError};

pub const INCOMPLETE_CARD_TITLE: &str = "Error";
pub const INCOMPLETE_CARD_MESSAGE: &str =
    "Please answer all questions on the form correctly before continuing.";
pub const SHOW_NOTICE_TITLE: &str = "Alert";

pub type SubmitHandler = Box<dyn FnMut(&FieldValues)>;
pub type CancelHandler = Box<dyn FnMut()>;

///
/// This is responsible for moving between cards in proper order:
/// validation before going forward, branching on answers,
/// going back the same way we came, and keeping buttons in sync
///
pub struct Wizard<C: CardContainer> {
    cards: Vec<Card>,
    initial_index: CardIndex,
    sequence: CardSequence,
    buttons: ButtonStates,
    container: C,
    submit_handler: Option<SubmitHandler>,
    cancel_handler: Option<CancelHandler>,
}

impl<C: CardContainer> Wizard<C> {
    ///
    /// create wizard and show the initial card.
    /// card indices are (re)assigned from their position in the list
    pub fn new(mut cards: Vec<Card>, initial_index: CardIndex, container: C) -> Result<Self> {
        if initial_index >= cards.len() {
            return Err(WizardError::TargetOutOfRange {
                target: initial_index,
                card_count: cards.len(),
            });
        }
        for (i, card) in cards.iter_mut().enumerate() {
            card.index = i;
        }

        let mut wizard = Wizard {
            buttons: ButtonStates::derive(initial_index, cards.len(), false),
            cards,
            initial_index,
            sequence: CardSequence::new(initial_index),
            container,
            submit_handler: None,
            cancel_handler: None,
        };
        wizard.container.set_button_visible(WizardButton::Submit, false);
        wizard.container.set_button_visible(WizardButton::Cancel, false);
        wizard.activate(initial_index);
        debug!(
            "wizard created with {} cards, starting at {}",
            wizard.cards.len(),
            initial_index
        );
        Ok(wizard)
    }

    pub fn with_submit_handler(mut self, handler: impl FnMut(&FieldValues) + 'static) -> Self {
        self.set_submit_handler(handler);
        self
    }

    pub fn with_cancel_handler(mut self, handler: impl FnMut() + 'static) -> Self {
        self.set_cancel_handler(handler);
        self
    }

    /// Submit button is shown only once there is a handler for it
    pub fn set_submit_handler(&mut self, handler: impl FnMut(&FieldValues) + 'static) {
        self.submit_handler = Some(Box::new(handler));
        self.container.set_button_visible(WizardButton::Submit, true);
    }

    pub fn set_cancel_handler(&mut self, handler: impl FnMut() + 'static) {
        self.cancel_handler = Some(Box::new(handler));
        self.container.set_button_visible(WizardButton::Cancel, true);
    }

    pub fn current_index(&self) -> CardIndex {
        self.sequence.peek_current_index()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current_index())
    }

    pub fn initial_index(&self) -> CardIndex {
        self.initial_index
    }

    pub fn navigation_state(&self) -> &NavigationState {
        self.sequence.state()
    }

    pub fn history(&self) -> &[CardIndex] {
        self.sequence.history()
    }

    pub fn button_states(&self) -> ButtonStates {
        self.buttons
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    ///
    /// move forward.
    /// form cards must be fully answered, and their answers may redirect
    /// the move to another card. on failure nothing changes and the user
    /// is notified through the container
    pub fn advance(&mut self) -> Result<CardIndex> {
        let current = self.sequence.peek_current_index();
        self.check_container_agrees(current);
        let card = self.cards.get(current).ok_or(WizardError::TargetOutOfRange {
            target: current,
            card_count: self.cards.len(),
        })?;

        let mut override_target = None;
        if card.is_form() {
            let values = self.container.field_values(current);
            let structurally_valid = self.container.is_card_structurally_valid(current);
            if !ValidationGate::is_card_complete(card, &values, structurally_valid) {
                let missing = ValidationGate::missing_fields(card, &values);
                warn!(
                    "advance from card {} blocked, missing: {:?}, structurally valid: {}",
                    current, missing, structurally_valid
                );
                self.container
                    .show_notice(INCOMPLETE_CARD_TITLE, INCOMPLETE_CARD_MESSAGE);
                return Err(WizardError::IncompleteCard {
                    index: current,
                    missing,
                });
            }
            override_target = BranchResolver::resolve(card, &values);
        }

        let candidate = override_target.unwrap_or(current + 1);
        if candidate >= self.cards.len() {
            error!(
                "advance from card {} would go to card {}, but there are only {} cards",
                current,
                candidate,
                self.cards.len()
            );
            return Err(WizardError::TargetOutOfRange {
                target: candidate,
                card_count: self.cards.len(),
            });
        }

        let target = self.sequence.compute_advance_target(override_target);
        self.sequence.commit(target);
        debug!(
            "advance {} -> {}{}, history {:?}",
            current,
            target,
            if override_target.is_some() { " (branch)" } else { "" },
            self.sequence.history()
        );
        self.activate(target);
        Ok(target)
    }

    ///
    /// move back to the card we came from.
    /// answers on the card being left are discarded
    pub fn retreat(&mut self) -> Result<CardIndex> {
        if !self.sequence.has_history() {
            // Prev should have been disabled
            error!(
                "retreat requested on card {} with empty history",
                self.sequence.peek_current_index()
            );
            return Err(WizardError::EmptyHistory);
        }
        let current = self.sequence.peek_current_index();
        self.check_container_agrees(current);

        if self.cards.get(current).map_or(false, |c| c.is_form()) {
            self.container.reset_card_fields(current);
        }

        let target = self.sequence.compute_retreat_target()?;
        self.sequence.commit(target);
        debug!(
            "retreat {} -> {}, history {:?}",
            current,
            target,
            self.sequence.history()
        );
        self.activate(target);
        Ok(target)
    }

    ///
    /// go back to the initial card and forget history.
    /// if clear_all_card_values - answers on all rendered cards are cleared too,
    /// otherwise they are kept as they are
    pub fn reset(&mut self, clear_all_card_values: bool) {
        self.sequence.reset_to_initial(self.initial_index);
        if clear_all_card_values {
            for card in self.cards.iter().filter(|c| c.is_form()) {
                if self.container.is_card_rendered(card.index) {
                    self.container.reset_card_fields(card.index);
                }
            }
        }
        info!(
            "wizard reset to card {}{}",
            self.initial_index,
            if clear_all_card_values { ", all answers cleared" } else { "" }
        );
        self.activate(self.initial_index);
    }

    ///
    /// gather answers of all rendered form cards, in card order.
    /// if the same field appears on several cards - the later card wins.
    /// None if container does not exist yet
    pub fn collect_all_values(&self) -> Option<FieldValues> {
        if !self.container.is_mounted() {
            return None;
        }
        let mut values = FieldValues::new();
        for card in self.cards.iter().filter(|c| c.is_form()) {
            if self.container.is_card_rendered(card.index) {
                values.extend(self.container.field_values(card.index));
            }
        }
        Some(values)
    }

    ///
    /// hand collected answers to the submit handler.
    /// navigation state is not touched
    pub fn submit(&mut self) -> Result<FieldValues> {
        if self.submit_handler.is_none() {
            return Err(WizardError::NoHandler(WizardButton::Submit));
        }
        if !self.buttons.submit {
            return Err(WizardError::SubmitUnavailable {
                index: self.current_index(),
            });
        }
        let values = self.collect_all_values().unwrap_or_default();
        info!("submitting {} answers", values.len());
        if let Some(handler) = self.submit_handler.as_mut() {
            handler(&values);
        }
        Ok(values)
    }

    pub fn cancel(&mut self) -> Result<()> {
        match self.cancel_handler.as_mut() {
            Some(handler) => {
                info!("wizard cancelled on card {}", self.sequence.peek_current_index());
                handler();
                Ok(())
            }
            None => Err(WizardError::NoHandler(WizardButton::Cancel)),
        }
    }

    fn activate(&mut self, index: CardIndex) {
        self.container.render_and_activate(index);

        self.buttons =
            ButtonStates::derive(index, self.cards.len(), self.sequence.has_history());
        for (button, enabled) in self.buttons.pairs() {
            self.container.set_button_state(button, enabled);
        }

        if let Some(notice) = self.cards.get(index).and_then(|c| c.notice_on_show.as_deref()) {
            self.container.show_notice(SHOW_NOTICE_TITLE, notice);
        }
    }

    fn check_container_agrees(&self, current: CardIndex) {
        let shown = self.container.active_card_index();
        if shown != current {
            warn!(
                "container shows card {} while wizard is on card {}",
                shown, current
            );
        }
    }
}
