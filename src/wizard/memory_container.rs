use std::collections::HashMap;

use super::buttons::WizardButton;
use super::card::{Card, CardIndex, FieldValues};
use super::card_container::CardContainer;

struct CardSlot {
    rendered: bool,
    render_count: usize,
    values: FieldValues,
}

///
/// headless card container.
/// keeps answers and button states in memory, used by the console
/// front-end and in tests
pub struct MemoryCardContainer {
    cards: Vec<Card>,
    slots: Vec<CardSlot>,
    active: CardIndex,
    mounted: bool,
    enabled: HashMap<WizardButton, bool>,
    visible: HashMap<WizardButton, bool>,
    notices: Vec<(String, String)>,
}

impl MemoryCardContainer {
    pub fn new(cards: &[Card]) -> Self {
        MemoryCardContainer {
            cards: cards.to_vec(),
            slots: cards
                .iter()
                .map(|_| CardSlot {
                    rendered: false,
                    render_count: 0,
                    values: FieldValues::new(),
                })
                .collect(),
            active: 0,
            mounted: true,
            enabled: HashMap::new(),
            visible: HashMap::new(),
            notices: Vec::new(),
        }
    }

    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }

    ///
    /// select an answer on a rendered card.
    /// returns false if card is not rendered yet - there is nothing to click on
    pub fn answer(&mut self, index: CardIndex, field: &str, value: &str) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.rendered => {
                slot.values.insert(field.to_owned(), value.to_owned());
                true
            }
            _ => false,
        }
    }

    pub fn clear_answer(&mut self, index: CardIndex, field: &str) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.values.remove(field);
        }
    }

    /// how many times the card was activated
    pub fn render_count(&self, index: CardIndex) -> usize {
        self.slots.get(index).map_or(0, |s| s.render_count)
    }

    ///
    /// buttons default to enabled and visible until told otherwise
    pub fn is_button_enabled(&self, button: WizardButton) -> bool {
        *self.enabled.get(&button).unwrap_or(&true)
    }

    pub fn is_button_visible(&self, button: WizardButton) -> bool {
        *self.visible.get(&button).unwrap_or(&true)
    }

    pub fn notices(&self) -> &[(String, String)] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<(String, String)> {
        std::mem::take(&mut self.notices)
    }
}

impl CardContainer for MemoryCardContainer {
    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn active_card_index(&self) -> CardIndex {
        self.active
    }

    fn render_and_activate(&mut self, index: CardIndex) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.rendered = true;
            slot.render_count += 1;
            self.active = index;
        }
    }

    fn is_card_rendered(&self, index: CardIndex) -> bool {
        self.slots.get(index).map_or(false, |s| s.rendered)
    }

    fn field_values(&self, index: CardIndex) -> FieldValues {
        match self.slots.get(index) {
            Some(slot) if slot.rendered => slot.values.clone(),
            _ => FieldValues::new(),
        }
    }

    fn is_card_structurally_valid(&self, index: CardIndex) -> bool {
        let (card, slot) = match (self.cards.get(index), self.slots.get(index)) {
            (Some(card), Some(slot)) => (card, slot),
            _ => return false,
        };
        slot.values
            .iter()
            .all(|(name, value)| card.field(name).map_or(false, |f| f.has_option(value)))
    }

    fn reset_card_fields(&mut self, index: CardIndex) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.values.clear();
        }
    }

    fn set_button_state(&mut self, button: WizardButton, enabled: bool) {
        self.enabled.insert(button, enabled);
    }

    fn set_button_visible(&mut self, button: WizardButton, visible: bool) {
        self.visible.insert(button, visible);
    }

    fn show_notice(&mut self, title: &str, text: &str) {
        self.notices.push((title.to_owned(), text.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::super::card::FieldDecl;
    use super::*;

    fn cards() -> Vec<Card> {
        vec![
            Card::info(0, "hello"),
            Card::form(1, vec![FieldDecl::new("opt", &["Yes", "No"])]),
        ]
    }

    #[test]
    fn answers_need_rendered_card() {
        let mut c = MemoryCardContainer::new(&cards());
        assert!(!c.answer(1, "opt", "Yes"));
        assert!(c.field_values(1).is_empty());

        c.render_and_activate(1);
        assert!(c.answer(1, "opt", "Yes"));
        assert_eq!(Some(&"Yes".to_owned()), c.field_values(1).get("opt"));
        assert_eq!(1, c.active_card_index());
    }

    #[test]
    fn structural_validity() {
        let mut c = MemoryCardContainer::new(&cards());
        c.render_and_activate(1);
        assert!(c.is_card_structurally_valid(1));

        c.answer(1, "opt", "Perhaps");
        assert!(!c.is_card_structurally_valid(1));

        c.answer(1, "opt", "No");
        c.answer(1, "stray", "No");
        assert!(!c.is_card_structurally_valid(1));

        c.reset_card_fields(1);
        assert!(c.is_card_structurally_valid(1));
        assert!(!c.is_card_structurally_valid(5));
    }

    #[test]
    fn out_of_range_render_is_ignored() {
        let mut c = MemoryCardContainer::new(&cards());
        c.render_and_activate(9);
        assert_eq!(0, c.active_card_index());
        assert!(!c.is_card_rendered(9));
    }
}
