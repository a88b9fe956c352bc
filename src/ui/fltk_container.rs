use fltk::button::{Button, RadioRoundButton};
use fltk::enums::Align;
use fltk::frame::Frame;
use fltk::group::{Flex, Wizard as CardDeck};
use fltk::prelude::*;
use fltk::window::Window;
use log::{debug, error};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use super::notice_dialog::NoticeDialog;
use super::theme::{ITEM_HEIGHT, WINDOW_SIZE};
use crate::errors::{Result, WizardError};
use crate::wizard::{
    Card, CardContainer, CardIndex, FieldValues, Wizard, WizardButton, WizardDefinition,
};

pub type FltkWizard = Wizard<FltkCardContainer>;

struct CardPage {
    group: Flex,
    radios: Vec<(String, String, RadioRoundButton)>,
}

///
/// shows cards inside fltk's Wizard group.
/// card widgets are only built when the card is first shown
pub struct FltkCardContainer {
    cards: Vec<Card>,
    pages: Vec<Option<CardPage>>,
    active: CardIndex,
    deck: CardDeck,
    buttons: HashMap<WizardButton, Button>,
}

impl FltkCardContainer {
    fn new(cards: Vec<Card>, deck: CardDeck, buttons: HashMap<WizardButton, Button>) -> Self {
        FltkCardContainer {
            pages: cards.iter().map(|_| None).collect(),
            cards,
            active: 0,
            deck,
            buttons,
        }
    }

    fn build_page(card: &Card) -> CardPage {
        let mut group = Flex::default_fill().column();
        group.set_margin(16);
        if let Some(ref title) = card.title {
            let header = Frame::default()
                .with_align(Align::Inside | Align::Left)
                .with_label(title);
            group.fixed(&header, ITEM_HEIGHT);
        }
        if let Some(ref text) = card.text {
            Frame::default()
                .with_align(Align::Inside | Align::Left | Align::Wrap)
                .with_label(text);
        }

        let mut radios = Vec::new();
        for field in card.fields.iter() {
            let label = Frame::default()
                .with_align(Align::Inside | Align::Left)
                .with_label(field.label.as_deref().unwrap_or(&field.name));
            group.fixed(&label, ITEM_HEIGHT);

            // separate group per field, so radios of different fields don't interact
            let row = Flex::default().row();
            for option in field.options.iter() {
                let mut radio = RadioRoundButton::default().with_label(option);
                if field.disabled {
                    radio.deactivate();
                }
                radios.push((field.name.to_owned(), option.to_owned(), radio));
            }
            row.end();
            group.fixed(&row, ITEM_HEIGHT);
        }
        Frame::default();
        group.end();

        CardPage { group, radios }
    }
}

impl CardContainer for FltkCardContainer {
    fn active_card_index(&self) -> CardIndex {
        self.active
    }

    fn render_and_activate(&mut self, index: CardIndex) {
        let card = match self.cards.get(index) {
            Some(card) => card,
            None => return,
        };
        if self.pages[index].is_none() {
            debug!("building widgets for card {}", index);
            self.deck.begin();
            let page = Self::build_page(card);
            self.deck.end();
            self.pages[index] = Some(page);
        }
        if let Some(ref page) = self.pages[index] {
            self.deck.set_current_widget(&page.group);
        }
        self.active = index;
        self.deck.redraw();
    }

    fn is_card_rendered(&self, index: CardIndex) -> bool {
        matches!(self.pages.get(index), Some(Some(_)))
    }

    fn field_values(&self, index: CardIndex) -> FieldValues {
        let mut values = FieldValues::new();
        if let Some(Some(page)) = self.pages.get(index) {
            for (field, option, radio) in page.radios.iter() {
                if radio.value() {
                    values.insert(field.to_owned(), option.to_owned());
                }
            }
        }
        values
    }

    fn is_card_structurally_valid(&self, index: CardIndex) -> bool {
        // radios can only ever hold declared options
        index < self.cards.len()
    }

    fn reset_card_fields(&mut self, index: CardIndex) {
        if let Some(Some(page)) = self.pages.get_mut(index) {
            for (_, _, radio) in page.radios.iter_mut() {
                radio.set_value(false);
            }
        }
    }

    fn set_button_state(&mut self, button: WizardButton, enabled: bool) {
        if let Some(btn) = self.buttons.get_mut(&button) {
            if enabled {
                btn.activate();
            } else {
                btn.deactivate();
            }
        }
    }

    fn set_button_visible(&mut self, button: WizardButton, visible: bool) {
        if let Some(btn) = self.buttons.get_mut(&button) {
            if visible {
                btn.show();
            } else {
                btn.hide();
            }
        }
    }

    fn show_notice(&mut self, title: &str, text: &str) {
        NoticeDialog::show_in_center(title, text);
    }
}

///
/// create wizard window with a Cancel/Prev/Next/Submit toolbar.
/// window is not shown yet, and no handlers are set
pub fn build_wizard_window(
    definition: &WizardDefinition,
) -> Result<(Window, Rc<RefCell<FltkWizard>>)> {
    let mut wind = Window::default()
        .with_size(WINDOW_SIZE.0, WINDOW_SIZE.1)
        .with_label(definition.title.as_deref().unwrap_or("Wizard"));
    let mut main_layout = Flex::default_fill().column();
    main_layout.set_margin(16);

    let button_row = Flex::default().row();
    main_layout.fixed(&button_row, ITEM_HEIGHT);
    let mut cancel = Button::default().with_label("Cancel");
    let mut prev = Button::default().with_label("@< Prev");
    Frame::default();
    let mut next = Button::default().with_label("Next @>");
    let mut submit = Button::default().with_label("Submit");
    button_row.end();

    let deck = CardDeck::default();
    deck.end();

    main_layout.end();
    wind.end();
    wind.make_resizable(true);

    let buttons = HashMap::from([
        (WizardButton::Cancel, cancel.clone()),
        (WizardButton::Prev, prev.clone()),
        (WizardButton::Next, next.clone()),
        (WizardButton::Submit, submit.clone()),
    ]);
    let cards = definition.to_cards();
    let container = FltkCardContainer::new(cards.clone(), deck, buttons);
    let wizard = Rc::new(RefCell::new(Wizard::new(
        cards,
        definition.active_item,
        container,
    )?));

    connect(&mut cancel, &wizard, |w| w.cancel());
    connect(&mut prev, &wizard, |w| w.retreat().map(|_| ()));
    connect(&mut next, &wizard, |w| w.advance().map(|_| ()));
    connect(&mut submit, &wizard, |w| w.submit().map(|_| ()));

    Ok((wind, wizard))
}

///
/// activations that arrive while another transition is still running are dropped
fn connect(button: &mut Button, wizard: &Rc<RefCell<FltkWizard>>, action: fn(&mut FltkWizard) -> Result<()>) {
    let wizard: Weak<RefCell<FltkWizard>> = Rc::downgrade(wizard);
    button.set_callback(move |b| {
        let wizard = match wizard.upgrade() {
            Some(w) => w,
            None => return,
        };
        let mut wizard = match wizard.try_borrow_mut() {
            Ok(w) => w,
            Err(_) => {
                debug!("ignoring \"{}\", wizard is busy", b.label());
                return;
            }
        };
        report(action(&mut wizard));
    });
}

fn report(result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_fatal() => error!("{}", e),
        // incomplete cards are already reported to the user
        Err(WizardError::IncompleteCard { .. }) => {}
        Err(e) => debug!("{}", e),
    }
}
