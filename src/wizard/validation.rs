use super::card::{Card, FieldValues};

///
/// decides if a card's answers allow moving forward
pub struct ValidationGate {}

impl ValidationGate {
    ///
    /// every required field must have a value, and the container must consider
    /// the card structurally valid. informational cards are always complete
    pub fn is_card_complete(card: &Card, values: &FieldValues, structurally_valid: bool) -> bool {
        if !card.is_form() {
            return true;
        }
        Self::missing_fields(card, values).is_empty() && structurally_valid
    }

    /// names of required fields that have no answer yet, in declaration order
    pub fn missing_fields(card: &Card, values: &FieldValues) -> Vec<String> {
        card.required_fields()
            .filter(|f| !values.contains_key(&f.name))
            .map(|f| f.name.to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::card::FieldDecl;
    use super::*;

    fn two_field_card() -> Card {
        Card::form(
            0,
            vec![
                FieldDecl::new("a", &["Yes", "No"]),
                FieldDecl::new("b", &["Yes", "No"]),
                FieldDecl::new("c", &["Yes", "No"]).disabled(),
            ],
        )
    }

    #[test]
    fn info_card_always_complete() {
        assert!(ValidationGate::is_card_complete(
            &Card::info(0, "hi"),
            &FieldValues::new(),
            false
        ));
    }

    #[test]
    fn missing_answers() {
        let card = two_field_card();
        let mut values = FieldValues::new();
        values.insert("b".to_owned(), "No".to_owned());

        assert_eq!(vec!["a".to_owned()], ValidationGate::missing_fields(&card, &values));
        assert!(!ValidationGate::is_card_complete(&card, &values, true));

        values.insert("a".to_owned(), "Yes".to_owned());
        // disabled "c" is not required
        assert!(ValidationGate::is_card_complete(&card, &values, true));
    }

    #[test]
    fn structural_check_also_gates() {
        let card = two_field_card();
        let mut values = FieldValues::new();
        values.insert("a".to_owned(), "Yes".to_owned());
        values.insert("b".to_owned(), "Yes".to_owned());
        assert!(!ValidationGate::is_card_complete(&card, &values, false));
    }
}
