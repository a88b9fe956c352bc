use std::collections::BTreeMap;

/// position of a card in the wizard's card list
pub type CardIndex = usize;

/// answers of one card, field name to selected value
pub type FieldValues = BTreeMap<String, String>;

///
/// single answerable input on a card.
/// it's a radio group: one of `options` can be selected under `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub label: Option<String>,
    pub options: Vec<String>,
    pub disabled: bool,
}

impl FieldDecl {
    pub fn new(name: &str, options: &[&str]) -> Self {
        FieldDecl {
            name: name.to_owned(),
            label: None,
            options: options.iter().map(|x| x.to_string()).collect(),
            disabled: false,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

///
/// conditional navigation: if `source_field` is answered with one of
/// the keys of `value_to_target` - advance goes to the mapped card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRule {
    pub source_field: String,
    pub value_to_target: BTreeMap<String, CardIndex>,
}

impl BranchRule {
    pub fn new(source_field: &str, value_to_target: &[(&str, CardIndex)]) -> Self {
        BranchRule {
            source_field: source_field.to_owned(),
            value_to_target: value_to_target
                .iter()
                .map(|(v, t)| (v.to_string(), *t))
                .collect(),
        }
    }

    /// target this rule maps the given answers to, if any
    pub fn target_for(&self, values: &FieldValues) -> Option<CardIndex> {
        values
            .get(&self.source_field)
            .and_then(|answer| self.value_to_target.get(answer))
            .copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: CardIndex,
    pub id: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub notice_on_show: Option<String>,
    pub branch_rules: Vec<BranchRule>,
    pub fields: Vec<FieldDecl>,
}

impl Card {
    ///
    /// informational card - nothing to answer, always passes validation
    pub fn info(index: CardIndex, text: &str) -> Self {
        Card {
            index,
            id: None,
            title: None,
            text: Some(text.to_owned()),
            notice_on_show: None,
            branch_rules: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn form(index: CardIndex, fields: Vec<FieldDecl>) -> Self {
        Card {
            index,
            id: None,
            title: None,
            text: None,
            notice_on_show: None,
            branch_rules: Vec::new(),
            fields,
        }
    }

    pub fn with_rule(mut self, rule: BranchRule) -> Self {
        self.branch_rules.push(rule);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn with_notice_on_show(mut self, notice: &str) -> Self {
        self.notice_on_show = Some(notice.to_owned());
        self
    }

    pub fn is_form(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// fields that must be answered before the card can be left forward
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.fields.iter().filter(|f| !f.disabled)
    }

    /// human readable name for logs and headers
    pub fn display_name(&self) -> String {
        match (&self.title, &self.id) {
            (Some(title), _) => title.to_owned(),
            (None, Some(id)) => id.to_owned(),
            (None, None) => format!("card {}", self.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_target_lookup() {
        let rule = BranchRule::new("opt", &[("Yes", 3), ("Maybe", 5)]);
        let mut values = FieldValues::new();
        assert_eq!(None, rule.target_for(&values));

        values.insert("opt".to_owned(), "No".to_owned());
        assert_eq!(None, rule.target_for(&values));

        values.insert("opt".to_owned(), "Maybe".to_owned());
        assert_eq!(Some(5), rule.target_for(&values));
    }

    #[test]
    fn form_vs_info() {
        assert!(!Card::info(0, "hello").is_form());
        let card = Card::form(
            1,
            vec![
                FieldDecl::new("a", &["x", "y"]),
                FieldDecl::new("b", &["x"]).disabled(),
            ],
        );
        assert!(card.is_form());
        let required: Vec<_> = card.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(vec!["a"], required);
        assert!(card.field("b").unwrap().has_option("x"));
        assert_eq!("card 1", card.display_name());
    }
}
