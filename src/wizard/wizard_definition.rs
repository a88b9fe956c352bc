use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use super::card::{BranchRule, Card, CardIndex, FieldDecl};
use crate::errors::DefinitionError;

static SAMPLE_DEFINITION: &str = include_str!("sample_wizard.toml");

///
/// wizard as it is stored in a toml file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// index of the card shown first
    #[serde(default)]
    pub active_item: CardIndex,
    pub cards: Vec<CardDefinition>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_on_show: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sequence_control: Vec<SequenceControl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

///
/// answer of field `key` to card index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceControl {
    pub key: String,
    pub values: BTreeMap<String, CardIndex>,
}

impl WizardDefinition {
    ///
    /// parse and check definition text
    pub fn from_toml_str(text: &str) -> Result<WizardDefinition, DefinitionError> {
        let definition: WizardDefinition = toml::from_str(text)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn load(path: &Path) -> Result<WizardDefinition, DefinitionError> {
        log::debug!("reading wizard definition from: {:?}", path);
        let text = fs::read_to_string(path).map_err(|e| DefinitionError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&text)
    }

    /// the four card wizard from the docs
    pub fn sample() -> Result<WizardDefinition, DefinitionError> {
        Self::from_toml_str(SAMPLE_DEFINITION)
    }

    pub fn to_toml_string(&self) -> Result<String, DefinitionError> {
        Ok(toml::to_string_pretty(self)?)
    }

    ///
    /// check things serde can't: indices in range, rules pointing to
    /// existing fields and options, no duplicate names
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let card_count = self.cards.len();
        if card_count == 0 {
            return Err(schema_error("wizard has no cards".to_owned()));
        }
        if self.active_item >= card_count {
            return Err(schema_error(format!(
                "active_item {} is out of range, there are {} cards",
                self.active_item, card_count
            )));
        }

        for (i, card) in self.cards.iter().enumerate() {
            let mut names = HashSet::new();
            for field in card.fields.iter() {
                if field.name.is_empty() {
                    return Err(schema_error(format!("card {}: field with empty name", i)));
                }
                if !names.insert(field.name.as_str()) {
                    return Err(schema_error(format!(
                        "card {}: field \"{}\" is declared twice",
                        i, field.name
                    )));
                }
                if field.options.is_empty() {
                    return Err(schema_error(format!(
                        "card {}: field \"{}\" has no options",
                        i, field.name
                    )));
                }
                let mut options = HashSet::new();
                for option in field.options.iter() {
                    if !options.insert(option.as_str()) {
                        return Err(schema_error(format!(
                            "card {}: field \"{}\" has option \"{}\" twice",
                            i, field.name, option
                        )));
                    }
                }
            }

            for control in card.sequence_control.iter() {
                let field = match card.fields.iter().find(|f| f.name == control.key) {
                    Some(f) => f,
                    None => {
                        return Err(schema_error(format!(
                            "card {}: sequence control refers to unknown field \"{}\"",
                            i, control.key
                        )));
                    }
                };
                for (answer, target) in control.values.iter() {
                    if !field.options.contains(answer) {
                        return Err(schema_error(format!(
                            "card {}: \"{}\" is not an option of field \"{}\"",
                            i, answer, control.key
                        )));
                    }
                    if *target >= card_count {
                        return Err(schema_error(format!(
                            "card {}: answer \"{}\" leads to card {}, there are {} cards",
                            i, answer, target, card_count
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn to_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, def)| Card {
                index,
                id: def.id.clone(),
                title: def.title.clone(),
                text: def.text.clone(),
                notice_on_show: def.notice_on_show.clone(),
                branch_rules: def
                    .sequence_control
                    .iter()
                    .map(|c| BranchRule {
                        source_field: c.key.clone(),
                        value_to_target: c.values.clone(),
                    })
                    .collect(),
                fields: def
                    .fields
                    .iter()
                    .map(|f| FieldDecl {
                        name: f.name.clone(),
                        label: f.label.clone(),
                        options: f.options.clone(),
                        disabled: f.disabled,
                    })
                    .collect(),
            })
            .collect()
    }
}

fn schema_error(message: String) -> DefinitionError {
    DefinitionError::Schema(message)
}
