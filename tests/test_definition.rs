use card_wizard::config_location::{
    default_config_location, default_definition_path, DEFINITION_FILE_NAME, LOCATION_ENV_VAR,
};
use card_wizard::{DefinitionError, MemoryCardContainer, Wizard, WizardDefinition};
use std::io::Write;
use std::path::PathBuf;

const BRANCHING: &str = r#"
title = "Branching"
active_item = 1

[[cards]]
text = "start"

[[cards]]
title = "Question"

[[cards.fields]]
name = "pet"
options = ["Cat", "Dog", "None"]

[[cards.sequence_control]]
key = "pet"
values = { Cat = 2, Dog = 3 }

[[cards]]
text = "cats"

[[cards]]
text = "dogs"
"#;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BRANCHING.as_bytes()).unwrap();

    let def = WizardDefinition::load(file.path()).unwrap();
    assert_eq!(Some("Branching".to_owned()), def.title);
    assert_eq!(1, def.active_item);

    let cards = def.to_cards();
    let container = MemoryCardContainer::new(&cards);
    let mut wizard = Wizard::new(cards, def.active_item, container).unwrap();
    assert_eq!(1, wizard.current_index());

    wizard.container_mut().answer(1, "pet", "Dog");
    assert_eq!(Ok(3), wizard.advance());
    assert_eq!(Ok(1), wizard.retreat());

    wizard.container_mut().answer(1, "pet", "None");
    assert_eq!(Ok(2), wizard.advance());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    match WizardDefinition::load(&path) {
        Err(DefinitionError::Io { path: p, .. }) => assert_eq!(path, p),
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn test_syntax_error_has_span() {
    match WizardDefinition::from_toml_str("title = \"unterminated\n[[cards]]\n") {
        Err(DefinitionError::Syntax { span, .. }) => assert!(span.is_some()),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_default_location() {
    std::env::set_var(LOCATION_ENV_VAR, "/tmp/some/wizards");
    assert_eq!(PathBuf::from("/tmp/some/wizards"), default_config_location());
    assert_eq!(
        PathBuf::from("/tmp/some/wizards").join(DEFINITION_FILE_NAME),
        default_definition_path()
    );
    std::env::remove_var(LOCATION_ENV_VAR);
    if let Some(home_path) = home::home_dir() {
        assert!(default_config_location().starts_with(home_path));
    }
}
