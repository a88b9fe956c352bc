use log::debug;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::errors::WizardError;
use crate::wizard::{Card, CardContainer, FieldValues, MemoryCardContainer, Wizard, WizardButton};

pub const HELP_MESSAGE: &str = "\
Commands:
    next                   go to the next card
    prev                   go back to the previous card
    set <field> <value>    select an answer on the current card
    clear <field>          clear an answer on the current card
    values                 show all answers collected so far
    reset [all]            start over, \"all\" also clears answers
    submit                 submit answers (on the last card)
    cancel                 cancel the wizard
    help                   show this message
    quit                   leave without submitting
";

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Next,
    Prev,
    Set { field: String, value: String },
    Clear { field: String },
    Values,
    Reset { all: bool },
    Submit,
    Cancel,
    Help,
    Quit,
}

impl FromStr for ConsoleCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            Some(c) => c,
            None => return Err("empty command".to_owned()),
        };
        let rest: Vec<&str> = words.collect();

        match (command, rest.as_slice()) {
            ("next" | "n", []) => Ok(ConsoleCommand::Next),
            ("prev" | "p", []) => Ok(ConsoleCommand::Prev),
            ("set", [field, value @ ..]) if !value.is_empty() => Ok(ConsoleCommand::Set {
                field: field.to_string(),
                value: value.join(" "),
            }),
            ("clear", [field]) => Ok(ConsoleCommand::Clear {
                field: field.to_string(),
            }),
            ("values", []) => Ok(ConsoleCommand::Values),
            ("reset", []) => Ok(ConsoleCommand::Reset { all: false }),
            ("reset", ["all"]) => Ok(ConsoleCommand::Reset { all: true }),
            ("submit", []) => Ok(ConsoleCommand::Submit),
            ("cancel", []) => Ok(ConsoleCommand::Cancel),
            ("help" | "?", []) => Ok(ConsoleCommand::Help),
            ("quit" | "q", []) => Ok(ConsoleCommand::Quit),
            (x, _) => Err(format!("cannot understand \"{}\", try \"help\"", x)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Submitted(FieldValues),
    Cancelled,
    Quit,
}

///
/// drive the wizard with commands read line by line from input.
/// returns when the wizard is submitted or cancelled, or input ends
pub fn run_session<R: BufRead, W: Write>(
    wizard: &mut Wizard<MemoryCardContainer>,
    input: R,
    out: &mut W,
) -> io::Result<SessionEnd> {
    print_notices(wizard, out)?;
    print_card(wizard, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<ConsoleCommand>() {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!("console command: {:?}", command);

        let mut redraw = false;
        match command {
            ConsoleCommand::Next => {
                if !wizard.button_states().next {
                    writeln!(out, "Next is not available on this card")?;
                } else if wizard.advance().is_ok() {
                    redraw = true;
                }
            }
            ConsoleCommand::Prev => {
                if !wizard.button_states().prev {
                    writeln!(out, "Prev is not available on this card")?;
                } else if wizard.retreat().is_ok() {
                    redraw = true;
                }
            }
            ConsoleCommand::Set { field, value } => {
                let index = wizard.current_index();
                let known = wizard
                    .current_card()
                    .and_then(|c| c.field(&field))
                    .map(|f| (f.disabled, f.has_option(&value)));
                match known {
                    None => writeln!(out, "no field \"{}\" on this card", field)?,
                    Some((true, _)) => writeln!(out, "field \"{}\" is disabled", field)?,
                    Some((false, false)) => {
                        writeln!(out, "\"{}\" is not an option of \"{}\"", value, field)?
                    }
                    Some((false, true)) => {
                        wizard.container_mut().answer(index, &field, &value);
                        redraw = true;
                    }
                }
            }
            ConsoleCommand::Clear { field } => {
                let index = wizard.current_index();
                wizard.container_mut().clear_answer(index, &field);
                redraw = true;
            }
            ConsoleCommand::Values => match wizard.collect_all_values() {
                Some(values) => print_values(&values, out)?,
                None => writeln!(out, "no values available")?,
            },
            ConsoleCommand::Reset { all } => {
                wizard.reset(all);
                redraw = true;
            }
            ConsoleCommand::Submit => match wizard.submit() {
                Ok(values) => {
                    print_notices(wizard, out)?;
                    return Ok(SessionEnd::Submitted(values));
                }
                Err(WizardError::NoHandler(WizardButton::Submit)) => {
                    writeln!(out, "this wizard can not be submitted")?
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            ConsoleCommand::Cancel => match wizard.cancel() {
                Ok(()) => return Ok(SessionEnd::Cancelled),
                Err(e) => writeln!(out, "{}", e)?,
            },
            ConsoleCommand::Help => write!(out, "{}", HELP_MESSAGE)?,
            ConsoleCommand::Quit => return Ok(SessionEnd::Quit),
        }

        print_notices(wizard, out)?;
        if redraw {
            print_card(wizard, out)?;
        }
    }
    Ok(SessionEnd::Quit)
}

fn print_notices<W: Write>(wizard: &mut Wizard<MemoryCardContainer>, out: &mut W) -> io::Result<()> {
    for (title, text) in wizard.container_mut().take_notices() {
        writeln!(out, "{}: {}", title, text)?;
    }
    Ok(())
}

pub fn print_values<W: Write>(values: &FieldValues, out: &mut W) -> io::Result<()> {
    if values.is_empty() {
        writeln!(out, "no answers yet")?;
    }
    for (name, value) in values.iter() {
        writeln!(out, "{} = {}", name, value)?;
    }
    Ok(())
}

pub fn print_card<W: Write>(wizard: &Wizard<MemoryCardContainer>, out: &mut W) -> io::Result<()> {
    let card: &Card = match wizard.current_card() {
        Some(c) => c,
        None => return Ok(()),
    };
    writeln!(
        out,
        "\n[{}/{}] {}",
        card.index + 1,
        wizard.card_count(),
        card.display_name()
    )?;
    if let Some(ref text) = card.text {
        writeln!(out, "{}", text)?;
    }

    let values = wizard.container().field_values(card.index);
    for field in card.fields.iter() {
        write!(out, "  {}", field.label.as_deref().unwrap_or(&field.name))?;
        if field.disabled {
            write!(out, " (disabled)")?;
        }
        writeln!(out)?;
        write!(out, "    {}:", field.name)?;
        for option in field.options.iter() {
            let mark = if values.get(&field.name) == Some(option) { "x" } else { " " };
            write!(out, " ({}) {}", mark, option)?;
        }
        writeln!(out)?;
    }

    let container = wizard.container();
    let available: Vec<&str> = [
        (WizardButton::Cancel, "cancel"),
        (WizardButton::Prev, "prev"),
        (WizardButton::Next, "next"),
        (WizardButton::Submit, "submit"),
    ]
    .into_iter()
    .filter(|(b, _)| container.is_button_visible(*b) && container.is_button_enabled(*b))
    .map(|(_, name)| name)
    .collect();
    writeln!(out, "available: {}", available.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardDefinition;

    #[test]
    fn parse_commands() {
        assert_eq!(Ok(ConsoleCommand::Next), "next".parse());
        assert_eq!(Ok(ConsoleCommand::Prev), " p ".parse());
        assert_eq!(
            Ok(ConsoleCommand::Set {
                field: "opt01".to_owned(),
                value: "Not sure".to_owned()
            }),
            "set opt01 Not sure".parse()
        );
        assert_eq!(Ok(ConsoleCommand::Reset { all: true }), "reset all".parse());
        assert_eq!(Ok(ConsoleCommand::Reset { all: false }), "reset".parse());
        assert!("set opt01".parse::<ConsoleCommand>().is_err());
        assert!("jump 3".parse::<ConsoleCommand>().is_err());
        assert!("".parse::<ConsoleCommand>().is_err());
    }

    fn sample_wizard() -> Wizard<MemoryCardContainer> {
        let def = WizardDefinition::sample().unwrap();
        let cards = def.to_cards();
        let container = MemoryCardContainer::new(&cards);
        Wizard::new(cards, def.active_item, container)
            .unwrap()
            .with_submit_handler(|_| {})
            .with_cancel_handler(|| {})
    }

    #[test]
    fn scripted_session_submits() {
        let mut wizard = sample_wizard();
        let script = "next\nnext\nset opt01 No\nnext\nset opt02 Yes\nnext\nsubmit\n";
        let mut out = Vec::new();

        let end = run_session(&mut wizard, script.as_bytes(), &mut out).unwrap();
        let mut expected = FieldValues::new();
        expected.insert("opt01".to_owned(), "No".to_owned());
        expected.insert("opt02".to_owned(), "Yes".to_owned());
        assert_eq!(SessionEnd::Submitted(expected), end);

        let text = String::from_utf8(out).unwrap();
        // second "next" on card 1 is blocked
        assert!(text.contains("Please answer all questions"));
        assert!(text.contains("Your form can now be submitted."));
    }

    #[test]
    fn prev_is_refused_on_first_card() {
        let mut wizard = sample_wizard();
        let mut out = Vec::new();
        let end = run_session(&mut wizard, "prev\nset nothing here\ncancel\n".as_bytes(), &mut out).unwrap();
        assert_eq!(SessionEnd::Cancelled, end);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Prev is not available"));
        assert!(text.contains("no field \"nothing\" on this card"));
        assert_eq!(0, wizard.current_index());
    }

    #[test]
    fn end_of_input_quits() {
        let mut wizard = sample_wizard();
        let mut out = Vec::new();
        assert_eq!(
            SessionEnd::Quit,
            run_session(&mut wizard, "next\n".as_bytes(), &mut out).unwrap()
        );
        assert_eq!(1, wizard.current_index());
    }
}
