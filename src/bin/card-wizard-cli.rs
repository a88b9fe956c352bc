use card_wizard::config_location::default_definition_path;
use card_wizard::console::{print_values, run_session, SessionEnd};
use card_wizard::{MemoryCardContainer, Wizard, WizardDefinition};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "card-wizard-cli", version, about = "Run card wizards in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// go through a wizard interactively
    Run {
        /// wizard definition file, default location is used if omitted
        definition: Option<PathBuf>,
        /// run the built-in sample wizard instead
        #[arg(long, conflicts_with = "definition")]
        sample: bool,
    },
    /// load a definition and report problems
    Check {
        definition: Option<PathBuf>,
    },
    /// print the built-in sample definition
    Sample,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run { definition, sample } => {
            load_definition(definition, sample).and_then(|def| process_run(&def))
        }
        Command::Check { definition } => {
            load_definition(definition, false).map(|def| process_check(&def))
        }
        Command::Sample => process_sample(),
    };

    if let Err(e) = result {
        eprintln!("operation failed: {}", e);
        std::process::exit(1);
    }
}

fn load_definition(path: Option<PathBuf>, sample: bool) -> Result<WizardDefinition, String> {
    if sample {
        return WizardDefinition::sample().map_err(|e| e.to_string());
    }
    let path = path.unwrap_or_else(default_definition_path);
    WizardDefinition::load(&path).map_err(|e| e.to_string())
}

fn process_run(definition: &WizardDefinition) -> Result<(), String> {
    let cards = definition.to_cards();
    let container = MemoryCardContainer::new(&cards);
    let mut wizard = Wizard::new(cards, definition.active_item, container)
        .map_err(|e| e.to_string())?
        .with_submit_handler(|_| {})
        .with_cancel_handler(|| {});

    if let Some(ref title) = definition.title {
        println!("== {} ==", title);
    }
    println!("type \"help\" for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_session(&mut wizard, stdin.lock(), &mut stdout).map_err(|e| e.to_string())? {
        SessionEnd::Submitted(values) => {
            println!("\nsubmitted:");
            print_values(&values, &mut stdout).map_err(|e| e.to_string())?;
        }
        SessionEnd::Cancelled => println!("cancelled"),
        SessionEnd::Quit => {}
    }
    Ok(())
}

fn process_check(definition: &WizardDefinition) {
    println!(
        "{}: {} cards, starting at card {}",
        definition.title.as_deref().unwrap_or("wizard"),
        definition.cards.len(),
        definition.active_item
    );
    for card in definition.to_cards().iter() {
        let fields: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
        print!("  {}: {}", card.index, card.display_name());
        if !fields.is_empty() {
            print!(" [{}]", fields.join(", "));
        }
        for rule in card.branch_rules.iter() {
            for (answer, target) in rule.value_to_target.iter() {
                print!(" {}={} -> {}", rule.source_field, answer, target);
            }
        }
        println!();
    }
}

fn process_sample() -> Result<(), String> {
    let text = WizardDefinition::sample()
        .and_then(|def| def.to_toml_string())
        .map_err(|e| e.to_string())?;
    print!("{}", text);
    Ok(())
}
