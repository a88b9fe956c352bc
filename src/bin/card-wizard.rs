use card_wizard::config_location::default_definition_path;
use card_wizard::ui::{build_wizard_window, theme};
use card_wizard::WizardDefinition;
use clap::Parser;
use fltk::{app, prelude::*};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "card-wizard", version, about = "Show a card wizard in a window")]
struct Args {
    /// wizard definition file, default location is used if omitted
    definition: Option<PathBuf>,

    /// show the built-in sample wizard instead
    #[arg(long, conflicts_with = "definition")]
    sample: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let definition = if args.sample {
        WizardDefinition::sample()
    } else {
        WizardDefinition::load(&args.definition.unwrap_or_else(default_definition_path))
    };
    let definition = match definition {
        Ok(d) => d,
        Err(e) => {
            eprintln!("failed to load wizard definition: {}", e);
            std::process::exit(1);
        }
    };

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    theme::apply();

    let (mut wind, wizard) = match build_wizard_window(&definition) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("failed to create wizard: {}", e);
            std::process::exit(1);
        }
    };

    {
        let mut wizard = wizard.borrow_mut();
        wizard.set_submit_handler({
            let mut wind = wind.clone();
            move |values| {
                match toml::to_string(values) {
                    Ok(text) => print!("{}", text),
                    Err(e) => eprintln!("failed to print answers: {}", e),
                }
                wind.hide();
            }
        });
        wizard.set_cancel_handler({
            let mut wind = wind.clone();
            move || {
                wind.hide();
            }
        });
    }

    wind.show();
    if let Err(e) = app.run() {
        eprintln!("ui error: {}", e);
        std::process::exit(1);
    }
}
