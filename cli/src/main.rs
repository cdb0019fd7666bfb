mod commands;
mod surface;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use museum_core::{Action, AppConfig, Controller, DataStore, EntryDraft};

use crate::commands::Command;
use crate::surface::TerminalSurface;

/// Interactive catalogue browser for the museum's treasure records.
#[derive(Debug, Parser)]
#[command(name = "museum", version, about)]
struct Args {
    /// Path to the tab-delimited data file (overrides the config file).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "museum.toml")]
    config: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = match AppConfig::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}: {err}", args.config.display());
            return ExitCode::from(2);
        }
    };

    let data_file = args
        .file
        .unwrap_or_else(|| config.catalogue.data_file.clone());

    let mut store = DataStore::new(&data_file);
    if let Err(err) = store.load() {
        eprintln!("{}: {err}", data_file.display());
        // Corrupt data and filesystem trouble get distinct exit codes so
        // scripts can tell them apart.
        return ExitCode::from(if err.is_corrupt_data() { 1 } else { 2 });
    }

    println!("{}", config.general.title);
    println!(
        "{} records loaded from {}. Type `help` for commands.",
        store.len(),
        data_file.display()
    );

    let mut controller = Controller::new(store, TerminalSurface::new());
    controller.start();

    repl(&mut controller)
}

fn repl(controller: &mut Controller<TerminalSurface>) -> ExitCode {
    let stdin = io::stdin();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(2);
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match commands::parse(line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            Command::Quit => return ExitCode::SUCCESS,
            Command::Help => print_help(),
            Command::List => controller.refresh(),
            Command::Select(index) => controller.dispatch(Action::Select(index)),
            Command::FilterCategory(term) => {
                controller.dispatch(Action::SetCategoryFilter(term))
            }
            Command::FilterCountry(term) => {
                controller.dispatch(Action::SetCountryFilter(term))
            }
            Command::ClearFilters => controller.dispatch(Action::ClearFilters),
            Command::SearchName(query) => controller.dispatch(Action::SearchByName(query)),
            Command::SearchNumber(query) => {
                controller.dispatch(Action::SearchByNumber(query))
            }
            Command::Create => match read_draft(&stdin) {
                Ok(draft) => controller.dispatch(Action::Create(draft)),
                Err(err) => eprintln!("{err}"),
            },
            Command::Update => match read_draft(&stdin) {
                Ok(draft) => controller.dispatch(Action::Update(draft)),
                Err(err) => eprintln!("{err}"),
            },
            Command::Delete => controller.dispatch(Action::Delete),
            Command::Undo => controller.dispatch(Action::Undo),
            Command::Save => controller.dispatch(Action::Save),
        }
    }
}

/// Prompts for the five record fields. Validation happens in the controller,
/// so empty answers are passed through as-is.
fn read_draft(stdin: &io::Stdin) -> io::Result<EntryDraft> {
    Ok(EntryDraft {
        catalogue_number: prompt(stdin, "Catalogue number")?,
        name: prompt(stdin, "Name")?,
        image_path: prompt(stdin, "Image path")?,
        category: prompt(stdin, "Category")?,
        country: prompt(stdin, "Country")?,
    })
}

fn prompt(stdin: &io::Stdin, label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn print_help() {
    println!(
        "\
Commands:
  list                          show the current entry list
  select <n> | select none      focus an entry from the list (1-based)
  filter category [value]       set or clear the category filter
  filter country [value]        set or clear the country filter
  clear                         clear both filters
  search name <query>           exact-match search by name
  search number <query>         exact-match search by catalogue number
  create                        add a new entry (prompts for fields)
  update                        replace the selected entry (prompts for fields)
  delete                        delete the selected entry
  undo                          bring back the most recently deleted entry
  save                          write the catalogue back to the data file
  help                          this text
  quit                          exit without saving"
    );
}
