use colored::Colorize;
use museum_core::{Surface, Treasure};

/// Renders controller output to the terminal.
#[derive(Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for TerminalSurface {
    fn show_entries(&mut self, entries: &[Treasure]) {
        if entries.is_empty() {
            println!("{}", "No entries match the current view.".dimmed());
            return;
        }
        for (index, entry) in entries.iter().enumerate() {
            let facets = format!("[{} / {}]", entry.category, entry.country);
            println!(
                "{:>3}. {} {}",
                index + 1,
                entry.to_string().bold(),
                facets.dimmed()
            );
        }
    }

    fn show_filters(&mut self, categories: &[String], countries: &[String]) {
        println!("Categories: {}", categories.join(", ").cyan());
        println!("Countries:  {}", countries.join(", ").cyan());
    }

    fn focus(&mut self, entry: Option<&Treasure>) {
        match entry {
            Some(treasure) => {
                println!("{}", treasure.to_string().green().bold());
                println!("  Category:   {}", treasure.category);
                println!("  Country:    {}", treasure.country);
                println!("  Image path: {}", treasure.image_path);
            }
            None => println!("{}", "No entry selected.".dimmed()),
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message.yellow());
    }
}
