use museum_core::Field;

/// One line of user input, parsed. `Create` and `Update` prompt for their
/// field values separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    List,
    /// 0-based index into the last rendered list, or `None` to deselect.
    Select(Option<usize>),
    FilterCategory(Option<Field>),
    FilterCountry(Option<Field>),
    ClearFilters,
    SearchName(String),
    SearchNumber(String),
    Create,
    Update,
    Delete,
    Undo,
    Save,
}

/// Parses a non-empty input line into a command.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let head = words.next().ok_or_else(|| "empty command".to_string())?;

    match head {
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::ClearFilters),
        "create" => Ok(Command::Create),
        "update" => Ok(Command::Update),
        "delete" => Ok(Command::Delete),
        "undo" => Ok(Command::Undo),
        "save" => Ok(Command::Save),

        "select" => match words.next() {
            None | Some("none") => Ok(Command::Select(None)),
            Some(word) => {
                let position: usize = word
                    .parse()
                    .map_err(|_| format!("not an entry number: {word}"))?;
                position
                    .checked_sub(1)
                    .map(|index| Command::Select(Some(index)))
                    .ok_or_else(|| "entry numbers start at 1".to_string())
            }
        },

        "filter" => {
            let facet = words
                .next()
                .ok_or_else(|| "usage: filter category|country [value]".to_string())?;
            let value = words.collect::<Vec<_>>().join(" ");
            let term = if value.is_empty() {
                None
            } else {
                Some(Field::try_from(value).map_err(|err| err.to_string())?)
            };
            match facet {
                "category" => Ok(Command::FilterCategory(term)),
                "country" => Ok(Command::FilterCountry(term)),
                other => Err(format!("unknown filter facet: {other}")),
            }
        }

        "search" => {
            let key = words
                .next()
                .ok_or_else(|| "usage: search name|number <query>".to_string())?;
            let query = words.collect::<Vec<_>>().join(" ");
            match key {
                "name" => Ok(Command::SearchName(query)),
                "number" => Ok(Command::SearchNumber(query)),
                other => Err(format!("unknown search key: {other}")),
            }
        }

        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}
