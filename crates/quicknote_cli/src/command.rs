//! Line-oriented input parsing for the terminal host.

/// One action typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text: set the input and press Enter.
    Enter(String),
    /// `/add [text]`: press the add button, optionally after setting the input.
    Add(Option<String>),
    /// `/delete <n>`: activate the delete button of the n-th entry (1-based).
    Delete(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    BadIndex(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => write!(f, "unknown command `/{name}`; try /help"),
            Self::BadIndex(raw) => write!(f, "expected an entry number, got `{raw}`"),
        }
    }
}

pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Enter(line.to_string()));
    };
    // `//text` escapes a note that starts with a slash.
    if rest.starts_with('/') {
        return Ok(Command::Enter(rest.to_string()));
    }

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg)),
        None => (rest, None),
    };

    match name {
        "add" => Ok(Command::Add(arg.map(str::to_string))),
        "delete" | "del" | "rm" => {
            let raw = arg.unwrap_or("").trim();
            match raw.parse::<usize>() {
                Ok(index) if index > 0 => Ok(Command::Delete(index)),
                _ => Err(ParseError::BadIndex(raw.to_string())),
            }
        }
        "list" | "ls" => Ok(Command::List),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
