//! Interactive session over stdin.
//!
//! Each line is one selection change, the same partial updates the
//! dashboard's pickers send. After every change the rebuilt views are printed.

use crate::report::{describe, load_controller};
use dfl_view::SelectionChange;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

pub const HELP: &str = "\
Commands:
  species <name>        show another species on the map and series
  year <year>           show another year on the map
  ports [p1, p2, ...]   set the ports on the series (no ports clears it)
  show                  print the current views
  help                  print this message
  quit                  leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreEvent {
    Change(SelectionChange),
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("not a year: {0:?}")]
    InvalidYear(String),
}

/// Parse one input line. Leading and trailing whitespace is ignored.
pub fn parse_event(line: &str) -> Result<ExploreEvent, ParseEventError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "species" => {
            if rest.is_empty() {
                return Err(ParseEventError::MissingArgument("species"));
            }
            Ok(ExploreEvent::Change(SelectionChange::new().species(rest)))
        }
        "year" => {
            if rest.is_empty() {
                return Err(ParseEventError::MissingArgument("year"));
            }
            let year = rest
                .parse::<i32>()
                .map_err(|_| ParseEventError::InvalidYear(rest.to_string()))?;
            Ok(ExploreEvent::Change(SelectionChange::new().year(year)))
        }
        "ports" => {
            let ports = rest
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty());
            Ok(ExploreEvent::Change(SelectionChange::new().ports(ports)))
        }
        "show" => Ok(ExploreEvent::Show),
        "help" | "?" => Ok(ExploreEvent::Help),
        "quit" | "exit" => Ok(ExploreEvent::Quit),
        _ => Err(ParseEventError::UnknownCommand(command.to_string())),
    }
}

/// Read changes from stdin until `quit` or end of input.
pub async fn run_explore(csv_path: &str) -> anyhow::Result<()> {
    let mut controller = load_controller(csv_path)?;
    print!("{}", HELP);
    print!("{}", describe(&controller));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_event(&line) {
            Ok(ExploreEvent::Change(change)) => {
                controller.on_selection_changed(change);
                let done = controller.last_recompute();
                info!(
                    "[Landings] explore: Rebuilt map={} series={}",
                    done.map, done.series
                );
                print!("{}", describe(&controller));
            }
            Ok(ExploreEvent::Show) => print!("{}", describe(&controller)),
            Ok(ExploreEvent::Help) => print!("{}", HELP),
            Ok(ExploreEvent::Quit) => break,
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species_keeps_spaces() {
        assert_eq!(
            parse_event("species  Almindelig tunge "),
            Ok(ExploreEvent::Change(SelectionChange::new().species("Almindelig tunge")))
        );
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(
            parse_event("year 2021"),
            Ok(ExploreEvent::Change(SelectionChange::new().year(2021)))
        );
        assert_eq!(
            parse_event("year twenty"),
            Err(ParseEventError::InvalidYear("twenty".to_string()))
        );
        assert_eq!(parse_event("year"), Err(ParseEventError::MissingArgument("year")));
    }

    #[test]
    fn test_parse_ports_list() {
        assert_eq!(
            parse_event("ports Esbjerg, Hvide Sande,,Skagen"),
            Ok(ExploreEvent::Change(
                SelectionChange::new().ports(["Esbjerg", "Hvide Sande", "Skagen"])
            ))
        );
    }

    #[test]
    fn test_parse_ports_without_argument_clears() {
        let Ok(ExploreEvent::Change(change)) = parse_event("ports") else {
            panic!("expected a change");
        };
        assert_eq!(change.ports, Some(Vec::new()));
        assert!(change.species.is_none());
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(parse_event("show"), Ok(ExploreEvent::Show));
        assert_eq!(parse_event("HELP"), Ok(ExploreEvent::Help));
        assert_eq!(parse_event("  quit  "), Ok(ExploreEvent::Quit));
        assert_eq!(
            parse_event("plot"),
            Err(ParseEventError::UnknownCommand("plot".to_string()))
        );
    }
}
