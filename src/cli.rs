/// Command line flags and logging setup
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing_subscriber::{fmt, EnvFilter};

use crate::state::view::ViewState;
use crate::table::cost::Unit;
use crate::table::sort::Column;

/// Compare the cost, speed and UX of private transfers against a
/// transparent transfer
#[derive(Parser, Debug)]
#[command(name = "privacy-aint-free", version, about)]
pub struct Cli {
    /// Dataset file (JSON); defaults to the user config dir, then the bundled data
    #[arg(long, env = "PRIVACY_TABLE_DATA")]
    pub data: Option<PathBuf>,

    /// Unit cost columns are shown in
    #[arg(long, value_enum, default_value_t = Unit::Usd)]
    pub unit: Unit,

    /// Column to sort by at startup
    #[arg(long, value_enum)]
    pub sort: Option<Column>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print the table to stdout and exit instead of opening a window
    #[arg(long)]
    pub print: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// View state the session starts in.
    ///
    /// Goes through the same transitions as header clicks: one activation
    /// sorts ascending, a second one descending.
    pub fn initial_view(&self) -> ViewState {
        let mut view = ViewState::new();
        view.select_unit(self.unit);

        if let Some(column) = self.sort {
            view.activate_column(column);
            if self.desc {
                view.activate_column(column);
            }
        }

        view
    }
}

/// Install the stderr log subscriber
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::sort::Direction;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["privacy-aint-free"]).unwrap();
        assert_eq!(cli.unit, Unit::Usd);
        assert!(!cli.print);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.initial_view(), ViewState::new());
    }

    #[test]
    fn test_initial_sort_descending() {
        let cli = Cli::try_parse_from([
            "privacy-aint-free",
            "--unit",
            "gas",
            "--sort",
            "erc20-transfer",
            "--desc",
            "-vv",
        ])
        .unwrap();

        let view = cli.initial_view();
        assert_eq!(view.unit, Unit::Gas);
        assert_eq!(view.sort, Some((Column::Erc20Transfer, Direction::Descending)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_desc_requires_sort() {
        assert!(Cli::try_parse_from(["privacy-aint-free", "--desc"]).is_err());
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        assert!(Cli::try_parse_from(["privacy-aint-free", "--unit", "btc"]).is_err());
    }
}
