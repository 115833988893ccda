//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the PBS API gateway.
///
/// This is the top-level parser that handles global options and
/// dispatches to subcommands.
#[derive(Parser)]
#[command(name = "pbs-mcp")]
#[command(about = "Query the Australian PBS data API from the command line")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_verbose_flag_parses() {
        let cli = Cli::parse_from(["pbs-mcp", "--verbose", "list-endpoints"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::ListEndpoints)));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["pbs-mcp"]);
        assert!(cli.command.is_none());
    }
}
