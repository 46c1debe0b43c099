use clap::Parser;

pub mod commands;
pub mod global;

pub use commands::{BackendCommands, CheckArgs, Commands, PageArgs};
pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `verity` binary.
#[derive(Debug, Parser)]
#[command(name = "verity", version, about = "Verity - cached page fact-checks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Verdict database path (overrides `store.path`)
    #[arg(long, global = true)]
    pub store: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            store: self.store.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{BackendCommands, Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["verity", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "verity",
            "status",
            "https://example.com/a",
            "--format",
            "raw",
            "--quiet",
            "--store",
            "/tmp/v.db",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        let flags = cli.global_flags();
        assert_eq!(flags.store.as_deref(), Some("/tmp/v.db"));
        match cli.command {
            Commands::Status(args) => assert_eq!(args.url.as_str(), "https://example.com/a"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn check_accepts_force() {
        let cli = Cli::try_parse_from(["verity", "check", "https://example.com/a", "--force"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Check(ref args) if args.force));
    }

    #[test]
    fn blank_url_is_rejected() {
        assert!(Cli::try_parse_from(["verity", "show", "   "]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["verity", "--format", "xml", "list"]).is_err());
    }

    #[test]
    fn backend_check_claim_requires_query() {
        assert!(Cli::try_parse_from(["verity", "backend", "check-claim", "GDP grew"]).is_err());

        let cli = Cli::try_parse_from([
            "verity",
            "backend",
            "check-claim",
            "GDP grew",
            "--query",
            "gdp 2023",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Backend {
                action: BackendCommands::CheckClaim { claim, query },
            } => {
                assert_eq!(claim, "GDP grew");
                assert_eq!(query, "gdp 2023");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
