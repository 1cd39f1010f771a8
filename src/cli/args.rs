/// CLI argument definitions via clap derive.
use clap::{Parser, ValueEnum};

/// peerscope: show a package.json summary and its peer dependencies.
#[derive(Debug, Parser)]
#[command(
    name = "peerscope",
    about = "Show the identity and peer dependencies of a package.json",
    version
)]
pub struct Cli {
    /// Package to inspect. Searched in the current directory, `node_modules`
    /// (including the @itwin/@bentley scopes and the pnpm store), and every
    /// parent directory. Defaults to ./package.json.
    #[arg(value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Also list regular dependencies.
    #[arg(short, long)]
    pub deps: bool,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (only affects --output table).
    #[arg(long)]
    pub no_header: bool,

    /// Print lookup timing and probed paths to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain text summary.
    #[default]
    Text,
    /// JSON object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Identity lines followed by a dependency table.
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["peerscope"]).unwrap();
        assert!(cli.package.is_none());
        assert!(!cli.deps);
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_package_and_short_deps() {
        let cli = Cli::try_parse_from(["peerscope", "@itwin/core-common", "-d"]).unwrap();
        assert_eq!(cli.package.as_deref(), Some("@itwin/core-common"));
        assert!(cli.deps);
    }

    #[test]
    fn test_two_positionals_rejected() {
        assert!(Cli::try_parse_from(["peerscope", "a", "b"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_output() {
        assert!(Cli::try_parse_from(["peerscope", "--json", "--output", "table"]).is_err());
    }
}
