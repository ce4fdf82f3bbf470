use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "teams")]
#[command(about = "Manage team records on a Teams REST API", version)]
#[command(after_help = "EXAMPLES:
    teams list                              List all teams
    teams show 3                            Show one team
    teams add --name Eagles --city Denver   Create a team
    teams edit 3 --city Boulder             Change a team's city
    teams delete 3                          Delete a team (asks first)
    teams shell                             Interactive session")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// API host (overrides TEAMS_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List teams
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    teams list
    teams list --format json"
    )]
    List,
    /// Show team details
    #[command(after_help = "EXAMPLES:
    teams show 3")]
    Show {
        /// Team ID
        id: i64,
    },
    /// Create a new team
    #[command(after_help = "EXAMPLES:
    teams add --name Eagles --city Denver")]
    Add(AddArgs),
    /// Update an existing team
    #[command(after_help = "EXAMPLES:
    teams edit 3 --name Broncos
    teams edit 3 --name Broncos --city Boulder")]
    Edit(EditArgs),
    /// Delete a team
    #[command(
        alias = "rm",
        after_help = "EXAMPLES:
    teams delete 3
    teams delete 3 --yes"
    )]
    Delete {
        /// Team ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Start an interactive session
    #[command(after_help = "EXAMPLES:
    teams shell
    teams shell --base-url http://localhost:5015")]
    Shell,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    teams completions bash > ~/.bash_completion.d/teams
    teams completions zsh > ~/.zfunc/_teams
    teams completions fish > ~/.config/fish/completions/teams.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    teams init")]
    Init,
}

#[derive(Args)]
pub struct AddArgs {
    /// Team name
    #[arg(long, short)]
    pub name: String,

    /// City the team plays in
    #[arg(long, short)]
    pub city: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Team ID
    pub id: i64,

    /// New name
    #[arg(long, short)]
    pub name: Option<String>,

    /// New city
    #[arg(long, short)]
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::parse_from(["teams", "list", "--json"]);
        assert!(matches!(cli.output_format(), OutputFormat::Json));
    }

    #[test]
    fn test_edit_fields_are_optional() {
        let cli = Cli::parse_from(["teams", "edit", "3", "--city", "Boulder"]);
        match cli.command {
            Commands::Edit(args) => {
                assert_eq!(args.id, 3);
                assert!(args.name.is_none());
                assert_eq!(args.city.as_deref(), Some("Boulder"));
            }
            _ => panic!("expected edit"),
        }
    }
}
