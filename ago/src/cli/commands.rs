//! CLI command and subcommand definitions

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// ago - go command wrapper with package aliases
#[derive(Parser, Debug)]
#[command(name = "ago")]
#[command(version, about = "Wrapper around the go command with package aliases", long_about = None)]
#[command(disable_help_subcommand = true, disable_help_flag = true)]
pub struct Cli {
    /// Directory holding aliases.json (default: $AGO_CONFIG_DIR or ~/.ago)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Wrapped tool to run (overrides config file)
    #[arg(long)]
    pub tool: Option<String>,

    /// Output format for alias listings (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Don't echo the forwarded command line
    #[arg(long)]
    pub no_echo: bool,

    /// Don't load config.toml
    #[arg(long)]
    pub no_config: bool,

    /// Print the forwarded command line without running it
    #[arg(long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty table output
    Table,
    /// JSON output
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}

impl From<&OutputFormat> for crate::format::OutputFormat {
    fn from(format: &OutputFormat) -> Self {
        match format {
            OutputFormat::Table => crate::format::OutputFormat::Table,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Display the usage text
    Help,

    /// Download packages and dependencies, resolving aliases
    #[command(disable_help_flag = true)]
    Get {
        /// Arguments passed to `go get` after alias resolution
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Compile and install packages and dependencies, resolving aliases
    #[command(disable_help_flag = true)]
    Install {
        /// Arguments passed to `go install` after alias resolution
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Create and manage package aliases
    #[command(visible_alias = "a", disable_help_subcommand = true)]
    Alias {
        #[command(subcommand)]
        command: Option<AliasCommands>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Any other command is passed through to the wrapped tool
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum AliasCommands {
    /// List all aliases
    #[command(visible_aliases = ["ls", "l"])]
    List,

    /// Remove an alias
    #[command(disable_help_flag = true)]
    Rm {
        /// Alias name; anything after it is ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Display the alias usage text
    Help,

    /// `<alias> <package>` defines an alias
    #[command(external_subcommand)]
    Define(Vec<String>),
}

impl Commands {
    /// Subcommand name and arguments as they should reach the wrapped tool,
    /// before alias resolution.
    pub fn forwarded_args(&self) -> Option<Vec<String>> {
        match self {
            Commands::Get { args } => Some(prepend("get", args)),
            Commands::Install { args } => Some(prepend("install", args)),
            Commands::External(args) => Some(args.clone()),
            _ => None,
        }
    }
}

fn prepend(subcommand: &str, args: &[String]) -> Vec<String> {
    std::iter::once(subcommand.to_string())
        .chain(args.iter().cloned())
        .collect()
}

/// Parse the command line.
///
/// ago's own options are long flags placed before the command. The first
/// token after them that starts with `-` and is not one of ago's options
/// hands the rest of the line to the wrapped tool untouched, so
/// `ago -C dir build` runs `go -C dir build`. Likewise `ago alias -x pkg`
/// defines the alias `-x` instead of failing on an unknown flag.
pub fn parse_command_line<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut cmd = Cli::command();
    cmd.build();

    let at = skip_own_options(&cmd, &argv);
    let Some(token) = argv.get(at).and_then(|arg| arg.to_str()) else {
        return Cli::try_parse_from(argv);
    };

    let command = if token.starts_with('-') {
        Commands::External(utf8_args(&argv[at..])?)
    } else if is_alias_command(&cmd, token) && starts_with_hyphen(argv.get(at + 1)) {
        Commands::Alias {
            command: Some(AliasCommands::Define(utf8_args(&argv[at + 1..])?)),
        }
    } else {
        return Cli::try_parse_from(argv);
    };

    let mut cli = Cli::try_parse_from(&argv[..at])?;
    cli.command = Some(command);
    Ok(cli)
}

/// Index of the first token that is not one of ago's own options or their
/// values.
fn skip_own_options(cmd: &clap::Command, argv: &[OsString]) -> usize {
    let mut at = 1;
    while let Some(token) = argv.get(at).and_then(|arg| arg.to_str()) {
        let Some(takes_value) = own_option(cmd, token) else {
            break;
        };
        at += if takes_value && !token.contains('=') { 2 } else { 1 };
    }
    at.min(argv.len())
}

/// `Some(takes_value)` when `token` names one of ago's top-level options.
fn own_option(cmd: &clap::Command, token: &str) -> Option<bool> {
    let arg = if let Some(long) = token.strip_prefix("--") {
        let name = long.split('=').next().unwrap_or(long);
        cmd.get_arguments().find(|arg| arg.get_long() == Some(name))?
    } else {
        let short = token.strip_prefix('-')?.chars().next()?;
        cmd.get_arguments().find(|arg| arg.get_short() == Some(short))?
    };
    Some(arg.get_action().takes_values())
}

fn is_alias_command(cmd: &clap::Command, token: &str) -> bool {
    cmd.find_subcommand(token)
        .is_some_and(|sub| sub.get_name() == "alias")
}

fn starts_with_hyphen(arg: Option<&OsString>) -> bool {
    arg.and_then(|arg| arg.to_str())
        .is_some_and(|arg| arg.starts_with('-'))
}

fn utf8_args(args: &[OsString]) -> Result<Vec<String>, clap::Error> {
    args.iter()
        .map(|arg| {
            arg.to_str()
                .map(str::to_string)
                .ok_or_else(|| clap::Error::new(ErrorKind::InvalidUtf8))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ago").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_subcommand() {
        let cli = parse(&[]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_get_keeps_flags_verbatim() {
        let cli = parse(&["get", "-u", "foo@latest", "-h", "bar"]);
        assert_eq!(
            cli.command,
            Some(Commands::Get {
                args: vec![
                    "-u".to_string(),
                    "foo@latest".to_string(),
                    "-h".to_string(),
                    "bar".to_string(),
                ]
            })
        );
    }

    #[test]
    fn test_install_args() {
        let cli = parse(&["install", "foo/v3/cmd/tool@v3.1.0"]);
        let command = cli.command.unwrap();
        assert_eq!(
            command.forwarded_args().unwrap(),
            vec!["install", "foo/v3/cmd/tool@v3.1.0"]
        );
    }

    #[test]
    fn test_unknown_subcommand_is_external() {
        let cli = parse(&["build", "-o", "bin/app", "./cmd/app"]);
        let command = cli.command.unwrap();
        assert_eq!(
            command,
            Commands::External(vec![
                "build".to_string(),
                "-o".to_string(),
                "bin/app".to_string(),
                "./cmd/app".to_string(),
            ])
        );
        assert_eq!(
            command.forwarded_args().unwrap(),
            vec!["build", "-o", "bin/app", "./cmd/app"]
        );
    }

    #[test]
    fn test_alias_subcommands() {
        for name in ["alias", "a"] {
            assert_eq!(
                parse(&[name]).command,
                Some(Commands::Alias { command: None })
            );
        }

        for list in ["list", "ls", "l"] {
            assert_eq!(
                parse(&["alias", list]).command,
                Some(Commands::Alias {
                    command: Some(AliasCommands::List)
                })
            );
        }

        assert_eq!(
            parse(&["a", "rm", "foo"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::Rm {
                    args: vec!["foo".to_string()]
                })
            })
        );
        assert_eq!(
            parse(&["alias", "rm"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::Rm { args: vec![] })
            })
        );
        assert_eq!(
            parse(&["alias", "help"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::Help)
            })
        );
    }

    #[test]
    fn test_alias_define_form() {
        assert_eq!(
            parse(&["alias", "foo", "github.com/foo/bar/v2"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::Define(vec![
                    "foo".to_string(),
                    "github.com/foo/bar/v2".to_string(),
                ]))
            })
        );
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&[
            "--config-dir",
            "/tmp/ago",
            "--tool",
            "go1.22",
            "--format=json",
            "--verbose",
            "--dry-run",
            "help",
        ]);
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/ago")));
        assert_eq!(cli.tool.as_deref(), Some("go1.22"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(cli.dry_run);
        assert_eq!(cli.command, Some(Commands::Help));
    }

    fn parse_line(args: &[&str]) -> Cli {
        parse_command_line(std::iter::once("ago").chain(args.iter().copied())).unwrap()
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn test_leading_tool_flags_pass_through() {
        let lines: [&[&str]; 6] = [
            &["-C", "sub", "build"],
            &["-x", "build"],
            &["-v"],
            &["-h"],
            &["--help"],
            &["--", "build"],
        ];
        for line in lines {
            assert_eq!(
                parse_line(line).command,
                Some(Commands::External(strings(line))),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_own_options_before_passthrough() {
        let cli = parse_line(&["--tool", "gotip", "--dry-run", "-C", "sub", "build"]);
        assert_eq!(cli.tool.as_deref(), Some("gotip"));
        assert!(cli.dry_run);
        assert_eq!(
            cli.command,
            Some(Commands::External(strings(&["-C", "sub", "build"])))
        );

        let cli = parse_line(&["--format=json", "-C", "sub", "get", "foo"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(
            cli.command,
            Some(Commands::External(strings(&["-C", "sub", "get", "foo"])))
        );
    }

    #[test]
    fn test_parse_command_line_matches_clap_otherwise() {
        let cli = parse_line(&["--verbose", "get", "-u", "foo@latest"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Get {
                args: strings(&["-u", "foo@latest"])
            })
        );

        assert_eq!(parse_line(&[]).command, None);
        assert_eq!(
            parse_line(&["alias", "ls"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::List)
            })
        );
    }

    #[test]
    fn test_hyphen_alias_names() {
        for name in ["alias", "a"] {
            assert_eq!(
                parse_line(&[name, "-x", "github.com/x/y"]).command,
                Some(Commands::Alias {
                    command: Some(AliasCommands::Define(strings(&["-x", "github.com/x/y"])))
                })
            );
        }

        assert_eq!(
            parse_line(&["alias", "rm", "-x"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::Rm {
                    args: strings(&["-x"])
                })
            })
        );
    }

    #[test]
    fn test_rm_ignores_extra_arguments() {
        assert_eq!(
            parse_line(&["alias", "rm", "foo", "extra", "--more"]).command,
            Some(Commands::Alias {
                command: Some(AliasCommands::Rm {
                    args: strings(&["foo", "extra", "--more"])
                })
            })
        );
    }

    #[test]
    fn test_missing_option_value_is_an_error() {
        assert!(parse_command_line(["ago", "--tool"]).is_err());
        assert!(parse_command_line(["ago", "--format", "xml", "build"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
