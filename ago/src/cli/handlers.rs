//! Command execution handlers

use ago_core::{resolve_args, validate_alias, AgoError, AliasStore};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

use crate::format::{format_aliases, format_command, format_success};
use crate::runner::ToolRunner;

use super::commands::*;
use super::usage::{AGO_USAGE, ALIAS_USAGE};

/// Print the top-level usage text
pub fn handle_help<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", AGO_USAGE)?;
    Ok(())
}

/// Handle alias commands
pub fn handle_alias<W: Write>(
    store: &AliasStore,
    command: Option<AliasCommands>,
    format: &OutputFormat,
    out: &mut W,
) -> Result<()> {
    let Some(command) = command else {
        write!(out, "{}", ALIAS_USAGE)?;
        return Ok(());
    };

    match command {
        AliasCommands::Help => {
            write!(out, "{}", ALIAS_USAGE)?;
        }
        AliasCommands::List => {
            let aliases = store.load()?;
            let formatted = format_aliases(&aliases, &format.into())?;
            writeln!(out, "{}", formatted)?;
        }
        AliasCommands::Rm { args } => {
            let alias = args.into_iter().next().ok_or_else(not_enough_arguments)?;

            let mut aliases = store.load()?;
            if !aliases.remove(&alias) {
                debug!("Alias {:?} was not defined", alias);
            }
            store.save(&aliases)?;

            writeln!(out, "{}", format_success(&format!("removed alias {:?}", alias)))?;
        }
        AliasCommands::Define(args) => {
            let [alias, target, ..] = args.as_slice() else {
                return Err(not_enough_arguments().into());
            };
            validate_alias(alias)?;

            let mut aliases = store.load()?;
            if let Some(previous) = aliases.set(alias.as_str(), target.as_str()) {
                debug!("Alias {:?} previously pointed to {:?}", alias, previous);
            }
            store.save(&aliases)?;

            writeln!(
                out,
                "{}",
                format_success(&format!("aliased {:?} to {:?}", alias, target))
            )?;
        }
    }

    Ok(())
}

/// Build the argument list for the wrapped tool.
///
/// `get` and `install` arguments go through alias resolution; anything else
/// is passed on verbatim. Returns `None` for commands handled locally.
pub fn forwarded_args(store: &AliasStore, command: &Commands) -> Result<Option<Vec<String>>> {
    let (subcommand, args) = match command {
        Commands::Get { args } => ("get", args),
        Commands::Install { args } => ("install", args),
        other => return Ok(other.forwarded_args()),
    };

    let aliases = store.load()?;
    let mut forwarded = Vec::with_capacity(args.len() + 1);
    forwarded.push(subcommand.to_string());
    forwarded.extend(resolve_args(args, &aliases));
    Ok(Some(forwarded))
}

/// Run the wrapped tool and return its exit code.
///
/// With `dry_run` the command line is printed and nothing runs.
pub fn handle_forward<W: Write>(
    runner: &ToolRunner,
    args: &[String],
    echo: bool,
    dry_run: bool,
    out: &mut W,
) -> Result<i32> {
    if echo || dry_run {
        writeln!(out, "{}", format_command(runner.program(), args))?;
        out.flush()?;
    }

    if dry_run {
        return Ok(0);
    }

    Ok(runner.run(args)?)
}

/// Generate shell completion script
pub fn generate_completion<W: Write>(shell: clap_complete::Shell, out: &mut W) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}

fn not_enough_arguments() -> AgoError {
    AgoError::Usage("not enough arguments".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ago_core::AliasData;
    use tempfile::TempDir;

    fn store_with(pairs: &[(&str, &str)]) -> (TempDir, AliasStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = AliasStore::new(temp_dir.path());
        let mut data = AliasData::empty();
        for (alias, target) in pairs {
            data.set(*alias, *target);
        }
        store.save(&data).unwrap();
        (temp_dir, store)
    }

    fn run_alias(store: &AliasStore, command: Option<AliasCommands>) -> Result<String> {
        let mut out = Vec::new();
        handle_alias(store, command, &OutputFormat::Table, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_alias_without_subcommand_prints_usage() {
        let (_dir, store) = store_with(&[]);
        assert_eq!(run_alias(&store, None).unwrap(), ALIAS_USAGE);
        assert_eq!(
            run_alias(&store, Some(AliasCommands::Help)).unwrap(),
            ALIAS_USAGE
        );
    }

    #[test]
    fn test_define_persists() {
        let (_dir, store) = store_with(&[]);
        let output = run_alias(
            &store,
            Some(AliasCommands::Define(vec![
                "foo".to_string(),
                "github.com/foo/bar/v2".to_string(),
            ])),
        )
        .unwrap();

        assert!(output.contains(r#"aliased "foo" to "github.com/foo/bar/v2""#));
        assert_eq!(store.load().unwrap().get("foo"), Some("github.com/foo/bar/v2"));
    }

    #[test]
    fn test_define_requires_two_arguments() {
        let (_dir, store) = store_with(&[]);
        let err = run_alias(&store, Some(AliasCommands::Define(vec!["foo".to_string()])))
            .unwrap_err();
        assert_eq!(err.to_string(), "not enough arguments");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_define_rejects_empty_alias() {
        let (_dir, store) = store_with(&[]);
        let result = run_alias(
            &store,
            Some(AliasCommands::Define(vec![
                "".to_string(),
                "github.com/foo/bar".to_string(),
            ])),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rm_missing_alias_succeeds() {
        let (_dir, store) = store_with(&[("bar", "github.com/bar/baz")]);
        let output = run_alias(
            &store,
            Some(AliasCommands::Rm {
                args: vec!["foo".to_string(), "extra".to_string()],
            }),
        )
        .unwrap();

        assert!(output.contains(r#"removed alias "foo""#));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_rm_requires_alias() {
        let (_dir, store) = store_with(&[]);
        let err = run_alias(&store, Some(AliasCommands::Rm { args: vec![] })).unwrap_err();
        assert_eq!(err.to_string(), "not enough arguments");
    }

    #[test]
    fn test_list_sorted() {
        let (_dir, store) = store_with(&[("b", "y"), ("a", "x")]);
        let output = run_alias(&store, Some(AliasCommands::List)).unwrap();
        let a = output.find("│ a ").unwrap();
        let b = output.find("│ b ").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_forwarded_args_resolves_get_and_install() {
        let (_dir, store) = store_with(&[("foo", "github.com/foo/bar/v2")]);

        let get = Commands::Get {
            args: vec!["-u".to_string(), "foo@v1.2.3".to_string()],
        };
        assert_eq!(
            forwarded_args(&store, &get).unwrap().unwrap(),
            vec!["get", "-u", "github.com/foo/bar/v2@v1.2.3"]
        );

        let install = Commands::Install {
            args: vec!["foo/v3/cmd/x@latest".to_string()],
        };
        assert_eq!(
            forwarded_args(&store, &install).unwrap().unwrap(),
            vec!["install", "github.com/foo/bar/v3/cmd/x@latest"]
        );
    }

    #[test]
    fn test_forwarded_args_other_commands_verbatim() {
        let (_dir, store) = store_with(&[("foo", "github.com/foo/bar/v2")]);

        let build = Commands::External(vec!["build".to_string(), "foo".to_string()]);
        assert_eq!(
            forwarded_args(&store, &build).unwrap().unwrap(),
            vec!["build", "foo"]
        );

        assert_eq!(forwarded_args(&store, &Commands::Help).unwrap(), None);
    }

    #[test]
    fn test_forwarded_external_ignores_broken_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = AliasStore::new(temp_dir.path());
        std::fs::write(store.path(), "not json").unwrap();

        let build = Commands::External(vec!["version".to_string()]);
        assert!(forwarded_args(&store, &build).is_ok());

        let get = Commands::Get {
            args: vec!["foo".to_string()],
        };
        assert!(forwarded_args(&store, &get).is_err());
    }

    #[test]
    fn test_dry_run_does_not_spawn() {
        let runner = ToolRunner::new("ago-test-no-such-tool-3f9c1");
        let mut out = Vec::new();
        let code = handle_forward(&runner, &["get".to_string()], false, true, &mut out).unwrap();

        assert_eq!(code, 0);
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("> ago-test-no-such-tool-3f9c1 get"));
    }

    #[test]
    fn test_forward_spawn_failure() {
        let runner = ToolRunner::new("ago-test-no-such-tool-3f9c1");
        let mut out = Vec::new();
        let err = handle_forward(&runner, &[], false, false, &mut out).unwrap_err();
        assert!(err.to_string().contains("Failed to start"));
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_forward_propagates_exit_code() {
        let runner = ToolRunner::new("false");
        let mut out = Vec::new();
        assert_eq!(handle_forward(&runner, &[], true, false, &mut out).unwrap(), 1);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_completion_mentions_binary() {
        let mut out = Vec::new();
        generate_completion(clap_complete::Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("ago"));
    }
}
