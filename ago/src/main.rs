//! ago
//!
//! Wrapper around the go command that resolves package aliases.

use ago::cli::{
    forwarded_args, generate_completion, handle_alias, handle_forward, handle_help,
    parse_command_line, Cli, Commands, OutputFormat,
};
use ago::config::CliConfig;
use ago::runner::ToolRunner;
use ago_core::AliasStore;
use anyhow::Result;

/// Exit code for errors raised by ago itself.
const FAILURE_EXIT_CODE: i32 = 1;

fn main() {
    let cli = parse_command_line(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let verbose = cli.verbose;

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            if verbose {
                eprintln!("Error details: {:?}", e);
            }
            FAILURE_EXIT_CODE
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    // Build configuration using priority chain: defaults → file → env → CLI args
    let mut builder = CliConfig::builder()
        .with_config_dir(cli.config_dir.clone())?
        .with_config_file(!cli.no_config)?
        .with_env_overrides();

    if let Some(ref tool) = cli.tool {
        builder = builder.with_tool(tool)?;
    }
    if let Some(ref format) = cli.format {
        builder = builder.with_output_format(format.as_str())?;
    }
    if cli.verbose {
        builder = builder.with_verbose(true);
    }
    if cli.no_echo {
        builder = builder.with_echo(false);
    }

    let config = builder.build()?;
    init_tracing(config.verbose);

    tracing::debug!("Config directory: {}", config.config_dir.display());
    tracing::debug!("Wrapped tool: {}", config.tool);

    let output_format = match config.output_format.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let store = AliasStore::new(&config.config_dir);
    let mut stdout = std::io::stdout().lock();

    let Some(command) = cli.command else {
        handle_help(&mut stdout)?;
        return Ok(0);
    };

    match command {
        Commands::Help => {
            handle_help(&mut stdout)?;
            Ok(0)
        }
        Commands::Alias { command } => {
            handle_alias(&store, command, &output_format, &mut stdout)?;
            Ok(0)
        }
        Commands::Completion { shell } => {
            generate_completion(shell, &mut stdout);
            Ok(0)
        }
        command => {
            let args = forwarded_args(&store, &command)?.unwrap_or_default();
            let runner = ToolRunner::new(config.tool.as_str());
            handle_forward(&runner, &args, config.echo, cli.dry_run, &mut stdout)
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
