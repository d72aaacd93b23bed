use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use hts_cli::cli::{Cli, Commands, OutputFormat};
use hts_cli::commands::{DecodeArgs, EncodeArgs, cmd_config, cmd_decode, cmd_encode};
use hts_cli::config::{Config, PreferenceOverrides, resolve_format};
use hts_cli::format::FormatOptions;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "hts", &mut io::stdout());
        return Ok(());
    }

    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::path);
    let config = Config::load_from(&config_path);
    tracing::debug!("Using config {}", config_path.display());

    let opts = FormatOptions::new(cli.no_color || config.no_color).with_compact(cli.compact);
    let output = cli.output.as_ref();

    match cli.command {
        Commands::Encode {
            wrist,
            pair_button,
            intensity,
            base,
            format,
        } => {
            let args = EncodeArgs {
                overrides: PreferenceOverrides {
                    wrist,
                    pair_button,
                    intensity,
                },
                base,
                format: resolve_format(cli.json, format, &config, OutputFormat::Hex),
            };
            cmd_encode(args, &config, output, &opts)?;
        }
        Commands::Decode {
            bytes,
            strict,
            format,
            no_header,
        } => {
            let args = DecodeArgs {
                bytes,
                strict: strict || config.strict,
                format: resolve_format(cli.json, format, &config, OutputFormat::Text),
            };
            cmd_decode(args, output, &opts.with_no_header(no_header))?;
        }
        Commands::Config { action } => {
            cmd_config(action, &config_path, cli.quiet)?;
        }
        Commands::Completions { .. } => {
            // Already handled above
            unreachable!()
        }
    }

    Ok(())
}
