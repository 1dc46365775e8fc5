// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Command-line front end: convert bit-strings into programs, or encode text.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use binscribe::config::parse_color_override;
use binscribe::syntax::{IndexedColor, TokenClass};
use binscribe::{OutputFormat, RenderConfig, TargetLanguage, convert, encode};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "binscribe", version, about = "Convert binary to C, C++, or C Shell")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a bit-string and print it as a program
    Convert {
        /// Bits to decode; read from stdin when omitted
        bits: Vec<String>,
        /// Target language: c, cpp or cshell
        #[arg(short, long, env = "BINSCRIBE_LANG", default_value = "c")]
        lang: TargetLanguage,
        /// Output format: plain, html or ansi
        #[arg(short, long, env = "BINSCRIBE_FORMAT", default_value = "plain")]
        format: OutputFormat,
        /// Terminal color depth for ansi output (16 or 256)
        #[arg(long, default_value_t = 256)]
        colors: u16,
        /// Override a token color for ansi output, e.g. `keyword=bright-red` (repeatable)
        #[arg(long = "color", value_name = "CLASS=COLOR", value_parser = parse_color_override)]
        color_overrides: Vec<(TokenClass, IndexedColor)>,
        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the bit-string for a piece of text
    Encode {
        text: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Convert {
            bits,
            lang,
            format,
            colors,
            color_overrides,
            output,
        } => {
            let config = RenderConfig::new(format, colors)
                .map_err(|e| e.to_string())?
                .with_color_overrides(color_overrides);
            let input = if bits.is_empty() { read_stdin()? } else { bits.join(" ") };

            let conversion = convert(&input, lang).map_err(|e| e.to_string())?;
            let rendered = conversion.render(&config);

            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{rendered}\n")).map_err(|e| {
                        error!(path = %path.display(), "failed to write output");
                        format!("Error writing {}: {e}", path.display())
                    })?;
                    info!(path = %path.display(), "wrote output");
                    eprintln!("{}", conversion.notice());
                }
                None => println!("{rendered}"),
            }
            Ok(())
        }
        Command::Encode { text } => {
            let bits = encode(&text).map_err(|e| e.to_string())?;
            println!("{bits}");
            Ok(())
        }
    }
}

fn read_stdin() -> Result<String, String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("Error reading stdin: {e}"))?;
    Ok(input)
}
