use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Raw(RawOutputMode),
}

#[derive(Debug, Clone, Copy)]
enum RawOutputMode {
    InteractivePassthrough,
    Document,
}

mod commands;
mod output;
mod tty;

use commands::{config, edit, generate, preview, template};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "mailsig")]
#[command(version = VERSION)]
#[command(about = "CLI for generating HTML email signatures from a shared template")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bound signature document to stdout
    Preview(preview::PreviewArgs),
    /// Bind field values and write the signature file
    Generate(generate::GenerateArgs),
    /// Edit fields interactively with live preview and export
    Edit(edit::EditArgs),
    /// Inspect the template source
    Template(template::TemplateArgs),
    /// Manage global mailsig configuration
    Config(config::ConfigArgs),
}

fn response_mode(command: &Commands) -> ResponseMode {
    match command {
        Commands::Preview(_) => ResponseMode::Raw(RawOutputMode::Document),
        Commands::Edit(_) => ResponseMode::Raw(RawOutputMode::InteractivePassthrough),
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let mode = response_mode(&cli.command);

    match mode {
        ResponseMode::Json => {}
        ResponseMode::Raw(RawOutputMode::InteractivePassthrough) => {
            if !tty::require_tty_for_interactive() {
                let err = mailsig::Error::validation_invalid_argument(
                    "tty",
                    "This command requires an interactive TTY",
                    None,
                    None,
                );
                output::print_result::<serde_json::Value>(Err(err));
                return std::process::ExitCode::from(exit_code_to_u8(2));
            }
        }
        ResponseMode::Raw(RawOutputMode::Document) => {}
    }

    if let ResponseMode::Raw(RawOutputMode::Document) = mode {
        let document_result = commands::run_document(cli.command, &global);

        match document_result {
            Ok((content, exit_code)) => {
                print!("{}", content);
                return std::process::ExitCode::from(exit_code_to_u8(exit_code));
            }
            Err(err) => {
                let (json_result, exit_code) =
                    output::map_cmd_result_to_json::<serde_json::Value>(Err(err));
                output::print_json_result(json_result);
                return std::process::ExitCode::from(exit_code_to_u8(exit_code));
            }
        }
    }

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    match mode {
        ResponseMode::Json => {
            output::print_json_result(json_result);
        }
        ResponseMode::Raw(RawOutputMode::InteractivePassthrough) => {}
        ResponseMode::Raw(RawOutputMode::Document) => {}
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
