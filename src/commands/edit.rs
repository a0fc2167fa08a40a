use clap::Args;
use serde::Serialize;

use mailsig::log_status;
use mailsig::{config, exporter, template, Field, FieldValues, Session};

use super::{CmdResult, FieldArgs};
use crate::tty;

#[derive(Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Template source (file path or http(s) URL)
    #[arg(long, value_name = "SOURCE")]
    pub template: Option<String>,

    /// Output directory for exported signatures
    #[arg(long, value_name = "DIR")]
    pub out: Option<String>,
}

#[derive(Serialize)]
pub struct EditOutput {
    command: String,
    template_source: String,
    template_loaded: bool,
    exports: u32,
    fields: FieldValues,
}

/// Interactive editing loop. Field changes re-bind immediately; `preview`
/// prints the current document and `export` writes it to disk.
pub fn run(args: EditArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<EditOutput> {
    let cfg = config::load_config();
    let fields = args.fields.apply(cfg.defaults.fields.clone());

    let source = template::resolve_source(args.template.as_deref(), &cfg)?;
    let mut session = Session::new(fields);

    // A missing template leaves the editor usable; preview and export just
    // report that nothing is loaded, matching the empty-preview behavior.
    let template_loaded = match session.load_template(&source) {
        Ok(()) => {
            log_status!("edit", "Template loaded from {}", source.describe());
            true
        }
        Err(err) => {
            log_status!("edit", "Template unavailable: {}", err);
            false
        }
    };

    let mut exports: u32 = 0;

    loop {
        let Some(line) = tty::prompt_line("mailsig> ")? else {
            break;
        };
        if line.is_empty() {
            continue;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line.as_str(), ""),
        };

        match verb {
            "quit" | "exit" => break,
            "help" => print_help(),
            "show" => {
                let fields = session.fields();
                eprintln!("name:  {}", fields.name);
                eprintln!("email: {}", fields.email);
                eprintln!("title: {}", fields.title);
            }
            "preview" => match session.bound_document() {
                Some(document) => println!("{}", document),
                None => log_status!("edit", "No template loaded"),
            },
            "export" => match session.bound_document() {
                Some(document) => {
                    let explicit = if rest.is_empty() {
                        args.out.as_deref()
                    } else {
                        Some(rest)
                    };
                    let out_dir = super::resolve_out_dir(explicit, &cfg);
                    match exporter::export(document, &session.fields().name, &out_dir) {
                        Ok(outcome) => {
                            exports += 1;
                            log_status!("edit", "Wrote {}", outcome.path);
                        }
                        Err(err) => log_status!("edit", "Export failed: {}", err),
                    }
                }
                None => log_status!("edit", "No template loaded"),
            },
            _ => match verb.parse::<Field>() {
                Ok(field) => {
                    session.set_field(field, rest.to_string());
                    log_status!("edit", "{} set", field.key());
                }
                Err(_) => log_status!("edit", "Unknown command '{}'. Try 'help'", verb),
            },
        }
    }

    Ok((
        EditOutput {
            command: "edit".to_string(),
            template_source: source.describe(),
            template_loaded,
            exports,
            fields: session.fields().clone(),
        },
        0,
    ))
}

fn print_help() {
    eprintln!("Commands:");
    eprintln!("  name <value>    Set the display name");
    eprintln!("  email <value>   Set the email address");
    eprintln!("  title <value>   Set the job title");
    eprintln!("  show            Show current field values");
    eprintln!("  preview         Print the bound signature to stdout");
    eprintln!("  export [dir]    Write <normalized-name>.html into dir");
    eprintln!("  quit            Leave the editor");
}
