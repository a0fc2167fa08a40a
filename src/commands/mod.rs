use std::path::PathBuf;

use clap::Args;

use mailsig::config::MailsigConfig;
use mailsig::{Field, FieldValues};

pub type CmdResult<T> = mailsig::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Shared field override flags.
///
/// Values not given here fall back to the configured defaults, which in turn
/// fall back to the placeholder identity baked into the template.
#[derive(Args, Default, Debug)]
pub struct FieldArgs {
    /// Display name (also drives the exported file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Email address substituted into the template
    #[arg(long)]
    pub email: Option<String>,

    /// Job title
    #[arg(long)]
    pub title: Option<String>,
}

impl FieldArgs {
    /// Overlay these flags onto base field values.
    pub fn apply(&self, mut fields: FieldValues) -> FieldValues {
        if let Some(name) = &self.name {
            fields.set(Field::Name, name.clone());
        }
        if let Some(email) = &self.email {
            fields.set(Field::Email, email.clone());
        }
        if let Some(title) = &self.title {
            fields.set(Field::Title, title.clone());
        }
        fields
    }
}

/// Resolve the export directory: explicit value, then configured default,
/// then the current directory.
pub(crate) fn resolve_out_dir(explicit: Option<&str>, cfg: &MailsigConfig) -> PathBuf {
    let raw = explicit
        .or(cfg.defaults.output_dir.as_deref())
        .unwrap_or(".");
    PathBuf::from(shellexpand::tilde(raw).to_string())
}

pub mod config;
pub mod edit;
pub mod generate;
pub mod preview;
pub mod template;

pub(crate) fn run_document(
    command: crate::Commands,
    _global: &GlobalArgs,
) -> mailsig::Result<(String, i32)> {
    match command {
        crate::Commands::Preview(args) => preview::run_document(args),
        _ => Err(mailsig::Error::validation_invalid_argument(
            "output_mode",
            "Command does not support document output",
            None,
            None,
        )),
    }
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (mailsig::Result<serde_json::Value>, i32) {
    crate::tty::status("mailsig is working...");

    match command {
        // Commands without global context
        crate::Commands::Template(args) => dispatch!(args, template),

        // Commands with global context
        crate::Commands::Generate(args) => dispatch!(args, global, generate),
        crate::Commands::Edit(args) => dispatch!(args, global, edit),
        crate::Commands::Config(args) => dispatch!(args, global, config),

        // Special case: Preview uses raw output mode
        crate::Commands::Preview(_) => {
            let err = mailsig::Error::validation_invalid_argument(
                "output_mode",
                "Preview command uses document output mode",
                None,
                None,
            );
            crate::output::map_cmd_result_to_json::<serde_json::Value>(Err(err))
        }
    }
}
