use clap::{Args, Subcommand};
use serde::Serialize;

use mailsig::fields::{DEFAULT_EMAIL, DEFAULT_NAME, DEFAULT_TITLE};
use mailsig::template::TemplateSource;
use mailsig::{config, template};

use super::CmdResult;

#[derive(Args)]
pub struct TemplateArgs {
    #[command(subcommand)]
    command: TemplateCommand,
}

#[derive(Subcommand)]
enum TemplateCommand {
    /// Show the resolved template source
    Path {
        /// Template source override (file path or http(s) URL)
        #[arg(long, value_name = "SOURCE")]
        template: Option<String>,
    },
    /// Load the template and report whether it carries the expected markers
    Check {
        /// Template source override (file path or http(s) URL)
        #[arg(long, value_name = "SOURCE")]
        template: Option<String>,
    },
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum TemplateOutput {
    #[serde(rename = "template.path")]
    Path {
        source: String,
        kind: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        exists: Option<bool>,
    },

    #[serde(rename = "template.check")]
    Check {
        source: String,
        kind: String,
        bytes: usize,
        has_markers: bool,
    },
}

pub fn run_json(args: TemplateArgs) -> CmdResult<TemplateOutput> {
    match args.command {
        TemplateCommand::Path { template } => path(template.as_deref()),
        TemplateCommand::Check { template } => check(template.as_deref()),
    }
}

fn path(explicit: Option<&str>) -> CmdResult<TemplateOutput> {
    let cfg = config::load_config();
    let source = template::resolve_source(explicit, &cfg)?;

    let exists = match &source {
        TemplateSource::File(path) => Some(path.exists()),
        TemplateSource::Url(_) => None,
    };

    Ok((
        TemplateOutput::Path {
            source: source.describe(),
            kind: source.kind().to_string(),
            exists,
        },
        0,
    ))
}

fn check(explicit: Option<&str>) -> CmdResult<TemplateOutput> {
    let cfg = config::load_config();
    let source = template::resolve_source(explicit, &cfg)?;
    let loaded = template::load(&source)?;

    let text = loaded.as_str();
    let has_markers = text.contains(DEFAULT_NAME)
        || text.contains(DEFAULT_EMAIL)
        || text.contains(DEFAULT_TITLE);

    Ok((
        TemplateOutput::Check {
            source: source.describe(),
            kind: source.kind().to_string(),
            bytes: loaded.len(),
            has_markers,
        },
        0,
    ))
}
