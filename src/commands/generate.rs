use clap::Args;
use serde::Serialize;

use mailsig::config;
use mailsig::exporter::{self, ExportOutcome};
use mailsig::log_status;
use mailsig::{template, FieldValues, Session};

use super::{CmdResult, FieldArgs};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Template source (file path or http(s) URL)
    #[arg(long, value_name = "SOURCE")]
    pub template: Option<String>,

    /// Output directory for the signature file (default: configured dir, then cwd)
    #[arg(long, value_name = "DIR")]
    pub out: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateOutput {
    command: String,
    template_source: String,
    template_kind: String,
    fields: FieldValues,
    export: ExportOutcome,
}

pub fn run(args: GenerateArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<GenerateOutput> {
    let cfg = config::load_config();
    let fields = args.fields.apply(cfg.defaults.fields.clone());

    let source = template::resolve_source(args.template.as_deref(), &cfg)?;

    let mut session = Session::new(fields);
    session.load_template(&source)?;

    let out_dir = super::resolve_out_dir(args.out.as_deref(), &cfg);
    let document = session.bound_document().unwrap_or_default().to_string();
    let export = exporter::export(&document, &session.fields().name, &out_dir)?;

    log_status!("generate", "Wrote {}", export.path);

    Ok((
        GenerateOutput {
            command: "generate".to_string(),
            template_source: source.describe(),
            template_kind: source.kind().to_string(),
            fields: session.fields().clone(),
            export,
        },
        0,
    ))
}
