use clap::Args;

use mailsig::{config, template, Session};

use super::{CmdResult, FieldArgs};

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Template source (file path or http(s) URL)
    #[arg(long, value_name = "SOURCE")]
    pub template: Option<String>,
}

/// Document output mode: print the bound signature to stdout.
pub fn run_document(args: PreviewArgs) -> CmdResult<String> {
    let cfg = config::load_config();
    let fields = args.fields.apply(cfg.defaults.fields.clone());

    let source = template::resolve_source(args.template.as_deref(), &cfg)?;

    let mut session = Session::new(fields);
    session.load_template(&source)?;

    let document = session.bound_document().unwrap_or_default().to_string();
    Ok((document, 0))
}
