//! Template acquisition: local file or HTTP fetch, loaded once per session.

use std::path::PathBuf;

use crate::config::MailsigConfig;
use crate::error::{Error, Result};
use crate::paths;
use crate::utils::io;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the signature template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Url(String),
    File(PathBuf),
}

impl TemplateSource {
    /// Classify a raw source string. Anything that is not an http(s) URL is
    /// treated as a file path, with `~` expanded.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            TemplateSource::Url(raw.to_string())
        } else {
            let expanded = shellexpand::tilde(raw).to_string();
            TemplateSource::File(PathBuf::from(expanded))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Url(url) => url.clone(),
            TemplateSource::File(path) => path.display().to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TemplateSource::Url(_) => "url",
            TemplateSource::File(_) => "file",
        }
    }
}

/// Raw template text as loaded from its source.
///
/// The text is kept pristine for the lifetime of a session so field changes
/// can always re-bind against the original markers.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Load the template from its source. One attempt, no retry.
pub fn load(source: &TemplateSource) -> Result<Template> {
    let text = match source {
        TemplateSource::File(path) => {
            if !path.exists() {
                return Err(Error::template_not_found(path.display().to_string()));
            }
            io::read_file(path, "read template")?
        }
        TemplateSource::Url(url) => fetch(url)?,
    };

    Ok(Template { text })
}

fn fetch(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!("mailsig/{}", VERSION))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| Error::internal_io(e.to_string(), Some("create HTTP client".to_string())))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::template_fetch_failed(url, None, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::template_fetch_failed(
            url,
            Some(status.as_u16()),
            format!("HTTP status {}", status),
        ));
    }

    response
        .text()
        .map_err(|e| Error::template_fetch_failed(url, Some(status.as_u16()), e.to_string()))
}

/// Resolve the template source: explicit argument first, then the configured
/// default, then the fallback file under the mailsig config directory.
pub fn resolve_source(explicit: Option<&str>, config: &MailsigConfig) -> Result<TemplateSource> {
    if let Some(raw) = explicit {
        return Ok(TemplateSource::parse(raw));
    }

    if let Some(raw) = config.defaults.template.as_deref() {
        return Ok(TemplateSource::parse(raw));
    }

    Ok(TemplateSource::File(paths::default_template()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_classifies_urls_and_files() {
        assert_eq!(
            TemplateSource::parse("https://example.com/mail.html").kind(),
            "url"
        );
        assert_eq!(TemplateSource::parse("http://intranet/mail.html").kind(), "url");
        assert_eq!(TemplateSource::parse("./mail.html").kind(), "file");
        assert_eq!(TemplateSource::parse("/srv/mail.html").kind(), "file");
    }

    #[test]
    fn parse_expands_tilde_for_files() {
        let source = TemplateSource::parse("~/signatures/mail.html");
        match source {
            TemplateSource::File(path) => assert!(!path.to_string_lossy().starts_with('~')),
            TemplateSource::Url(_) => panic!("expected file source"),
        }
    }

    #[test]
    fn load_reads_local_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, "<html>signature</html>").unwrap();

        let source = TemplateSource::File(temp.path().to_path_buf());
        let template = load(&source).unwrap();
        assert_eq!(template.as_str(), "<html>signature</html>");
        assert!(!template.is_empty());
    }

    #[test]
    fn load_missing_file_reports_not_found() {
        let source = TemplateSource::File(PathBuf::from("/nonexistent/mail.html"));
        let err = load(&source).unwrap_err();
        assert_eq!(err.code.as_str(), "template.not_found");
    }

    #[test]
    fn load_accepts_empty_template() {
        let temp = NamedTempFile::new().unwrap();
        let source = TemplateSource::File(temp.path().to_path_buf());
        let template = load(&source).unwrap();
        assert!(template.is_empty());
        assert_eq!(template.len(), 0);
    }

    #[test]
    fn resolve_prefers_explicit_source() {
        let mut config = MailsigConfig::default();
        config.defaults.template = Some("/configured/mail.html".to_string());

        let source = resolve_source(Some("/explicit/mail.html"), &config).unwrap();
        assert_eq!(source.describe(), "/explicit/mail.html");
    }

    #[test]
    fn resolve_falls_back_to_config() {
        let mut config = MailsigConfig::default();
        config.defaults.template = Some("https://example.com/mail.html".to_string());

        let source = resolve_source(None, &config).unwrap();
        assert_eq!(source.kind(), "url");
    }

    #[test]
    fn resolve_defaults_to_config_dir_file() {
        let config = MailsigConfig::default();
        let source = resolve_source(None, &config).unwrap();
        assert!(source.describe().ends_with("mail.html"));
    }
}
