use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base mailsig config directory (universal ~/.config/mailsig/ on all platforms)
pub fn mailsig() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("mailsig"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("mailsig"))
    }
}

/// Global mailsig.json config file path
pub fn mailsig_json() -> Result<PathBuf> {
    Ok(mailsig()?.join("mailsig.json"))
}

/// Fallback template location used when no source is configured
pub fn default_template() -> Result<PathBuf> {
    Ok(mailsig()?.join("mail.html"))
}
