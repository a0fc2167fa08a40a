//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use mailsig::error::Hint;
use mailsig::{Error, ErrorCode, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryable: Option<bool>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
                retryable: err.retryable,
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn print_result<T: Serialize>(result: Result<T>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ConfigInvalidJson
        | ErrorCode::ConfigInvalidValue
        | ErrorCode::ValidationMissingArgument
        | ErrorCode::ValidationInvalidArgument
        | ErrorCode::ValidationInvalidJson => 2,

        ErrorCode::TemplateNotFound => 4,

        ErrorCode::TemplateFetchFailed => 20,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_error() {
        let response = CliResponse::success(json!({"fileName": "ayse-kaya.html"}));
        let payload = serde_json::to_value(&response).unwrap();

        assert_eq!(payload["success"], true);
        assert_eq!(payload["data"]["fileName"], "ayse-kaya.html");
        assert!(payload.get("error").is_none());
    }

    #[test]
    fn error_envelope_carries_code_and_details() {
        let err = Error::template_not_found("/srv/mail.html");
        let response = CliResponse::<()>::from_error(&err);
        let payload = serde_json::to_value(&response).unwrap();

        assert_eq!(payload["success"], false);
        assert_eq!(payload["error"]["code"], "template.not_found");
        assert_eq!(payload["error"]["details"]["source"], "/srv/mail.html");
        assert!(payload["error"]["hints"].is_array());
        assert!(payload.get("data").is_none());
    }

    #[test]
    fn validation_errors_map_to_exit_code_2() {
        let err = Error::validation_invalid_argument("field", "bad", None, None);
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(code, 2);
    }

    #[test]
    fn template_errors_map_to_dedicated_exit_codes() {
        let not_found = Error::template_not_found("mail.html");
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(not_found));
        assert_eq!(code, 4);

        let fetch = Error::template_fetch_failed("https://x/mail.html", Some(503), "HTTP 503");
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(fetch));
        assert_eq!(code, 20);
    }

    #[test]
    fn internal_errors_map_to_exit_code_1() {
        let err = Error::internal_io("disk full", None);
        let (_, code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
        assert_eq!(code, 1);
    }

    #[test]
    fn successful_results_keep_command_exit_code() {
        let (value, code) = map_cmd_result_to_json(Ok((json!({"ok": true}), 0)));
        assert_eq!(code, 0);
        assert_eq!(value.unwrap()["ok"], true);
    }
}
