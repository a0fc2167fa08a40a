use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// Placeholder identity baked into the shared template.
pub const DEFAULT_NAME: &str = "Dilara Erdem";
pub const DEFAULT_EMAIL: &str = "dilara.erdem@acerpro.com.tr";
pub const DEFAULT_TITLE: &str = "InsurGateway İş Analisti";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Title,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Title => "title",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "title" => Ok(Field::Title),
            other => Err(Error::validation_invalid_argument(
                "field",
                "Field must be one of: name, email, title",
                Some(other.to_string()),
                None,
            )),
        }
    }
}

/// The three personal attributes substituted into the signature template.
///
/// Values are stored exactly as entered. Validation is deliberately absent
/// so the rendered signature always mirrors the current input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub title: String,
}

impl Default for FieldValues {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl FieldValues {
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Title => self.title = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Title => &self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_match_template_placeholders() {
        let fields = FieldValues::default();
        assert_eq!(fields.name, DEFAULT_NAME);
        assert_eq!(fields.email, DEFAULT_EMAIL);
        assert_eq!(fields.title, DEFAULT_TITLE);
    }

    #[test]
    fn set_replaces_single_field() {
        let mut fields = FieldValues::default();
        fields.set(Field::Name, "Ayşe Kaya");
        assert_eq!(fields.get(Field::Name), "Ayşe Kaya");
        assert_eq!(fields.get(Field::Email), DEFAULT_EMAIL);
        assert_eq!(fields.get(Field::Title), DEFAULT_TITLE);
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!(Field::from_str("name").unwrap(), Field::Name);
        assert_eq!(Field::from_str("EMAIL").unwrap(), Field::Email);
        assert_eq!(Field::from_str("Title").unwrap(), Field::Title);
    }

    #[test]
    fn field_rejects_unknown_key() {
        assert!(Field::from_str("phone").is_err());
    }

    #[test]
    fn field_values_deserialize_with_partial_input() {
        let fields: FieldValues = serde_json::from_str(r#"{"name":"Ali Veli"}"#).unwrap();
        assert_eq!(fields.name, "Ali Veli");
        assert_eq!(fields.email, DEFAULT_EMAIL);
    }
}
