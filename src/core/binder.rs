//! Marker-based substitution of field values into the signature template.

use regex::{NoExpand, Regex};

use super::fields::{FieldValues, DEFAULT_EMAIL, DEFAULT_NAME, DEFAULT_TITLE};

const NAME_SPAN_STYLE: &str = "font-family: Arial, sans-serif;color:#47484A;font-size:19px;font-weight:bold;margin:0 !important;margin-bottom:5px !important;";
const TITLE_SPAN_STYLE: &str = "font-family: Arial, sans-serif;color:#47484A;font-size:12px;font-weight: 400 !important;margin:0 !important;";

/// Rewrites the placeholder identity in the shared template with live
/// field values.
///
/// Matching is textual, never a structural HTML parse. A template without
/// the expected markers passes through unchanged, and binding an already
/// bound document is a no-op for the name and title because those markers
/// are consumed by the first pass. Callers that need fresh values must
/// bind the pristine template again.
pub struct Binder {
    name_marker: Regex,
    title_marker: Regex,
    email_marker: Regex,
    mailto_marker: Regex,
}

impl Binder {
    pub fn new() -> Self {
        let name_marker = Regex::new(&format!(
            r"<span[^>]*>{}</span>",
            regex::escape(DEFAULT_NAME)
        ))
        .expect("Invalid regex pattern");

        let title_marker = Regex::new(&format!(
            r"<span[^>]*>{}</span>",
            regex::escape(DEFAULT_TITLE)
        ))
        .expect("Invalid regex pattern");

        let email_marker =
            Regex::new(&regex::escape(DEFAULT_EMAIL)).expect("Invalid regex pattern");

        let mailto_marker = Regex::new(&format!(
            r#"href="mailto:{}""#,
            regex::escape(DEFAULT_EMAIL)
        ))
        .expect("Invalid regex pattern");

        Self {
            name_marker,
            title_marker,
            email_marker,
            mailto_marker,
        }
    }

    /// Applies the four marker substitutions and returns the bound document.
    ///
    /// The name and title markers are replaced once, the plain email marker
    /// everywhere it appears, and the `mailto:` target once. Field values are
    /// inserted literally.
    pub fn bind(&self, template: &str, fields: &FieldValues) -> String {
        let name_span = format!(r#"<span style="{}">{}</span>"#, NAME_SPAN_STYLE, fields.name);
        let bound = self.name_marker.replace(template, NoExpand(&name_span));

        let title_span = format!(
            r#"<span style="{}">{}</span>"#,
            TITLE_SPAN_STYLE, fields.title
        );
        let bound = self.title_marker.replace(&bound, NoExpand(&title_span));

        let bound = self
            .email_marker
            .replace_all(&bound, NoExpand(&fields.email));

        let mailto = format!(r#"href="mailto:{}""#, fields.email);
        self.mailto_marker
            .replace(&bound, NoExpand(&mailto))
            .into_owned()
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_template() -> String {
        format!(
            concat!(
                r#"<div><span class="name">{name}</span>"#,
                r#"<span class="title">{title}</span>"#,
                r#"<a href="mailto:{email}">{email}</a></div>"#
            ),
            name = DEFAULT_NAME,
            title = DEFAULT_TITLE,
            email = DEFAULT_EMAIL,
        )
    }

    fn sample_fields() -> FieldValues {
        FieldValues {
            name: "Ayşe Kaya".to_string(),
            email: "ayse.kaya@acerpro.com.tr".to_string(),
            title: "Analist".to_string(),
        }
    }

    #[test]
    fn bind_replaces_all_four_markers() {
        let bound = Binder::new().bind(&sample_template(), &sample_fields());

        assert!(bound.contains(&format!(
            r#"<span style="{}">Ayşe Kaya</span>"#,
            NAME_SPAN_STYLE
        )));
        assert!(bound.contains(&format!(
            r#"<span style="{}">Analist</span>"#,
            TITLE_SPAN_STYLE
        )));
        assert!(bound.contains(r#"href="mailto:ayse.kaya@acerpro.com.tr""#));
        assert!(!bound.contains(DEFAULT_NAME));
        assert!(!bound.contains(DEFAULT_EMAIL));
    }

    #[test]
    fn bind_without_markers_is_noop() {
        let template = "<p>No placeholders here</p>";
        let bound = Binder::new().bind(template, &sample_fields());
        assert_eq!(bound, template);
    }

    #[test]
    fn bind_empty_template_is_empty() {
        assert_eq!(Binder::new().bind("", &sample_fields()), "");
    }

    #[test]
    fn bind_replaces_email_everywhere() {
        let template = format!(
            r#"<a href="mailto:{email}">{email}</a><p>{email}</p>"#,
            email = DEFAULT_EMAIL
        );
        let bound = Binder::new().bind(&template, &sample_fields());
        assert!(!bound.contains(DEFAULT_EMAIL));
        assert_eq!(bound.matches("ayse.kaya@acerpro.com.tr").count(), 3);
    }

    #[test]
    fn bind_replaces_only_first_name_marker() {
        let template = format!(
            r#"<span>{name}</span><span>{name}</span>"#,
            name = DEFAULT_NAME
        );
        let bound = Binder::new().bind(&template, &sample_fields());
        assert_eq!(bound.matches(DEFAULT_NAME).count(), 1);
        assert_eq!(bound.matches("Ayşe Kaya").count(), 1);
    }

    #[test]
    fn bind_inserts_values_literally() {
        let mut fields = sample_fields();
        fields.name = "Ada $1 Lovelace".to_string();
        let bound = Binder::new().bind(&sample_template(), &fields);
        assert!(bound.contains("Ada $1 Lovelace"));
    }

    #[test]
    fn bound_output_keeps_first_rendering() {
        let binder = Binder::new();
        let bound = binder.bind(&sample_template(), &sample_fields());

        let mut other = sample_fields();
        other.name = "Mehmet Demir".to_string();
        let rebound = binder.bind(&bound, &other);

        assert!(rebound.contains("Ayşe Kaya"));
        assert!(!rebound.contains("Mehmet Demir"));
    }
}
