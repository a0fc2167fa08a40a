//! Session state: field values plus the pristine template and its latest
//! bound rendering.

use crate::binder::Binder;
use crate::error::Result;
use crate::fields::{Field, FieldValues};
use crate::template::{self, Template, TemplateSource};

/// An editing session over one template.
///
/// The template text is kept pristine; every field change re-binds against
/// it, so markers consumed by an earlier bind never stop later updates from
/// taking effect.
pub struct Session {
    binder: Binder,
    fields: FieldValues,
    template: Option<Template>,
    bound: Option<String>,
}

impl Session {
    pub fn new(fields: FieldValues) -> Self {
        Self {
            binder: Binder::new(),
            fields,
            template: None,
            bound: None,
        }
    }

    /// Load (or reload) the template and bind the current field values.
    pub fn load_template(&mut self, source: &TemplateSource) -> Result<()> {
        let template = template::load(source)?;
        self.template = Some(template);
        self.rebind();
        Ok(())
    }

    /// Replace one field value and re-bind.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.rebind();
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// The current bound document, present once a template has been loaded.
    pub fn bound_document(&self) -> Option<&str> {
        self.bound.as_deref()
    }

    fn rebind(&mut self) {
        if let Some(template) = &self.template {
            self.bound = Some(self.binder.bind(template.as_str(), &self.fields));
        }
    }
}
