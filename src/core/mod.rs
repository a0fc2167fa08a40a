// Public modules
pub mod binder;
pub mod config;
pub mod error;
pub mod exporter;
pub mod fields;
pub mod session;
pub mod slug;
pub mod template;

// Internal modules - not part of public API
pub(crate) mod paths;

pub use error::{Error, ErrorCode, Result};
pub use fields::{Field, FieldValues};
pub use session::Session;
