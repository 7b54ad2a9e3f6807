pub mod catalog;
pub mod draft;

pub use catalog::{all_templates, get_template, resolve_template, TemplateEntry, TemplateError};
pub use draft::generate_draft;
