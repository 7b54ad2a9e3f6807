use chrono::Utc;
use shared_types::{DocumentDraft, TemplateKey, TemplateResponse};

use super::catalog::{get_template, TemplateEntry};

impl From<&TemplateEntry> for TemplateResponse {
    fn from(entry: &TemplateEntry) -> Self {
        Self {
            key: entry.key,
            label: entry.label().to_string(),
            filename: entry.filename().to_string(),
            body: entry.body.to_string(),
        }
    }
}

/// Package the literal for `key` as a draft for preview and download.
pub fn generate_draft(key: TemplateKey) -> DocumentDraft {
    let entry = get_template(key);
    tracing::info!(template = key.as_str(), "generated legal draft");

    DocumentDraft {
        key,
        label: entry.label().to_string(),
        filename: entry.filename().to_string(),
        body: entry.body.to_string(),
        generated_at: Utc::now().to_rfc3339(),
    }
}
