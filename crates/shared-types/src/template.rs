use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Template key
// ---------------------------------------------------------------------------

/// Closed set of document templates offered for download.
///
/// Serialized as the kebab-case slug used in URLs (`statement-of-claim`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKey {
    NoticeOfMotion,
    Affidavit,
    StatementOfClaim,
    ExhibitList,
    Factum,
    CoverLetter,
    NoticeOfAppearance,
}

impl TemplateKey {
    /// Every key, in the order the selector presents them.
    pub const ALL: [TemplateKey; 7] = [
        TemplateKey::NoticeOfMotion,
        TemplateKey::Affidavit,
        TemplateKey::StatementOfClaim,
        TemplateKey::ExhibitList,
        TemplateKey::Factum,
        TemplateKey::CoverLetter,
        TemplateKey::NoticeOfAppearance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKey::NoticeOfMotion => "notice-of-motion",
            TemplateKey::Affidavit => "affidavit",
            TemplateKey::StatementOfClaim => "statement-of-claim",
            TemplateKey::ExhibitList => "exhibit-list",
            TemplateKey::Factum => "factum",
            TemplateKey::CoverLetter => "cover-letter",
            TemplateKey::NoticeOfAppearance => "notice-of-appearance",
        }
    }

    /// Parse a slug. Matching is exact; callers trim user input first.
    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }

    /// Human-readable label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKey::NoticeOfMotion => "Notice of Motion: Interim Distribution ($700k)",
            TemplateKey::Affidavit => "Affidavit: Executor Fraud & Misconduct",
            TemplateKey::StatementOfClaim => "Statement of Claim: Civil Fraud & Removal",
            TemplateKey::ExhibitList => "Exhibit List: Estate Accounting Records",
            TemplateKey::Factum => "Factum: Motion for Interim Distribution",
            TemplateKey::CoverLetter => "Cover Letter: Service on Estate Trustees",
            TemplateKey::NoticeOfAppearance => "Notice of Appearance: Counsel of Record",
        }
    }

    /// Static download filename.
    pub fn filename(&self) -> &'static str {
        match self {
            TemplateKey::NoticeOfMotion => "Motion_700k.txt",
            TemplateKey::Affidavit => "Affidavit_Executor_Misconduct.txt",
            TemplateKey::StatementOfClaim => "Statement_of_Claim.txt",
            TemplateKey::ExhibitList => "Exhibit_List.txt",
            TemplateKey::Factum => "Factum_Interim_Distribution.txt",
            TemplateKey::CoverLetter => "Cover_Letter.txt",
            TemplateKey::NoticeOfAppearance => "Notice_of_Appearance.txt",
        }
    }
}

// ---------------------------------------------------------------------------
// Template API types
// ---------------------------------------------------------------------------

/// One selectable template, without its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TemplateSummary {
    pub key: TemplateKey,
    pub label: String,
    pub filename: String,
}

impl From<TemplateKey> for TemplateSummary {
    fn from(key: TemplateKey) -> Self {
        Self {
            key,
            label: key.label().to_string(),
            filename: key.filename().to_string(),
        }
    }
}

/// A template together with its literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TemplateResponse {
    pub key: TemplateKey,
    pub label: String,
    pub filename: String,
    pub body: String,
}

/// Request body for the "generate draft" trigger.
///
/// `key` stays a raw string so an unknown key surfaces as
/// `InvalidTemplateKey` instead of a JSON decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerateDraftRequest {
    pub key: String,
}

/// A generated draft, ready for preview and download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DocumentDraft {
    pub key: TemplateKey,
    pub label: String,
    pub filename: String,
    pub body: String,
    /// RFC 3339 timestamp; metadata only, never part of `body`.
    pub generated_at: String,
}
