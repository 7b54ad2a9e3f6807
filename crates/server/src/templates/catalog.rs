//! Static legal-document boilerplate, one literal per [`TemplateKey`].
//!
//! Names, amounts and citation tokens are part of each literal. Nothing is
//! substituted at runtime.

use shared_types::TemplateKey;
use thiserror::Error;

/// A template key that is not part of the enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown template key: {0}")]
    UnknownKey(String),
}

/// A catalog entry: the key and its literal text.
#[derive(Debug)]
pub struct TemplateEntry {
    pub key: TemplateKey,
    pub body: &'static str,
}

impl TemplateEntry {
    pub fn label(&self) -> &'static str {
        self.key.label()
    }

    pub fn filename(&self) -> &'static str {
        self.key.filename()
    }
}

static NOTICE_OF_MOTION: TemplateEntry = TemplateEntry {
    key: TemplateKey::NoticeOfMotion,
    body: "\
ONTARIO SUPERIOR COURT OF JUSTICE
(ESTATES LIST)

IN THE ESTATE OF [DECEASED], deceased

BETWEEN: [APPLICANT] (Applicant)
AND: [ESTATE TRUSTEES] (Respondents)

NOTICE OF MOTION

THE APPLICANT will make a motion to a Judge presiding over the Estates List
on a date to be fixed by the Registrar, at the courthouse.

THE MOTION IS FOR:
1. An Order for an interim distribution of $700,000 from the Estate to the
   Applicant, on account of the Applicant's entitlement as residuary beneficiary.
2. An Order directing the Estate Trustees to pass their accounts.
3. Costs of this motion on a substantial indemnity basis.
4. Such further and other relief as this Honourable Court deems just.

THE GROUNDS FOR THE MOTION ARE:
1. The Estate holds liquid assets well in excess of the amount sought.
2. The Estate Trustees have failed to make any distribution despite written
   demand [cite: 2026-01-04].
3. The Applicant is suffering financial hardship caused by the delay.
4. Rules 1.04, 37 and 74.15 of the Rules of Civil Procedure.

THE FOLLOWING DOCUMENTARY EVIDENCE will be used at the hearing:
1. The Affidavit of the Applicant, to be sworn.
2. Such further evidence as counsel may advise and this Court may permit.
",
};

static AFFIDAVIT: TemplateEntry = TemplateEntry {
    key: TemplateKey::Affidavit,
    body: "\
ONTARIO SUPERIOR COURT OF JUSTICE

IN THE ESTATE OF [DECEASED], deceased

BETWEEN: [APPLICANT] (Applicant)
AND: [ESTATE TRUSTEES] (Respondents)

AFFIDAVIT OF [APPLICANT]

I, [APPLICANT], of the City of Toronto, in the Province of Ontario,
MAKE OATH AND SAY:

1. I am a residuary beneficiary of the Estate and as such have knowledge of
   the matters to which I hereinafter depose.
2. The Estate Trustees have refused to provide an accounting of the Estate
   despite repeated written requests [cite: 2026-01-04].
3. Communication with the Estate Trustees has broken down completely, and they
   have acted with hostility toward the beneficiaries [cite: 2026-01-04].
4. I have reason to believe that Estate property has been dealt with for
   purposes other than the administration of the Estate.
5. I make this affidavit in support of a motion for an interim distribution
   and for the removal of the Estate Trustees, and for no improper purpose.

SWORN BEFORE ME at the City of Toronto, in the Province of Ontario.

______________________________          ______________________________
A Commissioner for Taking Affidavits     [APPLICANT]
",
};

static STATEMENT_OF_CLAIM: TemplateEntry = TemplateEntry {
    key: TemplateKey::StatementOfClaim,
    body: "\
ONTARIO SUPERIOR COURT OF JUSTICE
BETWEEN: [PLAINTIFF] (Plaintiff)
AND: [ESTATE TRUSTEES] (Defendants)

1. The Plaintiff claims damages for civil fraud and breach of fiduciary duty [cite: 2026-01-04].
2. The Defendants have engaged in a complete breakdown of communication and acted in bad faith [cite: 2026-01-04].
3. The Plaintiff seeks an Order removing the Defendants as executors due to hostility and psychological games [cite: 2026-01-04].
4. An interim distribution of $700,000 is sought to mitigate manufactured financial hardship [cite: 2026-01-04].
",
};

static EXHIBIT_LIST: TemplateEntry = TemplateEntry {
    key: TemplateKey::ExhibitList,
    body: "\
ONTARIO SUPERIOR COURT OF JUSTICE

IN THE ESTATE OF [DECEASED], deceased

LIST OF EXHIBITS

Exhibit A  Last Will and Testament of the Deceased
Exhibit B  Certificate of Appointment of Estate Trustee With a Will
Exhibit C  Written demands for an accounting sent to the Estate Trustees
Exhibit D  Bank statements of the Estate accounts
Exhibit E  Correspondence evidencing the breakdown of communication
Exhibit F  Statement of the Applicant's financial circumstances
",
};

static FACTUM: TemplateEntry = TemplateEntry {
    key: TemplateKey::Factum,
    body: "\
ONTARIO SUPERIOR COURT OF JUSTICE
(ESTATES LIST)

IN THE ESTATE OF [DECEASED], deceased

FACTUM OF THE APPLICANT
(Motion for Interim Distribution)

PART I - OVERVIEW
1. The Applicant seeks an interim distribution of $700,000 from an Estate
   whose liquid assets far exceed that sum.

PART II - FACTS
2. The Estate Trustees have held the Estate assets without distribution or
   accounting since their appointment [cite: 2026-01-04].

PART III - ISSUES AND LAW
3. Issue: whether the Court should order an interim distribution before the
   Estate Trustees pass their accounts.
4. The Court has jurisdiction to order an interim distribution where the
   beneficiary's entitlement is clear and the Estate is able to bear it.

PART IV - ORDER REQUESTED
5. An Order for an interim distribution of $700,000 to the Applicant, with
   costs on a substantial indemnity basis.

ALL OF WHICH IS RESPECTFULLY SUBMITTED.
",
};

static COVER_LETTER: TemplateEntry = TemplateEntry {
    key: TemplateKey::CoverLetter,
    body: "\
[DATE]

DELIVERED BY EMAIL

[ESTATE TRUSTEES]
c/o [COUNSEL FOR THE ESTATE TRUSTEES]

Re: Estate of [DECEASED]

Please find enclosed and hereby served upon you the Applicant's Notice of
Motion for an interim distribution of $700,000, together with the supporting
Affidavit and List of Exhibits.

We ask that you advise of your availability for a hearing date within the
next thirty days. Absent a response within ten business days, we will seek a
date from the Estates List without further notice to you.

Yours truly,

[COUNSEL FOR THE APPLICANT]
",
};

static NOTICE_OF_APPEARANCE: TemplateEntry = TemplateEntry {
    key: TemplateKey::NoticeOfAppearance,
    body: "\
ONTARIO SUPERIOR COURT OF JUSTICE

IN THE ESTATE OF [DECEASED], deceased

NOTICE OF APPEARANCE

The Applicant, [APPLICANT], intends to respond to this application and
hereby appears by the lawyer named below, who is the lawyer of record.

[COUNSEL FOR THE APPLICANT]
[ADDRESS FOR SERVICE]
[TELEPHONE] | [EMAIL]

TO: [ESTATE TRUSTEES]
AND TO: The Registrar, Estates List
",
};

/// Look up the literal for a key. Total over the enumeration.
pub fn get_template(key: TemplateKey) -> &'static TemplateEntry {
    match key {
        TemplateKey::NoticeOfMotion => &NOTICE_OF_MOTION,
        TemplateKey::Affidavit => &AFFIDAVIT,
        TemplateKey::StatementOfClaim => &STATEMENT_OF_CLAIM,
        TemplateKey::ExhibitList => &EXHIBIT_LIST,
        TemplateKey::Factum => &FACTUM,
        TemplateKey::CoverLetter => &COVER_LETTER,
        TemplateKey::NoticeOfAppearance => &NOTICE_OF_APPEARANCE,
    }
}

/// Resolve a key that arrived as a string (URL path segment, JSON body).
/// Only an exact slug matches.
pub fn resolve_template(raw: &str) -> Result<&'static TemplateEntry, TemplateError> {
    TemplateKey::from_slug(raw)
        .map(get_template)
        .ok_or_else(|| TemplateError::UnknownKey(raw.to_string()))
}

/// All entries in selector order.
pub fn all_templates() -> impl Iterator<Item = &'static TemplateEntry> {
    TemplateKey::ALL.into_iter().map(get_template)
}
