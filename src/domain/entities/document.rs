use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Contract,
    Invoice,
    Proposal,
    Report,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Contract,
        DocumentKind::Invoice,
        DocumentKind::Proposal,
        DocumentKind::Report,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "contract",
            DocumentKind::Invoice => "invoice",
            DocumentKind::Proposal => "proposal",
            DocumentKind::Report => "report",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "document.kind.contract",
            DocumentKind::Invoice => "document.kind.invoice",
            DocumentKind::Proposal => "document.kind.proposal",
            DocumentKind::Report => "document.kind.report",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub kind: DocumentKind,
    pub owner: String,
    pub updated: NaiveDate,
    pub size_kb: u32,
}
