use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealStage {
    Lead,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl DealStage {
    pub const ALL: [DealStage; 5] = [
        DealStage::Lead,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::Won,
        DealStage::Lost,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DealStage::Lead => "lead",
            DealStage::Proposal => "proposal",
            DealStage::Negotiation => "negotiation",
            DealStage::Won => "won",
            DealStage::Lost => "lost",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            DealStage::Lead => "deal.stage.lead",
            DealStage::Proposal => "deal.stage.proposal",
            DealStage::Negotiation => "deal.stage.negotiation",
            DealStage::Won => "deal.stage.won",
            DealStage::Lost => "deal.stage.lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: u32,
    pub title: String,
    pub customer: String,
    pub stage: DealStage,
    pub value: f64,
    pub closing: NaiveDate,
}
