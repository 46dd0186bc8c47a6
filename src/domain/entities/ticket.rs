use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Urgent => "urgent",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TicketPriority::Low => "ticket.priority.low",
            TicketPriority::Medium => "ticket.priority.medium",
            TicketPriority::High => "ticket.priority.high",
            TicketPriority::Urgent => "ticket.priority.urgent",
        }
    }

    /// Severity rank used for ordering; higher is more urgent.
    pub fn rank(&self) -> u8 {
        match self {
            TicketPriority::Low => 0,
            TicketPriority::Medium => 1,
            TicketPriority::High => 2,
            TicketPriority::Urgent => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TicketStatus::Open => "ticket.status.open",
            TicketStatus::Pending => "ticket.status.pending",
            TicketStatus::Resolved => "ticket.status.resolved",
            TicketStatus::Closed => "ticket.status.closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: u32,
    pub subject: String,
    pub customer: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub opened: NaiveDate,
}
