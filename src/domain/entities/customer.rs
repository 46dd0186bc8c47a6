use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerStatus {
    Active,
    Inactive,
    Prospect,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Active,
        CustomerStatus::Inactive,
        CustomerStatus::Prospect,
    ];

    /// Stable code used as the query-state value.
    pub fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Prospect => "prospect",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "customer.status.active",
            CustomerStatus::Inactive => "customer.status.inactive",
            CustomerStatus::Prospect => "customer.status.prospect",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Bronze, Tier::Silver, Tier::Gold];

    pub fn code(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Tier::Bronze => "customer.tier.bronze",
            Tier::Silver => "customer.tier.silver",
            Tier::Gold => "customer.tier.gold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub country: String,
    pub status: CustomerStatus,
    pub tier: Tier,
    pub joined: NaiveDate,
    pub lifetime_value: f64,
}
