use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::entities::customer::{Customer, CustomerStatus, Tier};
use crate::domain::entities::deal::{Deal, DealStage};
use crate::domain::entities::document::{Document, DocumentKind};
use crate::domain::entities::ticket::{Ticket, TicketPriority, TicketStatus};

/// The whole mock dataset the dashboard renders from. Loaded once at
/// startup; screens only ever read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub customers: Vec<Customer>,
    pub deals: Vec<Deal>,
    pub tickets: Vec<Ticket>,
    pub documents: Vec<Document>,
}

pub fn load() -> Result<Workspace> {
    Ok(Workspace {
        customers: customers()?,
        deals: deals()?,
        tickets: tickets()?,
        documents: documents()?,
    })
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid fixture date {year}-{month:02}-{day:02}"))
}

fn customers() -> Result<Vec<Customer>> {
    let rows = [
        (1, "Acme Industrial", "ops@acme.example", "Germany", CustomerStatus::Active, Tier::Gold, (2024, 2, 12), 48_200.0),
        (2, "Borealis Labs", "hello@borealis.example", "Sweden", CustomerStatus::Active, Tier::Silver, (2024, 6, 3), 17_900.0),
        (3, "Cascade Foods", "it@cascade.example", "Portugal", CustomerStatus::Inactive, Tier::Bronze, (2023, 11, 21), 4_300.0),
        (4, "Dynamo Logistics", "admin@dynamo.example", "Poland", CustomerStatus::Active, Tier::Gold, (2025, 1, 8), 61_750.0),
        (5, "Everest Outfitters", "contact@everest.example", "Austria", CustomerStatus::Prospect, Tier::Bronze, (2026, 2, 17), 0.0),
        (6, "Fathom Marine", "crew@fathom.example", "Norway", CustomerStatus::Active, Tier::Silver, (2024, 9, 30), 22_480.0),
        (7, "Gildia Media", "studio@gildia.example", "Poland", CustomerStatus::Inactive, Tier::Silver, (2023, 4, 14), 9_860.0),
        (8, "Harbor & Finch", "office@harborfinch.example", "Ireland", CustomerStatus::Active, Tier::Gold, (2022, 12, 1), 88_400.0),
        (9, "Ion Robotics", "lab@ionrobotics.example", "Czechia", CustomerStatus::Prospect, Tier::Bronze, (2026, 4, 2), 0.0),
        (10, "Juniper Health", "care@juniper.example", "Netherlands", CustomerStatus::Active, Tier::Silver, (2025, 5, 19), 13_240.0),
        (11, "Kestrel Aviation", "fleet@kestrel.example", "France", CustomerStatus::Active, Tier::Gold, (2023, 8, 7), 104_900.0),
        (12, "Lumen Analytics", "data@lumen.example", "Germany", CustomerStatus::Inactive, Tier::Bronze, (2024, 3, 26), 2_150.0),
        (13, "Meridian Travel", "desk@meridian.example", "Spain", CustomerStatus::Active, Tier::Bronze, (2025, 10, 11), 6_780.0),
        (14, "Nordwind Energy", "grid@nordwind.example", "Denmark", CustomerStatus::Active, Tier::Gold, (2024, 1, 29), 73_320.0),
        (15, "Orchard Press", "print@orchard.example", "Italy", CustomerStatus::Prospect, Tier::Silver, (2026, 6, 24), 0.0),
        (16, "Pallas Insurance", "claims@pallas.example", "Belgium", CustomerStatus::Active, Tier::Silver, (2023, 2, 18), 31_060.0),
    ];

    rows.into_iter()
        .map(|(id, name, email, country, status, tier, (y, m, d), ltv)| {
            Ok(Customer {
                id,
                name: name.to_string(),
                email: email.to_string(),
                country: country.to_string(),
                status,
                tier,
                joined: date(y, m, d)?,
                lifetime_value: ltv,
            })
        })
        .collect()
}

fn deals() -> Result<Vec<Deal>> {
    let rows = [
        (1, "Warehouse automation rollout", "Acme Industrial", DealStage::Negotiation, 54_000.0, (2026, 9, 15)),
        (2, "Sensor fleet renewal", "Borealis Labs", DealStage::Won, 12_500.0, (2026, 3, 2)),
        (3, "Cold-chain monitoring pilot", "Cascade Foods", DealStage::Lost, 8_900.0, (2026, 1, 20)),
        (4, "Route optimization suite", "Dynamo Logistics", DealStage::Won, 39_800.0, (2026, 5, 11)),
        (5, "Expedition gear portal", "Everest Outfitters", DealStage::Lead, 21_000.0, (2026, 11, 30)),
        (6, "Harbor telemetry upgrade", "Fathom Marine", DealStage::Proposal, 17_400.0, (2026, 10, 8)),
        (7, "Archive digitization", "Gildia Media", DealStage::Lost, 5_600.0, (2025, 12, 9)),
        (8, "Branch network refresh", "Harbor & Finch", DealStage::Won, 66_200.0, (2026, 4, 27)),
        (9, "Assembly line vision QA", "Ion Robotics", DealStage::Lead, 43_000.0, (2026, 12, 18)),
        (10, "Patient portal phase 2", "Juniper Health", DealStage::Negotiation, 28_700.0, (2026, 8, 5)),
        (11, "Ground crew scheduling", "Kestrel Aviation", DealStage::Won, 51_900.0, (2026, 6, 16)),
        (12, "Churn model licensing", "Lumen Analytics", DealStage::Proposal, 9_300.0, (2026, 7, 22)),
        (13, "Booking engine migration", "Meridian Travel", DealStage::Proposal, 14_750.0, (2026, 9, 1)),
        (14, "Substation analytics", "Nordwind Energy", DealStage::Negotiation, 72_400.0, (2026, 10, 29)),
    ];

    rows.into_iter()
        .map(|(id, title, customer, stage, value, (y, m, d))| {
            Ok(Deal {
                id,
                title: title.to_string(),
                customer: customer.to_string(),
                stage,
                value,
                closing: date(y, m, d)?,
            })
        })
        .collect()
}

fn tickets() -> Result<Vec<Ticket>> {
    let rows = [
        (1, "Login loop after password reset", "Acme Industrial", TicketPriority::High, TicketStatus::Open, (2026, 8, 19)),
        (2, "Export misses header row", "Borealis Labs", TicketPriority::Medium, TicketStatus::Pending, (2026, 8, 14)),
        (3, "Invoice PDF garbled umlauts", "Harbor & Finch", TicketPriority::Low, TicketStatus::Resolved, (2026, 7, 30)),
        (4, "Dashboard blank on first load", "Dynamo Logistics", TicketPriority::Urgent, TicketStatus::Open, (2026, 8, 21)),
        (5, "Webhook retries exhausted", "Fathom Marine", TicketPriority::High, TicketStatus::Pending, (2026, 8, 10)),
        (6, "Rename team workspace", "Juniper Health", TicketPriority::Low, TicketStatus::Closed, (2026, 6, 25)),
        (7, "Duplicate customer records", "Kestrel Aviation", TicketPriority::Medium, TicketStatus::Open, (2026, 8, 18)),
        (8, "API rate limit too strict", "Lumen Analytics", TicketPriority::Medium, TicketStatus::Resolved, (2026, 7, 12)),
        (9, "Sandbox data out of date", "Meridian Travel", TicketPriority::Low, TicketStatus::Pending, (2026, 8, 6)),
        (10, "Billing address not saved", "Nordwind Energy", TicketPriority::High, TicketStatus::Open, (2026, 8, 20)),
        (11, "SSO certificate expiring", "Pallas Insurance", TicketPriority::Urgent, TicketStatus::Pending, (2026, 8, 22)),
        (12, "Broken link in onboarding mail", "Orchard Press", TicketPriority::Low, TicketStatus::Closed, (2026, 5, 28)),
    ];

    rows.into_iter()
        .map(|(id, subject, customer, priority, status, (y, m, d))| {
            Ok(Ticket {
                id,
                subject: subject.to_string(),
                customer: customer.to_string(),
                priority,
                status,
                opened: date(y, m, d)?,
            })
        })
        .collect()
}

fn documents() -> Result<Vec<Document>> {
    let rows = [
        (1, "Master service agreement 2026", DocumentKind::Contract, "Harbor & Finch", (2026, 4, 27), 412),
        (2, "Q2 usage report", DocumentKind::Report, "Borealis Labs", (2026, 7, 2), 980),
        (3, "Invoice #2026-0143", DocumentKind::Invoice, "Dynamo Logistics", (2026, 5, 12), 86),
        (4, "Vision QA proposal", DocumentKind::Proposal, "Ion Robotics", (2026, 6, 9), 1_240),
        (5, "Data processing addendum", DocumentKind::Contract, "Juniper Health", (2026, 3, 18), 230),
        (6, "Invoice #2026-0191", DocumentKind::Invoice, "Kestrel Aviation", (2026, 6, 17), 91),
        (7, "Churn model one-pager", DocumentKind::Proposal, "Lumen Analytics", (2026, 7, 23), 640),
        (8, "Annual uptime report", DocumentKind::Report, "Nordwind Energy", (2026, 1, 31), 1_870),
        (9, "Pilot terms draft", DocumentKind::Contract, "Cascade Foods", (2025, 12, 2), 188),
        (10, "Invoice #2025-0987", DocumentKind::Invoice, "Acme Industrial", (2025, 11, 14), 84),
    ];

    rows.into_iter()
        .map(|(id, title, kind, owner, (y, m, d), size_kb)| {
            Ok(Document {
                id,
                title: title.to_string(),
                kind,
                owner: owner.to_string(),
                updated: date(y, m, d)?,
                size_kb,
            })
        })
        .collect()
}
