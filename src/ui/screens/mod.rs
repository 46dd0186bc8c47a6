pub mod customers;
pub mod dashboard;
pub mod deals;
pub mod documents;
pub mod tickets;
