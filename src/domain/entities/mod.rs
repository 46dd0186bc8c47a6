pub mod customer;
pub mod date_range;
pub mod deal;
pub mod document;
pub mod ticket;
