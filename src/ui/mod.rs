pub mod data_table;
pub mod date_range;
pub mod facet_card;
pub mod pager;
pub mod screens;
pub mod search_box;

use crate::query::location::SharedLocation;
use crate::query::store::FilterStore;

/// The store every component reaches through context.
pub type AppStore = FilterStore<SharedLocation>;
