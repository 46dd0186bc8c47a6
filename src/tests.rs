//! End-to-end scenarios across the store, the table pipeline, and the
//! search debounce, driven through an in-memory location.

use std::time::{Duration, Instant};

use crate::domain::entities::date_range::{DateRange, FROM_KEY, TO_KEY};
use crate::infra::fixtures;
use crate::query::debounce::SearchDebounce;
use crate::query::location::MemoryLocation;
use crate::query::store::{FilterStore, DIR_KEY, PAGE_KEY, SEARCH_KEY, SORT_KEY};
use crate::table::engine::{run_query, TableQuery, DEFAULT_PAGE_SIZE};
use crate::ui::facet_card::facet_click;
use crate::ui::screens::customers::customer_columns;
use crate::ui::screens::deals::deal_columns;

fn store() -> FilterStore<MemoryLocation> {
    FilterStore::new(MemoryLocation::new())
}

#[test]
fn deep_link_restores_the_full_table_view() {
    let workspace = fixtures::load().expect("fixtures should load");
    let location = MemoryLocation::with_query("dir=desc&page=0&sort=ltv&status=active");
    let store = FilterStore::new(location);

    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE)
        .scalar_filter("status", store.value("status"));
    let view = run_query(&workspace.customers, &customer_columns(), &query);

    assert!(view.filtered_rows > 0, "fixtures should contain active customers");
    for pair in view.rows.windows(2) {
        assert!(
            pair[0].lifetime_value >= pair[1].lifetime_value,
            "descending ltv sort should survive the round trip"
        );
    }
    assert!(view
        .rows
        .iter()
        .all(|customer| customer.status.code() == "active"));
}

#[test]
fn facet_then_search_then_sort_compose_in_the_address() {
    let workspace = fixtures::load().expect("fixtures should load");
    let mut store = store();

    facet_click(&mut store, "status", Some("active"));
    store.set_value(SEARCH_KEY, Some("a"));
    store
        .batch()
        .set(SORT_KEY, Some("name"))
        .remove(DIR_KEY)
        .commit();

    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE)
        .scalar_filter("status", store.value("status"));
    let view = run_query(&workspace.customers, &customer_columns(), &query);

    let unfiltered = run_query(
        &workspace.customers,
        &customer_columns(),
        &TableQuery::default(),
    );
    assert!(view.filtered_rows <= unfiltered.filtered_rows);
    for pair in view.rows.windows(2) {
        assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
    }
}

#[test]
fn narrowing_filter_drops_stale_page_in_the_same_navigation() {
    let mut store = store();
    store.set_value(PAGE_KEY, Some("4"));
    let navigations = store.location().replace_count;

    facet_click(&mut store, "stage", Some("won"));

    assert_eq!(store.value(PAGE_KEY), None);
    assert_eq!(
        store.location().replace_count,
        navigations + 1,
        "facet change and page reset should be one replace"
    );
}

#[test]
fn settled_search_promotes_into_the_store_exactly_once() {
    let start = Instant::now();
    let mut store = store();
    let mut debounce = SearchDebounce::with_settle("", Duration::from_millis(300));

    debounce.edit("ac", start);
    debounce.edit("acme", start + Duration::from_millis(120));

    assert_eq!(debounce.poll(start + Duration::from_millis(300)), None);
    let committed = debounce
        .poll(start + Duration::from_millis(420))
        .expect("burst should settle");
    store
        .batch()
        .set(SEARCH_KEY, Some(&committed))
        .remove(PAGE_KEY)
        .commit();

    assert_eq!(store.value(SEARCH_KEY), Some("acme".to_string()));
    assert_eq!(store.location().replace_count, 1);
    assert_eq!(
        debounce.poll(start + Duration::from_millis(800)),
        None,
        "a settled burst should not commit twice"
    );
}

#[test]
fn date_range_in_the_address_narrows_the_deal_rows() {
    let workspace = fixtures::load().expect("fixtures should load");
    let mut store = store();
    store
        .batch()
        .set(FROM_KEY, Some("2026-01-01"))
        .set(TO_KEY, Some("2026-06-30"))
        .commit();

    let range = DateRange::parse(
        store.value(FROM_KEY).as_deref(),
        store.value(TO_KEY).as_deref(),
    );
    let in_range: Vec<_> = workspace
        .deals
        .iter()
        .filter(|deal| range.contains(deal.closing))
        .cloned()
        .collect();
    let view = run_query(&in_range, &deal_columns(), &TableQuery::default());

    assert!(view.filtered_rows < workspace.deals.len());
    assert!(view.rows.iter().all(|deal| range.contains(deal.closing)));
}

#[test]
fn malformed_query_values_degrade_to_defaults() {
    let location = MemoryLocation::with_query("dir=sideways&from=garbage&page=banana&sort=name");
    let store = FilterStore::new(location);

    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE);
    let range = DateRange::parse(
        store.value(FROM_KEY).as_deref(),
        store.value(TO_KEY).as_deref(),
    );

    assert_eq!(query.page, 0);
    assert_eq!(query.sort.len(), 1);
    assert_eq!(
        query.sort[0].direction,
        crate::table::column::SortDirection::Asc,
        "unknown direction should fall back to ascending"
    );
    assert!(range.is_empty());
}

#[test]
fn reset_keeps_search_and_the_table_follows() {
    let workspace = fixtures::load().expect("fixtures should load");
    let mut store = store();
    store.set_value(SEARCH_KEY, Some("an"));
    facet_click(&mut store, "status", Some("inactive"));
    store.set_value("tier", Some("gold"));

    store.reset_filters(true);

    assert_eq!(store.value(SEARCH_KEY), Some("an".to_string()));
    assert!(!store.has_active_filters(&[SEARCH_KEY, PAGE_KEY]));

    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE);
    let view = run_query(&workspace.customers, &customer_columns(), &query);
    let searched_only = run_query(
        &workspace.customers,
        &customer_columns(),
        &TableQuery {
            search: "an".to_string(),
            ..TableQuery::default()
        },
    );
    assert_eq!(view.filtered_rows, searched_only.filtered_rows);
}
