//! Black-box test driving the whole model through the public API only:
//! catalog registration, store membership, sales, and every chain report.

use std::collections::HashSet;

use chrono::{NaiveTime, Weekday};

use mercato_chain::Chain;
use mercato_core::{DomainError, ProductId, StoreId};
use mercato_products::Product;
use mercato_schedule::{OperatingInterval, WeeklySchedule};
use mercato_stores::Store;

fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn weekday_hours() -> WeeklySchedule {
    let hours = OperatingInterval::new(t(8, 0), t(20, 0)).unwrap();
    WeeklySchedule::new(
        hours,
        HashSet::from([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ]),
    )
    .unwrap()
}

fn round_the_clock() -> WeeklySchedule {
    let hours = OperatingInterval::new(t(0, 0), t(23, 59)).unwrap();
    WeeklySchedule::new(
        hours,
        HashSet::from([
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]),
    )
    .unwrap()
}

/// Six products, three stores with different stock levels, sales spread
/// across the chain.
fn sample_chain() -> Chain {
    mercato_observability::init();

    let catalog = [
        (1, "Carne", 10.0),
        (2, "Pescado", 20.0),
        (3, "Pollo", 30.0),
        (4, "Cerdo", 45.0),
        (5, "Ternera", 50.0),
        (6, "Cordero", 65.0),
    ];

    let mut chain = Chain::new();
    for (raw, name, price) in catalog {
        chain
            .register_product(Product::new(ProductId::new(raw), name, price).unwrap())
            .unwrap();
    }

    let mut store_a = Store::with_schedule(StoreId::new(1), "Store A", weekday_hours()).unwrap();
    let mut store_b = Store::with_schedule(StoreId::new(2), "Store B", round_the_clock()).unwrap();
    let mut store_c = Store::with_schedule(StoreId::new(3), "Store C", weekday_hours()).unwrap();

    for (raw, name, price) in catalog {
        let product = Product::new(ProductId::new(raw), name, price).unwrap();
        store_a.register_product(product.clone(), 100);
        store_b.register_product(product.clone(), 150);
        store_c.register_product(product, 200);
    }

    chain.add_store(store_a).unwrap();
    chain.add_store(store_b).unwrap();
    chain.add_store(store_c).unwrap();
    chain
}

fn run_sample_sales(chain: &mut Chain) {
    let sales: [(u32, u32, u32); 8] = [
        // (store, product, quantity)
        (1, 1, 50),
        (1, 3, 30),
        (1, 2, 20),
        (2, 1, 70),
        (2, 2, 40),
        (2, 5, 25),
        (3, 3, 60),
        (3, 4, 35),
    ];

    for (store_raw, product_raw, quantity) in sales {
        chain
            .store_mut(StoreId::new(store_raw))
            .unwrap()
            .sell(ProductId::new(product_raw), quantity)
            .unwrap();
    }
}

#[test]
fn store_level_queries_after_sales() {
    let mut chain = sample_chain();
    run_sample_sales(&mut chain);

    let store_a = chain.store(StoreId::new(1)).unwrap();
    assert_eq!(store_a.units_sold(ProductId::new(1)), 50);
    assert_eq!(store_a.stock_of(ProductId::new(1)), 50);
    assert_eq!(store_a.revenue_for_product(ProductId::new(1)), 500.0);
    // 50*10 + 30*30 + 20*20
    assert_eq!(store_a.total_revenue(), 1800.0);
}

#[test]
fn chain_revenue_and_top_grossing_store() {
    let mut chain = sample_chain();
    run_sample_sales(&mut chain);

    // A: 1800, B: 2750, C: 3375
    assert_eq!(chain.total_revenue(), 7925.0);

    let top = chain.top_grossing_store().unwrap();
    assert_eq!(top.store_id, StoreId::new(3));
    assert_eq!(top.name, "Store C");
    assert_eq!(top.revenue, 3375.0);
    assert_eq!(top.to_string(), "Store C (3). Total revenue: 3375");
}

#[test]
fn top_five_products_across_the_chain() {
    let mut chain = sample_chain();
    run_sample_sales(&mut chain);

    let report = chain.top_five_products();
    let summary: Vec<(u32, u64)> = report
        .entries
        .iter()
        .map(|entry| (entry.product_id.raw(), entry.units))
        .collect();

    // Carne 120, Pollo 90, Pescado 60, Cerdo 35, Ternera 25; Cordero never sold.
    assert_eq!(summary, vec![(1, 120), (3, 90), (2, 60), (4, 35), (5, 25)]);
    assert_eq!(
        report.to_string(),
        "Carne: 120 - Pollo: 90 - Pescado: 60 - Cerdo: 35 - Ternera: 25"
    );
}

#[test]
fn open_now_lookup_honors_each_schedule() {
    let chain = sample_chain();

    let monday_morning = chain.stores_open_at(Weekday::Mon, t(10, 0));
    let names: Vec<&str> = monday_morning.iter().map(|store| store.name()).collect();
    assert_eq!(names, vec!["Store A", "Store B", "Store C"]);

    let sunday_afternoon = chain.stores_open_at(Weekday::Sun, t(15, 0));
    let names: Vec<&str> = sunday_afternoon.iter().map(|store| store.name()).collect();
    assert_eq!(names, vec!["Store B"]);
}

#[test]
fn failed_sales_propagate_as_typed_errors() {
    let mut chain = sample_chain();

    let store_b = chain.store_mut(StoreId::new(2)).unwrap();
    let err = store_b.sell(ProductId::new(99), 1).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    let err = store_b.sell(ProductId::new(1), 10_000).unwrap_err();
    assert!(matches!(err, DomainError::InsufficientStock { .. }));

    // Nothing was recorded by the failed attempts.
    assert_eq!(store_b.units_sold(ProductId::new(1)), 0);
    assert_eq!(store_b.stock_of(ProductId::new(1)), 150);
}
