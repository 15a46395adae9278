use chrono::TimeZone;
use client_core::{pagination::window, RecordPage};

use super::*;

fn customer() -> Customer {
    Customer {
        id: CustomerId(1),
        name: "John Doe".to_string(),
        phone: "0811".to_string(),
        created_at: None,
    }
}

#[test]
fn rupiah_groups_thousands_with_dots() {
    assert_eq!(format_rupiah(0), "Rp 0");
    assert_eq!(format_rupiah(999), "Rp 999");
    assert_eq!(format_rupiah(1_000), "Rp 1.000");
    assert_eq!(format_rupiah(1_500_000), "Rp 1.500.000");
    assert_eq!(format_rupiah(-25_000), "-Rp 25.000");
}

#[test]
fn table_pads_columns_to_widest_cell() {
    let table = render_table(&[customer()]);

    assert_eq!(
        table,
        "ID  Name      Phone\n--  --------  -----\n1   John Doe  0811\n"
    );
}

#[test]
fn empty_table_says_so() {
    assert_eq!(render_table::<Order>(&[]), "No orders found.\n");
}

#[test]
fn order_details_show_price_in_rupiah() {
    let order = Order {
        id: OrderId(3),
        customer_id: CustomerId(1),
        name: "John Doe".to_string(),
        phone: "0811".to_string(),
        service: "Dry Cleaning".to_string(),
        amount: 2,
        unit: "kg".to_string(),
        price: 15_000,
        created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()),
    };

    let details = render_details(&order);

    assert!(details.contains("   Price: Rp 15.000\n"));
    assert!(details.contains("  Amount: 2 kg\n"));
    assert!(details.contains(" Created: 2024-05-01 09:30\n"));
    assert_eq!(order.cells()[4], "2 kg");
}

#[test]
fn pager_on_last_page_hides_next() {
    let pager = render_pager(&window(2, 12, 10), 12);
    assert_eq!(pager, "< 1 [2]  (12 records)");
}

#[test]
fn pager_collapses_distant_pages() {
    let pager = render_pager(&window(6, 120, 10), 120);
    assert_eq!(pager, "< 1 2 … 4 5 [6] 7 8 … 11 12 >  (120 records)");
}

#[test]
fn pager_for_nothing_only_counts() {
    assert_eq!(render_pager(&window(1, 0, 10), 0), "(0 records)");
    assert_eq!(render_pager(&window(1, 1, 10), 1), "[1]  (1 record)");
}

#[test]
fn server_summary_only_when_backend_paged() {
    let single = RecordPage::<Customer> {
        records: vec![customer()],
        page: 1,
        limit: 10,
        count: 1,
        total_pages: 1,
    };
    assert_eq!(render_server_summary(&single), None);

    let paged = RecordPage::<Customer> {
        total_pages: 4,
        count: 37,
        ..single
    };
    assert_eq!(
        render_server_summary(&paged).as_deref(),
        Some("Backend page 1 of 4: 37 matches in total, 10 per page.")
    );
}
