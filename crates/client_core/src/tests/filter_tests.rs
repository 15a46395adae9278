use super::*;
use serde_json::json;
use shared::domain::{Customer, CustomerId, Order, OrderId};

fn customer(id: i64, name: &str, phone: &str) -> Customer {
    Customer {
        id: CustomerId(id),
        name: name.to_string(),
        phone: phone.to_string(),
        created_at: None,
    }
}

fn order(id: i64, name: &str, service: &str) -> Order {
    Order {
        id: OrderId(id),
        customer_id: CustomerId(1),
        name: name.to_string(),
        phone: "0811".to_string(),
        service: service.to_string(),
        amount: 1,
        unit: "pcs".to_string(),
        price: 10_000,
        created_at: None,
    }
}

#[test]
fn keeps_only_case_insensitive_name_matches() {
    let records = vec![customer(1, "John Doe", "0811"), customer(2, "Jane", "0822")];

    let filtered = refilter(&records, "john");

    assert_eq!(filtered, vec![customer(1, "John Doe", "0811")]);
}

#[test]
fn customer_search_also_matches_phone() {
    let records = vec![customer(1, "John Doe", "0811-555"), customer(2, "Jane", "0822")];

    let filtered = refilter(&records, "555");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, CustomerId(1));
}

#[test]
fn order_search_matches_name_or_service_but_not_phone() {
    let records = vec![
        order(1, "Budi", "Dry Cleaning"),
        order(2, "Sari", "Ironing"),
    ];

    assert_eq!(refilter(&records, "CLEAN").len(), 1);
    assert_eq!(refilter(&records, "sari").len(), 1);
    assert!(refilter(&records, "0811").is_empty());
}

#[test]
fn empty_search_keeps_everything_in_order() {
    let records = vec![customer(2, "B", "2"), customer(1, "A", "1")];

    assert_eq!(refilter(&records, ""), records);
}

#[test]
fn every_kept_record_contains_the_needle() {
    let records: Vec<Customer> = ["Ann", "anna", "Hannah", "Bob", "JOANNE", "x"]
        .iter()
        .enumerate()
        .map(|(i, name)| customer(i as i64, name, "000"))
        .collect();

    for needle in ["an", "AN", "nn", "b", "zz", ""] {
        let filtered = refilter(&records, needle);
        let lower = needle.to_lowercase();
        for record in &filtered {
            assert!(record.name.to_lowercase().contains(&lower));
        }
        let expected = records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&lower))
            .count();
        assert_eq!(filtered.len(), expected, "needle={needle}");
    }
}

#[test]
fn non_array_data_decodes_to_nothing() {
    assert!(decode_records::<Customer>(json!(null)).is_empty());
    assert!(decode_records::<Customer>(json!({"error": "Permission denied"})).is_empty());
    assert!(decode_records::<Customer>(json!("oops")).is_empty());
    assert!(decode_records::<Customer>(json!([{"id": "not-a-number"}])).is_empty());
}

#[test]
fn array_data_decodes_records() {
    let records = decode_records::<Customer>(json!([
        {"id": 4, "name": "John Doe", "phone": "0811", "created_at": "2024-02-01T10:00:00Z"}
    ]));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, CustomerId(4));
    assert!(records[0].created_at.is_some());
}
