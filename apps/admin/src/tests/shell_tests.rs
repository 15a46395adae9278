use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use client_core::{
    ClientError, ClientResult, CustomerOptions, Record, RecordPage, RecordStore, Session,
};
use serde_json::{json, Value};
use shared::{
    domain::{AccountId, Customer, CustomerId, Order},
    error::ApiException,
    protocol::ListQuery,
};

use super::*;

#[derive(Default)]
struct Log {
    calls: Vec<String>,
    bodies: Vec<Value>,
}

/// Serves a fixed page; deletes really remove the record.
struct FakeStore<R> {
    records: Mutex<Vec<R>>,
    fail_delete: bool,
    log: Arc<Mutex<Log>>,
}

impl<R: Record> FakeStore<R> {
    fn new(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_delete: false,
            log: Arc::default(),
        }
    }

    fn record(&self, call: String, body: Option<Value>) {
        let mut log = self.log.lock().expect("log");
        log.calls.push(call);
        log.bodies.extend(body);
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for FakeStore<R> {
    async fn list(&self, _session: &Session, query: &ListQuery) -> ClientResult<RecordPage<R>> {
        self.record(format!("list page={} limit={}", query.page, query.limit), None);
        Ok(RecordPage {
            records: self.records.lock().expect("records").clone(),
            page: query.page,
            limit: query.limit,
            ..RecordPage::default()
        })
    }

    async fn create(&self, _session: &Session, draft: &R::Draft) -> ClientResult<()> {
        self.record("create".into(), serde_json::to_value(draft).ok());
        Ok(())
    }

    async fn update(&self, _session: &Session, id: R::Id, update: &R::Update) -> ClientResult<()> {
        self.record(format!("update {id}"), serde_json::to_value(update).ok());
        Ok(())
    }

    async fn delete(&self, _session: &Session, id: R::Id) -> ClientResult<()> {
        self.record(format!("delete {id}"), None);
        if self.fail_delete {
            return Err(ClientError::from(ApiException::from_response(
                500,
                r#"{"error":"still referenced"}"#,
            )));
        }
        self.records
            .lock()
            .expect("records")
            .retain(|record| record.id() != id);
        Ok(())
    }
}

fn session() -> Session {
    Session {
        id: AccountId(1),
        name: "Admin".to_string(),
        username: "admin".to_string(),
        token: "token-1".to_string(),
    }
}

fn customers(n: i64) -> Vec<Customer> {
    (1..=n)
        .map(|id| Customer {
            id: CustomerId(id),
            name: format!("Customer {id}"),
            phone: format!("08{id:02}"),
            created_at: None,
        })
        .collect()
}

fn script(lines: &str) -> Console<&[u8]> {
    Console::new(lines.as_bytes())
}

#[test]
fn parses_verbs_and_arguments() {
    assert_eq!(parse_command("search  john doe "), ShellCommand::Search("john doe".into()));
    assert_eq!(parse_command("SEARCH"), ShellCommand::Search(String::new()));
    assert_eq!(parse_command("page 3"), ShellCommand::Page(3));
    assert_eq!(parse_command("prev"), ShellCommand::Previous);
    assert_eq!(parse_command("edit 12"), ShellCommand::Edit(12));
    assert_eq!(parse_command("del 4"), ShellCommand::Delete(4));
    assert_eq!(parse_command("   "), ShellCommand::Nothing);
    assert_eq!(parse_command("q"), ShellCommand::Quit);
}

#[test]
fn rejects_malformed_arguments() {
    assert!(matches!(parse_command("page 0"), ShellCommand::Invalid(_)));
    assert!(matches!(parse_command("page two"), ShellCommand::Invalid(_)));
    assert!(matches!(parse_command("show"), ShellCommand::Invalid(_)));
    assert!(matches!(parse_command("frobnicate"), ShellCommand::Invalid(_)));
}

#[tokio::test]
async fn search_delete_and_edit_session() {
    let store = Arc::new(FakeStore::new(customers(12)));
    let log = store.log.clone();
    let mut controller = RecordListController::<Customer>::new(store, session());
    let mut console = script("next\nsearch customer 1\ndelete 10\ny\nedit 11\n\n0999\nquit\n");

    run(&mut controller, &mut console).await.expect("shell");

    assert_eq!(controller.query().search, "customer 1");
    assert_eq!(controller.current_page(), 1);
    let names: Vec<&str> = controller.filtered().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Customer 1", "Customer 11", "Customer 12"]);

    let log = log.lock().expect("log");
    assert_eq!(
        log.calls,
        vec![
            "list page=1 limit=10",
            "list page=1 limit=10",
            "delete 10",
            "update 11",
            "list page=1 limit=10",
        ]
    );
    assert_eq!(
        log.bodies,
        vec![json!({"id": 11, "name": "Customer 11", "phone": "0999"})]
    );
}

#[tokio::test]
async fn failed_delete_keeps_the_record_until_cancelled() {
    let mut store = FakeStore::new(customers(3));
    store.fail_delete = true;
    let store = Arc::new(store);
    let log = store.log.clone();
    let mut controller = RecordListController::<Customer>::new(store, session());
    let mut console = script("delete 2\ny\nn\n");

    run(&mut controller, &mut console).await.expect("shell");

    assert_eq!(controller.records().len(), 3);
    assert!(!controller.dialog().is_open());
    assert_eq!(
        log.lock().expect("log").calls,
        vec!["list page=1 limit=10", "delete 2"]
    );
}

#[tokio::test]
async fn order_add_offers_customers_and_posts_coerced_draft() {
    let customer_store = Arc::new(FakeStore::new(customers(2)));
    let customer_log = customer_store.log.clone();
    let order_store = Arc::new(FakeStore::<Order>::new(Vec::new()));
    let order_log = order_store.log.clone();

    let mut controller = RecordListController::<Order>::new(order_store, session())
        .with_customer_options(CustomerOptions::new(customer_store));
    let mut console = script("add\n2\nIroning\n3\nkg\n7000\nquit\n");

    run(&mut controller, &mut console).await.expect("shell");

    assert_eq!(
        customer_log.lock().expect("log").calls,
        vec!["list page=1 limit=100"]
    );
    let order_log = order_log.lock().expect("log");
    assert_eq!(
        order_log.calls,
        vec!["list page=1 limit=10", "create", "list page=1 limit=10"]
    );
    assert_eq!(
        order_log.bodies,
        vec![json!({
            "customer_id": 2,
            "service": "Ironing",
            "amount": 3,
            "unit": "kg",
            "price": 7000
        })]
    );
    assert!(!controller.dialog().is_open());
}

#[tokio::test]
async fn rejected_order_form_can_be_discarded() {
    let customer_store = Arc::new(FakeStore::new(customers(1)));
    let order_store = Arc::new(FakeStore::<Order>::new(Vec::new()));
    let order_log = order_store.log.clone();

    let mut controller = RecordListController::<Order>::new(order_store, session())
        .with_customer_options(CustomerOptions::new(customer_store));
    let mut console = script("add\n1\nIroning\nthree\nkg\n7000\nn\nquit\n");

    run(&mut controller, &mut console).await.expect("shell");

    assert_eq!(order_log.lock().expect("log").calls, vec!["list page=1 limit=10"]);
    assert!(!controller.dialog().is_open());
}
