//! Customer choices offered by the order add/edit dialogs.

use std::sync::Arc;

use shared::{domain::Customer, protocol::ListQuery};
use tracing::warn;

use crate::{session::Session, store::RecordStore};

pub const DEFAULT_OPTION_LIMIT: u32 = 100;

pub struct CustomerOptions {
    store: Arc<dyn RecordStore<Customer>>,
    limit: u32,
    customers: Vec<Customer>,
}

impl CustomerOptions {
    pub fn new(store: Arc<dyn RecordStore<Customer>>) -> Self {
        Self::with_limit(store, DEFAULT_OPTION_LIMIT)
    }

    pub fn with_limit(store: Arc<dyn RecordStore<Customer>>, limit: u32) -> Self {
        Self {
            store,
            limit,
            customers: Vec::new(),
        }
    }

    /// Fetches the first page of customers. Not cached: every call hits the
    /// backend, and a failure leaves the selector empty.
    pub async fn refresh(&mut self, session: &Session) {
        let query = ListQuery::new("", 1, self.limit);
        self.customers = match self.store.list(session, &query).await {
            Ok(page) => page.records,
            Err(err) => {
                warn!(error = %err, "failed to fetch customer options");
                Vec::new()
            }
        };
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}
