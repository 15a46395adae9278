//! List state and dialog flows over one kind of record.

use std::sync::Arc;

use shared::{domain::Customer, protocol::ListQuery};
use tracing::{debug, error, info};

use crate::{
    dialog::Dialog,
    error::{ClientError, ClientResult},
    filter::refilter,
    options::CustomerOptions,
    pagination::{self, PageWindow, DEFAULT_PAGE_SIZE},
    record::Record,
    session::Session,
    store::{RecordPage, RecordStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    /// Page requested from the backend.
    pub page_number: u32,
    pub page_size: usize,
}

impl QueryState {
    fn to_list_query(&self) -> ListQuery {
        ListQuery::new(
            &self.search,
            self.page_number,
            u32::try_from(self.page_size).unwrap_or(u32::MAX),
        )
    }
}

/// Handle for one issued load. Only the most recently issued ticket may
/// replace the record page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    query: ListQuery,
}

impl LoadTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Applied,
    /// A newer load was issued after this one; its response was dropped.
    Stale,
    Failed,
}

pub struct RecordListController<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    session: Session,
    query: QueryState,
    current_page: usize,
    page: RecordPage<R>,
    filtered: Vec<R>,
    dialog: Dialog<R>,
    issued: u64,
    customer_options: Option<CustomerOptions>,
}

impl<R: Record> RecordListController<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>, session: Session) -> Self {
        Self::with_page_size(store, session, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(store: Arc<dyn RecordStore<R>>, session: Session, page_size: usize) -> Self {
        Self {
            store,
            session,
            query: QueryState {
                search: String::new(),
                page_number: 1,
                page_size: page_size.max(1),
            },
            current_page: 1,
            page: RecordPage::default(),
            filtered: Vec::new(),
            dialog: Dialog::Closed,
            issued: 0,
            customer_options: None,
        }
    }

    /// Add and edit dialogs fetch the customer selector on open.
    pub fn with_customer_options(mut self, options: CustomerOptions) -> Self {
        self.customer_options = Some(options);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn record_page(&self) -> &RecordPage<R> {
        &self.page
    }

    pub fn records(&self) -> &[R] {
        &self.page.records
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn window(&self) -> PageWindow {
        pagination::window(self.current_page, self.filtered.len(), self.query.page_size)
    }

    pub fn visible(&self) -> &[R] {
        let window = self.window();
        &self.filtered[window.start..window.end]
    }

    pub fn dialog(&self) -> &Dialog<R> {
        &self.dialog
    }

    pub fn has_customer_selector(&self) -> bool {
        self.customer_options.is_some()
    }

    pub fn customer_options(&self) -> &[Customer] {
        self.customer_options
            .as_ref()
            .map(CustomerOptions::customers)
            .unwrap_or_default()
    }

    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.page.records.iter().find(|record| record.id() == id)
    }

    pub async fn mount(&mut self) -> LoadStatus {
        self.load().await
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.refilter();
    }

    pub async fn search(&mut self, search: impl Into<String>) -> LoadStatus {
        self.set_search(search);
        self.load().await
    }

    /// Selects which backend page the next load asks for.
    pub fn set_remote_page(&mut self, page_number: u32) {
        self.query.page_number = page_number.max(1);
    }

    pub fn next_page(&mut self) -> bool {
        if !self.window().has_next {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.window().has_previous {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let page_count = self.window().page_count.max(1);
        if page == 0 || page > page_count {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket {
            seq: self.issued,
            query: self.query.to_list_query(),
        }
    }

    pub async fn fetch(&self, ticket: &LoadTicket) -> ClientResult<RecordPage<R>> {
        self.store.list(&self.session, &ticket.query).await
    }

    pub fn apply_load(&mut self, ticket: LoadTicket, result: ClientResult<RecordPage<R>>) -> LoadStatus {
        if ticket.seq != self.issued {
            debug!(
                resource = R::RESOURCE,
                seq = ticket.seq,
                latest = self.issued,
                "dropping stale list response"
            );
            return LoadStatus::Stale;
        }

        match result {
            Ok(page) => {
                debug!(resource = R::RESOURCE, records = page.records.len(), "record page loaded");
                self.page = page;
                self.refilter();
                LoadStatus::Applied
            }
            Err(err) => {
                error!(resource = R::RESOURCE, error = %err, "failed to fetch records");
                LoadStatus::Failed
            }
        }
    }

    pub async fn load(&mut self) -> LoadStatus {
        let ticket = self.begin_load();
        let result = self.fetch(&ticket).await;
        self.apply_load(ticket, result)
    }

    fn refilter(&mut self) {
        self.filtered = refilter(&self.page.records, &self.query.search);
        let last = pagination::page_count(self.filtered.len(), self.query.page_size).max(1);
        self.current_page = self.current_page.min(last);
    }

    pub async fn open_create(&mut self) {
        self.dialog = Dialog::Creating {
            form: R::Form::default(),
        };
        self.refresh_customer_options().await;
    }

    pub fn open_detail(&mut self, record: R) {
        self.dialog = Dialog::Viewing { record };
    }

    pub async fn open_edit(&mut self, record: R) {
        self.dialog = Dialog::Editing {
            form: record.to_form(),
            record,
        };
        self.refresh_customer_options().await;
    }

    pub fn open_delete(&mut self, record: R) {
        self.dialog = Dialog::Deleting { record };
    }

    pub fn close_dialog(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn form_mut(&mut self) -> Option<&mut R::Form> {
        self.dialog.form_mut()
    }

    async fn refresh_customer_options(&mut self) {
        if let Some(options) = self.customer_options.as_mut() {
            options.refresh(&self.session).await;
        }
    }

    /// On failure the dialog and its form stay open.
    pub async fn save_create(&mut self) -> ClientResult<()> {
        let Dialog::Creating { form } = &self.dialog else {
            return Err(ClientError::Validation("no add dialog is open".into()));
        };

        let result = match R::draft_from(form) {
            Ok(draft) => self.store.create(&self.session, &draft).await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            error!(resource = R::RESOURCE, error = %err, "failed to create record");
            return Err(err);
        }

        info!(resource = R::RESOURCE, "record created");
        self.dialog = Dialog::Closed;
        self.load().await;
        Ok(())
    }

    pub async fn save_edit(&mut self) -> ClientResult<()> {
        let Dialog::Editing { record, form } = &self.dialog else {
            return Err(ClientError::Validation("no edit dialog is open".into()));
        };

        let id = record.id();
        let result = match R::update_from(id, form) {
            Ok(update) => self.store.update(&self.session, id, &update).await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            error!(resource = R::RESOURCE, %id, error = %err, "failed to update record");
            return Err(err);
        }

        info!(resource = R::RESOURCE, %id, "record updated");
        self.dialog = Dialog::Closed;
        self.load().await;
        Ok(())
    }

    /// Drops the record locally; no reload.
    pub async fn confirm_delete(&mut self) -> ClientResult<()> {
        let Dialog::Deleting { record } = &self.dialog else {
            return Err(ClientError::Validation("no delete dialog is open".into()));
        };

        let id = record.id();
        if let Err(err) = self.store.delete(&self.session, id).await {
            error!(resource = R::RESOURCE, %id, error = %err, "failed to delete record");
            return Err(err);
        }

        info!(resource = R::RESOURCE, %id, "record deleted");
        self.remove_local(id);
        self.dialog = Dialog::Closed;
        Ok(())
    }

    pub fn remove_local(&mut self, id: R::Id) -> bool {
        let Some(index) = self.page.records.iter().position(|record| record.id() == id) else {
            return false;
        };
        self.page.records.remove(index);
        self.refilter();
        true
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
