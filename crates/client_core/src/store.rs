//! Remote record store: the list/create/update/delete endpoints.

use async_trait::async_trait;
use reqwest::Method;
use shared::protocol::{ListEnvelope, ListQuery};

use crate::{
    error::ClientResult, filter::decode_records, record::Record, session::Session,
    transport::HttpTransport,
};

/// One fetched page of records plus the backend's paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage<R> {
    pub records: Vec<R>,
    pub page: u32,
    pub limit: u32,
    pub count: u64,
    pub total_pages: u64,
}

impl<R> Default for RecordPage<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            page: 0,
            limit: 0,
            count: 0,
            total_pages: 0,
        }
    }
}

impl<R: Record> RecordPage<R> {
    pub fn from_envelope(envelope: ListEnvelope) -> Self {
        Self {
            records: decode_records(envelope.data),
            page: envelope.page,
            limit: envelope.limit,
            count: envelope.count,
            total_pages: envelope.total,
        }
    }
}

#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    async fn list(&self, session: &Session, query: &ListQuery) -> ClientResult<RecordPage<R>>;
    async fn create(&self, session: &Session, draft: &R::Draft) -> ClientResult<()>;
    async fn update(&self, session: &Session, id: R::Id, update: &R::Update) -> ClientResult<()>;
    async fn delete(&self, session: &Session, id: R::Id) -> ClientResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    transport: HttpTransport,
}

impl HttpRecordStore {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for HttpRecordStore {
    async fn list(&self, session: &Session, query: &ListQuery) -> ClientResult<RecordPage<R>> {
        let envelope: ListEnvelope = self.transport.get_json(session, R::RESOURCE, query).await?;
        Ok(RecordPage::from_envelope(envelope))
    }

    async fn create(&self, session: &Session, draft: &R::Draft) -> ClientResult<()> {
        self.transport
            .send_json_discard(Method::POST, session, R::RESOURCE, draft)
            .await
    }

    async fn update(&self, session: &Session, id: R::Id, update: &R::Update) -> ClientResult<()> {
        self.transport
            .send_json_discard(Method::PUT, session, &format!("{}/{id}", R::RESOURCE), update)
            .await
    }

    async fn delete(&self, session: &Session, id: R::Id) -> ClientResult<()> {
        self.transport
            .delete(session, &format!("{}/{id}", R::RESOURCE))
            .await
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
