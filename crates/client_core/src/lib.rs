pub mod auth;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod record;
pub mod session;
pub mod store;
pub mod transport;

pub use auth::AuthClient;
pub use controller::{LoadStatus, LoadTicket, QueryState, RecordListController};
pub use dialog::{Dialog, DialogKind};
pub use error::{ClientError, ClientResult};
pub use options::CustomerOptions;
pub use record::{CustomerForm, FormFields, OrderForm, Record};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionProvider};
pub use store::{HttpRecordStore, RecordPage, RecordStore};
pub use transport::HttpTransport;
