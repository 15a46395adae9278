use reqwest::Method;
use shared::{
    domain::Account,
    protocol::{LoginRequest, LoginResponse, RegisterRequest},
};
use tracing::info;

use crate::{
    error::ClientResult,
    session::{Session, SessionProvider},
    transport::HttpTransport,
};

#[derive(Debug, Clone)]
pub struct AuthClient {
    transport: HttpTransport,
}

impl AuthClient {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Exchanges credentials for a session and persists it.
    pub async fn login(
        &self,
        sessions: &dyn SessionProvider,
        username: &str,
        password: &str,
    ) -> ClientResult<Session> {
        let response: LoginResponse = self
            .transport
            .send_json(
                Method::POST,
                None,
                "login",
                &LoginRequest {
                    username: username.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;

        let session = Session::from(response);
        sessions.save(&session)?;
        info!(username = %session.username, account_id = %session.id, "logged in");
        Ok(session)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Account> {
        let account: Account = self
            .transport
            .send_json(Method::POST, None, "register", request)
            .await?;
        info!(username = %account.username, account_id = %account.id, "account registered");
        Ok(account)
    }

    pub fn logout(&self, sessions: &dyn SessionProvider) -> ClientResult<()> {
        sessions.clear()?;
        info!("logged out");
        Ok(())
    }
}
