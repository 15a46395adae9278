//! HTTP plumbing shared by the record store and the auth client.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::error::ApiException;
use tracing::debug;
use url::Url;

use crate::{
    error::{ClientError, ClientResult},
    session::Session,
};

/// Header the backend reads the identity token from.
pub const TOKEN_HEADER: &str = "X-JWT-TOKEN";

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::Validation(format!("invalid API base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Validation(format!(
                "API base URL must be http(s): {base_url}"
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match session {
            Some(session) => builder.header(TOKEN_HEADER, &session.token),
            None => builder,
        }
    }

    pub async fn get_json<Q, T>(&self, session: &Session, path: &str, query: &Q) -> ClientResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::GET, path, Some(session))
            .query(query)
            .send()
            .await?;
        read_json(check(response).await?).await
    }

    pub async fn send_json<B, T>(
        &self,
        method: Method,
        session: Option<&Session>,
        path: &str,
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.request(method, path, session).json(body).send().await?;
        read_json(check(response).await?).await
    }

    /// Success body is ignored.
    pub async fn send_json_discard<B>(
        &self,
        method: Method,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ClientResult<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .request(method, path, Some(session))
            .json(body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, session: &Session, path: &str) -> ClientResult<()> {
        let response = self.request(Method::DELETE, path, Some(session)).send().await?;
        check(response).await?;
        Ok(())
    }
}

async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiException::from_response(status.as_u16(), &body).into())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
