use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    error::{Error, Result},
    types::{Email, EmailId, EmailUpdate, Mailbox, OutgoingEmail, SendReceipt},
};

/// the REST backend the client talks to
pub(crate) trait Backend {
    /// `GET /emails/{mailbox}`
    async fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>>;

    /// `GET /emails/{id}`
    async fn get_email(&self, id: EmailId) -> Result<Email>;

    /// `POST /emails`
    async fn send_email(&self, email: &OutgoingEmail) -> Result<SendReceipt>;

    /// `PUT /emails/{id}`
    async fn update_email(&self, id: EmailId, update: &EmailUpdate) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct HttpBackend {
    config: Config,
}

impl HttpBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn email_path(&self, id: EmailId) -> String {
        self.config.api_path(&format!("emails/{id}"))
    }
}

/// fail on non-success status codes, keeping the response text for the log
fn check_status(ok: bool, status: u16, body: String) -> Result<String> {
    if !ok {
        return Err(Error::Status { status, body });
    }

    Ok(body)
}

fn decode<T: DeserializeOwned>(ok: bool, status: u16, body: String) -> Result<T> {
    let body = check_status(ok, status, body)?;

    Ok(serde_json_wasm::from_str(&body)?)
}

async fn read(response: Response) -> Result<(bool, u16, String)> {
    let body = response.text().await?;

    Ok((response.ok(), response.status(), body))
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let (ok, status, body) = read(request.send().await?).await?;

    decode(ok, status, body)
}

fn with_json<T: Serialize>(request: RequestBuilder, payload: &T) -> Result<Request> {
    let json = serde_json_wasm::to_string(payload)?;

    Ok(request
        .header("Content-Type", "application/json")
        .body(json)?)
}

impl Backend for HttpBackend {
    async fn list_mailbox(&self, mailbox: Mailbox) -> Result<Vec<Email>> {
        let url = self.config.api_path(&format!("emails/{}", mailbox.path()));

        fetch_json(Request::get(&url)).await
    }

    async fn get_email(&self, id: EmailId) -> Result<Email> {
        fetch_json(Request::get(&self.email_path(id))).await
    }

    async fn send_email(&self, email: &OutgoingEmail) -> Result<SendReceipt> {
        let url = self.config.api_path("emails");
        let request = with_json(Request::post(&url), email)?;
        let (ok, status, body) = read(request.send().await?).await?;

        decode(ok, status, body)
    }

    async fn update_email(&self, id: EmailId, update: &EmailUpdate) -> Result<()> {
        let request = with_json(Request::put(&self.email_path(id)), update)?;

        let (ok, status, body) = read(request.send().await?).await?;

        // the backend answers with an empty 204
        check_status(ok, status, body).map(|_| ())
    }
}
