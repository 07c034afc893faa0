//! reqwest client for the remote event collection.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::EventRemote;
use crate::config::EventDeskConfig;
use crate::error::{Error, EventDeskResult};
use crate::event::{Event, EventDraft, EventId};

/// HTTP client for one REST collection (`GET`/`POST` on the collection,
/// `PUT`/`DELETE` on `<collection>/<id>`).
#[derive(Debug, Clone)]
pub struct HttpEventRemote {
    http: reqwest::Client,
    collection: Url,
}

impl HttpEventRemote {
    pub fn new(collection_url: &str) -> EventDeskResult<Self> {
        Self::with_timeout(collection_url, None)
    }

    /// Without a timeout, requests wait as long as the transport lets them.
    pub fn with_timeout(collection_url: &str, timeout: Option<Duration>) -> EventDeskResult<Self> {
        let collection = parse_collection_url(collection_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::Config(format!("Could not build HTTP client: {e}")))?;

        Ok(Self { http, collection })
    }

    pub fn from_config(config: &EventDeskConfig) -> EventDeskResult<Self> {
        Self::with_timeout(&config.api_url, config.timeout())
    }

    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn record_url(&self, id: EventId) -> EventDeskResult<Url> {
        self.collection
            .join(&id.to_string())
            .map_err(|e| Error::Config(format!("Invalid record URL for event {id}: {e}")))
    }
}

impl EventRemote for HttpEventRemote {
    /// `GET <collection>`
    async fn list(&self) -> EventDeskResult<Vec<Event>> {
        debug!(url = %self.collection, "GET events");
        let resp = send(self.http.get(self.collection.clone())).await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            return Err(Error::Remote {
                status,
                message: format!("HTTP error! Status: {status}"),
            });
        }

        read_json(resp).await
    }

    /// `POST <collection>`
    async fn create(&self, draft: &EventDraft) -> EventDeskResult<Event> {
        debug!(url = %self.collection, name = %draft.name, "POST event");
        let resp = send(self.http.post(self.collection.clone()).json(draft)).await?;
        let resp = require_success(resp, "Failed to create event on the server.")?;
        read_json(resp).await
    }

    /// `PUT <collection>/<id>`
    async fn update(&self, event: &Event) -> EventDeskResult<Event> {
        let url = self.record_url(event.id)?;
        debug!(%url, "PUT event");
        let resp = send(self.http.put(url).json(event)).await?;
        let resp = require_success(resp, "Failed to update event on the server.")?;
        read_json(resp).await
    }

    /// `DELETE <collection>/<id>`
    async fn remove(&self, id: EventId) -> EventDeskResult<()> {
        let url = self.record_url(id)?;
        debug!(%url, "DELETE event");
        let resp = send(self.http.delete(url)).await?;
        require_success(resp, "Failed to delete the event on the server.")?;
        Ok(())
    }
}

/// Parse the collection URL, making sure the path ends in `/` so record
/// URLs join onto it instead of replacing its last segment.
fn parse_collection_url(raw: &str) -> EventDeskResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("Invalid api_url '{raw}': {e}")))?;

    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("Invalid api_url '{raw}': not a base URL")));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

async fn send(request: RequestBuilder) -> EventDeskResult<Response> {
    request
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))
}

fn require_success(resp: Response, message: &str) -> EventDeskResult<Response> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(Error::Remote {
            status: resp.status().as_u16(),
            message: message.to_string(),
        })
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> EventDeskResult<T> {
    resp.json().await.map_err(|e| {
        if e.is_decode() {
            Error::InvalidResponse(e.to_string())
        } else {
            Error::Transport(e.to_string())
        }
    })
}
