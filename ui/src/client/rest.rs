//! REST List Store
//!
//! Reads list items from the site's REST API.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use newsalert_shared::{AlertRecord, ListItemsResponse, WidgetError};

use super::ListStore;
use crate::host::{CredentialProvider, HostContext};

/// Ask for plain JSON without OData metadata
const ODATA_ACCEPT: &str = "application/json;odata=nometadata";

/// List store backed by the site REST endpoint
#[derive(Clone)]
pub struct RestListStore {
    /// Site base URL
    base_url: String,

    credentials: Rc<dyn CredentialProvider>,
}

impl RestListStore {
    pub fn new(context: &HostContext) -> Self {
        Self {
            base_url: context.base_url.trim_end_matches('/').to_string(),
            credentials: Rc::clone(&context.credentials),
        }
    }

    /// Items endpoint for a list title
    fn items_url(&self, list_name: &str) -> String {
        // OData string literals escape a quote by doubling it
        let literal = list_name.replace('\'', "''");
        format!(
            "{}/_api/web/Lists/GetByTitle('{}')/Items",
            self.base_url,
            urlencoding::encode(&literal)
        )
    }
}

#[async_trait(?Send)]
impl ListStore for RestListStore {
    async fn get_items(&self, list_name: &str) -> Result<Vec<AlertRecord>, WidgetError> {
        let url = self.items_url(list_name);
        tracing::debug!(%url, "Fetching list data");

        let result = self.fetch(&url).await;
        match &result {
            Ok(items) => tracing::debug!(count = items.len(), "List data received"),
            Err(e) => tracing::error!(%url, error = %e, "Error fetching list data"),
        }
        result
    }
}

impl RestListStore {
    async fn fetch(&self, url: &str) -> Result<Vec<AlertRecord>, WidgetError> {
        let mut request = Request::get(url).header("Accept", ODATA_ACCEPT);
        if let Some(authorization) = self.credentials.authorization() {
            request = request.header("Authorization", &authorization);
        }

        let response = request.send().await.map_err(network_error)?;
        check_status(response.ok(), response.status(), response.status_text())?;

        let body = response.text().await.map_err(network_error)?;
        decode_items(&body)
    }
}

fn network_error(e: impl std::fmt::Display) -> WidgetError {
    WidgetError::Network(e.to_string())
}

/// Map a non-success response to [`WidgetError::RemoteStore`]
fn check_status(ok: bool, status: u16, status_text: String) -> Result<(), WidgetError> {
    if ok {
        Ok(())
    } else {
        Err(WidgetError::RemoteStore {
            status,
            status_text,
        })
    }
}

/// Decode the `{ "value": [...] }` envelope
fn decode_items(body: &str) -> Result<Vec<AlertRecord>, WidgetError> {
    serde_json::from_str::<ListItemsResponse>(body)
        .map(|response| response.value)
        .map_err(|e| WidgetError::InvalidResponse(e.to_string()))
}
