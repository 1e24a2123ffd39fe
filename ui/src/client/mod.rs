//! List Store Client Layer
//!
//! The widget reads alert items through the [`ListStore`] trait. The
//! browser build uses [`RestListStore`], which talks to the site's REST
//! list API; tests substitute an in-memory store.

mod rest;

pub use rest::RestListStore;

use async_trait::async_trait;
use newsalert_shared::{AlertRecord, WidgetError};

/// Read access to a remote list
#[async_trait(?Send)]
pub trait ListStore {
    /// Fetch every item of the named list
    async fn get_items(&self, list_name: &str) -> Result<Vec<AlertRecord>, WidgetError>;
}
