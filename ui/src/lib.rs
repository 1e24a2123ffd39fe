//! News Alert Widget
//!
//! This crate provides the News Alert widget: a page region that lists the
//! active entries of a remote alert list, ordered by their position column.
//!
//! # Architecture
//!
//! The host page creates a [`NewsAlertWebPart`] over its root element and
//! drives it through the lifecycle calls it exposes. Internally the widget
//! is split along two seams so it can run outside a browser:
//! - [`client::ListStore`]: where alert records come from
//! - [`target::RenderTarget`]: where markup and style variables go
//!
//! # Modules
//!
//! - [`client`]: List store abstraction and the REST implementation
//! - [`host`]: Host context passed to the widget at construction
//! - [`target`]: Render target abstraction and the DOM implementation
//! - [`widget`]: The widget itself and its lifecycle contract

pub mod client;
pub mod host;
pub mod target;
pub mod widget;

pub use widget::{AlertListWidget, RenderOutcome, WebPart};

use std::rc::Rc;
use std::sync::Once;

use newsalert_shared::{EnvironmentDescriptor, Theme, WidgetConfig, DATA_VERSION};
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::HtmlElement;

use crate::client::RestListStore;
use crate::host::{BearerToken, HostContext};
use crate::target::DomRenderTarget;

static LOGGING: Once = Once::new();

/// Install the browser tracing subscriber (idempotent)
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    LOGGING.call_once(|| {
        let config = WASMLayerConfigBuilder::default()
            .set_max_level(tracing::Level::DEBUG)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}

type BrowserWidget = AlertListWidget<RestListStore, DomRenderTarget>;

/// Widget handle exported to the host page
#[wasm_bindgen]
pub struct NewsAlertWebPart {
    inner: Rc<BrowserWidget>,
}

#[wasm_bindgen]
impl NewsAlertWebPart {
    /// Build a widget over `root`.
    ///
    /// `properties` is the host property bag as JSON, `environment` an
    /// optional `{ "host": ..., "isLocal": ... }` JSON object, and
    /// `access_token` an optional bearer token for list requests.
    #[wasm_bindgen(constructor)]
    pub fn new(
        root: HtmlElement,
        site_url: &str,
        properties: &str,
        environment: Option<String>,
        access_token: Option<String>,
    ) -> Result<NewsAlertWebPart, JsError> {
        init_logging();

        let config = WidgetConfig::from_json(properties)?;
        let environment: EnvironmentDescriptor = match environment.as_deref() {
            Some(json) => serde_json::from_str(json)?,
            None => EnvironmentDescriptor::default(),
        };

        let mut context = HostContext::new(site_url, environment);
        if let Some(token) = access_token.filter(|t| !t.is_empty()) {
            context = context.with_credentials(BearerToken::new(token));
        }

        let store = RestListStore::new(&context);
        let target = DomRenderTarget::new(root);
        let inner = AlertListWidget::new(config, context, store, target)?;

        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    #[wasm_bindgen(js_name = onInit)]
    pub fn on_init(&self) {
        self.inner.on_init();
    }

    /// Write the shell and start a render cycle.
    ///
    /// The returned promise rejects with the error message when the list
    /// request fails.
    pub fn render(&self) -> js_sys::Promise {
        let widget = Rc::clone(&self.inner);
        future_to_promise(async move {
            match widget.activate().await {
                Ok(outcome) => Ok(JsValue::from_bool(outcome != RenderOutcome::TargetMissing)),
                Err(e) => Err(JsValue::from_str(&e.to_string())),
            }
        })
    }

    /// Apply a theme given as JSON; `None` leaves styles untouched
    #[wasm_bindgen(js_name = onThemeChanged)]
    pub fn on_theme_changed(&self, theme: Option<String>) -> Result<(), JsError> {
        let theme: Option<Theme> = theme.as_deref().map(serde_json::from_str).transpose()?;
        self.inner.on_theme_changed(theme.as_ref());
        Ok(())
    }

    #[wasm_bindgen(js_name = environmentMessage)]
    pub fn environment_message(&self) -> String {
        self.inner.describe_environment().to_string()
    }

    /// Property panel schema as JSON
    #[wasm_bindgen(js_name = propertyPaneConfiguration)]
    pub fn property_pane_configuration(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.configuration_schema())?)
    }

    #[wasm_bindgen(js_name = dataVersion)]
    pub fn data_version() -> String {
        DATA_VERSION.to_string()
    }
}
