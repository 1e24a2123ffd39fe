//! Alert List Widget
//!
//! Orchestrates one render cycle: fetch the configured list, keep the
//! active alerts in position order, and write their markup into the
//! output container. Also reacts to host theme changes and reports the
//! host environment.
//!
//! Render cycles are not guarded against overlap. Two cycles started
//! back to back both run to completion and the later one to finish
//! owns the output.

use async_trait::async_trait;
use newsalert_shared::{
    configuration_schema, describe_environment, render_markup, select_and_order, shell_markup,
    style_updates, AlertRecord, ConfigurationSchema, Theme, WidgetConfig, WidgetError,
    DEFAULT_CONTAINER_ID,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::client::ListStore;
use crate::host::HostContext;
use crate::target::RenderTarget;

/// Lifecycle hooks the host invokes on a widget
#[async_trait(?Send)]
pub trait WebPart {
    /// Called once before the first activation
    fn on_init(&self);

    /// Write the shell and run a render cycle
    async fn activate(&self) -> Result<RenderOutcome, WidgetError>;

    /// Host theme changed; `None` when the host has no theme
    fn on_theme_changed(&self, theme: Option<&Theme>);

    /// Editable properties shown by the host
    fn configuration_schema(&self) -> ConfigurationSchema;
}

/// What a render step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Output replaced with this many alert cards
    Rendered(usize),
    /// Output container was absent; nothing written
    TargetMissing,
}

/// Widget that lists active alerts from a remote list
pub struct AlertListWidget<S, T> {
    /// Instance id used to tell widgets apart in logs
    id: Uuid,
    config: WidgetConfig,
    context: HostContext,
    store: S,
    target: T,
}

impl<S: ListStore, T: RenderTarget> AlertListWidget<S, T> {
    /// Create a widget; fails if the configuration is invalid
    pub fn new(
        config: WidgetConfig,
        context: HostContext,
        store: S,
        target: T,
    ) -> Result<Self, WidgetError> {
        config.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            context,
            store,
            target,
        })
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Fetch the configured list's items
    pub async fn fetch_records(&self) -> Result<Vec<AlertRecord>, WidgetError> {
        let list_name = self.config.list_name();
        self.store.get_items(list_name).await.map_err(|e| {
            tracing::debug!(list = list_name, "Fetch failed, render cycle aborted");
            e
        })
    }

    /// Write the markup for already-ordered records into the output container
    pub fn render(&self, records: &[AlertRecord]) -> RenderOutcome {
        let html = render_markup(records, &self.config.render_options());

        match self.target.replace_output(&html) {
            Ok(()) => {
                tracing::debug!(count = records.len(), "Rendered alerts");
                RenderOutcome::Rendered(records.len())
            }
            Err(e) => {
                tracing::error!(error = %e, "Container not found, skipping render");
                RenderOutcome::TargetMissing
            }
        }
    }

    /// Fetch, select and render.
    ///
    /// A fetch failure aborts the cycle and leaves prior output in place.
    pub async fn render_cycle(&self) -> Result<RenderOutcome, WidgetError> {
        let span = tracing::info_span!("render_cycle", widget = %self.id);
        async {
            let records = self.fetch_records().await?;
            tracing::debug!(fetched = records.len(), "Alerts fetched");

            let ordered = select_and_order(records);
            Ok::<_, WidgetError>(self.render(&ordered))
        }
        .instrument(span)
        .await
    }

    pub fn describe_environment(&self) -> &'static str {
        describe_environment(&self.context.environment)
    }
}

#[async_trait(?Send)]
impl<S: ListStore, T: RenderTarget> WebPart for AlertListWidget<S, T> {
    fn on_init(&self) {
        tracing::info!(
            widget = %self.id,
            environment = self.describe_environment(),
            "Widget initialized"
        );
    }

    async fn activate(&self) -> Result<RenderOutcome, WidgetError> {
        self.target.mount_shell(&shell_markup(DEFAULT_CONTAINER_ID));
        self.render_cycle().await
    }

    fn on_theme_changed(&self, theme: Option<&Theme>) {
        let Some(updates) = style_updates(theme) else {
            return;
        };
        for update in &updates {
            self.target.set_style_property(update.property, update.value.as_deref());
        }
    }

    fn configuration_schema(&self) -> ConfigurationSchema {
        configuration_schema()
    }
}
