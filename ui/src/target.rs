//! Render targets
//!
//! [`RenderTarget`] is the widget's only view of the page: write the shell,
//! replace the output container, set style variables on the root.

use newsalert_shared::{WidgetError, DEFAULT_CONTAINER_ID};
use web_sys::HtmlElement;

/// Page region owned by one widget instance
pub trait RenderTarget {
    /// Replace the widget root content with the static shell
    fn mount_shell(&self, html: &str);

    /// Replace the output container content.
    ///
    /// Fails with [`WidgetError::RenderTargetMissing`] when the container
    /// does not exist.
    fn replace_output(&self, html: &str) -> Result<(), WidgetError>;

    /// Set a style variable on the root element; `None` removes it
    fn set_style_property(&self, name: &str, value: Option<&str>);
}

/// Render target backed by the widget's root DOM element
#[derive(Debug, Clone)]
pub struct DomRenderTarget {
    root: HtmlElement,
    container_id: String,
}

impl DomRenderTarget {
    pub fn new(root: HtmlElement) -> Self {
        Self {
            root,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

impl RenderTarget for DomRenderTarget {
    fn mount_shell(&self, html: &str) {
        self.root.set_inner_html(html);
    }

    fn replace_output(&self, html: &str) -> Result<(), WidgetError> {
        // Scoped to the root so several instances can share a page
        let selector = format!("#{}", self.container_id);
        let container = self
            .root
            .query_selector(&selector)
            .ok()
            .flatten()
            .ok_or_else(|| WidgetError::RenderTargetMissing(selector.clone()))?;

        container.set_inner_html(html);
        Ok(())
    }

    fn set_style_property(&self, name: &str, value: Option<&str>) {
        let style = self.root.style();
        let result = match value {
            Some(value) => style.set_property(name, value),
            None => style.remove_property(name).map(|_| ()),
        };
        if let Err(e) = result {
            tracing::warn!(property = name, error = ?e, "Failed to update style property");
        }
    }
}
