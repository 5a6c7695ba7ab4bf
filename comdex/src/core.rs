use std::sync::Arc;

use comdex_core::{IndexConfig, IndexError, VendorConnector};

/// Orchestrator that computes composite indexes through a vendor connector.
pub struct Comdex {
    pub(crate) connector: Arc<dyn VendorConnector>,
    pub(crate) cfg: IndexConfig,
}

impl std::fmt::Debug for Comdex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comdex").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

/// Builder for constructing a `Comdex` orchestrator with custom configuration.
pub struct ComdexBuilder {
    connector: Option<Arc<dyn VendorConnector>>,
    cfg: IndexConfig,
}

impl Default for ComdexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComdexBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connector; you must register one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults reproduce the vendor constraints: 60-day sub-windows
    ///   anchored at 05:00 and a 30-minute freshness margin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: IndexConfig::default(),
        }
    }

    /// Register the vendor connector.
    ///
    /// The connector is assumed to be authenticated already; the orchestrator
    /// only reads through it. Registering twice keeps the last connector.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn VendorConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the pipeline configuration.
    ///
    /// Behavior and trade-offs:
    /// - Shorter sub-windows mean more vendor calls but smaller responses;
    ///   the 60-day default matches the vendor's per-call result bound.
    /// - A larger freshness margin trims more of the recent tail from the
    ///   output; shrinking it below 30 minutes admits open-interest data the
    ///   vendor considers unreliable.
    #[must_use]
    pub fn config(mut self, cfg: IndexConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Comdex` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector has been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(self) -> Result<Comdex, IndexError> {
        let connector = self.connector.ok_or_else(|| {
            IndexError::invalid_arg("no connector registered; add one via with_connector(...)")
        })?;
        Ok(Comdex {
            connector,
            cfg: self.cfg,
        })
    }
}

impl Comdex {
    /// Start building a new `Comdex` instance.
    ///
    /// Typical usage chains connector registration and configuration, e.g.:
    ///
    /// ```rust,ignore
    /// let comdex = comdex::Comdex::builder()
    ///     .with_connector(Arc::new(connector))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> ComdexBuilder {
        ComdexBuilder::new()
    }

    /// The registered vendor connector.
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn VendorConnector> {
        &self.connector
    }

    /// The active pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &IndexConfig {
        &self.cfg
    }
}
