//! Reconcile options

/// Options for a reconciliation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Plan only: never touch disk or the manifest
    pub dry_run: bool,
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
