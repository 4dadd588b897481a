//! The diagnostic stream the loader writes to.
//!
//! Failures are reported as entries; milestones are a progress trace that
//! helps follow a page load but does not count as a diagnostic.

use leptos::logging;

use crate::error::GalleryError;
use crate::loader::LoadStage;

pub trait Diagnostics {
    /// Records one diagnostic entry.
    fn report(&self, error: &GalleryError);

    /// Records that the pipeline reached `stage`.
    fn milestone(&self, stage: LoadStage, detail: &str) {
        let _ = (stage, detail);
    }
}

/// Writes to the browser console (stdout/stderr off the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn report(&self, error: &GalleryError) {
        logging::error!("{error}");
    }

    fn milestone(&self, stage: LoadStage, detail: &str) {
        logging::log!("{stage:?}: {detail}");
    }
}
