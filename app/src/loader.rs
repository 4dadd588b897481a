//! The gallery loader: fetch the catalog, parse it, and append one figure per
//! descriptor to the gallery container.
//!
//! The pipeline is linear and runs once per call to [`GalleryLoader::load`]:
//!
//! `Idle → Fetching → Fetched → Parsing → Parsed → Rendering → Done`
//!
//! Any failure moves it to [`LoadStage::Failed`] and produces exactly one
//! diagnostic entry. There is no retry and no timeout.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::error::GalleryError;
use crate::surface::{GallerySurface, ImageErrorHook};
use crate::transport::{Transport, TransportResponse};
use crate::types::{DATA_URL, GALLERY_ID, ImageDescriptor, json_kind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Idle,
    Fetching,
    Fetched,
    Parsing,
    Parsed,
    Rendering,
    Done,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Catalog location, resolved against the page.
    pub data_url: String,
    /// Identifier of the container element.
    pub container_id: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_url: DATA_URL.to_owned(),
            container_id: GALLERY_ID.to_owned(),
        }
    }
}

pub struct GalleryLoader<T, S, D> {
    transport: T,
    surface: S,
    diagnostics: Rc<D>,
    config: GalleryConfig,
    stage: Cell<LoadStage>,
}

impl<T, S, D> GalleryLoader<T, S, D>
where
    T: Transport,
    S: GallerySurface,
    D: Diagnostics + 'static,
{
    pub fn new(transport: T, surface: S, diagnostics: D) -> Self {
        Self {
            transport,
            surface,
            diagnostics: Rc::new(diagnostics),
            config: GalleryConfig::default(),
            stage: Cell::new(LoadStage::Idle),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GalleryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stage(&self) -> LoadStage {
        self.stage.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs the pipeline to completion and returns the number of figures
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns the error that stopped the pipeline, after it has been written
    /// to the diagnostic stream.
    pub async fn load(&self) -> Result<usize, GalleryError> {
        match self.run().await {
            Ok(rendered) => {
                self.advance(LoadStage::Done, &format!("{rendered} figures"));
                Ok(rendered)
            }
            Err(error) => {
                self.stage.set(LoadStage::Failed);
                self.diagnostics.report(&error);
                Err(error)
            }
        }
    }

    async fn run(&self) -> Result<usize, GalleryError> {
        self.advance(LoadStage::Fetching, &self.config.data_url);
        let response = self.transport.get(&self.config.data_url).await?;

        let status = response.status();
        self.advance(LoadStage::Fetched, &format!("HTTP {status}"));
        if !(200..=299).contains(&status) {
            return Err(GalleryError::Status(status));
        }

        self.advance(LoadStage::Parsing, &self.config.data_url);
        let body = response.bytes().await?;
        // Decode like a browser's `response.json()`: lossy UTF-8, one BOM dropped.
        let text = String::from_utf8_lossy(&body);
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let data: Value = serde_json::from_str(text)?;
        self.advance(LoadStage::Parsed, &format!("{} bytes", body.len()));

        let container = self
            .surface
            .find_container(&self.config.container_id)
            .ok_or_else(|| GalleryError::MissingContainer(self.config.container_id.clone()))?;

        let items = match data {
            Value::Array(items) => items,
            other => return Err(GalleryError::NotAnArray(json_kind(&other))),
        };

        self.advance(LoadStage::Rendering, &format!("{} descriptors", items.len()));
        for (index, item) in items.iter().enumerate() {
            let descriptor = ImageDescriptor::from_value(item);
            self.diagnostics
                .milestone(LoadStage::Rendering, &format!("item[{index}]: {descriptor:?}"));
            self.surface.append_figure(&container, &descriptor, self.image_error_hook())?;
        }

        Ok(items.len())
    }

    fn advance(&self, stage: LoadStage, detail: &str) {
        self.stage.set(stage);
        self.diagnostics.milestone(stage, detail);
    }

    fn image_error_hook(&self) -> ImageErrorHook {
        let diagnostics = Rc::clone(&self.diagnostics);
        Box::new(move |requested: &str| {
            diagnostics.report(&GalleryError::ImageLoad(requested.to_owned()));
        })
    }
}
