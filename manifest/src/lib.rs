//! This crate builds the descriptor catalog the gallery fetches as `data.json`.
//!
//! Catalogs come from LaTeX emoji macro files, where every image is declared as
//! `\newcommand{\emjNAME}{... \includegraphics[...]{FILE.png}}`. Each macro
//! becomes `{src: "FILE.png", alt: "FILE", caption: "NAME"}`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use app::{GALLERY_ID, ImageDescriptor};
use leptos::{
    html::{body, div, figcaption, figure, h1, head, html, img, meta, title},
    prelude::*,
};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode catalog: {0}")]
    Json(#[from] serde_json::Error),
}

// `\w` is Unicode-aware, so kana, kanji and full-width names match too.
static EMOJI_MACRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\newcommand\{\\emj(\w+)\}\{.*?\\includegraphics\[.*?\]\{(\w+)\.png\}\}")
        .expect("emoji macro pattern is valid")
});

/// Extracts one descriptor per emoji macro, sorted by `src`.
///
/// A macro must sit on a single line; anything that does not match the
/// pattern is ignored.
#[must_use]
pub fn extract_descriptors(tex: &str) -> Vec<ImageDescriptor> {
    let mut descriptors: Vec<ImageDescriptor> = EMOJI_MACRO
        .captures_iter(tex)
        .map(|caps| ImageDescriptor::new(format!("{}.png", &caps[2]), &caps[2], &caps[1]))
        .collect();
    descriptors.sort_by(|a, b| a.src.cmp(&b.src));
    descriptors
}

/// Prefixes every `src` with `base`, inserting a `/` when needed.
#[must_use]
pub fn with_base_path(descriptors: Vec<ImageDescriptor>, base: &str) -> Vec<ImageDescriptor> {
    if base.is_empty() {
        return descriptors;
    }
    let base = base.trim_end_matches('/');
    descriptors
        .into_iter()
        .map(|mut descriptor| {
            descriptor.src = descriptor.src.map(|src| format!("{base}/{src}"));
            descriptor
        })
        .collect()
}

/// Reads `path` and extracts its descriptors.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file cannot be read.
pub fn load_macros(path: &Path) -> Result<Vec<ImageDescriptor>, ManifestError> {
    let tex = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(extract_descriptors(&tex))
}

/// Encodes a catalog as pretty-printed JSON, keeping non-ASCII text as is.
///
/// # Errors
///
/// Returns [`ManifestError::Json`] if encoding fails.
pub fn catalog_json(descriptors: &[ImageDescriptor]) -> Result<String, ManifestError> {
    let mut json = serde_json::to_string_pretty(descriptors)?;
    json.push('\n');
    Ok(json)
}

/// Writes a catalog to `path`.
///
/// # Errors
///
/// Returns [`ManifestError`] if encoding or writing fails.
pub fn write_catalog(path: &Path, descriptors: &[ImageDescriptor]) -> Result<(), ManifestError> {
    let json = catalog_json(descriptors)?;
    fs::write(path, json).map_err(|source| ManifestError::Io {
        path: path.to_owned(),
        source,
    })
}

/// Renders a standalone HTML page with the same figure structure the browser
/// loader produces, for viewing a catalog without a server.
#[must_use]
pub fn render_static_gallery(descriptors: &[ImageDescriptor], heading: &str) -> String {
    let figures = descriptors
        .iter()
        .cloned()
        .map(|descriptor| {
            figure().child((
                img().src(descriptor.src).alt(descriptor.alt),
                figcaption().child(descriptor.caption),
            ))
        })
        .collect_view();

    let page = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            title().child(heading.to_owned()),
        )),
        body().child((
            h1().child(heading.to_owned()),
            div().id(GALLERY_ID).class("gallery").child(figures),
        )),
    ));

    format!("<!DOCTYPE html>{}", page.to_html())
}

/// Writes [`render_static_gallery`] output to `path`.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file cannot be written.
pub fn write_static_gallery(
    path: &Path,
    descriptors: &[ImageDescriptor],
    heading: &str,
) -> Result<(), ManifestError> {
    fs::write(path, render_static_gallery(descriptors, heading)).map_err(|source| {
        ManifestError::Io {
            path: path.to_owned(),
            source,
        }
    })
}
