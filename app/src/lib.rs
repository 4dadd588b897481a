// Page shell, gallery page, and the loader that fills it
use crate::components::error_template;
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod components;
pub mod diagnostics;
pub mod error;
mod gallery;
pub mod loader;
pub mod surface;
pub mod transport;
pub mod types;

pub use diagnostics::{ConsoleDiagnostics, Diagnostics};
pub use error::GalleryError;
pub use loader::{GalleryConfig, GalleryLoader, LoadStage};
pub use surface::{GallerySurface, ImageErrorHook};
pub use transport::{ReqwestTransport, Transport, TransportResponse};
pub use types::{DATA_URL, GALLERY_ID, ImageDescriptor};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/gallery.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Gallery").build()),
        )),
        body().child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <main class="gallery-page">
                <FlatRoutes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                    error_template::component(Some(outside_errors), None)
                }>
                    <Route path=StaticSegment("") view=gallery::component/>
                </FlatRoutes>
            </main>
            {footer_component()}
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer().class("gallery-footer").child(
        div().child(p().child(format!("\u{a9} {}", Utc::now().year()))),
    )
}
