//! This crate provides the WebAssembly (WASM) entry point for the gallery.
//!
//! It hydrates the server-rendered page, initializes client-side logging, and
//! then runs the gallery loader against the live document: one `fetch` of
//! `data.json`, one `<figure>` per descriptor appended to `#gallery`.

use app::{
    ConsoleDiagnostics, Diagnostics as _, GalleryConfig, GalleryError, GalleryLoader,
    GallerySurface, ImageDescriptor, ImageErrorHook, ReqwestTransport,
};
use leptos::prelude::{document, window};
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};
use web_sys::{HtmlElement, HtmlImageElement};

/// Builds figures with the browser DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSurface;

fn render_error(err: JsValue) -> GalleryError {
    GalleryError::Render(format!("{err:?}"))
}

impl GallerySurface for DocumentSurface {
    type Container = HtmlElement;

    fn find_container(&self, id: &str) -> Option<HtmlElement> {
        document().get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn append_figure(
        &self,
        container: &HtmlElement,
        descriptor: &ImageDescriptor,
        on_image_error: ImageErrorHook,
    ) -> Result<(), GalleryError> {
        let document = document();
        let figure = document.create_element("figure").map_err(render_error)?;

        let image = document
            .create_element("img")
            .map_err(render_error)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|element| render_error(element.into()))?;
        if let Some(src) = &descriptor.src {
            image.set_src(src);
        }
        if let Some(alt) = &descriptor.alt {
            image.set_alt(alt);
        }
        // The image lives as long as the page, so the handler is leaked with it.
        // `src()` reads back the location the browser resolved and requested.
        let requested = image.clone();
        let on_error = Closure::<dyn Fn()>::new(move || on_image_error(&requested.src()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        let caption = document.create_element("figcaption").map_err(render_error)?;
        caption.set_text_content(descriptor.caption.as_deref());

        figure.append_child(&image).map_err(render_error)?;
        figure.append_child(&caption).map_err(render_error)?;
        container.append_child(&figure).map_err(render_error)?;
        Ok(())
    }
}

fn page_location() -> Result<String, GalleryError> {
    window()
        .location()
        .href()
        .map_err(|err| GalleryError::Network(format!("page location unavailable: {err:?}")))
}

/// Loads `data.json` relative to the current page and renders it into the
/// gallery container.
///
/// # Errors
///
/// Returns the failure that stopped the pipeline; it has already been written
/// to the console.
pub async fn load_gallery(config: GalleryConfig) -> Result<usize, GalleryError> {
    let transport = match page_location().and_then(|page| ReqwestTransport::new(&page)) {
        Ok(transport) => transport,
        Err(error) => {
            ConsoleDiagnostics.report(&error);
            return Err(error);
        }
    };

    GalleryLoader::new(transport, DocumentSurface, ConsoleDiagnostics)
        .with_config(config)
        .load()
        .await
}

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the page and starts the gallery loader.
///
/// This function is the WASM entry point. It initializes `console_log` and
/// `console_error_panic_hook` for debugging, hydrates the shell rendered by
/// the server, then spawns the single gallery load for this page.
pub fn hydrate() {
    // Initialize console logging for client-side debugging.
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::component);

    leptos::task::spawn_local(async {
        if let Ok(rendered) = load_gallery(GalleryConfig::default()).await {
            log::debug!("gallery rendered {rendered} figures");
        }
    });
}
