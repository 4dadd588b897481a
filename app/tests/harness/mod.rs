use std::cell::RefCell;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::rc::Rc;

use app::{Diagnostics, GalleryError, GallerySurface, ImageDescriptor, ImageErrorHook, LoadStage};
use axum::Router;

/// In-memory stand-in for the page: one optional container and the figures
/// appended to it. Images "load" when their `src` is in `resolvable`.
pub struct PageSurface {
    container_id: Option<String>,
    resolvable: HashSet<String>,
    figures: RefCell<Vec<Figure>>,
}

pub struct Figure {
    pub descriptor: ImageDescriptor,
    on_error: ImageErrorHook,
}

impl PageSurface {
    pub fn with_container(id: &str) -> Self {
        Self {
            container_id: Some(id.to_owned()),
            resolvable: HashSet::new(),
            figures: RefCell::new(Vec::new()),
        }
    }

    pub fn without_container() -> Self {
        Self {
            container_id: None,
            resolvable: HashSet::new(),
            figures: RefCell::new(Vec::new()),
        }
    }

    pub fn resolvable(mut self, src: &str) -> Self {
        self.resolvable.insert(src.to_owned());
        self
    }

    pub fn descriptors(&self) -> Vec<ImageDescriptor> {
        self.figures
            .borrow()
            .iter()
            .map(|figure| figure.descriptor.clone())
            .collect()
    }

    /// Lets every image finish loading, firing the error hook of each image
    /// whose source does not resolve. Hooks receive the source resolved
    /// against `page`, as the browser reports `img.src`.
    pub fn settle_images(&self, page: &str) {
        let page = reqwest::Url::parse(page).expect("page URL is absolute");
        for figure in self.figures.borrow().iter() {
            let src = figure.descriptor.src.as_deref().unwrap_or_default();
            if self.resolvable.contains(src) {
                continue;
            }
            let requested = page.join(src).expect("image source joins the page URL");
            (figure.on_error)(requested.as_str());
        }
    }
}

impl GallerySurface for PageSurface {
    type Container = String;

    fn find_container(&self, id: &str) -> Option<String> {
        self.container_id.clone().filter(|existing| existing == id)
    }

    fn append_figure(
        &self,
        _container: &String,
        descriptor: &ImageDescriptor,
        on_error: ImageErrorHook,
    ) -> Result<(), GalleryError> {
        self.figures.borrow_mut().push(Figure {
            descriptor: descriptor.clone(),
            on_error,
        });
        Ok(())
    }
}

/// Collects diagnostic entries so tests can count them.
#[derive(Clone, Default)]
pub struct DiagnosticLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl DiagnosticLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl Diagnostics for DiagnosticLog {
    fn report(&self, error: &GalleryError) {
        self.entries.borrow_mut().push(error.to_string());
    }

    fn milestone(&self, _stage: LoadStage, _detail: &str) {}
}

/// Serves `router` on an ephemeral local port and returns the page URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}/index.html")
}

/// An address nothing listens on.
pub fn unreachable_page() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind placeholder listener");
    let addr = listener.local_addr().expect("placeholder listener has no address");
    drop(listener);
    format!("http://{addr}/index.html")
}
