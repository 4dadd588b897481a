mod harness;

use app::{GalleryError, GalleryLoader, ImageDescriptor, LoadStage, ReqwestTransport};
use axum::{Router, http::StatusCode, routing::get};
use harness::{DiagnosticLog, PageSurface, serve, unreachable_page};
use serde_json::json;

fn catalog() -> serde_json::Value {
    json!([
        { "src": "sunrise.png", "alt": "Sunrise over the bay", "caption": "朝" },
        { "src": "noon.png", "alt": "Noon", "caption": "Noon & shadows" },
        { "src": "dusk.png", "alt": "Dusk", "caption": "Dusk" }
    ])
}

fn catalog_router() -> Router {
    Router::new().route("/data.json", get(|| async { axum::Json(catalog()) }))
}

async fn load(
    page: &str,
    surface: PageSurface,
) -> (
    GalleryLoader<ReqwestTransport, PageSurface, DiagnosticLog>,
    Result<usize, GalleryError>,
    DiagnosticLog,
) {
    // Test servers are local; keep any ambient HTTP proxy out of the way.
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build client");
    let transport = ReqwestTransport::with_client(client, page).expect("page URL is absolute");
    let log = DiagnosticLog::default();
    let loader = GalleryLoader::new(transport, surface, log.clone());
    let result = loader.load().await;
    (loader, result, log)
}

#[tokio::test]
async fn renders_served_catalog_in_order() {
    let page = serve(catalog_router()).await;

    let (loader, result, log) = load(&page, PageSurface::with_container("gallery")).await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(
        loader.surface().descriptors(),
        [
            ImageDescriptor::new("sunrise.png", "Sunrise over the bay", "朝"),
            ImageDescriptor::new("noon.png", "Noon", "Noon & shadows"),
            ImageDescriptor::new("dusk.png", "Dusk", "Dusk"),
        ]
    );
    assert!(log.entries().is_empty());
    assert_eq!(loader.stage(), LoadStage::Done);
}

#[tokio::test]
async fn server_error_status_renders_nothing() {
    let router = Router::new().route(
        "/data.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let page = serve(router).await;

    let (loader, result, log) = load(&page, PageSurface::with_container("gallery")).await;

    assert!(matches!(result, Err(GalleryError::Status(500))));
    assert!(loader.surface().descriptors().is_empty());
    assert_eq!(log.entries(), ["network error: HTTP 500"]);
}

#[tokio::test]
async fn absent_catalog_is_a_status_failure() {
    let page = serve(Router::new()).await;

    let (loader, result, log) = load(&page, PageSurface::with_container("gallery")).await;

    assert!(matches!(result, Err(GalleryError::Status(404))));
    assert!(loader.surface().descriptors().is_empty());
    assert_eq!(log.entries().len(), 1);
}

#[tokio::test]
async fn invalid_json_renders_nothing() {
    let router = Router::new().route("/data.json", get(|| async { "[{\"src\": " }));
    let page = serve(router).await;

    let (loader, result, log) = load(&page, PageSurface::with_container("gallery")).await;

    assert!(matches!(result, Err(GalleryError::Parse(_))));
    assert!(loader.surface().descriptors().is_empty());
    assert_eq!(log.entries().len(), 1);
}

#[tokio::test]
async fn missing_container_does_not_escape() {
    let page = serve(catalog_router()).await;

    let (loader, result, log) = load(&page, PageSurface::without_container()).await;

    assert!(matches!(result, Err(GalleryError::MissingContainer(_))));
    assert!(loader.surface().descriptors().is_empty());
    assert_eq!(log.entries(), ["#gallery element not found"]);
}

#[tokio::test]
async fn broken_image_does_not_affect_siblings() {
    let router = Router::new().route(
        "/data.json",
        get(|| async {
            axum::Json(json!([
                { "src": "here.png", "alt": "here", "caption": "here" },
                { "src": "nowhere.png", "alt": "nowhere", "caption": "nowhere" }
            ]))
        }),
    );
    let page = serve(router).await;
    let surface = PageSurface::with_container("gallery").resolvable("here.png");

    let (loader, result, log) = load(&page, surface).await;
    assert_eq!(result.unwrap(), 2);

    loader.surface().settle_images(&page);

    assert_eq!(loader.surface().descriptors().len(), 2);
    let nowhere = page.replace("index.html", "nowhere.png");
    assert_eq!(log.entries(), [format!("failed to load image: {nowhere}")]);
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
    let page = unreachable_page();

    let (loader, result, log) = load(&page, PageSurface::with_container("gallery")).await;

    assert!(matches!(result, Err(GalleryError::Network(_))));
    assert!(loader.surface().descriptors().is_empty());
    assert_eq!(log.entries().len(), 1);
    assert_eq!(loader.stage(), LoadStage::Failed);
}
