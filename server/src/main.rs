mod config;
mod utils;

use app::{component, shell, types::AppState};
use axum::{Router, routing::get};
use config::ServerConfig;
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::trace::TraceLayer;
use utils::{catalog_handler, health_handler, load_catalog};

#[tokio::main]
async fn main() {
    let tracing_level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level)
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(component);

    let server_config = ServerConfig::from_env();
    let catalog = match load_catalog(&server_config) {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::error!("Failed to build gallery catalog: {}", err);
            return;
        }
    };
    let serves_catalog = catalog.is_some();

    let app_state = AppState {
        leptos_options: std::sync::Arc::new(leptos_options.clone()),
        catalog,
    };

    let mut app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler));
    // Without a generated catalog, data.json is a static file in the site root.
    if serves_catalog {
        app = app.route("/data.json", get(catalog_handler));
    }
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(
            CompressionLayer::new()
                .compress_when(NotForContentType::new("image/png").and(SizeAbove::new(1024))),
        )
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service()).await;
    match serve_result {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
        }
    }
}

