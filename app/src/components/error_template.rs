//! Error page rendered for unknown routes. On the server it also sets the
//! response status.

use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
        }
    }
}

/// Renders the errors held in `outside_errors` (server) or `errors` (client).
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors
        .map(RwSignal::new)
        .or(errors)
        .map(|errors| {
            errors
                .get_untracked()
                .into_iter()
                .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            if let Ok(status) = axum::http::StatusCode::from_u16(first.status_code()) {
                response.set_status(status);
            }
        }
    }

    div().class("error-page").child((
        h1().child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| p().child(format!("{}| {error}", error.status_code())))
            .collect_view(),
        A(AProps::builder()
            .href("/")
            .children(ToChildren::to_children(|| "Back to the gallery"))
            .build()),
    ))
}
