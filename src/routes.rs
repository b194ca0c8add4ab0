// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{self, company, industry, invoice},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the company, invoice and industry groups under their prefixes.
/// * Answers unmatched paths, and known paths hit with an unsupported method,
///   with a JSON 404.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let company_routes = Router::new()
        .route("/", get(company::list_companies).post(company::create_company))
        .route(
            "/{code}",
            get(company::get_company)
                .put(company::update_company)
                .delete(company::delete_company),
        )
        .method_not_allowed_fallback(handlers::not_found);

    let invoice_routes = Router::new()
        .route("/", get(invoice::list_invoices).post(invoice::create_invoice))
        .route(
            "/{id}",
            get(invoice::get_invoice)
                .put(invoice::update_invoice)
                .delete(invoice::delete_invoice),
        )
        .method_not_allowed_fallback(handlers::not_found);

    let industry_routes = Router::new()
        .route("/", get(industry::list_industries).post(industry::create_industry))
        .route("/companies/{comp_code}", post(industry::associate_company))
        .method_not_allowed_fallback(handlers::not_found);

    Router::new()
        .nest("/companies", company_routes)
        .nest("/invoices", invoice_routes)
        .nest("/industries", industry_routes)
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        // Global Middleware (outermost first)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
