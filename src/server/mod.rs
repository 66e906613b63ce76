use crate::core::view::{DirectoryView, LocationFilter, SpecializationFilter};
use crate::core::{ConfigProvider, SheetSource};
use crate::render::html;
use crate::utils::error::Result;
use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use std::sync::Arc;

pub struct AppState {
    pub sheet: Arc<dyn SheetSource>,
}

impl AppState {
    pub fn new(sheet: Arc<dyn SheetSource>) -> Self {
        Self { sheet }
    }
}

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default = "default_facet")]
    pub location: String,
    #[serde(default = "default_facet")]
    pub specialization: String,
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_facet() -> String {
    "all".to_string()
}

fn default_page() -> usize {
    1
}

/// Sheet proxy: the published CSV re-fetched and re-parsed on every call.
/// Any failure collapses to one fixed payload and a single log line.
#[get("/api/sheets")]
pub async fn sheets(data: web::Data<AppState>) -> impl Responder {
    match data.sheet.fetch_records().await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(err) => {
            tracing::error!("Error fetching sheet data: {}", err);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to fetch data" }))
        }
    }
}

/// Directory page. Filter and page state live in the query string; the
/// view itself goes through its load transition on every render.
#[get("/")]
pub async fn index(data: web::Data<AppState>, query: web::Query<DirectoryQuery>) -> impl Responder {
    let mut view = DirectoryView::new();
    view.load(data.sheet.as_ref()).await;

    view.set_location(LocationFilter::from_param(&query.location));
    view.set_specialization(SpecializationFilter::from_param(&query.specialization));
    view.current_page = query.page;

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::render_page(&view))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sheets).service(index);
}

pub async fn run<C: ConfigProvider>(config: &C, sheet: Arc<dyn SheetSource>) -> Result<()> {
    let state = web::Data::new(AppState::new(sheet));

    tracing::info!(
        "Directory listening on http://{}:{}",
        config.host(),
        config.port()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .configure(configure)
    })
    .bind((config.host(), config.port()))?
    .run()
    .await?;

    Ok(())
}
