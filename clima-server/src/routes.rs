//! HTTP surface: the two JSON endpoints, the index page and static files.

use std::{collections::HashMap, convert::Infallible, path::PathBuf, sync::Arc};

use clima_core::{Aggregator, ServerConfig};
use warp::{
    Filter, Rejection, Reply,
    http::StatusCode,
    reply::{self, Response},
};

type Params = HashMap<String, String>;

/// Build the full route table.
pub fn router(
    aggregator: Arc<Aggregator>,
    server: ServerConfig,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static {
    let api = api(aggregator);

    // Misses under /static/ stay 404 instead of falling through to the index.
    let static_files = warp::path("static").and(
        warp::fs::dir(server.static_dir)
            .map(|file: warp::fs::File| file.into_response())
            .or(warp::any().map(|| StatusCode::NOT_FOUND.into_response()))
            .unify(),
    );

    // Catch-all: any GET no other route claimed gets the index page.
    let index_path = server.index_path;
    let index = warp::get()
        .and(warp::any().map(move || index_path.clone()))
        .and_then(index_page);

    api.or(static_files).or(index).with(warp::log("clima_server::http"))
}

/// `/api/cidade` and `/api/clima`.
pub fn api(
    aggregator: Arc<Aggregator>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone + Send + Sync + 'static {
    let city = warp::get()
        .and(warp::path!("api" / "cidade"))
        .and(warp::query::<Params>())
        .and(with_aggregator(aggregator.clone()))
        .and_then(city_handler);

    let conditions = warp::get()
        .and(warp::path!("api" / "clima"))
        .and(warp::query::<Params>())
        .and(with_aggregator(aggregator))
        .and_then(conditions_handler);

    city.or(conditions)
}

fn with_aggregator(
    aggregator: Arc<Aggregator>,
) -> impl Filter<Extract = (Arc<Aggregator>,), Error = Infallible> + Clone {
    warp::any().map(move || aggregator.clone())
}

async fn city_handler(params: Params, aggregator: Arc<Aggregator>) -> Result<Response, Infallible> {
    let name = params.get("nome").map(String::as_str).unwrap_or_default();

    match aggregator.resolve_city(name).await {
        Ok(city) => Ok(reply::json(&city).into_response()),
        Err(e) => {
            tracing::info!("City lookup failed: {}", e);
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Ok(reply::with_status(e.user_message(), status).into_response())
        }
    }
}

async fn conditions_handler(params: Params, aggregator: Arc<Aggregator>) -> Result<Response, Infallible> {
    let lat = params.get("lat").map(String::as_str).unwrap_or_default();
    let lon = params.get("lon").map(String::as_str).unwrap_or_default();

    let report = aggregator.conditions(lat, lon).await;
    Ok(reply::json(&report).into_response())
}

/// Read per request so edits show up without a restart.
async fn index_page(path: PathBuf) -> Result<Response, Infallible> {
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(reply::html(html).into_response()),
        Err(e) => {
            tracing::error!("Failed to read index page {}: {}", path.display(), e);
            Ok(reply::with_status(
                format!("Erro no HTML: {e}"),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response())
        }
    }
}
