use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use std::sync::Arc;

use super::dispatch::Dispatcher;
use super::protocol::{
    LoadEntry, LoadResponse, LoadSnapshotResponse, NodesResponse, RouteRequest, RouteResponse,
};
use super::types::DataEndpoint;

pub async fn handle_route(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    Json(req): Json<RouteRequest>,
) -> (StatusCode, Json<RouteResponse>) {
    let partition = dispatcher.partition_of(&req.key);

    match dispatcher.route(&req.key) {
        Ok(route) => (
            StatusCode::OK,
            Json(RouteResponse {
                key: req.key,
                partition,
                node: Some(route.node),
                endpoint: Some(route.endpoint),
                load: Some(route.load),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!("Failed to route '{}': {}", req.key, e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(RouteResponse {
                    key: req.key,
                    partition,
                    node: None,
                    endpoint: None,
                    load: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_get_load(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
    Path(endpoint_str): Path<String>,
) -> (StatusCode, Json<LoadResponse>) {
    let endpoint: DataEndpoint = match endpoint_str.parse() {
        Ok(endpoint) => endpoint,
        Err(e) => {
            tracing::error!("Failed to parse endpoint: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(LoadResponse {
                    endpoint: endpoint_str,
                    load: None,
                }),
            );
        }
    };

    let load = dispatcher.load().get_load(&endpoint);
    (
        StatusCode::OK,
        Json(LoadResponse {
            endpoint: endpoint.to_string(),
            load: Some(load),
        }),
    )
}

pub async fn handle_load_snapshot(
    Extension(dispatcher): Extension<Arc<Dispatcher>>,
) -> Json<LoadSnapshotResponse> {
    let entries = dispatcher
        .load()
        .snapshot()
        .into_iter()
        .map(|(endpoint, load)| LoadEntry { endpoint, load })
        .collect();

    Json(LoadSnapshotResponse { entries })
}

pub async fn handle_nodes(Extension(dispatcher): Extension<Arc<Dispatcher>>) -> Json<NodesResponse> {
    let members = dispatcher.membership().members();
    let alive_count = members.iter().filter(|node| node.is_alive()).count();

    Json(NodesResponse {
        alive_count,
        members,
    })
}
