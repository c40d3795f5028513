use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use facet_cluster::cluster::dispatch::Dispatcher;
use facet_cluster::cluster::handlers::{
    handle_get_load, handle_load_snapshot, handle_nodes, handle_route,
};
use facet_cluster::cluster::load::LoadStatistic;
use facet_cluster::cluster::partitioner::PartitionManager;
use facet_cluster::cluster::protocol::*;
use facet_cluster::config::NodeConfig;
use facet_cluster::facet::builder::FacetVectorBuilder;
use facet_cluster::membership::service::{MembershipView, StaticMembership};
use facet_cluster::morphology::registry::MorphologyRegistry;
use facet_cluster::search::handlers::{handle_rank, handle_similarity, handle_words};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = NodeConfig::from_args(std::env::args().skip(1))?;

    tracing::info!("Starting node on {}", config.bind);
    if config.peers.is_empty() {
        tracing::info!("No peers configured, running as a single node cluster");
    } else {
        tracing::info!("Peers: {:?}", config.peers);
    }

    // 1. Membership:
    let membership = StaticMembership::with_peers(config.local_node(), config.peer_nodes());
    tracing::info!("Node ID: {}", membership.local_node.id);

    // 2. Morphology: warm the analyzer for the default language.
    let analyzer = MorphologyRegistry::global().get_morphology(config.default_language);
    tracing::info!(
        "Default language '{}' served by analyzer '{}'",
        config.default_language,
        analyzer.name()
    );

    // 3. Routing:
    let partitioner = PartitionManager::new(config.num_partitions, config.replication_factor);
    let dispatcher = Dispatcher::new(
        membership.clone(),
        partitioner,
        LoadStatistic::global(),
        config.analytics_port,
    );
    let builder = Arc::new(FacetVectorBuilder::default());

    // 4. HTTP Router:
    let app = Router::new()
        .route("/analytics/similarity", post(handle_similarity))
        .route("/analytics/rank", post(handle_rank))
        .route("/analytics/words", post(handle_words))
        .route(ENDPOINT_ROUTE, post(handle_route))
        .route(ENDPOINT_LOAD, get(handle_load_snapshot))
        .route(ENDPOINT_LOAD_ONE, get(handle_get_load))
        .route(ENDPOINT_NODES, get(handle_nodes))
        .layer(Extension(dispatcher.clone()))
        .layer(Extension(builder));

    // 5. Spawn stats reporter:
    let report_interval = Duration::from_secs(config.report_interval_secs.max(1));
    let stats_dispatcher = dispatcher.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(report_interval);

        loop {
            interval.tick().await;
            let alive = stats_dispatcher.membership().alive_members();
            tracing::info!("Cluster stats: {} alive nodes", alive.len());
            for node in alive {
                tracing::info!("  - {} addresses={:?}", node.id, node.addresses);
            }
            for (endpoint, load) in stats_dispatcher.load().snapshot() {
                tracing::info!("  - {} load={}", endpoint, load);
            }
        }
    });

    // 6. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
