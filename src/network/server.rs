//! HTTP Server
//!
//! Serves the catalog over `/v1/...` GET routes and syncs it on shutdown.

use std::future::Future;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use super::handlers::dispatch_path;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::protocol::Response;

/// HTTP server for a shared catalog
pub struct Server {
    config: Config,
    catalog: Arc<Catalog>,
}

impl Server {
    /// Create a new server with the given config and catalog
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Self {
        Self { config, catalog }
    }

    /// Bind `listen_addr` and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        self.serve(listener, ctrl_c()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// Once in-flight requests finish, the catalog is synced to its backing
    /// file if `sync_on_shutdown` is set.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router(Arc::clone(&self.catalog)))
            .with_graceful_shutdown(shutdown)
            .await?;

        if self.config.sync_on_shutdown {
            let catalog = Arc::clone(&self.catalog);
            tokio::task::spawn_blocking(move || catalog.sync())
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;
            tracing::info!("Catalog synced ({} books)", self.catalog.len());
        }

        Ok(())
    }

    /// Get the shared catalog
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

/// Route table: path shape → segments → dispatch
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/v1/:op", get(op_only))
        .route("/v1/:op/:id", get(op_with_id))
        .route("/v1/:op/:id/:copies", get(op_with_copies))
        .with_state(catalog)
}

async fn op_only(
    State(catalog): State<Arc<Catalog>>,
    Path(op): Path<String>,
) -> impl IntoResponse {
    into_http(dispatch_path(&catalog, &[op.as_str()]))
}

async fn op_with_id(
    State(catalog): State<Arc<Catalog>>,
    Path((op, id)): Path<(String, String)>,
) -> impl IntoResponse {
    into_http(dispatch_path(&catalog, &[op.as_str(), id.as_str()]))
}

async fn op_with_copies(
    State(catalog): State<Arc<Catalog>>,
    Path((op, id, copies)): Path<(String, String, String)>,
) -> impl IntoResponse {
    into_http(dispatch_path(&catalog, &[op.as_str(), id.as_str(), copies.as_str()]))
}

fn into_http(response: Response) -> axum::response::Response {
    let status =
        StatusCode::from_u16(response.status.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.payload,
    )
        .into_response()
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::warn!("Unable to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
