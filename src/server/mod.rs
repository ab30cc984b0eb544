mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get},
    Router,
};

use crate::api::{DynAPI, API};
use crate::server::handlers::{establishments, search, stats};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/hotels",
            get(establishments::list_hotels).post(establishments::create_hotel),
        )
        .route(
            "/restaurants",
            get(establishments::list_restaurants).post(establishments::create_restaurant),
        )
        .route("/nearby", get(search::nearby))
        .route("/stats", get(stats::show))
        .route("/:category/:name", delete(establishments::remove))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

async fn root() -> &'static str {
    "gastromap establishment service"
}
