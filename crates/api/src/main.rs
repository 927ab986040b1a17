use catalog_infra::ProductBackend;

#[tokio::main]
async fn main() {
    catalog_observability::init();

    let gateway_key = std::env::var("GATEWAY_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("GATEWAY_API_KEY not set; using insecure dev default");
        "dev-gateway".to_string()
    });

    let backend = match ProductBackend::from_env().await {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialise the product store backend");
            std::process::exit(1);
        }
    };

    let app = catalog_api::app::build_app(backend, gateway_key);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
