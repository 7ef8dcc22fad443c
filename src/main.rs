#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::cors::CorsLayer;
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;
    use vastravaani::app::*;
    use vastravaani::core::config::Config;
    use vastravaani::core::proxy::{ProxyState, api_proxy_router};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(
        "Config loaded: upstream={}, timeout={}s",
        config.upstream_url,
        config.proxy_timeout.as_secs()
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz variants when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let proxy = api_proxy_router(ProxyState::new(&config)?);

    let app = Router::new()
        // Backend API, forwarded as-is
        .merge(proxy)
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        // Brotli first, gzip as the fallback
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    tracing::info!("listening on http://{}", addr);
    tracing::info!("proxying /api/* to {}", config.upstream_url);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
