mod args;
mod config;
mod dirs;
mod logging;

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use app_api::AppContext;
use http_api::HttpState;
use waste_app::{AppConfig, AppPaths, AppState, ensure_app_data_dir};
use waste_core::ReportingOffset;

const STORE_CLOSE_ATTEMPTS: u32 = 20;
const STORE_CLOSE_RETRY: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;
    logging::init(args.log_json);

    let config = config::load_or_create().map_err(io::Error::other)?;
    if config.created {
        tracing::info!(
            path = %config.file.display(),
            port = config.config.port,
            "created default config"
        );
    }

    let data_dir = dirs::resolve_data_dir(
        args.data_dir
            .as_deref()
            .or(config.config.data_dir.as_deref()),
    )
    .map_err(io::Error::other)?;
    tracing::info!(
        data_dir = %data_dir.dir.display(),
        existing = data_dir.matched_existing,
        "using data dir"
    );

    let offset: ReportingOffset = args
        .utc_offset
        .as_deref()
        .unwrap_or(config.config.utc_offset.as_str())
        .parse()?;
    let port = args.port.unwrap_or(config.config.port);

    let paths = AppPaths::new(data_dir.dir);
    ensure_app_data_dir(&paths)?;
    let app_state = AppState::open(AppConfig {
        db_path: paths.db_path,
        reporting_offset: offset,
    })
    .map_err(|err| io::Error::other(format!("failed to initialize database: {}", err)))?;

    let context = AppContext {
        app_state: app_state.clone(),
    };
    let router = http_api::router(HttpState::new(context));

    let (listener, actual_port, used_fallback) = bind_port(port).await?;
    if used_fallback {
        tracing::warn!(
            configured = port,
            actual = actual_port,
            "configured port was unavailable"
        );
    }
    tracing::info!(url = %format!("http://127.0.0.1:{actual_port}"), "waste tracker is running");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_store(app_state).await;
    Ok(())
}

/// Connection tasks can still hold router clones for a moment after the
/// server returns, so closing waits for them to drain.
async fn close_store(mut app_state: AppState) {
    for _ in 0..STORE_CLOSE_ATTEMPTS {
        match app_state.try_close() {
            Ok(Ok(())) => return,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "failed to close waste store");
                return;
            }
            Err(state) => {
                app_state = state;
                tokio::time::sleep(STORE_CLOSE_RETRY).await;
            }
        }
    }
    tracing::warn!("waste store still in use at shutdown");
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown requested");
}
