use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use server::ConfigSource;
use tracing::{error, info, warn};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, CONFIG_PATH and friends are visible
    dotenv().ok();

    let loaded = server::load_config();
    let format = match &loaded {
        Ok((cfg, _)) => cfg.logging.format.parse::<LogFormat>(),
        Err(_) => Ok(LogFormat::default()),
    };
    init_logging(format.clone().unwrap_or_default());
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
    if let Err(e) = format {
        warn!(service = "server", event = "log_format_fallback", error = %e, "falling back to compact logs");
    }

    let cfg = match loaded {
        Ok((cfg, ConfigSource::File(path))) => {
            info!(service = "server", event = "config_loaded", %path, "configuration loaded from file");
            cfg
        }
        Ok((cfg, ConfigSource::Environment(path))) => {
            warn!(service = "server", event = "config_from_env", %path, "config file not found, using environment variables");
            cfg
        }
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = ?e, "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "space catalog starting"
    );

    // server::run stops on its own after Ctrl+C once in-flight requests finish
    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
