use dotenv::dotenv;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber, Layer, Registry};

use crate::app_config::env::env_or_default;
use crate::ENVIRONMENT_LOCAL;

pub async fn setup_logging() -> anyhow::Result<()> {
    dotenv().ok();
    let app_env = env_or_default("APP_ENV", ENVIRONMENT_LOCAL);

    if app_env == ENVIRONMENT_LOCAL {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let info_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "info.log");
        let error_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "error.log");

        let (info_non_blocking, info_guard) = tracing_appender::non_blocking(info_file);
        let (error_non_blocking, error_guard) = tracing_appender::non_blocking(error_file);
        // The guards must outlive the process or buffered lines are lost.
        std::mem::forget(info_guard);
        std::mem::forget(error_guard);

        let subscriber = Registry::default()
            .with(
                fmt::layer()
                    .with_writer(info_non_blocking)
                    .with_filter(EnvFilter::new("info")),
            )
            .with(
                fmt::layer()
                    .with_writer(error_non_blocking)
                    .with_filter(EnvFilter::new("error")),
            );

        tracing::subscriber::set_global_default(subscriber)?;
    }
    Ok(())
}
