use std::sync::Once;

use env_logger::{Builder, WriteStyle};

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "easel_ui=debug"). When unset, the `RUST_LOG` environment variable is
/// consulted before falling back to info level.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Intended usage is early in
/// `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = Builder::new();
        builder.write_style(config.write_style);

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());
        match filter {
            Some(spec) => {
                builder.parse_filters(&spec);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.init();
        log::debug!("logger ready");
    });
}
