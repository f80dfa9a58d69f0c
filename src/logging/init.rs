use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax (e.g. "info" or
/// "glim=debug"). When unset, `RUST_LOG` applies, then an info-level default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: Option<env_logger::WriteStyle>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are no-ops.
///
/// Hosts that bring their own `log` implementation should simply not call
/// this.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.write_style(config.write_style.unwrap_or(env_logger::WriteStyle::Auto));
        builder.init();

        log::debug!("logging initialized");
    });
}
