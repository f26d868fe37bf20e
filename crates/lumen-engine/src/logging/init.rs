use std::sync::Once;

/// Targets that log per-frame chatter at `info`; held at `warn` by default.
const NOISY_TARGETS: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "lumen_engine=debug,wgpu_core=warn") and takes precedence over `RUST_LOG`
/// and `level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Maps a `-v` count to a level: 0 info, 1 debug, 2+ trace.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        Self {
            level,
            ..Self::default()
        }
    }

    /// Filter string used when neither `env_filter` nor `RUST_LOG` is set.
    pub fn default_directives(&self) -> String {
        let mut directives = self.level.to_string().to_lowercase();
        for target in NOISY_TARGETS {
            directives.push_str(&format!(",{target}=warn"));
        }
        directives
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.parse_filters(&config.default_directives());
        }

        builder.write_style(config.write_style);

        if let Err(e) = builder.try_init() {
            eprintln!("logger already installed: {e}");
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LoggingConfig::from_verbosity(0).level, log::LevelFilter::Info);
        assert_eq!(LoggingConfig::from_verbosity(1).level, log::LevelFilter::Debug);
        assert_eq!(LoggingConfig::from_verbosity(7).level, log::LevelFilter::Trace);
    }

    #[test]
    fn default_directives_quiet_wgpu() {
        let d = LoggingConfig::from_verbosity(1).default_directives();
        assert_eq!(d, "debug,wgpu_core=warn,wgpu_hal=warn,naga=warn");
    }
}
