use env_logger::{Builder, Env, Target};

/// Sets up `env_logger` on stderr. `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .target(Target::Stderr)
        .init();
}
