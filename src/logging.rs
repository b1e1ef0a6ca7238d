use env_logger::Env;

/// Logs at info level under the `SUCCESS` target.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        log::info!(target: "SUCCESS", $($arg)*);
    };
}

/// Installs `env_logger`, honouring `RUST_LOG` and defaulting to warnings only.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
