use tracing_subscriber::{fmt, EnvFilter};

/// ログ出力を初期化（--verbose または RUST_LOG 指定時のみ）
pub fn init(verbose: bool) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if verbose => EnvFilter::new("flash_report_urdu=debug,flash_report_common=debug,info"),
        Err(_) => return,
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
