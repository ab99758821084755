use tracing_subscriber::{fmt, EnvFilter};

/// Routes engine logs through the test harness. Controlled by `RUST_LOG`,
/// quiet by default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn create_player_names(count: usize) -> Vec<String> {
    let mut player_names = Vec::new();
    for i in 0..count {
        player_names.push(format!("Player {}", i + 1));
    }
    player_names
}
