use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Hosts that already installed a subscriber keep theirs.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,typescale=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if let Err(err) = result {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
        tracing::info!("logging initialized");
    }
}
