use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::LogArgs;

/// Install the global subscriber. `RUST_LOG` wins over `--log-filter`.
pub fn init_logger(args: &LogArgs) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    if args.json {
        registry
            .with(fmt::layer().with_target(true).json())
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
