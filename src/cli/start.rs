use crate::cli::{actions::Action, commands, commands::logging, dispatch::handler};
use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Start the CLI
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level = match matches
        .get_one::<u8>(logging::ARG_VERBOSITY)
        .map_or(0, |&v| v)
    {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    if matches.get_flag(logging::ARG_LOG_JSON) {
        let fmt_layer = fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_target(false)
            .json();
        let subscriber = Registry::default().with(fmt_layer).with(env_filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_target(false);
        let subscriber = Registry::default().with(fmt_layer).with(env_filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let action = handler(&matches)?;

    Ok(action)
}
