use tracing::Level;

/// Install the stderr subscriber for the binary.
pub fn init_tracing(verbose: bool, json: bool) -> color_eyre::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| color_eyre::eyre::eyre!("failed to set tracing subscriber: {e}"))
}
