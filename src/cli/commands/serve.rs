//! The serve command: resolve the bundle once, then serve forever.

use crate::cli::logging::{emit, LogLevel};
use crate::cli::ServeArgs;
use crate::provider;
use crate::server::{PredictServer, ServerConfig};
use crate::Result;

pub fn run_serve(args: ServeArgs, level: LogLevel) -> Result<()> {
    // Fatal if neither loading nor training succeeds; nothing is served
    // on a partially-initialized model.
    let bundle = provider::resolve_bundle(&args.model)?;
    emit(
        level,
        LogLevel::Normal,
        &format!("Model ready; classes: {}", bundle.labels().join(", ")),
    );
    emit(level, LogLevel::Verbose, &format!("Artifact path: {}", args.model.display()));

    let mut config = ServerConfig::default().with_address(args.addr);
    if args.no_cors {
        config = config.without_cors();
    }
    emit(level, LogLevel::Normal, &format!("Listening on http://{}", args.addr));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(PredictServer::new(config, bundle).run())
}
