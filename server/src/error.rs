//! Startup and serving failures for the SSR host.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment value could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),

    /// Leptos options could not be loaded (missing or malformed
    /// `[[workspace.metadata.leptos]]` / `LEPTOS_*` environment).
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
