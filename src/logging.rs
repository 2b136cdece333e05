use crate::api::ApiRequest;
use crate::errors::ApiError;
use tracing::error;

/// Diagnostic channel for backend failures. Nothing is shown to the user.
pub fn log_api_failure(request: &ApiRequest, err: &ApiError) {
    error!(
        error = %err,
        method = request.method().as_str(),
        path = %request.path(),
        "error {}",
        request.describe()
    );
}

#[cfg(feature = "native")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
