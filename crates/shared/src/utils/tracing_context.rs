use tokio::time::Instant;
use tracing::{Span, error, info, info_span};

use crate::utils::{Method, Metrics, Status};

/// One traced service operation: a span plus its start time, closed exactly once through
/// [`TracingContext::complete`], which also records the outcome in the service metrics.
#[derive(Debug)]
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(component: &'static str, operation: &str) -> Self {
        let start_time = Instant::now();
        let span = info_span!("operation", component, operation = %operation);

        span.in_scope(|| info!("Starting operation: {operation}"));

        Self { span, start_time }
    }

    pub fn complete(self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = self.start_time.elapsed().as_secs_f64();

        self.span.in_scope(|| {
            if is_success {
                info!(duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            } else {
                error!(duration_secs = elapsed, "❌ Operation failed: {message}");
            }
        });

        metrics.record(method, status, elapsed);
    }
}
