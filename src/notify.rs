//! Notification collaborator implementations.

use crate::model::OptimizedRoute;
use crate::traits::Notifier;

/// Emits optimization outcomes as tracing events.
///
/// Consumers that want toasts or webhooks implement [`Notifier`]
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn optimization_succeeded(&self, route: &OptimizedRoute) {
        tracing::info!(
            route_id = %route.id,
            score = route.optimization_score,
            miles = route.total_distance,
            "route optimization saved"
        );
    }

    fn optimization_failed(&self, reason: &str) {
        tracing::warn!(%reason, "route optimization failed");
    }
}
