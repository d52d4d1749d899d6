//! Collaborator seams for the route planner.
//!
//! These are intentionally minimal. The planner core is pure computation;
//! everything with an outside (storage, notification, stop ordering) sits
//! behind one of these traits so concrete backends can be swapped.

use crate::error::StoreError;
use crate::model::{JobSite, OptimizedRoute};

/// Persistence collaborator for optimized routes.
///
/// Insert has at-least-once semantics; list must reflect the caller's own
/// prior inserts (read-your-writes within a session).
pub trait RouteStore {
    fn insert(&mut self, route: &OptimizedRoute) -> Result<(), StoreError>;

    fn list_all(&self) -> Result<Vec<OptimizedRoute>, StoreError>;

    fn delete_by_id(&mut self, id: &str) -> Result<(), StoreError>;
}

/// Best-effort success/failure signal consumed by the UI.
///
/// Not required for correctness; implementations must not fail.
pub trait Notifier {
    fn optimization_succeeded(&self, route: &OptimizedRoute);

    fn optimization_failed(&self, reason: &str);
}

/// Stop ordering strategy.
///
/// Decides the visiting sequence for the selected job sites. The shipped
/// implementation preserves input order; a real solver (nearest-neighbor,
/// 2-opt) can replace it without touching the scorer or assembler.
pub trait StopOrder {
    fn order<'a>(&self, sites: &'a [JobSite]) -> Vec<&'a JobSite>;
}
