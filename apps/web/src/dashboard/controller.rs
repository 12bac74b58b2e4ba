use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use crate::api_client::AssistantApi;
use crate::dashboard::drag::DragState;
use crate::dashboard::grouping::{group_by_status, StatusColumn};
use crate::models::application::{ApplicationId, Status};

/// What a load puts into the dashboard container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Columns(Vec<StatusColumn>),
    Failed,
}

/// Owns the drag-and-drop slot and turns mutations into reloads.
///
/// Every mutation is followed by a full reload; nothing is updated locally
/// ahead of the server. The drag lock is never held across an `.await`, so
/// concurrent reloads race and the last response to arrive wins the render.
pub struct DashboardController {
    api: Arc<dyn AssistantApi>,
    drag: Mutex<DragState>,
}

impl DashboardController {
    pub fn new(api: Arc<dyn AssistantApi>) -> Self {
        Self {
            api,
            drag: Mutex::new(DragState::Idle),
        }
    }

    /// Fetches all applications and regroups them into status columns.
    pub async fn load(&self) -> DashboardView {
        match self.api.fetch_applications().await {
            Ok(applications) => {
                debug!("Loaded {} applications", applications.len());
                DashboardView::Columns(group_by_status(&applications, &Status::ALL))
            }
            Err(e) => {
                error!("Failed to load dashboard: {e}");
                DashboardView::Failed
            }
        }
    }

    /// Requests a status change, then reloads. Returns `None` when the update
    /// could not be sent; whatever the page shows stays as it is.
    pub async fn mutate_status(
        &self,
        id: ApplicationId,
        status: Status,
    ) -> Option<DashboardView> {
        match self.api.update_status(id, status).await {
            Ok(()) => {
                info!("Application {id} moved to {status}");
                Some(self.load().await)
            }
            Err(e) => {
                warn!("Failed to update status of application {id}: {e}");
                None
            }
        }
    }

    pub fn drag_start(&self, id: ApplicationId) {
        lock(&self.drag).start(id);
        debug!("Drag started for application {id}");
    }

    /// Handles a drop on the `status` column. Without an active drag this is
    /// a no-op and yields `None`.
    pub async fn drop_on(&self, status: Status) -> Option<DashboardView> {
        let change = lock(&self.drag).drop_on(status);
        match change {
            Some(change) => self.mutate_status(change.id, change.status).await,
            None => {
                debug!("Drop on {status} ignored: no drag in progress");
                None
            }
        }
    }

    pub fn drag_state(&self) -> DragState {
        *lock(&self.drag)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::fake::{application, FakeApi};
    use std::sync::atomic::Ordering;

    fn controller(fake: &Arc<FakeApi>) -> DashboardController {
        DashboardController::new(fake.clone())
    }

    fn column_ids(view: &DashboardView, status: Status) -> Vec<i64> {
        match view {
            DashboardView::Columns(columns) => columns
                .iter()
                .find(|c| c.status == status)
                .map(|c| c.applications.iter().map(|a| a.id).collect())
                .unwrap_or_default(),
            other => panic!("expected columns, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_groups_applications() {
        let fake = Arc::new(FakeApi::with_applications(vec![
            application(1, "OpenAI", "Applied"),
            application(2, "Google", "Interview"),
            application(3, "Amazon", "Unknown"),
        ]));
        let ctl = controller(&fake);

        let view = ctl.load().await;

        assert_eq!(column_ids(&view, Status::Applied), vec![1]);
        assert_eq!(column_ids(&view, Status::Interview), vec![2]);
        assert!(column_ids(&view, Status::Rejected).is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_replaces_columns() {
        let fake = Arc::new(FakeApi::with_applications(vec![application(
            1, "OpenAI", "Applied",
        )]));
        let ctl = controller(&fake);
        ctl.load().await;

        fake.fail_fetch.store(true, Ordering::SeqCst);
        let view = ctl.load().await;

        assert_eq!(view, DashboardView::Failed);
        assert_eq!(fake.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_mutate_reloads_after_update() {
        let fake = Arc::new(FakeApi::with_applications(vec![application(
            1, "OpenAI", "Applied",
        )]));
        let ctl = controller(&fake);

        let view = ctl.mutate_status(1, Status::Rejected).await.unwrap();

        assert_eq!(fake.recorded_updates(), vec![(1, Status::Rejected)]);
        assert_eq!(fake.fetch_count(), 1);
        assert_eq!(column_ids(&view, Status::Rejected), vec![1]);
    }

    #[tokio::test]
    async fn test_mutate_of_unknown_id_still_reloads() {
        let fake = Arc::new(FakeApi::with_applications(vec![application(
            1, "OpenAI", "Applied",
        )]));
        let ctl = controller(&fake);

        let view = ctl.mutate_status(42, Status::Interview).await;

        assert_eq!(fake.fetch_count(), 1);
        assert_eq!(column_ids(&view.unwrap(), Status::Applied), vec![1]);
    }

    #[tokio::test]
    async fn test_unsent_update_leaves_view_alone() {
        let fake = Arc::new(FakeApi::with_applications(vec![application(
            1, "OpenAI", "Applied",
        )]));
        fake.fail_update.store(true, Ordering::SeqCst);
        let ctl = controller(&fake);

        let view = ctl.mutate_status(1, Status::Interview).await;

        assert_eq!(view, None);
        assert_eq!(fake.fetch_count(), 0, "no reload after an unsent update");
    }

    #[tokio::test]
    async fn test_drag_then_drop_issues_one_mutation() {
        let fake = Arc::new(FakeApi::with_applications(vec![application(
            2, "Google", "Applied",
        )]));
        let ctl = controller(&fake);

        ctl.drag_start(2);
        assert_eq!(ctl.drag_state(), DragState::Dragging(2));
        let view = ctl.drop_on(Status::Interview).await.unwrap();

        assert_eq!(fake.recorded_updates(), vec![(2, Status::Interview)]);
        assert_eq!(ctl.drag_state(), DragState::Idle);
        assert_eq!(column_ids(&view, Status::Interview), vec![2]);
    }

    #[tokio::test]
    async fn test_drop_without_drag_issues_nothing() {
        let fake = Arc::new(FakeApi::default());
        let ctl = controller(&fake);

        let view = ctl.drop_on(Status::Rejected).await;

        assert_eq!(view, None);
        assert!(fake.recorded_updates().is_empty());
        assert_eq!(fake.fetch_count(), 0);
        assert_eq!(ctl.drag_state(), DragState::Idle);
    }

    #[tokio::test]
    async fn test_drop_resets_drag_even_when_update_fails() {
        let fake = Arc::new(FakeApi::with_applications(vec![application(
            9, "Meta", "Applied",
        )]));
        fake.fail_update.store(true, Ordering::SeqCst);
        let ctl = controller(&fake);

        ctl.drag_start(9);
        assert_eq!(ctl.drop_on(Status::Rejected).await, None);

        assert_eq!(ctl.drag_state(), DragState::Idle);
        assert_eq!(fake.recorded_updates(), vec![(9, Status::Rejected)]);
    }
}
