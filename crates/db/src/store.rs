use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::category::Category;
use crate::models::project::Project;
use crate::seed;

/// One view's in-memory collection of projects plus its category list.
///
/// Writes never patch the list in place: they build the next collection from
/// a read of the current one and swap it in whole, under the write lock.
/// Cheap to clone; clones share the same collection.
#[derive(Debug, Clone)]
pub struct Store {
    projects: Arc<RwLock<Vec<Project>>>,
    categories: Arc<[Category]>,
}

impl Store {
    pub fn new(projects: Vec<Project>, categories: Vec<Category>) -> Self {
        Self {
            projects: Arc::new(RwLock::new(projects)),
            categories: categories.into(),
        }
    }

    /// The public gallery's copy of the mock data.
    pub fn seeded_gallery() -> Self {
        Self::new(seed::gallery_projects(), seed::gallery_categories())
    }

    /// The admin dashboard's copy of the mock data.
    pub fn seeded_dashboard() -> Self {
        Self::new(seed::dashboard_projects(), seed::dashboard_categories())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub async fn project_count(&self) -> usize {
        self.projects.read().await.len()
    }

    /// Clone of the current collection, in list order.
    pub(crate) async fn snapshot(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    /// Build the next collection from the current one and swap it in.
    pub(crate) async fn replace<R>(&self, next: impl FnOnce(&[Project]) -> (Vec<Project>, R)) -> R {
        let mut guard = self.projects.write().await;
        let (projects, out) = next(guard.as_slice());
        tracing::debug!(before = guard.len(), after = projects.len(), "Project collection replaced");
        *guard = projects;
        out
    }

    /// Like [`replace`](Self::replace), but `next` may return `None` to
    /// leave the collection untouched.
    pub(crate) async fn replace_with<R>(
        &self,
        next: impl FnOnce(&[Project]) -> Option<(Vec<Project>, R)>,
    ) -> Option<R> {
        let mut guard = self.projects.write().await;
        let (projects, out) = next(guard.as_slice())?;
        tracing::debug!(before = guard.len(), after = projects.len(), "Project collection replaced");
        *guard = projects;
        Some(out)
    }
}
