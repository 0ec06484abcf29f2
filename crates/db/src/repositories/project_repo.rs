//! Repository for a store's project collection.
//!
//! Every write builds the next collection from the current one and swaps it
//! in whole.

use chrono::Utc;
use galeri_core::catalog::next_id;
use galeri_core::error::CoreError;
use galeri_core::tech_stack::{add_tech, normalize_tech_stack, remove_tech, validate_tech_stack};
use galeri_core::types::DbId;

use crate::models::project::{Project, ProjectForm, PLACEHOLDER_THUMBNAIL};
use crate::Store;

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in list order (newest creations first).
    pub async fn list(store: &Store) -> Vec<Project> {
        store.snapshot().await
    }

    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Project> {
        store.snapshot().await.into_iter().find(|p| p.id == id)
    }

    /// Insert a new project at the front of the list.
    ///
    /// The id is `max(existing) + 1` (1 for an empty store), `created_at` is
    /// today's UTC date and the thumbnail is [`PLACEHOLDER_THUMBNAIL`].
    pub async fn create(store: &Store, input: &ProjectForm) -> Project {
        store
            .replace(|current| {
                let project = Project {
                    id: next_id(current),
                    title: input.title.clone(),
                    description: input.description.clone(),
                    thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
                    category: input.category.clone(),
                    student_name: input.student_name.clone(),
                    student_class: input.student_class.clone(),
                    tech_stack: normalize_tech_stack(&input.tech_stack),
                    demo_url: input.demo_url.clone(),
                    repo_url: input.repo_url.clone(),
                    video_url: None,
                    is_featured: input.is_featured,
                    created_at: Some(Utc::now().date_naive()),
                };
                let mut next = Vec::with_capacity(current.len() + 1);
                next.push(project.clone());
                next.extend_from_slice(current);
                (next, project)
            })
            .await
    }

    /// Merge the form fields into the project with `id`.
    ///
    /// `id`, `thumbnail`, `video_url` and `created_at` are kept. Returns
    /// `None` if no project has that id.
    pub async fn update(store: &Store, id: DbId, input: &ProjectForm) -> Option<Project> {
        Self::map_one(store, id, |p| Project {
            title: input.title.clone(),
            description: input.description.clone(),
            category: input.category.clone(),
            student_name: input.student_name.clone(),
            student_class: input.student_class.clone(),
            tech_stack: normalize_tech_stack(&input.tech_stack),
            demo_url: input.demo_url.clone(),
            repo_url: input.repo_url.clone(),
            is_featured: input.is_featured,
            ..p.clone()
        })
        .await
    }

    /// Flip `is_featured`. Returns `None` if no project has that id.
    pub async fn toggle_featured(store: &Store, id: DbId) -> Option<Project> {
        Self::map_one(store, id, |p| Project {
            is_featured: !p.is_featured,
            ..p.clone()
        })
        .await
    }

    /// Append a tech tag. Blank or duplicate values leave the project as is.
    ///
    /// The tag limits are checked against the stack being written, under the
    /// same lock, so concurrent adds cannot push it past the maximum.
    /// `Ok(None)` if no project has that id.
    pub async fn add_tech(
        store: &Store,
        id: DbId,
        value: &str,
    ) -> Result<Option<Project>, CoreError> {
        let mut rejected = None;
        let updated = store
            .replace_with(|current| {
                let index = current.iter().position(|p| p.id == id)?;
                let mut updated = current[index].clone();
                if add_tech(&mut updated.tech_stack, value) {
                    if let Err(e) = validate_tech_stack(&updated.tech_stack) {
                        rejected = Some(e);
                        return None;
                    }
                }
                let mut next = current.to_vec();
                next[index] = updated.clone();
                Some((next, updated))
            })
            .await;

        match rejected {
            Some(e) => Err(e),
            None => Ok(updated),
        }
    }

    /// Remove a tech tag by exact value. Unknown values leave the project as is.
    pub async fn remove_tech(store: &Store, id: DbId, value: &str) -> Option<Project> {
        Self::map_one(store, id, |p| {
            let mut next = p.clone();
            remove_tech(&mut next.tech_stack, value);
            next
        })
        .await
    }

    /// Remove the project with `id`. Returns `true` if one was removed.
    pub async fn delete(store: &Store, id: DbId) -> bool {
        store
            .replace_with(|current| {
                if !current.iter().any(|p| p.id == id) {
                    return None;
                }
                let next: Vec<Project> = current.iter().filter(|p| p.id != id).cloned().collect();
                Some((next, ()))
            })
            .await
            .is_some()
    }

    /// Replace the project with `id` by `f(project)`, keeping list position.
    async fn map_one(
        store: &Store,
        id: DbId,
        f: impl FnOnce(&Project) -> Project,
    ) -> Option<Project> {
        store
            .replace_with(|current| {
                let index = current.iter().position(|p| p.id == id)?;
                let updated = f(&current[index]);
                let mut next = current.to_vec();
                next[index] = updated.clone();
                Some((next, updated))
            })
            .await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use galeri_core::tech_stack::MAX_TECH_TAGS;

    use super::*;

    fn form(title: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            student_name: "Gilang Ramadhan".to_string(),
            student_class: "XI RPL 1".to_string(),
            tech_stack: vec!["Rust".to_string(), " Axum ".to_string(), "Rust".to_string()],
            ..ProjectForm::default()
        }
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one_and_prepends() {
        let store = Store::seeded_dashboard();
        let created = ProjectRepo::create(&store, &form("Chat Sekolah")).await;

        assert_eq!(created.id, 7);
        assert_eq!(created.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(created.category, "Web");
        assert_eq!(created.tech_stack, vec!["Rust", "Axum"]);
        assert_eq!(created.created_at, Some(Utc::now().date_naive()));

        let list = ProjectRepo::list(&store).await;
        assert_eq!(list.len(), 7);
        assert_eq!(list[0].id, 7);
    }

    #[tokio::test]
    async fn create_in_empty_store_starts_at_one() {
        let store = Store::new(Vec::new(), Vec::new());
        let created = ProjectRepo::create(&store, &form("Pertama")).await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn ids_stay_unique_after_deleting_the_max() {
        let store = Store::seeded_dashboard();
        assert!(ProjectRepo::delete(&store, 6).await);
        let created = ProjectRepo::create(&store, &form("Baru")).await;
        assert_eq!(created.id, 6);
        let ids: Vec<DbId> = ProjectRepo::list(&store).await.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn update_merges_form_and_keeps_identity_fields() {
        let store = Store::seeded_dashboard();
        let original = ProjectRepo::find_by_id(&store, 3).await.unwrap();

        let input = ProjectForm {
            title: "Smart Greenhouse v2".to_string(),
            description: original.description.clone(),
            category: original.category.clone(),
            student_name: original.student_name.clone(),
            student_class: original.student_class.clone(),
            tech_stack: original.tech_stack.clone(),
            demo_url: original.demo_url.clone(),
            repo_url: original.repo_url.clone(),
            is_featured: true,
        };

        let updated = ProjectRepo::update(&store, 3, &input).await.unwrap();
        assert_eq!(updated.title, "Smart Greenhouse v2");
        assert!(updated.is_featured);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.thumbnail, original.thumbnail);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.tech_stack, original.tech_stack);

        // List position is preserved.
        assert_eq!(ProjectRepo::list(&store).await[2].title, "Smart Greenhouse v2");
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = Store::seeded_dashboard();
        assert_matches!(ProjectRepo::update(&store, 99, &form("x")).await, None);
        assert_eq!(store.project_count().await, 6);
    }

    #[tokio::test]
    async fn toggle_featured_flips_only_the_target() {
        let store = Store::seeded_dashboard();
        let toggled = ProjectRepo::toggle_featured(&store, 1).await.unwrap();
        assert!(!toggled.is_featured);

        let list = ProjectRepo::list(&store).await;
        let featured: Vec<DbId> = list.iter().filter(|p| p.is_featured).map(|p| p.id).collect();
        assert_eq!(featured, vec![2, 6]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = Store::seeded_dashboard();
        let before = ProjectRepo::list(&store).await;

        assert!(ProjectRepo::delete(&store, 4).await);
        let after = ProjectRepo::list(&store).await;

        assert_eq!(after.len(), before.len() - 1);
        let expected: Vec<Project> = before.into_iter().filter(|p| p.id != 4).collect();
        assert_eq!(after, expected);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_noop() {
        let store = Store::seeded_dashboard();
        assert!(!ProjectRepo::delete(&store, 42).await);
        assert_eq!(store.project_count().await, 6);
    }

    #[tokio::test]
    async fn tech_tags_add_and_remove() {
        let store = Store::seeded_dashboard();

        let p = ProjectRepo::add_tech(&store, 2, " Supabase ").await.unwrap().unwrap();
        assert_eq!(p.tech_stack, vec!["Flutter", "Firebase", "Dart", "Supabase"]);

        let p = ProjectRepo::add_tech(&store, 2, "Dart").await.unwrap().unwrap();
        assert_eq!(p.tech_stack.len(), 4);

        let p = ProjectRepo::remove_tech(&store, 2, "Firebase").await.unwrap();
        assert_eq!(p.tech_stack, vec!["Flutter", "Dart", "Supabase"]);

        assert_matches!(ProjectRepo::add_tech(&store, 77, "Go").await, Ok(None));
    }

    fn full_form() -> ProjectForm {
        ProjectForm {
            tech_stack: (0..MAX_TECH_TAGS).map(|i| format!("tag-{i}")).collect(),
            ..form("Penuh")
        }
    }

    #[tokio::test]
    async fn add_tech_past_the_limit_is_rejected_and_leaves_stack() {
        let store = Store::seeded_dashboard();
        let created = ProjectRepo::create(&store, &full_form()).await;

        assert_matches!(
            ProjectRepo::add_tech(&store, created.id, "satu lagi").await,
            Err(CoreError::Validation(_))
        );
        // A duplicate is a no-op, not a violation.
        assert_matches!(
            ProjectRepo::add_tech(&store, created.id, "tag-0").await,
            Ok(Some(_))
        );

        let stored = ProjectRepo::find_by_id(&store, created.id).await.unwrap();
        assert_eq!(stored.tech_stack.len(), MAX_TECH_TAGS);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_adds_never_exceed_the_limit() {
        let store = Store::seeded_dashboard();
        let mut input = full_form();
        input.tech_stack.truncate(MAX_TECH_TAGS - 2);
        let project_id = ProjectRepo::create(&store, &input).await.id;

        let tasks: Vec<_> = (0..40)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    ProjectRepo::add_tech(&store, project_id, &format!("baru-{i}")).await
                })
            })
            .collect();

        let mut accepted = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        let stored = ProjectRepo::find_by_id(&store, project_id).await.unwrap();
        assert_eq!(accepted, 2);
        assert_eq!(stored.tech_stack.len(), MAX_TECH_TAGS);
    }

    #[tokio::test]
    async fn stores_do_not_share_collections() {
        let gallery = Store::seeded_gallery();
        let dashboard = Store::seeded_dashboard();
        ProjectRepo::delete(&dashboard, 1).await;
        assert_eq!(gallery.project_count().await, 6);
        assert_eq!(dashboard.project_count().await, 5);
    }
}
