//! Read access to a store's category list.

use crate::models::category::Category;
use crate::Store;

/// Categories are fixed by the seed; there is no category CRUD.
pub struct CategoryRepo;

impl CategoryRepo {
    /// All categories, sentinel first.
    pub fn list(store: &Store) -> Vec<Category> {
        store.categories().to_vec()
    }

    pub fn find_by_slug<'a>(store: &'a Store, slug: &str) -> Option<&'a Category> {
        store.categories().iter().find(|c| c.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_by_slug_is_exact() {
        let store = Store::seeded_gallery();
        assert_eq!(
            CategoryRepo::find_by_slug(&store, "IoT").map(|c| c.name.as_str()),
            Some("IoT")
        );
        assert!(CategoryRepo::find_by_slug(&store, "iot").is_none());
    }

    #[test]
    fn list_returns_all_categories() {
        let store = Store::seeded_dashboard();
        assert_eq!(CategoryRepo::list(&store).len(), 6);
    }
}
