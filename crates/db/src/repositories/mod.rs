//! Repositories over the in-memory [`Store`](crate::Store).

mod category_repo;
mod project_repo;

pub use category_repo::CategoryRepo;
pub use project_repo::ProjectRepo;
