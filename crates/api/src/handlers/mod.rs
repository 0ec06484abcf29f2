pub mod category;
pub mod dashboard;
pub mod gallery;
pub mod project;
