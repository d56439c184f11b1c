//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Plain reads return
//! `sqlx::Error`; writes that apply validation or slug rules return
//! [`StoreError`](crate::StoreError).

pub mod contact_repo;
pub mod page_repo;
pub mod project_repo;
pub mod service_repo;
pub mod ui_block_repo;

pub use contact_repo::ContactRepo;
pub use page_repo::PageRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use ui_block_repo::UiBlockRepo;
