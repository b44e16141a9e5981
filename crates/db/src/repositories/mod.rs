//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_repo;
pub mod pet_image_repo;
pub mod pet_repo;
pub mod rate_repo;
pub mod review_repo;

pub use contact_repo::ContactRepo;
pub use pet_image_repo::PetImageRepo;
pub use pet_repo::PetRepo;
pub use rate_repo::RateRepo;
pub use review_repo::ReviewRepo;
