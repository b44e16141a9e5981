//! Domain primitives shared by every Tailwag crate.
//!
//! Nothing in here performs I/O: the database lives in `tailwag-db` and
//! object storage in `tailwag-storage`.

pub mod error;
pub mod image;
pub mod review;
pub mod roles;
pub mod storage;
pub mod types;
