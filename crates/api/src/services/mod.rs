//! Operations that span the database and the object store.
//!
//! Plain row CRUD stays in the handlers; anything that must keep a stored
//! object and its row consistent goes through here.

pub mod gallery;
