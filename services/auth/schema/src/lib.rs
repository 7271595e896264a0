//! sea-orm entity models for the auth service database.

pub mod users;
