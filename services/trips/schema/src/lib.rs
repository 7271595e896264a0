//! sea-orm entity models for the trips service database.

pub mod accommodations;
pub mod activities;
pub mod trip_accommodations;
pub mod trip_activities;
pub mod trips;
