pub mod accommodation;
pub mod activity;
pub mod trip;
