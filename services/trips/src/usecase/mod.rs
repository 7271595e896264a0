pub mod accommodation;
pub mod activity;
pub mod link;
pub mod trip;

#[cfg(test)]
pub(crate) mod fixtures;
