pub mod db;
pub mod session_store;
