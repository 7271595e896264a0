pub mod authenticate;
pub mod password;
pub mod register;
pub mod session;
pub mod settings;
