pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod search;

#[cfg(test)]
pub mod test_utils;
