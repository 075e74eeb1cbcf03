pub mod batch;
pub mod discover;
pub mod extract;
pub mod session;
pub mod web;

#[cfg(test)]
pub(crate) mod fake;
