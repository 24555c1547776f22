pub mod check;
pub mod query_loader;
pub mod tree;

#[cfg(test)]
mod check_tests;
#[cfg(test)]
mod query_loader_tests;
