pub mod config;
pub mod feed;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;
