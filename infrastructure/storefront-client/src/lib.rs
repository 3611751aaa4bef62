pub mod cart_store;
pub mod catalog;
pub mod client;
pub mod dto;

#[cfg(test)]
mod test_support;
