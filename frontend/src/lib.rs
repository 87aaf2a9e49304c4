mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use router::{app_root, mount_app};
