// Main lib.rs file that exports our modules
pub mod client;
pub mod config;
pub mod directories;
pub mod links;
pub mod session;

// Re-export commonly used items for convenience
pub use config::Config;
