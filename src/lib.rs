pub mod browser;
pub mod city;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod prompt;
pub mod record;
pub mod reports;
