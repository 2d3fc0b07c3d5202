pub mod analytics;
pub mod handlers;
pub mod scoring;
pub mod store;
pub mod validation;
