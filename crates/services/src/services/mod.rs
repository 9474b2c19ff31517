pub mod app;
pub mod follow;
pub mod follow_config;
pub mod graphql;
pub mod store;
pub mod view;
