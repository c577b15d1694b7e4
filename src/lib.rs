pub mod authentication;
pub mod backend_client;
pub mod configuration;
pub mod content_store;
pub mod domain;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod telemetry;
