pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod respond;
pub mod routes;
pub mod services;
pub mod state;
