pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod repository;
pub mod routes;
pub mod service;
pub mod store;
pub mod web;
