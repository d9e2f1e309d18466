//! Clinic - Dioxus web frontend for a doctor appointment-booking site
//!
//! The UI reads a bundled doctor roster and talks to three backend
//! collaborators over HTTP: the newsletter endpoint, the appointments
//! endpoint and the auth session service.

#![allow(non_snake_case)]

pub mod api;
pub mod app;
pub mod auth;
pub mod catalog;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod state;
pub mod types;
