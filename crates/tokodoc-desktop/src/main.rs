//! tokodoc Desktop Application
//!
//! Branch-scoped document management for retail store records.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tokodoc=debug".parse().expect("valid directive")),
        )
        .init();

    tracing::info!("Starting tokodoc...");

    // Failure to bring up the UI shell is the one fatal condition.
    dioxus::launch(app::App);
}
