//! WasteWise
//!
//! AI-assisted food waste tracking built with Leptos (WASM).
//!
//! # Features
//!
//! - Surplus food logging with spoilage-relevant details
//! - Waste analytics dashboard
//! - AI spoilage predictions and NGO matching
//! - Pickup message drafting for NGOs
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is served from in-memory fixtures; there is no
//! backend and nothing persists across a reload.

use leptos::*;

mod app;
mod components;
mod fixtures;
mod pages;
mod timers;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
