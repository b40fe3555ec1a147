//! # GlucoVision
//!
//! Browser dashboard for daily meal analysis and weekly glycaemic trends,
//! built with Leptos (client-side rendered WASM).
//!
//! ## Features
//!
//! - **Meal analysis**: four free-text meals are sent to the backend and the
//!   nutrient totals, risk level and suggestions are rendered in place
//! - **Weekly charts**: sugar, carbs, fiber and risk distribution drawn with
//!   Chart.js, rebuilt after every analysis
//! - **Settings**: name, sugar limit and report preferences
//! - **Onboarding**: a first-run modal when the backend has no profile yet
//!
//! ## Modules
//!
//! - [`api`]: DTOs and the HTTP backend client
//! - [`actions`]: the user flows, independent of the DOM
//! - [`charts`]: chart configs and the Chart.js surface
//! - [`components`] / [`pages`]: the Leptos view tree
//! - [`state`]: global signals and the host-page contract
//! - [`config`] / [`logging`]: client configuration and console logging

pub mod actions;
pub mod api;
pub mod app;
pub mod charts;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod state;

pub use config::UiConfig;
