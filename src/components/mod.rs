//! UI Components
//!
//! Reusable Leptos components shared by the page views.

pub mod chart;
pub mod factors;
pub mod footer;
pub mod loading;
pub mod nav;
pub mod score_ring;

pub use chart::{BarChart, LineChart, PieChart};
pub use factors::FactorList;
pub use footer::Footer;
pub use loading::PageLoading;
pub use nav::Nav;
pub use score_ring::ScoreRing;
