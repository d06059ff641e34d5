//! Mock Data Fixtures
//!
//! Literal datasets consumed by the page views. Nothing here is fetched or
//! computed by a model: spoilage predictions, match scores and analytics are
//! constants standing in for a real inference backend.

pub mod analytics;
pub mod food;
pub mod messages;
pub mod ngos;
pub mod profile;

pub use food::{FoodItem, Impact};
pub use messages::{Message, MessageStatus};
pub use ngos::Ngo;
pub use profile::{FoodType, Profile};
