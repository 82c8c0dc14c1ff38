//! Game selection and routing.
//!
//! The hub mounts at most one game at a time. Selecting a game tears the
//! previous one down first, so the old game's frame task and input
//! subscriptions are gone before the new one initializes.

mod controller;

pub use controller::Hub;
