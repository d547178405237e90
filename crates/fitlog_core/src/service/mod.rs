//! Use-case services.
//!
//! # Responsibility
//! - Expose one named operation per repository method to presentation
//!   callers.
//! - Hold the business rules that must bind every caller (intensity bounds,
//!   email shape), keeping them below the presentation layer.

pub mod exercise_service;
pub mod sleep_service;
pub mod user_service;
