//! Scroll-synchronized animation sequencing for the landing page.
//!
//! Everything except [`dom`] is plain Rust over the [`host`] traits, so the
//! timing and scroll logic runs under `cargo test` without a browser.

pub mod ambient;
pub mod choreography;
pub mod dom;
pub mod easing;
pub mod engine;
pub mod entrance;
pub mod error;
pub mod host;
pub mod observer;
pub mod pinned;
pub mod rotator;
pub mod style;
pub mod trigger;
pub mod tween;

#[cfg(test)]
pub mod testing;

pub use engine::{mount, SequencerGuard};
pub use error::SequencerError;
