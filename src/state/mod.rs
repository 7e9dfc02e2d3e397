//! Pure UI state machines.
//!
//! Everything in here is plain Rust with no `web_sys` dependency, so the
//! transition rules (exclusivity, clamping, idempotence) can be unit tested
//! on the host. Components in `crate::components` own instances of these and
//! synchronize the DOM to them on every render.

pub mod carousel;
pub mod faq;
pub mod filter;
pub mod form;
pub mod modal;
pub mod pricing;
pub mod reveal;
pub mod scroll_lock;
pub mod theme;
pub mod toast;
