//! InkFox UI Components
//!
//! Dioxus components for the InkFox catalog site, plus the stylesheet and a
//! static HTML export built on `dioxus-ssr`.
//!
//! ## Layout
//!
//! - [`StoryCard`]: one promotional item
//! - [`StorySection`]: anchored header and card grid with an optional
//!   trailing panel
//! - [`Hero`] and [`Footer`]: static page shells
//! - [`LandingPage`]: the composed page
//!
//! All components are pure functions of their props except the footer's
//! [`NewsletterForm`], which keeps the typed address and last status.

pub mod components;
pub mod export;
pub mod theme;

pub use components::*;
pub use export::{render_document, render_page};
