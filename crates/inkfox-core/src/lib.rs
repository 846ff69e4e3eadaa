//! InkFox Core Library
//!
//! Content model and edge collaborators for the InkFox catalog site.
//!
//! ## Overview
//!
//! The landing page is described entirely by a [`Site`]: a hero banner, an
//! ordered list of [`Section`]s of [`PromoItem`]s, and a footer. Sites are
//! plain data. They are built in ([`Site::builtin`]) or loaded from JSON
//! ([`Site::load`]), validated once, and handed to the renderer.
//!
//! The newsletter signup is the only outward-facing operation. It is modelled
//! as the [`MailingList`] trait so the UI never decides where addresses go.
//!
//! ## Quick Start
//!
//! ```
//! use inkfox_core::{subscribe, InMemoryMailingList, Site, SubscribeOutcome};
//!
//! let site = Site::builtin();
//! assert_eq!(site.sections[0].id, "books");
//!
//! let list = InMemoryMailingList::new();
//! let outcome = subscribe(&list, "reader@inkfox.com").unwrap();
//! assert_eq!(outcome, SubscribeOutcome::Subscribed);
//! ```

pub mod catalog;
pub mod error;
pub mod newsletter;
pub mod site;

// Re-exports
pub use catalog::{GridLayout, PromoItem, Section, SectionTrailer};
pub use error::{NewsletterError, SiteError, SiteResult};
pub use newsletter::{
    subscribe, EmailAddress, InMemoryMailingList, JsonlMailingList, MailingList,
    SubscribeOutcome, SubscriptionRecord,
};
pub use site::{anchor_for, FooterConfig, HeroConfig, Link, Site, SocialLink, SocialNetwork};
