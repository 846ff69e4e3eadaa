//! Catalog site components.
//!
//! Data flows one way: [`LandingPage`] hands each section's items to a
//! [`StorySection`], which renders one [`StoryCard`] per item.

mod footer;
mod hero;
mod landing_page;
mod newsletter_form;
mod story_card;
mod story_section;
mod trailing_panel;

pub use footer::{social_glyph, Footer, FooterProps};
pub use hero::{Hero, HeroProps};
pub use landing_page::{LandingPage, LandingPageProps};
pub use newsletter_form::{
    signup_transition, submit_signup, Newsletter, NewsletterForm, NewsletterStatus,
    NewsletterStatusLine, NewsletterStatusLineProps,
};
pub use story_card::{StoryCard, StoryCardProps};
pub use story_section::{StorySection, StorySectionProps};
pub use trailing_panel::TrailingPanel;
