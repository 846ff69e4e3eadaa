//! Newsletter Signup Form
//!
//! Email input plus JOIN button. Submissions go to the [`Newsletter`]
//! collaborator found in context; without one, signups report as
//! unavailable and nothing is sent anywhere.

use std::sync::Arc;

use dioxus::prelude::*;
use inkfox_core::{subscribe, MailingList, NewsletterError, SubscribeOutcome};

/// Mailing-list collaborator shared through Dioxus context.
#[derive(Clone)]
pub struct Newsletter(Arc<dyn MailingList>);

impl Newsletter {
    pub fn new(list: impl MailingList + 'static) -> Self {
        Self(Arc::new(list))
    }

    /// Validate and submit a raw address.
    pub fn subscribe(&self, raw: &str) -> Result<SubscribeOutcome, NewsletterError> {
        subscribe(self.0.as_ref(), raw)
    }
}

/// Status line shown under the form after a submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NewsletterStatus {
    #[default]
    Idle,
    Subscribed,
    AlreadySubscribed,
    /// Address rejected before dispatch
    Invalid(String),
    /// No collaborator, or the collaborator failed
    Unavailable,
}

impl NewsletterStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            NewsletterStatus::Idle => None,
            NewsletterStatus::Subscribed => Some("You're on the list.".to_string()),
            NewsletterStatus::AlreadySubscribed => {
                Some("You're already subscribed.".to_string())
            }
            NewsletterStatus::Invalid(reason) => Some(format!("Please check your email: {}", reason)),
            NewsletterStatus::Unavailable => {
                Some("Signups are unavailable right now.".to_string())
            }
        }
    }

    /// Whether the submitted address is now on the list
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            NewsletterStatus::Subscribed | NewsletterStatus::AlreadySubscribed
        )
    }

    pub fn class(&self) -> &'static str {
        if self.is_success() {
            "newsletter-status newsletter-status--ok"
        } else {
            "newsletter-status newsletter-status--error"
        }
    }
}

/// Run one submission against an optional collaborator.
pub fn submit_signup(newsletter: Option<&Newsletter>, raw: &str) -> NewsletterStatus {
    let Some(newsletter) = newsletter else {
        tracing::warn!("Newsletter signup attempted with no mailing list configured");
        return NewsletterStatus::Unavailable;
    };

    match newsletter.subscribe(raw) {
        Ok(SubscribeOutcome::Subscribed) => NewsletterStatus::Subscribed,
        Ok(SubscribeOutcome::AlreadySubscribed) => NewsletterStatus::AlreadySubscribed,
        Err(NewsletterError::InvalidEmail(reason)) => NewsletterStatus::Invalid(reason),
        Err(e) => {
            tracing::warn!("Newsletter signup failed: {}", e);
            NewsletterStatus::Unavailable
        }
    }
}

/// Form state after submitting `typed`: the next input text and status.
///
/// The input is cleared only when the address ends up on the list; any other
/// outcome keeps the text so the visitor can correct it.
pub fn signup_transition(
    newsletter: Option<&Newsletter>,
    typed: &str,
) -> (String, NewsletterStatus) {
    let status = submit_signup(newsletter, typed);
    let email = if status.is_success() {
        String::new()
    } else {
        typed.to_string()
    };
    (email, status)
}

/// Email signup form.
#[component]
pub fn NewsletterForm(placeholder: String, button_label: String) -> Element {
    let newsletter = try_use_context::<Newsletter>();
    let mut email = use_signal(String::new);
    let mut status = use_signal(NewsletterStatus::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let (next_email, next_status) = signup_transition(newsletter.as_ref(), &email());
        email.set(next_email);
        status.set(next_status);
    };

    rsx! {
        form { class: "newsletter-form", onsubmit: onsubmit,
            input {
                class: "newsletter-input",
                r#type: "email",
                name: "email",
                placeholder: "{placeholder}",
                "aria-label": "Email address",
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            button { class: "newsletter-button", r#type: "submit", "{button_label}" }
        }
        NewsletterStatusLine { status: status() }
    }
}

/// Status line under the form; renders nothing while idle.
#[component]
pub fn NewsletterStatusLine(status: NewsletterStatus) -> Element {
    let Some(message) = status.message() else {
        return rsx! {};
    };
    let class = status.class();

    rsx! {
        p { class: "{class}", role: "status", "{message}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkfox_core::InMemoryMailingList;

    #[test]
    fn missing_collaborator_is_unavailable() {
        assert_eq!(
            submit_signup(None, "reader@inkfox.com"),
            NewsletterStatus::Unavailable
        );
    }

    #[test]
    fn statuses_follow_outcomes() {
        let newsletter = Newsletter::new(InMemoryMailingList::new());
        assert_eq!(
            submit_signup(Some(&newsletter), "reader@inkfox.com"),
            NewsletterStatus::Subscribed
        );
        assert_eq!(
            submit_signup(Some(&newsletter), "reader@inkfox.com"),
            NewsletterStatus::AlreadySubscribed
        );
        assert!(matches!(
            submit_signup(Some(&newsletter), "reader"),
            NewsletterStatus::Invalid(_)
        ));
    }

    #[test]
    fn successful_signup_clears_input() {
        let newsletter = Newsletter::new(InMemoryMailingList::new());

        let (email, status) = signup_transition(Some(&newsletter), "reader@inkfox.com");
        assert_eq!(email, "");
        assert_eq!(status, NewsletterStatus::Subscribed);

        let (email, status) = signup_transition(Some(&newsletter), "Reader@InkFox.com");
        assert_eq!(email, "");
        assert_eq!(status, NewsletterStatus::AlreadySubscribed);
    }

    #[test]
    fn failed_signup_keeps_input() {
        let newsletter = Newsletter::new(InMemoryMailingList::new());

        let (email, status) = signup_transition(Some(&newsletter), "reader@inkfox");
        assert_eq!(email, "reader@inkfox");
        assert!(matches!(status, NewsletterStatus::Invalid(_)));

        let (email, status) = signup_transition(None, "reader@inkfox.com");
        assert_eq!(email, "reader@inkfox.com");
        assert_eq!(status, NewsletterStatus::Unavailable);
    }

    #[test]
    fn only_success_uses_ok_class() {
        assert!(NewsletterStatus::Subscribed.class().ends_with("--ok"));
        assert!(NewsletterStatus::AlreadySubscribed.class().ends_with("--ok"));
        assert!(NewsletterStatus::Unavailable.class().ends_with("--error"));
        assert!(NewsletterStatus::Invalid("x".into()).class().ends_with("--error"));
    }

    #[test]
    fn idle_has_no_message() {
        assert_eq!(NewsletterStatus::Idle.message(), None);
        assert!(NewsletterStatus::Invalid("missing '@'".into())
            .message()
            .unwrap()
            .contains("missing '@'"));
    }
}
