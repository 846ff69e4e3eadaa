//! Newsletter subscription collaborator.
//!
//! The footer's signup form talks to a [`MailingList`]. Addresses are
//! validated into an [`EmailAddress`] before anything is dispatched, so a
//! list implementation only ever sees well-formed, lower-cased addresses.
//!
//! Two implementations ship with the crate:
//! - [`InMemoryMailingList`] for tests and throwaway sessions
//! - [`JsonlMailingList`], an append-only JSON-lines file

use std::collections::HashSet;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::NewsletterError;

const MAX_EMAIL_LEN: usize = 254;

/// A syntactically valid, lower-cased email address.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalize a raw address typed by a visitor.
    pub fn parse(raw: &str) -> Result<Self, NewsletterError> {
        let trimmed = raw.trim();
        let invalid = |reason: &str| -> Result<Self, NewsletterError> {
            Err(NewsletterError::InvalidEmail(reason.to_string()))
        };

        if trimmed.is_empty() {
            return invalid("address is empty");
        }
        if trimmed.len() < 3 || trimmed.len() > MAX_EMAIL_LEN {
            return invalid("address length is out of range");
        }
        if trimmed.chars().any(char::is_whitespace) {
            return invalid("address contains whitespace");
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return invalid("missing '@'");
        };
        if domain.contains('@') {
            return invalid("more than one '@'");
        }
        if local.is_empty() {
            return invalid("missing name before '@'");
        }
        if !domain.contains('.') {
            return invalid("domain has no '.'");
        }
        if domain.split('.').any(str::is_empty) {
            return invalid("domain has an empty label");
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EmailAddress {
    type Err = NewsletterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = NewsletterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

/// Result of a successful submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeOutcome {
    /// Address was added to the list
    Subscribed,
    /// Address was already on the list; nothing changed
    AlreadySubscribed,
}

/// An external mailing-list service.
pub trait MailingList: Send + Sync {
    /// Add an address to the list.
    fn submit(&self, email: &EmailAddress) -> Result<SubscribeOutcome, NewsletterError>;

    /// Number of subscribed addresses.
    fn len(&self) -> Result<usize, NewsletterError>;

    fn is_empty(&self) -> Result<bool, NewsletterError> {
        Ok(self.len()? == 0)
    }
}

/// Validate a raw address and submit it to `list`.
pub fn subscribe(list: &dyn MailingList, raw: &str) -> Result<SubscribeOutcome, NewsletterError> {
    let email = EmailAddress::parse(raw)?;
    let outcome = list.submit(&email)?;
    tracing::info!("Newsletter submission for {}: {:?}", email, outcome);
    Ok(outcome)
}

/// Mailing list held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryMailingList {
    subscribers: Mutex<Vec<EmailAddress>>,
}

impl InMemoryMailingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribed addresses in submission order
    pub fn subscribers(&self) -> Vec<EmailAddress> {
        self.subscribers.lock().clone()
    }
}

impl MailingList for InMemoryMailingList {
    fn submit(&self, email: &EmailAddress) -> Result<SubscribeOutcome, NewsletterError> {
        let mut subscribers = self.subscribers.lock();
        if subscribers.contains(email) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }
        subscribers.push(email.clone());
        Ok(SubscribeOutcome::Subscribed)
    }

    fn len(&self) -> Result<usize, NewsletterError> {
        Ok(self.subscribers.lock().len())
    }
}

/// One line of a JSONL mailing list file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub email: EmailAddress,
    pub subscribed_at: DateTime<Utc>,
}

struct JsonlState {
    file: File,
    known: HashSet<EmailAddress>,
}

/// Append-only mailing list stored as JSON lines.
///
/// Existing records are read on open so duplicates are detected across
/// restarts. Blank lines are skipped; a malformed line fails the open.
/// Each record is written with a single unbuffered `write_all`, so a failed
/// submission leaves nothing pending to be written again on retry.
pub struct JsonlMailingList {
    path: PathBuf,
    state: Mutex<JsonlState>,
}

impl JsonlMailingList {
    /// Open (or create) the list at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NewsletterError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let known = if path.exists() {
            read_records(&path)?
                .into_iter()
                .map(|record| record.email)
                .collect()
        } else {
            HashSet::new()
        };

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::debug!("Opened mailing list {:?} ({} subscribers)", path, known.len());

        Ok(Self {
            path,
            state: Mutex::new(JsonlState {
                file,
                known,
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record currently in the file.
    pub fn records(&self) -> Result<Vec<SubscriptionRecord>, NewsletterError> {
        let _state = self.state.lock();
        read_records(&self.path)
    }
}

impl MailingList for JsonlMailingList {
    fn submit(&self, email: &EmailAddress) -> Result<SubscribeOutcome, NewsletterError> {
        let mut state = self.state.lock();
        if state.known.contains(email) {
            return Ok(SubscribeOutcome::AlreadySubscribed);
        }

        let record = SubscriptionRecord {
            email: email.clone(),
            subscribed_at: Utc::now(),
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        state.file.write_all(line.as_bytes())?;
        state.known.insert(email.clone());

        Ok(SubscribeOutcome::Subscribed)
    }

    fn len(&self) -> Result<usize, NewsletterError> {
        Ok(self.state.lock().known.len())
    }
}

fn read_records(path: &Path) -> Result<Vec<SubscriptionRecord>, NewsletterError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_ordinary_addresses() {
        for raw in ["reader@inkfox.com", "a.b+news@mail.example.org", "x@y.io"] {
            assert!(EmailAddress::parse(raw).is_ok(), "rejected {}", raw);
        }
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let email = EmailAddress::parse("  Reader@InkFox.COM ").unwrap();
        assert_eq!(email.as_str(), "reader@inkfox.com");
    }

    #[test]
    fn parse_rejects_malformed_addresses() {
        let bad = [
            "",
            "   ",
            "no-at-sign.com",
            "@inkfox.com",
            "reader@",
            "reader@localhost",
            "reader@inkfox..com",
            "reader@.inkfox.com",
            "reader@inkfox.com.",
            "two@@inkfox.com",
            "a@b@inkfox.com",
            "read er@inkfox.com",
        ];
        for raw in bad {
            assert!(
                matches!(EmailAddress::parse(raw), Err(NewsletterError::InvalidEmail(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn parse_rejects_overlong_address() {
        let raw = format!("{}@inkfox.com", "a".repeat(250));
        assert!(EmailAddress::parse(&raw).is_err());
    }

    #[test]
    fn email_deserialization_validates() {
        let ok: Result<EmailAddress, _> = serde_json::from_str("\"Reader@InkFox.com\"");
        assert_eq!(ok.unwrap().as_str(), "reader@inkfox.com");

        let bad: Result<EmailAddress, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn in_memory_deduplicates() {
        let list = InMemoryMailingList::new();
        assert!(list.is_empty().unwrap());

        assert_eq!(
            subscribe(&list, "reader@inkfox.com").unwrap(),
            SubscribeOutcome::Subscribed
        );
        assert_eq!(
            subscribe(&list, "READER@inkfox.com").unwrap(),
            SubscribeOutcome::AlreadySubscribed
        );
        assert_eq!(list.len().unwrap(), 1);
    }

    #[test]
    fn subscribe_does_not_dispatch_invalid_address() {
        let list = InMemoryMailingList::new();
        assert!(subscribe(&list, "not an email").is_err());
        assert!(list.subscribers().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_leaves_nothing_to_replay() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("list.jsonl");
        let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
        let list = JsonlMailingList {
            path: path.clone(),
            state: Mutex::new(JsonlState {
                file: full,
                known: HashSet::new(),
            }),
        };

        assert!(matches!(
            subscribe(&list, "reader@inkfox.com"),
            Err(NewsletterError::Io(_))
        ));
        assert!(list.is_empty().unwrap());

        list.state.lock().file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .unwrap();
        assert_eq!(
            subscribe(&list, "reader@inkfox.com").unwrap(),
            SubscribeOutcome::Subscribed
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 1);
    }

    #[test]
    fn in_memory_keeps_submission_order() {
        let list = InMemoryMailingList::new();
        subscribe(&list, "b@inkfox.com").unwrap();
        subscribe(&list, "a@inkfox.com").unwrap();
        let emails: Vec<String> = list.subscribers().into_iter().map(String::from).collect();
        assert_eq!(emails, vec!["b@inkfox.com", "a@inkfox.com"]);
    }
}
