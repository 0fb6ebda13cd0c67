pub mod queue;

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

pub use queue::NotificationQueue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    #[error("invalid notification category \"{0}\" (expected success, error, info or warning)")]
    InvalidCategory(String),
    #[error("invalid notification lifetime \"{0}\"")]
    InvalidLifetime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn new(id: u64) -> Self {
        NotificationId(id)
    }
}

impl Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for NotificationId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        match digits.parse::<u64>() {
            Ok(id) => Ok(NotificationId(id)),
            Err(_) => anyhow::bail!("invalid notification id \"{}\"", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    Error,
    Info,
    Warning,
}

impl Category {
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Success => "✔",
            Category::Error => "✖",
            Category::Info => "ℹ",
            Category::Warning => "⚠",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Info => "info",
            Category::Warning => "warning",
        })
    }
}

impl FromStr for Category {
    type Err = NotificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(Category::Success),
            "error" => Ok(Category::Error),
            "info" => Ok(Category::Info),
            "warning" => Ok(Category::Warning),
            _ => Err(NotificationError::InvalidCategory(s.to_string())),
        }
    }
}

/// A short-lived message shown to the user.
///
/// A notification without a lifetime stays until it is dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub category: Category,
    pub lifetime: Option<Duration>,
    pub created: Instant,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: String,
        category: Category,
        lifetime: Option<Duration>,
    ) -> Self {
        Notification {
            id,
            message,
            category,
            lifetime: lifetime.filter(|l| !l.is_zero()),
            created: Instant::now(),
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.lifetime.is_none()
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.lifetime.map(|l| self.created + l)
    }

    /// Time left before the notification expires, `None` for sticky ones.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at()
            .map(|at| at.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_category() {
        assert_eq!(Ok(Category::Success), "success".parse::<Category>());
        assert_eq!(Ok(Category::Warning), "Warning".parse::<Category>());
        assert_eq!(Ok(Category::Error), "ERROR".parse::<Category>());
        assert_eq!(
            Err(NotificationError::InvalidCategory("debug".to_string())),
            "debug".parse::<Category>()
        );
        assert_eq!(
            Err(NotificationError::InvalidCategory("".to_string())),
            "".parse::<Category>()
        );
    }

    #[test]
    fn test_parse_notification_id() -> Result<(), anyhow::Error> {
        assert_eq!(NotificationId(4), "4".parse::<NotificationId>()?);
        assert_eq!(NotificationId(12), "#12".parse::<NotificationId>()?);
        assert!("four".parse::<NotificationId>().is_err());
        assert_eq!("#7", NotificationId(7).to_string());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_lifetime_is_sticky() {
        let n = Notification::new(
            NotificationId(1),
            "hello".to_string(),
            Category::Info,
            Some(Duration::ZERO),
        );
        assert!(n.is_sticky());
        assert_eq!(None, n.expires_at());
        assert_eq!(None, n.remaining());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remaining_counts_down() {
        let n = Notification::new(
            NotificationId(1),
            "hello".to_string(),
            Category::Info,
            Some(Duration::from_millis(3000)),
        );
        assert_eq!(Some(Duration::from_millis(3000)), n.remaining());
        tokio::time::advance(Duration::from_millis(1000)).await;
        assert_eq!(Some(Duration::from_millis(2000)), n.remaining());
        tokio::time::advance(Duration::from_millis(5000)).await;
        assert_eq!(Some(Duration::ZERO), n.remaining());
    }
}
