use std::time::Duration;

use anyhow::bail;

use crate::app::CurrentView;
use crate::event::input::AppEvent;
use crate::notification::{NotificationError, NotificationId};

/// Parse a line typed in command mode into the event it stands for.
///
/// `toast <category> [<lifetime_ms>] <message>` uses `default_lifetime`
/// when no lifetime is given. A lifetime of 0 keeps the toast until it is
/// dismissed. The category is passed on by name and checked when the
/// toast is enqueued.
pub fn parse(line: &str, default_lifetime: Duration) -> Result<AppEvent, anyhow::Error> {
    let mut words = line.split_whitespace();
    let name = match words.next() {
        Some(name) => name,
        None => bail!("empty command"),
    };
    let args: Vec<&str> = words.collect();

    match name {
        "q" | "quit" => Ok(AppEvent::Quit),
        "toast" => parse_toast(&args, default_lifetime),
        "dismiss" => match args.as_slice() {
            [id] => Ok(AppEvent::Dismiss(id.parse::<NotificationId>()?)),
            _ => bail!("usage: dismiss <id>"),
        },
        "clear" => Ok(AppEvent::ClearNotifications),
        "theme" => Ok(AppEvent::NextTheme),
        "sidebar" => Ok(AppEvent::ToggleSidebar),
        "help" => Ok(AppEvent::ChangeView(CurrentView::Help)),
        "home" => Ok(AppEvent::ChangeView(CurrentView::Home)),
        "contact" => Ok(AppEvent::ChangeView(CurrentView::Contact)),
        _ => bail!("unknown command \"{}\"", name),
    }
}

fn parse_toast(args: &[&str], default_lifetime: Duration) -> Result<AppEvent, anyhow::Error> {
    let (category, rest) = match args.split_first() {
        Some((category, rest)) => (category.to_string(), rest),
        None => bail!("usage: toast <category> [<lifetime_ms>] <message>"),
    };

    let (lifetime, message) = match rest.split_first() {
        Some((first, message)) => match parse_lifetime(first)? {
            Some(lifetime) => (lifetime, message),
            None => (default_lifetime, rest),
        },
        None => (default_lifetime, rest),
    };

    if message.is_empty() {
        bail!("usage: toast <category> [<lifetime_ms>] <message>");
    }

    Ok(AppEvent::NotifyNamed {
        message: message.join(" "),
        category,
        lifetime: Some(lifetime),
    })
}

// words that are not numbers belong to the message
fn parse_lifetime(word: &str) -> Result<Option<Duration>, NotificationError> {
    match word.parse::<i64>() {
        Ok(ms) if ms < 0 => Err(NotificationError::InvalidLifetime(word.to_string())),
        Ok(ms) => Ok(Some(Duration::from_millis(ms as u64))),
        Err(_) => Ok(None),
    }
}
