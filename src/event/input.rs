use std::{thread, time::Duration};

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::Sender;

use crate::app::CurrentView;
use crate::notification::{Category, NotificationId};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Quit,
    Startup,
    ExecCommand(String),
    Notify {
        message: String,
        category: Category,
        lifetime: Option<Duration>,
    },
    NotifyNamed {
        message: String,
        category: String,
        lifetime: Option<Duration>,
    },
    Dismiss(NotificationId),
    DismissSelected,
    NotificationExpired(NotificationId),
    ClearNotifications,
    SelectNext,
    SelectPrevious,
    ChangeView(CurrentView),
    NextTheme,
    ToggleSidebar,
    ContactSubmit,
}

pub type EventSender = Sender<AppEvent>;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn start(event_sender: EventSender) {
    thread::spawn(move || {
        if event_sender.blocking_send(AppEvent::Startup).is_err() {
            return;
        }
        loop {
            let ready = match poll(TICK_RATE) {
                Ok(ready) => ready,
                Err(e) => {
                    log::error!("could not poll terminal events: {}", e);
                    return;
                }
            };

            // no input, tick so that toast countdowns are redrawn
            if !ready {
                if event_sender.blocking_send(AppEvent::Tick).is_err() {
                    return;
                }
                continue;
            }

            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("could not read terminal event: {}", e);
                    return;
                }
            };

            // handle global keys
            let action: Option<AppEvent> = match key.modifiers {
                KeyModifiers::CONTROL => match key.code {
                    KeyCode::Char('c') => Some(AppEvent::Quit),
                    _ => None,
                },
                _ => None,
            };

            let sent = match action {
                Some(a) => event_sender.blocking_send(a),
                None => event_sender.blocking_send(AppEvent::Input(key)),
            };

            // the receiving event loop has gone away
            if sent.is_err() {
                return;
            }
        }
    });
}
