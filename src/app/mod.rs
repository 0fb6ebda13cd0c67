use std::{fmt::Display, io};

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{Receiver, Sender};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    command,
    config::Config,
    event::input::AppEvent,
    notification::{Notification, NotificationId, NotificationQueue},
    theme::{Scheme, Theme},
    ui::render,
    view::{contact::ContactState, contact::ContactView, help::HelpView, home::HomeView, View},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentView {
    Home,
    Contact,
    Help,
}

impl CurrentView {
    pub const ALL: [CurrentView; 3] = [CurrentView::Home, CurrentView::Contact, CurrentView::Help];
}

impl Display for CurrentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CurrentView::Home => "Home",
            CurrentView::Contact => "Contact",
            CurrentView::Help => "Help",
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Command,
}

impl Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub struct App {
    pub config: Config,
    pub notifications: NotificationQueue,
    pub selected: Option<NotificationId>,
    pub view_current: CurrentView,
    pub input_mode: InputMode,
    pub command_input: Input,
    pub contact: ContactState,
    pub theme: Theme,
    pub sidebar: bool,
    receiver: Receiver<AppEvent>,
    sender: Sender<AppEvent>,
    quit: bool,
}

impl App {
    pub fn new(config: Config, receiver: Receiver<AppEvent>, sender: Sender<AppEvent>) -> App {
        App {
            notifications: NotificationQueue::new(sender.clone()),
            selected: None,
            view_current: CurrentView::Home,
            input_mode: InputMode::Normal,
            command_input: Input::default(),
            contact: ContactState::default(),
            theme: config.theme,
            sidebar: config.sidebar,
            config,
            receiver,
            sender,
            quit: false,
        }
    }

    pub fn theme(&self) -> Scheme {
        self.theme.scheme()
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.selected.and_then(|id| self.notifications.get(id))
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected.and_then(|id| self.notifications.position(id))
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), anyhow::Error> {
        loop {
            let event = match self.receiver.recv().await {
                Some(event) => event,
                None => return Ok(()),
            };

            self.handle_event(event).await?;

            if self.quit {
                return Ok(());
            }

            terminal.autoresize()?;
            terminal.draw(|frame| {
                render(self, frame);
            })?;
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent) -> Result<(), anyhow::Error> {
        match event {
            AppEvent::Quit => self.quit = true,
            AppEvent::Startup | AppEvent::Tick => (),
            AppEvent::Input(key) => self.handle_input(key).await?,
            AppEvent::ExecCommand(ref line) => {
                match command::parse(line, self.config.toast_lifetime) {
                    Ok(event) => self.sender.send(event).await?,
                    Err(e) => self.report_error(e),
                }
            }
            AppEvent::Notify {
                message,
                category,
                lifetime,
            } => {
                self.notifications.enqueue(message, category, lifetime);
            }
            AppEvent::NotifyNamed {
                message,
                category,
                lifetime,
            } => {
                if let Err(e) = self.notifications.enqueue_named(message, &category, lifetime) {
                    self.report_error(e.into());
                }
            }
            AppEvent::Dismiss(id) => self.dismiss(id),
            AppEvent::NotificationExpired(id) => self.dismiss(id),
            AppEvent::DismissSelected => {
                if let Some(id) = self.selected_notification().map(|n| n.id) {
                    self.dismiss(id);
                }
            }
            AppEvent::ClearNotifications => {
                self.notifications.clear();
                self.selected = None;
            }
            AppEvent::SelectNext => {
                let position = match self.selected_position() {
                    Some(position) => position + 1,
                    None => 0,
                };
                self.select_at(position);
            }
            AppEvent::SelectPrevious => {
                let position = match self.selected_position() {
                    Some(position) => position.saturating_sub(1),
                    None => self.notifications.len().saturating_sub(1),
                };
                self.select_at(position);
            }
            AppEvent::ChangeView(view) => self.view_current = view,
            AppEvent::NextTheme => self.theme = self.theme.next(),
            AppEvent::ToggleSidebar => self.sidebar = !self.sidebar,
            AppEvent::ContactSubmit => match self.contact.validate() {
                Ok(submission) => {
                    log::info!("contact form submitted by {}", submission.email);
                    self.notifications.success(
                        format!("Thanks {}, your message has been sent!", submission.name),
                        Some(self.config.toast_lifetime),
                    );
                    self.contact.reset();
                    self.view_current = CurrentView::Home;
                }
                Err(e) => self.report_error(e),
            },
        };
        Ok(())
    }

    async fn handle_input(&mut self, key: KeyEvent) -> Result<(), anyhow::Error> {
        if self.input_mode == InputMode::Command {
            match key.code {
                // escape back to normal mode
                KeyCode::Esc => {
                    self.input_mode = InputMode::Normal;
                    self.command_input.reset();
                }
                // execute command
                KeyCode::Enter => {
                    self.input_mode = InputMode::Normal;
                    let line = self.command_input.value().to_string();
                    self.command_input.reset();
                    self.sender.send(AppEvent::ExecCommand(line)).await?;
                }
                // delegate keys to command input
                _ => {
                    self.command_input.handle_event(&Event::Key(key));
                }
            }
            return Ok(());
        }

        let next = match self.view_current {
            CurrentView::Home => HomeView::handle(self, AppEvent::Input(key)),
            CurrentView::Contact => ContactView::handle(self, AppEvent::Input(key)),
            CurrentView::Help => HelpView::handle(self, AppEvent::Input(key)),
        };

        if let Some(event) = next {
            self.sender.send(event).await?;
        }
        Ok(())
    }

    // selects the notification at the position, or the last one
    fn select_at(&mut self, position: usize) {
        let snapshot = self.notifications.snapshot();
        self.selected = snapshot
            .get(position)
            .or(snapshot.last())
            .map(|n| n.id);
    }

    fn dismiss(&mut self, id: NotificationId) {
        let position = self.notifications.position(id);
        self.notifications.dismiss(id);

        // keep the selection on a neighbour of a removed selected toast
        if self.selected == Some(id) {
            match position {
                Some(position) => self.select_at(position),
                None => self.selected = None,
            }
        }
    }

    fn report_error(&mut self, error: anyhow::Error) {
        log::warn!("{}", error);
        self.notifications
            .error(error.to_string(), Some(self.config.error_lifetime));
    }
}
