use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use anyhow::bail;
use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

pub struct ContactView {}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn previous(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Default)]
pub struct ContactState {
    pub name: Input,
    pub email: Input,
    pub message: Input,
    pub focus: ContactField,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactState {
    pub fn input(&self, field: ContactField) -> &Input {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn input_mut(&mut self, field: ContactField) -> &mut Input {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<Submission, anyhow::Error> {
        let name = self.name.value().trim();
        let email = self.email.value().trim();
        let message = self.message.value().trim();

        if name.is_empty() {
            bail!("Please enter your name");
        }
        if !is_email(email) {
            bail!("Please enter a valid email address");
        }
        if message.is_empty() {
            bail!("Please enter a message");
        }

        Ok(Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = ContactState::default();
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && match domain.rsplit_once('.') {
                    Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                    None => false,
                }
        }
        None => false,
    }
}

impl View for ContactView {
    fn handle(app: &mut App, event: AppEvent) -> Option<AppEvent> {
        let AppEvent::Input(e) = event else {
            return None;
        };
        let state = &mut app.contact;

        match e.code {
            KeyCode::Esc => Some(AppEvent::ChangeView(CurrentView::Home)),
            KeyCode::Tab | KeyCode::Down => {
                state.focus = state.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.focus = state.focus.previous();
                None
            }
            KeyCode::Enter => match state.focus {
                ContactField::Message => Some(AppEvent::ContactSubmit),
                focus => {
                    state.focus = focus.next();
                    None
                }
            },
            _ => {
                let focus = state.focus;
                state.input_mut(focus).handle_event(&Event::Key(e));
                None
            }
        }
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let theme = app.theme();
        let rows = Layout::default()
            .margin(0)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw(
                " Get in touch - [tab] next field, [enter] on the message to send, [esc] back",
            )])),
            rows[0],
        );

        for (offset, field) in ContactField::ALL.iter().enumerate() {
            let focused = app.contact.focus == *field;
            let area = rows[offset + 1];
            let input = app.contact.input(*field);

            frame.render_widget(
                Paragraph::new(Line::from(vec![Span::raw(input.value()).style(theme.text_input)]))
                    .block(
                        Block::default()
                            .borders(Borders::all())
                            .title(field.label())
                            .style(match focused {
                                true => theme.pane_border_active,
                                false => theme.pane_border_inactive,
                            }),
                    ),
                area,
            );

            if focused && app.input_mode == crate::app::InputMode::Normal {
                let width = area.width.max(3) - 3;
                let scroll = input.visual_scroll(width as usize);
                let x = input.visual_cursor().max(scroll) - scroll + 1;
                frame.set_cursor_position((area.x + x as u16, area.y + 1));
            }
        }
    }
}
