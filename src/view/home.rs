use super::View;
use crate::app::{App, CurrentView, InputMode};
use crate::event::input::AppEvent;
use crate::notification::Category;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub struct HomeView {}

impl View for HomeView {
    fn handle(app: &mut App, event: AppEvent) -> Option<AppEvent> {
        let AppEvent::Input(e) = event else {
            return None;
        };

        match e.code {
            KeyCode::Down => return Some(AppEvent::SelectNext),
            KeyCode::Up => return Some(AppEvent::SelectPrevious),
            KeyCode::Delete => return Some(AppEvent::DismissSelected),
            _ => (),
        }

        let KeyCode::Char(char) = e.code else {
            return None;
        };

        match char {
            ':' => {
                app.input_mode = InputMode::Command;
                None
            }
            's' => Some(sample(app, Category::Success, "Saved!")),
            'e' => Some(sample(app, Category::Error, "Error occurred")),
            'i' => Some(sample(app, Category::Info, "New blog post published")),
            'w' => Some(sample(app, Category::Warning, "Session expires soon")),
            'p' => Some(AppEvent::Notify {
                message: "This one stays until you dismiss it".to_string(),
                category: Category::Info,
                lifetime: None,
            }),
            'j' => Some(AppEvent::SelectNext),
            'k' => Some(AppEvent::SelectPrevious),
            'x' => Some(AppEvent::DismissSelected),
            'c' => Some(AppEvent::ClearNotifications),
            'f' => Some(AppEvent::ChangeView(CurrentView::Contact)),
            '?' => Some(AppEvent::ChangeView(CurrentView::Help)),
            't' => Some(AppEvent::NextTheme),
            'b' => Some(AppEvent::ToggleSidebar),
            'q' => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let theme = app.theme();
        let mut lines = vec![
            Line::from("Welcome!"),
            Line::from(""),
            Line::from("Press a key to raise a toast, [?] for help."),
            Line::from(""),
        ];

        for category in [Category::Success, Category::Error, Category::Info, Category::Warning] {
            let count = app
                .notifications
                .snapshot()
                .iter()
                .filter(|n| n.category == category)
                .count();
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} {:<8}", category.icon(), category),
                    theme.notification(category),
                ),
                Span::raw(format!(" {}", count)),
            ]));
        }

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::all())
                    .title("Home")
                    .style(theme.pane_border_inactive),
            ),
            area,
        );
    }
}

fn sample(app: &App, category: Category, message: &str) -> AppEvent {
    AppEvent::Notify {
        message: message.to_string(),
        category,
        lifetime: Some(match category {
            Category::Error => app.config.error_lifetime,
            _ => app.config.toast_lifetime,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_sample_toasts_use_configured_lifetimes() {
        let (sender, receiver) = mpsc::channel(8);
        let mut app = App::new(Config::default(), receiver, sender);

        assert_eq!(
            Some(AppEvent::Notify {
                message: "Saved!".to_string(),
                category: Category::Success,
                lifetime: Some(Duration::from_millis(3000)),
            }),
            HomeView::handle(&mut app, key(KeyCode::Char('s')))
        );
        assert_eq!(
            Some(AppEvent::Notify {
                message: "Error occurred".to_string(),
                category: Category::Error,
                lifetime: Some(Duration::from_millis(5000)),
            }),
            HomeView::handle(&mut app, key(KeyCode::Char('e')))
        );
        assert_eq!(None, HomeView::handle(&mut app, key(KeyCode::Char('z'))));
        assert_eq!(None, HomeView::handle(&mut app, AppEvent::Tick));
        assert_eq!(
            Some(AppEvent::DismissSelected),
            HomeView::handle(&mut app, key(KeyCode::Delete))
        );
    }
}
