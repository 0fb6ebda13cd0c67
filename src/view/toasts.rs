use super::View;
use crate::app::App;
use crate::event::input::AppEvent;
use crate::notification::Notification;
use crate::theme::Scheme;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

const TOAST_WIDTH: u16 = 42;
const TOAST_HEIGHT: u16 = 4;

/// Overlay stacking the queued notifications in the bottom right corner,
/// oldest on top. When they do not all fit the newest ones are shown,
/// unless the selected one is older, then the window starts at it.
pub struct ToastsView {}

impl View for ToastsView {
    fn handle(_app: &mut App, _event: AppEvent) -> Option<AppEvent> {
        None
    }

    fn draw(app: &App, frame: &mut Frame, area: Rect) {
        let theme = app.theme();
        let snapshot = app.notifications.snapshot();
        let fit = (area.height / TOAST_HEIGHT) as usize;
        let selected = app.selected_position();
        let skip = match selected {
            Some(position) => snapshot.len().saturating_sub(fit).min(position),
            None => snapshot.len().saturating_sub(fit),
        };
        let visible = &snapshot[skip..(skip + fit).min(snapshot.len())];

        let width = TOAST_WIDTH.min(area.width);
        let x = area.right() - width;
        let mut y = area.bottom() - visible.len() as u16 * TOAST_HEIGHT;

        for (offset, notification) in visible.iter().enumerate() {
            let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);
            frame.render_widget(Clear, toast_area);
            frame.render_widget(
                toast_widget(&theme, notification, selected == Some(skip + offset)),
                toast_area,
            );
            y += TOAST_HEIGHT;
        }
    }
}

fn toast_widget<'a>(theme: &Scheme, notification: &'a Notification, selected: bool) -> Paragraph<'a> {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} {} ", notification.category.icon(), notification.category),
            theme.notification(notification.category),
        ),
        Span::raw(format!(" {} ", notification.id)),
    ]);

    Paragraph::new(notification.message.as_str())
        .style(theme.toast_text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::all())
                .border_style(match selected {
                    true => theme.toast_border_selected,
                    false => theme.toast_border,
                })
                .title(title)
                .title_bottom(Line::styled(countdown(notification), theme.toast_countdown).right_aligned()),
        )
}

fn countdown(notification: &Notification) -> String {
    match notification.remaining() {
        Some(remaining) => format!(" {}s ", remaining.as_secs_f32().ceil() as u64),
        None => " sticky ".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn text(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn app() -> App {
        let (sender, receiver) = mpsc::channel(8);
        App::new(Config::default(), receiver, sender)
    }

    #[tokio::test(start_paused = true)]
    async fn test_draws_toasts_oldest_first() -> Result<(), anyhow::Error> {
        let mut app = app();
        app.notifications.success("first toast", Some(Duration::from_millis(2500)));
        app.notifications.warning("second toast", None);

        let mut terminal = Terminal::new(TestBackend::new(60, 12))?;
        terminal.draw(|frame| {
            let area = frame.area();
            ToastsView::draw(&app, frame, area)
        })?;

        let lines = text(terminal.backend().buffer());
        let first = lines.iter().position(|l| l.contains("first toast"));
        let second = lines.iter().position(|l| l.contains("second toast"));
        assert!(first.is_some());
        assert!(first < second);
        assert!(lines.iter().any(|l| l.contains("success") && l.contains("#1")));
        assert!(lines.iter().any(|l| l.contains("3s")));
        assert!(lines.iter().any(|l| l.contains("sticky")));
        Ok(())
    }

    #[tokio::test]
    async fn test_shows_newest_toasts_that_fit() -> Result<(), anyhow::Error> {
        let mut app = app();
        for i in 1..=5 {
            app.notifications.info(format!("toast number {}", i), None);
        }

        // room for two toasts
        let mut terminal = Terminal::new(TestBackend::new(50, 9))?;
        terminal.draw(|frame| {
            let area = frame.area();
            ToastsView::draw(&app, frame, area)
        })?;

        let lines = text(terminal.backend().buffer()).join("\n");
        assert!(!lines.contains("toast number 3"));
        assert!(lines.contains("toast number 4"));
        assert!(lines.contains("toast number 5"));
        Ok(())
    }

    #[tokio::test]
    async fn test_scrolls_to_selected_toast() -> Result<(), anyhow::Error> {
        let mut app = app();
        let mut ids = Vec::new();
        for i in 1..=5 {
            ids.push(app.notifications.info(format!("toast number {}", i), None));
        }
        app.selected = Some(ids[1]);

        let mut terminal = Terminal::new(TestBackend::new(50, 9))?;
        terminal.draw(|frame| {
            let area = frame.area();
            ToastsView::draw(&app, frame, area)
        })?;

        let lines = text(terminal.backend().buffer()).join("\n");
        assert!(lines.contains("toast number 2"));
        assert!(lines.contains("toast number 3"));
        assert!(!lines.contains("toast number 5"));
        Ok(())
    }

    #[tokio::test]
    async fn test_draws_nothing_without_toasts() -> Result<(), anyhow::Error> {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(50, 9))?;
        terminal.draw(|frame| {
            let area = frame.area();
            ToastsView::draw(&app, frame, area)
        })?;

        assert!(text(terminal.backend().buffer())
            .iter()
            .all(|l| l.trim().is_empty()));
        Ok(())
    }
}
