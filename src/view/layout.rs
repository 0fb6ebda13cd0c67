use super::contact::ContactView;
use super::help::HelpView;
use super::home::HomeView;
use super::toasts::ToastsView;
use super::View;
use crate::app::App;
use crate::app::CurrentView;
use crate::app::InputMode;
use crate::event::input::AppEvent;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct LayoutView {}

impl View for LayoutView {
    fn handle(_app: &mut App, _event: AppEvent) -> Option<AppEvent> {
        None
    }

    fn draw(app: &App, f: &mut Frame, area: Rect) {
        let constraints = vec![
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(match app.input_mode {
                InputMode::Command => 1,
                InputMode::Normal => 0,
            }),
        ];

        let rows = Layout::default()
            .margin(0)
            .constraints(constraints)
            .split(area);

        f.render_widget(status_widget(app), rows[0]);

        let main = match app.sidebar {
            true => {
                let cols = Layout::horizontal(vec![Constraint::Length(14), Constraint::Min(10)])
                    .split(rows[1]);
                f.render_widget(sidebar_widget(app), cols[0]);
                cols[1]
            }
            false => rows[1],
        };

        match app.view_current {
            CurrentView::Home => HomeView::draw(app, f, main),
            CurrentView::Contact => ContactView::draw(app, f, main),
            CurrentView::Help => HelpView::draw(app, f, main),
        }

        ToastsView::draw(app, f, main);

        if app.input_mode == InputMode::Command {
            draw_command_line(app, f, rows[2]);
        }
    }
}

fn status_widget(app: &App) -> Paragraph<'_> {
    let theme = app.theme();
    Paragraph::new(vec![Line::from(vec![
        Span::styled(
            format!(" {} ", app.view_current),
            theme.widget_active.add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" 󰂚 {} ", app.notifications.len()),
            theme.widget_inactive,
        ),
        Span::styled(
            format!(" {} ", app.input_mode),
            match app.input_mode {
                InputMode::Normal => theme.widget_mode_normal,
                InputMode::Command => theme.widget_mode_command,
            },
        ),
        Span::styled(format!(" {} ", app.theme.name()), Style::default()),
    ])])
}

fn sidebar_widget(app: &App) -> Paragraph<'_> {
    let theme = app.theme();
    let lines: Vec<Line> = CurrentView::ALL
        .iter()
        .map(|view| {
            Line::from(Span::styled(
                format!(" {:<11}", view.to_string()),
                match *view == app.view_current {
                    true => theme.sidebar_item_active,
                    false => theme.sidebar_item,
                },
            ))
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::RIGHT)
            .style(theme.pane_border_inactive),
    )
}

fn draw_command_line(app: &App, frame: &mut Frame, area: Rect) {
    let theme = app.theme();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(":"),
            Span::raw(app.command_input.value()).style(theme.text_input),
        ])),
        area,
    );

    let width = area.width.max(2) - 1;
    let scroll = app.command_input.visual_scroll(width as usize);
    let x = app.command_input.visual_cursor().max(scroll) - scroll + 1;
    frame.set_cursor_position((area.x + x as u16, area.y));
}
