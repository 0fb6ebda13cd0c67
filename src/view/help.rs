use super::View;
use crate::app::{App, CurrentView};
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct HelpView {}

impl View for HelpView {
    fn handle(_app: &mut App, event: AppEvent) -> Option<AppEvent> {
        match event {
            AppEvent::Input(_) => Some(AppEvent::ChangeView(CurrentView::Home)),
            _ => None,
        }
    }

    fn draw(_app: &App, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(help()), area);
    }
}

fn help() -> String {
"
Help for you - press any key to return.

Key mappings (home view):

[s]     success toast
[e]     error toast
[i]     info toast
[w]     warning toast
[p]     sticky toast (stays until dismissed)
[j]     select next toast
[k]     select previous toast
[x]     dismiss selected toast
[c]     clear all toasts
[f]     contact form
[t]     rotate the theme
[b]     toggle the sidebar
[?]     this help
[:]     command mode
[q]     quit

Commands:

toast <category> [<lifetime_ms>] <message>
        category is one of success, error, info, warning.
        a lifetime of 0 keeps the toast until it is dismissed.
dismiss <id>
clear
theme
sidebar
home | contact | help
q | quit

Contact form:

[tab]   next field
[esc]   back to home
[enter] next field, submits on the last one
".to_string()
}
