pub mod contact;
pub mod help;
pub mod home;
pub mod layout;
pub mod toasts;

use crate::app::App;
use crate::event::input::AppEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle(app: &mut App, event: AppEvent) -> Option<AppEvent>;
    fn draw(app: &App, frame: &mut Frame, area: Rect);
}
