use ratatui::Frame;

use crate::{
    app::App,
    view::{layout::LayoutView, View},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    LayoutView::draw(app, frame, area);
}
