use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

use crate::notification::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    SolarizedDark,
}

impl Theme {
    pub fn next(&self) -> Theme {
        match self {
            Theme::Dark => Theme::SolarizedDark,
            Theme::SolarizedDark => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::SolarizedDark => "solarized-dark",
        }
    }

    pub fn scheme(&self) -> Scheme {
        match self {
            Theme::SolarizedDark => Scheme {
                notification_success: Style::default().fg(Solarized::Green.to_color()),
                notification_error: Style::default().fg(Solarized::Red.to_color()),
                notification_info: Style::default().fg(Solarized::Blue.to_color()),
                notification_warning: Style::default().fg(Solarized::Yellow.to_color()),
                toast_border: Style::default().fg(Solarized::Base01.to_color()),
                toast_border_selected: Style::default().fg(Solarized::Magenta.to_color()),
                toast_text: Style::default().fg(Solarized::Base1.to_color()),
                toast_countdown: Style::default().fg(Solarized::Base00.to_color()),
                pane_border_active: Style::default().fg(Solarized::Base01.to_color()),
                pane_border_inactive: Style::default().fg(Solarized::Base02.to_color()),
                sidebar_item: Style::default().fg(Solarized::Base0.to_color()),
                sidebar_item_active: Style::default()
                    .fg(Solarized::Base02.to_color())
                    .bg(Solarized::Cyan.to_color()),
                text_input: Style::default().fg(Solarized::Base1.to_color()),
                widget_active: Style::default()
                    .fg(Solarized::Base02.to_color())
                    .bg(Solarized::Green.to_color()),
                widget_inactive: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .bg(Solarized::Base03.to_color()),
                widget_mode_normal: Style::default()
                    .fg(Solarized::Base1.to_color())
                    .bg(Solarized::Base02.to_color()),
                widget_mode_command: Style::default()
                    .fg(Solarized::Orange.to_color())
                    .bg(Solarized::Base03.to_color()),
            },
            Theme::Dark => Scheme {
                notification_success: Style::default().fg(Color::Black).bg(Color::Green),
                notification_error: Style::default().fg(Color::White).bg(Color::Red),
                notification_info: Style::default().fg(Color::Black).bg(Color::Cyan),
                notification_warning: Style::default().fg(Color::Black).bg(Color::Yellow),

                toast_border: Style::default().fg(Color::DarkGray),
                toast_border_selected: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                toast_text: Style::default().fg(Color::White),
                toast_countdown: Style::default().fg(Color::DarkGray),

                pane_border_active: Style::default().fg(Color::Green),
                pane_border_inactive: Style::default().fg(Color::DarkGray),

                sidebar_item: Style::default().fg(Color::White),
                sidebar_item_active: Style::default().fg(Color::Black).bg(Color::Green),

                text_input: Style::default().fg(Color::White),

                widget_active: Style::default().fg(Color::Black).bg(Color::Green),
                widget_inactive: Style::default().fg(Color::Black).bg(Color::Yellow),
                widget_mode_normal: Style::default().bg(Color::Blue),
                widget_mode_command: Style::default().bg(Color::Magenta),
            },
        }
    }
}

pub struct Scheme {
    pub notification_success: Style,
    pub notification_error: Style,
    pub notification_info: Style,
    pub notification_warning: Style,

    pub toast_border: Style,
    pub toast_border_selected: Style,
    pub toast_text: Style,
    pub toast_countdown: Style,

    pub pane_border_active: Style,
    pub pane_border_inactive: Style,

    pub sidebar_item: Style,
    pub sidebar_item_active: Style,

    pub text_input: Style,

    pub widget_active: Style,
    pub widget_inactive: Style,
    pub widget_mode_normal: Style,
    pub widget_mode_command: Style,
}

impl Scheme {
    pub fn notification(&self, category: Category) -> Style {
        match category {
            Category::Success => self.notification_success,
            Category::Error => self.notification_error,
            Category::Info => self.notification_info,
            Category::Warning => self.notification_warning,
        }
    }
}

pub enum Solarized {
    Base03,
    Base02,
    Base01,
    Base00,
    Base0,
    Base1,
    Yellow,
    Orange,
    Red,
    Magenta,
    Blue,
    Cyan,
    Green,
}

impl Solarized {
    fn to_color(&self) -> Color {
        match self {
            Solarized::Base03 => Color::Rgb(0, 43, 54),
            Solarized::Base02 => Color::Rgb(7, 54, 66),
            Solarized::Base01 => Color::Rgb(88, 110, 117),
            Solarized::Base00 => Color::Rgb(101, 123, 131),
            Solarized::Base0 => Color::Rgb(131, 148, 150),
            Solarized::Base1 => Color::Rgb(147, 161, 161),
            Solarized::Yellow => Color::Rgb(181, 137, 0),
            Solarized::Orange => Color::Rgb(203, 75, 22),
            Solarized::Red => Color::Rgb(220, 50, 47),
            Solarized::Magenta => Color::Rgb(211, 54, 130),
            Solarized::Blue => Color::Rgb(38, 139, 210),
            Solarized::Cyan => Color::Rgb(42, 161, 152),
            Solarized::Green => Color::Rgb(133, 153, 0),
        }
    }
}
