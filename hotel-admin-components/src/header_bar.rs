//! Admin page header with a sign-out action

use hotel_admin_core::{Component, EventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

/// Static page title
pub const TITLE: &str = "Admin Dashboard";

/// Label of the sign-out control
pub const SIGN_OUT_LABEL: &str = "Sign out";

const BAR_BG: Color = Color::Rgb(30, 30, 40);

/// Props for HeaderBar component
pub struct HeaderBarProps<A> {
    /// Whether the sign-out control has keyboard focus
    pub is_focused: bool,
    /// Callback when the sign-out control is activated
    pub on_sign_out: fn() -> A,
}

/// Title on the left, sign-out control on the right
#[derive(Debug, Default)]
pub struct HeaderBar {
    /// Area of the sign-out control from the last render
    button_area: Option<Rect>,
}

impl HeaderBar {
    pub const HEIGHT: u16 = 1;

    /// Create a new HeaderBar
    pub fn new() -> Self {
        Self::default()
    }

    fn button_text() -> String {
        format!("[ {SIGN_OUT_LABEL} ]")
    }
}

impl<A> Component<A> for HeaderBar {
    type Props<'a> = HeaderBarProps<A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let activated = match event {
            EventKind::Mouse(_) => self
                .button_area
                .is_some_and(|area| event.is_left_click_in(area)),
            _ => props.is_focused && event.is_activation_key(),
        };

        if !activated {
            return None;
        }

        tracing::debug!("Sign-out requested");
        Some((props.on_sign_out)())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        frame.render_widget(Block::default().style(Style::default().bg(BAR_BG)), area);

        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        let button = Self::button_text();
        let [title_area, button_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(button.chars().count() as u16),
            Constraint::Length(1),
        ])
        .areas(row);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {TITLE}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );

        let button_style = if props.is_focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Paragraph::new(Span::styled(button, button_style)), button_area);

        self.button_area = Some(button_area);
    }
}
