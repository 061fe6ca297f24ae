//! Clickable service-summary tile

use hotel_admin_core::{Component, EventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Trailing "drill in" affordance
pub const DRILL_IN: &str = "›";

/// Props for SummaryCard component
pub struct SummaryCardProps<'a, A> {
    /// Card heading
    pub title: &'a str,
    /// Supporting text under the title
    pub description: &'a str,
    /// Inline icon shown in the badge, styled by the caller
    pub icon: Span<'a>,
    /// Whether this card has keyboard focus
    pub is_focused: bool,
    /// Callback when the card is activated
    pub on_activate: fn() -> A,
}

/// A titled, described, iconified tile that activates on click
///
/// A left mouse press inside the last rendered area, or Enter/Space while
/// focused, emits `on_activate` once. Nothing else emits anything.
#[derive(Debug, Default)]
pub struct SummaryCard {
    /// Area from the last render, for hit-testing clicks
    area: Option<Rect>,
}

impl SummaryCard {
    /// Rows needed to show border, title and two lines of description
    pub const HEIGHT: u16 = 5;

    /// Create a new SummaryCard
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> Component<A> for SummaryCard {
    type Props<'a> = SummaryCardProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        let activated = match event {
            EventKind::Mouse(_) => self.area.is_some_and(|area| event.is_left_click_in(area)),
            _ => props.is_focused && event.is_activation_key(),
        };

        if !activated {
            return None;
        }

        tracing::debug!(card = props.title, "Summary card activated");
        Some((props.on_activate)())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.area = Some(area);

        let accent = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let badge_width = u16::try_from(props.icon.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let [badge_area, _, text_area, arrow_area] = Layout::horizontal([
            Constraint::Length(badge_width),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        let badge = Line::from(vec![Span::raw(" "), props.icon, Span::raw(" ")]);
        frame.render_widget(
            Paragraph::new(badge).style(Style::default().bg(Color::Rgb(40, 44, 52))),
            Rect {
                height: badge_area.height.min(1),
                ..badge_area
            },
        );

        let [title_area, description_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(text_area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                props.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(props.description)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            description_area,
        );

        let [_, arrow_row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(arrow_area);
        frame.render_widget(
            Paragraph::new(Span::styled(DRILL_IN, Style::default().fg(accent))),
            arrow_row,
        );
    }
}
