//! Dashboard layout and event routing
//!
//! `DeskUi` owns the component instances (their hit areas and the time
//! fields' local mirrors) and builds their props from `AppState` on every
//! render and every event.

use crossterm::event::KeyCode;
use hotel_admin::{format_key_for_display, key_matches, Component, EventKind};
use hotel_admin_components::{
    HeaderBar, HeaderBarProps, SummaryCard, SummaryCardProps, TimeField, TimeFieldProps,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::action::Action;
use crate::state::{AppState, Focus, Section};

/// Shortcuts shown in the status line
const HELP: [(&str, &str); 5] = [
    ("tab", "next"),
    ("shift+tab", "prev"),
    ("enter", "open"),
    ("up", "adjust"),
    ("esc", "quit"),
];

const CHECK_IN_LABEL: &str = "Check-in";
const CHECK_OUT_LABEL: &str = "Check-out";

fn open_action(section: Section) -> fn() -> Action {
    match section {
        Section::Rooms => || Action::NavOpen(Section::Rooms),
        Section::Reservations => || Action::NavOpen(Section::Reservations),
        Section::Housekeeping => || Action::NavOpen(Section::Housekeeping),
        Section::Guests => || Action::NavOpen(Section::Guests),
    }
}

fn header_props(state: &AppState) -> HeaderBarProps<Action> {
    HeaderBarProps {
        is_focused: state.focus == Focus::SignOut,
        on_sign_out: || Action::SessionSignOut,
    }
}

fn card_props(section: Section, state: &AppState) -> SummaryCardProps<'static, Action> {
    SummaryCardProps {
        title: section.title(),
        description: section.description(),
        icon: Span::styled(
            section.icon(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        is_focused: state.focus == Focus::Card(section),
        on_activate: open_action(section),
    }
}

fn check_in_props(state: &AppState) -> TimeFieldProps<'_, Action> {
    TimeFieldProps::new("check-in", &state.check_in, Action::SettingsCheckInChange)
        .focused(state.focus == Focus::CheckIn)
        .disabled(!state.signed_in)
}

fn check_out_props(state: &AppState) -> TimeFieldProps<'_, Action> {
    TimeFieldProps::new("check-out", &state.check_out, Action::SettingsCheckOutChange)
        .focused(state.focus == Focus::CheckOut)
        .disabled(!state.signed_in)
}

/// Component instances for the dashboard screen
#[derive(Debug, Default)]
pub struct DeskUi {
    header: HeaderBar,
    cards: [SummaryCard; 4],
    check_in: TimeField,
    check_out: TimeField,
}

impl DeskUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown by the check-in field
    pub fn check_in_display(&self) -> &str {
        self.check_in.value()
    }

    /// Text currently shown by the check-out field
    pub fn check_out_display(&self) -> &str {
        self.check_out.value()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [header_area, cards_area, settings_area, detail_area, status_area] =
            Layout::vertical([
                Constraint::Length(HeaderBar::HEIGHT),
                Constraint::Length(SummaryCard::HEIGHT * 2),
                Constraint::Length(TimeField::HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        self.header.render(frame, header_area, header_props(state));
        self.render_cards(frame, cards_area, state);
        self.render_settings(frame, settings_area, state);
        render_detail(frame, detail_area, state);
        render_status(frame, status_area, state);
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::vertical([Constraint::Length(SummaryCard::HEIGHT); 2]).split(area);
        let cells: Vec<Rect> = rows
            .iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Ratio(1, 2); 2])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        for ((card, section), cell) in self.cards.iter_mut().zip(Section::ALL).zip(cells) {
            card.render(frame, cell, card_props(section, state));
        }
    }

    fn render_settings(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [in_label, in_field, _, out_label, out_field, _] = Layout::horizontal([
            Constraint::Length(CHECK_IN_LABEL.len() as u16 + 2),
            Constraint::Length(TimeField::WIDTH),
            Constraint::Length(2),
            Constraint::Length(CHECK_OUT_LABEL.len() as u16 + 2),
            Constraint::Length(TimeField::WIDTH),
            Constraint::Fill(1),
        ])
        .areas(area);

        let label_style = if state.signed_in {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        for (text, label_area) in [(CHECK_IN_LABEL, in_label), (CHECK_OUT_LABEL, out_label)] {
            let [_, middle, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(label_area);
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" {text}"), label_style)),
                middle,
            );
        }

        self.check_in.render(frame, in_field, check_in_props(state));
        self.check_out.render(frame, out_field, check_out_props(state));
    }

    /// Route a terminal event to the host shortcuts and every component
    ///
    /// Components decide for themselves whether the event concerns them:
    /// keys only reach the focused one, clicks are hit-tested against the
    /// last render.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Resize(width, height) = event {
            return vec![Action::UiTerminalResize(*width, *height)];
        }

        if let Some(key) = event.key_press() {
            if key_matches(key, "esc") || key_matches(key, "ctrl+c") {
                return vec![Action::Quit];
            }
            if key_matches(key, "q") && !state.focus.is_text_input() {
                return vec![Action::Quit];
            }
            if key_matches(key, "tab") {
                return vec![Action::UiFocusNext];
            }
            if key.code == KeyCode::BackTab {
                return vec![Action::UiFocusPrev];
            }
        }

        let mut actions = Vec::new();
        actions.extend(self.header.handle_event(event, header_props(state)));
        for (card, section) in self.cards.iter_mut().zip(Section::ALL) {
            actions.extend(card.handle_event(event, card_props(section, state)));
        }
        actions.extend(self.check_in.handle_event(event, check_in_props(state)));
        actions.extend(self.check_out.handle_event(event, check_out_props(state)));
        actions
    }
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let (title, body) = match (state.signed_in, state.opened) {
        (false, _) => (
            "Session".to_string(),
            "Signed out. Settings are read-only.".to_string(),
        ),
        (true, Some(section)) => (section.title().to_string(), section.description().to_string()),
        (true, None) => (
            state.hotel.clone(),
            "Select a card to open a section.".to_string(),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "));
    frame.render_widget(
        Paragraph::new(body)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        format!(" {} ", state.hotel),
        Style::default().fg(Color::White),
    )];
    if let Some(status) = &state.status {
        spans.push(Span::styled(format!("| {status} "), text_style));
    }
    for (key, label) in HELP {
        spans.push(Span::styled(format_key_for_display(key), key_style));
        spans.push(Span::styled(format!(" {label}  "), text_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
