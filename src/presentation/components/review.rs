//! Review component
//!
//! Main view: the record under review, or a notice when there is none.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{review::SessionPhase, table::ABSTRACT_NOTE},
    presentation::{
        config::keybindings::Action,
        widgets::record::{RecordStyles, RecordWidget},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ReviewComponent;

impl ReviewComponent {
    pub fn new() -> Self {
        Self
    }

    /// Returns the abstract's scroll limit when a record is on screen
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) -> Option<u16> {
        match state.phase() {
            SessionPhase::Reviewing => return self.view_record(state, frame, area),
            SessionPhase::Complete => {
                let export_key = state
                    .config
                    .config
                    .keybindings
                    .key_for(Action::Export)
                    .unwrap_or_else(|| "s".to_string());
                let mut lines = vec![
                    Line::from("No more rows to review!").bold(),
                    Line::default(),
                ];
                match &state.review.last_export {
                    Some(path) => lines.push(Line::from(format!("Saved to {}", path.display()))),
                    None => lines.push(Line::from(format!(
                        "Press [{export_key}] to export the annotated table."
                    ))),
                }
                render_notice(frame, area, lines, Style::default());
            }
            SessionPhase::Uninitialized => {
                let styles = &state.config.config.styles;
                if let Some(error) = &state.review.load_error {
                    let lines = vec![
                        Line::from("Cannot start the review").bold(),
                        Line::default(),
                        Line::from(error.as_str()),
                    ];
                    let style = styles.style_or("error", Style::default().fg(Color::Red));
                    render_notice(frame, area, lines, style);
                } else if state.review.is_loading {
                    render_notice(frame, area, vec![Line::from("Loading...")], Style::default());
                } else {
                    render_notice(frame, area, vec![Line::from("No file loaded")], Style::default());
                }
            }
        }
        None
    }

    fn view_record(&self, state: &AppState, frame: &mut Frame, area: Rect) -> Option<u16> {
        let record = state
            .review
            .session
            .as_ref()
            .and_then(|session| session.current())?;
        let styles = &state.config.config.styles;
        let record_styles = RecordStyles {
            title: styles.style_or("title", Style::default().add_modifier(Modifier::BOLD)),
            meta: styles.style("meta"),
            label: styles.style_or("label", Style::default().add_modifier(Modifier::BOLD)),
            highlight: styles.style_or(
                "highlight",
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
        };
        let highlighted = state
            .config
            .highlighter
            .highlight(record.get(ABSTRACT_NOTE));

        let block = Block::default().padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let widget = RecordWidget::new(record, &highlighted)
            .styles(record_styles)
            .scroll(state.ui.scroll);
        let max_scroll = widget.max_scroll(inner);
        frame.render_widget(widget, inner);
        Some(max_scroll)
    }
}

fn render_notice(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>, style: Style) {
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        middle,
    );
}
