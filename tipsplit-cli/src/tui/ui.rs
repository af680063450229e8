//! UI rendering for the splitter screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use tipsplit::prelude::KeyValueStore;

use crate::tui::app::{App, Focus, MessageType};
use crate::tui::components::StatCard;
use crate::tui::theme::{icons, theme};

const LABEL_WIDTH: usize = 18;

// ═══════════════════════════════════════════════════════════════════════════
// MAIN UI ENTRY POINT
// ═══════════════════════════════════════════════════════════════════════════

pub fn ui<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let t = theme();

    frame.render_widget(Clear, frame.area());
    frame.render_widget(Block::default().style(t.bg()), frame.area());

    // Header | Main Content | Status Bar
    let root_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, root_layout[0], app);
    render_content(frame, root_layout[1], app);
    render_status_bar(frame, root_layout[2], app);
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER
// ═══════════════════════════════════════════════════════════════════════════

fn render_header<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let t = theme();

    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(t.slate_light))
        .style(t.bg());

    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let brand = Line::from(vec![
        Span::raw(" "),
        Span::styled(icons::RECEIPT, Style::default().fg(t.amber)),
        Span::raw(" "),
        Span::styled("TIP", t.title()),
        Span::styled("SPLIT", Style::default().fg(t.text_primary).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(brand).alignment(Alignment::Left), layout[0]);

    let context = Line::from(vec![
        Span::styled("Currency: ", t.label()),
        Span::styled(app.state().currency.code(), t.text()),
        Span::raw("  "),
        Span::styled(icons::SEPARATOR, Style::default().fg(t.slate_light)),
        Span::raw("  "),
        Span::styled("Locale: ", t.label()),
        Span::styled(app.money.locale(), t.text()),
        Span::raw(" "),
    ]);
    frame.render_widget(Paragraph::new(context).alignment(Alignment::Right), layout[1]);
}

// ═══════════════════════════════════════════════════════════════════════════
// MAIN CONTENT
// ═══════════════════════════════════════════════════════════════════════════

fn render_content<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_form(frame, chunks[0], app);
    render_results(frame, chunks[1], app);
}

fn render_form<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let t = theme();

    let block = Block::default()
        .title(Span::styled(" Bill ", t.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.border_inactive())
        .padding(Padding::new(1, 1, 1, 0))
        .style(t.bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Currency
            Constraint::Length(2), // Amount
            Constraint::Length(2), // Tip
            Constraint::Length(2), // Presets
            Constraint::Length(2), // People
            Constraint::Length(1), // Reset
            Constraint::Min(0),
        ])
        .split(inner);

    let state = app.state();

    let currency = format!("◀ {} ▶", state.currency.code());
    render_row(frame, rows[0], app, Focus::Currency, "Currency", Span::styled(currency, t.text()));
    render_numeric_row(frame, rows[1], app, Focus::Amount, "Bill Amount", state.amount.normalize().to_string());
    render_numeric_row(frame, rows[2], app, Focus::Tip, "Tip (%)", state.tip_percent.normalize().to_string());
    render_presets(frame, rows[3], app);
    render_numeric_row(frame, rows[4], app, Focus::People, "Number of People", state.people.normalize().to_string());

    let reset_style = if app.focus == Focus::Reset {
        t.highlight()
    } else {
        Style::default().fg(t.error)
    };
    render_row(frame, rows[5], app, Focus::Reset, "", Span::styled(" Reset ", reset_style));
}

/// Draws `label` and `value` on one line, with a marker when the row has focus.
fn render_row<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    focus: Focus,
    label: &str,
    value: Span<'_>,
) {
    let t = theme();
    let focused = app.focus == focus;
    let marker = if focused { icons::ARROW_RIGHT } else { " " };
    let label_style = if focused { t.title() } else { t.label() };

    let line = Line::from(vec![
        Span::styled(format!("{} ", marker), t.title()),
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
        value,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_numeric_row<S: KeyValueStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    focus: Focus,
    label: &str,
    current: String,
) {
    let t = theme();
    let editing = app.editing && app.focus == focus;

    let value = if editing {
        Span::styled(
            format!("[{}]", app.input.value()),
            Style::default().fg(t.teal).add_modifier(Modifier::UNDERLINED),
        )
    } else {
        Span::styled(current, t.text())
    };
    render_row(frame, area, app, focus, label, value);

    if editing {
        // marker (2) + label + opening bracket
        let offset = (2 + LABEL_WIDTH + 1 + app.input.visual_cursor()) as u16;
        frame.set_cursor_position((area.x + offset.min(area.width.saturating_sub(1)), area.y));
    }
}

fn render_presets<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let t = theme();
    let focused = app.focus == Focus::Presets;
    let current_tip = app.state().tip_percent;

    let mut spans = Vec::new();
    for (i, preset) in App::<S>::presets().iter().enumerate() {
        let style = if focused && i == app.preset_index {
            t.highlight()
        } else if preset.percent() == current_tip {
            Style::default().fg(t.teal).add_modifier(Modifier::BOLD)
        } else {
            t.label()
        };
        spans.push(Span::styled(format!("[{}] {}", i + 1, preset.label()), style));
        spans.push(Span::raw("  "));
    }

    let line = Line::from(spans);
    render_row(frame, area, app, Focus::Presets, "Quick Tip", Span::raw(""));
    let offset = (2 + LABEL_WIDTH) as u16;
    if area.width > offset {
        let value_area = Rect {
            x: area.x + offset,
            width: area.width - offset,
            ..area
        };
        frame.render_widget(Paragraph::new(line), value_area);
    }
}

fn render_results<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let t = theme();
    let summary = app.splitter.summary();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Total
            Constraint::Length(5), // Per person
            Constraint::Min(0),    // Breakdown
        ])
        .split(area);

    let total = app.format_money(summary.total);
    let tip_note = format!(
        "incl. {} tip ({}%)",
        app.format_money(summary.tip_amount),
        summary.tip_percent.normalize()
    );
    StatCard::new("Total with Tip", &total)
        .value_color(t.amber)
        .subtitle(&tip_note)
        .render(frame, layout[0]);

    let share = app.format_money(summary.per_person);
    let people_note = format!("split {} ways", summary.people.normalize());
    StatCard::new("Per Person", &share)
        .value_color(t.amber)
        .highlighted(true)
        .subtitle(&people_note)
        .render(frame, layout[1]);

    let breakdown = Paragraph::new(summary.explain())
        .style(t.label())
        .block(
            Block::default()
                .title(Span::styled(" Breakdown ", t.title()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(t.border_inactive())
                .style(t.bg()),
        );
    frame.render_widget(breakdown, layout[2]);
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS BAR
// ═══════════════════════════════════════════════════════════════════════════

fn render_status_bar<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let t = theme();

    let status = if let Some((msg, kind)) = &app.message {
        let color = match kind {
            MessageType::Error => t.error,
            MessageType::Success => t.success,
            MessageType::Info => t.info,
        };
        Span::styled(format!(" {} ", msg), Style::default().bg(color).fg(t.slate))
    } else {
        let mode = if app.editing { "EDIT" } else { "READY" };
        Span::styled(format!(" {} ", mode), Style::default().bg(t.slate_light).fg(t.text_muted))
    };

    let hints = if app.editing {
        " [Enter] Save  [Esc] Cancel  [Tab] Next "
    } else {
        " [↑↓] Move  [←→] Change  [Enter] Edit  [1-4] Quick Tip  [R] Reset  [Q] Quit "
    };

    let bar = Line::from(vec![
        status,
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(t.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(bar).style(t.bg()), area);
}
