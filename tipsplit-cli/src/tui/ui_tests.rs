use crate::tui::app::{App, Focus, MessageType};
use crate::tui::ui::ui;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tipsplit::money::MoneyFormatter;
use tipsplit::prelude::{Currency, MemoryStore, Splitter};

fn app() -> App<MemoryStore> {
    let splitter = Splitter::open(MemoryStore::new()).unwrap();
    App::new(splitter, MoneyFormatter::new("en-US").unwrap())
}

fn render(app: &App<MemoryStore>, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)))
        .map(|cell| cell.symbol())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_ui_render_header() {
    let app = app();
    let buffer = render(&app, 100, 30);

    let header = row_text(&buffer, 0);
    assert!(header.contains("TIP"), "Header should contain branding: {header}");
    assert!(header.contains("AUD"));
    assert!(header.contains("en-US"));
}

#[test]
fn test_ui_render_default_totals() {
    let app = app();
    let text = screen_text(&render(&app, 100, 30));

    assert!(text.contains("Total with Tip"));
    assert!(text.contains("Per Person"));
    assert!(text.contains("A$0.00"));
    assert!(text.contains("Number of People"));
}

#[test]
fn test_ui_render_split() {
    let mut app = app();
    app.splitter.set_amount("100").unwrap();
    app.splitter.set_tip_percent("10").unwrap();
    app.splitter.set_people("4").unwrap();

    let text = screen_text(&render(&app, 100, 30));
    assert!(text.contains("A$110.00"));
    assert!(text.contains("A$27.50"));
    assert!(text.contains("split 4 ways"));
}

#[test]
fn test_ui_render_currency_switch() {
    let mut app = app();
    app.splitter.set_amount("1234.5").unwrap();
    app.splitter.select_currency(Currency::Php).unwrap();

    let text = screen_text(&render(&app, 100, 30));
    assert!(text.contains("₱1,234.50"));
}

#[test]
fn test_ui_render_editing_buffer() {
    let mut app = app();
    app.focus = Focus::Tip;
    app.start_editing_blank();
    app.input = app.input.clone().with_value("12.5".to_string());

    let text = screen_text(&render(&app, 100, 30));
    assert!(text.contains("[12.5]"));
    assert!(text.contains("EDIT"));
}

#[test]
fn test_ui_render_status_message() {
    let mut app = app();
    app.message = Some(("Tip set to 15%".to_string(), MessageType::Info));

    let buffer = render(&app, 100, 30);
    assert!(row_text(&buffer, 29).contains("Tip set to 15%"));
}

#[test]
fn test_ui_render_small_terminal() {
    // Must not panic when the terminal is cramped.
    let app = app();
    render(&app, 30, 8);
}
