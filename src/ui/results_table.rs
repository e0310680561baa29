use crate::gacha::types::Rarity;
use crate::report::DrawReport;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Normal => Color::Gray,
        Rarity::Rare => Color::Cyan,
        Rarity::SuperRare => Color::Yellow,
    }
}

/// Renders a resolved run as a table, one row per roll.
pub fn draw_results(f: &mut Frame, area: Rect, report: &DrawReport) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(13),   // Results table
            Constraint::Length(2), // Summary
            Constraint::Length(1), // Controls
        ])
        .split(area);

    let title = Paragraph::new(format!("Ten-Pull Results    Seed: {}", report.seed))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let header = Row::new(vec!["Roll", "Slot", "Name", "Rarity"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = report
        .results
        .iter()
        .map(|result| {
            let mut style = Style::default().fg(rarity_color(result.rarity));
            if result.rarity == Rarity::SuperRare {
                style = style.add_modifier(Modifier::BOLD);
            }
            Row::new(vec![
                Cell::from(result.roll.to_string()),
                Cell::from(result.slot_id.to_string()),
                Cell::from(result.slot_name.clone()),
                Cell::from(result.rarity.name()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" Draws "));
    f.render_widget(table, chunks[1]);

    let (normal, rare, super_rare) = report.rarity_counts();
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Normal: {}  ", normal),
            Style::default().fg(rarity_color(Rarity::Normal)),
        ),
        Span::styled(
            format!("Rare: {}  ", rare),
            Style::default().fg(rarity_color(Rarity::Rare)),
        ),
        Span::styled(
            format!("Super Rare: {}", super_rare),
            Style::default().fg(rarity_color(Rarity::SuperRare)),
        ),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(summary, chunks[2]);

    let controls = Paragraph::new("[Enter] New Seed    [r] Random Again    [q] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(controls, chunks[3]);
}
