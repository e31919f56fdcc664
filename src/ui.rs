//! UI drawing - turns a RenderState into widgets
//!
//! Drawing is a pure function of the render state. Nothing here mutates
//! state; interaction goes back to the app actor as UiEvents.

use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::components::codelab::{PhotographerCard, BODY_LINES, FAVORITE_ICON, TOP_BAR_TITLE};
use crate::components::{counter, image_row, list};
use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;
use crate::models::{ImageStatus, Rgba};

/// Primary text color for greetings
const PRIMARY: Color = Color::Rgb(98, 0, 238);

/// Terminal color for an RGBA value; `None` for fully transparent
pub fn to_color(rgba: Rgba) -> Option<Color> {
    if rgba.is_transparent() {
        return None;
    }
    let (r, g, b) = rgba.over_black();
    Some(Color::Rgb(r, g, b))
}

/// Tab bar, content and status bar
fn main_chunks(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1), // Tab bar
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status bar
    ])
    .areas(area)
}

/// Title header, greeting list and counter button
fn sample_list_chunks(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .areas(area)
}

/// Scroll buttons and image list
fn simple_list_chunks(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area)
}

/// Rows available to (greeting list, image list) in a terminal of `area`
pub fn viewport_rows(area: Rect) -> (u16, u16) {
    let [_, content, _] = main_chunks(area);
    let [_, names, _] = sample_list_chunks(content);
    let [_, images] = simple_list_chunks(content);
    (names.height, images.height)
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let [tabs, content, status] = main_chunks(area);

    f.render_widget(render_tabs(state.active_tab), tabs);

    match state.active_tab {
        AppTab::SampleList => draw_sample_list(f, state, content),
        AppTab::SimpleList => draw_simple_list(f, state, content),
        AppTab::Codelab => draw_codelab(f, content),
    }

    draw_status_bar(f, state, status);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Renders tabs
pub fn render_tabs(active: AppTab) -> Tabs<'static> {
    let titles: Vec<Line> = AppTab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!(" {}:{} ", i + 1, t.title())))
        .collect();

    Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        .divider("|")
}

// ============================================================================
// Sample List
// ============================================================================

fn draw_sample_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let [header, names, button] = sample_list_chunks(area);

    let title = Paragraph::new(Line::from(state.title).bold())
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(1)));
    f.render_widget(title, header);

    let lines = label_lines(state, names.width);
    f.render_widget(Paragraph::new(lines), names);

    draw_counter(f, state.counter, button);
}

/// Lines for the materialized greetings: one per label, separators between
/// consecutive labels only.
pub fn label_lines(state: &RenderState, width: u16) -> Vec<Line<'static>> {
    let separator = format!(" {} ", "─".repeat(width.saturating_sub(2) as usize));
    let mut lines = Vec::new();

    for label in state.visible_labels() {
        let focused = label.index == state.cursor;
        let marker = if focused { "› " } else { "  " };

        let mut style = Style::default().fg(PRIMARY);
        if let Some(bg) = to_color(label.background) {
            style = style.bg(bg).fg(Color::White);
        }
        if focused {
            style = style.bold();
        }

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(label.text.clone(), style),
        ];
        if label.selected {
            spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));

        if list::has_separator_after(label.index, state.labels_len) {
            lines.push(Line::styled(separator.clone(), Style::default().fg(Color::DarkGray)));
        }
    }

    lines
}

/// Counter button line: the count is styled apart from the text around it
pub fn counter_line(count: u32) -> Line<'static> {
    let (before, value, after) = counter::label_parts(count);
    let count_color = to_color(counter::COUNT_COLOR).unwrap_or(Color::Red);
    Line::from(vec![
        Span::raw(before),
        Span::styled(value, Style::default().fg(count_color).bold()),
        Span::raw(after),
    ])
}

fn draw_counter(f: &mut Frame, count: u32, area: Rect) {
    let line = counter_line(count);
    let width = (line.width() as u16 + 4).min(area.width);
    let [button] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let bg = to_color(counter::background(count)).unwrap_or(Color::White);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg).fg(Color::Black))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Black)));
    f.render_widget(widget, button);
}

// ============================================================================
// Simple List
// ============================================================================

fn draw_simple_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let [buttons, rows] = simple_list_chunks(area);

    let [top, end] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .flex(Flex::SpaceAround)
        .areas(buttons);
    let button = Style::default().fg(Color::Black).bg(Color::Cyan);
    f.render_widget(
        Paragraph::new(Line::styled(" Scroll to the top (t) ", button)).alignment(Alignment::Center),
        top,
    );
    f.render_widget(
        Paragraph::new(Line::styled(" Scroll to the end (e) ", button)).alignment(Alignment::Center),
        end,
    );

    f.render_widget(Paragraph::new(image_lines(state)), rows);
}

pub fn image_lines(state: &RenderState) -> Vec<Line<'static>> {
    let glyph = image_row::avatar_glyph(&state.image_status);
    let cells = image_row::avatar_cells(state.avatar_size) as usize;
    let avatar_style = if state.image_status.is_loaded() {
        Style::default().fg(Color::Green)
    } else if matches!(state.image_status, ImageStatus::Failed(_)) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    state
        .visible_image_rows()
        .map(|index| {
            Line::from(vec![
                Span::styled(format!("{:^width$}", glyph, width = cells), avatar_style),
                Span::raw(" "),
                Span::raw(image_row::item_label(index)),
            ])
        })
        .collect()
}

// ============================================================================
// Codelab
// ============================================================================

fn draw_codelab(f: &mut Frame, area: Rect) {
    let [top_bar, body, card] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(4),
    ])
    .areas(area);

    let bar_style = Style::default().fg(Color::White).bg(PRIMARY);
    let [title, action] = Layout::horizontal([Constraint::Min(0), Constraint::Length(5)]).areas(top_bar);
    f.render_widget(Paragraph::new(format!(" {}", TOP_BAR_TITLE)).style(bar_style.bold()), title);
    f.render_widget(
        Paragraph::new(format!("{} f", FAVORITE_ICON))
            .alignment(Alignment::Center)
            .style(bar_style),
        action,
    );

    let body_lines: Vec<Line> = BODY_LINES.iter().map(|l| Line::from(*l)).collect();
    f.render_widget(
        Paragraph::new(body_lines).block(Block::default().padding(Padding::uniform(1))),
        body,
    );

    draw_photographer_card(f, &PhotographerCard::default(), card);
}

fn draw_photographer_card(f: &mut Frame, card: &PhotographerCard, area: Rect) {
    let [card_area] = Layout::horizontal([Constraint::Length(30)]).areas(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(PRIMARY));

    let avatar = Span::styled("( ) ", Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(vec![avatar.clone(), Span::styled(card.name, Style::default().bold())]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(card.last_seen, Style::default().fg(Color::Gray).dim()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(block), card_area);
}

// ============================================================================
// Chrome
// ============================================================================

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = match state.active_tab {
        AppTab::SampleList => " ↑/↓:move | Enter:select | c:count | ?:help | q:quit ".to_string(),
        AppTab::SimpleList => format!(
            " t:top | e:end | #{}/{} | {} | ?:help | q:quit ",
            state.images_first,
            state.images_len,
            state.image_status.describe()
        ),
        AppTab::Codelab => " f:favorite | ?:help | q:quit ".to_string(),
    };

    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = format!(
        r#"
 {} v{} - Keyboard Shortcuts

 SCREENS
   1 / 2 / 3          Sample List / Simple List / Codelab

 SAMPLE LIST
   ↑ / ↓  k / j       Move focus
   PgUp / PgDn        Move focus by a page
   Home / End         First / last greeting
   Enter / Space      Select or deselect greeting
   c / +              Click the counter

 SIMPLE LIST
   t / Home           Scroll to the top
   e / End            Scroll to the end

 CODELAB
   f                  Favorite
   Enter              Click the card

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
