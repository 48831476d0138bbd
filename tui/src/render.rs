//! Frame rendering.
//!
//! Each frame re-flows the page content for the current width, feeds the
//! resulting scroll metrics back to the app, and records the on-screen
//! regions of every interactive element into a [`LayoutMap`] for mouse
//! hit-testing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use brochure_engine::{App, FocusTarget, PanelShown};
use brochure_types::{LinkTarget, Page, SectionId};

use crate::layout::LayoutMap;
use crate::theme::{Glyphs, Palette, glyphs, palette};

/// Main draw function. Returns the layout map for the next frame's input.
pub fn draw(frame: &mut Frame, app: &mut App) -> LayoutMap {
    let options = app.view().ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let mut map = LayoutMap::default();

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, frame.area());

    let contact_height = contact_panel_height(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Min(1),                 // Sections
            Constraint::Length(contact_height), // Contact panel
            Constraint::Length(1),              // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs, &mut map);
    draw_sections(frame, app, chunks[1], &palette, &glyphs, &mut map);
    if contact_height > 0 {
        draw_contact(frame, app, chunks[2], &palette, &glyphs, &mut map);
    }
    draw_status_bar(frame, app, chunks[3], &palette);

    // The open menu overlays the section area, under the header.
    if app.menu_open() {
        draw_menu(frame, app, chunks[0], &palette, &glyphs, &mut map);
    }

    map
}

// ============================================================================
// Header and menu
// ============================================================================

fn draw_header(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    map: &mut LayoutMap,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.page().title().to_string(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, inner);

    if let Some(toggle) = app.page().nav_toggle() {
        let marker = if app.menu_open() {
            glyphs.menu_open
        } else {
            glyphs.menu_closed
        };
        let label = format!("[ {} {} ]", toggle.label(), marker);
        let width = label.width() as u16;
        let rect = Rect::new(
            inner.x + inner.width.saturating_sub(width),
            inner.y,
            width.min(inner.width),
            1,
        );
        let widget = Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(palette.text_primary),
        )));
        frame.render_widget(widget, rect);
        map.toggle = Some(rect);
    }
}

fn draw_menu(
    frame: &mut Frame,
    app: &App,
    header: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    map: &mut LayoutMap,
) {
    let Some(menu) = app.page().nav_menu() else {
        return;
    };

    let label_width = menu
        .links()
        .iter()
        .map(|link| link.label().width() + glyphs.link.width() + 1)
        .max()
        .unwrap_or(0) as u16;
    let width = (label_width + 4).min(frame.area().width);
    let height = (menu.links().len() as u16 + 2)
        .min(frame.area().height.saturating_sub(header.height));
    let x = frame.area().width.saturating_sub(width);
    let menu_area = Rect::new(x, header.bottom(), width, height);

    frame.render_widget(Clear, menu_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.bg_popup));
    let inner = block.inner(menu_area);
    frame.render_widget(block, menu_area);

    for (i, link) in menu.links().iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let line = Line::from(Span::styled(
            format!("{} {}", glyphs.link, link.label()),
            Style::default().fg(palette.link),
        ));
        frame.render_widget(Paragraph::new(line), rect);
        map.menu_links.push((rect, link.target().clone()));
    }
    map.menu = Some(menu_area);
}

// ============================================================================
// Section content
// ============================================================================

struct AnchorPos {
    line: u16,
    x: u16,
    width: u16,
    target: LinkTarget,
}

struct FlowedPage {
    lines: Vec<Line<'static>>,
    offsets: Vec<(SectionId, u16)>,
    anchors: Vec<AnchorPos>,
}

fn flow_page(page: &Page, width: u16, palette: &Palette, glyphs: &Glyphs) -> FlowedPage {
    let width = usize::from(width.max(1));
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut offsets = Vec::new();
    let mut anchors = Vec::new();

    for section in page.sections() {
        offsets.push((section.id().clone(), lines.len() as u16));

        if !section.title().is_empty() {
            lines.push(Line::from(Span::styled(
                section.title().to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        for paragraph in section.body().split('\n') {
            for wrapped in wrap_text(paragraph, width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(palette.text_secondary),
                )));
            }
        }

        if !section.links().is_empty() {
            let mut spans = Vec::new();
            let mut x = 0u16;
            for link in section.links() {
                let text = format!("{} {}", glyphs.link, link.label());
                let w = text.width() as u16;
                anchors.push(AnchorPos {
                    line: lines.len() as u16,
                    x,
                    width: w,
                    target: link.target().clone(),
                });
                spans.push(Span::styled(
                    text,
                    Style::default()
                        .fg(palette.link)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                spans.push(Span::raw("   "));
                x = x.saturating_add(w + 3);
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
    }

    FlowedPage {
        lines,
        offsets,
        anchors,
    }
}

fn draw_sections(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    map: &mut LayoutMap,
) {
    let text_area = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    let flowed = flow_page(app.page(), text_area.width, palette, glyphs);

    app.set_scroll_metrics(flowed.offsets, flowed.lines.len() as u16, text_area.height);
    let offset = app.view().offset();

    for anchor in &flowed.anchors {
        if anchor.line >= offset && anchor.line < offset + text_area.height {
            let rect = Rect::new(
                text_area.x + anchor.x,
                text_area.y + (anchor.line - offset),
                anchor.width,
                1,
            );
            map.anchors.push((rect, anchor.target.clone()));
        }
    }

    let widget = Paragraph::new(Text::from(flowed.lines)).scroll((offset, 0));
    frame.render_widget(widget, text_area);
}

// ============================================================================
// Contact panel
// ============================================================================

fn contact_panel_height(app: &App) -> u16 {
    match app.form() {
        Some(form) if form.shown() == PanelShown::Form => form.fields().len() as u16 + 3,
        Some(_) => 3,
        None => 0,
    }
}

fn draw_contact(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    map: &mut LayoutMap,
) {
    let Some(form) = app.form() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Contact ",
            Style::default().fg(palette.text_primary),
        ))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.shown() == PanelShown::Success {
        let message = app
            .page()
            .success_panel()
            .map(|panel| panel.message().to_string())
            .unwrap_or_default();
        let widget = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(widget, inner);
        return;
    }

    for (i, &field) in form.fields().iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, 1);
        let focused = app.focus() == FocusTarget::Field(field);
        let mut spans = vec![
            Span::styled(
                format!("{:<9}", format!("{}:", field.label())),
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(
                form.value(field).to_string(),
                Style::default().fg(palette.text_primary),
            ),
        ];
        if focused {
            spans.push(Span::styled(
                glyphs.cursor,
                Style::default().fg(palette.accent),
            ));
        }
        let mut line = Line::from(spans);
        if focused {
            line = line.style(Style::default().bg(palette.bg_popup));
        }
        frame.render_widget(Paragraph::new(line), rect);
        map.fields.push((rect, field));
    }

    let submit_y = inner.y + form.fields().len() as u16;
    if submit_y < inner.y + inner.height {
        let label = "[ Send Message ]";
        let focused = app.focus() == FocusTarget::Submit;
        let style = if focused {
            Style::default()
                .fg(palette.bg)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.accent)
        };
        let rect = Rect::new(inner.x, submit_y, (label.width() as u16).min(inner.width), 1);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rect);
        map.submit = Some(rect);
    }
}

// ============================================================================
// Status bar
// ============================================================================

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut hints = Vec::new();
    if app.form().is_some() {
        hints.push("Tab fields");
        hints.push("Enter send");
    }
    if app.page().nav_toggle().is_some() {
        hints.push("m menu");
    }
    hints.push("Up/Dn scroll");
    hints.push("q quit");

    let line = Line::from(Span::styled(
        hints.join("  |  "),
        Style::default().fg(palette.text_muted),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Text flow
// ============================================================================

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0usize;

    for word in text.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        let word_w = word.width();
        if current_w + sep + word_w <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_w += sep + word_w;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if word_w <= width {
            current.push_str(word);
            current_w = word_w;
        } else {
            // Hard-break a word wider than the viewport.
            for ch in word.chars() {
                let ch_w = ch.width().unwrap_or(0);
                if current_w + ch_w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_w = 0;
                }
                current.push(ch);
                current_w += ch_w;
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
