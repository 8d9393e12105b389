use crate::ui::app::App;
use crate::ui::card::TeamCard;
use crate::ui::page::{Placed, STRIP_HEIGHT};
use crate::ui::shell::{PageShell, Route, ShellLayout, LOGIN_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg)),
        area,
    );

    let layout = PageShell::layout(area);
    render_bar(frame, app, &layout);

    match app.router.current() {
        Route::Home => render_home(frame, app, now),
        Route::Login => render_login(frame, app, layout.content),
        Route::NotFound(path) => render_not_found(frame, app, layout.content, path),
    }
}

fn render_bar(frame: &mut Frame, app: &App, layout: &ShellLayout) {
    let theme = &app.theme;
    let brand = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", app.shell.brand()),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    )
    .style(Style::default().bg(theme.bg));
    frame.render_widget(brand, layout.bar);

    let button = Paragraph::new(LOGIN_LABEL).style(
        Style::default()
            .fg(theme.secondary)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(button, layout.login_button);
}

fn render_home(frame: &mut Frame, app: &App, now: Instant) {
    let layout = app.home_layout();

    if let Some(placed) = layout.intro {
        render_intro(frame, app, placed);
    }
    if let Some(placed) = layout.team_title {
        render_team_title(frame, app, placed);
    }
    if let Some(placed) = layout.strip {
        render_strip(frame, app, placed, now);
    }
    if let Some(placed) = layout.footer {
        render_footer(frame, app, placed);
    }
}

fn render_intro(frame: &mut Frame, app: &App, placed: Placed) {
    let theme = &app.theme;
    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::styled("  ▸ ", Style::default().fg(theme.accent)),
            Span::styled(text, Style::default().fg(theme.fg)),
        ])
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Small teams deserve serious tools.",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "We build the boring, reliable software that lets five people do the work of fifty.",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(""),
        bullet("Sync that survives bad networks"),
        bullet("Pricing that does not punish growth"),
        bullet("Support from the people who wrote the code"),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("Scroll down to meet the people behind {}.", app.shell.brand()),
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(Span::styled("↓", Style::default().fg(theme.accent))),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .scroll((placed.skip_rows, 0));
    frame.render_widget(paragraph, placed.area);
}

fn render_team_title(frame: &mut Frame, app: &App, placed: Placed) {
    let theme = &app.theme;
    let count = app.showcase.members().len();
    let title = Line::from(vec![
        Span::styled(
            "Meet the team",
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({count})"), Style::default().fg(theme.fg_dim)),
    ]);
    let paragraph = Paragraph::new(vec![title]).scroll((placed.skip_rows, 0));
    frame.render_widget(paragraph, placed.area);
}

fn render_strip(frame: &mut Frame, app: &App, placed: Placed, now: Instant) {
    let theme = &app.theme;
    let showcase = &app.showcase;

    if showcase.members().is_empty() {
        let hint = Paragraph::new("No team members to show yet.")
            .style(Style::default().fg(theme.fg_dim))
            .alignment(Alignment::Center);
        frame.render_widget(hint, placed.area);
        return;
    }

    let class = app.viewport_class();
    let focused = showcase.focused_member().map(|m| m.id);
    for slot in showcase.layout(placed.area, class, now) {
        let Some(member) = showcase.members().get(slot.index) else {
            continue;
        };
        let card = TeamCard::new(member, showcase.target_style(member.id, class), theme)
            .slot(&slot)
            .focused(focused == Some(member.id))
            .crossfading(showcase.is_crossfading(member.id, now));
        card.render_scrolled(slot.area, placed.skip_rows, STRIP_HEIGHT, frame.buffer_mut());
    }
}

fn render_footer(frame: &mut Frame, app: &App, placed: Placed) {
    let theme = &app.theme;
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "[←→/hl] Focus  [Enter/click] Expand  [↑↓/jk] Scroll  [L] Login  [t] Theme  [q] Quit",
            Style::default().fg(theme.fg_dim),
        )),
        Line::from(Span::styled(
            format!("© {}", app.shell.brand()),
            Style::default().fg(theme.fg_dim),
        )),
    ];
    let paragraph = Paragraph::new(text).scroll((placed.skip_rows, 0));
    frame.render_widget(paragraph, placed.area);
}

fn back_hint(app: &App) -> Line<'static> {
    let hint = if app.router.can_go_back() {
        "[Esc] Back"
    } else {
        "[q] Quit"
    };
    Line::from(Span::styled(hint, Style::default().fg(app.theme.fg_dim)))
}

/// Centered box of at most `width` x `height` inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(middle.width)),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sign-in is not available in this preview.",
            Style::default().fg(theme.fg),
        )),
        Line::from(""),
        back_hint(app),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Login ")
                .border_style(Style::default().fg(theme.secondary)),
        );
    frame.render_widget(paragraph, centered(area, 50, 7));
}

fn render_not_found(frame: &mut Frame, app: &App, area: Rect, path: &str) {
    let theme = &app.theme;
    let text = vec![
        Line::from(Span::styled(
            format!("Nothing lives at {path}"),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        back_hint(app),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered(area, 50, 3));
}
