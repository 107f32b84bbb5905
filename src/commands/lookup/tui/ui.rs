use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::commands::lookup::state::{ApplicationState, RequestState};
use crate::infra::github::{FetchError, Repository, UserProfile};

use super::app::{App, Focus};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Height of the profile panel including borders.
const PROFILE_HEIGHT: u16 = 8;
/// Fixed width for the repository line prefix: "  " = 2 chars
const ITEM_PREFIX_WIDTH: usize = 2;
/// Minimum width for a repository description
const MIN_DESCRIPTION_WIDTH: usize = 20;

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let has_error = app.error_message.is_some();
    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Length(PROFILE_HEIGHT),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ];
    if has_error {
        constraints.push(Constraint::Length(1));
    }
    let areas = Layout::vertical(constraints).split(area);

    let spinner = SPINNER[app.spinner_frame % SPINNER.len()];
    let focus = app.focus;
    let (state, list_state) = app.view_parts();

    render_input(
        frame,
        areas[0],
        " Username ",
        &state.username_input,
        focus == Focus::Username,
    );
    render_profile(frame, areas[1], &state.profile, spinner);
    render_input(
        frame,
        areas[2],
        " Filter repositories ",
        &state.filter_input,
        focus == Focus::Filter,
    );
    render_repositories(frame, areas[3], state, list_state, spinner);
    render_help(frame, areas[4]);

    if has_error {
        render_error(frame, areas[5], app.error_message.as_deref().unwrap_or(""));
    }
}

/// Renders a single-line text input, placing the cursor when focused.
fn render_input(frame: &mut Frame, area: Rect, title: &str, text: &str, focused: bool) {
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };
    let input = Paragraph::new(text.to_string()).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);

    if focused {
        let max_x = area.x + area.width.saturating_sub(2);
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(width).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Renders the profile panel for whatever state the profile slot is in.
fn render_profile(frame: &mut Frame, area: Rect, slot: &RequestState<UserProfile>, spinner: &str) {
    let lines = match slot {
        RequestState::Idle => vec![hint_line("Type a GitHub username and press Enter.")],
        RequestState::Pending(_) => vec![loading_line(spinner, "Loading profile...")],
        RequestState::Failed(err) => vec![error_line(err)],
        RequestState::Ready(profile) => profile_lines(profile),
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Profile ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn profile_lines(profile: &UserProfile) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw("  "),
        Span::styled(
            profile.display_name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" (@{})", profile.login),
            Style::default().fg(Color::Gray),
        ),
    ])];

    if !profile.bio.is_empty() {
        lines.push(Line::from(format!("  {}", profile.bio)));
    }

    let details: Vec<String> = [
        ("Company", &profile.company),
        ("Location", &profile.location),
        ("Blog", &profile.blog),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect();
    if !details.is_empty() {
        lines.push(Line::from(format!("  {}", details.join("  "))));
    }

    lines.push(Line::from(format!(
        "  Followers: {}  Following: {}  Public repos: {}",
        profile.followers, profile.following, profile.public_repos
    )));
    lines.push(Line::styled(
        format!("  Avatar: {}", profile.avatar_url),
        Style::default().fg(Color::DarkGray),
    ));

    lines
}

/// Renders the repository list, filtered by the live filter text.
fn render_repositories(
    frame: &mut Frame,
    area: Rect,
    state: &ApplicationState,
    list_state: &mut ListState,
    spinner: &str,
) {
    let block = |title: String| {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    };

    let repos = match &state.repositories {
        RequestState::Ready(repos) => repos,
        other => {
            let line = match other {
                RequestState::Pending(_) => loading_line(spinner, "Loading repositories..."),
                RequestState::Failed(err) => error_line(err),
                _ => hint_line("Repositories appear once a profile is loaded."),
            };
            let panel = Paragraph::new(line).block(block(" Repositories ".to_string()));
            frame.render_widget(panel, area);
            return;
        }
    };

    let visible = state.visible_repositories();
    let title = format!(" Repositories ({}/{}) ", visible.len(), repos.len());

    if visible.is_empty() {
        let message = if repos.is_empty() {
            "No public repositories.".to_string()
        } else {
            format!("No repositories match \"{}\".", state.filter_input)
        };
        let panel = Paragraph::new(hint_line(&message)).block(block(title));
        frame.render_widget(panel, area);
        return;
    }

    let term_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .map(|repo| create_repository_item(repo, term_width))
        .collect();

    let list = List::new(items)
        .block(block(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">");

    frame.render_stateful_widget(list, area, list_state);
}

/// Creates a two-line list item for a repository.
fn create_repository_item(repo: &Repository, term_width: usize) -> ListItem<'static> {
    let mut line1 = vec![
        Span::raw(" "),
        Span::styled(
            repo.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("★ {}", repo.stargazers_count),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("  forks {}  watchers {}", repo.forks_count, repo.watchers_count),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if !repo.language.is_empty() {
        line1.push(Span::styled(
            format!("  {}", repo.language),
            Style::default().fg(Color::Cyan),
        ));
    }

    let description_width = calculate_description_width(term_width);
    let line2 = Line::from(vec![
        Span::raw("   "),
        Span::styled(
            truncate(&repo.description, description_width),
            Style::default().fg(Color::Gray),
        ),
    ]);

    ListItem::new(vec![Line::from(line1), line2])
}

fn hint_line(message: &str) -> Line<'static> {
    Line::styled(
        format!("  {message}"),
        Style::default().fg(Color::DarkGray),
    )
}

fn loading_line(spinner: &str, message: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {spinner} "), Style::default().fg(Color::Yellow)),
        Span::raw(message.to_string()),
    ])
}

fn error_line(err: &FetchError) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "  Error: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(err.to_string(), Style::default().fg(Color::Red)),
    ])
}

/// Renders the help bar at the bottom.
fn render_help(frame: &mut Frame, area: Rect) {
    let help_text = Line::from(vec![
        Span::styled("  Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": search  "),
        Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": switch field  "),
        Span::styled("↑/↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": move  "),
        Span::styled("^O", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": open  "),
        Span::styled("^R", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": reset  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": quit"),
    ]);

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Renders a transient UI error (e.g. the browser failed to open).
fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let error_text = Line::from(vec![
        Span::styled(
            "  Error: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
    ]);

    frame.render_widget(Paragraph::new(error_text), area);
}

/// Calculates the available width for a repository description.
fn calculate_description_width(term_width: usize) -> usize {
    // The highlight symbol takes one more column than the prefix.
    let fixed_width = ITEM_PREFIX_WIDTH + 2;
    if term_width > fixed_width + MIN_DESCRIPTION_WIDTH {
        term_width - fixed_width
    } else {
        MIN_DESCRIPTION_WIDTH
    }
}

/// Truncates a string to fit within the specified display width.
/// Uses unicode display width for proper handling of CJK characters.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        s.to_string()
    } else if max_width < 3 {
        truncate_to_width(s, max_width)
    } else {
        format!("{}...", truncate_to_width(s, max_width - 3))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
