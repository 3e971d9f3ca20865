//! Immich TUI Application
//!
//! A terminal user interface for browsing the albums of an Immich server.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

use immich_sdk::{
    AlbumResponseDto, AssetResponseDto, ClientOptions, GetAlbumParams, ImmichClient,
    ListAlbumsParams,
};

/// Assets shown per page in the asset table.
const PAGE_SIZE: usize = 15;

// ============================================================================
// Application State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum AppScreen {
    /// Server URL and API key entry
    ConnectInput,
    LoadingAlbums,
    AlbumList,
    LoadingAssets,
    /// Assets of the selected album, paged locally
    AlbumAssets,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum InputField {
    Url,
    ApiKey,
}

/// A single-line text input with a cursor counted in characters.
#[derive(Debug, Default)]
struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    fn with_value(value: String) -> Self {
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    fn home(&mut self) {
        self.cursor = 0;
    }

    fn end(&mut self) {
        self.cursor = self.value.chars().count();
    }
}

struct AppState {
    screen: AppScreen,
    url: TextInput,
    api_key: TextInput,
    focus: InputField,
    client: Option<ImmichClient>,
    albums: Vec<AlbumResponseDto>,
    selected_album: usize,
    /// Assets of the album opened last
    assets: Vec<AssetResponseDto>,
    /// Current page (0-indexed)
    page: usize,
    selected_row: usize,
    error_message: Option<String>,
    should_quit: bool,
}

impl AppState {
    /// Prefill the connection form from `IMMICH_URL` / `IMMICH_API_KEY`.
    fn new() -> Self {
        let url = std::env::var("IMMICH_URL").unwrap_or_else(|_| "http://localhost:2283".into());
        let api_key = std::env::var("IMMICH_API_KEY").unwrap_or_default();
        Self {
            screen: AppScreen::ConnectInput,
            url: TextInput::with_value(url),
            api_key: TextInput::with_value(api_key),
            focus: InputField::Url,
            client: None,
            albums: Vec::new(),
            selected_album: 0,
            assets: Vec::new(),
            page: 0,
            selected_row: 0,
            error_message: None,
            should_quit: false,
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            InputField::Url => &mut self.url,
            InputField::ApiKey => &mut self.api_key,
        }
    }

    /// Build the client. Logging stays off so it cannot scribble over the UI.
    fn init_client(&mut self) -> Result<(), String> {
        if self.api_key.value.trim().is_empty() {
            return Err("An API key is required".to_string());
        }
        let options = ClientOptions {
            enable_logging: false,
            max_retries: 2,
            ..Default::default()
        };
        let client =
            ImmichClient::with_options(self.url.value.trim(), self.api_key.value.trim(), options)
                .map_err(|e| format!("Failed to create client: {e}"))?;
        self.client = Some(client);
        Ok(())
    }

    fn fetch_albums(&mut self) -> Result<(), String> {
        let client = self.client.as_ref().ok_or("Client not initialized")?;
        let mut albums = client
            .albums()
            .list(&ListAlbumsParams::default())
            .map_err(|e| format!("Failed to fetch albums: {e}"))?;
        if albums.is_empty() {
            return Err("No albums found".to_string());
        }
        albums.sort_by(|a, b| a.album_name.to_lowercase().cmp(&b.album_name.to_lowercase()));
        self.albums = albums;
        self.selected_album = 0;
        Ok(())
    }

    fn fetch_assets(&mut self) -> Result<(), String> {
        let client = self.client.as_ref().ok_or("Client not initialized")?;
        let album = self
            .albums
            .get(self.selected_album)
            .ok_or("No album selected")?;
        let detail = client
            .albums()
            .get(&album.id, &GetAlbumParams::default())
            .map_err(|e| format!("Failed to fetch album: {e}"))?;
        self.assets = detail.assets;
        self.page = 0;
        self.selected_row = 0;
        Ok(())
    }

    fn page_count(&self) -> usize {
        page_count(self.assets.len(), PAGE_SIZE)
    }

    fn page_assets(&self) -> &[AssetResponseDto] {
        let start = (self.page * PAGE_SIZE).min(self.assets.len());
        let end = (start + PAGE_SIZE).min(self.assets.len());
        &self.assets[start..end]
    }

    fn clear_error(&mut self) {
        self.error_message = None;
    }

    fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }
}

// ============================================================================
// Terminal Setup
// ============================================================================

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ============================================================================
// UI Rendering
// ============================================================================

fn title_block(text: String) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn help_line(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_connect_input(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // URL
            Constraint::Length(3), // API key
            Constraint::Length(2), // Help
            Constraint::Min(1),
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    f.render_widget(title_block("Immich Browser".into()), chunks[0]);

    let field = |title: &'static str, text: String, focused: bool| {
        let border = if focused { Color::Yellow } else { Color::DarkGray };
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
    };

    let masked_key = "*".repeat(state.api_key.value.chars().count());
    f.render_widget(
        field(" Server URL ", state.url.value.clone(), state.focus == InputField::Url),
        chunks[1],
    );
    f.render_widget(
        field(" API key ", masked_key, state.focus == InputField::ApiKey),
        chunks[2],
    );

    let (area, input) = match state.focus {
        InputField::Url => (chunks[1], &state.url),
        InputField::ApiKey => (chunks[2], &state.api_key),
    };
    f.set_cursor_position((area.x + input.cursor as u16 + 1, area.y + 1));

    f.render_widget(
        help_line("Tab: Switch field | Enter: Connect | Esc: Quit"),
        chunks[3],
    );
    render_status_bar(f, chunks[5], state);
}

fn render_loading(f: &mut Frame, state: &AppState, message: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    f.render_widget(title_block("Immich Browser".into()), chunks[0]);
    let loading = Paragraph::new(format!("{message}..."))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, chunks[1]);
    render_status_bar(f, chunks[3], state);
}

fn render_album_list(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(f.area());

    f.render_widget(
        title_block(format!("Albums ({})", state.albums.len())),
        chunks[0],
    );

    let rows: Vec<Row> = state
        .albums
        .iter()
        .enumerate()
        .map(|(i, a)| {
            Row::new(vec![
                Cell::from(truncate(&a.album_name, 30)),
                Cell::from(a.asset_count.to_string()),
                Cell::from(if a.shared { "yes" } else { "" }),
                Cell::from(a.created_at.get(..10).unwrap_or(&a.created_at).to_string()),
            ])
            .style(selected_style(i == state.selected_album))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(32),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Name", "Assets", "Shared", "Created"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title(" Albums "));
    f.render_widget(table, chunks[1]);

    f.render_widget(
        help_line("Enter: Open | r: Reload | Esc: Back | q: Quit"),
        chunks[2],
    );
    render_status_bar(f, chunks[3], state);
}

fn render_album_assets(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(f.area());

    let album_name = state
        .albums
        .get(state.selected_album)
        .map(|a| a.album_name.as_str())
        .unwrap_or("Unknown");
    f.render_widget(
        title_block(format!(
            "{} | Page {}/{}",
            album_name,
            state.page + 1,
            state.page_count()
        )),
        chunks[0],
    );

    let rows: Vec<Row> = state
        .page_assets()
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let size = a
                .exif_info
                .as_ref()
                .and_then(|e| e.file_size_in_byte)
                .map(format_bytes)
                .unwrap_or_default();
            Row::new(vec![
                Cell::from(truncate(&a.original_file_name, 30)),
                Cell::from(format!("{:?}", a.asset_type)),
                Cell::from(size),
                Cell::from(a.local_date_time.get(..10).unwrap_or(&a.local_date_time).to_string()),
                Cell::from(if a.is_favorite { "*" } else { "" }),
            ])
            .style(selected_style(i == state.selected_row))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(32),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Min(3),
        ],
    )
    .header(
        Row::new(vec!["File", "Type", "Size", "Taken", "Fav"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title(" Assets "));
    f.render_widget(table, chunks[1]);

    f.render_widget(
        help_line("n: Next | p: Prev | a: Albums | q: Quit"),
        chunks[2],
    );
    render_status_bar(f, chunks[3], state);
}

fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let (text, color) = match &state.error_message {
        Some(error) => (format!(" Error: {error}"), Color::Red),
        None if state.client.is_some() => {
            (format!(" Connected to: {}", state.url.value), Color::Green)
        }
        None => (" Not connected".to_string(), Color::DarkGray),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

fn render(f: &mut Frame, state: &AppState) {
    match state.screen {
        AppScreen::ConnectInput => render_connect_input(f, state),
        AppScreen::LoadingAlbums => render_loading(f, state, "Loading albums"),
        AppScreen::AlbumList => render_album_list(f, state),
        AppScreen::LoadingAssets => render_loading(f, state, "Loading album"),
        AppScreen::AlbumAssets => render_album_assets(f, state),
    }
}

// ============================================================================
// Event Handling
// ============================================================================

fn handle_connect_input(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Char(c) => {
            state.focused_input().insert(c);
            state.clear_error();
        }
        KeyCode::Backspace => {
            state.focused_input().backspace();
            state.clear_error();
        }
        KeyCode::Delete => {
            state.focused_input().delete();
            state.clear_error();
        }
        KeyCode::Left => state.focused_input().left(),
        KeyCode::Right => state.focused_input().right(),
        KeyCode::Home => state.focused_input().home(),
        KeyCode::End => state.focused_input().end(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.focus = match state.focus {
                InputField::Url => InputField::ApiKey,
                InputField::ApiKey => InputField::Url,
            };
        }
        KeyCode::Enter => match state.init_client() {
            Ok(()) => state.screen = AppScreen::LoadingAlbums,
            Err(e) => state.set_error(e),
        },
        KeyCode::Esc => state.should_quit = true,
        _ => {}
    }
}

fn handle_album_list(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Up => state.selected_album = state.selected_album.saturating_sub(1),
        KeyCode::Down => {
            if state.selected_album + 1 < state.albums.len() {
                state.selected_album += 1;
            }
        }
        KeyCode::Enter => {
            state.clear_error();
            state.screen = AppScreen::LoadingAssets;
        }
        KeyCode::Char('r') => {
            state.clear_error();
            state.screen = AppScreen::LoadingAlbums;
        }
        KeyCode::Esc => {
            state.client = None;
            state.screen = AppScreen::ConnectInput;
        }
        _ => {}
    }
}

fn handle_album_assets(event: KeyEvent, state: &mut AppState) {
    match event.code {
        KeyCode::Up => state.selected_row = state.selected_row.saturating_sub(1),
        KeyCode::Down => {
            if state.selected_row + 1 < state.page_assets().len() {
                state.selected_row += 1;
            }
        }
        KeyCode::Char('n') => {
            if state.page + 1 < state.page_count() {
                state.page += 1;
                state.selected_row = 0;
            }
        }
        KeyCode::Char('p') => {
            if state.page > 0 {
                state.page -= 1;
                state.selected_row = 0;
            }
        }
        KeyCode::Char('a') | KeyCode::Esc => {
            state.screen = AppScreen::AlbumList;
            state.clear_error();
        }
        _ => {}
    }
}

fn handle_event(event: Event, state: &mut AppState) {
    if let Event::Key(key_event) = event {
        // 'q' quits everywhere except while typing in the connection form
        if key_event.code == KeyCode::Char('q')
            && state.screen != AppScreen::ConnectInput
            && key_event.modifiers == KeyModifiers::NONE
        {
            state.should_quit = true;
            return;
        }

        match state.screen {
            AppScreen::ConnectInput => handle_connect_input(key_event, state),
            AppScreen::AlbumList => handle_album_list(key_event, state),
            AppScreen::AlbumAssets => handle_album_assets(key_event, state),
            _ => {}
        }
    }
}

// ============================================================================
// Application Logic
// ============================================================================

/// Run the fetch a loading screen stands for, then move on.
fn process_state(state: &mut AppState) {
    match state.screen {
        AppScreen::LoadingAlbums => match state.fetch_albums() {
            Ok(()) => state.screen = AppScreen::AlbumList,
            Err(e) => {
                state.set_error(e);
                state.screen = AppScreen::ConnectInput;
            }
        },
        AppScreen::LoadingAssets => match state.fetch_assets() {
            Ok(()) => state.screen = AppScreen::AlbumAssets,
            Err(e) => {
                state.set_error(e);
                state.screen = AppScreen::AlbumList;
            }
        },
        _ => {}
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Number of pages needed for `len` items; at least one.
fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Human-readable byte count, e.g. `2.4 MB`.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Cut `s` to at most `max` characters, marking the cut with `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

// ============================================================================
// Main Application
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let mut state = AppState::new();

    loop {
        terminal.draw(|f| render(f, &state))?;

        process_state(&mut state);

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            handle_event(event, &mut state);
        }
    }

    restore_terminal(&mut terminal)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_multibyte_text() {
        let mut input = TextInput::with_value("héllo".into());
        input.left();
        input.backspace();
        assert_eq!(input.value, "hélo");
        input.home();
        input.right();
        input.delete();
        assert_eq!(input.value, "hlo");
        input.insert('é');
        assert_eq!(input.value, "hélo");
    }

    #[test]
    fn pages_round_up_and_never_reach_zero() {
        assert_eq!(page_count(0, 15), 1);
        assert_eq!(page_count(15, 15), 1);
        assert_eq!(page_count(16, 15), 2);
    }

    #[test]
    fn helpers_format_for_table_cells() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2 * 1024 * 1024 + 400 * 1024), "2.4 MB");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-file-name.jpg", 10), "a-very-...");
    }
}
