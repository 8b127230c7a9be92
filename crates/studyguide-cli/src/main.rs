mod render;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env, fs,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
    time::SystemTime,
};
use studyguide_config::Config;
use studyguide_engine::{guide::guide_title, parse_document, read_guide, resolve_guide_path};

const USAGE: &str = "Usage: studyguide-cli [--print] [GUIDE]";

struct App {
    title: String,
    lines: Vec<Line<'static>>,
    scroll: u16,
    page: u16,
}

impl App {
    fn new(title: String, lines: Vec<Line<'static>>) -> Self {
        Self {
            title,
            lines,
            scroll: 0,
            page: 10,
        }
    }

    fn max_scroll(&self) -> u16 {
        u16::try_from(self.lines.len().saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_down(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_add(by).min(self.max_scroll());
    }

    fn scroll_up(&mut self, by: u16) {
        self.scroll = self.scroll.saturating_sub(by);
    }

    fn top(&mut self) {
        self.scroll = 0;
    }

    fn bottom(&mut self) {
        self.scroll = self.max_scroll();
    }
}

struct Args {
    print: bool,
    guide: Option<PathBuf>,
}

/// Parses the arguments after the program name.
fn parse_args(args: impl IntoIterator<Item = String>) -> Option<Args> {
    let mut parsed = Args {
        print: false,
        guide: None,
    };
    for arg in args {
        match arg.as_str() {
            "--print" => parsed.print = true,
            flag if flag.starts_with("--") => return None,
            path if parsed.guide.is_none() => parsed.guide = Some(PathBuf::from(path)),
            _ => return None,
        }
    }
    Some(parsed)
}

/// Most recently modified markdown file in `dir`.
fn latest_guide(dir: &Path) -> Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }
        let modified = fs::metadata(&path)?.modified()?;
        if newest.as_ref().is_none_or(|(time, _)| modified > *time) {
            newest = Some((modified, path));
        }
    }
    Ok(newest.map(|(_, path)| path))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let Some(cli) = parse_args(env::args().skip(1)) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    let config_path = Config::config_path();
    let needs_config = cli.guide.as_ref().is_none_or(|g| g.is_relative());
    let guides_root = if needs_config {
        match Config::load() {
            Ok(config) => config.map(|c| c.guides_path),
            Err(e) => {
                log::warn!("ignoring config file {}: {e}", config_path.display());
                None
            }
        }
    } else {
        None
    };

    let guide_path = match (cli.guide, guides_root.as_deref()) {
        (Some(arg), root) => resolve_guide_path(&arg, root),
        (None, Some(root)) => match latest_guide(root)? {
            Some(path) => path,
            None => {
                eprintln!("Error: No guides found in '{}'", root.display());
                process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("Error: No guide provided and no config file found");
            eprintln!("{USAGE}");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    let markdown = match read_guide(&guide_path) {
        Ok(markdown) => markdown,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let fallback = guide_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = guide_title(&markdown, &fallback);
    let lines = render::render_blocks(&parse_document(&markdown).into_nodes());

    if cli.print {
        println!("{title}");
        println!();
        for line in render::plain_lines(&lines) {
            println!("{line}");
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title, lines);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(app.page),
                KeyCode::PageUp => app.scroll_up(app.page),
                KeyCode::Home | KeyCode::Char('g') => app.top(),
                KeyCode::End | KeyCode::Char('G') => app.bottom(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    // Borders take two rows
    app.page = chunks[0].height.saturating_sub(2).max(1);

    let content = Paragraph::new(app.lines.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.as_str()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g/G: Top/Bottom"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[1]);
}
