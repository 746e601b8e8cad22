mod display;
mod sound;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use spaceship_game::backend::{HeldKeys, PointerButton};
use spaceship_game::config::GameConfig;
use spaceship_game::error::GameError;
use spaceship_game::ui::Control;
use spaceship_game::{Flow, Game};

use display::{TerminalRenderer, Viewport};
use sound::TerminalAudio;

/// A key counts as held if its last press/repeat event arrived within this
/// window.  Covers terminals that never send key-release events: OS key
/// repeat runs at ≥ 15 Hz, so a held key refreshes well before expiry.
const HOLD_WINDOW: Duration = Duration::from_millis(133);

#[derive(Parser, Debug)]
#[command(name = "spaceship_game", about = "Dodge and shoot falling meteors")]
struct Args {
    /// TOML file overriding the default game constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write log output here instead of stderr (the game owns the terminal).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for a reproducible meteor stream.
    #[arg(long)]
    seed: Option<u64>,
}

// ── Input mapping ─────────────────────────────────────────────────────────────

/// True if any of `keys` was seen within the last `HOLD_WINDOW`.
fn any_held(key_seen: &HashMap<KeyCode, Instant>, keys: &[KeyCode], now: Instant) -> bool {
    keys.iter().any(|key| {
        key_seen
            .get(key)
            .map(|&last| now.saturating_duration_since(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn held_keys(key_seen: &HashMap<KeyCode, Instant>, now: Instant) -> HeldKeys {
    use KeyCode::{Char, Down, Left, Right, Up};
    HeldKeys {
        left: any_held(key_seen, &[Left, Char('a'), Char('A')], now),
        right: any_held(key_seen, &[Right, Char('d'), Char('D')], now),
        up: any_held(key_seen, &[Up, Char('w'), Char('W')], now),
        down: any_held(key_seen, &[Down, Char('s'), Char('S')], now),
        fire: any_held(key_seen, &[Char(' ')], now),
    }
}

/// One-shot keys that stand in for the on-screen buttons.
fn shortcut(code: KeyCode, modifiers: KeyModifiers) -> Option<Control> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Control::Exit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Control::Exit),
        KeyCode::Enter => Some(Control::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Control::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Replay),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Control::ToggleSound),
        _ => None,
    }
}

fn pointer(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Right,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until an exit control is activated.
///
/// Input model: a `key_seen` map records when each key last produced a press
/// or repeat event; every frame the still-fresh keys form the held set, so
/// Space and a direction can be held together.  Keyboard-enhanced terminals
/// also send releases, which drop the key immediately.
fn game_loop<W: Write>(
    renderer: &mut TerminalRenderer<W>,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / game.config.frames_per_second as f64);
    let mut audio = TerminalAudio::default();
    let mut key_seen: HashMap<KeyCode, Instant> = HashMap::new();
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            let flow = match event {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        let control = shortcut(code, modifiers);
                        key_seen.insert(code, frame_start);
                        match control {
                            Some(control) => game.apply_control(control, &mut audio),
                            None => Flow::Continue,
                        }
                    }
                    KeyEventKind::Repeat => {
                        key_seen.insert(code, frame_start);
                        Flow::Continue
                    }
                    KeyEventKind::Release => {
                        key_seen.remove(&code);
                        Flow::Continue
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(button),
                    column,
                    row,
                    ..
                }) => {
                    let pos = renderer.viewport.to_field(column, row);
                    game.on_input(pos, pointer(button), &mut audio)
                }
                Event::Resize(cols, rows) => {
                    renderer.viewport = Viewport::new(cols, rows, game.field());
                    Flow::Continue
                }
                _ => Flow::Continue,
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }

        // ── Update, then draw ─────────────────────────────────────────────────
        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();
        game.on_update(dt, &held_keys(&key_seen, frame_start), &mut audio);
        if audio.take_bell() {
            renderer.ring();
        }

        renderer.clear()?;
        game.on_draw(renderer)?;
        renderer.present()?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(log_file: Option<&Path>) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<(), GameError> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(config, rng);
    info!("playfield {}x{}", game.config.width, game.config.height);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let (cols, rows) = terminal::size()?;
    let mut renderer = TerminalRenderer::new(out, Viewport::new(cols, rows, game.field()));
    let result = game_loop(&mut renderer, &mut game, &rx);

    // Always restore the terminal
    let out = renderer.out();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("final score {}", game.state.score);
    result.map_err(GameError::from)
}
