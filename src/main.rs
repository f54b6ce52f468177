//! Terminal pause demo (default binary).
//!
//! A small host around the pause mode: a boot screen, an animated scene to
//! pause, and a mode stack that applies whatever the active mode requested.
//! It uses crossterm for input and the framebuffer renderer for output.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{error, info};

use tui_pause::core::{
    Catalog, ExitFlag, GameMode, IdentityLocale, LastFrame, Locale, ModeRequests, ModeStack,
    PauseConfig, PauseError, PauseMode, Services, SharedVolume, StackOp, System, Volume,
};
use tui_pause::input::{is_interrupt, FrameInput};
use tui_pause::term::{Cell, CellStyle, FrameBuffer, Rgb, TerminalRenderer};
use tui_pause::types::{MenuInput, ModeId, FRAME_MS};

fn main() -> Result<()> {
    let config = PauseConfig::from_env()?;
    init_logging(&config)?;
    let catalog = match &config.locale_path {
        Some(path) => Some(
            Catalog::load(path)
                .with_context(|| format!("loading translations from {}", path.display()))?,
        ),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Host::new(config, catalog));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &PauseConfig) -> Result<()> {
    // The terminal is in raw mode on the alternate screen, so never log to stderr.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut host: Host) -> Result<()> {
    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut fb = FrameBuffer::new(80, 24);
    let mut last_frame = Instant::now();

    host.push(host.make_mode(ModeId::Boot))?;

    loop {
        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);
        let mut input = FrameInput::new();
        let mut wait = timeout;
        while event::poll(wait)? {
            match event::read()? {
                Event::Key(key) => {
                    if is_interrupt(key) {
                        return Ok(());
                    }
                    input.push_key_event(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
            wait = Duration::ZERO;
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();

        let Some(top_id) = host.top_id() else {
            return Ok(());
        };
        let pause_trigger = input.contains(MenuInput::Pause) || input.contains(MenuInput::Quit);
        if top_id == ModeId::Game && pause_trigger {
            host.pause_game(input.contains(MenuInput::Quit))?;
        } else if let Some(top) = host.stack.last_mut() {
            top.update(elapsed, &input)?;
        }

        host.apply_requests()?;
        if host.exit.is_requested() {
            info!("exit requested, leaving main loop");
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        fb.resize(w, h);
        match host.stack.last() {
            Some(top) => top.render(&mut fb),
            None => return Ok(()),
        }
        term.draw(&fb)?;
        host.frame.store(&fb);
    }
}

/// The demo's scheduler: a stack of modes plus the shared service handles.
struct Host {
    stack: Vec<Box<dyn GameMode>>,
    frame: LastFrame,
    volume: SharedVolume,
    requests: ModeRequests,
    exit: ExitFlag,
    catalog: Option<Catalog>,
    config: PauseConfig,
}

impl Host {
    fn new(config: PauseConfig, catalog: Option<Catalog>) -> Self {
        Self {
            stack: Vec::new(),
            frame: LastFrame::new(),
            volume: SharedVolume::new(1.0),
            requests: ModeRequests::new(),
            exit: ExitFlag::new(),
            catalog,
            config,
        }
    }

    fn top_id(&self) -> Option<ModeId> {
        self.stack.last().map(|m| m.id())
    }

    fn services(&self) -> Services {
        let locale: Box<dyn Locale> = match &self.catalog {
            Some(catalog) => Box::new(catalog.clone()),
            None => Box::new(IdentityLocale),
        };
        Services {
            capture: Box::new(self.frame.clone()),
            volume: Box::new(self.volume.clone()),
            modes: Box::new(self.requests.clone()),
            locale,
            system: Box::new(self.exit.clone()),
        }
    }

    fn make_mode(&self, id: ModeId) -> Box<dyn GameMode> {
        match id {
            ModeId::Boot => Box::new(BootMode {
                requests: self.requests.clone(),
                exit: self.exit.clone(),
            }),
            ModeId::Game => Box::new(SceneMode {
                phase: Duration::ZERO,
                volume: self.volume.clone(),
            }),
            ModeId::Pause => Box::new(PauseMode::new(false, true, self.services(), &self.config)),
        }
    }

    fn push(&mut self, mut mode: Box<dyn GameMode>) -> Result<()> {
        mode.reset()?;
        self.stack.push(mode);
        Ok(())
    }

    fn pause_game(&mut self, quit: bool) -> Result<()> {
        let level = self.volume.get();
        let mode = PauseMode::new(quit, true, self.services(), &self.config);
        match self.push(Box::new(mode)) {
            Ok(()) => Ok(()),
            Err(e) => {
                // Setup failed for this activation only: stay in the game.
                error!("could not pause: {:#}", e);
                self.volume.set(level);
                Ok(())
            }
        }
    }

    fn apply_requests(&mut self) -> Result<()> {
        for op in self.requests.take() {
            match op {
                StackOp::Push(id) => self.push(self.make_mode(id))?,
                StackOp::Pop => {
                    assert!(
                        self.stack.pop().is_some(),
                        "mode stack popped while empty"
                    );
                    if let Some(top) = self.stack.last_mut() {
                        top.reset()?;
                    }
                }
                StackOp::Clear => self.stack.clear(),
            }
        }
        Ok(())
    }
}

fn title_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(240, 220, 80),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    }
}

fn hint_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(140, 140, 150),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    let x = fb.width().saturating_sub(text.chars().count() as u16) / 2;
    fb.put_str(x, y, text, style);
}

/// Title screen.
struct BootMode {
    requests: ModeRequests,
    exit: ExitFlag,
}

impl GameMode for BootMode {
    fn id(&self) -> ModeId {
        ModeId::Boot
    }

    fn reset(&mut self) -> Result<(), PauseError> {
        Ok(())
    }

    fn update(&mut self, _elapsed: Duration, input: &FrameInput) -> Result<(), PauseError> {
        if input.contains(MenuInput::Quit) {
            self.exit.request_exit();
        } else if input.contains(MenuInput::Confirm) {
            self.requests.push(ModeId::Game);
        }
        Ok(())
    }

    fn render(&self, fb: &mut FrameBuffer) {
        fb.clear(Cell::default());
        let mid = fb.height() / 2;
        put_centered(fb, mid.saturating_sub(1), "TUI PAUSE", title_style());
        put_centered(fb, mid + 1, "enter: start   q: quit", hint_style());
    }
}

/// Something to pause: a marker sweeping across the screen.
struct SceneMode {
    phase: Duration,
    volume: SharedVolume,
}

impl GameMode for SceneMode {
    fn id(&self) -> ModeId {
        ModeId::Game
    }

    fn reset(&mut self) -> Result<(), PauseError> {
        Ok(())
    }

    fn update(&mut self, elapsed: Duration, _input: &FrameInput) -> Result<(), PauseError> {
        self.phase += elapsed;
        Ok(())
    }

    fn render(&self, fb: &mut FrameBuffer) {
        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 30, 50),
            bold: false,
            dim: false,
        };
        let marker = CellStyle {
            fg: Rgb::new(80, 220, 220),
            bg: Rgb::new(20, 30, 50),
            bold: true,
            dim: false,
        };
        fb.clear(Cell { ch: '·', style: bg });

        let w = fb.width().max(1);
        let step = (self.phase.as_millis() / 40) as u64;
        let x = (step % u64::from(w)) as u16;
        let mid = fb.height() / 2;
        fb.fill_rect(x, mid, 2, 1, '█', marker);

        let volume = format!("volume {:>3}%", (self.volume.get() * 100.0).round() as u32);
        fb.put_str(1, 0, &volume, hint_style());
        let bottom = fb.height().saturating_sub(1);
        put_centered(fb, bottom, "p: pause   q: quit menu", hint_style());
    }
}
