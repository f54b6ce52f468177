//! Pause mode: freezes the last frame and offers to resume or quit.
//!
//! The mode runs in one of two sub-states:
//!
//! - **Plain pause**: the captured frame is shown dimmed with a "Paused"
//!   label. The quit trigger switches to the quit prompt; the pause key
//!   resumes.
//! - **Quit prompt**: the dimmed frame with three options, in order
//!   Quit Game, Quit to Main Menu, Cancel. Pressing the quit trigger again
//!   exits immediately without going through the menu.
//!
//! Optionally the mode mutes audio on construction and restores the saved
//! level when the player resumes or returns to the main menu.

use std::time::Duration;

use log::{debug, error, info, warn};

use crate::config::PauseConfig;
use crate::error::PauseError;
use crate::input::FrameInput;
use crate::mode::GameMode;
use crate::services::{Locale, Services};
use crate::term::{Cell, CellStyle, FrameBuffer, OptionBox, Rgb, TextImage};
use crate::types::{
    MenuInput, ModeId, PauseState, QuitOption, FRAME_MS, MAX_IDLE_SLEEP_MS, TEXT_PAUSED,
};

fn label_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    }
}

fn option_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: Rgb::new(0, 0, 0),
        bold: false,
        dim: false,
    }
}

fn render_text(locale: &dyn Locale, key: &str, style: CellStyle) -> Result<TextImage, PauseError> {
    let text = locale.translate(key)?;
    TextImage::new(text, style).map_err(|e| PauseError::Text(format!("{:#}", e)))
}

fn log_reload_failure(what: &str, e: &PauseError) {
    if e.is_cosmetic() {
        warn!("keeping previous {}: {}", what, e);
    } else {
        error!("keeping previous {} after locale failure: {}", what, e);
    }
}

fn build_options(locale: &dyn Locale) -> Result<OptionBox<QuitOption>, PauseError> {
    let mut entries = Vec::with_capacity(QuitOption::ALL.len());
    for option in QuitOption::ALL {
        entries.push((render_text(locale, option.text_key(), option_style())?, option));
    }
    OptionBox::new(entries).map_err(|e| PauseError::Menu(format!("{:#}", e)))
}

/// The pause/quit mode.
pub struct PauseMode {
    quit_requested: bool,
    audio_was_playing: bool,
    saved_volume: f32,
    backdrop: Option<FrameBuffer>,
    dim_color: Rgb,
    paused_label: Option<TextImage>,
    options: Option<OptionBox<QuitOption>>,
    /// Set by the first activation; blocks any further one until `reset`.
    selection_locked: bool,
    idle_sleep: Duration,
    services: Services,
}

impl PauseMode {
    /// Create the mode.
    ///
    /// With `pause_audio`, the current volume is saved and audio is muted
    /// right away. Nothing is captured or rendered until [`PauseMode::reset`].
    pub fn new(
        quit_requested: bool,
        pause_audio: bool,
        mut services: Services,
        config: &PauseConfig,
    ) -> Self {
        let mut saved_volume = 0.0;
        if pause_audio {
            saved_volume = services.volume.get();
            services.volume.set(0.0);
            debug!("pause muted audio (saved level {})", saved_volume);
        }

        let cap = Duration::from_millis(MAX_IDLE_SLEEP_MS as u64);
        Self {
            quit_requested,
            audio_was_playing: pause_audio,
            saved_volume,
            backdrop: None,
            dim_color: config.dim_color(),
            paused_label: None,
            options: None,
            selection_locked: false,
            idle_sleep: config.idle_sleep.min(cap),
            services,
        }
    }

    pub fn state(&self) -> PauseState {
        if self.quit_requested {
            PauseState::QuitPrompt
        } else {
            PauseState::PlainPause
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn audio_was_playing(&self) -> bool {
        self.audio_was_playing
    }

    /// Volume level to restore. Only meaningful when audio was paused here.
    pub fn saved_volume(&self) -> Option<f32> {
        self.audio_was_playing.then_some(self.saved_volume)
    }

    pub fn selection_locked(&self) -> bool {
        self.selection_locked
    }

    pub fn backdrop(&self) -> Option<&FrameBuffer> {
        self.backdrop.as_ref()
    }

    pub fn dim_color(&self) -> Rgb {
        self.dim_color
    }

    pub fn paused_label(&self) -> Option<&TextImage> {
        self.paused_label.as_ref()
    }

    pub fn options(&self) -> Option<&OptionBox<QuitOption>> {
        self.options.as_ref()
    }

    /// Prepare for activation: capture the backdrop, build text and options,
    /// and unlock selection.
    pub fn reset(&mut self) -> Result<(), PauseError> {
        self.backdrop = Some(self.services.capture.capture()?);
        if self.paused_label.is_none() {
            self.paused_label = Some(render_text(
                self.services.locale.as_ref(),
                TEXT_PAUSED,
                label_style(),
            )?);
        }
        if self.quit_requested {
            self.setup_options()?;
        }
        self.selection_locked = false;
        Ok(())
    }

    /// Advance one frame.
    pub fn update(&mut self, elapsed: Duration, input: &FrameInput) -> Result<(), PauseError> {
        let consumed = if self.quit_requested {
            self.update_quit_prompt(input)?
        } else {
            self.update_plain_pause(input)?
        };

        if !consumed {
            self.idle(elapsed);
        }
        Ok(())
    }

    /// Draw the dimmed backdrop and the label or the options.
    pub fn render(&self, fb: &mut FrameBuffer) {
        match &self.backdrop {
            Some(backdrop) => fb.composite_tinted(backdrop, self.dim_color),
            None => fb.clear(Cell::default()),
        }

        if self.quit_requested {
            if let Some(options) = &self.options {
                options.render_centered(fb);
            }
        } else if let Some(label) = &self.paused_label {
            let y = fb.height() / 2;
            label.draw_centered(fb, y);
        }
    }

    /// Rebuild all captions from the current locale.
    ///
    /// Failures keep the previous text (or a blank label) and are logged.
    pub fn reload_translated_texts(&mut self) {
        let locale = self.services.locale.as_ref();

        match render_text(locale, TEXT_PAUSED, label_style()) {
            Ok(label) => self.paused_label = Some(label),
            Err(e) => {
                log_reload_failure("pause label", &e);
                if self.paused_label.is_none() {
                    self.paused_label = Some(TextImage::blank(label_style()));
                }
            }
        }

        if let Some(options) = self.options.as_mut() {
            for option in QuitOption::ALL {
                match render_text(locale, option.text_key(), option_style()) {
                    Ok(label) => {
                        options.set_label(option.index(), label);
                    }
                    Err(e) => log_reload_failure(option.as_str(), &e),
                }
            }
        }
    }

    fn update_plain_pause(&mut self, input: &FrameInput) -> Result<bool, PauseError> {
        if input.contains(MenuInput::Quit) {
            debug!("quit trigger while paused, showing quit options");
            self.quit_requested = true;
            self.setup_options()?;
            return Ok(true);
        }

        if input.contains(MenuInput::Pause) {
            if !self.selection_locked {
                self.selection_locked = true;
                self.restore_audio();
                self.services.modes.pop();
            }
            return Ok(true);
        }

        Ok(false)
    }

    fn update_quit_prompt(&mut self, input: &FrameInput) -> Result<bool, PauseError> {
        if input.contains(MenuInput::Quit) {
            info!("quit trigger in quit prompt, exiting");
            self.services.system.request_exit();
            return Ok(true);
        }

        if self.options.is_none() {
            self.setup_options()?;
        }

        let mut consumed = false;
        for event in input.iter() {
            match event {
                MenuInput::Up | MenuInput::Down => {
                    if let (Some(options), Some(dir)) = (self.options.as_mut(), event.direction()) {
                        options.navigate(dir);
                    }
                    consumed = true;
                }
                MenuInput::Confirm => {
                    if let Some(choice) = self.options.as_ref().map(|o| o.confirm()) {
                        self.activate(choice);
                    }
                    consumed = true;
                }
                MenuInput::Cancel => {
                    self.activate(QuitOption::Cancel);
                    consumed = true;
                }
                MenuInput::Quit | MenuInput::Pause => {}
            }
        }
        Ok(consumed)
    }

    fn activate(&mut self, choice: QuitOption) {
        if self.selection_locked {
            return;
        }
        self.selection_locked = true;

        match choice {
            QuitOption::QuitGame => {
                info!("quit game selected");
                self.services.system.request_exit();
            }
            QuitOption::QuitToMainMenu => {
                debug!("returning to boot mode");
                self.restore_audio();
                self.services.modes.clear();
                self.services.modes.push(ModeId::Boot);
            }
            QuitOption::Cancel => {
                debug!("resuming");
                self.restore_audio();
                self.services.modes.pop();
            }
        }
    }

    fn restore_audio(&mut self) {
        if self.audio_was_playing {
            self.services.volume.set(self.saved_volume);
        }
    }

    /// (Re)build the three quit options, keeping the highlight. Safe to call
    /// repeatedly.
    fn setup_options(&mut self) -> Result<(), PauseError> {
        let highlighted = self.options.as_ref().map_or(0, |o| o.selection());
        let mut options = build_options(self.services.locale.as_ref())?;
        options.select(highlighted);
        self.options = Some(options);
        Ok(())
    }

    fn idle(&self, elapsed: Duration) {
        // Host already running late, don't make it worse.
        if elapsed >= Duration::from_millis(FRAME_MS as u64 * 2) {
            return;
        }
        if self.idle_sleep.is_zero() {
            std::thread::yield_now();
        } else {
            std::thread::sleep(self.idle_sleep);
        }
    }
}

impl GameMode for PauseMode {
    fn id(&self) -> ModeId {
        ModeId::Pause
    }

    fn reset(&mut self) -> Result<(), PauseError> {
        PauseMode::reset(self)
    }

    fn update(&mut self, elapsed: Duration, input: &FrameInput) -> Result<(), PauseError> {
        PauseMode::update(self, elapsed, input)
    }

    fn render(&self, fb: &mut FrameBuffer) {
        PauseMode::render(self, fb)
    }

    fn reload_translated_texts(&mut self) {
        PauseMode::reload_translated_texts(self)
    }
}
