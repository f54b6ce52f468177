//! Behavior of the pause mode against recording fakes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tui_pause::core::{
    FrameCapture, Locale, ModeStack, PauseConfig, PauseError, PauseMode, Services, System, Volume,
};
use tui_pause::input::FrameInput;
use tui_pause::term::{CellStyle, FrameBuffer, Rgb};
use tui_pause::types::{MenuInput, ModeId, PauseState, QuitOption};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    SetVolume(f32),
    Push(ModeId),
    Pop,
    Clear,
    Exit,
}

/// One shared world every fake service writes into, so call order across
/// services is observable.
#[derive(Clone)]
struct World {
    calls: Rc<RefCell<Vec<Call>>>,
    volume: Rc<Cell<f32>>,
    frame: Rc<RefCell<Option<FrameBuffer>>>,
    french: Rc<Cell<bool>>,
    broken_locale: Rc<Cell<bool>>,
}

impl World {
    fn new(volume: f32) -> Self {
        let mut scene = FrameBuffer::new(40, 9);
        scene.put_str(0, 0, "SCORE 1200", scene_style());
        Self {
            calls: Rc::new(RefCell::new(Vec::new())),
            volume: Rc::new(Cell::new(volume)),
            frame: Rc::new(RefCell::new(Some(scene))),
            french: Rc::new(Cell::new(false)),
            broken_locale: Rc::new(Cell::new(false)),
        }
    }

    fn services(&self) -> Services {
        Services {
            capture: Box::new(self.clone()),
            volume: Box::new(self.clone()),
            modes: Box::new(self.clone()),
            locale: Box::new(self.clone()),
            system: Box::new(self.clone()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn stack_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Push(_) | Call::Pop | Call::Clear))
            .collect()
    }
}

impl FrameCapture for World {
    fn capture(&mut self) -> Result<FrameBuffer, PauseError> {
        self.frame
            .borrow()
            .clone()
            .ok_or_else(|| PauseError::Capture("display lost".to_string()))
    }
}

impl Volume for World {
    fn get(&self) -> f32 {
        self.volume.get()
    }

    fn set(&mut self, level: f32) {
        self.volume.set(level);
        self.calls.borrow_mut().push(Call::SetVolume(level));
    }
}

impl ModeStack for World {
    fn push(&mut self, mode: ModeId) {
        self.calls.borrow_mut().push(Call::Push(mode));
    }

    fn pop(&mut self) {
        self.calls.borrow_mut().push(Call::Pop);
    }

    fn clear(&mut self) {
        self.calls.borrow_mut().push(Call::Clear);
    }
}

impl Locale for World {
    fn translate(&self, key: &str) -> Result<String, PauseError> {
        if self.broken_locale.get() {
            return Err(PauseError::Translation {
                key: key.to_string(),
                reason: "catalog unavailable".to_string(),
            });
        }
        if !self.french.get() {
            return Ok(key.to_string());
        }
        let text = match key {
            "Paused" => "En pause",
            "Quit Game" => "Quitter le jeu",
            "Quit to Main Menu" => "Retour au menu",
            "Cancel" => "Annuler",
            other => other,
        };
        Ok(text.to_string())
    }
}

impl System for World {
    fn request_exit(&mut self) {
        self.calls.borrow_mut().push(Call::Exit);
    }
}

fn scene_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(200, 200, 200),
        bg: Rgb::new(30, 30, 40),
        bold: false,
        dim: false,
    }
}

fn config() -> PauseConfig {
    PauseConfig::default().with_idle_ms(0)
}

fn press(inputs: &[MenuInput]) -> FrameInput {
    FrameInput::from_inputs(inputs)
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn render(mode: &PauseMode) -> FrameBuffer {
    let mut fb = FrameBuffer::new(40, 9);
    mode.render(&mut fb);
    fb
}

#[test]
fn plain_pause_shows_label_and_never_the_menu() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(false, false, world.services(), &config());
    mode.reset().unwrap();

    assert_eq!(mode.state(), PauseState::PlainPause);
    assert!(mode.options().is_none());

    let fb = render(&mode);
    assert!(fb.row_text(4).contains("Paused"));
    let all = screen_text(&fb);
    assert!(!all.contains("Quit Game"));
    assert!(!all.contains("Cancel"));
}

#[test]
fn quit_prompt_has_three_ordered_options_after_reset() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(true, false, world.services(), &config());
    mode.reset().unwrap();

    assert_eq!(mode.state(), PauseState::QuitPrompt);
    let options = mode.options().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(
        options.ids().collect::<Vec<_>>(),
        vec![
            QuitOption::QuitGame,
            QuitOption::QuitToMainMenu,
            QuitOption::Cancel
        ]
    );
    assert_eq!(options.label(1).unwrap().text(), "Quit to Main Menu");

    let all = screen_text(&render(&mode));
    assert!(all.contains("> Quit Game"));
    assert!(all.contains("Quit to Main Menu"));
    assert!(all.contains("Cancel"));
    assert!(!all.contains("Paused"));
}

#[test]
fn pause_audio_saves_level_and_mutes_immediately() {
    let world = World::new(0.8);
    let mode = PauseMode::new(false, true, world.services(), &config());

    assert!(mode.audio_was_playing());
    assert_eq!(mode.saved_volume(), Some(0.8));
    assert_eq!(world.volume.get(), 0.0);
    assert_eq!(world.calls(), vec![Call::SetVolume(0.0)]);
}

#[test]
fn without_pause_audio_volume_is_never_touched() {
    let world = World::new(0.6);
    let mut mode = PauseMode::new(true, false, world.services(), &config());
    mode.reset().unwrap();
    mode.update(Duration::ZERO, &press(&[MenuInput::Cancel])).unwrap();

    assert!(!mode.audio_was_playing());
    assert_eq!(mode.saved_volume(), None);
    assert_eq!(world.volume.get(), 0.6);
    assert_eq!(world.calls(), vec![Call::Pop]);
}

#[test]
fn quit_trigger_from_plain_pause_opens_prompt_without_stack_mutation() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(false, false, world.services(), &config());
    mode.reset().unwrap();

    mode.update(Duration::ZERO, &press(&[MenuInput::Quit])).unwrap();

    assert_eq!(mode.state(), PauseState::QuitPrompt);
    assert!(mode.quit_requested());
    assert_eq!(mode.options().unwrap().len(), 3);
    assert!(world.calls().is_empty());
}

#[test]
fn second_quit_trigger_exits_regardless_of_highlight() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(false, true, world.services(), &config());
    mode.reset().unwrap();
    world.clear_calls();

    mode.update(Duration::ZERO, &press(&[MenuInput::Quit])).unwrap();
    mode.update(Duration::ZERO, &press(&[MenuInput::Down, MenuInput::Down]))
        .unwrap();
    assert_eq!(mode.options().unwrap().confirm(), QuitOption::Cancel);

    mode.update(Duration::ZERO, &press(&[MenuInput::Quit])).unwrap();

    assert_eq!(world.calls(), vec![Call::Exit]);
    assert!(world.stack_calls().is_empty());
}

#[test]
fn cancel_restores_volume_and_pops_exactly_once() {
    let world = World::new(0.8);
    let mut mode = PauseMode::new(true, true, world.services(), &config());
    mode.reset().unwrap();
    world.clear_calls();

    mode.update(Duration::ZERO, &press(&[MenuInput::Down])).unwrap();
    mode.update(Duration::ZERO, &press(&[MenuInput::Down])).unwrap();
    mode.update(Duration::ZERO, &press(&[MenuInput::Confirm])).unwrap();
    // A stray second confirm must not pop again.
    mode.update(Duration::ZERO, &press(&[MenuInput::Confirm])).unwrap();

    assert_eq!(world.calls(), vec![Call::SetVolume(0.8), Call::Pop]);
    assert_eq!(world.volume.get(), 0.8);
}

#[test]
fn quit_to_main_menu_restores_volume_then_clears_then_pushes_boot() {
    let world = World::new(0.8);
    let mut mode = PauseMode::new(true, true, world.services(), &config());
    mode.reset().unwrap();
    world.clear_calls();

    mode.update(
        Duration::ZERO,
        &press(&[MenuInput::Down, MenuInput::Confirm]),
    )
    .unwrap();

    assert_eq!(
        world.calls(),
        vec![
            Call::SetVolume(0.8),
            Call::Clear,
            Call::Push(ModeId::Boot)
        ]
    );
}

#[test]
fn quit_game_requests_exit_without_restoring_audio() {
    let world = World::new(0.8);
    let mut mode = PauseMode::new(true, true, world.services(), &config());
    mode.reset().unwrap();
    world.clear_calls();

    mode.update(Duration::ZERO, &press(&[MenuInput::Confirm])).unwrap();

    assert_eq!(world.calls(), vec![Call::Exit]);
    assert_eq!(world.volume.get(), 0.0);
}

#[test]
fn render_is_idempotent_and_does_not_mutate() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(true, true, world.services(), &config());
    mode.reset().unwrap();
    mode.update(Duration::ZERO, &press(&[MenuInput::Down])).unwrap();
    let calls_before = world.calls();
    let selection_before = mode.options().unwrap().selection();

    let first = render(&mode);
    let second = render(&mode);

    assert_eq!(first, second);
    assert_eq!(world.calls(), calls_before);
    assert_eq!(mode.options().unwrap().selection(), selection_before);
    assert!(!mode.selection_locked());
}

#[test]
fn backdrop_is_dimmed_and_left_intact() {
    let world = World::new(1.0);
    let cfg = config();
    let mut mode = PauseMode::new(false, false, world.services(), &cfg);
    mode.reset().unwrap();

    let fb = render(&mode);
    let cell = fb.get(0, 0).unwrap();
    assert_eq!(cell.ch, 'S');
    assert_eq!(cell.style, scene_style().tinted(cfg.dim_color()));

    // The snapshot itself keeps the original colors.
    let backdrop = mode.backdrop().unwrap();
    assert_eq!(backdrop.get(0, 0).unwrap().style, scene_style());
    assert_eq!(backdrop.row_text(0).trim_end(), "SCORE 1200");
}

#[test]
fn backdrop_is_captured_once_per_activation() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(false, false, world.services(), &config());
    mode.reset().unwrap();

    // The live screen changes while paused; the backdrop does not follow.
    let mut changed = FrameBuffer::new(40, 9);
    changed.put_str(0, 0, "LEVEL 9", scene_style());
    *world.frame.borrow_mut() = Some(changed);
    mode.update(Duration::ZERO, &press(&[])).unwrap();
    assert!(mode.backdrop().unwrap().row_text(0).starts_with("SCORE"));

    // A new activation captures again.
    mode.reset().unwrap();
    assert!(mode.backdrop().unwrap().row_text(0).starts_with("LEVEL"));
}

#[test]
fn reset_propagates_capture_failure() {
    let world = World::new(1.0);
    *world.frame.borrow_mut() = None;
    let mut mode = PauseMode::new(true, false, world.services(), &config());

    let err = mode.reset().unwrap_err();
    assert!(matches!(err, PauseError::Capture(_)));
}

#[test]
fn reset_propagates_translation_failure() {
    let world = World::new(1.0);
    world.broken_locale.set(true);
    let mut mode = PauseMode::new(false, false, world.services(), &config());

    assert!(matches!(
        mode.reset(),
        Err(PauseError::Translation { .. })
    ));
}

#[test]
fn reload_translated_texts_keeps_selection_and_backdrop() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(true, false, world.services(), &config());
    mode.reset().unwrap();
    mode.update(Duration::ZERO, &press(&[MenuInput::Down])).unwrap();
    let backdrop = mode.backdrop().cloned();

    world.french.set(true);
    mode.reload_translated_texts();

    let options = mode.options().unwrap();
    assert_eq!(options.selection(), 1);
    assert_eq!(options.label(0).unwrap().text(), "Quitter le jeu");
    assert_eq!(options.label(2).unwrap().text(), "Annuler");
    assert_eq!(mode.paused_label().unwrap().text(), "En pause");
    assert_eq!(mode.backdrop().cloned(), backdrop);
    assert!(screen_text(&render(&mode)).contains("> Retour au menu"));
}

#[test]
fn failed_reload_keeps_previous_text() {
    let world = World::new(1.0);
    let mut mode = PauseMode::new(true, false, world.services(), &config());
    mode.reset().unwrap();

    world.broken_locale.set(true);
    mode.reload_translated_texts();

    assert_eq!(mode.paused_label().unwrap().text(), "Paused");
    assert_eq!(mode.options().unwrap().label(0).unwrap().text(), "Quit Game");
    assert_eq!(mode.state(), PauseState::QuitPrompt);
}

#[test]
fn failed_reload_before_activation_degrades_to_blank_label() {
    let world = World::new(1.0);
    world.broken_locale.set(true);
    let mut mode = PauseMode::new(false, false, world.services(), &config());

    mode.reload_translated_texts();

    assert!(mode.paused_label().unwrap().is_blank());
}

#[test]
fn idle_frames_yield_for_a_bounded_time() {
    let world = World::new(1.0);
    let cfg = PauseConfig::default().with_idle_ms(5_000);
    let mut mode = PauseMode::new(false, false, world.services(), &cfg);
    mode.reset().unwrap();

    let start = Instant::now();
    mode.update(Duration::ZERO, &press(&[])).unwrap();
    let took = start.elapsed();

    assert!(took >= Duration::from_millis(50));
    assert!(took < Duration::from_secs(1));
    assert_eq!(mode.state(), PauseState::PlainPause);
}

#[test]
fn frames_that_consume_input_do_not_yield() {
    let world = World::new(1.0);
    let cfg = PauseConfig::default().with_idle_ms(50);
    let mut mode = PauseMode::new(true, false, world.services(), &cfg);
    mode.reset().unwrap();

    let start = Instant::now();
    for input in [MenuInput::Down, MenuInput::Down, MenuInput::Up, MenuInput::Up, MenuInput::Down] {
        mode.update(Duration::ZERO, &press(&[input])).unwrap();
    }
    let took = start.elapsed();

    // Five idle frames would take at least 250ms.
    assert!(took < Duration::from_millis(100));
    assert_eq!(mode.options().unwrap().selection(), 1);
}

#[test]
fn late_frames_skip_the_idle_yield() {
    let world = World::new(1.0);
    let cfg = PauseConfig::default().with_idle_ms(50);
    let mut mode = PauseMode::new(false, false, world.services(), &cfg);
    mode.reset().unwrap();

    let start = Instant::now();
    for _ in 0..5 {
        mode.update(Duration::from_millis(100), &press(&[])).unwrap();
    }

    assert!(start.elapsed() < Duration::from_millis(100));
}
