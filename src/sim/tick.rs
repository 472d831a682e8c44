//! Input dispatch and fixed timestep advance
//!
//! Each frame the main loop drains input through [`dispatch`], draws, then
//! calls [`tick`].

use glam::Vec2;

use super::state::SandboxState;
use crate::settings::{Key, Settings};

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One input event, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close button / OS quit
    CloseRequested,
    PointerPressed { button: PointerButton, position: Vec2 },
    PointerMoved(Vec2),
    KeyPressed(Key),
}

/// Apply queued input events in order.
///
/// A close or quit request stops processing; events queued after it are dropped.
pub fn dispatch<I>(state: &mut SandboxState, settings: &Settings, events: I)
where
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        match event {
            InputEvent::CloseRequested => {
                log::info!("Close requested");
                state.request_quit();
                break;
            }
            InputEvent::PointerPressed {
                button: PointerButton::Primary,
                position,
            } => {
                state
                    .projectile
                    .press(&mut state.world, position, state.impulse_scale);
            }
            InputEvent::KeyPressed(key) if key == settings.quit_key => {
                log::info!("Quit key pressed");
                state.request_quit();
                break;
            }
            InputEvent::KeyPressed(key) if key == settings.pause_key => {
                state.toggle_pause();
            }
            _ => {}
        }
    }
}

/// Advance the world by one fixed timestep unless paused.
/// Returns whether a step was taken.
pub fn tick(state: &mut SandboxState) -> bool {
    if state.is_paused() {
        return false;
    }
    state.world.step();
    state.steps += 1;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Projectile;

    fn state() -> SandboxState {
        SandboxState::new(&Settings::default(), 1920.0, 1080.0)
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerPressed {
            button: PointerButton::Primary,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_tick_counts_steps() {
        let mut state = state();
        assert!(tick(&mut state));
        assert!(tick(&mut state));
        assert_eq!(state.steps, 2);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let mut state = state();
        let settings = Settings::default();
        dispatch(&mut state, &settings, [InputEvent::KeyPressed(Key::Space)]);
        assert!(state.is_paused());
        assert!(!tick(&mut state));
        assert_eq!(state.steps, 0);
    }

    #[test]
    fn test_quit_key_stops_processing() {
        let mut state = state();
        let settings = Settings::default();
        dispatch(
            &mut state,
            &settings,
            [InputEvent::KeyPressed(Key::Letter('Q')), click(10.0, 10.0)],
        );
        assert!(!state.running);
        assert_eq!(state.projectile, Projectile::Absent);
    }

    #[test]
    fn test_close_request() {
        let mut state = state();
        dispatch(&mut state, &Settings::default(), [InputEvent::CloseRequested]);
        assert!(!state.running);
    }

    #[test]
    fn test_unbound_input_ignored() {
        let mut state = state();
        let bodies = state.world.body_count();
        dispatch(
            &mut state,
            &Settings::default(),
            [
                InputEvent::KeyPressed(Key::Letter('X')),
                InputEvent::KeyPressed(Key::Other),
                InputEvent::PointerMoved(Vec2::new(5.0, 5.0)),
                InputEvent::PointerPressed {
                    button: PointerButton::Secondary,
                    position: Vec2::new(5.0, 5.0),
                },
            ],
        );
        assert!(state.running);
        assert!(!state.is_paused());
        assert_eq!(state.world.body_count(), bodies);
    }

    #[test]
    fn test_events_apply_in_order() {
        let mut state = state();
        dispatch(
            &mut state,
            &Settings::default(),
            [click(100.0, 100.0), click(100.0, 200.0)],
        );
        assert!(matches!(state.projectile, Projectile::Launched { .. }));
    }

    #[test]
    fn test_rebound_keys() {
        let mut state = state();
        let settings = Settings {
            pause_key: Key::Letter('P'),
            quit_key: Key::Escape,
            ..Default::default()
        };
        dispatch(&mut state, &settings, [InputEvent::KeyPressed(Key::Space)]);
        assert!(!state.is_paused());
        dispatch(&mut state, &settings, [InputEvent::KeyPressed(Key::Letter('P'))]);
        assert!(state.is_paused());
        dispatch(&mut state, &settings, [InputEvent::KeyPressed(Key::Escape)]);
        assert!(!state.running);
    }
}
