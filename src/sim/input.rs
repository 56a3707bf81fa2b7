//! Input commands and their default key/mouse bindings
//!
//! The host turns window events into [`Command`]s; `apply` performs the
//! state transition and reports anything the host has to do itself.

use super::modes::ObjectType;
use super::state::SimulationState;
use crate::consts::*;

/// A user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Restart,
    /// New ball in multi-object mode, otherwise restart
    Launch,
    ToggleDrawingMode,
    CycleObject,
    SelectObject(ObjectType),
    CycleColor,
    ToggleRainbow,
    CycleTrajectory,
    ToggleMultiObjects,
    GravityUp,
    GravityDown,
    ToggleParticles,
    ResetSettings,
    CycleBackground,
    SpeedUp,
    SpeedDown,
    ScaleUp,
    ScaleDown,
    CycleGrid,
    Screenshot,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Host-side follow-up for a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Screenshot,
    Help,
    Quit,
}

impl Command {
    /// Default keyboard binding (case-sensitive: Shift variants are uppercase)
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key {
            'i' | ' ' => Command::Restart,
            'c' => Command::CycleColor,
            'C' => Command::ToggleRainbow,
            'p' | 'P' => Command::CycleTrajectory,
            'm' | 'M' => Command::ToggleMultiObjects,
            'g' => Command::GravityDown,
            'G' => Command::GravityUp,
            'e' | 'E' => Command::ToggleParticles,
            'r' | 'R' => Command::ResetSettings,
            '1' => Command::SelectObject(ObjectType::Cube),
            '2' => Command::SelectObject(ObjectType::Sphere),
            '3' => Command::SelectObject(ObjectType::Bunny),
            'b' | 'B' => Command::CycleBackground,
            '+' | '=' => Command::SpeedUp,
            '-' | '_' => Command::SpeedDown,
            'z' | 'Z' => Command::ScaleDown,
            'x' | 'X' => Command::ScaleUp,
            't' | 'T' => Command::CycleGrid,
            'h' | 'H' => Command::Help,
            'q' | 'Q' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }

    pub fn from_mouse(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Command::ToggleDrawingMode,
            MouseButton::Right => Command::CycleObject,
            MouseButton::Middle => Command::Launch,
        }
    }
}

/// Apply a command to the simulation
pub fn apply(state: &mut SimulationState, command: Command) -> Effect {
    match command {
        Command::Restart => state.reset(),
        Command::Launch => state.launch(),
        Command::ToggleDrawingMode => state.toggle_drawing_mode(),
        Command::CycleObject => state.cycle_object(),
        Command::SelectObject(kind) => {
            state.select_object(kind);
        }
        Command::CycleColor => state.cycle_color(),
        Command::ToggleRainbow => state.toggle_rainbow(),
        Command::CycleTrajectory => state.cycle_trajectory_mode(),
        Command::ToggleMultiObjects => state.toggle_multi_objects(),
        Command::GravityUp => state.adjust_gravity(GRAVITY_STEP),
        Command::GravityDown => state.adjust_gravity(-GRAVITY_STEP),
        Command::ToggleParticles => state.toggle_particles(),
        Command::ResetSettings => state.reset_settings(),
        Command::CycleBackground => state.cycle_background(),
        Command::SpeedUp => state.adjust_speed(SPEED_STEP),
        Command::SpeedDown => state.adjust_speed(-SPEED_STEP),
        Command::ScaleUp => state.adjust_scale(SCALE_STEP),
        Command::ScaleDown => state.adjust_scale(-SCALE_STEP),
        Command::CycleGrid => state.cycle_grid_mode(),
        Command::Screenshot => return Effect::Screenshot,
        Command::Help => return Effect::Help,
        Command::Quit => return Effect::Quit,
    }
    Effect::None
}

/// Control reference printed by the `Help` command
pub const HELP_TEXT: &str = "\
======== Bounce Lab ========
  Mouse:
    Left:   toggle wireframe/solid
    Right:  cycle objects (cube, sphere, bunny)
    Middle: launch a ball (multi-object mode) or restart
  Keys:
    i, space: restart
    c / C:    next colour / rainbow mode
    p:        trajectory mode (none -> line -> strobe)
    m:        multiple objects
    g / G:    less / more gravity
    e:        particle effects
    r:        reset settings
    1 2 3:    cube, sphere, bunny
    b:        background colour
    + / -:    simulation speed
    z / x:    smaller / larger object
    t:        grid (none -> basic -> detailed)
    F12:      screenshot
    h:        help
    q:        quit
============================";
