use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A navigation key. Each press issues one discrete translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKey {
    Forward,
    Back,
    StrafeRight,
    StrafeLeft,
    Ascend,
    Descend,
}

impl NavKey {
    pub const ALL: [NavKey; 6] = [
        NavKey::Forward,
        NavKey::Back,
        NavKey::StrafeRight,
        NavKey::StrafeLeft,
        NavKey::Ascend,
        NavKey::Descend,
    ];

    /// Map a DOM-style key code (W=87, S=83, D=68, A=65, U=85, J=74).
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            87 => Some(NavKey::Forward),
            83 => Some(NavKey::Back),
            68 => Some(NavKey::StrafeRight),
            65 => Some(NavKey::StrafeLeft),
            85 => Some(NavKey::Ascend),
            74 => Some(NavKey::Descend),
            _ => None,
        }
    }

    /// Map a keyboard character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'w' => Some(NavKey::Forward),
            's' => Some(NavKey::Back),
            'd' => Some(NavKey::StrafeRight),
            'a' => Some(NavKey::StrafeLeft),
            'u' => Some(NavKey::Ascend),
            'j' => Some(NavKey::Descend),
            _ => None,
        }
    }
}

/// Step lengths in scene units per key press.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Forward/back and strafe distance.
    pub step: f32,
    /// Ascend/descend distance.
    pub vertical_step: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            step: 30.0,
            vertical_step: 60.0,
        }
    }
}

/// Maps key presses to translations along the camera's local axes.
///
/// Local axes follow the right-handed camera convention: +X right, +Y up,
/// and the view direction is -Z. The returned vector is meant to be rotated
/// by the camera orientation, never applied in world space.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    config: NavigationConfig,
}

impl NavigationController {
    pub fn new(config: NavigationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Camera-local translation for a key press.
    pub fn on_key_down(&self, key: NavKey) -> Vec3 {
        let step = self.config.step;
        let vertical = self.config.vertical_step;
        match key {
            NavKey::Forward => Vec3::new(0.0, 0.0, -step),
            NavKey::Back => Vec3::new(0.0, 0.0, step),
            NavKey::StrafeRight => Vec3::new(step, 0.0, 0.0),
            NavKey::StrafeLeft => Vec3::new(-step, 0.0, 0.0),
            NavKey::Ascend => Vec3::new(0.0, vertical, 0.0),
            NavKey::Descend => Vec3::new(0.0, -vertical, 0.0),
        }
    }

    /// Same as [`on_key_down`](Self::on_key_down) for a raw key code.
    /// Unmapped codes yield `None`.
    pub fn on_key_code(&self, code: u32) -> Option<Vec3> {
        match NavKey::from_key_code(code) {
            Some(key) => Some(self.on_key_down(key)),
            None => {
                tracing::trace!(code, "ignoring unmapped key code");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping() {
        let nav = NavigationController::default();
        assert_eq!(nav.on_key_down(NavKey::Forward), Vec3::new(0.0, 0.0, -30.0));
        assert_eq!(nav.on_key_down(NavKey::Back), Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(nav.on_key_down(NavKey::StrafeRight), Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(nav.on_key_down(NavKey::StrafeLeft), Vec3::new(-30.0, 0.0, 0.0));
        assert_eq!(nav.on_key_down(NavKey::Ascend), Vec3::new(0.0, 60.0, 0.0));
        assert_eq!(nav.on_key_down(NavKey::Descend), Vec3::new(0.0, -60.0, 0.0));
    }

    #[test]
    fn key_codes_map_to_keys() {
        assert_eq!(NavKey::from_key_code(87), Some(NavKey::Forward));
        assert_eq!(NavKey::from_key_code(68), Some(NavKey::StrafeRight));
        assert_eq!(NavKey::from_key_code(83), Some(NavKey::Back));
        assert_eq!(NavKey::from_key_code(65), Some(NavKey::StrafeLeft));
        assert_eq!(NavKey::from_key_code(74), Some(NavKey::Descend));
        assert_eq!(NavKey::from_key_code(85), Some(NavKey::Ascend));
    }

    #[test]
    fn unmapped_key_code_is_ignored() {
        let nav = NavigationController::default();
        assert_eq!(nav.on_key_code(13), None);
        assert_eq!(nav.on_key_code(0), None);
        assert_eq!(nav.on_key_code(87), Some(Vec3::new(0.0, 0.0, -30.0)));
    }

    #[test]
    fn chars_are_case_insensitive() {
        assert_eq!(NavKey::from_char('W'), Some(NavKey::Forward));
        assert_eq!(NavKey::from_char('j'), Some(NavKey::Descend));
        assert_eq!(NavKey::from_char('x'), None);
    }

    #[test]
    fn opposite_keys_cancel() {
        let nav = NavigationController::default();
        for (a, b) in [
            (NavKey::Forward, NavKey::Back),
            (NavKey::StrafeLeft, NavKey::StrafeRight),
            (NavKey::Ascend, NavKey::Descend),
        ] {
            assert_eq!(nav.on_key_down(a) + nav.on_key_down(b), Vec3::ZERO);
        }
    }

    #[test]
    fn custom_steps() {
        let nav = NavigationController::new(NavigationConfig {
            step: 5.0,
            vertical_step: 7.0,
        });
        assert_eq!(nav.on_key_down(NavKey::Forward), Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(nav.on_key_down(NavKey::Ascend), Vec3::new(0.0, 7.0, 0.0));
    }
}
