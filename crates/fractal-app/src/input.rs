use fractal_core::FractalKind;
use glam::DVec2;

// ---------------------------------------------------------------------------
// Key — windowing-library-independent key representation
// ---------------------------------------------------------------------------

/// A keyboard key, independent of any windowing library.
///
/// `main.rs` maps `winit::keyboard::PhysicalKey` → `Key`; everything else
/// in the input pipeline works purely with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit1,
    Digit2,
    Space,
    Equal, // = / + (same physical key; Shift state ignored)
    Minus, // - / _ (same physical key; Shift state ignored)
    C,
    R,
    Q,
    Escape,
}

// ---------------------------------------------------------------------------
// InputAction — what the app does in response to input
// ---------------------------------------------------------------------------

/// High-level action produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    SelectVariant(FractalKind),
    CycleVariant,
    IterationsUp,
    IterationsDown,
    TogglePaletteMode,
    ResetView,
    Quit,
}

// ---------------------------------------------------------------------------
// InputState
// ---------------------------------------------------------------------------

pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Translate a `Key` press into an `InputAction`, if the key is mapped.
    pub fn on_key(&self, key: Key) -> Option<InputAction> {
        match key {
            Key::Digit1 => Some(InputAction::SelectVariant(FractalKind::Mandelbrot)),
            Key::Digit2 => Some(InputAction::SelectVariant(FractalKind::BurningShip)),
            Key::Space => Some(InputAction::CycleVariant),
            Key::Equal => Some(InputAction::IterationsUp),
            Key::Minus => Some(InputAction::IterationsDown),
            Key::C => Some(InputAction::TogglePaletteMode),
            Key::R => Some(InputAction::ResetView),
            Key::Q | Key::Escape => Some(InputAction::Quit),
        }
    }
}

// ---------------------------------------------------------------------------
// DragState — pan gesture tracking (pure, testable)
// ---------------------------------------------------------------------------

/// Left-button drag tracking. The pan is applied once, on release, as the
/// whole press-to-release distance.
pub struct DragState {
    anchor: Option<DVec2>,
}

impl DragState {
    pub fn new() -> Self {
        Self { anchor: None }
    }

    /// Button went down at `at`.
    pub fn press(&mut self, at: DVec2) {
        self.anchor = Some(at);
    }

    /// Button came up at `at`. Returns the full drag delta, or `None` if
    /// no matching press was seen (the press can land outside the window).
    pub fn release(&mut self, at: DVec2) -> Option<DVec2> {
        self.anchor.take().map(|anchor| at - anchor)
    }
}

// ---------------------------------------------------------------------------
// Iteration clamping
// ---------------------------------------------------------------------------

/// Clamp an iteration count to the valid range \[10, 2000\].
pub fn clamp_iterations(iter: u32) -> u32 {
    iter.clamp(10, 2000)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> InputState {
        InputState::new()
    }

    // --- Digit keys select the correct variant ---------------------------------

    #[test]
    fn digit_1_selects_mandelbrot() {
        assert_eq!(
            input().on_key(Key::Digit1),
            Some(InputAction::SelectVariant(FractalKind::Mandelbrot))
        );
    }

    #[test]
    fn digit_2_selects_burning_ship() {
        assert_eq!(
            input().on_key(Key::Digit2),
            Some(InputAction::SelectVariant(FractalKind::BurningShip))
        );
    }

    #[test]
    fn digit_keys_map_to_different_variants() {
        assert_ne!(input().on_key(Key::Digit1), input().on_key(Key::Digit2));
    }

    // --- Other key mappings ---------------------------------------------------

    #[test]
    fn space_cycles_variant() {
        assert_eq!(input().on_key(Key::Space), Some(InputAction::CycleVariant));
    }

    #[test]
    fn equal_increases_iterations() {
        assert_eq!(input().on_key(Key::Equal), Some(InputAction::IterationsUp));
    }

    #[test]
    fn minus_decreases_iterations() {
        assert_eq!(
            input().on_key(Key::Minus),
            Some(InputAction::IterationsDown)
        );
    }

    #[test]
    fn c_toggles_palette_mode() {
        assert_eq!(
            input().on_key(Key::C),
            Some(InputAction::TogglePaletteMode)
        );
    }

    #[test]
    fn r_resets_the_view() {
        assert_eq!(input().on_key(Key::R), Some(InputAction::ResetView));
    }

    #[test]
    fn q_quits() {
        assert_eq!(input().on_key(Key::Q), Some(InputAction::Quit));
    }

    #[test]
    fn escape_quits() {
        assert_eq!(input().on_key(Key::Escape), Some(InputAction::Quit));
    }

    // --- Drag tracking ---------------------------------------------------------

    #[test]
    fn release_returns_the_full_drag_delta() {
        let mut drag = DragState::new();
        drag.press(DVec2::new(100.0, 80.0));
        let delta = drag.release(DVec2::new(142.0, 52.5));
        assert_eq!(delta, Some(DVec2::new(42.0, -27.5)));
    }

    #[test]
    fn release_without_press_is_none() {
        let mut drag = DragState::new();
        assert_eq!(drag.release(DVec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn release_consumes_the_press() {
        let mut drag = DragState::new();
        drag.press(DVec2::new(5.0, 5.0));
        drag.release(DVec2::new(6.0, 6.0));
        assert_eq!(drag.release(DVec2::new(7.0, 7.0)), None);
    }

    #[test]
    fn stationary_click_reports_a_zero_delta() {
        let mut drag = DragState::new();
        drag.press(DVec2::new(400.0, 300.0));
        assert_eq!(drag.release(DVec2::new(400.0, 300.0)), Some(DVec2::ZERO));
    }

    #[test]
    fn second_press_replaces_the_anchor() {
        let mut drag = DragState::new();
        drag.press(DVec2::new(0.0, 0.0));
        drag.press(DVec2::new(50.0, 50.0));
        let delta = drag.release(DVec2::new(60.0, 45.0));
        assert_eq!(delta, Some(DVec2::new(10.0, -5.0)));
    }

    // --- Iteration clamping ---------------------------------------------------

    #[test]
    fn clamp_iterations_enforces_minimum() {
        assert_eq!(clamp_iterations(0), 10);
        assert_eq!(clamp_iterations(1), 10);
        assert_eq!(clamp_iterations(9), 10);
        assert_eq!(clamp_iterations(10), 10);
    }

    #[test]
    fn clamp_iterations_enforces_maximum() {
        assert_eq!(clamp_iterations(2000), 2000);
        assert_eq!(clamp_iterations(2001), 2000);
        assert_eq!(clamp_iterations(99999), 2000);
    }

    #[test]
    fn clamp_iterations_passes_through_valid_values() {
        assert_eq!(clamp_iterations(11), 11);
        assert_eq!(clamp_iterations(150), 150);
        assert_eq!(clamp_iterations(1999), 1999);
    }
}
