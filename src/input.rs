//! Held-control snapshot read by the simulation each tick
//!
//! The shell captures device events and maintains one of these; the core
//! never sees raw key events. The snapshot is pure data.

/// A control identifier the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Attack,
    Cast,
}

/// The set of currently-held controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inputs {
    held: u8,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn bit(control: Control) -> u8 {
        1 << control as u8
    }

    /// Mark a control as held (key down).
    pub fn press(&mut self, control: Control) {
        self.held |= Self::bit(control);
    }

    /// Mark a control as released (key up).
    pub fn release(&mut self, control: Control) {
        self.held &= !Self::bit(control);
    }

    /// Release everything (window blur, phase change).
    pub fn clear(&mut self) {
        self.held = 0;
    }

    /// Whether the control is currently held.
    #[inline]
    pub fn held(&self, control: Control) -> bool {
        self.held & Self::bit(control) != 0
    }

    /// Horizontal axis from Left/Right as -1, 0 or 1. Both held cancel out.
    pub fn axis_x(&self) -> f32 {
        let mut axis = 0.0;
        if self.held(Control::Left) {
            axis -= 1.0;
        }
        if self.held(Control::Right) {
            axis += 1.0;
        }
        axis
    }

    /// Vertical axis from Up/Down as -1, 0 or 1. Up is negative because the
    /// world y axis grows downward.
    pub fn axis_y(&self) -> f32 {
        let mut axis = 0.0;
        if self.held(Control::Up) {
            axis -= 1.0;
        }
        if self.held(Control::Down) {
            axis += 1.0;
        }
        axis
    }
}
