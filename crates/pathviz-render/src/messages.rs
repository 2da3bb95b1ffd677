//! Input events: [`Msg`], [`Key`], [`MouseAction`], [`ModMask`].

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key the host understands. Keys outside this set are dropped
/// by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Backspace,
    Tab,
    /// A printable character other than space.
    Char(char),
}

// ---------------------------------------------------------------------------
// ModMask
// ---------------------------------------------------------------------------

/// Modifier keys held during an input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CTRL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    /// Whether every modifier in `other` is held.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether no modifier is held.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ModMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ---------------------------------------------------------------------------
// MouseAction
// ---------------------------------------------------------------------------

/// What a mouse event did. Drags are reported per button so the host can
/// paint or erase along the stroke.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Middle button pressed.
    Auxiliary,
    /// Secondary (right) button pressed.
    Secondary,
    /// Moved with the primary button held.
    DragMain,
    /// Moved with the secondary button held.
    DragSecondary,
    /// Button released.
    Release,
    /// Moved with no button held.
    Move,
}

// ---------------------------------------------------------------------------
// Msg
// ---------------------------------------------------------------------------

/// An input message delivered to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// A key was pressed. Releases and repeats never arrive here.
    KeyDown {
        key: Key,
        modifiers: ModMask,
    },
    /// A mouse event at a terminal position.
    Mouse {
        action: MouseAction,
        pos: Point,
        modifiers: ModMask,
    },
    /// The terminal was resized.
    Screen {
        width: i32,
        height: i32,
    },
    /// The window or terminal asked to close.
    Quit,
}

impl Msg {
    /// A `KeyDown` with no modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: ModMask::NONE,
        }
    }

    /// A `KeyDown` with the given modifiers.
    pub fn key_mod(key: Key, modifiers: ModMask) -> Self {
        Self::KeyDown { key, modifiers }
    }

    /// A mouse event with no modifiers.
    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse {
            action,
            pos,
            modifiers: ModMask::NONE,
        }
    }

    /// Whether this is Ctrl-C.
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            Self::KeyDown { key: Key::Char('c' | 'C'), modifiers } if modifiers.contains(ModMask::CTRL)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_needs_ctrl() {
        assert!(Msg::key_mod(Key::Char('c'), ModMask::CTRL).is_interrupt());
        assert!(Msg::key_mod(Key::Char('c'), ModMask::CTRL | ModMask::SHIFT).is_interrupt());
        assert!(!Msg::key(Key::Char('c')).is_interrupt());
        assert!(!Msg::key_mod(Key::Char('x'), ModMask::CTRL).is_interrupt());
    }

    #[test]
    fn mod_mask_ops() {
        let m = ModMask::SHIFT | ModMask::ALT;
        assert!(m.contains(ModMask::ALT));
        assert!(!m.contains(ModMask::CTRL));
        assert!(!m.is_empty());
    }
}
