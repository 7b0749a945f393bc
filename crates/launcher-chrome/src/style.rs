//! Window style bits.

use std::ops::{BitAnd, BitOr, Not};

/// A window's style bit set (`GWL_STYLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowStyle(u32);

impl WindowStyle {
    /// Title bar.
    pub const CAPTION: Self = Self(0x00C0_0000);
    /// Window menu and close button.
    pub const SYSMENU: Self = Self(0x0008_0000);
    /// Sizing border.
    pub const SIZE_BOX: Self = Self(0x0004_0000);
    /// Minimize button.
    pub const MINIMIZE_BOX: Self = Self(0x0002_0000);
    /// Maximize button.
    pub const MAXIMIZE_BOX: Self = Self(0x0001_0000);

    /// Standard overlapped top-level window.
    pub const OVERLAPPED_WINDOW: Self = Self(
        Self::CAPTION.0
            | Self::SYSMENU.0
            | Self::SIZE_BOX.0
            | Self::MINIMIZE_BOX.0
            | Self::MAXIMIZE_BOX.0,
    );

    /// Bits that let the user resize or maximize a window.
    pub const RESIZE_AFFORDANCES: Self = Self(Self::SIZE_BOX.0 | Self::MAXIMIZE_BOX.0);

    /// Wrap raw style bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw style bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if all bits of `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any bit of `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// This style with resizing and maximizing removed.
    pub const fn without_resize_affordances(self) -> Self {
        Self(self.0 & !Self::RESIZE_AFFORDANCES.0)
    }
}

impl BitOr for WindowStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for WindowStyle {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for WindowStyle {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapped_window_has_all_affordances() {
        let style = WindowStyle::OVERLAPPED_WINDOW;
        assert!(style.contains(WindowStyle::RESIZE_AFFORDANCES));
        assert!(style.contains(WindowStyle::MINIMIZE_BOX));
        assert!(style.contains(WindowStyle::CAPTION | WindowStyle::SYSMENU));
    }

    #[test]
    fn test_without_resize_affordances() {
        let style = WindowStyle::OVERLAPPED_WINDOW.without_resize_affordances();
        assert!(!style.intersects(WindowStyle::RESIZE_AFFORDANCES));
        assert!(style.contains(WindowStyle::MINIMIZE_BOX));
        assert!(style.contains(WindowStyle::SYSMENU));
        assert_eq!(style.without_resize_affordances(), style);
    }

    #[test]
    fn test_bit_operators() {
        let style = WindowStyle::CAPTION | WindowStyle::SIZE_BOX;
        assert_eq!(style & WindowStyle::SIZE_BOX, WindowStyle::SIZE_BOX);
        assert_eq!(style & !WindowStyle::SIZE_BOX, WindowStyle::CAPTION);
        assert_eq!(WindowStyle::from_bits(style.bits()), style);
    }
}
