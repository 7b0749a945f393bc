//! Cached process icons.
//!
//! Launcher windows all show the icon embedded in the launcher binary. The
//! icons are extracted once into an [`IconCache`] and then assigned to each
//! window the launcher creates.

/// A non-owning reference to a native icon resource.
///
/// Icons extracted for the cache live for the rest of the process and are
/// reclaimed by the system at exit, so this type has no destructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(isize);

impl IconHandle {
    /// Wrap a raw native icon handle. Returns `None` for the null handle.
    pub const fn from_raw(raw: isize) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// The raw native icon handle.
    pub const fn raw(self) -> isize {
        self.0
    }
}

/// Which of a window's two icon slots an icon is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconClass {
    /// Alt-Tab and taskbar icon.
    Big,
    /// Title bar icon.
    Small,
}

/// The large and small icons extracted from a binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconPair {
    /// Large icon, if one was extracted.
    pub large: Option<IconHandle>,
    /// Small icon, if one was extracted.
    pub small: Option<IconHandle>,
}

impl IconPair {
    /// An empty pair.
    pub const fn empty() -> Self {
        Self {
            large: None,
            small: None,
        }
    }

    /// Icons present in this pair, tagged with the slot they belong in.
    pub fn assignments(&self) -> impl Iterator<Item = (IconClass, IconHandle)> {
        let large = self.large.map(|icon| (IconClass::Big, icon));
        let small = self.small.map(|icon| (IconClass::Small, icon));
        large.into_iter().chain(small)
    }
}

/// Outcome of an icon extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractedIcons {
    /// Number of icons the system reported as extracted.
    pub count: u32,
    /// The icons themselves.
    pub icons: IconPair,
}

/// Single-slot icon cache with an explicit "not loaded" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconCache {
    /// No load has been attempted yet.
    #[default]
    NotLoaded,
    /// Icons from the most recent load, possibly empty.
    Loaded(IconPair),
}

impl IconCache {
    /// Replace the cached pair.
    pub fn store(&mut self, icons: IconPair) {
        *self = Self::Loaded(icons);
    }

    /// The cached pair, or `None` if nothing was loaded.
    pub fn icons(&self) -> Option<&IconPair> {
        match self {
            Self::NotLoaded => None,
            Self::Loaded(icons) => Some(icons),
        }
    }

    /// Returns `true` once a load has been attempted.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}
