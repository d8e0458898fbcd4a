use bitflags::bitflags;

bitflags! {
    /// Emission options for [`tokens_to_regex`](crate::pattern::tokens_to_regex).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PathOptions: u8 {
        /// Match case-sensitively (matching is case-insensitive by default).
        const SENSITIVE = 1 << 0;
        /// Do not tolerate a missing or extra trailing slash.
        const STRICT = 1 << 1;
        /// Anchor the regex to the end of the input.
        const END = 1 << 2;
    }
}

impl Default for PathOptions {
    fn default() -> Self {
        PathOptions::END
    }
}

bitflags! {
    /// Flag payload of an emitted regex source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RegexFlags: u8 {
        const ICASE = 1 << 0;
        const ECMASCRIPT = 1 << 1;
    }
}

/// Translate emission options into the flag payload carried by the
/// resulting source. Case-insensitive unless `SENSITIVE`; the dialect bit
/// is always set.
pub fn path_flags(options: PathOptions) -> RegexFlags {
    let mut flags = RegexFlags::ECMASCRIPT;
    if !options.contains(PathOptions::SENSITIVE) {
        flags |= RegexFlags::ICASE;
    }
    flags
}
