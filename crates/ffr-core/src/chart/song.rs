/// Song metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongInfo {
    /// Level identifier used by the remote service (unique per song)
    pub level: u32,
    pub name: String,
    /// Source-provided difficulty, 0 when unset
    pub difficulty: u32,
}

impl SongInfo {
    pub fn new(level: u32, name: impl Into<String>, difficulty: u32) -> Self {
        Self {
            level,
            name: name.into(),
            difficulty,
        }
    }
}
