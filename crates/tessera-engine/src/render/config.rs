/// Limits applied by the paint walk.
///
/// Exceeding a limit skips the offending pattern fill with a warning; the rest of
/// the tree still paints.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Largest number of tiles a single pattern fill may expand into.
    pub max_pattern_tiles: u64,
    /// Deepest nesting of pattern fills inside pattern content.
    pub max_pattern_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_pattern_tiles: 16_384,
            max_pattern_depth: 16,
        }
    }
}
