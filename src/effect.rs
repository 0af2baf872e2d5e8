//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Resolve `query` to coordinates, then fetch current conditions there.
    /// `generation` tags the result so stale searches can be discarded.
    LookupWeather { generation: u64, query: String },
}
