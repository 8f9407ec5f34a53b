/// Counters describing how a session's requests were served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// GETs actually issued.
    pub fetches: u64,
    /// Requests answered from a stored body.
    pub hits: u64,
    /// Requests that waited on another placeholder's in-flight GET.
    pub joined: u64,
}

impl CacheStats {
    /// Requests served without issuing a GET of their own.
    pub fn reused(&self) -> u64 {
        self.hits + self.joined
    }
}
