//! Board Configuration
//!
//! Compile-time defaults for the board, provided to components via context.

use crate::generator::GenerationPolicy;

/// Endpoint that receives the submitted sum
pub const DEFAULT_SUM_ENDPOINT: &str = "https://superchat-challenge-numbers.free.beeceptor.com/sum";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// POST target for the sum
    pub endpoint: String,
    /// How many numbers a fresh list holds
    pub count: usize,
    /// Upper bound of generated values (inclusive, lower bound is 1)
    pub max_value: u32,
    pub policy: GenerationPolicy,
    /// How long a toast stays visible (0 = until clicked)
    pub toast_duration_ms: u32,
    /// Treat non-2xx responses as failures
    pub require_ok_status: bool,
    pub log_level: log::Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUM_ENDPOINT.to_string(),
            count: 10,
            max_value: 100,
            policy: GenerationPolicy::Unique,
            toast_duration_ms: 3000,
            require_ok_status: false,
            log_level: if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info },
        }
    }
}
