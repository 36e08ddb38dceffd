//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default number of grant slots per wallet (and per wallet+resource pair).
pub const DEFAULT_GRANT_SLOTS: usize = 20;

/// Permission engine configuration.
///
/// # Example
///
/// ```
/// use rolegate_auth::{ModuleConfig, DEFAULT_GRANT_SLOTS};
///
/// let config = ModuleConfig::default();
/// assert_eq!(config.grant_slots, DEFAULT_GRANT_SLOTS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Fixed grant capacity per key, in both grant stores. Slot
    /// enumeration always returns exactly this many entries,
    /// sentinel-padded past the used count.
    pub grant_slots: usize,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            grant_slots: DEFAULT_GRANT_SLOTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_twenty() {
        assert_eq!(ModuleConfig::default().grant_slots, 20);
    }

    #[test]
    fn serde_roundtrip() {
        let config = ModuleConfig { grant_slots: 8 };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: ModuleConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
