//! Configuration for ScopeStore engines.
//!
//! The engine is pure memory, so the knobs are capacity hints: how much
//! table space to reserve up front for the backing store and for each
//! freshly opened transaction frame.

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Initial capacity reserved for the backing store's hash table
    pub store_capacity: usize,
    /// Initial overlay capacity for each frame pushed by `begin`
    pub frame_capacity: usize,
    /// Warn (via tracing) when transaction depth crosses this threshold.
    /// Deep nesting is legal; the warning flags a caller that likely
    /// forgot to commit or roll back.
    pub depth_warn_threshold: usize,
}

impl Config {
    /// Sized for interactive/shell workloads: small store, shallow nesting.
    pub fn interactive() -> Self {
        Self {
            store_capacity: 64,
            frame_capacity: 8,
            depth_warn_threshold: 32,
        }
    }

    /// Sized for embedding in a larger service: bigger up-front tables.
    pub fn service() -> Self {
        Self {
            store_capacity: 4096,
            frame_capacity: 64,
            depth_warn_threshold: 128,
        }
    }

    /// Validate all configuration parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.store_capacity == 0 {
            return Err("store_capacity must be > 0".into());
        }
        if self.frame_capacity == 0 {
            return Err("frame_capacity must be > 0".into());
        }
        if self.depth_warn_threshold == 0 {
            return Err("depth_warn_threshold must be > 0".into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self { Self::interactive() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_valid() {
        assert!(Config::interactive().validate().is_ok());
        assert!(Config::service().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut config = Config::default();
        config.store_capacity = 0;
        assert!(config.validate().is_err());
    }
}
