use gridroute_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use gridroute_paths::CostConfig;

/// Settings for a new [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionConfig {
    /// Grid width in cells.
    pub width: i32,
    /// Grid height in cells.
    pub height: i32,
    /// Cost model settings used by [`Session::run`](crate::Session::run).
    pub cost: CostConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cost: CostConfig::default(),
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let c: SessionConfig = serde_json::from_str(r#"{"width":10}"#).unwrap();
        assert_eq!(c.width, 10);
        assert_eq!(c.height, DEFAULT_HEIGHT);
        assert_eq!(c.cost, CostConfig::default());

        let c: SessionConfig =
            serde_json::from_str(r#"{"cost":{"hazard_penalty":4}}"#).unwrap();
        assert_eq!(c.cost.hazard_penalty, 4);
        assert_eq!(c.width, DEFAULT_WIDTH);
    }
}
