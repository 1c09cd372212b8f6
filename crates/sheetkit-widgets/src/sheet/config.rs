use sheetkit_core::viewport::DEFAULT_FALLBACK_HEIGHT;

use super::SheetError;

/// Downward drag (in pixels) a default sheet must exceed to dismiss.
pub const CLOSE_THRESHOLD: f64 = 50.0;

/// Default height of the drag handle bar, in pixels.
pub const DEFAULT_HANDLE_BAR_HEIGHT: f64 = 4.0;

/// Tunables for a [`BottomSheet`](super::BottomSheet).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SheetConfig {
    /// Dismiss threshold for the default variant (exclusive).
    pub close_threshold: f64,
    /// Handle bar height; eight of these are reserved above the content area.
    pub handle_bar_height: f64,
    /// Static screen height used when the host has no visual viewport.
    pub fallback_height: f64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            close_threshold: CLOSE_THRESHOLD,
            handle_bar_height: DEFAULT_HANDLE_BAR_HEIGHT,
            fallback_height: DEFAULT_FALLBACK_HEIGHT,
        }
    }
}

impl SheetConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dismiss threshold.
    pub fn close_threshold(mut self, threshold: f64) -> Self {
        self.close_threshold = threshold;
        self
    }

    /// Set the handle bar height.
    pub fn handle_bar_height(mut self, height: f64) -> Self {
        self.handle_bar_height = height;
        self
    }

    /// Set the fallback screen height.
    pub fn fallback_height(mut self, height: f64) -> Self {
        self.fallback_height = height;
        self
    }

    /// Reject negative or non-finite values.
    pub fn validate(&self) -> Result<(), SheetError> {
        let fields = [
            ("close_threshold", self.close_threshold),
            ("handle_bar_height", self.handle_bar_height),
            ("fallback_height", self.fallback_height),
        ];
        let errors: Vec<String> = fields
            .iter()
            .filter(|(_, v)| !v.is_finite() || *v < 0.0)
            .map(|(name, v)| format!("{name} must be finite and non-negative, got {v}"))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SheetError::InvalidConfig(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = SheetConfig::default();
        assert_eq!(c.close_threshold, 50.0);
        assert_eq!(c.handle_bar_height, 4.0);
        assert_eq!(c.fallback_height, DEFAULT_FALLBACK_HEIGHT);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let c = SheetConfig::new()
            .close_threshold(80.0)
            .handle_bar_height(6.0)
            .fallback_height(900.0);
        assert_eq!(c.close_threshold, 80.0);
        assert_eq!(c.handle_bar_height, 6.0);
        assert_eq!(c.fallback_height, 900.0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let err = SheetConfig::new()
            .close_threshold(f64::NAN)
            .handle_bar_height(-1.0)
            .validate()
            .unwrap_err();
        let SheetError::InvalidConfig(msg) = err else {
            panic!("expected InvalidConfig");
        };
        assert!(msg.contains("close_threshold"));
        assert!(msg.contains("handle_bar_height"));
        assert!(!msg.contains("fallback_height"));
    }

    #[test]
    fn zero_values_are_valid() {
        let c = SheetConfig::new().close_threshold(0.0).handle_bar_height(0.0);
        assert!(c.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fills_missing_fields() {
        let c: SheetConfig = serde_json::from_str(r#"{"close_threshold":70.0}"#).unwrap();
        assert_eq!(c.close_threshold, 70.0);
        assert_eq!(c.handle_bar_height, DEFAULT_HANDLE_BAR_HEIGHT);
    }
}
