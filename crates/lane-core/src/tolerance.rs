/// Linear and angular tolerances for geometric comparisons.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in model units)
    pub linear: f64,
    /// Angular tolerance (in radians)
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }

    /// Relaxed tolerance for interactive editing, where handle drags
    /// produce coordinates far noisier than file import does.
    pub fn loose() -> Self {
        Self {
            linear: 1e-4,
            angular: 1e-6,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }

    /// Check if two angles are equal within angular tolerance
    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_default_precision() {
        let t = Tolerance::default();
        assert_eq!(t.linear, Tolerance::DEFAULT_LINEAR);
        assert_eq!(t.angular, Tolerance::DEFAULT_ANGULAR);
    }

    #[test]
    fn test_linear_eq() {
        let t = Tolerance::loose();
        assert!(t.linear_eq(1.0, 1.0 + 1e-5));
        assert!(!t.linear_eq(1.0, 1.001));
    }

    #[test]
    fn test_is_zero() {
        let t = Tolerance::default_precision();
        assert!(t.is_zero(1e-12));
        assert!(!t.is_zero(1e-6));
    }
}
