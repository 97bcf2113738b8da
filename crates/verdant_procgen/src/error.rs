/// Errors raised when a generator is handed parameters it cannot work with.
///
/// Every generator validates its inputs before touching any output, so an
/// `Err` always means nothing was produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// A parameter is outside the range the generator accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A replacement raster does not match the raster it replaces.
    #[error("size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

pub type Result<T> = std::result::Result<T, GenerationError>;

impl GenerationError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Rasters are normalized by `coordinate / (size - 1)`, so anything below two
/// samples per axis has no valid normalization.
pub fn require_raster_size(name: &'static str, size: usize) -> Result<()> {
    if size < 2 {
        return Err(GenerationError::invalid(
            name,
            format!("must be at least 2, got {size}"),
        ));
    }
    Ok(())
}

/// Accepts any finite, non-negative extent (zero included).
pub fn require_extent(name: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GenerationError::invalid(
            name,
            format!("must be finite and non-negative, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_size() {
        assert!(require_raster_size("resolution", 2).is_ok());
        assert!(require_raster_size("resolution", 513).is_ok());

        let err = require_raster_size("resolution", 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument `resolution`: must be at least 2, got 1"
        );
        assert!(require_raster_size("resolution", 0).is_err());
    }

    #[test]
    fn test_extent() {
        assert!(require_extent("width", 0.0).is_ok());
        assert!(require_extent("width", 12.5).is_ok());
        assert!(require_extent("width", -0.1).is_err());
        assert!(require_extent("width", f32::NAN).is_err());
        assert!(require_extent("width", f32::INFINITY).is_err());
    }
}
