//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (e.g. `MoveError`, `AttackError`) live next to the
//! actions they validate. Every one of them implements [`GameError`] so hosts
//! can decide how loudly to report a failure without matching on each enum.

/// Severity level of an error, used for categorization and logging.
///
/// - **Rejected**: a precondition did not hold; the action is a no-op
/// - **Internal**: the state drifted from an invariant; indicates a bug
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The action was not applicable to the current state.
    ///
    /// Examples: moving twice in a turn, attacking with nothing in range
    Rejected,

    /// Unexpected state inconsistency.
    ///
    /// Examples: HP above maximum, dead enemy still in the roster
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tactics-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by cause, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant (metrics, tests).
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for NeverError {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match *self {}
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NeverError {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Err(serde::de::Error::custom("NeverError cannot be deserialized"))
    }
}
