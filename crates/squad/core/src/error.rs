//! Common error infrastructure for squad-core.
//!
//! The engine itself is total: stat aggregation and passive resolution never
//! fail. Errors only arise when a squad is edited with input that does not
//! match the catalog or the slot layout.

use crate::env::{EquipmentCategory, EquipmentId, PassiveId, PassiveKind, PlayerId};
use crate::squad::SlotId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the edit may succeed once other state changes
/// - **Validation**: invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: roster is full.
    Recoverable,

    /// Examples: unknown slot, passive from the wrong pool.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for squad-core errors.
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Rejected squad edit.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SquadError {
    #[error("slot `{0}` does not exist in this squad")]
    UnknownSlot(SlotId),

    #[error("slot `{0}` appears more than once in the layout")]
    DuplicateSlot(SlotId),

    #[error("player {0} not found")]
    UnknownPlayer(PlayerId),

    #[error("equipment `{0}` not found")]
    UnknownEquipment(EquipmentId),

    #[error("equipment `{equipment}` is {actual}, not {expected}")]
    EquipmentCategoryMismatch {
        equipment: EquipmentId,
        expected: EquipmentCategory,
        actual: EquipmentCategory,
    },

    #[error("passive `{0}` not found")]
    UnknownPassive(PassiveId),

    #[error("passive `{passive}` cannot be assigned from the {pool} pool")]
    PassiveNotInPool { passive: PassiveId, pool: PassiveKind },

    #[error("bean index {index} out of range (max {max})")]
    BeanIndexOutOfRange { index: usize, max: usize },

    #[error("preset passive index {index} out of range (max {max})")]
    PresetIndexOutOfRange { index: usize, max: usize },

    #[error("roster already holds the maximum of {max} squads")]
    SquadLimitReached { max: usize },

    #[error("squad {0} not found")]
    SquadNotFound(usize),
}

impl PlannerError for SquadError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SquadLimitReached { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSlot(_) => "SQUAD_UNKNOWN_SLOT",
            Self::DuplicateSlot(_) => "SQUAD_DUPLICATE_SLOT",
            Self::UnknownPlayer(_) => "SQUAD_UNKNOWN_PLAYER",
            Self::UnknownEquipment(_) => "SQUAD_UNKNOWN_EQUIPMENT",
            Self::EquipmentCategoryMismatch { .. } => "SQUAD_EQUIPMENT_CATEGORY_MISMATCH",
            Self::UnknownPassive(_) => "SQUAD_UNKNOWN_PASSIVE",
            Self::PassiveNotInPool { .. } => "SQUAD_PASSIVE_NOT_IN_POOL",
            Self::BeanIndexOutOfRange { .. } => "SQUAD_BEAN_INDEX_OUT_OF_RANGE",
            Self::PresetIndexOutOfRange { .. } => "SQUAD_PRESET_INDEX_OUT_OF_RANGE",
            Self::SquadLimitReached { .. } => "SQUAD_LIMIT_REACHED",
            Self::SquadNotFound(_) => "SQUAD_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(
            SquadError::SquadLimitReached { max: 6 }
                .severity()
                .is_recoverable()
        );
        let error = SquadError::UnknownSlot(SlotId::from("fw-9"));
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "SQUAD_UNKNOWN_SLOT");
        assert_eq!(error.to_string(), "slot `fw-9` does not exist in this squad");
    }
}
