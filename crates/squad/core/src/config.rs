/// Planner configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Number of squads a roster may hold. Capped at [`Self::MAX_SQUADS`].
    pub max_squads: usize,
    /// Value pre-filled into an unassigned bean slot.
    pub default_bean_value: u16,
}

impl PlannerConfig {
    // ===== compile-time constants =====
    /// Upper bound of a single bean's magnitude.
    pub const MAX_BEAN_POINTS: u16 = 198;
    pub const BEAN_SLOTS: usize = 3;
    pub const PRESET_PASSIVE_SLOTS: usize = 5;
    pub const MAX_SQUADS: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BEAN_VALUE: u16 = 80;

    pub fn new() -> Self {
        Self {
            max_squads: Self::MAX_SQUADS,
            default_bean_value: Self::DEFAULT_BEAN_VALUE,
        }
    }

    /// Effective squad limit after applying the hard cap.
    pub fn squad_limit(&self) -> usize {
        self.max_squads.min(Self::MAX_SQUADS)
    }

    /// Default bean value clamped into the legal range.
    pub fn bean_default(&self) -> u16 {
        self.default_bean_value.min(Self::MAX_BEAN_POINTS)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
