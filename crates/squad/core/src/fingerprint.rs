//! Memoization keys for evaluated stats.
//!
//! A slot's computed stats depend on the player, the slot configuration and,
//! through passives, on the rest of the squad and the active conditions. Cache
//! slot-level results under [`slot_fingerprint`] and squad-level results under
//! [`squad_fingerprint`].

use sha2::{Digest, Sha256};

use crate::env::PlayerId;
use crate::passive::PassiveOptions;
use crate::squad::{SlotConfig, Squad};

/// SHA-256 over the bincode encoding of `(player, config, options)`.
pub fn slot_fingerprint(player: PlayerId, config: &SlotConfig, options: &PassiveOptions) -> [u8; 32] {
    let mut hasher = Sha256::new();
    if let Ok(bytes) = bincode::serialize(&(player, config, options)) {
        hasher.update(&bytes);
    }
    hasher.finalize().into()
}

/// SHA-256 over every slot's occupant and effective configuration, in layout
/// order, followed by the squad's passive options.
pub fn squad_fingerprint(squad: &Squad) -> [u8; 32] {
    let mut hasher = Sha256::new();

    for slot in squad.slots() {
        let entry = (&slot.id, squad.player_in(&slot.id), squad.slot_config(&slot.id));
        if let Ok(bytes) = bincode::serialize(&entry) {
            hasher.update(&bytes);
        }
    }
    if let Ok(bytes) = bincode::serialize(squad.passive_options()) {
        hasher.update(&bytes);
    }

    hasher.finalize().into()
}
