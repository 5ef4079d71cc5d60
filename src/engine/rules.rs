use crate::foundation::error::{BoardError, BoardResult};

/// Number of entries in a transition table: neighbour counts 0 through 8.
pub const RULE_ENTRIES: usize = 9;

/// Which of the board's two transition tables an update replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Table consulted for cells that are currently alive.
    Survive,
    /// Table consulted for cells that are currently dead.
    Revive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One 9-entry transition table indexed by live-neighbour count.
///
/// `table[n]` answers "does a cell with `n` live neighbours end up alive?",
/// for currently-alive cells when installed as the survive table and for
/// currently-dead cells when installed as the revive table. Replacing a
/// table is a constant-time upload; existing board state is not recomputed.
pub struct RuleTable([bool; RULE_ENTRIES]);

impl RuleTable {
    /// Build a table from explicit entries.
    pub const fn new(entries: [bool; RULE_ENTRIES]) -> Self {
        Self(entries)
    }

    /// Build a table from a slice, validating that it has exactly 9 entries.
    pub fn from_slice(entries: &[bool]) -> BoardResult<Self> {
        let entries: [bool; RULE_ENTRIES] =
            entries
                .try_into()
                .map_err(|_| BoardError::SizeMismatch {
                    expected: RULE_ENTRIES,
                    actual: entries.len(),
                })?;
        Ok(Self(entries))
    }

    /// Build a table that is live exactly for the given neighbour counts.
    ///
    /// Counts above 8 are ignored. `from_counts(&[2, 3])` is the classic
    /// survive table, `from_counts(&[3])` the classic revive table.
    pub fn from_counts(counts: &[usize]) -> Self {
        let mut entries = [false; RULE_ENTRIES];
        for &count in counts {
            if count < RULE_ENTRIES {
                entries[count] = true;
            }
        }
        Self(entries)
    }

    /// Classic Life survival: an alive cell stays alive on 2 or 3 neighbours.
    pub const fn classic_survive() -> Self {
        Self([false, false, true, true, false, false, false, false, false])
    }

    /// Classic Life birth: a dead cell comes alive on exactly 3 neighbours.
    pub const fn classic_revive() -> Self {
        Self([false, false, false, true, false, false, false, false, false])
    }

    /// Whether a cell with `neighbours` live neighbours ends up alive.
    pub fn live(&self, neighbours: usize) -> bool {
        self.0.get(neighbours).copied().unwrap_or(false)
    }

    /// The raw entries.
    pub fn entries(&self) -> [bool; RULE_ENTRIES] {
        self.0
    }

    /// Encode as the 9×1 single-channel upload the lookup kernel samples,
    /// one 0/255 byte per neighbour count.
    pub(crate) fn to_bytes(&self) -> [u8; RULE_ENTRIES] {
        let mut bytes = [0u8; RULE_ENTRIES];
        for (byte, &live) in bytes.iter_mut().zip(self.0.iter()) {
            *byte = if live { 255 } else { 0 };
        }
        bytes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/rules.rs"]
mod tests;
