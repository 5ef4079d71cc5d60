//! The textual board snapshot format.
//!
//! A snapshot is the space-separated list of byte offsets (cell index times
//! the 3-byte cell stride) of all alive cells, in row-major scan order.
//! The offsets address bytes of the upload layout rather than cell indices;
//! that layout detail is kept so documents written by earlier exports keep
//! loading. Dimensions do not travel inside the string; [`BoardSession`]
//! carries them alongside.

use crate::{
    engine::board::CELL_CHANNELS,
    foundation::error::{BoardError, BoardResult},
};

/// Render the alive cells of a cell-layout byte array as a snapshot string.
///
/// A cell is alive when its R byte is above 128.
pub fn serialize_cells(data: &[u8]) -> String {
    let mut offsets = Vec::new();
    let mut offset = 0;
    while offset < data.len() {
        if data[offset] > 128 {
            offsets.push(offset.to_string());
        }
        offset += CELL_CHANNELS;
    }
    offsets.join(" ")
}

/// Apply a snapshot string onto a cell-layout byte array.
///
/// The array is zeroed first, then every referenced byte is set to 255.
/// Import is best-effort: the format carries no checksum, so tokens that do
/// not parse or point outside the array are skipped with a warning instead
/// of aborting the rest of the load. Returns how many bytes were set.
pub fn deserialize_cells(text: &str, data: &mut [u8]) -> usize {
    data.fill(0);
    let mut applied = 0;
    for token in text.split_whitespace() {
        match parse_offset(token, data.len()) {
            Ok(offset) => {
                data[offset] = 255;
                applied += 1;
            }
            Err(err) => tracing::warn!(token, %err, "skipping snapshot token"),
        }
    }
    applied
}

fn parse_offset(token: &str, len: usize) -> BoardResult<usize> {
    let offset = token.parse::<usize>().map_err(|_| {
        BoardError::malformed_snapshot(format!("'{token}' is not a non-negative integer"))
    })?;
    if offset >= len {
        return Err(BoardError::malformed_snapshot(format!(
            "offset {offset} exceeds the buffer length {len}"
        )));
    }
    Ok(offset)
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Self-contained save of a painted board.
///
/// The snapshot string does not embed the board size, so width and height
/// travel next to it; restoring resizes first, then applies the cells.
pub struct BoardSession {
    /// Board width in cells.
    pub width: u32,
    /// Board height in cells.
    pub height: u32,
    /// Raw snapshot string, as produced by [`serialize_cells`].
    pub cells: String,
}

#[cfg(test)]
#[path = "../../tests/unit/paint/snapshot.rs"]
mod tests;
