use super::*;

#[test]
fn serialize_emits_byte_offsets_in_scan_order() {
    // Cells 0 and 3 alive: offsets are cell index times the 3-byte stride.
    let mut data = vec![0u8; 4 * CELL_CHANNELS];
    data[0] = 255;
    data[3 * CELL_CHANNELS] = 200;
    assert_eq!(serialize_cells(&data), "0 9");
}

#[test]
fn weakly_alive_cells_do_not_serialize() {
    let mut data = vec![0u8; 2 * CELL_CHANNELS];
    data[0] = 128; // threshold is strictly above 128
    data[CELL_CHANNELS] = 129;
    assert_eq!(serialize_cells(&data), "3");
}

#[test]
fn round_trip_preserves_the_pattern() {
    let mut data = vec![0u8; 10 * CELL_CHANNELS];
    for cell in [0usize, 3, 4, 9] {
        data[cell * CELL_CHANNELS] = 255;
    }

    let text = serialize_cells(&data);
    let mut restored = vec![7u8; 10 * CELL_CHANNELS];
    let applied = deserialize_cells(&text, &mut restored);

    assert_eq!(applied, 4);
    for cell in 0..10 {
        assert_eq!(
            restored[cell * CELL_CHANNELS] > 128,
            data[cell * CELL_CHANNELS] > 128,
            "cell {cell}"
        );
    }
}

#[test]
fn import_is_best_effort_over_bad_tokens() {
    let mut data = vec![0u8; 3 * CELL_CHANNELS];
    let applied = deserialize_cells("nonsense 3 -1 99999", &mut data);
    assert_eq!(applied, 1);
    assert_eq!(data[3], 255);
}

#[test]
fn an_empty_snapshot_clears_everything() {
    let mut data = vec![255u8; 2 * CELL_CHANNELS];
    assert_eq!(deserialize_cells("", &mut data), 0);
    assert!(data.iter().all(|&b| b == 0));
}

#[test]
fn sessions_serialize_for_interchange() {
    let session = BoardSession {
        width: 3,
        height: 2,
        cells: "0 9".to_string(),
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: BoardSession = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
