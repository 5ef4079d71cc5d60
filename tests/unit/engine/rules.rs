use super::*;

#[test]
fn classic_tables_encode_conway() {
    let survive = RuleTable::classic_survive();
    let revive = RuleTable::classic_revive();

    for neighbours in 0..RULE_ENTRIES {
        assert_eq!(survive.live(neighbours), neighbours == 2 || neighbours == 3);
        assert_eq!(revive.live(neighbours), neighbours == 3);
    }
}

#[test]
fn from_counts_matches_explicit_tables() {
    assert_eq!(RuleTable::from_counts(&[2, 3]), RuleTable::classic_survive());
    assert_eq!(RuleTable::from_counts(&[3]), RuleTable::classic_revive());
    // Counts past 8 have no entry to set.
    assert_eq!(RuleTable::from_counts(&[3, 42]), RuleTable::classic_revive());
}

#[test]
fn from_slice_requires_nine_entries() {
    assert!(RuleTable::from_slice(&[true; 9]).is_ok());
    let err = RuleTable::from_slice(&[true; 8]).unwrap_err();
    assert!(matches!(
        err,
        BoardError::SizeMismatch {
            expected: 9,
            actual: 8
        }
    ));
}

#[test]
fn upload_bytes_are_full_scale_booleans() {
    let bytes = RuleTable::classic_survive().to_bytes();
    assert_eq!(bytes, [0, 0, 255, 255, 0, 0, 0, 0, 0]);
}

#[test]
fn out_of_range_lookups_are_dead() {
    assert!(!RuleTable::new([true; 9]).live(9));
}
