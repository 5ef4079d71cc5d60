use super::*;

#[test]
fn pattern_length_is_validated() {
    let err = Brush::new("bad", "Test", 2, 2, vec![true; 3]).unwrap_err();
    assert!(matches!(
        err,
        crate::foundation::error::BoardError::SizeMismatch {
            expected: 4,
            actual: 3
        }
    ));
}

#[test]
fn center_sits_between_cells_for_even_patterns() {
    let odd = Brush::new("odd", "Test", 3, 3, vec![true; 9]).unwrap();
    assert_eq!(odd.center(), Point::new(1.5, 1.5));

    let even = Brush::new("even", "Test", 4, 2, vec![true; 8]).unwrap();
    assert_eq!(even.center(), Point::new(2.0, 1.0));
}

#[test]
fn out_of_bounds_bits_are_dead() {
    let brush = Brush::dot();
    assert!(brush.get(0, 0));
    assert!(!brush.get(1, 0));
    assert!(!brush.get(0, 7));
}

#[test]
fn builtin_names_announce_their_population() {
    let brushes = builtin_brushes();
    assert_eq!(brushes.len(), 8);

    for brush in &brushes {
        brush.validate().unwrap();
        let expected: usize = brush
            .name
            .split('-')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap();
        let bits = brush.cells.iter().filter(|&&b| b).count();
        assert_eq!(bits, expected, "{}", brush.name);
    }
}

#[test]
fn builtin_lookup_finds_by_name() {
    assert!(builtin_brush("5-Jet").is_some());
    assert!(builtin_brush("tsunami").is_none());
}

#[test]
fn interchange_format_round_trips() {
    let brush = builtin_brush("4-Circle").unwrap();
    let json = serde_json::to_value(&brush).unwrap();

    assert_eq!(json["name"], "4-Circle");
    assert_eq!(json["category"], "Staying");
    assert_eq!(json["width"], 3);
    assert_eq!(json["cells"].as_array().unwrap().len(), 9);

    let back: Brush = serde_json::from_value(json).unwrap();
    assert_eq!(back, brush);
}
