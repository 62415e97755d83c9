use tablecalc_core::{Position, Sheet, SheetError};

fn pos(a1: &str) -> Position {
    Position::parse(a1).unwrap()
}

#[test]
fn end_to_end_editing_session() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "2").unwrap();
    sheet.set_cell(pos("A2"), "3").unwrap();
    sheet.set_cell(pos("A3"), "=A1+A2").unwrap();
    sheet.set_cell(pos("A4"), "=A3*2").unwrap();

    assert_eq!(
        sheet
            .get_cell(pos("A4"))
            .unwrap()
            .unwrap()
            .get_value(&sheet)
            .to_string(),
        "10"
    );

    sheet.set_cell(pos("A1"), "100").unwrap();
    assert_eq!(
        sheet
            .get_cell(pos("A4"))
            .unwrap()
            .unwrap()
            .get_value(&sheet)
            .to_string(),
        "206"
    );
}

#[test]
fn rejects_out_of_range_position() {
    let mut sheet = Sheet::new();
    let bad = Position::new(Position::MAX_ROWS, 0);
    let err = sheet.set_cell(bad, "1").unwrap_err();
    assert!(matches!(err, SheetError::Position(_)));
}

#[test]
fn rejects_formula_syntax_errors_without_mutating() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "5").unwrap();
    let err = sheet.set_cell(pos("A1"), "=1++1").unwrap_err();
    assert!(matches!(err, SheetError::Syntax(_)));
    assert_eq!(
        sheet.get_cell(pos("A1")).unwrap().unwrap().get_text(),
        "5"
    );
}

#[test]
fn three_cell_cycle_is_rejected() {
    let mut sheet = Sheet::new();
    sheet.set_cell(pos("A1"), "=A2+1").unwrap();
    sheet.set_cell(pos("A2"), "=A3+1").unwrap();
    let err = sheet.set_cell(pos("A3"), "=A1+1").unwrap_err();
    assert_eq!(err, SheetError::CircularDependency);
    // A3 was never successfully written.
    assert!(sheet.get_cell(pos("A3")).unwrap().is_none());
}
