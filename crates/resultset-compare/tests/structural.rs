//! Structural guards and single-cell perturbation on hand-built workbooks

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use resultset_compare::{compare, CompareError, ComparisonFinding};
use resultset_core::{CellValue, Grid, Sheet, Workbook};

fn users_grid() -> Grid {
    let joined = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
    Grid::from_rows(vec![
        vec!["Id".into(), "Name".into(), "Active".into(), "Joined".into()],
        vec![1.into(), "John".into(), true.into(), CellValue::date(joined)],
        vec![2.into(), "Jane".into(), false.into(), CellValue::Empty],
    ])
    .unwrap()
}

fn users_workbook() -> Workbook {
    Workbook::from_sheets(vec![
        Sheet::with_cells("Users", users_grid()),
        Sheet::with_cells("Totals", Grid::from_rows(vec![vec![2.into()]]).unwrap()),
    ])
    .unwrap()
}

#[test]
fn test_identical_workbooks_have_no_findings() {
    let report = compare(&users_workbook(), &users_workbook()).unwrap();
    assert!(report.is_identical());
    assert_eq!(report.sheets_compared, 2);
    assert_eq!(report.cells_compared, 13);
}

#[test]
fn test_single_cell_change_is_one_finding() {
    let control = users_workbook();
    let mut test = users_workbook();
    let mut grid = users_grid();
    grid.set_value("B3", "Janet").unwrap();
    test.sheet_mut(0).unwrap().set_cells(Some(grid));

    let report = compare(&control, &test).unwrap();
    assert_eq!(
        report.findings,
        vec![ComparisonFinding {
            sheet_name: "Users".into(),
            row: 2,
            column: 1,
            control_value: CellValue::string("Jane"),
            test_value: CellValue::string("Janet"),
        }]
    );
}

#[test]
fn test_null_versus_value_is_a_finding() {
    let control = users_workbook();
    let mut test = users_workbook();
    let mut grid = users_grid();
    grid.set_value("D3", NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap())
        .unwrap();
    grid.set_value("C2", CellValue::Empty).unwrap();
    test.sheet_mut(0).unwrap().set_cells(Some(grid));

    let report = compare(&control, &test).unwrap();
    let addresses: Vec<String> = report
        .findings
        .iter()
        .map(|f| f.address().to_string())
        .collect();
    // Row-major discovery order
    assert_eq!(addresses, vec!["C2", "D3"]);
    assert_eq!(report.findings[0].test_value, CellValue::Empty);
    assert_eq!(report.findings[1].control_value, CellValue::Empty);
}

#[test]
fn test_number_and_text_never_match() {
    let control =
        Workbook::from_sheets(vec![Sheet::with_cells("S", Grid::from_rows(vec![vec![1.into()]]).unwrap())])
            .unwrap();
    let test = Workbook::from_sheets(vec![Sheet::with_cells(
        "S",
        Grid::from_rows(vec![vec!["1".into()]]).unwrap(),
    )])
    .unwrap();

    assert_eq!(compare(&control, &test).unwrap().findings.len(), 1);
}

#[test]
fn test_sheet_count_mismatch() {
    let control = users_workbook();
    let test = Workbook::from_sheets(vec![Sheet::with_cells("Users", users_grid())]).unwrap();

    assert_eq!(
        compare(&control, &test),
        Err(CompareError::SheetCountMismatch { control: 2, test: 1 })
    );
}

#[test]
fn test_sheet_name_mismatch() {
    let control = users_workbook();
    let test = Workbook::from_sheets(vec![
        Sheet::with_cells("Users", users_grid()),
        Sheet::with_cells("Summary", Grid::from_rows(vec![vec![2.into()]]).unwrap()),
    ])
    .unwrap();

    let err = compare(&control, &test).unwrap_err();
    assert_eq!(
        err,
        CompareError::SheetNameMismatch {
            index: 1,
            control: "Totals".into(),
            test: "Summary".into(),
        }
    );
    assert!(err.to_string().contains("different sheet names"));
}

#[test]
fn test_row_count_mismatch() {
    let control = users_workbook();
    let mut test = users_workbook();
    let short = Grid::from_rows(users_grid().rows().take(2).map(<[CellValue]>::to_vec).collect())
        .unwrap();
    test.sheet_mut(0).unwrap().set_cells(Some(short));

    assert!(matches!(
        compare(&control, &test),
        Err(CompareError::RowCountMismatch { index: 0, control: 3, test: 2, .. })
    ));
}

#[test]
fn test_column_count_mismatch() {
    let control = users_workbook();
    let mut test = users_workbook();
    test.sheet_mut(1)
        .unwrap()
        .set_cells(Some(Grid::from_rows(vec![vec![2.into(), 3.into()]]).unwrap()));

    assert!(matches!(
        compare(&control, &test),
        Err(CompareError::ColumnCountMismatch { index: 1, control: 1, test: 2, .. })
    ));
}
