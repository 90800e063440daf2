use std::io::Cursor;

use ascii_rects::{Figure, FigureError, Position};

#[test]
fn strict_check_accepts_the_box_alphabet() {
    let figure = Figure::parse("+--+\n|  |\n+--+\n");
    assert!(figure.check_alphabet().is_ok());
}

#[test]
fn strict_check_names_the_offending_cell() {
    let figure = Figure::parse("+--+\n|  |\n+==+\n");
    let err = figure.check_alphabet().unwrap_err();
    assert!(matches!(
        err,
        FigureError::UnexpectedGlyph { glyph: '=', at } if at == Position::new(2, 1)
    ));
    assert_eq!(err.to_string(), "unexpected glyph '=' at (2, 1)");
}

#[test]
fn lenient_decomposition_ignores_unknown_glyphs() {
    let figure = Figure::parse("+--+==+\n|  |  |\n+--+--+\n");
    assert!(figure.check_alphabet().is_err());

    // The right box has a broken top edge, the left one is intact.
    let shapes: Vec<_> = figure.rectangles().map(|r| r.shape()).collect();
    assert_eq!(shapes.len(), 1);
    assert_eq!((shapes[0].height, shapes[0].width), (3, 4));
}

#[test]
fn figures_load_from_readers() {
    let figure = Figure::from_reader(Cursor::new("++\n++\n"), "<memory>").unwrap();
    assert_eq!(figure.rectangles().count(), 1);
}

#[test]
fn missing_files_report_their_path() {
    let path = std::env::temp_dir()
        .join("ascii_rects_tests")
        .join("does-not-exist.txt");
    let err = Figure::read_path(&path).unwrap_err();
    assert!(matches!(err, FigureError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.txt"));
}
