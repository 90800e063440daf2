use ascii_rects::decompose;

fn sorted(text: &str) -> Vec<String> {
    let mut out: Vec<String> = decompose(text).map(|r| r.into_string()).collect();
    out.sort();
    out
}

#[test]
fn two_boxes_side_by_side() {
    let figure = concat!(
        "+------+-----+\n",
        "|      |     |\n",
        "+------+-----+\n",
    );
    assert_eq!(
        sorted(figure),
        vec![
            "+-----+\n|     |\n+-----+\n".to_string(),
            "+------+\n|      |\n+------+\n".to_string(),
        ]
    );
}

#[test]
fn tall_box_above_a_split_row() {
    let figure = concat!(
        "+------------+\n",
        "|            |\n",
        "|            |\n",
        "|            |\n",
        "+------+-----+\n",
        "|      |     |\n",
        "|      |     |\n",
        "+------+-----+\n",
    );
    let mut expected = vec![
        concat!(
            "+------------+\n",
            "|            |\n",
            "|            |\n",
            "|            |\n",
            "+------------+\n",
        )
        .to_string(),
        "+------+\n|      |\n|      |\n+------+\n".to_string(),
        "+-----+\n|     |\n|     |\n+-----+\n".to_string(),
    ];
    expected.sort();
    assert_eq!(sorted(figure), expected);
}

#[test]
fn small_box_sitting_on_a_wide_one() {
    // The top row is indented and padded with trailing spaces.
    let figure = concat!(
        "   +-----+     \n",
        "   |     |     \n",
        "+--+-----+----+\n",
        "|             |\n",
        "|             |\n",
        "+-------------+\n",
    );
    let mut expected = vec![
        "+-----+\n|     |\n+-----+\n".to_string(),
        "+-------------+\n|             |\n|             |\n+-------------+\n".to_string(),
    ];
    expected.sort();
    assert_eq!(sorted(figure), expected);
}

#[test]
fn subdivided_box_yields_its_parts_not_the_envelope() {
    let parts = sorted("+--+--+\n|  |  |\n+--+--+");
    assert_eq!(parts, vec!["+--+\n|  |\n+--+\n".to_string(); 2]);
}

#[test]
fn degenerate_figures_yield_nothing() {
    assert_eq!(decompose("").count(), 0);
    assert_eq!(decompose("\n").count(), 0);
    assert_eq!(decompose("+--+--+").count(), 0);
    assert_eq!(decompose("+").count(), 0);
    assert_eq!(decompose("   \n + \n   \n").count(), 0);
}

#[test]
fn smallest_boxes_have_no_interior() {
    assert_eq!(sorted("++\n++\n"), vec!["++\n++\n".to_string()]);
    assert_eq!(sorted("+++\n+++\n"), vec!["++\n++\n".to_string(); 2]);
}

#[test]
fn open_figures_degrade_to_what_is_closed() {
    // The right box is missing its bottom-right corner.
    let figure = concat!(
        "+--+--+\n",
        "|  |  |\n",
        "+--+--\n",
    );
    assert_eq!(sorted(figure), vec!["+--+\n|  |\n+--+\n".to_string()]);
}

#[test]
fn crlf_input_renders_crlf_rows() {
    let parts = sorted("+-+-+\r\n| | |\r\n+-+-+\r\n");
    assert_eq!(parts, vec!["+-+\r\n| |\r\n+-+\r\n".to_string(); 2]);
}

#[test]
fn stray_interior_glyphs_are_rendered_blank() {
    let parts = sorted("+---+\n| x |\n+---+\n");
    assert_eq!(parts, vec!["+---+\n|   |\n+---+\n".to_string()]);
}
