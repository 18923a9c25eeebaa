// SPDX-License-Identifier: MIT
//
// Public API checks: what a display layer sees when it feeds user text
// through validation, generation, layout and reporting.

use hue_gen::{
    Grid, Ink, MAX_COUNT, Rgb, detail_rows, generate, heading, label_ink, palette, parse_count,
    process_lines, to_hex,
};
use pretty_assertions::assert_eq;

fn hexes(n: usize) -> Vec<String> {
    generate(n).into_iter().map(to_hex).collect()
}

#[test]
fn twelve_colors_step_thirty_degrees() {
    assert_eq!(
        hexes(12),
        vec![
            "#FF0000", "#FF8000", "#FFFF00", "#80FF00", "#00FF00", "#00FF80",
            "#00FFFF", "#0080FF", "#0000FF", "#8000FF", "#FF00FF", "#FF0080",
        ]
    );
}

#[test]
fn text_to_palette() {
    let n = parse_count(" 6\n").unwrap();
    assert_eq!(
        hexes(n),
        vec!["#FF0000", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#FF00FF"]
    );
}

#[test]
fn rejected_text_never_reaches_the_generator() {
    for bad in ["", "0", "-1", "101", "2.5", "ten"] {
        assert!(parse_count(bad).is_err(), "{bad:?}");
    }
}

#[test]
fn every_accepted_count_yields_distinct_colors() {
    // Up to 100 hues the 8-bit rounding never collapses two neighbours.
    for n in 1..=MAX_COUNT {
        let colors = generate(n);
        let mut unique = colors.clone();
        unique.sort_by_key(|c| c.to_tuple());
        unique.dedup();
        assert_eq!(unique.len(), n, "n = {n}");
    }
}

#[test]
fn first_color_is_always_red() {
    for n in 1..=MAX_COUNT {
        assert_eq!(generate(n)[0], Rgb::new(255, 0, 0), "n = {n}");
    }
}

#[test]
fn report_pieces_agree() {
    let p = palette(8);
    let rows = detail_rows(&p);
    let process = process_lines(&p);

    assert_eq!(heading(p.len()), "Generated 8 Colors:");
    for row in &rows {
        let line = format!("  Color {}: RGB{} = {}", row.number, row.rgb, row.hex);
        assert!(process.contains(&line), "missing {line:?}");
    }
}

#[test]
fn grid_holds_whole_palette() {
    let p = palette(20);
    let grid = Grid::new(p.len(), 8);
    assert_eq!((grid.rows(), grid.cols()), (3, 8));
    assert_eq!(grid.position(p.len() - 1), (2, 3));
}

#[test]
fn labels_stay_legible_on_the_wheel() {
    let inks: Vec<Ink> = generate(6).into_iter().map(label_ink).collect();
    assert_eq!(
        inks,
        vec![Ink::Dark, Ink::Dark, Ink::Dark, Ink::Dark, Ink::Light, Ink::Dark]
    );
}
