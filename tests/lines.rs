use hyperlines::core::config::BoardConfig;
use hyperlines::core::coord::Coord;
use hyperlines::core::line::{Line, LineSet};
use hyperlines::games::hypercube::{enumerate_lines, expected_line_count, hypercube_lines};
use hyperlines::games::hypercube_index::LineIndex;
use std::collections::HashSet;

const BOARDS: [(usize, usize); 9] = [
    (1, 1),
    (1, 5),
    (2, 1),
    (2, 3),
    (2, 4),
    (3, 2),
    (3, 3),
    (4, 4),
    (5, 3),
];

fn board_lines(dimensions: usize, side: usize) -> (BoardConfig, LineSet) {
    let config = BoardConfig::new(dimensions, side).unwrap();
    (config, hypercube_lines(&config))
}

#[test]
fn tictactoe_has_8_lines() {
    assert_eq!(enumerate_lines(2, 3).unwrap().len(), 8);
}

#[test]
fn cube_has_49_lines() {
    assert_eq!(enumerate_lines(3, 3).unwrap().len(), 49);
}

#[test]
fn default_board_has_520_lines() {
    let (_, lines) = board_lines(4, 4);
    assert_eq!(lines.len(), 520);
}

#[test]
fn counts_match_closed_form() {
    for (d, s) in BOARDS {
        let (config, lines) = board_lines(d, s);
        assert_eq!(
            Some(lines.len() as u128),
            expected_line_count(&config),
            "{}D board of side {}",
            d,
            s
        );
    }
}

#[test]
fn every_line_is_valid() {
    for (d, s) in BOARDS {
        let (config, lines) = board_lines(d, s);
        for line in &lines {
            assert!(line.is_valid(&config), "invalid line {:?}", line);
            assert!(line.is_canonical());
        }
    }
}

#[test]
fn no_line_repeats_a_cell() {
    // the all-constant pattern would put the same cell `side` times in a line
    for (d, s) in BOARDS.into_iter().filter(|&(_, s)| s > 1) {
        let (_, lines) = board_lines(d, s);
        for line in &lines {
            assert_ne!(line.direction(), Some(0));
            let cells: HashSet<&Coord> = line.cells().iter().collect();
            assert_eq!(cells.len(), s);
        }
    }
}

#[test]
fn no_two_lines_share_their_cells() {
    let (_, lines) = board_lines(4, 4);
    let cell_sets: HashSet<Vec<Coord>> = lines
        .iter()
        .map(|line| {
            let mut cells = line.cells().to_vec();
            cells.sort();
            cells
        })
        .collect();
    assert_eq!(cell_sets.len(), lines.len());
}

#[test]
fn full_diagonals_are_present() {
    // lines advancing along every axis: 2^(d-1) of them
    let (_, lines) = board_lines(4, 4);
    let full = lines
        .iter()
        .filter(|line| line.direction() == Some(0b1111))
        .count();
    assert_eq!(full, 8);

    let main_diagonal = Line::new((0..4).map(|t| Coord::new(vec![t; 4])).collect());
    assert!(lines.contains(&main_diagonal));
}

#[test]
fn enumeration_is_deterministic() {
    let (_, first) = board_lines(3, 4);
    let (_, second) = board_lines(3, 4);
    assert_eq!(first, second);
    assert!(first.iter().eq(second.iter()));
}

#[test]
fn index_memberships_cover_every_line_cell() {
    let (config, lines) = board_lines(4, 4);
    let index = LineIndex::build(&config, &lines);

    let memberships: usize = (0..index.num_cells())
        .map(|cell| index.lines_through_index(cell).unwrap().len())
        .sum();
    assert_eq!(memberships, lines.len() * 4);

    // a corner of the 4D board lies on 2^4 - 1 lines
    assert_eq!(index.lines_through(&Coord::new(vec![0; 4])).unwrap().len(), 15);
}

#[test]
fn invalid_configurations() {
    assert!(enumerate_lines(0, 4).is_err());
    assert!(enumerate_lines(4, 0).is_err());
}
