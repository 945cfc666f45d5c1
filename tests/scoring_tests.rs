use broadside::{
    alignment_counts, hit_alignment_count, score_free_cells, score_hit_option, ship_adjacency,
    Board, Cell, Direction, HitRun, Roster,
};

fn board(rows: &[&str]) -> Board {
    Board::from_rows(
        rows.iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match ch {
                        '.' => Cell::Empty,
                        'M' => Cell::Miss,
                        'H' => Cell::Hit,
                        'L' => Cell::Land,
                        'A'..='J' => Cell::Sunk(ch as usize - 'A' as usize),
                        _ => panic!("bad cell token {ch}"),
                    })
                    .collect()
            })
            .collect(),
    )
    .unwrap()
}

fn roster(lengths: &[usize]) -> Roster {
    Roster::new(lengths.to_vec()).unwrap()
}

#[test]
fn test_no_heuristics_scores_equal_reduced_counts() {
    let b = board(&["....", ".H..", "L.M.", ".M.."]);
    let ships = roster(&[2, 3, 4]);
    let scores = score_free_cells(&b, &ships, &[]);
    let counts = alignment_counts(&b, &ships, true);
    for (row_s, row_c) in scores.iter().zip(&counts) {
        for (s, c) in row_s.iter().zip(row_c) {
            assert_eq!(*s, *c as f64);
        }
    }
}

#[test]
fn test_identity_weight_reproduces_counts() {
    let b = board(&["....", ".H..", "L.M.", ".M.."]);
    let ships = roster(&[2, 3, 4]);
    let scores = score_free_cells(&b, &ships, &[(ship_adjacency, 1.0)]);
    let counts = alignment_counts(&b, &ships, true);
    for (row_s, row_c) in scores.iter().zip(&counts) {
        for (s, c) in row_s.iter().zip(row_c) {
            assert_eq!(*s, *c as f64);
        }
    }
}

#[test]
fn test_ship_adjacency_discount() {
    let b = board(&["....", ".H..", "L.M.", ".M.."]);
    let ships = roster(&[2, 3, 4]);
    let expected = vec![
        vec![2.0, 2.5, 3.5, 5.0],
        vec![0.0, 0.0, 1.0, 5.5],
        vec![0.0, 0.0, 0.0, 5.0],
        vec![0.0, 0.0, 0.0, 4.0],
    ];
    let scores = score_free_cells(&b, &ships, &[(ship_adjacency, 0.5)]);
    assert_eq!(scores, expected);
}

#[test]
fn test_ship_adjacency_amplification() {
    let b = board(&["....", ".H..", "L.M.", ".M.."]);
    let ships = roster(&[2, 3, 4]);
    let expected = vec![
        vec![8.0, 10.0, 11.0, 8.0],
        vec![0.0, 0.0, 4.0, 7.0],
        vec![0.0, 0.0, 0.0, 5.0],
        vec![0.0, 0.0, 0.0, 4.0],
    ];
    let scores = score_free_cells(&b, &ships, &[(ship_adjacency, 2.0)]);
    assert_eq!(scores, expected);
}

#[test]
fn test_hit_option_scores_without_heuristics() {
    let b = board(&["...A.", ".H.A.", "L.M..", ".M...", ".M..."]);
    let ships = roster(&[2, 3]);
    let cases = [
        ((0, 1), Direction::Top),
        ((1, 0), Direction::Left),
        ((1, 2), Direction::Right),
        ((2, 1), Direction::Bottom),
    ];
    for (coord, direction) in cases {
        let run = HitRun {
            seq_length: 1,
            direction,
        };
        assert_eq!(
            score_hit_option(&b, &ships, coord, &run, &[]),
            2.0,
            "wrong score at {coord:?}"
        );
    }
}

#[test]
fn test_hit_option_heuristic_scales_whole_band() {
    // Every band alignment touches the candidate cell, which neighbours
    // the hit, so the adjacency weight scales the entire score.
    let b = board(&["...A.", ".H.A.", "L.M..", ".M...", ".M..."]);
    let ships = roster(&[2, 3]);
    let run = HitRun {
        seq_length: 1,
        direction: Direction::Top,
    };
    let plain = score_hit_option(&b, &ships, (0, 1), &run, &[]);
    let scaled = score_hit_option(&b, &ships, (0, 1), &run, &[(ship_adjacency, 0.5)]);
    assert_eq!(scaled, plain * 0.5);
}

#[test]
fn test_hit_band_counts_below_a_sequence() {
    let b = board(&[".H...", ".H...", "L.M..", "...H.", ".M..."]);
    let ships = roster(&[2, 3, 4, 5]);
    // The two-hit column run: length 2 is already spanned and length 5
    // runs into the miss, leaving one fit each for 3 and 4.
    let run_a = HitRun {
        seq_length: 2,
        direction: Direction::Bottom,
    };
    assert_eq!(hit_alignment_count(&b, &ships, (2, 1), &run_a), 2);

    let run_b = HitRun {
        seq_length: 1,
        direction: Direction::Bottom,
    };
    assert_eq!(hit_alignment_count(&b, &ships, (3, 3), &run_b), 6);
}

#[test]
fn test_hit_band_counts_above_a_sequence() {
    let b = board(&[".....", ".H...", "L.M..", ".....", ".M..H"]);
    let ships = roster(&[2, 3, 4, 5, 6]);
    let run = HitRun {
        seq_length: 1,
        direction: Direction::Top,
    };
    assert_eq!(hit_alignment_count(&b, &ships, (3, 4), &run), 4);
    assert_eq!(hit_alignment_count(&b, &ships, (0, 1), &run), 3);
}

#[test]
fn test_hit_band_counts_beside_a_sequence() {
    let b = board(&[".H...", ".H...", "L.M..", ".....", ".M.H."]);
    let ships = roster(&[2, 3, 4, 5, 6]);
    let run = HitRun {
        seq_length: 1,
        direction: Direction::Right,
    };
    assert_eq!(hit_alignment_count(&b, &ships, (0, 2), &run), 6);
    assert_eq!(hit_alignment_count(&b, &ships, (4, 4), &run), 2);

    let left_run = HitRun {
        seq_length: 1,
        direction: Direction::Left,
    };
    assert_eq!(hit_alignment_count(&b, &ships, (0, 0), &left_run), 4);
}

#[test]
fn test_scoring_is_deterministic() {
    let b = board(&["....", ".H..", "L.M.", ".M.."]);
    let ships = roster(&[2, 3, 4]);
    let first = score_free_cells(&b, &ships, &[(ship_adjacency, 0.5)]);
    let second = score_free_cells(&b, &ships, &[(ship_adjacency, 0.5)]);
    assert_eq!(first, second);
}
