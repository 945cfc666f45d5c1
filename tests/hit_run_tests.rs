use broadside::{adjacent_hit_runs, Board, Cell, Direction, HitRun};

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
                        _ => panic!("bad cell token {ch}"),
                    })
                    .collect()
            })
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_lone_hits_report_all_open_neighbours() {
    let b = board(&[".....", ".H...", "L.M..", ".M...", ".M.H."]);
    let runs = adjacent_hit_runs(&b);

    let expected = [
        ((0, 1), Direction::Top),
        ((1, 0), Direction::Left),
        ((1, 2), Direction::Right),
        ((2, 1), Direction::Bottom),
        ((3, 3), Direction::Top),
        ((4, 2), Direction::Left),
        ((4, 4), Direction::Right),
    ];
    assert_eq!(runs.len(), expected.len());
    for (coord, direction) in expected {
        assert_eq!(
            runs.get(&coord),
            Some(&HitRun {
                seq_length: 1,
                direction
            }),
            "wrong entry at {coord:?}"
        );
    }
}

#[test]
fn test_long_segments_report_run_lengths() {
    let b = board(&[".H...", ".H...", "L.M..", "HMHHH", ".M.H."]);
    let runs = adjacent_hit_runs(&b);

    let expected = [
        ((0, 0), 1, Direction::Left),
        ((0, 2), 1, Direction::Right),
        ((1, 0), 1, Direction::Left),
        ((1, 2), 1, Direction::Right),
        ((2, 1), 2, Direction::Bottom),
        ((2, 3), 2, Direction::Top),
        ((2, 4), 1, Direction::Top),
        ((4, 0), 1, Direction::Bottom),
        ((4, 2), 1, Direction::Bottom),
        ((4, 4), 1, Direction::Bottom),
    ];
    assert_eq!(runs.len(), expected.len());
    for (coord, seq_length, direction) in expected {
        assert_eq!(
            runs.get(&coord),
            Some(&HitRun {
                seq_length,
                direction
            }),
            "wrong entry at {coord:?}"
        );
    }
}

#[test]
fn test_cell_beside_two_runs_keeps_the_longer() {
    let b = board(&[".H...", ".H...", "L.M..", "HHHHH", ".M.HH"]);
    let runs = adjacent_hit_runs(&b);

    // (2,1) borders the two-hit column run and the single (3,1) cross arm;
    // (4,2) borders the single (3,2) arm and the two-hit row run.
    assert_eq!(
        runs.get(&(2, 1)),
        Some(&HitRun {
            seq_length: 2,
            direction: Direction::Bottom
        })
    );
    assert_eq!(
        runs.get(&(4, 2)),
        Some(&HitRun {
            seq_length: 2,
            direction: Direction::Left
        })
    );
    assert_eq!(runs.len(), 9);
}

#[test]
fn test_straight_run_reports_both_ends_symmetrically() {
    for len in 1..=4usize {
        let mut b = Board::new(7, 7);
        for i in 0..len {
            b.set(3, 1 + i, Cell::Hit);
        }
        let runs = adjacent_hit_runs(&b);
        assert_eq!(
            runs.get(&(3, 0)),
            Some(&HitRun {
                seq_length: len,
                direction: Direction::Left
            })
        );
        assert_eq!(
            runs.get(&(3, 1 + len)),
            Some(&HitRun {
                seq_length: len,
                direction: Direction::Right
            })
        );
    }
}

#[test]
fn test_board_without_hits_yields_empty_map() {
    let b = board(&["...", "LM.", "..."]);
    assert!(adjacent_hit_runs(&b).is_empty());
}
