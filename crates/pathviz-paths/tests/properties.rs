//! Property tests: both algorithms agree with a plain BFS on random boards.

use std::collections::VecDeque;

use pathviz_core::Point;
use pathviz_paths::{Algorithm, Board, CellState, Outcome, SearchState};
use proptest::prelude::*;

const N: i32 = 8;

/// BFS distance in moves, ignoring the board's cached adjacency.
fn bfs_distance(board: &Board, from: Point, to: Point) -> Option<usize> {
    let mut dist = vec![usize::MAX; board.len()];
    let idx = |p: Point| (p.y * N + p.x) as usize;
    let mut queue = VecDeque::from([from]);
    dist[idx(from)] = 0;
    while let Some(p) = queue.pop_front() {
        if p == to {
            return Some(dist[idx(p)]);
        }
        for q in p.neighbors_4() {
            if board.state(q).is_some_and(|s| s != CellState::Barrier) && dist[idx(q)] == usize::MAX {
                dist[idx(q)] = dist[idx(p)] + 1;
                queue.push_back(q);
            }
        }
    }
    None
}

fn arb_point() -> impl Strategy<Value = Point> {
    (0..N, 0..N).prop_map(|(r, c)| Point::from_row_col(r, c))
}

/// A board with distinct start and end and up to a third of it walled.
fn arb_board() -> impl Strategy<Value = Board> {
    (arb_point(), arb_point(), prop::collection::vec(arb_point(), 0..22))
        .prop_filter("start and end differ", |(s, e, _)| s != e)
        .prop_map(|(start, end, walls)| {
            let mut board = Board::build(N).unwrap();
            board.paint(start).unwrap();
            board.paint(end).unwrap();
            for p in walls {
                board.paint(p).unwrap();
            }
            board.refresh_adjacency();
            board
        })
}

fn run(board: &mut Board, algorithm: Algorithm) -> Outcome {
    let (start, end) = (board.start().unwrap(), board.end().unwrap());
    SearchState::new(board, start, end, algorithm.heuristic_enabled())
        .unwrap()
        .run(board, |_| {}, || false)
        .outcome
}

proptest! {
    #[test]
    fn both_algorithms_find_optimal_paths(board in arb_board()) {
        let (start, end) = (board.start().unwrap(), board.end().unwrap());
        let expected = bfs_distance(&board, start, end);

        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut b = board.clone();
            match (run(&mut b, algorithm), expected) {
                (Outcome::Found(path), Some(d)) => {
                    prop_assert_eq!(path.len(), d + 1);
                    prop_assert_eq!(path[0], start);
                    prop_assert_eq!(*path.last().unwrap(), end);
                    for w in path.windows(2) {
                        let step = w[1] - w[0];
                        prop_assert_eq!(step.x.abs() + step.y.abs(), 1);
                        prop_assert_ne!(b.state(w[1]), Some(CellState::Barrier));
                    }
                }
                (Outcome::NotFound, None) => {
                    prop_assert_eq!(b.count(CellState::Frontier), 0);
                }
                (got, want) => prop_assert!(false, "{algorithm}: got {got:?}, bfs says {want:?}"),
            }
        }
    }

    #[test]
    fn rerun_after_clearing_gives_the_same_path(board in arb_board()) {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let mut b = board.clone();
            let first = run(&mut b, algorithm);
            b.clear_search_marks();
            let second = run(&mut b, algorithm);
            prop_assert_eq!(first, second);
        }
    }
}
