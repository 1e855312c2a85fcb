//! Unit tests for maze carving, solving and rendering.

use rstest::rstest;

use super::{Maze, MazeParams, Room};
use crate::error::{MazeError, MazeErrorCode};
use crate::graph::Edge;

fn params(width: usize, height: usize, seed: u64) -> MazeParams {
    MazeParams {
        width,
        height,
        seed,
        max_weight: 100,
    }
}

#[rstest]
#[case::no_columns(0, 3)]
#[case::no_rows(3, 0)]
#[case::empty(0, 0)]
fn rejects_zero_dimensions(#[case] width: usize, #[case] height: usize) {
    let err = Maze::carve(params(width, height, 1)).expect_err("dimension must be rejected");
    assert_eq!(err, MazeError::ZeroDimension { width, height });
    assert_eq!(err.code(), MazeErrorCode::ZeroDimension);
}

#[test]
fn rejects_empty_weight_range() {
    let err = Maze::carve(MazeParams {
        max_weight: 0,
        ..MazeParams::default()
    })
    .expect_err("weight range must be rejected");
    assert_eq!(err.code().as_str(), "MAZE_ZERO_WEIGHT_RANGE");
}

#[rstest]
#[case::single_room(1, 1)]
#[case::corridor(7, 1)]
#[case::column(1, 5)]
#[case::square(6, 6)]
#[case::wide(20, 9)]
fn carving_opens_a_spanning_tree(#[case] width: usize, #[case] height: usize) {
    let maze = Maze::carve(params(width, height, 42)).expect("maze must carve");
    assert_eq!(maze.width(), width);
    assert_eq!(maze.height(), height);
    assert_eq!(maze.passage_count(), width * height - 1);
    assert!(
        maze.passages()
            .minimum_spanning_tree()
            .expect("passages form a graph")
            .is_tree()
    );
}

#[test]
fn passages_join_orthogonal_neighbours_only() {
    let maze = Maze::carve(params(9, 7, 3)).expect("maze must carve");
    for edge in maze.passages().edges() {
        let (a, b) = (*edge.vertex1(), *edge.vertex2());
        let steps = a.row.abs_diff(b.row) + a.column.abs_diff(b.column);
        assert_eq!(steps, 1, "passage {a} -> {b} is not between neighbours");
        assert_eq!(edge.weight(), 1.0);
    }
}

#[test]
fn same_seed_carves_the_same_maze() {
    let first = Maze::carve(params(12, 12, 99)).expect("maze must carve");
    let second = Maze::carve(params(12, 12, 99)).expect("maze must carve");
    assert_eq!(first.passages().edges(), second.passages().edges());
    assert_eq!(first.render(&[]), second.render(&[]));
}

#[test]
fn different_seeds_carve_different_mazes() {
    let baseline = Maze::carve(params(12, 12, 0)).expect("maze must carve").render(&[]);
    let differs = (1..8).any(|seed| {
        Maze::carve(params(12, 12, seed))
            .expect("maze must carve")
            .render(&[])
            != baseline
    });
    assert!(differs);
}

/// With a single weight value every wall ties, so walls are removed in
/// construction order.
fn tied_two_by_two() -> Maze {
    Maze::carve(MazeParams {
        width: 2,
        height: 2,
        seed: 5,
        max_weight: 1,
    })
    .expect("maze must carve")
}

#[test]
fn renders_walls_and_passages() {
    let maze = tied_two_by_two();
    assert_eq!(maze.render(&[]), "#####\n#   #\n# # #\n# # #\n#####\n");
}

#[test]
fn solves_and_marks_the_route() {
    let maze = tied_two_by_two();
    let route = maze
        .solve(Room::new(1, 0), Room::new(1, 1))
        .expect("rooms are connected");

    assert_eq!(
        route,
        vec![
            Room::new(1, 0),
            Room::new(0, 0),
            Room::new(0, 1),
            Room::new(1, 1),
        ]
    );
    assert!(maze.is_open(Room::new(0, 0), Room::new(1, 0)));
    assert!(!maze.is_open(Room::new(1, 0), Room::new(1, 1)));
    assert_eq!(maze.render(&route), "#####\n#...#\n#.#.#\n#S#E#\n#####\n");
}

#[test]
fn single_room_maze_solves_to_itself() {
    let maze = Maze::carve(params(1, 1, 0)).expect("maze must carve");
    let route = maze
        .solve(Room::new(0, 0), Room::new(0, 0))
        .expect("trivial route");
    assert_eq!(route, vec![Room::new(0, 0)]);
    assert_eq!(maze.render(&route), "###\n#S#\n###\n");
}

#[test]
fn solution_walks_through_open_passages() {
    let maze = Maze::carve(params(15, 10, 11)).expect("maze must carve");
    let route = maze
        .solve(Room::new(0, 0), Room::new(9, 14))
        .expect("every room is reachable");

    assert_eq!(route.first(), Some(&Room::new(0, 0)));
    assert_eq!(route.last(), Some(&Room::new(9, 14)));
    for pair in route.windows(2) {
        assert!(maze.is_open(pair[0], pair[1]), "{} -> {} is walled", pair[0], pair[1]);
    }
}

#[rstest]
#[case::row_outside(Room::new(4, 0), Room::new(0, 0), 4, 0)]
#[case::column_outside(Room::new(0, 0), Room::new(1, 6), 1, 6)]
fn rejects_rooms_outside_the_maze(
    #[case] from: Room,
    #[case] to: Room,
    #[case] row: usize,
    #[case] column: usize,
) {
    let maze = Maze::carve(params(3, 4, 0)).expect("maze must carve");
    let err = maze.solve(from, to).expect_err("room is outside the maze");
    assert_eq!(err, MazeError::UnknownRoom { row, column });
    assert_eq!(err.code().as_str(), "MAZE_UNKNOWN_ROOM");
}
