//! Random rectangular mazes carved with Kruskal's algorithm.
//!
//! Rooms form a grid and every pair of orthogonal neighbours is separated by
//! a wall. Carving draws a random weight for each wall from a seeded
//! generator and knocks down the walls of a minimum spanning tree ranked by
//! those weights, so every room is reachable by exactly one route. The walls
//! themselves keep unit weight, which makes solution length equal to the
//! number of steps.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    error::MazeError,
    graph::{Edge, Graph, WeightedEdge},
};

/// Parameters controlling [`Maze::carve`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MazeParams {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Seed for the wall-weight generator.
    pub seed: u64,
    /// Exclusive upper bound for random wall weights.
    pub max_weight: u32,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            width: 16,
            height: 8,
            seed: 0,
            max_weight: 100,
        }
    }
}

impl MazeParams {
    fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_weight == 0 {
            return Err(MazeError::ZeroWeightRange);
        }
        Ok(())
    }
}

/// A room addressed by row and column, both zero-based.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Room {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl Room {
    /// Creates a room reference.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A carved maze: a spanning tree of open passages between rooms.
///
/// # Examples
/// ```
/// use arbor_core::{Maze, MazeParams, Room};
///
/// let maze = Maze::carve(MazeParams { width: 4, height: 3, seed: 7, max_weight: 50 })?;
/// assert_eq!(maze.passage_count(), 11);
/// let route = maze.solve(Room::new(0, 0), Room::new(2, 3))?;
/// assert_eq!(route.first(), Some(&Room::new(0, 0)));
/// assert_eq!(route.last(), Some(&Room::new(2, 3)));
/// # Ok::<(), arbor_core::MazeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    passages: Graph<Room, WeightedEdge<Room>>,
}

impl Maze {
    /// Carves a maze according to `params`.
    ///
    /// The same parameters always produce the same maze.
    ///
    /// # Errors
    /// Returns [`MazeError::ZeroDimension`] or [`MazeError::ZeroWeightRange`]
    /// for unusable parameters.
    #[instrument(
        name = "maze.carve",
        level = "debug",
        err,
        skip_all,
        fields(width = params.width, height = params.height, seed = params.seed),
    )]
    pub fn carve(params: MazeParams) -> Result<Self, MazeError> {
        params.validate()?;
        let rooms = grid_rooms(params.width, params.height);
        let grid = Graph::new(rooms.iter().copied(), grid_walls(params.width, params.height))?;

        let mut rng = SmallRng::seed_from_u64(params.seed);
        let wall_weights: Vec<f64> = (0..grid.edge_count())
            .map(|_| f64::from(rng.gen_range(0..params.max_weight)))
            .collect();

        let forest = grid.minimum_spanning_tree_with(|position, _| {
            wall_weights.get(position).copied().unwrap_or(f64::NAN)
        })?;
        let removed = forest.into_tree()?;
        debug!(
            walls = grid.edge_count(),
            removed = removed.len(),
            "walls chosen for removal"
        );

        let passages = Graph::new(rooms, removed.into_iter().copied())?;
        Ok(Self {
            width: params.width,
            height: params.height,
            passages,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn width(&self) -> usize { self.width }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn height(&self) -> usize { self.height }

    /// Returns the number of open passages.
    #[must_use]
    #[rustfmt::skip]
    pub const fn passage_count(&self) -> usize { self.passages.edge_count() }

    /// Returns the graph of rooms joined by open passages.
    #[must_use]
    #[rustfmt::skip]
    pub const fn passages(&self) -> &Graph<Room, WeightedEdge<Room>> { &self.passages }

    /// Returns `true` when a passage joins `a` and `b` directly.
    #[must_use]
    pub fn is_open(&self, a: Room, b: Room) -> bool {
        self.passages
            .incident_edges(&a)
            .is_some_and(|mut edges| edges.any(|edge| edge.other_vertex(&a) == Some(&b)))
    }

    /// Returns the rooms visited walking from `from` to `to`, both included.
    ///
    /// # Errors
    /// Returns [`MazeError::UnknownRoom`] when either room lies outside the
    /// maze.
    pub fn solve(&self, from: Room, to: Room) -> Result<Vec<Room>, MazeError> {
        self.check_room(from)?;
        self.check_room(to)?;
        let path = self.passages.shortest_path(&from, &to)?;

        let mut rooms = Vec::with_capacity(path.len() + 1);
        rooms.push(from);
        let mut current = from;
        for edge in path.edges() {
            if let Some(&next) = edge.other_vertex(&current) {
                rooms.push(next);
                current = next;
            }
        }
        Ok(rooms)
    }

    /// Draws the maze as ASCII art.
    ///
    /// Walls are `#`. Rooms and passages on `route` are marked with `.`, and
    /// the first and last rooms of a non-empty route with `S` and `E`.
    #[must_use]
    pub fn render(&self, route: &[Room]) -> String {
        let mut canvas = Canvas::new(self.width, self.height);
        for room in self.passages.vertices() {
            canvas.paint_room(*room, ' ');
        }
        for edge in self.passages.edges() {
            canvas.paint_between(*edge.vertex1(), *edge.vertex2(), ' ');
        }

        for room in route {
            canvas.paint_room(*room, '.');
        }
        for pair in route.windows(2) {
            if let [a, b] = pair {
                canvas.paint_between(*a, *b, '.');
            }
        }
        if let [first, ..] = route {
            canvas.paint_room(*first, 'S');
        }
        if let [_, .., last] = route {
            canvas.paint_room(*last, 'E');
        }
        canvas.into_string()
    }

    fn check_room(&self, room: Room) -> Result<(), MazeError> {
        if room.row < self.height && room.column < self.width {
            Ok(())
        } else {
            Err(MazeError::UnknownRoom {
                row: room.row,
                column: room.column,
            })
        }
    }
}

fn grid_rooms(width: usize, height: usize) -> Vec<Room> {
    (0..height)
        .flat_map(|row| (0..width).map(move |column| Room::new(row, column)))
        .collect()
}

/// One wall per pair of orthogonal neighbours, right-hand walls first within
/// each room.
fn grid_walls(width: usize, height: usize) -> Vec<WeightedEdge<Room>> {
    let mut walls = Vec::new();
    let mut sequence = 0_u64;
    for row in 0..height {
        for column in 0..width {
            let room = Room::new(row, column);
            if column + 1 < width {
                walls.push(WeightedEdge::new(room, Room::new(row, column + 1), 1.0, sequence));
                sequence += 1;
            }
            if row + 1 < height {
                walls.push(WeightedEdge::new(room, Room::new(row + 1, column), 1.0, sequence));
                sequence += 1;
            }
        }
    }
    walls
}

/// Character grid with rooms at odd coordinates and walls between them.
struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec!['#'; 2 * width + 1]; 2 * height + 1],
        }
    }

    fn paint(&mut self, y: usize, x: usize, mark: char) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|line| line.get_mut(x)) {
            *cell = mark;
        }
    }

    fn paint_room(&mut self, room: Room, mark: char) {
        self.paint(2 * room.row + 1, 2 * room.column + 1, mark);
    }

    /// Paints the wall cell separating two adjacent rooms.
    fn paint_between(&mut self, a: Room, b: Room, mark: char) {
        self.paint(a.row + b.row + 1, a.column + b.column + 1, mark);
    }

    fn into_string(self) -> String {
        let mut out = String::new();
        for line in self.cells {
            out.extend(line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests;
