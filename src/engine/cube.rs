//! Virtual 3x3x3 cube used to verify Fewest Moves solutions
//!
//! The cube is stored as six 3x3 facelet grids. Each grid is read as seen
//! from outside that face with U on top for the side faces, B on top for U
//! and F on top for D. A sticker holds the index of the face it started on.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::FMC_SOLUTION_MOVES;

use super::duration::SolveTime;

/// Sticker grid of one face
type Grid = [[u8; 3]; 3];

/// Errors raised while reading move notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Token is not a face turn or cube rotation
    #[error("invalid move: {0}")]
    InvalidMove(String),
}

/// Cube faces in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    U = 0,
    L = 1,
    F = 2,
    R = 3,
    B = 4,
    D = 5,
}

/// Whole-cube rotation axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Follows R
    X,
    /// Follows U
    Y,
    /// Follows F
    Z,
}

/// What a move turns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Face(Face),
    Rotation(Axis),
}

/// A single move: a layer plus a number of clockwise quarter turns (1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub layer: Layer,
    pub quarter_turns: u8,
}

impl Move {
    /// The move that undoes this one
    pub fn inverse(self) -> Self {
        Self {
            layer: self.layer,
            quarter_turns: 4 - self.quarter_turns,
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let layer = match chars.next() {
            Some('U') => Layer::Face(Face::U),
            Some('L') => Layer::Face(Face::L),
            Some('F') => Layer::Face(Face::F),
            Some('R') => Layer::Face(Face::R),
            Some('B') => Layer::Face(Face::B),
            Some('D') => Layer::Face(Face::D),
            Some('x') => Layer::Rotation(Axis::X),
            Some('y') => Layer::Rotation(Axis::Y),
            Some('z') => Layer::Rotation(Axis::Z),
            _ => return Err(CubeError::InvalidMove(token.to_string())),
        };
        let quarter_turns = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(CubeError::InvalidMove(token.to_string())),
        };
        Ok(Self {
            layer,
            quarter_turns,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.layer {
            Layer::Face(Face::U) => 'U',
            Layer::Face(Face::L) => 'L',
            Layer::Face(Face::F) => 'F',
            Layer::Face(Face::R) => 'R',
            Layer::Face(Face::B) => 'B',
            Layer::Face(Face::D) => 'D',
            Layer::Rotation(Axis::X) => 'x',
            Layer::Rotation(Axis::Y) => 'y',
            Layer::Rotation(Axis::Z) => 'z',
        };
        match self.quarter_turns {
            2 => write!(f, "{}2", letter),
            3 => write!(f, "{}'", letter),
            _ => write!(f, "{}", letter),
        }
    }
}

/// Three stickers of one face touching a turning layer
struct Strip {
    face: Face,
    cells: [(usize, usize); 3],
}

const fn strip(face: Face, cells: [(usize, usize); 3]) -> Strip {
    Strip { face, cells }
}

const TOP_ROW: [(usize, usize); 3] = [(0, 0), (0, 1), (0, 2)];
const BOTTOM_ROW: [(usize, usize); 3] = [(2, 0), (2, 1), (2, 2)];

/// For each face, the four neighbouring strips in clockwise order.
/// A clockwise turn moves the stickers of strip `i` onto strip `i + 1`.
static TURN_CYCLES: [[Strip; 4]; 6] = [
    // U
    [
        strip(Face::B, TOP_ROW),
        strip(Face::R, TOP_ROW),
        strip(Face::F, TOP_ROW),
        strip(Face::L, TOP_ROW),
    ],
    // L
    [
        strip(Face::B, [(0, 2), (1, 2), (2, 2)]),
        strip(Face::U, [(2, 0), (1, 0), (0, 0)]),
        strip(Face::F, [(2, 0), (1, 0), (0, 0)]),
        strip(Face::D, [(2, 0), (1, 0), (0, 0)]),
    ],
    // F
    [
        strip(Face::D, TOP_ROW),
        strip(Face::L, [(0, 2), (1, 2), (2, 2)]),
        strip(Face::U, [(2, 2), (2, 1), (2, 0)]),
        strip(Face::R, [(2, 0), (1, 0), (0, 0)]),
    ],
    // R
    [
        strip(Face::B, [(0, 0), (1, 0), (2, 0)]),
        strip(Face::D, [(2, 2), (1, 2), (0, 2)]),
        strip(Face::F, [(2, 2), (1, 2), (0, 2)]),
        strip(Face::U, [(2, 2), (1, 2), (0, 2)]),
    ],
    // B
    [
        strip(Face::D, BOTTOM_ROW),
        strip(Face::R, [(2, 2), (1, 2), (0, 2)]),
        strip(Face::U, [(0, 2), (0, 1), (0, 0)]),
        strip(Face::L, [(0, 0), (1, 0), (2, 0)]),
    ],
    // D
    [
        strip(Face::B, BOTTOM_ROW),
        strip(Face::L, BOTTOM_ROW),
        strip(Face::F, BOTTOM_ROW),
        strip(Face::R, BOTTOM_ROW),
    ],
];

/// Where each face's grid lands under a clockwise cube rotation, as
/// `(from, to, clockwise quarter turns of the grid)`
static ROTATION_MAPS: [[(Face, Face, u8); 6]; 3] = [
    // x
    [
        (Face::U, Face::B, 2),
        (Face::L, Face::L, 3),
        (Face::F, Face::U, 0),
        (Face::R, Face::R, 1),
        (Face::B, Face::D, 2),
        (Face::D, Face::F, 0),
    ],
    // y
    [
        (Face::U, Face::U, 1),
        (Face::L, Face::B, 0),
        (Face::F, Face::L, 0),
        (Face::R, Face::F, 0),
        (Face::B, Face::R, 0),
        (Face::D, Face::D, 3),
    ],
    // z
    [
        (Face::U, Face::R, 1),
        (Face::L, Face::U, 1),
        (Face::F, Face::F, 1),
        (Face::R, Face::D, 1),
        (Face::B, Face::B, 3),
        (Face::D, Face::L, 1),
    ],
];

/// A cube together with the scramble and candidate solution it is checking
#[derive(Debug, Clone)]
pub struct Cube {
    faces: [Grid; 6],
    scramble: String,
    solution: String,
}

impl Cube {
    /// Create a solved cube for the given scramble and solution
    pub fn new(scramble: impl Into<String>, solution: impl Into<String>) -> Self {
        let mut faces = [[[0u8; 3]; 3]; 6];
        for (index, grid) in faces.iter_mut().enumerate() {
            *grid = [[index as u8; 3]; 3];
        }
        Self {
            faces,
            scramble: scramble.into(),
            solution: solution.into(),
        }
    }

    /// Turn a face's own stickers 90 degrees clockwise (transpose, then reverse each row)
    pub fn rotate_face(&mut self, face: Face) {
        let grid = &mut self.faces[face as usize];
        for row in 0..3 {
            for col in (row + 1)..3 {
                let tmp = grid[row][col];
                grid[row][col] = grid[col][row];
                grid[col][row] = tmp;
            }
        }
        for row in grid.iter_mut() {
            row.reverse();
        }
    }

    /// Apply one move. Counter-clockwise and double moves repeat the clockwise turn.
    pub fn apply_move(&mut self, mv: Move) {
        for _ in 0..mv.quarter_turns {
            match mv.layer {
                Layer::Face(face) => self.turn_clockwise(face),
                Layer::Rotation(axis) => self.rotate_clockwise(axis),
            }
        }
    }

    /// Apply a whitespace separated sequence of moves
    pub fn apply_algorithm(&mut self, sequence: &str) -> Result<(), CubeError> {
        let moves = parse_algorithm(sequence)?;
        for mv in moves {
            self.apply_move(mv);
        }
        Ok(())
    }

    /// True when every face shows a single colour
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|grid| grid.iter().flatten().all(|&sticker| sticker == grid[0][0]))
    }

    /// Number of moves in the candidate solution
    pub fn solution_length(&self) -> usize {
        self.solution.split_whitespace().count()
    }

    /// Apply the scramble, then the solution, and report whether the cube ends solved
    pub fn solves_scramble(&mut self) -> Result<bool, CubeError> {
        let scramble = self.scramble.clone();
        let solution = self.solution.clone();
        self.apply_algorithm(&scramble)?;
        self.apply_algorithm(&solution)?;
        Ok(self.is_solved())
    }

    fn turn_clockwise(&mut self, face: Face) {
        self.rotate_face(face);

        let cycle = &TURN_CYCLES[face as usize];
        let values: Vec<[u8; 3]> = cycle
            .iter()
            .map(|strip| strip.cells.map(|(row, col)| self.faces[strip.face as usize][row][col]))
            .collect();

        for (index, strip) in cycle.iter().enumerate() {
            let source = &values[(index + 3) % 4];
            for (&(row, col), &sticker) in strip.cells.iter().zip(source) {
                self.faces[strip.face as usize][row][col] = sticker;
            }
        }
    }

    fn rotate_clockwise(&mut self, axis: Axis) {
        let previous = self.faces;
        for &(from, to, quarter_turns) in &ROTATION_MAPS[axis as usize] {
            let mut grid = previous[from as usize];
            for _ in 0..quarter_turns {
                grid = rotate_grid(grid);
            }
            self.faces[to as usize] = grid;
        }
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn rotate_grid(grid: Grid) -> Grid {
    let mut rotated = [[0u8; 3]; 3];
    for row in 0..3 {
        for col in 0..3 {
            rotated[row][col] = grid[2 - col][row];
        }
    }
    rotated
}

/// Parse a whitespace separated algorithm. An empty string is an empty algorithm.
pub fn parse_algorithm(sequence: &str) -> Result<Vec<Move>, CubeError> {
    sequence.split_whitespace().map(str::parse).collect()
}

/// Check an FMC solution against its scramble.
///
/// Returns the move count when the solution is non-empty, uses only face
/// turns and solves the scrambled cube, DNF otherwise.
pub fn validate_fmc(scramble: &str, solution: &str) -> SolveTime {
    if solution.split_whitespace().next().is_none() {
        return SolveTime::Dnf;
    }

    let only_face_turns = solution
        .split_whitespace()
        .all(|token| FMC_SOLUTION_MOVES.contains(&token));
    if !only_face_turns {
        return SolveTime::Dnf;
    }

    let mut cube = Cube::new(scramble, solution);
    match cube.solves_scramble() {
        Ok(true) => SolveTime::Finite(cube.solution_length() as u64),
        Ok(false) | Err(_) => SolveTime::Dnf,
    }
}

/// Render an FMC result as a plain move count
pub fn format_moves(value: SolveTime) -> String {
    match value {
        SolveTime::Finite(moves) => moves.to_string(),
        other => other.to_string(),
    }
}
