#![allow(dead_code)]

use std::cmp::Reverse;

use game_tree_search::{Player, WrappedScore};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    /// Parses nine characters, `x`, `o` or `.`, row by row
    pub fn parse(s: &str) -> Self {
        let mut cells = [None; 9];
        for (cell, c) in cells.iter_mut().zip(s.chars()) {
            *cell = match c {
                'x' => Some(Mark::X),
                'o' => Some(Mark::O),
                _ => None,
            };
        }

        Self { cells }
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn to_move(&self) -> Mark {
        if self.filled() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|[a, b, c]| {
            let mark = self.cells[*a]?;
            (self.cells[*b] == Some(mark) && self.cells[*c] == Some(mark)).then_some(mark)
        })
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.filled() == 9
    }

    pub fn play(&self, cell: usize) -> Self {
        let mut next = *self;
        next.cells[cell] = Some(self.to_move());
        next
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(|i| self.cells[*i].is_none())
    }

    /// Lines that `mark` could still complete
    fn open_lines(&self, mark: Mark) -> i32 {
        LINES
            .iter()
            .filter(|line| line.iter().all(|i| self.cells[*i] != Some(mark.other())))
            .count() as i32
    }
}

/// Plays tic-tac-toe as `me`, who must be the side to move at the root
#[derive(Debug, Clone, Copy)]
pub struct TicTacToe {
    pub me: Mark,
}

impl Player for TicTacToe {
    type State = Board;
    type Action = usize;
    type Score = WrappedScore<i32>;

    fn successors(&self, state: &Board) -> impl Iterator<Item = (usize, Board)> {
        let board = *state;
        board
            .empty_cells()
            .collect::<Vec<_>>()
            .into_iter()
            .map(move |cell| (cell, board.play(cell)))
    }

    fn cutoff(&self, state: &Board, _depth: usize) -> bool {
        state.is_over()
    }

    fn evaluate(&self, state: &Board) -> WrappedScore<i32> {
        let depth = state.filled() as i64;
        match state.winner() {
            Some(mark) if mark == self.me => WrappedScore::Win(Reverse(depth)),
            Some(_) => WrappedScore::Lose(depth),
            None if state.filled() == 9 => WrappedScore::Tie(depth),
            None => WrappedScore::Scored(
                state.open_lines(self.me) - state.open_lines(self.me.other()),
            ),
        }
    }
}

/// A game tree file, as read by the tree-explorer
///
/// Nodes are kept as raw JSON. A node with a `children` array is inner, anything else is a leaf
#[derive(Debug, Clone, Deserialize)]
pub struct TreeFile {
    #[serde(default)]
    pub depth_limit: Option<usize>,
    pub root: Value,
}

impl TreeFile {
    pub fn parse(json: &str) -> Self {
        serde_json::from_str(json).unwrap()
    }
}

pub fn leaf(value: i64) -> Value {
    json!({ "value": value })
}

pub fn inner(children: Vec<(String, Value)>) -> Value {
    let edges: Vec<Value> = children
        .into_iter()
        .map(|(action, node)| json!({ "action": action, "node": node }))
        .collect();

    json!({ "children": edges })
}

pub fn is_leaf(node: &Value) -> bool {
    node.get("children").is_none()
}

/// `(action, node)` pairs under `node`, in file order
pub fn children(node: &Value) -> impl Iterator<Item = (&str, &Value)> {
    node.get("children")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .map(|edge| (edge["action"].as_str().unwrap_or_default(), &edge["node"]))
}

/// Follow a line of actions from `node`
pub fn follow<'a>(node: &'a Value, line: &[String]) -> Option<&'a Value> {
    line.iter().try_fold(node, |node, action| {
        children(node)
            .find(|(a, _)| *a == action.as_str())
            .map(|(_, child)| child)
    })
}

/// Walks an explicit JSON tree, cutting off exactly at the leaves
#[derive(Debug, Clone, Copy)]
pub struct Explicit;

impl Player for Explicit {
    type State = Value;
    type Action = String;
    type Score = i64;

    fn successors(&self, state: &Value) -> impl Iterator<Item = (String, Value)> {
        children(state).map(|(action, node)| (action.to_owned(), node.clone()))
    }

    fn cutoff(&self, state: &Value, _depth: usize) -> bool {
        is_leaf(state)
    }

    fn evaluate(&self, state: &Value) -> i64 {
        state["value"].as_i64().unwrap_or_default()
    }
}
