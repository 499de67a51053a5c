//! Connected groups and their liberties.
//!
//! All traversals use an explicit stack and a visited bitmap sized to the
//! board, so they never recurse and visit each point once.

use crate::board::{Board, Point, Stone};

/// Collect the group containing `start`.
///
/// Returns an empty vector if `start` is empty or off the board. The result
/// is sorted row-major so it does not depend on traversal order.
pub fn get_group(start: Point, board: &Board) -> Vec<Point> {
    let color = match board.get(start) {
        Some(stone) if !stone.is_empty() => stone,
        _ => return Vec::new(),
    };

    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut stack = vec![start];
    let mut group = Vec::new();
    visited[start.row * size + start.col] = true;

    while let Some(pt) = stack.pop() {
        group.push(pt);
        for n in board.neighbors(pt) {
            let ni = n.row * size + n.col;
            if !visited[ni] && board[n] == color {
                visited[ni] = true;
                stack.push(n);
            }
        }
    }

    group.sort_unstable();
    group
}

/// The distinct empty points adjacent to any member of `group`, sorted.
pub fn liberties(group: &[Point], board: &Board) -> Vec<Point> {
    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut libs = Vec::new();

    for &pt in group {
        for n in board.neighbors(pt) {
            let ni = n.row * size + n.col;
            if !seen[ni] && board[n] == Stone::Empty {
                seen[ni] = true;
                libs.push(n);
            }
        }
    }

    libs.sort_unstable();
    libs
}

/// Count the liberties of `group`.
///
/// An empty point touching several members counts once.
pub fn count_liberties(group: &[Point], board: &Board) -> usize {
    liberties(group, board).len()
}
