//! Plain depth-first search: the recursive reference walk, an explicit-stack
//! twin for bounded native stack usage, and the capped solution counter.

use crate::{Grid, Position};

/// Recursive backtracking over `first_empty`, trying values in ascending
/// order. This is the reference search tree the other strategies relate to.
pub(crate) fn solve_recursive(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };
    for value in 1..=grid.size() as u8 {
        if grid.is_legal_placement(pos, value) {
            grid.set(pos, value);
            if solve_recursive(grid) {
                return true;
            }
            grid.clear(pos);
        }
    }
    false
}

/// One suspended decision point in the iterative walk.
struct Frame {
    pos: Position,
    next_value: u8,
}

/// The same search tree as [`solve_recursive`], realized with an explicit
/// frame stack instead of call frames.
///
/// A frame is pushed when the search descends into a newly found empty cell,
/// with a trial value of 1. Exhausting values 1..=n pops the frame, clears
/// its cell, and resumes the parent at the value after the one it had
/// committed (a successful placement overwrites the parent's previous trial
/// in place, so no separate undo is needed on resume).
pub(crate) fn solve_iterative(grid: &mut Grid) -> bool {
    let size = grid.size() as u8;
    let Some(first) = grid.first_empty() else {
        return true;
    };
    let mut stack = vec![Frame {
        pos: first,
        next_value: 1,
    }];

    while let Some(frame) = stack.last_mut() {
        let pos = frame.pos;
        let mut placed = false;
        let mut value = frame.next_value;
        while value <= size {
            if grid.is_legal_placement(pos, value) {
                grid.set(pos, value);
                frame.next_value = value + 1;
                placed = true;
                break;
            }
            value += 1;
        }

        if !placed {
            grid.clear(pos);
            stack.pop();
            continue;
        }

        match grid.first_empty() {
            Some(next) => stack.push(Frame {
                pos: next,
                next_value: 1,
            }),
            None => return true,
        }
    }
    false
}

/// Exhaustive DFS in the same shape as [`solve_recursive`], except that a
/// completion bumps the counter and the search resumes from the last
/// completed state, returning as soon as `limit` is reached. The grid is
/// restored to its input state on return.
pub(crate) fn count_solutions_recursive(grid: &mut Grid, count: &mut usize, limit: usize) {
    if *count >= limit {
        return;
    }
    let Some(pos) = grid.first_empty() else {
        *count += 1;
        return;
    };
    for value in 1..=grid.size() as u8 {
        if grid.is_legal_placement(pos, value) {
            grid.set(pos, value);
            count_solutions_recursive(grid, count, limit);
            grid.clear(pos);
            if *count >= limit {
                return;
            }
        }
    }
}
