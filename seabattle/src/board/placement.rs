// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Straight runs of cells, shared by ship placement on the fleet grid and the reveal of
//! sunk enemy ships on the tracking grid.
use crate::board::{grid::Grid, CannotPlaceReason, Coordinate, Dimensions};

/// Direction a run of cells extends in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Orientation {
    Horizontal,
    Vertical,
}

/// Compute the cells between `start` and `end` inclusive, walked from the lower to the
/// higher index, checking that the run lies on the board, is straight, and is exactly
/// `len` cells long.
pub(super) fn plot_run(
    dim: &Dimensions,
    start: Coordinate,
    end: Coordinate,
    len: usize,
) -> Result<Vec<Coordinate>, CannotPlaceReason> {
    if !dim.validate(start) || !dim.validate(end) {
        return Err(CannotPlaceReason::OffBoard);
    }
    let orientation = if start.row == end.row {
        Orientation::Horizontal
    } else if start.col == end.col {
        Orientation::Vertical
    } else {
        return Err(CannotPlaceReason::Misaligned);
    };
    let (low, high) = match orientation {
        Orientation::Horizontal => (start.col.min(end.col), start.col.max(end.col)),
        Orientation::Vertical => (start.row.min(end.row), start.row.max(end.row)),
    };
    if high - low + 1 != len {
        return Err(CannotPlaceReason::LengthMismatch);
    }
    Ok((low..=high)
        .map(|i| match orientation {
            Orientation::Horizontal => Coordinate::new(start.row, i),
            Orientation::Vertical => Coordinate::new(i, start.col),
        })
        .collect())
}

/// Fill every cell of `run` with the value produced for its position in the run. Either
/// every cell is written or, if any cell is already filled, none are.
pub(super) fn bind_run<T>(
    grid: &mut Grid<Option<T>>,
    run: &[Coordinate],
    mut cell: impl FnMut(usize) -> T,
) -> Result<(), CannotPlaceReason> {
    for coord in run {
        match grid.get(coord) {
            None => return Err(CannotPlaceReason::OffBoard),
            Some(Some(_)) => return Err(CannotPlaceReason::CellOccupied),
            Some(None) => {}
        }
    }
    // Already ensured that every position is valid and not occupied.
    for (i, coord) in run.iter().enumerate() {
        grid[coord] = Some(cell(i));
    }
    Ok(())
}

/// Every straight run of `len` cells that fits on the board, as `(start, end)` pairs.
#[cfg(feature = "rng_gen")]
pub(super) fn all_runs(dim: &Dimensions, len: usize) -> Vec<(Coordinate, Coordinate)> {
    let mut runs = Vec::new();
    if len == 0 {
        return runs;
    }
    for coord in dim.iter_coordinates().flatten() {
        if coord.col + len <= dim.columns() {
            runs.push((coord, Coordinate::new(coord.row, coord.col + len - 1)));
        }
        if len > 1 && coord.row + len <= dim.rows() {
            runs.push((coord, Coordinate::new(coord.row + len - 1, coord.col)));
        }
    }
    runs
}
