//! Defines the flat storage shared by the fleet and tracking grids.

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, Dimensions};

/// Row-major matrix of cells with the size given by its [`Dimensions`].
#[derive(Debug, Clone)]
pub(super) struct Grid<T> {
    /// Dimensions of this grid.
    pub(super) dim: Dimensions,
    /// Cells that make up this grid.
    pub(super) cells: Box<[T]>,
}

impl<T: Default> Grid<T> {
    pub(super) fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Default::default()).collect();
        Self { dim, cells }
    }
}

impl<T> Grid<T> {
    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&T> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut T> {
        self.dim
            .try_linearize(coord.borrow())
            .and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the coordinates and cells of this grid in row-major order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (dim.un_linearize(i), cell))
    }
}

impl<T, B: Borrow<Coordinate>> Index<B> for Grid<T> {
    type Output = T;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<T, B: Borrow<Coordinate>> IndexMut<B> for Grid<T> {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
