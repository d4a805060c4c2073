// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Grid: children arranged in cells

use linear_map::LinearMap;
use trellis::cast::Conv;
use trellis::geom::{Rect, Size};
use trellis::layout::{
    Extent, GridCellInfo, GridDimensions, GridSetter, GridSolver, GridSpec, Placement, RulesSetter,
    RulesSolver,
};

use crate::tree::{Children, Container, Placed};
use crate::{Error, Padding, Placements, Result, Tree, WidgetId, WidgetKind};

/// A container placing each child in a cell
///
/// Row and column counts are either set explicitly or deduced from the
/// occupied cells. Each row (column) is either fixed, taking at least the
/// given height (width), or expanding, sharing leftover space equally with
/// other expanding rows (columns). Rows count from the top, columns from
/// the left.
///
/// Placement overrides belong to cells, not children.
#[derive(Clone, Debug)]
pub struct Grid {
    pub(crate) spec: GridSpec,
    cells: LinearMap<GridCellInfo, WidgetId>,
    pub(crate) placements: Placements<GridCellInfo>,
}

impl Grid {
    /// The child at the given cell, if any
    pub fn get(&self, row: u32, col: u32) -> Option<WidgetId> {
        self.cells.get(&GridCellInfo::new(row, col)).copied()
    }

    /// The cell occupied by `child`, if any
    pub fn cell_of(&self, child: WidgetId) -> Option<GridCellInfo> {
        self.cells
            .iter()
            .find(|(_, c)| **c == child)
            .map(|(cell, _)| *cell)
    }

    /// Iterate over occupied cells
    pub fn iter(&self) -> impl Iterator<Item = (GridCellInfo, WidgetId)> + '_ {
        self.cells.iter().map(|(cell, child)| (*cell, *child))
    }

    /// Number of occupied cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if no cell is occupied
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Explicit number of rows, or 0 if deduced
    #[inline]
    pub fn num_rows(&self) -> u32 {
        self.spec.num_rows
    }

    /// Explicit number of columns, or 0 if deduced
    #[inline]
    pub fn num_cols(&self) -> u32 {
        self.spec.num_cols
    }

    /// Effective shape
    pub fn dimensions(&self) -> GridDimensions {
        let cells: Vec<_> = self.cells.keys().map(|cell| (*cell, Size::ZERO)).collect();
        self.spec.dimensions(&cells)
    }

    /// Sizing policy of a row
    pub fn row_height(&self, row: u32) -> Extent {
        self.spec
            .row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.spec.default_row_height)
    }

    /// Sizing policy of a column
    pub fn col_width(&self, col: u32) -> Extent {
        self.spec
            .col_widths
            .get(&col)
            .copied()
            .unwrap_or(self.spec.default_col_width)
    }

    /// Padding around and between cells
    #[inline]
    pub fn padding(&self) -> i32 {
        self.spec.padding
    }

    /// Placement of children, by cell
    pub fn placements(&self) -> &Placements<GridCellInfo> {
        &self.placements
    }

    fn cell_sizes(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Vec<(GridCellInfo, Size)> {
        self.cells
            .iter()
            .map(|(cell, child)| (*cell, min_of(*child)))
            .collect()
    }
}

impl Container for Grid {
    fn children(&self) -> Children {
        self.cells.values().copied().collect()
    }

    fn remove_child(&mut self, child: WidgetId) -> bool {
        match self.cell_of(child) {
            Some(cell) => {
                self.cells.remove(&cell);
                self.placements.unset(&cell);
                true
            }
            None => false,
        }
    }

    fn min_size(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Size {
        let mut solver = GridSolver::new(&self.spec);
        for (cell, child) in self.cells.iter() {
            solver.for_child(*cell, min_of(*child));
        }
        solver.finish()
    }

    fn child_rects(&self, rect: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed {
        let sizes = self.cell_sizes(min_of);
        let mut setter = GridSetter::new(rect, &self.spec, &sizes);
        self.cells
            .iter()
            .zip(&sizes)
            .map(|((cell, child), (_, min))| {
                let placement = self.placements.get(cell);
                (*child, placement.place(*min, setter.child_rect(*cell)))
            })
            .collect()
    }
}

/// Mutable access to a [`Grid`]
///
/// Each method updates layout on success. Methods taking a child which has
/// another parent detach it from that parent first.
pub struct GridMut<'a> {
    tree: &'a mut Tree,
    id: WidgetId,
}

/// Fail unless `index` is a valid row or column index
fn check_index(index: u32) -> Result<()> {
    if index >= GridDimensions::MAX {
        return Err(Error::IndexOutOfRange {
            index: usize::conv(index),
            len: usize::conv(GridDimensions::MAX),
        });
    }
    Ok(())
}

impl Tree {
    /// Add an empty [`Grid`] with deduced shape
    ///
    /// Padding, placement and default row / column extents are taken from
    /// the tree's configuration.
    pub fn add_grid(&mut self) -> WidgetId {
        let config = self.config();
        let grid = Grid {
            spec: GridSpec {
                padding: Padding::new(config.padding).get(),
                default_row_height: config.row_height,
                default_col_width: config.col_width,
                ..GridSpec::default()
            },
            cells: LinearMap::new(),
            placements: Placements::new(config.placement),
        };
        self.insert_node(WidgetKind::Grid(grid))
    }

    /// Access a [`Grid`]
    pub fn grid(&self, id: WidgetId) -> Result<&Grid> {
        self.data(id, "Grid", WidgetKind::as_grid)
    }

    /// Mutably access a [`Grid`]
    pub fn grid_mut(&mut self, id: WidgetId) -> Result<GridMut<'_>> {
        self.data_mut(id, "Grid", WidgetKind::as_grid_mut)?;
        Ok(GridMut { tree: self, id })
    }
}

impl<'a> GridMut<'a> {
    /// The grid's identifier
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn data(&mut self) -> Result<&mut Grid> {
        self.tree.data_mut(self.id, "Grid", WidgetKind::as_grid_mut)
    }

    fn update(&mut self, f: impl FnOnce(&mut Grid)) -> Result<()> {
        f(self.data()?);
        self.tree.commit([self.id]);
        Ok(())
    }

    /// Put `child` in the given cell
    ///
    /// A child already occupying the cell is detached. `placement` becomes
    /// the cell's override; `None` removes any existing override.
    ///
    /// `row` and `col` must be less than [`GridDimensions::MAX`].
    pub fn add(
        &mut self,
        row: u32,
        col: u32,
        child: WidgetId,
        placement: Option<Placement>,
    ) -> Result<()> {
        let id = self.id;
        let cell = GridCellInfo::new(row, col);
        check_index(row)?;
        check_index(col)?;
        self.tree.check_attach(child, id)?;
        let old_parent = self.tree.unlink(child);
        if let Some(previous) = self.data()?.cells.get(&cell).copied() {
            self.tree.unlink(previous);
        }

        let grid = self.data()?;
        grid.cells.insert(cell, child);
        grid.placements.assign(cell, placement);
        self.tree.link(child, id);
        self.tree.commit(old_parent.into_iter().chain([id]));
        Ok(())
    }

    /// Detach `child`
    pub fn remove(&mut self, child: WidgetId) -> Result<()> {
        self.tree.check_child(self.id, child)?;
        self.tree.unlink(child);
        self.tree.commit([self.id]);
        Ok(())
    }

    /// Detach the child of the given cell, returning it
    pub fn remove_cell(&mut self, row: u32, col: u32) -> Result<WidgetId> {
        let cell = GridCellInfo::new(row, col);
        let child = self
            .data()?
            .cells
            .get(&cell)
            .copied()
            .ok_or(Error::EmptyCell(cell))?;
        self.tree.unlink(child);
        self.tree.commit([self.id]);
        Ok(child)
    }

    /// Detach all children
    ///
    /// Cell placement overrides are removed too; the shape and extents are
    /// kept.
    pub fn clear(&mut self) -> Result<()> {
        let children: Vec<WidgetId> = self.data()?.cells.values().copied().collect();
        for child in children {
            self.tree.unlink(child);
        }
        self.update(|grid| grid.placements.clear())
    }

    /// Set the number of rows; 0 to deduce from occupied cells
    ///
    /// The count is raised if occupied cells lie beyond it. At most
    /// [`GridDimensions::MAX`].
    pub fn set_num_rows(&mut self, rows: u32) -> Result<()> {
        check_index(rows.saturating_sub(1))?;
        self.update(|grid| grid.spec.num_rows = rows)
    }

    /// Set the number of columns; 0 to deduce from occupied cells
    ///
    /// The count is raised if occupied cells lie beyond it. At most
    /// [`GridDimensions::MAX`].
    pub fn set_num_cols(&mut self, cols: u32) -> Result<()> {
        check_index(cols.saturating_sub(1))?;
        self.update(|grid| grid.spec.num_cols = cols)
    }

    /// Set the sizing policy of a row
    ///
    /// A fixed height is a minimum: the row still fits its cells.
    pub fn set_row_height(&mut self, row: u32, height: impl Into<Extent>) -> Result<()> {
        let height = height.into();
        self.update(|grid| {
            grid.spec.row_heights.insert(row, height);
        })
    }

    /// Set the sizing policy of a column
    ///
    /// A fixed width is a minimum: the column still fits its cells.
    pub fn set_col_width(&mut self, col: u32, width: impl Into<Extent>) -> Result<()> {
        let width = width.into();
        self.update(|grid| {
            grid.spec.col_widths.insert(col, width);
        })
    }

    /// Revert a row to the default sizing policy
    pub fn unset_row_height(&mut self, row: u32) -> Result<()> {
        self.update(|grid| {
            grid.spec.row_heights.remove(&row);
        })
    }

    /// Revert a column to the default sizing policy
    pub fn unset_col_width(&mut self, col: u32) -> Result<()> {
        self.update(|grid| {
            grid.spec.col_widths.remove(&col);
        })
    }

    /// Set the sizing policy of rows without their own
    pub fn set_default_row_height(&mut self, height: impl Into<Extent>) -> Result<()> {
        let height = height.into();
        self.update(|grid| grid.spec.default_row_height = height)
    }

    /// Set the sizing policy of columns without their own
    pub fn set_default_col_width(&mut self, width: impl Into<Extent>) -> Result<()> {
        let width = width.into();
        self.update(|grid| grid.spec.default_col_width = width)
    }

    /// Override the placement of whatever occupies a cell
    ///
    /// The override stays with the cell until the cell is vacated.
    pub fn set_cell_placement(&mut self, row: u32, col: u32, placement: Placement) -> Result<()> {
        self.update(|grid| grid.placements.set(GridCellInfo::new(row, col), placement))
    }

    /// Remove a cell's placement override
    pub fn unset_cell_placement(&mut self, row: u32, col: u32) -> Result<()> {
        self.update(|grid| {
            grid.placements.unset(&GridCellInfo::new(row, col));
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use trellis::ConfigError;

    #[test]
    fn deduce_shape() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            let spacer = tree.add_spacer(Size(10, 10));
            tree.grid_mut(grid).unwrap().add(row, col, spacer, None).unwrap();
        }
        let data = tree.grid(grid).unwrap();
        assert_eq!(data.dimensions(), GridDimensions { rows: 2, cols: 2 });
        assert_eq!(data.len(), 3);
        assert_eq!(data.get(1, 1), None);
        assert_eq!(tree.claim(grid), Ok(Size(20, 20)));
    }

    #[test]
    fn huge_index_is_rejected() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(5, 5));
        let max = usize::conv(GridDimensions::MAX);
        let mut g = tree.grid_mut(grid).unwrap();
        assert_eq!(
            g.add(u32::MAX, 0, a, None),
            Err(Error::IndexOutOfRange {
                index: usize::conv(u32::MAX),
                len: max
            })
        );
        assert_eq!(
            g.add(0, GridDimensions::MAX, a, None),
            Err(Error::IndexOutOfRange { index: max, len: max })
        );
        assert!(g.set_num_rows(GridDimensions::MAX + 1).is_err());
        g.set_num_cols(GridDimensions::MAX).unwrap();
        g.set_num_cols(0).unwrap();

        assert_eq!(tree.parent(a), Ok(None));
        assert!(tree.grid(grid).unwrap().is_empty());
        assert_eq!(tree.claim(grid), Ok(Size::ZERO));

        let mut g = tree.grid_mut(grid).unwrap();
        g.add(GridDimensions::MAX - 1, 0, a, None).unwrap();
        assert_eq!(tree.grid(grid).unwrap().dimensions().rows, GridDimensions::MAX);
    }

    #[test]
    fn negative_config_padding_is_clamped() {
        let config = trellis::config::Config {
            padding: -4,
            ..Default::default()
        };
        let mut tree = Tree::with_config(config);
        let grid = tree.add_grid();
        assert_eq!(tree.padding(grid), Ok(0));
    }

    #[test]
    fn occupied_cell_is_replaced() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(5, 5));
        let b = tree.add_spacer(Size(6, 6));
        let mut g = tree.grid_mut(grid).unwrap();
        g.add(0, 0, a, Some(Placement::Center)).unwrap();
        g.add(0, 0, b, None).unwrap();

        assert_eq!(tree.parent(a), Ok(None));
        let data = tree.grid(grid).unwrap();
        assert_eq!(data.get(0, 0), Some(b));
        assert_eq!(data.placements().get_override(&GridCellInfo::new(0, 0)), None);
    }

    #[test]
    fn move_between_cells() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(5, 5));
        let mut g = tree.grid_mut(grid).unwrap();
        g.add(0, 0, a, None).unwrap();
        g.add(2, 1, a, None).unwrap();
        let data = tree.grid(grid).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.cell_of(a), Some(GridCellInfo::new(2, 1)));
        assert_eq!(data.dimensions(), GridDimensions { rows: 3, cols: 2 });
    }

    #[test]
    fn fixed_and_expanding_tracks() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(10, 10));
        let b = tree.add_spacer(Size(10, 10));
        let mut g = tree.grid_mut(grid).unwrap();
        g.add(0, 0, a, None).unwrap();
        g.add(0, 1, b, Some(Placement::BottomRight)).unwrap();
        g.set_col_width(0, 30).unwrap();
        g.set_row_height(0, "0".parse::<Extent>().unwrap()).unwrap();
        tree.resize(grid, Rect::from_dimensions(0, 0, 100, 40)).unwrap();

        // column 0 fixed at 30, column 1 takes the rest; row 0 fixed at 10
        // and aligned to the top
        assert_eq!(tree.rect(a), Ok(Some(Rect::from_dimensions(0, 30, 30, 10))));
        assert_eq!(tree.rect(b), Ok(Some(Rect::from_dimensions(90, 30, 10, 10))));

        tree.grid_mut(grid).unwrap().unset_col_width(0).unwrap();
        tree.resize(grid, Rect::from_dimensions(0, 0, 100, 40)).unwrap();
        assert_eq!(tree.rect(a).unwrap().map(|r| r.width()), Some(50));
    }

    #[test]
    fn explicit_shape_and_defaults() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(10, 10));
        let mut g = tree.grid_mut(grid).unwrap();
        g.add(0, 0, a, None).unwrap();
        g.set_num_rows(2).unwrap();
        g.set_num_cols(3).unwrap();
        g.set_default_col_width(Extent::Fixed(20)).unwrap();
        g.set_default_row_height(Extent::Fixed(5)).unwrap();
        // cols: 20 + 20 + 20; rows: 10 (fits the cell) + 5
        assert_eq!(tree.claim(grid), Ok(Size(60, 15)));
        assert_eq!(tree.grid(grid).unwrap().col_width(2), Extent::Fixed(20));
    }

    #[test]
    fn bad_extent_token() {
        assert_eq!(
            "wide".parse::<Extent>(),
            Err(ConfigError::UnknownExtent("wide".into()))
        );
    }

    #[test]
    fn remove_cell_and_child() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(5, 5));
        let b = tree.add_spacer(Size(5, 5));
        let mut g = tree.grid_mut(grid).unwrap();
        g.add(0, 0, a, None).unwrap();
        g.add(1, 1, b, None).unwrap();
        assert_eq!(
            g.remove_cell(0, 1),
            Err(Error::EmptyCell(GridCellInfo::new(0, 1)))
        );
        assert_eq!(g.remove_cell(0, 0), Ok(a));
        g.remove(b).unwrap();
        assert!(tree.grid(grid).unwrap().is_empty());
        assert_eq!(tree.claim(grid), Ok(Size::ZERO));
    }

    #[test]
    fn cell_placement_and_child_placement() {
        let mut tree = Tree::new();
        let grid = tree.add_grid();
        let a = tree.add_spacer(Size(5, 5));
        tree.grid_mut(grid).unwrap().add(1, 0, a, None).unwrap();
        tree.set_child_placement(grid, a, Placement::TopLeft).unwrap();
        assert_eq!(
            tree.grid(grid).unwrap().placements().get_override(&GridCellInfo::new(1, 0)),
            Some(Placement::TopLeft)
        );
        tree.grid_mut(grid).unwrap().unset_cell_placement(1, 0).unwrap();
        assert_eq!(tree.child_placement(grid, a), Ok(Placement::Fill));
    }
}
