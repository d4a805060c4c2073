// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Grid solver

use linear_map::LinearMap;
use log::warn;

use super::{Extent, RulesSetter, RulesSolver, Shares};
use crate::cast::{Cast, Conv};
use crate::geom::{Rect, Size};

/// Grid cell index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCellInfo {
    /// Row index, counting from the top
    pub row: u32,
    /// Column index, counting from the left
    pub col: u32,
}

impl GridCellInfo {
    /// Construct from row and column
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        GridCellInfo { row, col }
    }
}

impl From<(u32, u32)> for GridCellInfo {
    #[inline]
    fn from((row, col): (u32, u32)) -> Self {
        GridCellInfo { row, col }
    }
}

/// Grid dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// The number of rows
    pub rows: u32,
    /// The number of columns
    pub cols: u32,
}

impl GridDimensions {
    /// The largest supported number of rows (and of columns)
    ///
    /// Cell indices must be less than this.
    pub const MAX: u32 = 1 << 16;
}

/// One row or column after minimum sizing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Track {
    Fixed(i32),
    /// Expandable, with the largest cell extent as floor
    Expand(i32),
}

/// Grid shape and sizing policy
///
/// This is the persistent configuration of a grid layout. The cell contents
/// (index and minimum size of each present cell) are passed separately to
/// [`GridSpec::min_size`] and [`GridSpec::cell_rects`]; nothing is cached
/// between calls, so adding or removing a cell simply means calling these
/// again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of rows; if zero, this is deduced from the cells
    pub num_rows: u32,
    /// Number of columns; if zero, this is deduced from the cells
    pub num_cols: u32,
    /// Padding around and between cells
    pub padding: i32,
    /// Per-row height overrides
    pub row_heights: LinearMap<u32, Extent>,
    /// Per-column width overrides
    pub col_widths: LinearMap<u32, Extent>,
    /// Height of rows without an override
    pub default_row_height: Extent,
    /// Width of columns without an override
    pub default_col_width: Extent,
}

impl Default for GridSpec {
    fn default() -> Self {
        GridSpec {
            num_rows: 0,
            num_cols: 0,
            padding: 0,
            row_heights: LinearMap::new(),
            col_widths: LinearMap::new(),
            default_row_height: Extent::Expand,
            default_col_width: Extent::Expand,
        }
    }
}

impl GridSpec {
    /// Deduce the grid shape
    ///
    /// A zero row / column count is replaced by one more than the largest
    /// index among `cells`. An explicit count smaller than that is grown to
    /// include every cell. Neither count exceeds [`GridDimensions::MAX`].
    pub fn dimensions(&self, cells: &[(GridCellInfo, Size)]) -> GridDimensions {
        let mut dim = GridDimensions {
            rows: self.num_rows,
            cols: self.num_cols,
        };
        for (info, _) in cells {
            dim.rows = dim.rows.max(info.row.saturating_add(1));
            dim.cols = dim.cols.max(info.col.saturating_add(1));
        }
        dim.rows = dim.rows.min(GridDimensions::MAX);
        dim.cols = dim.cols.min(GridDimensions::MAX);
        dim
    }

    fn tracks(&self, cells: &[(GridCellInfo, Size)]) -> (Vec<Track>, Vec<Track>) {
        let dim = self.dimensions(cells);
        let mut max_heights = vec![0; usize::conv(dim.rows)];
        let mut max_widths = vec![0; usize::conv(dim.cols)];
        for (info, min) in cells {
            let row = max_heights.get_mut(usize::conv(info.row));
            let col = max_widths.get_mut(usize::conv(info.col));
            let (Some(h), Some(w)) = (row, col) else {
                warn!("GridSpec: ignoring cell {info:?} beyond the supported shape");
                continue;
            };
            *h = (*h).max(min.1);
            *w = (*w).max(min.0);
        }

        let resolve = |overrides: &LinearMap<u32, Extent>, default: Extent, maxes: Vec<i32>| {
            maxes
                .into_iter()
                .enumerate()
                .map(|(i, cell)| {
                    let index: u32 = i.cast();
                    match overrides.get(&index).copied().unwrap_or(default) {
                        Extent::Fixed(n) => Track::Fixed(n.max(cell)),
                        Extent::Expand => Track::Expand(cell),
                    }
                })
                .collect::<Vec<_>>()
        };

        let rows = resolve(&self.row_heights, self.default_row_height, max_heights);
        let cols = resolve(&self.col_widths, self.default_col_width, max_widths);
        (rows, cols)
    }

    /// Compute the minimum size of the grid
    ///
    /// Per axis this is the sum of fixed tracks, plus the largest expandable
    /// floor once for every expandable track (expandable tracks share space
    /// equally, so each needs room for the largest), plus padding around and
    /// between tracks.
    pub fn min_size(&self, cells: &[(GridCellInfo, Size)]) -> Size {
        let (rows, cols) = self.tracks(cells);
        Size(axis_min(&cols, self.padding), axis_min(&rows, self.padding))
    }

    /// Compute the rect of every cell of the grid within `rect`
    ///
    /// Rects are produced for the full deduced shape, whether or not a cell
    /// is occupied. Rows are walked from the top edge downward and columns
    /// from the left edge rightward, with `padding` before each.
    pub fn cell_rects(&self, rect: Rect, cells: &[(GridCellInfo, Size)]) -> GridRects {
        let (rows, cols) = self.tracks(cells);
        let heights = solve_axis(&rows, rect.height(), self.padding, "row");
        let widths = solve_axis(&cols, rect.width(), self.padding, "column");

        let mut lefts = Vec::with_capacity(widths.len());
        let mut cursor = rect.left();
        for w in &widths {
            cursor += self.padding;
            lefts.push(cursor);
            cursor += w;
        }

        let mut rects = Vec::with_capacity(heights.len() * widths.len());
        let mut cursor = rect.top();
        for h in &heights {
            cursor -= self.padding;
            let bottom = cursor - h;
            for (left, w) in lefts.iter().zip(widths.iter()) {
                rects.push(Rect::from_dimensions(*left, bottom, *w, *h));
            }
            cursor = bottom;
        }

        GridRects {
            dim: GridDimensions {
                rows: rows.len().cast(),
                cols: cols.len().cast(),
            },
            rects,
        }
    }
}

fn axis_min(tracks: &[Track], padding: i32) -> i32 {
    let mut fixed = 0;
    let mut num_expand = 0;
    let mut max_floor = 0;
    for track in tracks {
        match *track {
            Track::Fixed(n) => fixed += n,
            Track::Expand(floor) => {
                num_expand += 1;
                max_floor = max_floor.max(floor);
            }
        }
    }
    let count = i32::conv(tracks.len());
    fixed + max_floor * num_expand + padding * (count + 1)
}

fn solve_axis(tracks: &[Track], total: i32, padding: i32, what: &str) -> Vec<i32> {
    let count = i32::conv(tracks.len());
    let fixed: i32 = tracks
        .iter()
        .map(|t| match t {
            Track::Fixed(n) => *n,
            Track::Expand(_) => 0,
        })
        .sum();
    let num_expand = tracks.iter().filter(|t| matches!(t, Track::Expand(_))).count();
    let mut shares = Shares::new(total - fixed - padding * (count + 1), num_expand);

    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| match *track {
            Track::Fixed(n) => n,
            Track::Expand(floor) => {
                let share = shares.next().unwrap_or(0);
                if share < floor {
                    warn!("grid {what} {i}: expanded to {share}, below its content floor {floor}");
                }
                share
            }
        })
        .collect()
}

/// The rects of every cell of a grid, as computed by [`GridSpec::cell_rects`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridRects {
    dim: GridDimensions,
    rects: Vec<Rect>,
}

impl GridRects {
    /// The grid shape these rects cover
    #[inline]
    pub fn dimensions(&self) -> GridDimensions {
        self.dim
    }

    /// Get the rect of a cell, if within the shape
    pub fn get(&self, info: GridCellInfo) -> Option<Rect> {
        if info.row >= self.dim.rows || info.col >= self.dim.cols {
            return None;
        }
        let index = usize::conv(info.row) * usize::conv(self.dim.cols) + usize::conv(info.col);
        self.rects.get(index).copied()
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridCellInfo, Rect)> + '_ {
        let cols = self.dim.cols.max(1);
        self.rects.iter().enumerate().map(move |(i, rect)| {
            let i: u32 = i.cast();
            (GridCellInfo::new(i / cols, i % cols), *rect)
        })
    }
}

/// A [`RulesSolver`] for grids
///
/// Collects cell minimum sizes, then defers to [`GridSpec::min_size`].
pub struct GridSolver<'a> {
    spec: &'a GridSpec,
    cells: Vec<(GridCellInfo, Size)>,
}

impl<'a> GridSolver<'a> {
    /// Construct
    pub fn new(spec: &'a GridSpec) -> Self {
        GridSolver {
            spec,
            cells: Vec::new(),
        }
    }
}

impl<'a> RulesSolver for GridSolver<'a> {
    type ChildInfo = GridCellInfo;

    fn for_child(&mut self, info: GridCellInfo, min: Size) {
        self.cells.push((info, min));
    }

    fn finish(self) -> Size {
        self.spec.min_size(&self.cells)
    }
}

/// A [`RulesSetter`] for grids
pub struct GridSetter {
    rects: GridRects,
}

impl GridSetter {
    /// Construct
    ///
    /// Argument order is consistent with other [`RulesSetter`]s.
    ///
    /// -   `rect`: the [`Rect`] within which to position children
    /// -   `spec`: grid shape and sizing policy
    /// -   `cells`: index and minimum size of each present cell
    pub fn new(rect: Rect, spec: &GridSpec, cells: &[(GridCellInfo, Size)]) -> Self {
        GridSetter {
            rects: spec.cell_rects(rect, cells),
        }
    }
}

impl RulesSetter for GridSetter {
    type ChildInfo = GridCellInfo;

    fn child_rect(&mut self, info: GridCellInfo) -> Rect {
        // Cells passed to the constructor are always within the shape
        self.rects.get(info).unwrap_or_default()
    }
}
