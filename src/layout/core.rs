use crate::tile::{Orientation, Tile};

use super::occupancy::{RowOccupancy, ScratchGrid};

/// Column count used by the desktop gallery.
pub const DEFAULT_COLUMNS: u16 = 4;

/// Row passes are capped at this multiple of the tile count, a halt
/// guarantee on adversarial input rather than an expected exit path.
const ITERATION_FACTOR: u32 = 10;

/// Final grid position of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub tile_index: usize,
    pub column: u16,
    pub row: u32,
    pub column_span: u16,
    pub row_span: u16,
}

impl Placement {
    fn for_tile(tile_index: usize, column: u16, row: u32, orientation: Orientation) -> Self {
        Self {
            tile_index,
            column,
            row,
            column_span: orientation.column_span(),
            row_span: orientation.row_span(),
        }
    }

    pub fn column_end(&self) -> u16 {
        self.column + self.column_span
    }

    pub fn row_end(&self) -> u32 {
        self.row + u32::from(self.row_span)
    }

    /// Every `(column, row)` cell this placement covers.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        (0..self.column_span).flat_map(move |dc| {
            (0..self.row_span).map(move |dr| (self.column + dc, self.row + u32::from(dr)))
        })
    }
}

/// Why a tile was excluded from the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// The tile carried a format tag outside the recognised set.
    UnknownFormat(String),
    /// No position fit within the retry budget (for example a wide tile
    /// on a grid narrower than two columns).
    NoFit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedTile {
    pub tile_index: usize,
    pub reason: DropReason,
}

/// Outcome of one solve: placements for every tile that fit, drop records
/// for every tile that did not, plus scan diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    pub placements: Vec<Placement>,
    pub dropped: Vec<DroppedTile>,
    /// Exclusive row extent of the layout (max `row + row_span`).
    pub rows: u32,
    /// Row passes consumed across both placement passes.
    pub iterations: u32,
}

impl LayoutReport {
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    pub fn malformed_count(&self) -> usize {
        self.dropped
            .iter()
            .filter(|d| matches!(d.reason, DropReason::UnknownFormat(_)))
            .count()
    }
}

/// The masonry tile placer.
///
/// Wide tiles span 2 columns x 1 row, tall tiles 1 column x 2 rows. The
/// solver walks the grid row by row, carrying tall-tile occupancy into
/// the next row, deferring wide tiles that do not fit their row and
/// resolving them in a second pass. Each call owns its scratch state, so
/// concurrent solves never interfere.
#[derive(Debug, Clone, Copy)]
pub struct MasonryLayout {
    columns: u16,
}

impl Default for MasonryLayout {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}

impl MasonryLayout {
    pub fn new(columns: u16) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Place every tile, in input order where a fit exists at or after
    /// the scan cursor. Total and deterministic: tiles that cannot be
    /// placed are reported in `dropped`, never silently lost, and the
    /// function never errors.
    pub fn solve(&self, tiles: &[Tile]) -> LayoutReport {
        let columns = self.columns;
        let mut report = LayoutReport::default();
        let mut deferred: Vec<(usize, Orientation)> = Vec::new();

        let mut carry = RowOccupancy::new(columns);
        let mut row: u32 = 0;
        let mut cursor = 0usize;
        let cap = tiles.len() as u32 * ITERATION_FACTOR + u32::from(columns);

        while cursor < tiles.len() && report.iterations < cap {
            report.iterations += 1;
            let mut next_carry = RowOccupancy::new(columns);
            let mut placed_in_row = false;
            let mut col: u16 = 0;

            while col < columns && cursor < tiles.len() {
                if carry.is_claimed(col) {
                    col += 1;
                    continue;
                }

                let index = cursor;
                cursor += 1;

                match tiles[index].orientation() {
                    None => {
                        let raw = tiles[index].format.clone().unwrap_or_default();
                        report.dropped.push(DroppedTile {
                            tile_index: index,
                            reason: DropReason::UnknownFormat(raw),
                        });
                    }
                    Some(Orientation::Tall) => {
                        report.placements.push(Placement::for_tile(
                            index,
                            col,
                            row,
                            Orientation::Tall,
                        ));
                        next_carry.claim(col);
                        placed_in_row = true;
                        col += 1;
                    }
                    Some(Orientation::Wide) => {
                        if col + 1 < columns && !carry.is_claimed(col + 1) {
                            report.placements.push(Placement::for_tile(
                                index,
                                col,
                                row,
                                Orientation::Wide,
                            ));
                            placed_in_row = true;
                            col += 2;
                        } else if let Some(fit) = carry.find_pair(col + 1) {
                            // No room at the cursor; a pair further right
                            // in the same row still preserves the row.
                            report.placements.push(Placement::for_tile(
                                index,
                                fit,
                                row,
                                Orientation::Wide,
                            ));
                            placed_in_row = true;
                            col = fit + 2;
                        } else {
                            deferred.push((index, Orientation::Wide));
                        }
                    }
                }
            }

            if placed_in_row {
                carry = next_carry;
            } else {
                // Row fully carried over: abandon it and move on rather
                // than aborting the remaining tiles.
                carry.clear();
            }
            row += 1;
        }

        // Tiles the iteration cap left unconsumed still need an outcome.
        for index in cursor..tiles.len() {
            match tiles[index].orientation() {
                None => {
                    let raw = tiles[index].format.clone().unwrap_or_default();
                    report.dropped.push(DroppedTile {
                        tile_index: index,
                        reason: DropReason::UnknownFormat(raw),
                    });
                }
                Some(orientation) => deferred.push((index, orientation)),
            }
        }

        self.resolve_deferred(&mut report, deferred, row, &carry);

        report.rows = report
            .placements
            .iter()
            .map(Placement::row_end)
            .max()
            .unwrap_or(0);
        report
    }

    /// Second-chance pass: scan forward row by row from the first row
    /// after the main scan, claiming cells as tiles land so later
    /// deferred tiles cannot overlap them. Each placed tile blocks at
    /// most two rows, so a window of `2 * deferred + 2` rows always
    /// exposes a free row; a tile with no fit inside the window can never
    /// fit and is dropped.
    fn resolve_deferred(
        &self,
        report: &mut LayoutReport,
        deferred: Vec<(usize, Orientation)>,
        base_row: u32,
        carry: &RowOccupancy,
    ) {
        if deferred.is_empty() {
            return;
        }

        let mut grid = ScratchGrid::new(self.columns, base_row, carry);
        let max_row = base_row + 2 * deferred.len() as u32 + 2;

        for (index, orientation) in deferred {
            let column_span = orientation.column_span();
            let row_span = orientation.row_span();
            let mut try_row = base_row;
            let mut placed = false;

            while try_row < max_row {
                report.iterations += 1;
                if let Some(column) = grid.find_fit(try_row, column_span, row_span) {
                    grid.claim_area(column, try_row, column_span, row_span);
                    report
                        .placements
                        .push(Placement::for_tile(index, column, try_row, orientation));
                    placed = true;
                    break;
                }
                try_row += 1;
            }

            if !placed {
                report.dropped.push(DroppedTile {
                    tile_index: index,
                    reason: DropReason::NoFit,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn wide(id: u64) -> Tile {
        Tile::new(id, format!("assets/portfolio/{id}.png"), "reach", Orientation::Wide)
    }

    fn tall(id: u64) -> Tile {
        Tile::new(id, format!("assets/portfolio/{id}.png"), "reach", Orientation::Tall)
    }

    fn bogus(id: u64) -> Tile {
        let mut tile = tall(id);
        tile.format = Some("4-3".into());
        tile
    }

    fn assert_no_overlap(report: &LayoutReport) {
        let mut seen = HashSet::new();
        for placement in &report.placements {
            for cell in placement.cells() {
                assert!(seen.insert(cell), "cell {cell:?} claimed twice");
            }
        }
    }

    fn assert_in_bounds(report: &LayoutReport, columns: u16) {
        for placement in &report.placements {
            assert!(placement.column_end() <= columns);
        }
    }

    #[test]
    fn four_wides_pack_two_per_row() {
        let tiles: Vec<_> = (0..4).map(wide).collect();
        let report = MasonryLayout::new(4).solve(&tiles);

        let positions: Vec<_> = report
            .placements
            .iter()
            .map(|p| (p.tile_index, p.column, p.row))
            .collect();
        assert_eq!(positions, vec![(0, 0, 0), (1, 2, 0), (2, 0, 1), (3, 2, 1)]);
        assert!(report.is_complete());
        assert_eq!(report.rows, 2);
        for placement in &report.placements {
            assert_eq!((placement.column_span, placement.row_span), (2, 1));
        }
    }

    #[test]
    fn fifth_tall_lands_below_the_carried_row() {
        let tiles: Vec<_> = (0..5).map(tall).collect();
        let report = MasonryLayout::new(4).solve(&tiles);

        let positions: Vec<_> = report
            .placements
            .iter()
            .map(|p| (p.tile_index, p.column, p.row))
            .collect();
        // Row 1 is fully carried by the four talls above, so the fifth
        // tile skips it entirely.
        assert_eq!(
            positions,
            vec![(0, 0, 0), (1, 1, 0), (2, 2, 0), (3, 3, 0), (4, 0, 2)]
        );
        assert!(report.is_complete());
        assert_eq!(report.rows, 4);
    }

    #[test]
    fn second_wide_drops_to_the_next_row_under_talls() {
        let tiles = vec![wide(0), tall(1), tall(2), wide(3)];
        let report = MasonryLayout::new(4).solve(&tiles);

        let positions: Vec<_> = report
            .placements
            .iter()
            .map(|p| (p.tile_index, p.column, p.row))
            .collect();
        assert_eq!(positions, vec![(0, 0, 0), (1, 2, 0), (2, 3, 0), (3, 0, 1)]);
        assert!(report.is_complete());
        assert_no_overlap(&report);
    }

    #[test]
    fn wide_on_single_column_grid_is_dropped() {
        let report = MasonryLayout::new(1).solve(&[wide(0)]);
        assert!(report.placements.is_empty());
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.dropped[0].reason, DropReason::NoFit);
    }

    #[test]
    fn deferred_wide_returns_in_second_pass() {
        // Two talls fill the 2-column row; the wide between them has no
        // pair anywhere in row 0 and must wait for the first open row.
        let tiles = vec![tall(0), wide(1), tall(2)];
        let report = MasonryLayout::new(2).solve(&tiles);

        let by_index: Vec<_> = {
            let mut p = report.placements.clone();
            p.sort_by_key(|p| p.tile_index);
            p.iter().map(|p| (p.tile_index, p.column, p.row)).collect()
        };
        assert_eq!(by_index, vec![(0, 0, 0), (1, 0, 2), (2, 1, 0)]);
        assert!(report.is_complete());
        assert_no_overlap(&report);
    }

    #[test]
    fn unknown_format_is_reported_not_coerced() {
        let tiles = vec![wide(0), bogus(1), tall(2)];
        let report = MasonryLayout::new(4).solve(&tiles);

        assert_eq!(report.placements.len(), 2);
        assert_eq!(report.dropped.len(), 1);
        assert_eq!(report.dropped[0].tile_index, 1);
        assert_eq!(
            report.dropped[0].reason,
            DropReason::UnknownFormat("4-3".into())
        );
        assert_eq!(report.malformed_count(), 1);
    }

    #[test]
    fn zero_column_grid_drops_everything() {
        let tiles = vec![tall(0), wide(1)];
        let report = MasonryLayout::new(0).solve(&tiles);
        assert!(report.placements.is_empty());
        assert_eq!(report.dropped.len(), 2);
        assert!(
            report
                .dropped
                .iter()
                .all(|d| d.reason == DropReason::NoFit)
        );
    }

    #[test]
    fn all_tall_preserves_input_order_row_major() {
        let tiles: Vec<_> = (0..9).map(tall).collect();
        let report = MasonryLayout::new(3).solve(&tiles);

        assert!(report.is_complete());
        for (i, placement) in report.placements.iter().enumerate() {
            assert_eq!(placement.tile_index, i);
            assert_eq!(placement.column, (i % 3) as u16);
            assert_eq!(placement.row, (i / 3) as u32 * 2);
        }
    }

    #[test]
    fn mixed_stream_has_no_overlaps_and_stays_in_bounds() {
        let tiles: Vec<_> = (0..40)
            .map(|i| if i % 3 == 0 { wide(i) } else { tall(i) })
            .collect();
        for columns in [2u16, 3, 4, 6] {
            let report = MasonryLayout::new(columns).solve(&tiles);
            assert_no_overlap(&report);
            assert_in_bounds(&report, columns);
            assert_eq!(
                report.placements.len() + report.dropped.len(),
                tiles.len(),
                "every tile must be placed or dropped at {columns} columns"
            );
        }
    }

    #[test]
    fn span_matches_orientation() {
        let tiles = vec![wide(0), tall(1)];
        let report = MasonryLayout::new(4).solve(&tiles);
        let spans: Vec<_> = report
            .placements
            .iter()
            .map(|p| (p.column_span, p.row_span))
            .collect();
        assert_eq!(spans, vec![(2, 1), (1, 2)]);
    }

    #[test]
    fn solve_is_deterministic() {
        let tiles: Vec<_> = (0..25)
            .map(|i| if i % 4 == 0 { wide(i) } else { tall(i) })
            .collect();
        let layout = MasonryLayout::default();
        assert_eq!(layout.solve(&tiles), layout.solve(&tiles));
    }

    #[test]
    fn empty_input_yields_empty_report() {
        let report = MasonryLayout::default().solve(&[]);
        assert!(report.placements.is_empty());
        assert!(report.dropped.is_empty());
        assert_eq!(report.rows, 0);
        assert_eq!(report.iterations, 0);
    }

    #[test]
    fn wide_scans_forward_within_its_row() {
        // Row 0 leaves carry [_, _, T, _, _]: the last wide reaches row 1
        // at column 1, cannot pair with the carried column 2, and lands
        // on the 3-4 pair further right in the same row.
        let tiles = vec![wide(0), tall(1), wide(2), tall(3), wide(4)];
        let report = MasonryLayout::new(5).solve(&tiles);

        let positions: Vec<_> = report
            .placements
            .iter()
            .map(|p| (p.tile_index, p.column, p.row))
            .collect();
        assert_eq!(
            positions,
            vec![(0, 0, 0), (1, 2, 0), (2, 3, 0), (3, 0, 1), (4, 3, 1)]
        );
        assert!(report.is_complete());
        assert_no_overlap(&report);
    }
}
