use crate::color::Rgb;
use crate::config::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One grid tile. Position is the cell center in window pixels, fixed at
/// creation from the row/column index.
#[derive(Debug, Clone)]
pub struct Cell {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
    pub eliminated: bool,
}

/// Row-major grid of cells, sized at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn generate(config: &GameConfig, rng: &mut StdRng) -> Self {
        let cell_w = config.cell_width as f32;
        let cell_h = config.cell_height as f32;
        let mut cells = Vec::with_capacity((config.rows * config.cols) as usize);

        for row in 0..config.rows {
            for col in 0..config.cols {
                cells.push(Cell {
                    // First cell centered half a cell in from the corner.
                    x: cell_w / 2.0 + col as f32 * cell_w,
                    y: cell_h / 2.0 + row as f32 * cell_h,
                    width: cell_w,
                    height: cell_h,
                    color: Rgb::random(rng),
                    eliminated: false,
                });
            }
        }

        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get((row * self.cols + col) as usize)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut((row * self.cols + col) as usize)
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

/// The grid game engine: owns the grid, interprets cell selections, applies
/// the similarity-elimination rule and tracks score and completion.
pub struct ColorGame {
    config: GameConfig,
    rng: StdRng,
    pub grid: Grid,
    pub score: i32,
    pub eliminated_count: u32,
    selection: Option<(u32, u32)>,
}

impl ColorGame {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = Grid::generate(&config, &mut rng);
        log::info!("starting a new game");
        Self {
            config,
            rng,
            grid,
            score: 0,
            eliminated_count: 0,
            selection: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Discards the whole grid and rebuilds it with fresh random colors,
    /// resetting score, elimination count and selection.
    pub fn new_game(&mut self) {
        log::info!("starting a new game");
        self.grid = Grid::generate(&self.config, &mut self.rng);
        self.score = 0;
        self.eliminated_count = 0;
        self.selection = None;
    }

    /// Logs the final score and starts over. Bound to the restart key and
    /// invoked by the frame loop when the round completes.
    pub fn restart(&mut self) {
        log::info!("round over, final score: {}", self.score);
        self.new_game();
    }

    /// Handles a click on cell (row, col). Out-of-range indices and clicks
    /// on already-eliminated cells are no-ops. Otherwise runs the
    /// elimination pass and charges the flat one-point click cost.
    ///
    /// Every click on a live cell costs 1 point on top of the +1 earned
    /// per eliminated cell, so a click that only removes the clicked cell
    /// nets zero.
    pub fn select_cell(&mut self, row: u32, col: u32) {
        let selectable = matches!(self.grid.cell(row, col), Some(cell) if !cell.eliminated);
        if selectable {
            self.selection = Some((row, col));
            self.eliminate_similar();
            self.score -= 1;
        }
    }

    /// Eliminates every live cell whose color sits within the configured
    /// tolerance of the selected cell's color, the selected cell included
    /// (its distance to itself is zero).
    fn eliminate_similar(&mut self) {
        let Some((row, col)) = self.selection.take() else {
            return;
        };
        let Some(key) = self.grid.cell(row, col).map(|cell| cell.color) else {
            return;
        };

        let tolerance = self.config.tolerance;
        for cell in self.grid.cells_mut() {
            if !cell.eliminated && key.normalized_distance(&cell.color) <= tolerance {
                cell.eliminated = true;
                self.score += 1;
                self.eliminated_count += 1;
            }
        }
    }

    pub fn is_round_complete(&self) -> bool {
        self.eliminated_count >= self.config.rows * self.config.cols
    }

    /// Maps a pixel position to the grid cell under it. Clicks outside the
    /// grid area (including the window margin past the last column or row)
    /// map to `None`.
    pub fn cell_at_pixel(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let row = (y / self.config.cell_height as f64) as u32;
        let col = (x / self.config.cell_width as f64) as u32;
        if row < self.config.rows && col < self.config.cols {
            Some((row, col))
        } else {
            None
        }
    }

    /// Render feed: every cell still on the board, in row-major order.
    pub fn visible_cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.cells().filter(|cell| !cell.eliminated)
    }
}
