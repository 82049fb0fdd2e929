//! CLI Command Implementations

use std::path::Path;

use log::info;

use crate::color::Rgb;
use crate::error::Result;
use crate::grid::{Grid, Scenario};
use crate::layers::LayerCatalog;

/// Print every catalog layer with its index and additive color.
pub fn list_layers() {
    for layer in LayerCatalog::standard().iter() {
        println!("{:>2}  {:<8} {}", layer.index(), layer.name(), layer.color());
    }
}

/// Replay a scenario file and print the final colors.
pub fn replay(path: &Path) -> Result<()> {
    info!("Replaying scenario: {}", path.display());

    let scenario = Scenario::load(path)?;
    let grid = scenario.run(LayerCatalog::standard())?;
    print!("{}", render_rows(&grid, scenario.background, scenario.timestamp));

    Ok(())
}

/// One line per row, clamped colors as hex triplets.
pub fn render_rows(grid: &Grid, background: Rgb, timestamp: u64) -> String {
    let mut out = String::new();
    for row in grid.colors(background, timestamp) {
        let cells: Vec<String> = row
            .into_iter()
            .map(|c| {
                let [r, g, b] = c.clamped();
                format!("#{:02x}{:02x}{:02x}", r, g, b)
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
