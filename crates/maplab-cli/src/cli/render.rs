//! Styled terminal output for maps and clone history.
//!
//! Color decisions live here, keyed off [`Theme`]; the core crates stay
//! color-free and only produce plain text via `GameMap::render`.

use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::{style, Style};

use maplab_types::map::{GameMap, Theme};

/// Terminal style for a map's theme tag.
pub fn theme_style(theme: Theme) -> Style {
    match theme {
        Theme::Green => Style::new().green(),
        Theme::DarkGray => Style::new().color256(8),
    }
}

/// Print a map as a two-line styled block, indented two spaces.
pub fn print_map(map: &GameMap) {
    let styled = theme_style(map.theme);
    println!(
        "  {} {} {}",
        styled.apply_to(&map.name).bold(),
        style("|").dim(),
        style(format!("Env: {}", map.environment)).dim()
    );
    println!("  {}", styled.apply_to(map.tile_row()));
}

/// Render the clone history as a table, oldest first.
pub fn clones_table(clones: &[GameMap]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Tiles").fg(Color::White),
        Cell::new("Theme").fg(Color::White),
        Cell::new("Created").fg(Color::White),
    ]);

    for (index, map) in clones.iter().enumerate() {
        let tiles_cell = match map.theme {
            Theme::Green => Cell::new(map.tile_row()).fg(Color::Green),
            Theme::DarkGray => Cell::new(map.tile_row()).fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&map.name),
            tiles_cell,
            Cell::new(map.theme.to_string()),
            Cell::new(map.created_at.format("%H:%M:%S").to_string()),
        ]);
    }

    table
}

/// Styled one-line error message for user-sequencing failures.
pub fn print_user_error(message: &str) {
    println!("  {} {}", style("✗").red().bold(), style(message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_table_has_one_row_per_clone() {
        let map = GameMap::new("Forest", Theme::Green);
        let clones = vec![map.clone_map(), map.clone_map()];

        let table = clones_table(&clones);
        assert_eq!(table.row_iter().count(), 2);
    }
}
