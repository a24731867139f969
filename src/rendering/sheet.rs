//! Sprite sheet handles and atlas layouts.

use bevy::prelude::*;

use crate::core::{GameTuning, SheetLayout};

/// Image and atlas layout handles for one entity kind's sheet.
pub struct SheetHandles {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
    /// Frames per row, for mapping `(row, frame)` to an atlas index.
    pub columns: usize,
}

impl SheetHandles {
    /// Atlas cell index for a sheet row and frame column.
    pub fn cell(&self, row: usize, frame: usize) -> usize {
        row * self.columns + frame
    }
}

/// Loaded sheet handles for both entity kinds.
#[derive(Resource)]
pub struct SpriteSheets {
    pub player: SheetHandles,
    pub enemy: SheetHandles,
}

/// Request both sheet images and register their grid layouts.
pub fn load_sprite_sheets(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let player = load_sheet(&tuning.player.sheet, &asset_server, &mut layouts);
    let enemy = load_sheet(&tuning.enemy.sheet, &asset_server, &mut layouts);
    commands.insert_resource(SpriteSheets { player, enemy });
}

fn load_sheet(
    sheet: &SheetLayout,
    asset_server: &AssetServer,
    layouts: &mut Assets<TextureAtlasLayout>,
) -> SheetHandles {
    let layout = TextureAtlasLayout::from_grid(
        UVec2::new(sheet.frame_width as u32, sheet.frame_height as u32),
        sheet.columns,
        sheet.rows,
        None,
        None,
    );

    SheetHandles {
        image: asset_server.load(sheet.image.clone()),
        layout: layouts.add(layout),
        columns: sheet.columns as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_index_walks_rows_then_columns() {
        let handles = SheetHandles {
            image: Handle::default(),
            layout: Handle::default(),
            columns: 7,
        };
        assert_eq!(handles.cell(0, 0), 0);
        assert_eq!(handles.cell(0, 6), 6);
        assert_eq!(handles.cell(1, 0), 7);
        assert_eq!(handles.cell(6, 3), 45);
    }
}
