//! Game factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active game called `game_name`.
///
/// The display name is derived from the game name.
pub async fn create_game(
    db: &DatabaseConnection,
    game_name: &str,
) -> Result<entity::game::Model, DbErr> {
    entity::game::ActiveModel {
        game_id: ActiveValue::Set(format!("game_{}", next_id())),
        game_name: ActiveValue::Set(game_name.to_string()),
        display_name: ActiveValue::Set(game_name.to_uppercase()),
        is_active: ActiveValue::Set(true),
    }
    .insert(db)
    .await
}
