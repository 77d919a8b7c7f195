//! Game catalog data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::analytics::Game;

/// Repository providing read operations over the game catalog.
pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a game by its unique name.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, game_name: &str) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find()
            .filter(entity::game::Column::GameName.eq(game_name))
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets every game ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_asc(entity::game::Column::GameName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }
}
