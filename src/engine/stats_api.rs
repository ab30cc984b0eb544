use super::Engine;

use async_trait::async_trait;
use sqlx::{Executor, Row};

use crate::{api::StatsAPI, entities::Stats, error::Error};

#[async_trait]
impl StatsAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn stats(&self) -> Result<Stats, Error> {
        let mut conn = self.pool.acquire().await?;

        let hotels: i64 = conn
            .fetch_one(sqlx::query("SELECT count(*) AS count FROM hotels"))
            .await?
            .try_get("count")?;

        let restaurants: i64 = conn
            .fetch_one(sqlx::query("SELECT count(*) AS count FROM restaurants"))
            .await?
            .try_get("count")?;

        Ok(Stats {
            hotels,
            restaurants,
            total: hotels + restaurants,
        })
    }
}
