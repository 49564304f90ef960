use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, Set,
};

use crate::database::entities::grafikon::{self, Entity as Grafikons, Grafikon};

/// Persistence access for Grafikon rows.
///
/// Works against either the pool or an open transaction.
pub struct GrafikonRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> GrafikonRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_all(&self) -> Result<Vec<Grafikon>, DbErr> {
        let rows = Grafikons::find()
            .order_by_asc(grafikon::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Grafikon::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Grafikon>, DbErr> {
        let row = Grafikons::find_by_id(id).one(self.conn).await?;
        Ok(row.map(Grafikon::from))
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = Grafikons::find_by_id(id).count(self.conn).await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Grafikons::find().count(self.conn).await
    }

    /// Inserts when `id` is empty, otherwise overwrites every column of the matching row.
    ///
    /// Updating a row that does not exist fails with `DbErr::RecordNotUpdated`.
    pub async fn save(&self, grafikon: Grafikon) -> Result<Grafikon, DbErr> {
        let saved = match grafikon.id {
            None => {
                grafikon::ActiveModel {
                    region: Set(grafikon.region),
                    promet: Set(grafikon.promet),
                    ..Default::default()
                }
                .insert(self.conn)
                .await?
            }
            Some(id) => {
                grafikon::ActiveModel {
                    id: Unchanged(id),
                    region: Set(grafikon.region),
                    promet: Set(grafikon.promet),
                }
                .update(self.conn)
                .await?
            }
        };
        Ok(saved.into())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        let result = Grafikons::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            tracing::debug!("No grafikon with id {} to delete", id);
        }
        Ok(())
    }
}
