use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ConnectionTrait, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryOrder, Set,
};

use crate::database::entities::tabela::{self, Entity as Tabelas, Tabela};
use crate::server::pagination::{Direction, Page, PageRequest};

/// Maps a sort property from the query string onto a column.
pub fn sort_column(property: &str) -> Option<tabela::Column> {
    match property {
        "id" => Some(tabela::Column::Id),
        "region" => Some(tabela::Column::Region),
        "promet" => Some(tabela::Column::Promet),
        _ => None,
    }
}

/// Persistence access for Tabela rows.
///
/// Works against either the pool or an open transaction.
pub struct TabelaRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TabelaRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_all(&self) -> Result<Vec<Tabela>, DbErr> {
        let rows = Tabelas::find()
            .order_by_asc(tabela::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Tabela::from).collect())
    }

    /// Fetches one page, applying each sort in order; ties fall back to id so pages stay stable.
    pub async fn find_page(&self, request: &PageRequest) -> Result<Page<Tabela>, DbErr> {
        let mut query = Tabelas::find();
        for sort in &request.sort {
            if let Some(column) = sort_column(&sort.property) {
                let order = match sort.direction {
                    Direction::Asc => Order::Asc,
                    Direction::Desc => Order::Desc,
                };
                query = query.order_by(column, order);
            }
        }
        query = query.order_by_asc(tabela::Column::Id);

        let paginator = query.paginate(self.conn, request.size);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(request.page).await?;

        Ok(Page::new(
            rows.into_iter().map(Tabela::from).collect(),
            request,
            total,
        ))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Tabela>, DbErr> {
        let row = Tabelas::find_by_id(id).one(self.conn).await?;
        Ok(row.map(Tabela::from))
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = Tabelas::find_by_id(id).count(self.conn).await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Tabelas::find().count(self.conn).await
    }

    /// Inserts when `id` is empty, otherwise overwrites every column of the matching row.
    ///
    /// Updating a row that does not exist fails with `DbErr::RecordNotUpdated`.
    pub async fn save(&self, tabela: Tabela) -> Result<Tabela, DbErr> {
        let saved = match tabela.id {
            None => {
                tabela::ActiveModel {
                    region: Set(tabela.region),
                    promet: Set(tabela.promet),
                    ..Default::default()
                }
                .insert(self.conn)
                .await?
            }
            Some(id) => {
                tabela::ActiveModel {
                    id: Unchanged(id),
                    region: Set(tabela.region),
                    promet: Set(tabela.promet),
                }
                .update(self.conn)
                .await?
            }
        };
        Ok(saved.into())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        let result = Tabelas::delete_by_id(id).exec(self.conn).await?;
        if result.rows_affected == 0 {
            tracing::debug!("No tabela with id {} to delete", id);
        }
        Ok(())
    }
}
