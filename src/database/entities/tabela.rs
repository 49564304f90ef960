use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::display_or_null;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tabela")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub region: Option<String>,
    pub promet: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A Tabela as exchanged over the API: the id stays empty until the store assigns one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Tabela {
    pub id: Option<i64>,
    pub region: Option<String>,
    pub promet: Option<i32>,
}

impl Tabela {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn promet(mut self, promet: i32) -> Self {
        self.promet = Some(promet);
        self
    }

    /// Applies merge-patch semantics: fields left empty in `patch` keep their current value.
    pub fn merge_patch(mut self, patch: &Tabela) -> Self {
        if let Some(region) = &patch.region {
            self.region = Some(region.clone());
        }
        if let Some(promet) = patch.promet {
            self.promet = Some(promet);
        }
        self
    }
}

impl PartialEq for Tabela {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Model> for Tabela {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            region: model.region,
            promet: model.promet,
        }
    }
}

impl fmt::Display for Tabela {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tabela{{id={}, region='{}', promet={}}}",
            display_or_null(&self.id),
            display_or_null(&self.region),
            display_or_null(&self.promet)
        )
    }
}
