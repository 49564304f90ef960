use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::display_or_null;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grafikon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub region: Option<String>,
    pub promet: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A Grafikon as exchanged over the API: the id stays empty until the store assigns one.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Grafikon {
    pub id: Option<i64>,
    pub region: Option<String>,
    pub promet: Option<i32>,
}

impl Grafikon {
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
    pub fn merge_patch(mut self, patch: &Grafikon) -> Self {
        if let Some(region) = &patch.region {
            self.region = Some(region.clone());
        }
        if let Some(promet) = patch.promet {
            self.promet = Some(promet);
        }
        self
    }
}

impl PartialEq for Grafikon {
    fn eq(&self, other: &Self) -> bool {
        match (self.id, other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Model> for Grafikon {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            region: model.region,
            promet: model.promet,
        }
    }
}

impl fmt::Display for Grafikon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grafikon{{id={}, region='{}', promet={}}}",
            display_or_null(&self.id),
            display_or_null(&self.region),
            display_or_null(&self.promet)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_based_on_id() {
        let grafikon1 = Grafikon::new().id(1);
        let mut grafikon2 = Grafikon::new().id(grafikon1.id.unwrap());
        assert_eq!(grafikon1, grafikon2);

        grafikon2.id = Some(2);
        assert_ne!(grafikon1, grafikon2);

        grafikon2.id = None;
        assert_ne!(grafikon1, grafikon2);
    }

    #[test]
    fn records_without_id_are_never_equal() {
        let grafikon = Grafikon::new().region("AAAAAAAAAA").promet(1);
        assert_ne!(grafikon, grafikon.clone());
    }

    #[test]
    fn field_values_do_not_affect_equality() {
        let a = Grafikon::new().id(7).region("north").promet(1);
        let b = Grafikon::new().id(7).region("south").promet(2);
        assert_eq!(a, b);
    }

    #[test]
    fn merge_patch_only_overwrites_present_fields() {
        let stored = Grafikon::new().id(3).region("AAAAAAAAAA").promet(1);
        let patch = Grafikon::new().id(3).region("BBBBBBBBBB");

        let merged = stored.merge_patch(&patch);
        assert_eq!(merged.region.as_deref(), Some("BBBBBBBBBB"));
        assert_eq!(merged.promet, Some(1));

        let merged = merged.merge_patch(&Grafikon::new().id(3).promet(2));
        assert_eq!(merged.region.as_deref(), Some("BBBBBBBBBB"));
        assert_eq!(merged.promet, Some(2));
    }

    #[test]
    fn display_prints_null_for_missing_fields() {
        assert_eq!(
            Grafikon::new().region("x").to_string(),
            "Grafikon{id=null, region='x', promet=null}"
        );
        assert_eq!(
            Grafikon::new().id(4).region("x").promet(9).to_string(),
            "Grafikon{id=4, region='x', promet=9}"
        );
    }

    #[test]
    fn deserializes_missing_fields_as_empty() {
        let grafikon: Grafikon = serde_json::from_str(r#"{"region":"north"}"#).unwrap();
        assert_eq!(grafikon.id, None);
        assert_eq!(grafikon.region.as_deref(), Some("north"));
        assert_eq!(grafikon.promet, None);
    }
}
