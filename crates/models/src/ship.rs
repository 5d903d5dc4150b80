use sea_orm::{entity::prelude::*, Set, DatabaseConnection, ActiveModelTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Closed set of ship classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    #[sea_orm(string_value = "TRANSPORT")]
    Transport,
    #[sea_orm(string_value = "MILITARY")]
    Military,
    #[sea_orm(string_value = "MERCHANT")]
    Merchant,
}

/// A catalogued ship. Serialized with the camelCase field names clients use;
/// `prodDate` travels as epoch milliseconds.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ship")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTimeUtc,
    pub is_used: bool,
    #[sea_orm(column_type = "Double")]
    pub speed: f64,
    pub crew_size: i32,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values of a ship that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTimeUtc,
    pub is_used: bool,
    pub speed: f64,
    pub crew_size: i32,
    pub rating: f64,
}

impl NewShip {
    /// Attach a store-assigned id.
    pub fn into_model(self, id: i64) -> Model {
        Model {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, ship: NewShip) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(ship.name),
        planet: Set(ship.planet),
        ship_type: Set(ship.ship_type),
        prod_date: Set(ship.prod_date),
        is_used: Set(ship.is_used),
        speed: Set(ship.speed),
        crew_size: Set(ship.crew_size),
        rating: Set(ship.rating),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every non-key column of an existing row.
pub async fn overwrite(db: &DatabaseConnection, ship: Model) -> Result<Model, errors::ModelError> {
    let id = ship.id;
    let am = ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(id),
        name: Set(ship.name),
        planet: Set(ship.planet),
        ship_type: Set(ship.ship_type),
        prod_date: Set(ship.prod_date),
        is_used: Set(ship.is_used),
        speed: Set(ship.speed),
        crew_size: Set(ship.crew_size),
        rating: Set(ship.rating),
    };
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => errors::ModelError::NotFound(format!("ship {id}")),
        other => errors::ModelError::Db(other.to_string()),
    })
}
