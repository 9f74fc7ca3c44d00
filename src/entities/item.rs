use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Number of decimal places prices are rendered with
pub const PRICE_SCALE: u32 = 2;

/// Something a vendor sells
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "items")]
#[schema(as = Item)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning vendor's id
    #[serde(rename = "vendor")]
    pub vendor_id: i32,
    pub name: String,
    #[sea_orm(nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(serialize_with = "serialize_price")]
    #[schema(value_type = String, example = "1.00")]
    pub price: Decimal,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id",
        on_delete = "Cascade"
    )]
    Vendor,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Renders prices with a fixed scale whatever precision the backend kept
fn serialize_price<S: Serializer>(price: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let mut price = price.round_dp(PRICE_SCALE);
    price.rescale(PRICE_SCALE);
    serializer.serialize_str(&price.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple(price: Decimal) -> Model {
        Model {
            id: 1,
            vendor_id: 3,
            name: "Apple".into(),
            description: None,
            price,
            quantity: 0,
        }
    }

    #[test]
    fn serializes_vendor_key_and_fixed_scale_price() {
        let json = serde_json::to_value(apple(Decimal::new(1, 0))).unwrap();
        assert_eq!(json["vendor"], 3);
        assert_eq!(json["price"], "1.00");
        assert!(json.get("vendor_id").is_none());
    }

    #[test]
    fn keeps_cents_when_backend_returns_floats() {
        let json = serde_json::to_value(apple(Decimal::new(1999, 3))).unwrap();
        assert_eq!(json["price"], "2.00");
        let json = serde_json::to_value(apple(Decimal::new(125, 2))).unwrap();
        assert_eq!(json["price"], "1.25");
    }
}
