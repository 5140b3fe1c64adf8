use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Satellite radar source a site is monitored with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(30))")]
pub enum MonitoringType {
    #[sea_orm(string_value = "sentinel")]
    #[serde(rename = "sentinel")]
    Sentinel,
    #[sea_orm(string_value = "tsx")]
    #[serde(rename = "tsx")]
    TerrasarX,
}

impl Default for MonitoringType {
    fn default() -> Self {
        Self::Sentinel
    }
}

/// Presentation order for a site's sample series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum SortOrder {
    #[sea_orm(string_value = "asc")]
    #[serde(rename = "asc")]
    Ascending,
    #[sea_orm(string_value = "desc")]
    #[serde(rename = "desc")]
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn monitoring_type_maps_to_stored_values() {
        assert_eq!(MonitoringType::Sentinel.to_value(), "sentinel");
        assert_eq!(MonitoringType::TerrasarX.to_value(), "tsx");
        assert_eq!(
            MonitoringType::try_from_value(&"tsx".to_owned()).unwrap(),
            MonitoringType::TerrasarX
        );
        assert!(MonitoringType::try_from_value(&"landsat".to_owned()).is_err());
    }

    #[test]
    fn sort_order_maps_to_stored_values() {
        assert_eq!(SortOrder::Ascending.to_value(), "asc");
        assert_eq!(SortOrder::Descending.to_value(), "desc");
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
    }

    #[test]
    fn enums_use_stored_values_in_json() {
        assert_eq!(
            serde_json::to_string(&MonitoringType::TerrasarX).unwrap(),
            "\"tsx\""
        );
        let order: SortOrder = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(order, SortOrder::Descending);
    }
}
