//! Shared domain enums

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Operational status of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentStatus {
    Active,
    Inactive,
    Maintenance,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "ACTIVE",
            EquipmentStatus::Inactive => "INACTIVE",
            EquipmentStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EquipmentStatus {
    type Err = String;

    /// Case-insensitive; also accepts the "Under Maintenance" label used by clients.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(' ', "_");
        match normalized.as_str() {
            "ACTIVE" => Ok(EquipmentStatus::Active),
            "INACTIVE" => Ok(EquipmentStatus::Inactive),
            "MAINTENANCE" | "UNDER_MAINTENANCE" => Ok(EquipmentStatus::Maintenance),
            _ => Err(format!("Invalid equipment status: {}", s)),
        }
    }
}

// SQLx conversion for EquipmentStatus (stored as text)
impl sqlx::Type<Postgres> for EquipmentStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for EquipmentStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for EquipmentStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!("ACTIVE".parse::<EquipmentStatus>(), Ok(EquipmentStatus::Active));
        assert_eq!("inactive".parse::<EquipmentStatus>(), Ok(EquipmentStatus::Inactive));
        assert_eq!("Maintenance".parse::<EquipmentStatus>(), Ok(EquipmentStatus::Maintenance));
        assert_eq!(
            "Under Maintenance".parse::<EquipmentStatus>(),
            Ok(EquipmentStatus::Maintenance)
        );
    }

    #[test]
    fn test_parse_unknown_status() {
        assert!("bogus".parse::<EquipmentStatus>().is_err());
        assert!("".parse::<EquipmentStatus>().is_err());
    }

    #[test]
    fn test_serialized_form_round_trips_through_parse() {
        for status in [
            EquipmentStatus::Active,
            EquipmentStatus::Inactive,
            EquipmentStatus::Maintenance,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
            assert_eq!(status.as_str().parse::<EquipmentStatus>(), Ok(status));
        }
    }
}
