use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::contract::model::{Automobile, AutomobilePatch, AutosList, NewAutomobile};
use crate::domain::error::DomainError;

/// `purchaseDate` travels as `MM/dd/yyyy`.
pub mod us_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%m/%d/%Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// REST DTO for automobile representation. The store-generated id is not exposed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutomobileDto {
    pub year: i32,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "us_date")]
    #[schema(value_type = Option<String>, example = "04/17/1967")]
    pub purchase_date: Option<NaiveDate>,
    pub vin: String,
}

/// REST DTO for creating an automobile.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a 400 by [`CreateAutoReq::validate`] rather than as a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutoReq {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "us_date")]
    #[schema(value_type = Option<String>, example = "04/17/1967")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub vin: Option<String>,
}

impl CreateAutoReq {
    /// A create payload needs a non-zero year plus make, model and VIN.
    pub fn validate(self) -> Result<NewAutomobile, DomainError> {
        let year = match self.year {
            Some(year) if year != 0 => year,
            _ => return Err(DomainError::invalid_request("year is required")),
        };
        let make = self
            .make
            .ok_or_else(|| DomainError::invalid_request("make is required"))?;
        let model = self
            .model
            .ok_or_else(|| DomainError::invalid_request("model is required"))?;
        let vin = self
            .vin
            .ok_or_else(|| DomainError::invalid_request("vin is required"))?;

        Ok(NewAutomobile {
            year,
            make,
            model,
            color: self.color,
            owner: self.owner,
            purchase_date: self.purchase_date,
            vin,
        })
    }
}

/// REST DTO for updating an automobile (partial)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateAutoReq {
    pub color: Option<String>,
    pub owner: Option<String>,
}

/// REST DTO for the list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AutosListDto {
    pub automobiles: Vec<AutomobileDto>,
}

/// Query parameters for `GET /api/autos`; both are substring matches.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAutosQuery {
    /// Fragment the color must contain
    pub color: Option<String>,
    /// Fragment the make must contain
    pub make: Option<String>,
}

impl ListAutosQuery {
    pub fn has_filter(&self) -> bool {
        self.color.is_some() || self.make.is_some()
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<Automobile> for AutomobileDto {
    fn from(auto: Automobile) -> Self {
        Self {
            year: auto.year,
            make: auto.make,
            model: auto.model,
            color: auto.color,
            owner: auto.owner,
            purchase_date: auto.purchase_date,
            vin: auto.vin,
        }
    }
}

impl From<AutosList> for AutosListDto {
    fn from(list: AutosList) -> Self {
        Self {
            automobiles: list.into_iter().map(AutomobileDto::from).collect(),
        }
    }
}

impl From<UpdateAutoReq> for AutomobilePatch {
    fn from(req: UpdateAutoReq) -> Self {
        Self {
            color: req.color,
            owner: req.owner,
        }
    }
}
