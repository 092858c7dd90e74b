// src/models/car.rs
// DOCUMENTATION: Car listings and their fixed-choice attributes
// PURPOSE: Typed car model, creation DTO and template DTOs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::country::country_name;
use super::{media_link, BrandResponse, PhotoResponse};

/// Declares a fixed-choice attribute stored by its short code
/// DOCUMENTATION: Generates `code()`, `label()`, `from_code()` and `ALL`
macro_rules! choices {
    ($name:ident { $($variant:ident => ($code:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $code)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Code persisted in the database
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            /// Human readable name
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choices!(BodyType {
    Sedan => ("SEDAN", "Sedan"),
    Limousine => ("LIMOUSINE", "Limousine"),
    Hatchback => ("HATCHBACK", "Hatchback"),
    Liftback => ("LIFTBACK", "Liftback"),
    StationWagon => ("SW", "Station wagon"),
    Coupe => ("COUPE", "Coupe"),
    Convertible => ("CONVERTIBLE", "Convertible"),
    Roadster => ("ROADSTER", "Roadster"),
    Targa => ("TARGA", "Targa"),
    Minivan => ("MINIVAN", "Minivan"),
    Pickup => ("PICKUP", "Pickup"),
    Crossover => ("CROSSOVER", "Crossover"),
    CoupeCrossover => ("CCROSSOVER", "Coupe-crossover"),
    CoupeConvertible => ("CCONVERTIBLE", "Coupe-cabriolet"),
    Speedster => ("SPEEDSTER", "Speedster"),
    Suv => ("SUV", "SUV"),
});

choices!(Transmission {
    Automatic => ("AT", "Automatic"),
    Manual => ("MT", "Manual"),
    SemiAutomatic => ("SAT", "Semi-automatic"),
});

choices!(DriveUnit {
    FrontWheel => ("FWD", "Front wheel drive"),
    RearWheel => ("RWD", "Rear wheel drive"),
    FourWheel => ("4WD", "Four wheel drive"),
});

choices!(EngineType {
    Gasoline => ("G", "Gasoline"),
    Diesel => ("D", "Diesel"),
    Hybrid => ("H", "Hybrid"),
    Electric => ("E", "Electric"),
});

/// A car offered by the dealership, joined with its brand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub brand_id: i64,
    pub brand_name: String,
    pub brand_country: String,
    pub car_model: String,
    pub body_type: BodyType,
    /// Year of issue
    pub year: i64,
    pub equipment_name: String,
    pub equipment_description: String,
    pub transmission: Transmission,
    pub number_of_gears: i64,
    pub drive_unit: DriveUnit,
    pub engine_type: EngineType,
    pub working_volume: i64,
    pub engine_power: i64,
    pub price: i64,
    /// Units available for sale; zero hides the car from the listing
    pub amount: i64,
    /// First photo by upload order, when the car has any
    pub primary_photo: Option<String>,
}

/// Request DTO for creating a car
/// DOCUMENTATION: Choice fields arrive as codes and are checked against the enums
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCarRequest {
    pub brand_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub car_model: String,

    #[validate(custom = "validate_body_type")]
    pub body_type: String,

    #[validate(range(min = 0))]
    pub year: i64,

    #[validate(length(min = 1, max = 100))]
    pub equipment_name: String,

    #[serde(default)]
    pub equipment_description: String,

    #[validate(custom = "validate_transmission")]
    pub transmission: String,

    #[validate(range(min = 4, max = 12))]
    pub number_of_gears: i64,

    #[validate(custom = "validate_drive_unit")]
    pub drive_unit: String,

    #[validate(custom = "validate_engine_type")]
    pub engine_type: String,

    #[validate(range(min = 0))]
    pub working_volume: i64,

    #[validate(range(min = 0))]
    pub engine_power: i64,

    #[validate(range(min = 0))]
    pub price: i64,

    #[validate(range(min = 0))]
    pub amount: i64,
}

fn invalid_choice(code: &str) -> ValidationError {
    let mut err = ValidationError::new("invalid_choice");
    err.message = Some(format!("'{}' is not one of the available choices", code).into());
    err
}

fn validate_body_type(code: &str) -> Result<(), ValidationError> {
    BodyType::from_code(code).map(|_| ()).ok_or_else(|| invalid_choice(code))
}

fn validate_transmission(code: &str) -> Result<(), ValidationError> {
    Transmission::from_code(code).map(|_| ()).ok_or_else(|| invalid_choice(code))
}

fn validate_drive_unit(code: &str) -> Result<(), ValidationError> {
    DriveUnit::from_code(code).map(|_| ()).ok_or_else(|| invalid_choice(code))
}

fn validate_engine_type(code: &str) -> Result<(), ValidationError> {
    EngineType::from_code(code).map(|_| ()).ok_or_else(|| invalid_choice(code))
}

/// Car DTO for listing and detail templates
#[derive(Debug, Clone, Serialize)]
pub struct CarResponse {
    pub id: i64,
    pub title: String,
    pub brand_name: String,
    pub brand_country: String,
    pub car_model: String,
    pub body_type: &'static str,
    pub year: i64,
    pub equipment_name: String,
    pub equipment_description: String,
    pub transmission: &'static str,
    pub number_of_gears: i64,
    pub drive_unit: &'static str,
    pub engine_type: &'static str,
    pub working_volume: i64,
    pub engine_power: i64,
    pub price: i64,
    pub amount: i64,
    pub photo_url: Option<String>,
}

/// Detailed car response with brand and every photo
#[derive(Debug, Clone, Serialize)]
pub struct CarDetailResponse {
    pub car: CarResponse,
    pub brand: BrandResponse,
    pub photos: Vec<PhotoResponse>,
}

impl Car {
    /// "{brand} {model}"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand_name, self.car_model)
    }

    pub fn to_response(&self, media_url: &str) -> CarResponse {
        CarResponse {
            id: self.id,
            title: self.display_name(),
            brand_name: self.brand_name.clone(),
            brand_country: country_name(&self.brand_country)
                .unwrap_or(self.brand_country.as_str())
                .to_string(),
            car_model: self.car_model.clone(),
            body_type: self.body_type.label(),
            year: self.year,
            equipment_name: self.equipment_name.clone(),
            equipment_description: self.equipment_description.clone(),
            transmission: self.transmission.label(),
            number_of_gears: self.number_of_gears,
            drive_unit: self.drive_unit.label(),
            engine_type: self.engine_type.label(),
            working_volume: self.working_volume,
            engine_power: self.engine_power,
            price: self.price,
            amount: self.amount,
            photo_url: self
                .primary_photo
                .as_deref()
                .map(|path| media_link(media_url, path)),
        }
    }
}
