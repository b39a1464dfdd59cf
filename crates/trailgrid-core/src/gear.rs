//! Gear owned by a rider: bikes, shoes and helmets.

use crate::error::GearError;

/// A piece of gear used on an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", try_from = "RawGear"))]
pub enum Gear {
    Bike {
        name: String,
        bike_type: String,
        gears: u32,
    },
    Shoe {
        name: String,
        size: String,
        shoe_type: String,
    },
    Helmet {
        name: String,
        size: String,
    },
}

fn require(kind: &'static str, field: &'static str, value: &str) -> Result<(), GearError> {
    if value.trim().is_empty() {
        Err(GearError::EmptyField { kind, field })
    } else {
        Ok(())
    }
}

impl Gear {
    pub fn bike(
        name: impl Into<String>,
        bike_type: impl Into<String>,
        gears: u32,
    ) -> Result<Self, GearError> {
        let (name, bike_type) = (name.into(), bike_type.into());
        require("bike", "name", &name)?;
        require("bike", "type", &bike_type)?;
        if gears == 0 {
            return Err(GearError::NoGears);
        }
        Ok(Self::Bike {
            name,
            bike_type,
            gears,
        })
    }

    pub fn shoe(
        name: impl Into<String>,
        size: impl Into<String>,
        shoe_type: impl Into<String>,
    ) -> Result<Self, GearError> {
        let (name, size, shoe_type) = (name.into(), size.into(), shoe_type.into());
        require("shoe", "name", &name)?;
        require("shoe", "size", &size)?;
        require("shoe", "type", &shoe_type)?;
        Ok(Self::Shoe {
            name,
            size,
            shoe_type,
        })
    }

    pub fn helmet(name: impl Into<String>, size: impl Into<String>) -> Result<Self, GearError> {
        let (name, size) = (name.into(), size.into());
        require("helmet", "name", &name)?;
        require("helmet", "size", &size)?;
        Ok(Self::Helmet { name, size })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bike { name, .. } | Self::Shoe { name, .. } | Self::Helmet { name, .. } => name,
        }
    }

    /// Display label for the gear category.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bike { .. } => "Bike",
            Self::Shoe { .. } => "Shoe",
            Self::Helmet { .. } => "Helmet",
        }
    }

    /// A one-sentence human description.
    pub fn description(&self) -> String {
        match self {
            Self::Bike {
                name,
                bike_type,
                gears,
            } => format!("This is a {bike_type} bike named {name} with {gears} gears."),
            Self::Shoe {
                name,
                size,
                shoe_type,
            } => format!("This is a Shoe named {name} of size: {size} and of type {shoe_type}"),
            Self::Helmet { name, size } => format!("This is a Helmet named {name} of size: {size}"),
        }
    }
}

/// Unvalidated wire form; deserialization goes through the constructors.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(tag = "kind")]
enum RawGear {
    Bike {
        name: String,
        bike_type: String,
        gears: u32,
    },
    Shoe {
        name: String,
        size: String,
        shoe_type: String,
    },
    Helmet {
        name: String,
        size: String,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<RawGear> for Gear {
    type Error = GearError;

    fn try_from(raw: RawGear) -> Result<Self, Self::Error> {
        match raw {
            RawGear::Bike {
                name,
                bike_type,
                gears,
            } => Gear::bike(name, bike_type, gears),
            RawGear::Shoe {
                name,
                size,
                shoe_type,
            } => Gear::shoe(name, size, shoe_type),
            RawGear::Helmet { name, size } => Gear::helmet(name, size),
        }
    }
}
