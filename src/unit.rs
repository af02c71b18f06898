use std::fmt::{self, Display};
use std::str::FromStr;

use itertools::Itertools;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::{check_index, Result, TableError};

/// An air conditioner as seen by the home-automation backend: the climate
/// entity that takes commands plus the sensors reporting its temperature and
/// current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ACUnit {
    /// Label shown on the remote's display.
    pub name: &'static str,
    pub entity_id: &'static str,
    pub temp_sensor_id: &'static str,
    pub mode_sensor_id: &'static str,
}

impl ACUnit {
    pub fn field(&self, field: UnitField) -> &'static str {
        match field {
            UnitField::Name => self.name,
            UnitField::EntityId => self.entity_id,
            UnitField::TempSensorId => self.temp_sensor_id,
            UnitField::ModeSensorId => self.mode_sensor_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter, IntoStaticStr)]
pub enum UnitField {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "entity_id")]
    EntityId,
    #[strum(serialize = "temp_sensor_id")]
    TempSensorId,
    #[strum(serialize = "mode_sensor_id")]
    ModeSensorId,
}

impl Display for UnitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = self.into();
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
#[error("Invalid unit field")]
pub struct InvalidUnitField;

impl FromStr for UnitField {
    type Err = InvalidUnitField;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(UnitField::Name),
            "entity" | "entity_id" => Ok(UnitField::EntityId),
            "temp" | "temp_sensor" | "temp_sensor_id" => Ok(UnitField::TempSensorId),
            "mode" | "mode_sensor" | "mode_sensor_id" => Ok(UnitField::ModeSensorId),
            _ => Err(InvalidUnitField),
        }
    }
}

pub const AC_UNITS: &[ACUnit] = &[
    ACUnit {
        name: "Living",
        entity_id: "climate.living_room_ac",
        temp_sensor_id: "living_room_ac_temp",
        mode_sensor_id: "living_room_ac_mode",
    },
    ACUnit {
        name: "Office",
        entity_id: "climate.office_ac",
        temp_sensor_id: "office_ac_temp",
        mode_sensor_id: "office_ac_mode",
    },
    ACUnit {
        name: "Bedroom",
        entity_id: "climate.bedroom_ac",
        temp_sensor_id: "bedroom_ac_temp",
        mode_sensor_id: "bedroom_ac_mode",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    units: &'static [ACUnit],
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new(AC_UNITS)
    }
}

impl UnitTable {
    pub const fn new(units: &'static [ACUnit]) -> Self {
        UnitTable { units }
    }

    pub fn units(&self) -> &'static [ACUnit] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, ACUnit> {
        self.units.iter()
    }

    pub fn get(&self, index: usize) -> Result<&'static ACUnit> {
        trace!("looking up unit {}", index);
        check_index(index, self.len())?;
        Ok(&self.units[index])
    }

    pub fn field(&self, index: usize, field: UnitField) -> Result<&'static str> {
        self.get(index).map(|u| u.field(field))
    }

    pub fn name(&self, index: usize) -> Result<&'static str> {
        self.field(index, UnitField::Name)
    }

    pub fn entity_id(&self, index: usize) -> Result<&'static str> {
        self.field(index, UnitField::EntityId)
    }

    pub fn temp_sensor_id(&self, index: usize) -> Result<&'static str> {
        self.field(index, UnitField::TempSensorId)
    }

    pub fn mode_sensor_id(&self, index: usize) -> Result<&'static str> {
        self.field(index, UnitField::ModeSensorId)
    }

    pub fn position(&self, entity_id: &str) -> Option<usize> {
        self.iter().position(|u| u.entity_id == entity_id)
    }

    pub fn find_by_entity_id(&self, entity_id: &str) -> Option<&'static ACUnit> {
        let found = self.position(entity_id).map(|i| &self.units[i]);
        if found.is_none() {
            debug!("no unit with entity id {}", entity_id);
        }
        found
    }

    /// Checks that every field is filled in and no two units share a climate
    /// entity.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            warn!("unit table is empty");
            return Err(TableError::EmptyTable);
        }
        for (index, unit) in self.iter().enumerate() {
            if let Some(field) = UnitField::iter().find(|f| unit.field(*f).is_empty()) {
                warn!("unit {} has an empty {}", index, field);
                return Err(TableError::EmptyField { index, field });
            }
        }
        if let Some(dup) = self.iter().map(|u| u.entity_id).duplicates().next() {
            warn!("entity id {} is shared by several units", dup);
            return Err(TableError::DuplicateEntityId(dup));
        }
        Ok(())
    }
}

impl IntoIterator for UnitTable {
    type Item = &'static ACUnit;
    type IntoIter = std::slice::Iter<'static, ACUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}
