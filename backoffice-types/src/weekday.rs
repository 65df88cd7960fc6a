//! Weekday enumeration and per-day schedule maps.
//!
//! Opening-hours style form fields map each day of the week to a
//! schedule value. The key domain is closed and finite, so the map is a
//! fixed-size array indexed by `Weekday` rather than a dynamic map:
//! every day always has an entry and iteration order is week order.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in display order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Lowercase English name, matching the serialized form.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| crate::Error::UnknownWeekday(s.to_string()))
    }
}

/// A fixed-size ordered mapping from weekday to a schedule value.
///
/// Every day always has a value; construction requires a default or an
/// explicit per-day fill. Serializes as a JSON object keyed by lowercase
/// day name, in week order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule<T> {
    days: [T; 7],
}

impl<T> WeekSchedule<T> {
    /// Builds a schedule by calling `fill` once per day, in week order.
    pub fn from_fn(mut fill: impl FnMut(Weekday) -> T) -> Self {
        Self {
            days: Weekday::ALL.map(&mut fill),
        }
    }

    /// Returns the value for the given day.
    #[must_use]
    pub fn get(&self, day: Weekday) -> &T {
        &self.days[day.index()]
    }

    /// Returns a mutable reference to the value for the given day.
    pub fn get_mut(&mut self, day: Weekday) -> &mut T {
        &mut self.days[day.index()]
    }

    /// Replaces the value for the given day, returning the old value.
    pub fn set(&mut self, day: Weekday, value: T) -> T {
        std::mem::replace(&mut self.days[day.index()], value)
    }

    /// Iterates `(day, value)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &T)> {
        Weekday::ALL.iter().map(|d| (*d, &self.days[d.index()]))
    }
}

impl<T: Default> Default for WeekSchedule<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T: Serialize> Serialize for WeekSchedule<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (day, value) in self.iter() {
            map.serialize_entry(day.name(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for WeekSchedule<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WeekVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de> + Default> Visitor<'de> for WeekVisitor<T> {
            type Value = WeekSchedule<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by lowercase weekday name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut schedule = WeekSchedule::default();
                while let Some(key) = access.next_key::<String>()? {
                    let day = Weekday::from_str(&key)
                        .map_err(|_| de::Error::unknown_field(&key, &[]))?;
                    schedule.set(day, access.next_value()?);
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(WeekVisitor(std::marker::PhantomData))
    }
}
