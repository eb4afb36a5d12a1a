/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ColumnTrait;
use sea_orm::sea_query::SimpleExpr;
use std::fmt;
use std::str::FromStr;

use super::consts::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown lookup `{0}`")]
    UnknownLookup(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// Mirrors the check constraint on `factory.name`.
pub fn check_factory_name(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s.len() > FACTORY_NAME_MAX_LENGTH {
        return Err(format!(
            "Name cannot be longer than {} characters",
            FACTORY_NAME_MAX_LENGTH
        ));
    }

    if s != s.to_lowercase() {
        return Err("Name must be lowercase".to_string());
    }

    if s.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
        return Err("Name can only contain letters, numbers, and dashes".to_string());
    }

    if s.starts_with('-') || s.ends_with('-') {
        return Err("Name can only start and end with letters or numbers".to_string());
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Exact,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Lookup {
    pub fn condition<C: ColumnTrait>(self, column: C, value: i32) -> SimpleExpr {
        match self {
            Lookup::Exact => column.eq(value),
            Lookup::Gt => column.gt(value),
            Lookup::Gte => column.gte(value),
            Lookup::Lt => column.lt(value),
            Lookup::Lte => column.lte(value),
        }
    }
}

impl FromStr for Lookup {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Lookup::Exact),
            "gt" => Ok(Lookup::Gt),
            "gte" => Ok(Lookup::Gte),
            "lt" => Ok(Lookup::Lt),
            "lte" => Ok(Lookup::Lte),
            _ => Err(InputError::UnknownLookup(s.to_string())),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lookup::Exact => "exact",
            Lookup::Gt => "gt",
            Lookup::Gte => "gte",
            Lookup::Lt => "lt",
            Lookup::Lte => "lte",
        };

        write!(f, "{}", s)
    }
}

/// A numeric filter such as `width__gte=800`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLookup {
    pub field: String,
    pub lookup: Lookup,
    pub value: i32,
}

impl FieldLookup {
    pub fn new(field: &str, lookup: Lookup, value: i32) -> Self {
        FieldLookup {
            field: field.to_string(),
            lookup,
            value,
        }
    }

    pub fn exact(field: &str, value: i32) -> Self {
        Self::new(field, Lookup::Exact, value)
    }
}

/// Splits `width__gte` into its field and lookup; a bare field means `exact`.
pub fn parse_lookup_key(key: &str) -> Result<(&str, Lookup), InputError> {
    match key.split_once("__") {
        Some((field, lookup)) => Ok((field, lookup.parse()?)),
        None => Ok((key, Lookup::Exact)),
    }
}

pub fn parse_lookups<K: AsRef<str>, V: AsRef<str>>(
    params: impl IntoIterator<Item = (K, V)>,
    fields: &[&str],
) -> Result<Vec<FieldLookup>, InputError> {
    let mut lookups = Vec::new();

    for (key, value) in params {
        let (field, lookup) = parse_lookup_key(key.as_ref())?;

        if !fields.contains(&field) {
            return Err(InputError::UnknownField(field.to_string()));
        }

        let value = value
            .as_ref()
            .trim()
            .parse::<i32>()
            .map_err(|_| InputError::InvalidNumber(value.as_ref().to_string()))?;

        lookups.push(FieldLookup::new(field, lookup, value));
    }

    Ok(lookups)
}
