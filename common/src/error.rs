/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Classification of failed writes.
//!
//! Uniqueness, non-null and check constraint failures are integrity
//! violations. Everything else, including foreign keys pointing at rows that
//! do not exist, stays a plain database error.

use sea_orm::sqlx::error::ErrorKind;
use sea_orm::{DbErr, RuntimeErr};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Unique,
    NotNull,
    Check,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Violation::Unique => "unique",
            Violation::NotNull => "not null",
            Violation::Check => "check",
        };

        write!(f, "{}", s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("integrity violation ({violation}): {message}")]
    Integrity {
        violation: Violation,
        message: String,
    },
    #[error("database error: {0}")]
    Database(DbErr),
}

impl DbError {
    pub fn is_integrity(&self) -> bool {
        matches!(self, DbError::Integrity { .. })
    }

    pub fn violation(&self) -> Option<Violation> {
        match self {
            DbError::Integrity { violation, .. } => Some(*violation),
            DbError::Database(_) => None,
        }
    }
}

fn violation_of(err: &DbErr) -> Option<(Violation, String)> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) => e,
        _ => return None,
    };

    let RuntimeErr::SqlxError(sea_orm::sqlx::Error::Database(db_err)) = runtime else {
        return None;
    };

    let violation = match db_err.kind() {
        ErrorKind::UniqueViolation => Violation::Unique,
        ErrorKind::NotNullViolation => Violation::NotNull,
        ErrorKind::CheckViolation => Violation::Check,
        _ => return None,
    };

    Some((violation, db_err.message().to_string()))
}

impl From<DbErr> for DbError {
    fn from(err: DbErr) -> Self {
        match violation_of(&err) {
            Some((violation, message)) => DbError::Integrity { violation, message },
            None => DbError::Database(err),
        }
    }
}
