use sea_orm::DbErr;

/// Whether a database error reports a missing table.
///
/// Matches the MySQL ("Table 'airline.log' doesn't exist") and SQLite ("no such table:
/// log") wordings so optional tables can be treated as empty.
pub fn is_missing_table(err: &DbErr) -> bool {
    let message = err.to_string();
    message.contains("doesn't exist") || message.contains("no such table")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_mysql_and_sqlite_messages() {
        assert!(is_missing_table(&DbErr::Custom(
            "Table 'airline.log' doesn't exist".to_string()
        )));
        assert!(is_missing_table(&DbErr::Custom(
            "no such table: log".to_string()
        )));
        assert!(!is_missing_table(&DbErr::Custom(
            "Connection refused".to_string()
        )));
    }
}
