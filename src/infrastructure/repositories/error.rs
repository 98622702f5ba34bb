use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // SQLite reports constraints by message, not by name.
            let message = db_err.message();
            if message.contains("UNIQUE constraint failed: cakes.slug") {
                return DomainError::Conflict("slug already exists".into());
            }
            if message.contains("UNIQUE constraint failed") {
                return DomainError::Conflict("unique constraint violated".into());
            }
            if message.contains("FOREIGN KEY constraint failed") {
                return DomainError::NotFound("referenced record not found".into());
            }
            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
