use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notification::{
    NotificationSettings, NotificationSettingsRepository, NotificationSettingsUpdate,
};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const SETTINGS_COLUMNS: &str = "bot_token, chat_id_1, label_1, is_active_1, chat_id_2, label_2, is_active_2, chat_id_3, label_3, is_active_3, is_active";

#[derive(Clone)]
pub struct SqliteNotificationSettingsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteNotificationSettingsRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SettingsRow {
    bot_token: Option<String>,
    chat_id_1: Option<String>,
    label_1: Option<String>,
    is_active_1: i64,
    chat_id_2: Option<String>,
    label_2: Option<String>,
    is_active_2: i64,
    chat_id_3: Option<String>,
    label_3: Option<String>,
    is_active_3: i64,
    is_active: i64,
}

impl From<SettingsRow> for NotificationSettings {
    fn from(row: SettingsRow) -> Self {
        Self {
            bot_token: row.bot_token,
            chat_id_1: row.chat_id_1,
            label_1: row.label_1,
            is_active_1: row.is_active_1 != 0,
            chat_id_2: row.chat_id_2,
            label_2: row.label_2,
            is_active_2: row.is_active_2 != 0,
            chat_id_3: row.chat_id_3,
            label_3: row.label_3,
            is_active_3: row.is_active_3 != 0,
            is_active: row.is_active != 0,
        }
    }
}

#[async_trait]
impl NotificationSettingsRepository for SqliteNotificationSettingsRepository {
    async fn ensure_default(&self) -> DomainResult<NotificationSettings> {
        sqlx::query("INSERT INTO telegram_settings (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        self.get().await?.ok_or_else(|| {
            DomainError::Persistence("notification settings row missing after insert".into())
        })
    }

    async fn get(&self) -> DomainResult<Option<NotificationSettings>> {
        let row = sqlx::query_as::<_, SettingsRow>(&format!(
            "SELECT {SETTINGS_COLUMNS} FROM telegram_settings WHERE id = 1"
        ))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn update(
        &self,
        update: NotificationSettingsUpdate,
    ) -> DomainResult<NotificationSettings> {
        let NotificationSettingsUpdate {
            bot_token,
            chat_id_1,
            label_1,
            is_active_1,
            chat_id_2,
            label_2,
            is_active_2,
            chat_id_3,
            label_3,
            is_active_3,
            is_active,
        } = update;

        let row = sqlx::query_as::<_, SettingsRow>(
            "UPDATE telegram_settings SET \
               bot_token = COALESCE(?, bot_token), \
               chat_id_1 = COALESCE(?, chat_id_1), \
               label_1 = COALESCE(?, label_1), \
               is_active_1 = COALESCE(?, is_active_1), \
               chat_id_2 = COALESCE(?, chat_id_2), \
               label_2 = COALESCE(?, label_2), \
               is_active_2 = COALESCE(?, is_active_2), \
               chat_id_3 = COALESCE(?, chat_id_3), \
               label_3 = COALESCE(?, label_3), \
               is_active_3 = COALESCE(?, is_active_3), \
               is_active = COALESCE(?, is_active) \
             WHERE id = 1 \
             RETURNING bot_token, chat_id_1, label_1, is_active_1, chat_id_2, label_2, is_active_2, chat_id_3, label_3, is_active_3, is_active",
        )
        .bind(bot_token)
        .bind(chat_id_1)
        .bind(label_1)
        .bind(is_active_1.map(i64::from))
        .bind(chat_id_2)
        .bind(label_2)
        .bind(is_active_2.map(i64::from))
        .bind(chat_id_3)
        .bind(label_3)
        .bind(is_active_3.map(i64::from))
        .bind(is_active.map(i64::from))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| {
            DomainError::NotFound("notification settings not initialised".into())
        })?;

        Ok(row.into())
    }
}
