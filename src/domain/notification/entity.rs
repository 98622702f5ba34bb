// src/domain/notification/entity.rs

/// Singleton delivery configuration for order notifications: one bot token
/// and up to three labelled chat destinations, each individually switchable,
/// plus a global switch. Created explicitly via
/// `NotificationSettingsRepository::ensure_default`, never as a side effect
/// of a read.
#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub bot_token: Option<String>,
    pub chat_id_1: Option<String>,
    pub label_1: Option<String>,
    pub is_active_1: bool,
    pub chat_id_2: Option<String>,
    pub label_2: Option<String>,
    pub is_active_2: bool,
    pub chat_id_3: Option<String>,
    pub label_3: Option<String>,
    pub is_active_3: bool,
    pub is_active: bool,
}

impl NotificationSettings {
    /// Chat ids that should currently receive messages. Empty when the
    /// global switch is off or no configured slot is enabled.
    pub fn recipients(&self) -> Vec<&str> {
        if !self.is_active {
            return Vec::new();
        }
        let slots = [
            (self.chat_id_1.as_deref(), self.is_active_1),
            (self.chat_id_2.as_deref(), self.is_active_2),
            (self.chat_id_3.as_deref(), self.is_active_3),
        ];
        slots
            .into_iter()
            .filter_map(|(chat, active)| match chat {
                Some(id) if active && !id.trim().is_empty() => Some(id),
                _ => None,
            })
            .collect()
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id_1: None,
            label_1: None,
            is_active_1: true,
            chat_id_2: None,
            label_2: None,
            is_active_2: true,
            chat_id_3: None,
            label_3: None,
            is_active_3: true,
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationSettingsUpdate {
    pub bot_token: Option<String>,
    pub chat_id_1: Option<String>,
    pub label_1: Option<String>,
    pub is_active_1: Option<bool>,
    pub chat_id_2: Option<String>,
    pub label_2: Option<String>,
    pub is_active_2: Option<bool>,
    pub chat_id_3: Option<String>,
    pub label_3: Option<String>,
    pub is_active_3: Option<bool>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_switch_silences_all_slots() {
        let settings = NotificationSettings {
            chat_id_1: Some("-100123".into()),
            is_active: false,
            ..Default::default()
        };
        assert!(settings.recipients().is_empty());
    }

    #[test]
    fn only_enabled_configured_slots_receive() {
        let settings = NotificationSettings {
            chat_id_1: Some("-100123".into()),
            chat_id_2: Some("-100456".into()),
            is_active_2: false,
            chat_id_3: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(settings.recipients(), vec!["-100123"]);
    }
}
