use crate::notifier::DEFAULT_API_URL;
use crate::sources::Endpoints;

pub const DEFAULT_CHAT_ID: &str = "-1003532220511";

/// Runtime settings read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
    pub endpoints: Endpoints,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            bot_token: lookup("BOT_TOKEN").unwrap_or_default(),
            chat_id: lookup("CHAT_ID").unwrap_or_else(|| DEFAULT_CHAT_ID.to_string()),
            api_url: lookup("TELEGRAM_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            endpoints: Endpoints::default(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.bot_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::from_lookup(|_| None);
        assert!(!settings.has_token());
        assert_eq!(settings.chat_id, DEFAULT_CHAT_ID);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.endpoints, Endpoints::default());
    }

    #[test]
    fn reads_overrides() {
        let vars: FxHashMap<&str, &str> = [
            ("BOT_TOKEN", "123:abc"),
            ("CHAT_ID", "@prices"),
            ("TELEGRAM_API_URL", "http://localhost:8081"),
        ]
        .into_iter()
        .collect();
        let settings = Settings::from_lookup(|key| vars.get(key).map(ToString::to_string));
        assert!(settings.has_token());
        assert_eq!(settings.bot_token, "123:abc");
        assert_eq!(settings.chat_id, "@prices");
        assert_eq!(settings.api_url, "http://localhost:8081");
    }
}
