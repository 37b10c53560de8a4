use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{domain::entities::platform::Platform, errors::PurchasesError};

/// Prefix of the environment variables that override file configuration,
/// e.g. `REVENUECAT_API_KEY`.
pub const ENV_PREFIX: &str = "REVENUECAT_";

const DEFAULT_CALLBACK_TARGET: &str = "Purchases";

/// Keys taken verbatim from the environment. Figment would otherwise parse
/// all-digit values (e.g. a numeric app user ID) as integers.
const STRING_KEYS: &[&str] = &["api_key", "app_user_id", "callback_target"];

/// Startup configuration of the purchases bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchasesConfig {
    /// RevenueCat API key, from https://app.revenuecat.com/.
    pub api_key: String,
    /// Pass your own ID if your app has accounts. If `None`, RevenueCat
    /// generates a user ID.
    pub app_user_id: Option<String>,
    /// Products fetched as soon as the bridge is initialized.
    pub product_identifiers: Vec<String>,
    pub platform: Platform,
    /// Name the native layer addresses its callbacks to.
    pub callback_target: String,
}

impl Default for PurchasesConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            app_user_id: None,
            product_identifiers: Vec::new(),
            platform: Platform::default(),
            callback_target: DEFAULT_CALLBACK_TARGET.to_string(),
        }
    }
}

impl PurchasesConfig {
    pub fn new(
        api_key: impl Into<String>,
        app_user_id: Option<String>,
        product_identifiers: Vec<String>,
        platform: Platform,
    ) -> Result<Self, PurchasesError> {
        Self {
            api_key: api_key.into(),
            app_user_id,
            product_identifiers,
            platform,
            ..Self::default()
        }
        .validated()
    }

    pub fn with_callback_target(mut self, callback_target: impl Into<String>) -> Self {
        self.callback_target = callback_target.into();
        self
    }

    /// Defaults, then the optional YAML file, then `REVENUECAT_*` environment
    /// variables.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(STRING_KEYS));
        for (key, value) in Env::prefixed(ENV_PREFIX).only(STRING_KEYS).iter() {
            let key = key.as_str().to_ascii_lowercase();
            figment = figment.merge(Serialized::default(&key, value));
        }
        figment
    }

    pub fn load(path: Option<&Path>) -> Result<Self, PurchasesError> {
        let config: Self = Self::figment(path).extract()?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self, PurchasesError> {
        if self.api_key.trim().is_empty() {
            return Err(PurchasesError::MissingApiKey);
        }
        self.app_user_id = self.app_user_id.filter(|id| !id.is_empty());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_app_user_id_means_anonymous() {
        let config =
            PurchasesConfig::new("goog_key", Some(String::new()), vec![], Platform::Android)
                .unwrap();
        assert_eq!(config.app_user_id, None);
        assert_eq!(config.callback_target, "Purchases");
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = PurchasesConfig::new("  ", None, vec![], Platform::Ios).unwrap_err();
        assert!(matches!(err, PurchasesError::MissingApiKey));
    }

    #[test]
    fn load_merges_file_and_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "purchases.yaml",
                r#"
                api_key: appl_from_file
                app_user_id: player_one
                platform: ios
                product_identifiers:
                  - premium_monthly
                  - premium_yearly
                "#,
            )?;
            jail.set_env("REVENUECAT_API_KEY", "appl_from_env");

            let config = PurchasesConfig::load(Some(Path::new("purchases.yaml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(
                config,
                PurchasesConfig {
                    api_key: "appl_from_env".to_string(),
                    app_user_id: Some("player_one".to_string()),
                    product_identifiers: vec![
                        "premium_monthly".to_string(),
                        "premium_yearly".to_string()
                    ],
                    platform: Platform::Ios,
                    callback_target: "Purchases".to_string(),
                }
            );
            Ok(())
        });
    }

    #[test]
    fn numeric_environment_values_stay_strings() {
        Jail::expect_with(|jail| {
            jail.set_env("REVENUECAT_API_KEY", "1234");
            jail.set_env("REVENUECAT_APP_USER_ID", "0012345");
            jail.set_env("REVENUECAT_CALLBACK_TARGET", "42");

            let config = PurchasesConfig::load(None).map_err(|e| e.to_string())?;
            assert_eq!(config.api_key, "1234");
            assert_eq!(config.app_user_id.as_deref(), Some("0012345"));
            assert_eq!(config.callback_target, "42");
            Ok(())
        });
    }

    #[test]
    fn product_identifiers_come_from_environment() {
        Jail::expect_with(|jail| {
            jail.create_file("purchases.yaml", "product_identifiers: [gems_100]")?;
            jail.set_env("REVENUECAT_API_KEY", "goog_key");
            jail.set_env(
                "REVENUECAT_PRODUCT_IDENTIFIERS",
                r#"["premium_monthly", "premium_yearly"]"#,
            );

            let config = PurchasesConfig::load(Some(Path::new("purchases.yaml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(
                config.product_identifiers,
                vec!["premium_monthly".to_string(), "premium_yearly".to_string()]
            );
            Ok(())
        });
    }

    #[test]
    fn load_without_api_key_fails() {
        Jail::expect_with(|_jail| {
            let err = PurchasesConfig::load(None).unwrap_err();
            assert!(matches!(err, PurchasesError::MissingApiKey));
            Ok(())
        });
    }

    #[test]
    fn load_rejects_unknown_platform() {
        Jail::expect_with(|jail| {
            jail.set_env("REVENUECAT_API_KEY", "goog_key");
            jail.set_env("REVENUECAT_PLATFORM", "windows");
            let err = PurchasesConfig::load(None).unwrap_err();
            assert!(matches!(err, PurchasesError::Config(_)));
            Ok(())
        });
    }
}
