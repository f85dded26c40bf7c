//! Localized message catalog
//!
//! Error and log messages are resolved at call time from a key plus
//! positional parameters. Bundles for 'en' and 'tr' are embedded in the
//! binary.

use std::collections::HashMap;

static RESOURCE: &str = include_str!("messages.json");

pub struct MessageCatalog {
    messages: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl MessageCatalog {
    /// Load the bundle for the given locale, with 'en' as fallback for
    /// missing keys. An unknown locale yields the fallback bundle only.
    pub fn for_locale(locale: &str) -> Self {
        let mut bundles: HashMap<String, HashMap<String, String>> =
            serde_json::from_str(RESOURCE).expect("embedded message resource is valid JSON");

        let fallback = bundles.remove("en").unwrap_or_default();
        let messages = bundles.remove(locale).unwrap_or_default();

        Self { messages, fallback }
    }

    /// Resolve a key without parameters. Unknown keys resolve to the key
    /// itself so a missing resource never panics a request.
    pub fn get(&self, key: &str) -> String {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve a key and substitute positional `{0}`, `{1}`, ... parameters.
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let mut message = self.get(key);
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{}}}", i), arg);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_positional_parameters() {
        let catalog = MessageCatalog::for_locale("en");
        assert_eq!(
            catalog.format("error.user.not-found", &["5"]),
            "User with id 5 not found"
        );
    }

    #[test]
    fn formats_multiple_parameters_in_any_position() {
        let catalog = MessageCatalog::for_locale("tr");
        let message = catalog.format("info.wallet.created", &["TR01", "3"]);
        assert_eq!(message, "3 kullanıcısı için TR01 cüzdanı oluşturuldu");
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let catalog = MessageCatalog::for_locale("de");
        assert_eq!(catalog.get("error.not-found.records"), "No records found");
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let catalog = MessageCatalog::for_locale("en");
        assert_eq!(catalog.get("error.missing.key"), "error.missing.key");
    }
}
