//! Internationalization (i18n) support
//!
//! Views never hold translated strings; they call [`Translate`] on every
//! render so a language switch shows up on the next render.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Looks up the localized text for a key
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Internationalization handler backed by language files
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> key -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a new i18n handler
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            translations: HashMap::new(),
        }
    }

    /// Load language files (`<lang>.yml`, `<lang>.yaml`, `<lang>.json`) from a directory
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let lang = match path.file_stem().and_then(|s| s.to_str()) {
                Some(lang) => lang.to_string(),
                None => continue,
            };

            let content = fs::read_to_string(&path)?;

            // JSON is a subset of YAML, so one parser covers all three
            match serde_yaml::from_str::<HashMap<String, serde_yaml::Value>>(&content) {
                Ok(data) => {
                    self.translations.insert(lang, data);
                    tracing::debug!("Loaded language file: {:?}", path);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Get a translation by key. Key can be nested like "footer.learn"
    pub fn get(&self, key: &str) -> String {
        self.get_for_lang(&self.language, key)
    }

    /// Get a translation for a specific language
    pub fn get_for_lang(&self, lang: &str, key: &str) -> String {
        if let Some(value) = self.lookup(lang, key) {
            return value;
        }

        // Fallback to English
        if lang != "en" {
            if let Some(value) = self.lookup("en", key) {
                return value;
            }
        }

        // Return key as fallback
        key.to_string()
    }

    fn lookup(&self, lang: &str, key: &str) -> Option<String> {
        let data = self.translations.get(lang)?;

        // Flat keys may themselves contain dots ("Dev Tools v2.0")
        if let Some(value) = data.get(key) {
            return scalar_to_string(value);
        }

        get_nested_value(data, key).and_then(scalar_to_string)
    }

    #[cfg(test)]
    fn insert(&mut self, lang: &str, key: &str, value: &str) {
        self.translations
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string(), serde_yaml::Value::String(value.to_string()));
    }
}

impl Translate for I18n {
    fn translate(&self, key: &str) -> String {
        self.get(key)
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Get a nested value from a YAML map using dot notation
fn get_nested_value<'a>(
    data: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = data.get(parts.next()?)?;

    for part in parts {
        match current {
            serde_yaml::Value::Mapping(map) => {
                current = map.get(serde_yaml::Value::String(part.to_string()))?;
            }
            _ => return None,
        }
    }

    Some(current)
}

/// Convert a scalar YAML value to a string; maps and lists are not translations
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_translation() {
        let mut i18n = I18n::new("ja");
        i18n.insert("en", "Read More", "Read More");
        i18n.insert("en", "Learn", "Learn");
        i18n.insert("ja", "Read More", "続きを読む");

        assert_eq!(i18n.get("Read More"), "続きを読む");
        // falls back to English, then to the key
        assert_eq!(i18n.get("Learn"), "Learn");
        assert_eq!(i18n.get("Uses"), "Uses");
    }

    #[test]
    fn test_translate_uses_current_language() {
        let mut i18n = I18n::new("ko");
        i18n.insert("en", "Docs", "Docs");
        i18n.insert("ko", "Docs", "문서");

        assert_eq!(i18n.translate("Docs"), "문서");
        assert_eq!(i18n.get_for_lang("en", "Docs"), "Docs");
    }

    #[test]
    fn test_load_languages() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("ja.yml"),
            "Learn: 学ぶ\nfooter:\n  copyright: 著作権\n",
        )
        .unwrap();
        fs::write(dir.path().join("es.json"), r#"{"Learn": "Aprender"}"#).unwrap();
        fs::write(dir.path().join("broken.yml"), "- [unclosed").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut i18n = I18n::new("ja");
        i18n.load_languages(dir.path()).unwrap();

        assert_eq!(i18n.get_for_lang("broken", "Learn"), "Learn");
        assert_eq!(i18n.get("Learn"), "学ぶ");
        assert_eq!(i18n.get("footer.copyright"), "著作権");
        assert_eq!(i18n.get_for_lang("es", "Learn"), "Aprender");
    }

    #[test]
    fn test_closure_translator() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.translate("docs"), "DOCS");
    }
}
