use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PATTERN_ID_LEN;
use crate::models::Confidence;

/// A learned association between a component context and an enhancement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    /// Content-derived identity, stable across runs. Best-effort unique.
    pub id: String,
    /// Component tag the enhancement applies to (e.g. "button", "card").
    pub component_type: String,
    pub enhancement: Enhancement,
    pub context: PatternContext,
    pub metadata: PatternMetadata,
}

impl Pattern {
    /// Derive the identity hash for a (component, enhancement, context) triple.
    ///
    /// Order-sensitive over the identity fields; enhancement properties live
    /// in a BTreeMap so their serialization is key-ordered and the hash is
    /// stable across runs. Truncated blake3, collision-tolerant.
    pub fn compute_id(
        component_type: &str,
        enhancement: &Enhancement,
        context: &PatternContext,
    ) -> String {
        let properties = serde_json::to_string(&enhancement.properties).unwrap_or_default();
        let input = format!(
            "{}|{}|{}|{}|{}",
            component_type,
            enhancement.kind,
            properties,
            context.framework.as_deref().unwrap_or(""),
            context.theme.as_deref().unwrap_or(""),
        );
        blake3::hash(input.as_bytes()).to_hex()[..PATTERN_ID_LEN].to_string()
    }
}

/// The concrete change a pattern recommends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enhancement {
    /// Enhancement category (e.g. "spacing", "color-token", "accessibility").
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form property map. BTreeMap keeps serialization order-stable.
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Design tokens the enhancement references.
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl Enhancement {
    /// Whether the enhancement touches accessibility concerns.
    pub fn targets_accessibility(&self) -> bool {
        let kind = self.kind.to_ascii_lowercase();
        if kind.contains("accessibility") || kind.contains("a11y") {
            return true;
        }
        self.properties.keys().any(|k| {
            let k = k.to_ascii_lowercase();
            k.starts_with("aria-")
                || matches!(k.as_str(), "role" | "alt" | "contrast" | "tabindex")
        })
    }

    /// Whether the enhancement references at least one design token.
    pub fn references_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// Where a pattern was observed. All fields optional, free-form strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternContext {
    pub framework: Option<String>,
    pub theme: Option<String>,
    pub brand_pack_id: Option<String>,
    pub file_type: Option<String>,
    pub location: Option<String>,
}

impl PatternContext {
    /// Present key/value pairs, in a fixed key order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = Vec::new();
        if let Some(v) = self.framework.as_deref() {
            entries.push(("framework", v));
        }
        if let Some(v) = self.theme.as_deref() {
            entries.push(("theme", v));
        }
        if let Some(v) = self.brand_pack_id.as_deref() {
            entries.push(("brand_pack_id", v));
        }
        if let Some(v) = self.file_type.as_deref() {
            entries.push(("file_type", v));
        }
        if let Some(v) = self.location.as_deref() {
            entries.push(("location", v));
        }
        entries
    }

    /// Exact-match lookup used by store query filters.
    pub fn matches(&self, key: &str, value: &str) -> bool {
        let field = match key {
            "framework" => &self.framework,
            "theme" => &self.theme,
            "brand_pack_id" => &self.brand_pack_id,
            "file_type" => &self.file_type,
            "location" => &self.location,
            _ => return false,
        };
        field.as_deref() == Some(value)
    }
}

/// Bookkeeping attached to every pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMetadata {
    pub confidence: Confidence,
    /// Observation count. Only ever increases.
    pub frequency: u64,
    pub last_seen: DateTime<Utc>,
    pub created: DateTime<Utc>,
}

impl PatternMetadata {
    /// Metadata for a first observation at `now`.
    pub fn first_seen(now: DateTime<Utc>) -> Self {
        Self {
            confidence: Confidence::default(),
            frequency: 1,
            last_seen: now,
            created: now,
        }
    }
}
