use serde::{Deserialize, Deserializer, Serialize};

use super::tax::{estimate_taxes, TaxBreakdown};

/// One imported item recorded by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
    /// Empty when the user left it out.
    #[serde(default, alias = "categoria")]
    pub category: String,
    #[serde(default, alias = "preco", deserialize_with = "lenient_amount")]
    pub price: f64,
    #[serde(default, alias = "frete", deserialize_with = "lenient_amount")]
    pub freight: f64,
    /// Kilograms.
    #[serde(default, alias = "peso", deserialize_with = "lenient_amount")]
    pub weight: f64,
}

impl Entry {
    pub fn taxes(&self) -> TaxBreakdown {
        estimate_taxes(self.price, self.freight)
    }

    pub fn category_label(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            "-"
        } else {
            trimmed
        }
    }
}

/// Raw text captured by the new-entry form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub freight: String,
    pub weight: String,
}

impl EntryDraft {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Builds an entry, or `None` when the name is blank.
    pub fn into_entry(self, id: String) -> Option<Entry> {
        if !self.has_name() {
            return None;
        }
        Some(Entry {
            id,
            price: parse_amount(&self.price),
            freight: parse_amount(&self.freight),
            weight: parse_amount(&self.weight),
            name: self.name,
            category: self.category,
        })
    }
}

/// Parses user-typed numeric text. Empty, unparsable or non-finite input
/// yields 0. Whichever of `.` and `,` comes last is the decimal separator,
/// so `1.234,56` and `1,234.56` both read as 1234.56.
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let normalized = match (trimmed.rfind('.'), trimmed.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => trimmed.replace('.', "").replacen(',', ".", 1),
        (Some(_), Some(_)) => trimmed.replace(',', ""),
        (None, Some(_)) => trimmed.replacen(',', ".", 1),
        _ => trimmed.to_string(),
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Picks a millisecond-timestamp id, bumping it until it does not clash
/// with any existing entry.
pub fn next_entry_id(existing: &[Entry], now_millis: i128) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|entry| entry.id == id) {
            return id;
        }
        candidate += 1;
    }
}

pub fn now_millis() -> i128 {
    time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
        Missing(()),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Number(value) if value.is_finite() => value,
        Amount::Number(_) | Amount::Missing(()) => 0.0,
        Amount::Text(text) => parse_amount(&text),
    })
}
