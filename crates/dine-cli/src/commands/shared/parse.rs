use dine_app::ItemDraft;
use dine_core::enums::Thumb;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse every value of a repeatable enum flag.
pub fn parse_enum_list<T>(raw: &[String], field: &str) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    raw.iter().map(|value| parse_enum(value, field)).collect()
}

pub fn parse_opt_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|value| parse_enum(value, field)).transpose()
}

/// Parse an `--item` value: `NAME` or `NAME:THUMB`.
///
/// A suffix that is not a thumb stays part of the name, so `Soup: the best`
/// is a name on its own.
pub fn parse_item_flag(raw: &str) -> ItemDraft {
    if let Some((name, suffix)) = raw.rsplit_once(':') {
        if let Ok(thumb) = parse_enum::<Thumb>(suffix, "thumb") {
            return ItemDraft {
                name: name.to_string(),
                thumb: Some(thumb),
                notes: None,
            };
        }
    }
    ItemDraft {
        name: raw.to_string(),
        thumb: None,
        notes: None,
    }
}

/// Map a `--x`/`--clear-x` flag pair to the update field for a clearable value.
pub fn clearable(value: Option<&str>, clear: bool) -> Option<Option<String>> {
    if clear {
        Some(None)
    } else {
        value.map(|v| Some(v.to_string()))
    }
}
