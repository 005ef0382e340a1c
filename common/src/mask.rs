use std::path::Path;

use serde_json::Value;

use crate::Result;

/// Hand-authored corrections applied over generated records.
///
/// A mask file is a JSON array of partial records keyed by `id`. Matching
/// records are deep-merged: lists concatenate, objects merge per key and
/// scalars take the mask value. Mask entries that match no generated
/// record are appended to the output for their id prefix.
#[derive(Debug, Default, Clone)]
pub struct Mask {
    entries: Vec<Value>,
}

impl Mask {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Mask file {} not found.", path.display());
                return Err(Box::new(err));
            }
        };
        let entries: Vec<Value> = serde_json::from_str(&contents)?;
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges every mask entry whose id matches the record's id.
    /// Records without an id pass through untouched.
    pub fn apply(&self, record: Value) -> Value {
        let id = match record.get("id").and_then(Value::as_str) {
            Some(id) => id.to_string(),
            None => return record,
        };
        let mut result = record;
        for entry in &self.entries {
            if entry.get("id").and_then(Value::as_str) == Some(id.as_str()) {
                result = deep_merge(result, entry);
            }
        }
        result
    }

    /// Appends mask entries for the given id prefix that are not present
    /// in the generated records.
    pub fn add_missing(&self, records: &mut Vec<Value>, prefix: &str) {
        if self.entries.is_empty() || records.is_empty() {
            return;
        }
        for entry in &self.entries {
            let id = match entry.get("id").and_then(Value::as_str) {
                Some(id) => id,
                None => continue,
            };
            if !id.starts_with(prefix) {
                continue;
            }
            let present = records
                .iter()
                .any(|r| r.get("id").and_then(Value::as_str) == Some(id));
            if !present {
                records.push(entry.clone());
            }
        }
    }
}

/// Deep merge: objects merge per key, arrays concatenate, anything else
/// takes the mask value.
pub fn deep_merge(original: Value, mask: &Value) -> Value {
    match (original, mask) {
        (Value::Object(mut original), Value::Object(mask)) => {
            for (key, mask_value) in mask {
                match original.get_mut(key) {
                    Some(slot) => {
                        let existing = slot.take();
                        *slot = deep_merge(existing, mask_value);
                    }
                    None => {
                        original.insert(key.clone(), mask_value.clone());
                    }
                }
            }
            Value::Object(original)
        }
        (Value::Array(mut original), Value::Array(mask)) => {
            original.extend(mask.iter().cloned());
            Value::Array(original)
        }
        (_, mask) => mask.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mask_of(entries: Vec<Value>) -> Mask {
        Mask { entries }
    }

    #[test]
    fn test_apply_replaces_scalars_and_concatenates_lists() {
        let mask = mask_of(vec![json!({
            "id": "t_ace",
            "description": "fixed",
            "ranks": [{"name": "Extra", "description": "added"}],
        })]);
        let record = json!({
            "id": "t_ace",
            "name": "ACE",
            "description": "garbled",
            "ranks": [{"name": "Acrobatics", "description": "original"}],
        });

        let merged = mask.apply(record);
        assert_eq!(merged["description"], "fixed");
        assert_eq!(merged["name"], "ACE");
        assert_eq!(merged["ranks"].as_array().unwrap().len(), 2);
        assert_eq!(merged["ranks"][0]["name"], "Acrobatics");
        assert_eq!(merged["ranks"][1]["name"], "Extra");
    }

    #[test]
    fn test_apply_merges_nested_objects() {
        let mask = mask_of(vec![json!({
            "id": "mf_atlas",
            "stats": {"hp": 8},
        })]);
        let record = json!({
            "id": "mf_atlas",
            "stats": {"hp": 6, "armor": 0},
        });

        let merged = mask.apply(record);
        assert_eq!(merged["stats"]["hp"], 8);
        assert_eq!(merged["stats"]["armor"], 0);
    }

    #[test]
    fn test_apply_ignores_other_ids() {
        let mask = mask_of(vec![json!({"id": "t_vanguard", "name": "changed"})]);
        let record = json!({"id": "t_ace", "name": "ACE"});
        assert_eq!(mask.apply(record)["name"], "ACE");
    }

    #[test]
    fn test_add_missing_appends_prefixed_entries() {
        let mask = mask_of(vec![
            json!({"id": "t_missing", "name": "NEW"}),
            json!({"id": "tg_other", "name": "wrong prefix"}),
        ]);
        let mut records = vec![json!({"id": "t_ace", "name": "ACE"})];
        mask.add_missing(&mut records, "t_");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], "t_missing");
    }

    #[test]
    fn test_add_missing_skips_present_entries() {
        let mask = mask_of(vec![json!({"id": "t_ace", "name": "ACE"})]);
        let mut records = vec![json!({"id": "t_ace", "name": "ACE"})];
        mask.add_missing(&mut records, "t_");
        assert_eq!(records.len(), 1);
    }
}
