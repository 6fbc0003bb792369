use serde_json::{Map, Value};

pub const META_ID: &str = "_meta";

/// One element of a play file, classified by its `id` and `name` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRecord {
    /// The `_meta` record. `name` is only kept when it is a JSON string.
    Meta { name: Option<String> },
    Character { name: String },
    Other,
}

impl PlayRecord {
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let name = object.get("name").and_then(Value::as_str);
        let is_meta = matches!(object.get("id"), Some(Value::String(id)) if id == META_ID);
        match (is_meta, name) {
            (true, name) => Self::Meta {
                name: name.map(str::to_owned),
            },
            (false, Some(name)) => Self::Character {
                name: name.to_owned(),
            },
            (false, None) => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(value: Value) -> PlayRecord {
        match value {
            Value::Object(map) => PlayRecord::from_object(&map),
            other => panic!("fixture is not an object: {other}"),
        }
    }

    #[test]
    fn meta_requires_exact_string_id() {
        assert_eq!(
            classify(json!({"id": "_meta", "name": "Tale"})),
            PlayRecord::Meta {
                name: Some("Tale".into())
            }
        );
        assert_eq!(
            classify(json!({"id": "_META", "name": "Tale"})),
            PlayRecord::Character {
                name: "Tale".into()
            }
        );
    }

    #[test]
    fn meta_without_string_name_has_no_title() {
        assert_eq!(
            classify(json!({"id": "_meta"})),
            PlayRecord::Meta { name: None }
        );
        assert_eq!(
            classify(json!({"id": "_meta", "name": 7})),
            PlayRecord::Meta { name: None }
        );
    }

    #[test]
    fn records_without_id_still_count_as_characters() {
        assert_eq!(
            classify(json!({"name": "Knight"})),
            PlayRecord::Character {
                name: "Knight".into()
            }
        );
    }

    #[test]
    fn records_without_usable_name_are_other() {
        assert_eq!(classify(json!({"id": "washerwoman"})), PlayRecord::Other);
        assert_eq!(
            classify(json!({"id": "1", "name": null})),
            PlayRecord::Other
        );
        assert_eq!(
            classify(json!({"id": "1", "name": ["a"]})),
            PlayRecord::Other
        );
    }
}
