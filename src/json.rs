/*!

# Saving and Restoring Objects as JSON

Objects save their state as a flat JSON object keyed by property name. The two traits split the
direction: [`JsonExport`] writes keys into a map, [`JsonImport`] reads them back. Implementations
are usually a list of [`export_value`] and [`import_value`] calls, one per property.

Import is lenient. A key that is missing or holds a value of the wrong type is logged and skipped,
and the property keeps its current value. Importing goes through a setter, normally the generated
one, so observers see the restored values like any other change.

*/

use std::{fs, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub trait JsonExport {
    /// Writes this object's properties into `json`.
    fn json_write(&self, json: &mut Map<String, Value>);

    fn to_json(&self) -> Value {
        let mut json = Map::new();
        self.json_write(&mut json);
        Value::Object(json)
    }

    /// Writes [`to_json`](Self::to_json) to `path`, pretty printed.
    fn json_save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.to_json())?;
        fs::write(path, text)?;
        Ok(())
    }
}

pub trait JsonImport {
    /// Restores this object's properties from `json`.
    fn json_read(&mut self, json: &Map<String, Value>);

    fn from_json(&mut self, json: &Value) -> Result<()> {
        let object = json.as_object().ok_or(Error::NotAnObject)?;
        self.json_read(object);
        Ok(())
    }

    fn json_load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let text = fs::read_to_string(path)?;
        let json: Value = serde_json::from_str(&text)?;
        self.from_json(&json)
    }
}

/// Decodes `json[key]` and passes it to `setter`. Returns whether the setter was called.
///
/// ```
/// use serde_json::json;
/// use property_helpers::import_value;
///
/// let json = json!({ "volume": 7, "label": 3 });
/// let object = json.as_object().unwrap();
///
/// let mut volume = 0u8;
/// let mut label = String::from("kept");
/// assert!(import_value(object, "volume", |v: u8| volume = v));
/// assert!(!import_value(object, "label", |v: String| label = v));
/// assert_eq!((volume, label.as_str()), (7, "kept"));
/// ```
pub fn import_value<T, R>(
    json: &Map<String, Value>,
    key: &str,
    setter: impl FnOnce(T) -> R,
) -> bool
where
    T: DeserializeOwned,
{
    let Some(raw) = json.get(key) else {
        tracing::warn!(key, "JSON key missing, property left unchanged");
        return false;
    };

    match T::deserialize(raw) {
        Ok(value) => {
            setter(value);
            true
        }
        Err(error) => {
            tracing::warn!(
                key,
                expected = std::any::type_name::<T>(),
                %error,
                "JSON value has the wrong type, property left unchanged"
            );
            false
        }
    }
}

/// Stores `value` under `key`. Values that cannot be represented in JSON are logged and skipped.
pub fn export_value<T>(json: &mut Map<String, Value>, key: &str, value: &T)
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(value) => {
            json.insert(key.to_owned(), value);
        }
        Err(error) => tracing::warn!(key, %error, "property cannot be exported to JSON"),
    }
}

#[cfg(all(test, feature = "framework-naming"))]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use serde_json::json;

    use super::*;
    use crate::reactive_object;

    reactive_object! {
        pub struct Lamp {
            writable brightness: u8 = 50,
            writable label: String,
            constant model: u16 = 7,
        }
    }

    impl JsonExport for Lamp {
        fn json_write(&self, json: &mut Map<String, Value>) {
            export_value(json, "brightness", &self.brightness());
            export_value(json, "label", self.label());
            export_value(json, "model", &self.model());
        }
    }

    impl JsonImport for Lamp {
        fn json_read(&mut self, json: &Map<String, Value>) {
            import_value(json, "brightness", |v| self.set_brightness(v));
            import_value(json, "label", |v| self.set_label(v));
        }
    }

    #[test]
    fn exports_every_property() {
        let mut lamp = Lamp::new();
        lamp.set_label("desk".to_owned());
        assert_eq!(
            lamp.to_json(),
            json!({ "brightness": 50, "label": "desk", "model": 7 })
        );
    }

    #[test]
    fn import_goes_through_setters() {
        let mut lamp = Lamp::new();
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        lamp.brightness_changed().connect(move |_| counter.set(counter.get() + 1));

        lamp.from_json(&json!({ "brightness": 80, "label": "hall" })).unwrap();

        assert_eq!(lamp.brightness(), 80);
        assert_eq!(lamp.label(), "hall");
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn bad_keys_are_skipped() {
        let mut lamp = Lamp::new();
        lamp.from_json(&json!({ "brightness": "bright", "unrelated": true })).unwrap();
        assert_eq!(lamp.brightness(), 50);
        assert_eq!(lamp.label(), "");
    }

    #[test]
    fn non_objects_are_rejected() {
        let mut lamp = Lamp::new();
        assert!(matches!(lamp.from_json(&json!([1, 2])), Err(Error::NotAnObject)));
    }

    #[test]
    fn save_and_load_round_trip_through_a_file() {
        let path = std::env::temp_dir().join(format!("lamp-{}.json", std::process::id()));

        let mut saved = Lamp::new();
        saved.set_brightness(12);
        saved.json_save(&path).unwrap();

        let mut loaded = Lamp::new();
        loaded.json_load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.brightness(), 12);
    }

    #[test]
    fn loading_a_missing_file_is_an_io_error() {
        let mut lamp = Lamp::new();
        let result = lamp.json_load("/nonexistent/lamp.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
