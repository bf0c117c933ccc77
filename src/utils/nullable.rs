pub mod deserializer {
    use serde::{Deserialize, Deserializer};

    // JSON null binds to the field's zero value, same as an absent key.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
        where D: Deserializer<'de>,
              T: Default + Deserialize<'de> {
        let value: Option<T> = Deserialize::deserialize(deserializer)?;
        Ok(value.unwrap_or_default())
    }
}
