//! Record shapes shared by the category and product resources.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `null` field decodes like a missing one: to the zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole-valued prices go on the wire without a fractional part (`5000`, not `5000.0`).
fn serialize_price<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// One category entry. Missing or `null` fields decode to zero values so that an update
/// payload replaces the record wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub nama: String,
    #[serde(serialize_with = "serialize_price", deserialize_with = "null_as_default")]
    pub harga: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub stok: i64,
}

impl Category {
    pub fn new(id: i64, nama: impl Into<String>, harga: f64, stok: i64) -> Self {
        Category {
            id,
            nama: nama.into(),
            harga,
            stok,
        }
    }
}

/// Seed collection present at process start.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Indomie Godog", 3500.0, 10),
        Category::new(2, "Vit 1000ml", 3000.0, 40),
        Category::new(3, "kecap", 12000.0, 20),
    ]
}

/// Product row as stored in the `products` table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub nama: String,
    #[serde(serialize_with = "serialize_price", deserialize_with = "null_as_default")]
    pub harga: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub stok: i32,
}
