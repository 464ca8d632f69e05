use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categoría de ingrediente según el backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientType {
    Bun,
    Sauce,
    Main,
}

impl IngredientType {
    pub const ALL: [IngredientType; 3] = [Self::Bun, Self::Sauce, Self::Main];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bun => "bun",
            Self::Sauce => "sauce",
            Self::Main => "main",
        }
    }
}

/// Ingrediente del catálogo (inmutable, viene del servidor)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: IngredientType,
    #[serde(default)]
    pub proteins: u32,
    #[serde(default)]
    pub fat: u32,
    #[serde(default)]
    pub carbohydrates: u32,
    #[serde(default)]
    pub calories: u32,
    pub price: u32,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_large: String,
    #[serde(default)]
    pub image_mobile: String,
}

impl Ingredient {
    pub fn is_bun(&self) -> bool {
        self.kind == IngredientType::Bun
    }
}

/// Ingrediente colocado en el constructor.
///
/// `instance_id` distingue dos copias del mismo ingrediente del catálogo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ConstructorIngredient {
    #[serde(flatten)]
    pub ingredient: Ingredient,
    pub instance_id: String,
}

impl ConstructorIngredient {
    /// Asigna un id de instancia nuevo (UUID v4)
    pub fn new(ingredient: Ingredient) -> Self {
        Self {
            ingredient,
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn catalog_id(&self) -> &str {
        &self.ingredient.id
    }

    pub fn price(&self) -> u32 {
        self.ingredient.price
    }
}
