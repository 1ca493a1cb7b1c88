use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    pub entities: Vec<String>,
}

/// Known surface forms grouped by category.
///
/// Categories and the forms inside them keep their insertion order; the
/// matcher walks them in that order, which fixes the tie-break between
/// entities with equal counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCatalog {
    categories: Vec<CatalogCategory>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add surface forms to a category, creating it if needed. Forms already
    /// present in the category are ignored.
    pub fn add_category<I, S>(&mut self, name: &str, forms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = match self.categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.categories.push(CatalogCategory {
                    name: name.to_string(),
                    entities: Vec::new(),
                });
                self.categories.len() - 1
            }
        };

        let category = &mut self.categories[idx];
        for form in forms {
            let form = form.into();
            if !category.entities.contains(&form) {
                category.entities.push(form);
            }
        }
    }

    pub fn with_category<I, S>(mut self, name: &str, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_category(name, forms);
        self
    }

    pub fn categories(&self) -> &[CatalogCategory] {
        &self.categories
    }

    pub fn surface_forms(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.entities.as_slice())
    }

    /// Every category listing this surface form, in catalog order.
    pub fn categories_of(&self, form: &str) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.entities.iter().any(|e| e == form))
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
