use tracing::debug;

use crate::catalog::EntityCatalog;
use crate::schema::Entity;

pub struct EntityMatcher<'a> {
    catalog: &'a EntityCatalog,
}

impl<'a> EntityMatcher<'a> {
    pub fn new(catalog: &'a EntityCatalog) -> Self {
        Self { catalog }
    }

    /// Count every catalog surface form in `text`.
    ///
    /// Matching is literal and case-sensitive, counting non-overlapping
    /// occurrences. A form listed under two categories yields two entities.
    /// The result is sorted by descending count; equal counts keep catalog
    /// order.
    pub fn find_entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for category in self.catalog.categories() {
            for form in &category.entities {
                if form.is_empty() {
                    continue;
                }

                let count = text.matches(form.as_str()).count();
                if count > 0 {
                    debug!(entity = %form, category = %category.name, count, "Matched entity");
                    entities.push(Entity {
                        text: form.clone(),
                        category: category.name.clone(),
                        count,
                    });
                }
            }
        }

        // stable sort keeps catalog order for ties
        entities.sort_by(|a, b| b.count.cmp(&a.count));
        entities
    }
}
