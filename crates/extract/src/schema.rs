use serde::{Deserialize, Serialize};

/// A catalog surface form found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    #[serde(rename = "type")]
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Relation {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    pub fn key(&self) -> TripleKey {
        TripleKey::new(&self.subject, &self.predicate, &self.object)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripleKind {
    Relation,
    EntityType,
}

impl TripleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripleKind::Relation => "relation",
            TripleKind::EntityType => "entity_type",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(rename = "type")]
    pub kind: TripleKind,
}

impl Triple {
    pub fn relation(relation: &Relation) -> Self {
        Self {
            subject: relation.subject.clone(),
            predicate: relation.predicate.clone(),
            object: relation.object.clone(),
            kind: TripleKind::Relation,
        }
    }

    pub fn entity_type(entity: &Entity, predicate: &str) -> Self {
        Self {
            subject: entity.text.clone(),
            predicate: predicate.to_string(),
            object: entity.category.clone(),
            kind: TripleKind::EntityType,
        }
    }

    pub fn key(&self) -> TripleKey {
        TripleKey::new(&self.subject, &self.predicate, &self.object)
    }

    pub fn matches(&self, subject: &str, predicate: &str, object: &str) -> bool {
        self.subject == subject && self.predicate == predicate && self.object == object
    }

    /// True when the focus value is the subject or the object.
    pub fn touches(&self, focus: &str) -> bool {
        self.subject == focus || self.object == focus
    }
}

/// Identity of a triple; the kind does not take part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripleKey {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl TripleKey {
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub entities: Vec<Entity>,
    pub relations: Vec<Relation>,
}
