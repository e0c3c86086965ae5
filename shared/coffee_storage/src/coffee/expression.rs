//! `SET` update expressions folded from an explicit list of assignments

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use common_types::CoffeeChanges;

use super::CoffeeAttribute;

/// A single `SET` clause: the attribute and the value written to it
pub type Assignment = (CoffeeAttribute, AttributeValue);

/// Collects one assignment per field present in `changes`
///
/// Presence is decided by `Option`, so `available: Some(false)` is written like any other value.
#[must_use]
pub fn assignments(changes: &CoffeeChanges) -> Vec<Assignment> {
    let fields = [
        (
            CoffeeAttribute::Name,
            changes.name.clone().map(AttributeValue::S),
        ),
        (
            CoffeeAttribute::Price,
            changes.price.map(|price| AttributeValue::N(price.to_string())),
        ),
        (
            CoffeeAttribute::Available,
            changes.available.map(AttributeValue::Bool),
        ),
    ];

    fields
        .into_iter()
        .filter_map(|(attribute, value)| value.map(|value| (attribute, value)))
        .collect()
}

/// Update expression with its attribute name and value placeholders
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    /// The `SET ...` expression
    pub expression: String,
    /// `#placeholder` to attribute name
    pub names: HashMap<String, String>,
    /// `:placeholder` to value
    pub values: HashMap<String, AttributeValue>,
}

impl UpdateExpression {
    /// Folds assignments into a single `SET` expression
    ///
    /// Every attribute name is aliased so reserved words such as `name` are safe.
    /// Returns `None` when there is nothing to assign.
    #[must_use]
    pub fn from_assignments(assignments: Vec<Assignment>) -> Option<Self> {
        if assignments.is_empty() {
            return None;
        }

        let (clauses, names, values) = assignments.into_iter().fold(
            (Vec::new(), HashMap::new(), HashMap::new()),
            |(mut clauses, mut names, mut values), (attribute, value)| {
                let attribute = attribute.to_string();
                clauses.push(format!("#{attribute} = :{attribute}"));
                names.insert(format!("#{attribute}"), attribute.clone());
                values.insert(format!(":{attribute}"), value);
                (clauses, names, values)
            },
        );

        Some(Self {
            expression: format!("SET {}", clauses.join(", ")),
            names,
            values,
        })
    }
}
