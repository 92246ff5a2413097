mod curated_products;
mod identifier_rules;

pub use curated_products::CURATED_PRODUCTS;
pub use identifier_rules::{IdentifierRule, IdentifierRules};
