use super::normalizer::normalize_key;
use crate::domain::ProductType;
use std::collections::HashMap;
use std::sync::OnceLock;

static PRODUCT_TYPE_ALIASES: OnceLock<HashMap<String, ProductType>> = OnceLock::new();

/// Resolve a free-text product name to a catalog product type through the
/// synonym table. Consulted once during catalog ingestion; calculations only
/// ever see the typed enum.
pub(crate) fn product_type_for(value: &str) -> Option<ProductType> {
    let normalized = normalize_key(value);
    product_type_aliases().get(normalized.as_str()).copied()
}

fn product_type_aliases() -> &'static HashMap<String, ProductType> {
    PRODUCT_TYPE_ALIASES.get_or_init(|| {
        const ALIASES: &[(&str, ProductType)] = &[
            ("mobile", ProductType::Mobile),
            ("gsm", ProductType::Mobile),
            ("mobile postpaid", ProductType::Mobile),
            ("sim only", ProductType::Mobile),
            ("internet", ProductType::Internet),
            ("fixed internet", ProductType::Internet),
            ("broadband", ProductType::Internet),
            ("dsl", ProductType::Internet),
            ("energy", ProductType::Energy),
            ("electricity", ProductType::Energy),
            ("gas", ProductType::Energy),
            ("tv", ProductType::Tv),
            ("television", ProductType::Tv),
            ("digital tv", ProductType::Tv),
            ("boiler", ProductType::Boiler),
            ("boiler maintenance", ProductType::Boiler),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len());
        for (alias, product_type) in ALIASES {
            map.insert(normalize_key(alias), *product_type);
        }
        map
    })
}
