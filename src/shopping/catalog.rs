//! Product catalog

/// A product on the shop shelf
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_ru: &'static str,
    /// Price in rubles per piece
    pub price: u32,
    pub available: bool,
}

pub const CATALOG: [Product; 6] = [
    Product {
        id: "1",
        name_en: "apples",
        name_ru: "я́блоки",
        price: 35,
        available: true,
    },
    Product {
        id: "2",
        name_en: "bananas",
        name_ru: "бана́ны",
        price: 45,
        available: true,
    },
    Product {
        id: "3",
        name_en: "pears",
        name_ru: "гру́ши",
        price: 40,
        available: true,
    },
    Product {
        id: "4",
        name_en: "oranges",
        name_ru: "апельси́ны",
        price: 55,
        available: false,
    },
    Product {
        id: "5",
        name_en: "tomatoes",
        name_ru: "помидо́ры",
        price: 30,
        available: true,
    },
    Product {
        id: "6",
        name_en: "bread",
        name_ru: "хлеб",
        price: 25,
        available: true,
    },
];

/// First available product other than `product`, offered as a substitute
pub fn substitute_for(product: &Product) -> Option<&'static Product> {
    CATALOG
        .iter()
        .find(|candidate| candidate.available && candidate.id != product.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = CATALOG.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_substitute_skips_self_and_unavailable() {
        let oranges = CATALOG[3];
        assert!(!oranges.available);
        assert_eq!(substitute_for(&oranges).map(|p| p.name_en), Some("apples"));
        assert_eq!(substitute_for(&CATALOG[0]).map(|p| p.name_en), Some("bananas"));
    }
}
