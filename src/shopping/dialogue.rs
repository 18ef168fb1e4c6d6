//! Dialogue script for buying a product
//!
//! Six lines alternate between customer and seller: ask for the product,
//! availability (or a substitute), quantity, total, payment, change.

use super::catalog::{substitute_for, Product};

/// Largest quantity the customer may ask for
pub const MAX_QUANTITY: u32 = 5;

/// Banknote step the customer pays in
const PAYMENT_STEP: u32 = 50;

/// "N pieces" with the noun agreeing with the count, indexed by quantity
const PIECES: [&str; (MAX_QUANTITY + 1) as usize] = [
    "",
    "одну́ шту́ку",
    "две шту́ки",
    "три шту́ки",
    "четы́ре шту́ки",
    "пять штук",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    Customer,
    Seller,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::Customer => "Customer",
            Speaker::Seller => "Seller",
        }
    }
}

/// One line of the script, in Russian with an English gloss
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogueLine {
    pub speaker: Speaker,
    pub ru: String,
    pub en: String,
}

impl DialogueLine {
    fn new(speaker: Speaker, ru: String, en: String) -> Self {
        DialogueLine { speaker, ru, en }
    }
}

/// Amounts settled at the till
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bill {
    pub total: u32,
    pub payment: u32,
    pub change: u32,
}

impl Bill {
    pub fn new(price: u32, quantity: u32) -> Self {
        let total = price * quantity;
        let payment = total.div_ceil(PAYMENT_STEP).max(1) * PAYMENT_STEP;
        Bill {
            total,
            payment,
            change: payment - total,
        }
    }
}

/// Product actually sold: the requested one, or the substitute when it is out
pub fn sold_product(requested: &Product) -> &Product {
    if requested.available {
        requested
    } else {
        substitute_for(requested).unwrap_or(requested)
    }
}

/// Build the full script for `product` and `quantity` (clamped to 1..=5)
pub fn script(product: &Product, quantity: u32) -> Vec<DialogueLine> {
    let quantity = quantity.clamp(1, MAX_QUANTITY);
    let sold = sold_product(product);
    let bill = Bill::new(sold.price, quantity);

    let availability = if product.available {
        DialogueLine::new(
            Speaker::Seller,
            "Да, есть.".to_string(),
            "Yes, we have them.".to_string(),
        )
    } else {
        DialogueLine::new(
            Speaker::Seller,
            format!("Извините, нет, но у нас есть {}.", sold.name_ru),
            format!("Sorry, we're out, but we have {}.", sold.name_en),
        )
    };

    vec![
        DialogueLine::new(
            Speaker::Customer,
            format!("У вас есть {}?", product.name_ru),
            format!("Do you have {}?", product.name_en),
        ),
        availability,
        DialogueLine::new(
            Speaker::Customer,
            format!("Дайте мне {}, пожалуйста.", PIECES[quantity as usize]),
            format!("Please give me {}.", quantity),
        ),
        DialogueLine::new(
            Speaker::Seller,
            format!("Это всё? Это бу́дет {} рубле́й.", bill.total),
            format!("Anything else? That'll be {} rubles.", bill.total),
        ),
        DialogueLine::new(
            Speaker::Customer,
            format!("Вот {} рубле́й.", bill.payment),
            format!("Here are {} rubles.", bill.payment),
        ),
        DialogueLine::new(
            Speaker::Seller,
            format!("Ва́ша сда́ча {} рубле́й. Спаси́бо!", bill.change),
            format!("Your change is {} rubles. Thanks!", bill.change),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopping::catalog::CATALOG;

    #[test]
    fn test_available_product_script() {
        let apples = CATALOG[0];
        let lines = script(&apples, 1);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].ru, "У вас есть я́блоки?");
        assert_eq!(lines[1].ru, "Да, есть.");
        assert_eq!(lines[2].ru, "Дайте мне одну́ шту́ку, пожалуйста.");
        assert_eq!(lines[3].ru, "Это всё? Это бу́дет 35 рубле́й.");
        assert_eq!(lines[4].ru, "Вот 50 рубле́й.");
        assert_eq!(lines[5].ru, "Ва́ша сда́ча 15 рубле́й. Спаси́бо!");
    }

    #[test]
    fn test_speakers_alternate() {
        let lines = script(&CATALOG[2], 2);
        for (i, line) in lines.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Speaker::Customer
            } else {
                Speaker::Seller
            };
            assert_eq!(line.speaker, expected);
        }
    }

    #[test]
    fn test_unavailable_product_offers_substitute_and_bills_it() {
        let oranges = CATALOG[3];
        let lines = script(&oranges, 2);
        assert_eq!(lines[1].ru, "Извините, нет, но у нас есть я́блоки.");
        assert_eq!(lines[1].en, "Sorry, we're out, but we have apples.");
        assert_eq!(lines[3].ru, "Это всё? Это бу́дет 70 рубле́й.");
    }

    #[test]
    fn test_change_is_never_negative() {
        for product in CATALOG.iter() {
            for quantity in 1..=MAX_QUANTITY {
                let bill = Bill::new(sold_product(product).price, quantity);
                assert!(bill.payment >= bill.total);
                assert!(bill.change < PAYMENT_STEP);
                assert_eq!(bill.payment % PAYMENT_STEP, 0);
            }
        }
    }

    #[test]
    fn test_quantity_is_clamped() {
        let lines = script(&CATALOG[5], 9);
        assert_eq!(lines[2].en, "Please give me 5.");
        let lines = script(&CATALOG[5], 0);
        assert_eq!(lines[2].en, "Please give me 1.");
    }

    #[test]
    fn test_exact_payment_gives_zero_change() {
        assert_eq!(
            Bill::new(25, 2),
            Bill {
                total: 50,
                payment: 50,
                change: 0
            }
        );
    }
}
