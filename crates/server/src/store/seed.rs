//! Fixed fallback catalog.
//!
//! Sixteen products across the four categories. The in-memory store starts
//! from this list, the CLI `seed` command inserts it into `SQLite`, and the
//! public catalog read path serves it when the database is unreachable
//! (availability over consistency, for reads only).

use rust_decimal::Decimal;

use adorly_core::{Category, ProductId};

use crate::models::Product;

fn product(
    id: i64,
    name: &str,
    description: &str,
    price_cents: i64,
    image_seed: &str,
    category: Category,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Decimal::new(price_cents, 2),
        image_url: format!("https://picsum.photos/seed/{image_seed}/400/400"),
        category,
    }
}

/// The fixed fallback product list, in catalog order (IDs 1-16).
#[must_use]
pub fn fallback_products() -> Vec<Product> {
    use Category::{Clothes, Electronics, Perfume, Phone};

    vec![
        product(1, "Rose Elegance", "A delicate floral scent with notes of fresh roses.", 8500, "perfume1", Perfume),
        product(2, "Fresh Bloom", "A vibrant and energetic citrus floral fragrance.", 6500, "perfume2", Perfume),
        product(3, "Velvet Night", "Deep, mysterious woody notes for evening wear.", 9500, "perfume3", Perfume),
        product(4, "Citrus Splash", "Refreshing lemon and bergamot summer scent.", 4500, "perfume4", Perfume),
        product(5, "Pink Floral Dress", "Elegant summer dress with a beautiful floral pattern.", 5500, "clothes1", Clothes),
        product(6, "Stylish Denim Jacket", "Classic blue denim with a modern oversized fit.", 7500, "clothes2", Clothes),
        product(7, "Comfy Sweatshirt", "Soft cotton blend sweatshirt in pastel pink.", 4000, "clothes3", Clothes),
        product(8, "Elegant Blouse", "Silk-feel blouse perfect for office or dinner.", 4800, "clothes4", Clothes),
        product(9, "Smartphone Pro", "Latest flagship with triple camera system.", 99900, "phone1", Phone),
        product(10, "Budget Smartphone", "Reliable performance at an accessible price.", 29900, "phone2", Phone),
        product(11, "Gaming Phone", "High refresh rate screen and cooling system.", 79900, "phone3", Phone),
        product(12, "Flip Phone", "Modern foldable technology in a compact form.", 119900, "phone4", Phone),
        product(13, "Wireless Earbuds", "Noise cancelling with 24-hour battery life.", 12900, "elec1", Electronics),
        product(14, "Smartwatch", "Track your fitness and stay connected.", 19900, "elec2", Electronics),
        product(15, "Portable Charger", "20000mAh capacity for multiple charges.", 3500, "elec3", Electronics),
        product(16, "Bluetooth Speaker", "Waterproof with 360-degree sound.", 5900, "elec4", Electronics),
    ]
}
