//! End-to-end storefront flow: the full brand → catalog → customer →
//! discount → order → payment walkthrough, asserting the numbers the demo
//! prints.

use glowmart_core::{
    Brand, Category, Delivery, Discountable, LoyalCustomer, Money, Order, Payment, Person,
    Product, StoreItem, DEFAULT_TAX_RATE,
};

fn build_brand() -> Brand {
    Brand::from_delimited_str("Golden Apple, Kazakhstan, 2015, Popular online beauty store.")
        .expect("brand string is well-formed")
}

#[test]
fn full_purchase_flow_totals_8150() {
    let brand = build_brand();
    assert_eq!(brand.name(), "Golden Apple");
    assert_eq!(brand.country(), "Kazakhstan");
    assert_eq!(brand.year_established, 2015);
    assert_eq!(brand.history(), "Popular online beauty store.");

    let mut cream = Product::new(
        "Hydrating Cream",
        Money::from_major_minor(4500, 0),
        &brand,
        Category::WomensFaceCare {
            skin_type: "Sensitive".into(),
        },
        "Nourishing face cream",
        30,
    )
    .unwrap();

    let customer = LoyalCustomer::new("Aizhan", "aizhan@example.com", 120);
    assert_eq!(
        customer.get_customer_info(),
        "Loyal Customer: Aizhan, Email: aizhan@example.com, Points: 120"
    );
    assert_eq!(
        customer.get_person_info(),
        "Name: Aizhan, Email: aizhan@example.com"
    );

    // 15% off 4500 → 3825
    let discounted = cream.apply_discount(1500).unwrap();
    assert_eq!(discounted, Money::from_major_minor(3825, 0));

    let delivery = Delivery::new(
        "Courier",
        "Almaty, Kazakhstan",
        Money::from_major_minor(500, 0),
    );
    let order = Order::new(&customer, &cream, 2, &delivery);

    // 2 × 3825 + 500 = 8150
    assert_eq!(order.total(), Money::from_major_minor(8150, 0));
    assert_eq!(
        order.get_order_summary(),
        "Order for Aizhan: Hydrating Cream x 2, Total with delivery: ₸8150.00"
    );

    // Payment reports the same total for the same customer.
    let payment = Payment::new(&order, "Card");
    assert_eq!(payment.total(), Money::from_major_minor(8150, 0));
    payment.process_payment();
}

#[test]
fn catalog_detail_lines_match_expected_format() {
    let brand = build_brand();

    let shampoo = Product::new(
        "Volume Shampoo",
        Money::from_major_minor(3500, 0),
        &brand,
        Category::WomensHairCare {
            hair_type: "Dry".into(),
        },
        "For thick healthy hair",
        50,
    )
    .unwrap();
    assert_eq!(
        shampoo.get_details(),
        "Product: Volume Shampoo, Price: ₸3500.00, Brand: Golden Apple, \
         Category: Women's Hair Care, Hair Type: Dry, Description: For thick healthy hair"
    );

    let facewash = Product::new(
        "Beard & Skin Wash",
        Money::from_major_minor(4000, 0),
        &brand,
        Category::MensFaceCare {
            beard_friendly: true,
        },
        "Cleanses and nourishes",
        35,
    )
    .unwrap();
    assert_eq!(
        facewash.get_details(),
        "Product: Beard & Skin Wash, Price: ₸4000.00, Brand: Golden Apple, \
         Category: Men's Face Care, Beard Friendly: true, Description: Cleanses and nourishes"
    );
}

#[test]
fn repeated_discounts_compound_against_current_price() {
    let brand = build_brand();
    let mut serum = Product::new(
        "Keratin Repair Shampoo",
        Money::from_cents(480_000),
        &brand,
        Category::WomensHairCare {
            hair_type: "Normal".into(),
        },
        "Repairs damaged hair",
        60,
    )
    .unwrap();

    // 25% then 20%: 480000 → 360000 → 288000.
    // Cumulative-against-original (45%) would give 264000; compounding is
    // the specified behavior.
    serum.apply_discount(2500).unwrap();
    assert_eq!(serum.calculate_price().cents(), 360_000);
    serum.apply_discount(2000).unwrap();
    assert_eq!(serum.calculate_price().cents(), 288_000);

    // Near-zero discount: 1 bps of 288000 = 28.8 → rounds to 29.
    serum.apply_discount(1).unwrap();
    assert_eq!(serum.calculate_price().cents(), 287_971);
}

#[test]
fn tax_utility_is_standalone_and_pure() {
    let brand = build_brand();
    let product = Product::new(
        "Men's Face Cream",
        Money::from_major_minor(4200, 0),
        &brand,
        Category::MensFaceCare {
            beard_friendly: false,
        },
        "Hydrating cream for men",
        25,
    )
    .unwrap();

    // with_tax computes price × 1.10 without touching the stored price.
    let taxed = product.calculate_price().with_tax(DEFAULT_TAX_RATE);
    assert_eq!(taxed, Money::from_major_minor(4620, 0));
    assert_eq!(product.calculate_price(), Money::from_major_minor(4200, 0));
}
