//! # Glowmart Demo
//!
//! Console walkthrough of the storefront model.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse Brand ──► build Categories ──► build Products ──► print details │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LoyalCustomer ──► apply 15% discount ──► Delivery ──► Order ──► Pay   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation and parse errors from the core propagate to `main`, which
//! prints a single-line `Invalid input: <message>` diagnostic on stderr.
//! Anything outside that family would be a programming error and panics.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use glowmart_core::{
    Brand, Category, Delivery, Discountable, LoyalCustomer, Money, Order, Payment, Product,
    StoreError, StoreItem,
};

fn main() {
    // Initialize tracing - the payment notice arrives through this subscriber
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Invalid input: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), StoreError> {
    let brand: Brand = "Golden Apple, Kazakhstan, 2015, Popular online beauty store.".parse()?;

    let womens_shampoo = Product::new(
        "Volume Shampoo",
        Money::from_major_minor(3500, 0),
        &brand,
        Category::WomensHairCare {
            hair_type: "Dry".into(),
        },
        "For thick healthy hair",
        50,
    )?;
    let mut womens_cream = Product::new(
        "Hydrating Cream",
        Money::from_major_minor(4500, 0),
        &brand,
        Category::WomensFaceCare {
            skin_type: "Sensitive".into(),
        },
        "Nourishing face cream",
        30,
    )?;
    let mens_shampoo = Product::new(
        "Menthol Fresh",
        Money::from_major_minor(3000, 0),
        &brand,
        Category::MensHairCare {
            scalp_type: "Oily".into(),
        },
        "Cool and refreshing shampoo",
        40,
    )?;
    let mens_facewash = Product::new(
        "Beard & Skin Wash",
        Money::from_major_minor(4000, 0),
        &brand,
        Category::MensFaceCare {
            beard_friendly: true,
        },
        "Cleanses and nourishes",
        35,
    )?;
    let extra_womens_shampoo = Product::new(
        "Keratin Repair Shampoo",
        Money::from_major_minor(4800, 0),
        &brand,
        Category::WomensHairCare {
            hair_type: "Normal".into(),
        },
        "Repairs damaged hair",
        60,
    )?;
    let mens_facecream = Product::new(
        "Men's Face Cream",
        Money::from_major_minor(4200, 0),
        &brand,
        Category::MensFaceCare {
            beard_friendly: false,
        },
        "Hydrating cream for men",
        25,
    )?;

    for product in [
        &womens_shampoo,
        &womens_cream,
        &mens_shampoo,
        &mens_facewash,
        &extra_womens_shampoo,
        &mens_facecream,
    ] {
        println!("{}", product.get_details());
    }

    let customer = LoyalCustomer::new("Aizhan", "aizhan@example.com", 120);
    println!("{}", customer.get_customer_info());

    // 15% off the cream before it goes into the order
    womens_cream.apply_discount(1500)?;

    let delivery = Delivery::new(
        "Courier",
        "Almaty, Kazakhstan",
        Money::from_major_minor(500, 0),
    );
    println!("{}", delivery.get_delivery_info());

    let order = Order::new(&customer, &womens_cream, 2, &delivery);
    println!("{}", order.get_order_summary());

    let payment = Payment::new(&order, "Card");
    payment.process_payment();

    Ok(())
}
