//! # Catalog Module
//!
//! Brands, categories and products: everything the storefront sells.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Catalog Types                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Brand       │   │    Category     │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (ro)      │   │  tagged enum,   │   │  name           │       │
//! │  │  country (ro)   │   │  7 variants,    │   │  price (Money)  │       │
//! │  │  year (rw)      │   │  pure describe  │   │  brand snapshot │       │
//! │  │  history (ro)   │   └─────────────────┘   │  category       │       │
//! │  └─────────────────┘                         │  stock (priv)   │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Traits: StoreItem (get_details / calculate_price)                     │
//! │          Discountable (apply_discount over an owned price)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Product` owns clones of its `Brand` and `Category` rather than shared
//! references: once built, a product's detail line cannot be changed out
//! from under it by edits to some registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, StoreError, ValidationError};
use crate::money::Money;
use crate::validation::{validate_brand_country, validate_brand_name, validate_discount_bps, validate_price};
use crate::BRAND_FIELD_COUNT;

// =============================================================================
// Store Traits
// =============================================================================

/// Anything the store can put on a shelf.
///
/// Both operations are pure: they read the item's own state and nothing else.
pub trait StoreItem {
    /// Returns a formatted, human-readable detail line for the item.
    fn get_details(&self) -> String;

    /// Returns the current selling price (post any applied discounts).
    fn calculate_price(&self) -> Money;
}

/// Capability to take a percentage discount against an owned price.
///
/// The implementor must OWN the price being discounted (`price_mut`). This
/// is deliberate: a discount capability that assumes a price field on an
/// arbitrary receiver is a latent bug, so only priced types can opt in.
pub trait Discountable {
    /// Mutable access to the price the discount operates on.
    fn price_mut(&mut self) -> &mut Money;

    /// Applies a discount in basis points (1500 = 15%) to the stored price.
    ///
    /// Fails with [`ValidationError::OutOfRange`] unless `0 < bps < 10000`,
    /// leaving the price unchanged. On success the stored price is reduced
    /// by `price × bps / 10000` (rounded) and the new price is returned.
    ///
    /// Repeated calls compound: each discount applies to the CURRENT,
    /// already-discounted price, not the original. Positivity is not
    /// re-validated here, so a long discount chain can drift toward zero.
    fn apply_discount(&mut self, bps: u32) -> Result<Money, ValidationError> {
        validate_discount_bps(bps)?;

        let price = self.price_mut();
        let discounted = *price - price.discount_amount(bps);
        *price = discounted;
        Ok(discounted)
    }
}

// =============================================================================
// Brand
// =============================================================================

/// Manufacturer metadata attached to every product.
///
/// Name, country and history are read-only after construction; the
/// establishment year is the one field that stays editable (brands get
/// re-dated after acquisitions more often than they get renamed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    name: String,
    country: String,
    /// Year the brand was established. Mutable by design.
    pub year_established: i32,
    history: String,
}

impl Brand {
    /// Creates a brand, validating that name and country are non-empty.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::catalog::Brand;
    ///
    /// let brand = Brand::new("Golden Apple", "Kazakhstan", 2015, "Beauty store.").unwrap();
    /// assert_eq!(brand.name(), "Golden Apple");
    ///
    /// assert!(Brand::new("", "Kazakhstan", 2015, "").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        year_established: i32,
        history: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let country = country.into();

        validate_brand_name(&name)?;
        validate_brand_country(&country)?;

        Ok(Brand {
            name,
            country,
            year_established,
            history: history.into(),
        })
    }

    /// The brand name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country of origin.
    #[inline]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Free-form history blurb.
    #[inline]
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Parses a brand from the delimited mini-format
    /// `"name, country, year, history"`.
    ///
    /// ## Known Limitation
    /// The format splits on `", "` with no quoting or escaping. A
    /// comma-space inside the name or history field changes the field count
    /// and the parse fails (or, worse, shifts fields). This is documented
    /// behavior, not silently corrected.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::catalog::Brand;
    ///
    /// let brand = Brand::from_delimited_str(
    ///     "Golden Apple, Kazakhstan, 2015, Popular online beauty store.",
    /// ).unwrap();
    /// assert_eq!(brand.country(), "Kazakhstan");
    /// assert_eq!(brand.year_established, 2015);
    /// ```
    pub fn from_delimited_str(text: &str) -> Result<Self, StoreError> {
        let fields: Vec<&str> = text.split(", ").collect();
        if fields.len() != BRAND_FIELD_COUNT {
            return Err(ParseError::FieldCount {
                expected: BRAND_FIELD_COUNT,
                found: fields.len(),
            }
            .into());
        }

        let year: i32 = fields[2].parse().map_err(|_| ParseError::InvalidYear {
            value: fields[2].to_string(),
        })?;

        Ok(Brand::new(fields[0], fields[1], year, fields[3])?)
    }
}

impl FromStr for Brand {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brand::from_delimited_str(s)
    }
}

// =============================================================================
// Category
// =============================================================================

/// Product category descriptor.
///
/// One tagged enum instead of an inheritance chain: the three broad
/// categories carry no extra data, the four leaf categories each carry
/// exactly one attribute. `describe` is a pure function over the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    WomensCare,
    MensCare,
    Cosmetics,
    WomensHairCare { hair_type: String },
    WomensFaceCare { skin_type: String },
    MensHairCare { scalp_type: String },
    MensFaceCare { beard_friendly: bool },
}

impl Category {
    /// The display name rendered in detail lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::WomensCare => "Women's Care",
            Category::MensCare => "Men's Care",
            Category::Cosmetics => "Cosmetics",
            Category::WomensHairCare { .. } => "Women's Hair Care",
            Category::WomensFaceCare { .. } => "Women's Face Care",
            Category::MensHairCare { .. } => "Men's Hair Care",
            Category::MensFaceCare { .. } => "Men's Face Care",
        }
    }

    /// Renders the category line: `Category: <name>` plus the variant's
    /// attribute, if any.
    ///
    /// ## Example
    /// ```rust
    /// use glowmart_core::catalog::Category;
    ///
    /// let cat = Category::WomensHairCare { hair_type: "Dry".into() };
    /// assert_eq!(cat.describe(), "Category: Women's Hair Care, Hair Type: Dry");
    /// ```
    pub fn describe(&self) -> String {
        let base = format!("Category: {}", self.display_name());
        match self {
            Category::WomensCare | Category::MensCare | Category::Cosmetics => base,
            Category::WomensHairCare { hair_type } => {
                format!("{base}, Hair Type: {hair_type}")
            }
            Category::WomensFaceCare { skin_type } => {
                format!("{base}, Skin Type: {skin_type}")
            }
            Category::MensHairCare { scalp_type } => {
                format!("{base}, Scalp Type: {scalp_type}")
            }
            Category::MensFaceCare { beard_friendly } => {
                format!("{base}, Beard Friendly: {beard_friendly}")
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item: brand + category + price + stock.
///
/// The price is private and mutated only through
/// [`Discountable::apply_discount`]; stock is private with a read accessor
/// (no business rule consumes it yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    price: Money,
    pub brand: Brand,
    pub category: Category,
    pub description: String,
    stock_quantity: i64,
}

impl Product {
    /// Creates a product. Fails when the price is not strictly positive;
    /// no other field is validated.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        brand: &Brand,
        category: Category,
        description: impl Into<String>,
        stock_quantity: i64,
    ) -> Result<Self, ValidationError> {
        validate_price(price)?;

        Ok(Product {
            name: name.into(),
            price,
            brand: brand.clone(),
            category,
            description: description.into(),
            stock_quantity,
        })
    }

    /// Current price. Same value as [`StoreItem::calculate_price`].
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units on hand.
    #[inline]
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }
}

impl StoreItem for Product {
    fn get_details(&self) -> String {
        format!(
            "Product: {}, Price: {}, Brand: {}, {}, Description: {}",
            self.name,
            self.price,
            self.brand.name(),
            self.category.describe(),
            self.description
        )
    }

    fn calculate_price(&self) -> Money {
        self.price
    }
}

impl Discountable for Product {
    fn price_mut(&mut self) -> &mut Money {
        &mut self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn golden_apple() -> Brand {
        Brand::new("Golden Apple", "Kazakhstan", 2015, "Popular online beauty store.").unwrap()
    }

    #[test]
    fn test_brand_construction_validates_name_and_country() {
        assert!(matches!(
            Brand::new("", "Kazakhstan", 2015, "x"),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Brand::new("Golden Apple", "  ", 2015, "x"),
            Err(ValidationError::Required { .. })
        ));

        let brand = golden_apple();
        assert_eq!(brand.name(), "Golden Apple");
        assert_eq!(brand.country(), "Kazakhstan");
        assert_eq!(brand.year_established, 2015);
        assert_eq!(brand.history(), "Popular online beauty store.");
    }

    #[test]
    fn test_brand_year_is_mutable() {
        let mut brand = golden_apple();
        brand.year_established = 2018;
        assert_eq!(brand.year_established, 2018);
    }

    #[test]
    fn test_brand_from_delimited_str() {
        let brand =
            Brand::from_delimited_str("Golden Apple, Kazakhstan, 2015, Popular online beauty store.")
                .unwrap();
        assert_eq!(brand.name(), "Golden Apple");
        assert_eq!(brand.country(), "Kazakhstan");
        assert_eq!(brand.year_established, 2015);
        assert_eq!(brand.history(), "Popular online beauty store.");
    }

    #[test]
    fn test_brand_from_str_trait() {
        let brand: Brand = "Lumi, Korea, 2019, Skincare lab.".parse().unwrap();
        assert_eq!(brand.name(), "Lumi");
        assert_eq!(brand.year_established, 2019);
    }

    #[test]
    fn test_brand_parse_field_count_error() {
        let err = Brand::from_delimited_str("Golden Apple, Kazakhstan, 2015").unwrap_err();
        assert_eq!(
            err,
            StoreError::Parse(ParseError::FieldCount {
                expected: 4,
                found: 3
            })
        );

        // Extra comma-space inside history shifts the field count: the
        // documented limitation of the format.
        let err = Brand::from_delimited_str("Golden Apple, Kazakhstan, 2015, a, b").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Parse(ParseError::FieldCount { found: 5, .. })
        ));
    }

    #[test]
    fn test_brand_parse_invalid_year_error() {
        let err = Brand::from_delimited_str("Golden Apple, Kazakhstan, MMXV, history").unwrap_err();
        assert_eq!(
            err,
            StoreError::Parse(ParseError::InvalidYear {
                value: "MMXV".to_string()
            })
        );
    }

    #[test]
    fn test_category_describe_base_variants() {
        assert_eq!(Category::WomensCare.describe(), "Category: Women's Care");
        assert_eq!(Category::MensCare.describe(), "Category: Men's Care");
        assert_eq!(Category::Cosmetics.describe(), "Category: Cosmetics");
    }

    #[test]
    fn test_category_describe_leaf_variants() {
        let cat = Category::WomensHairCare {
            hair_type: "Dry".into(),
        };
        assert_eq!(cat.describe(), "Category: Women's Hair Care, Hair Type: Dry");

        let cat = Category::WomensFaceCare {
            skin_type: "Sensitive".into(),
        };
        assert_eq!(
            cat.describe(),
            "Category: Women's Face Care, Skin Type: Sensitive"
        );

        let cat = Category::MensHairCare {
            scalp_type: "Oily".into(),
        };
        assert_eq!(cat.describe(), "Category: Men's Hair Care, Scalp Type: Oily");

        let cat = Category::MensFaceCare {
            beard_friendly: true,
        };
        assert_eq!(
            cat.describe(),
            "Category: Men's Face Care, Beard Friendly: true"
        );
    }

    #[test]
    fn test_category_display_matches_describe() {
        let cat = Category::MensFaceCare {
            beard_friendly: false,
        };
        assert_eq!(cat.to_string(), cat.describe());
    }

    #[test]
    fn test_product_construction_rejects_non_positive_price() {
        let brand = golden_apple();
        let cat = Category::Cosmetics;

        let err = Product::new("Lipstick", Money::zero(), &brand, cat.clone(), "Red", 10)
            .unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));

        let err = Product::new("Lipstick", Money::from_cents(-1), &brand, cat, "Red", 10)
            .unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));
    }

    #[test]
    fn test_product_calculate_price_before_discount() {
        let brand = golden_apple();
        let price = Money::from_major_minor(3500, 0);
        let product = Product::new(
            "Volume Shampoo",
            price,
            &brand,
            Category::WomensHairCare {
                hair_type: "Dry".into(),
            },
            "For thick healthy hair",
            50,
        )
        .unwrap();

        assert_eq!(product.calculate_price(), price);
        assert_eq!(product.price(), price);
        assert_eq!(product.stock_quantity(), 50);
    }

    #[test]
    fn test_product_get_details() {
        let brand = golden_apple();
        let product = Product::new(
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
            product.get_details(),
            "Product: Volume Shampoo, Price: ₸3500.00, Brand: Golden Apple, \
             Category: Women's Hair Care, Hair Type: Dry, Description: For thick healthy hair"
        );
    }

    #[test]
    fn test_apply_discount_mutates_persistently() {
        let brand = golden_apple();
        let mut product = Product::new(
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

        let new_price = product.apply_discount(1500).unwrap(); // 15%
        assert_eq!(new_price, Money::from_major_minor(3825, 0));
        // Discount is persistent: subsequent reads see the reduced price.
        assert_eq!(product.calculate_price(), Money::from_major_minor(3825, 0));
    }

    #[test]
    fn test_apply_discount_compounds_against_current_price() {
        let brand = golden_apple();
        let mut product = Product::new(
            "Serum",
            Money::from_cents(10000),
            &brand,
            Category::Cosmetics,
            "Vitamin C",
            5,
        )
        .unwrap();

        // 10% then 10% again: 10000 → 9000 → 8100, not 8000.
        product.apply_discount(1000).unwrap();
        assert_eq!(product.calculate_price().cents(), 9000);
        product.apply_discount(1000).unwrap();
        assert_eq!(product.calculate_price().cents(), 8100);
    }

    #[test]
    fn test_apply_discount_out_of_range_leaves_price_unchanged() {
        let brand = golden_apple();
        let mut product = Product::new(
            "Toner",
            Money::from_cents(2000),
            &brand,
            Category::Cosmetics,
            "Gentle",
            5,
        )
        .unwrap();

        assert!(product.apply_discount(0).is_err());
        assert!(product.apply_discount(10000).is_err());
        assert!(product.apply_discount(15000).is_err());
        assert_eq!(product.calculate_price().cents(), 2000);
    }

    #[test]
    fn test_product_serde_round_trip() {
        let brand = golden_apple();
        let product = Product::new(
            "Menthol Fresh",
            Money::from_major_minor(3000, 0),
            &brand,
            Category::MensHairCare {
                scalp_type: "Oily".into(),
            },
            "Cool and refreshing shampoo",
            40,
        )
        .unwrap();

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
