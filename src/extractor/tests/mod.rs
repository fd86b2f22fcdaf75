use std::fs;

use crate::extractor::{NOT_FOUND, extract};
use crate::fetcher::ContentFragment;

fn fixture(name: &str) -> ContentFragment {
    let html = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    ContentFragment::new(html)
}

#[test]
fn test_extract_full_product() {
    let product = extract(&fixture("product.html"));

    assert_eq!(product.name, "Air Max Plus Triple Black");
    assert_eq!(product.production_date, "04/2023");
    assert_eq!(product.country_manufacture, "Vietnam");
    assert_eq!(product.color, "Black/Black-Black");
    assert_eq!(
        product.image_url.as_deref(),
        Some("https://tnuniverse.com/wp-content/uploads/2023/04/BQ4629-001-600x600.jpg")
    );
}

#[test]
fn test_extract_sparse_product() {
    let product = extract(&fixture("sparse.html"));

    assert_eq!(product.name, "Air Max Plus");
    assert_eq!(product.production_date, NOT_FOUND);
    assert_eq!(product.country_manufacture, NOT_FOUND);
    assert_eq!(product.color, NOT_FOUND);
    assert_eq!(product.image_url, None);
}

#[test]
fn test_colorway_row_lookup() {
    let fragment = ContentFragment::new(
        r#"<table class="shop_attributes">
             <tr><th>Colorway</th><td><a href="/colorway/black-white">Black/White</a></td></tr>
           </table>"#,
    );
    let product = extract(&fragment);

    assert_eq!(product.color, "Black/White");
    assert_eq!(product.country_manufacture, NOT_FOUND);
}

#[test]
fn test_label_match_is_exact_and_case_sensitive() {
    let fragment = ContentFragment::new(
        r#"<table class="shop_attributes">
             <tr><th>colorway</th><td><a href="/x">Black/White</a></td></tr>
             <tr><th>Colorway extended</th><td><a href="/y">Blue/White</a></td></tr>
           </table>"#,
    );
    let product = extract(&fragment);

    assert_eq!(product.color, NOT_FOUND);
}

#[test]
fn test_header_whitespace_is_trimmed() {
    let fragment = ContentFragment::new(
        r#"<table class="shop_attributes">
             <tr><th>
               Colorway
             </th><td><a href="/x">Black/White</a></td></tr>
           </table>"#,
    );
    let product = extract(&fragment);

    assert_eq!(product.color, "Black/White");
}

#[test]
fn test_first_matching_row_wins() {
    let fragment = ContentFragment::new(
        r#"<table class="shop_attributes">
             <tr><th>Colorway</th><td><a href="/x">Black/White</a></td></tr>
             <tr><th>Colorway</th><td><a href="/y">Blue/White</a></td></tr>
           </table>"#,
    );
    let product = extract(&fragment);

    assert_eq!(product.color, "Black/White");
}

#[test]
fn test_anchorless_data_cell_degrades_to_sentinel() {
    let fragment = ContentFragment::new(
        r#"<table class="shop_attributes">
             <tr><th>Colorway</th><td>Black/White</td></tr>
           </table>"#,
    );
    let product = extract(&fragment);

    assert_eq!(product.color, NOT_FOUND);
}

#[test]
fn test_empty_fragment_is_all_sentinels() {
    let product = extract(&ContentFragment::new(""));

    assert_eq!(product.name, NOT_FOUND);
    assert_eq!(product.production_date, NOT_FOUND);
    assert_eq!(product.country_manufacture, NOT_FOUND);
    assert_eq!(product.color, NOT_FOUND);
    assert_eq!(product.image_url, None);
}

#[test]
fn test_gallery_image_without_data_src_is_absent() {
    // Image present but not lazy-loaded: no data-src attribute to read.
    let fragment = ContentFragment::new(
        r#"<div class="woocommerce-product-gallery__image">
             <img src="https://tnuniverse.com/wp-content/uploads/direct.jpg" />
           </div>"#,
    );
    let product = extract(&fragment);

    assert_eq!(product.image_url, None);
}
