use catalog::{Catalog, NewProduct};
use core_types::Category;
use rust_decimal::Decimal;
use tempfile::TempDir;

#[test]
fn missing_file_loads_demo_data() {
    let dir = TempDir::new().unwrap();
    let catalog = Catalog::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(catalog, Catalog::seeded());
    assert_eq!(catalog.products().len(), 5);
    assert_eq!(catalog.orders().len(), 4);
}

#[test]
fn saved_catalogue_reloads_with_new_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("catalog.json");

    let mut catalog = Catalog::seeded();
    catalog
        .add_product(NewProduct {
            name: "Puzzle Cube".to_string(),
            sku: "pc-006".to_string(),
            category: Category::Toys,
            price: Decimal::new(1299, 2),
            stock_quantity: 12,
            description: None,
            image_url: None,
            active: true,
        })
        .unwrap();
    catalog.save(&path).unwrap();

    let reloaded = Catalog::load(&path).unwrap();
    assert_eq!(reloaded, catalog);
    let cube = reloaded.product("6").unwrap();
    assert_eq!(cube.sku, "PC-006");
    assert_eq!(cube.price, Decimal::new(1299, 2));
}

#[test]
fn corrupt_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Catalog::load(&path),
        Err(catalog::CatalogError::Json(_))
    ));
}
