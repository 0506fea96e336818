use analytics::{AnalyticsEngine, OrderOverview, ProductInsight, ProductOverview};
use anyhow::{Context, Result};
use catalog::{
    in_categories, paginate, Catalog, NewOrder, NewProduct, OrderColumn, ProductColumn, SortSpec,
    TableQuery,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use configuration::settings::Config;
use configuration::LogLevel;
use core_types::{Category, DeliveryStatus, PaymentStatus};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

mod render;

/// The main entry point for the StorePulse dashboard.
fn main() {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config =
        configuration::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    let _guard = configuration::init_tracing(&config.logging)?;

    let data_file = config.store.data_file.clone();
    let mut catalog = Catalog::load(&data_file)
        .with_context(|| format!("Failed to load catalogue from {}", data_file.display()))?;
    tracing::debug!(
        data_file = %data_file.display(),
        products = catalog.products().len(),
        orders = catalog.orders().len(),
        "Catalogue ready."
    );
    let engine = AnalyticsEngine::new();

    // Execute the appropriate command
    match cli.command {
        Commands::Products(args) => handle_products(args, &catalog, &engine, &config),
        Commands::Orders(args) => handle_orders(args, &catalog, &engine, &config),
        Commands::Order { id } => {
            let order = catalog
                .order(&id)
                .with_context(|| format!("Order '{id}' not found"))?;
            println!("{}", render::order_detail(order));
            Ok(())
        }
        Commands::Report => handle_report(&catalog, &engine),
        Commands::AddProduct(args) => {
            let product = catalog.add_product(args.into())?;
            println!("Created product {} ({}).", product.id, product.sku);
            save(&catalog, &config)
        }
        Commands::AddOrder(args) => {
            let order = catalog.add_order(args.into())?;
            println!("Created order {} totalling ${:.2}.", order.id, order.total_amount);
            save(&catalog, &config)
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Product and order dashboard with sales trend analytics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to ./config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured log level (RUST_LOG still wins).
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with their stock level and sales trend.
    Products(ProductsArgs),
    /// Show order statistics and the order list.
    Orders(OrdersArgs),
    /// Show one order with its line items.
    Order {
        /// The order ID (e.g., "ORD-001").
        id: String,
    },
    /// Print the dashboard aggregates and per-product trends as JSON.
    Report,
    /// Create a product.
    AddProduct(AddProductArgs),
    /// Create a single-product order.
    AddOrder(AddOrderArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum ProductSort {
    Name,
    Sku,
    Category,
    Price,
    Stock,
    Status,
}

impl From<ProductSort> for ProductColumn {
    fn from(sort: ProductSort) -> Self {
        match sort {
            ProductSort::Name => ProductColumn::Name,
            ProductSort::Sku => ProductColumn::Sku,
            ProductSort::Category => ProductColumn::Category,
            ProductSort::Price => ProductColumn::Price,
            ProductSort::Stock => ProductColumn::Stock,
            ProductSort::Status => ProductColumn::Active,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderSort {
    Id,
    Client,
    Payment,
    Delivery,
    Total,
    Progress,
}

impl From<OrderSort> for OrderColumn {
    fn from(sort: OrderSort) -> Self {
        match sort {
            OrderSort::Id => OrderColumn::Id,
            OrderSort::Client => OrderColumn::Client,
            OrderSort::Payment => OrderColumn::Payment,
            OrderSort::Delivery => OrderColumn::Delivery,
            OrderSort::Total => OrderColumn::Total,
            OrderSort::Progress => OrderColumn::Progress,
        }
    }
}

#[derive(Parser)]
struct ProductsArgs {
    /// Filter by product name (case-insensitive substring).
    #[arg(long)]
    search: Option<String>,

    /// Only show these categories. Repeatable.
    #[arg(long)]
    category: Vec<Category>,

    #[arg(long, value_enum)]
    sort: Option<ProductSort>,

    /// Sort descending.
    #[arg(long)]
    desc: bool,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Parser)]
struct OrdersArgs {
    /// Filter by client name (case-insensitive substring).
    #[arg(long)]
    search: Option<String>,

    #[arg(long, value_enum)]
    sort: Option<OrderSort>,

    /// Sort descending.
    #[arg(long)]
    desc: bool,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Parser)]
struct AddProductArgs {
    #[arg(long)]
    name: String,

    /// Stored uppercased.
    #[arg(long)]
    sku: String,

    #[arg(long)]
    category: Category,

    /// Unit price, e.g. "19.99".
    #[arg(long)]
    price: Decimal,

    #[arg(long, default_value_t = 0)]
    stock: u32,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    image_url: Option<String>,

    /// Create the product as inactive.
    #[arg(long)]
    inactive: bool,
}

impl From<AddProductArgs> for NewProduct {
    fn from(args: AddProductArgs) -> Self {
        NewProduct {
            name: args.name,
            sku: args.sku,
            category: args.category,
            price: args.price,
            stock_quantity: args.stock,
            description: args.description,
            image_url: args.image_url,
            active: !args.inactive,
        }
    }
}

#[derive(Parser)]
struct AddOrderArgs {
    /// ID of the product being ordered.
    #[arg(long)]
    product: String,

    #[arg(long, default_value_t = 1)]
    quantity: u32,

    #[arg(long)]
    client: String,

    #[arg(long)]
    address: String,

    #[arg(long, default_value = "pending")]
    payment: PaymentStatus,

    #[arg(long, default_value = "pending")]
    delivery: DeliveryStatus,

    /// Expected delivery date (format: YYYY-MM-DD).
    #[arg(long)]
    expected: NaiveDate,
}

impl From<AddOrderArgs> for NewOrder {
    fn from(args: AddOrderArgs) -> Self {
        NewOrder {
            product_id: args.product,
            quantity: args.quantity,
            client_name: args.client,
            delivery_address: args.address,
            payment_status: args.payment,
            delivery_status: args.delivery,
            expected_delivery_date: args.expected,
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_products(
    args: ProductsArgs,
    catalog: &Catalog,
    engine: &AnalyticsEngine,
    config: &Config,
) -> Result<()> {
    let categories: BTreeSet<Category> = args.category.into_iter().collect();
    let query = TableQuery {
        search: args.search,
        sort: args.sort.map(|s| SortSpec {
            column: s.into(),
            descending: args.desc,
        }),
        page_index: args.page.saturating_sub(1),
        page_size: config.display.page_size,
    };
    let page = paginate(in_categories(catalog.products(), &categories), &query)?;

    let insights: HashMap<String, ProductInsight> = page
        .rows
        .iter()
        .map(|p| (p.id.clone(), engine.product_insight(p)))
        .collect();

    println!("{}", render::products_table(&page, &insights));
    Ok(())
}

fn handle_orders(
    args: OrdersArgs,
    catalog: &Catalog,
    engine: &AnalyticsEngine,
    config: &Config,
) -> Result<()> {
    let overview = engine.order_overview(catalog.orders());
    let query = TableQuery {
        search: args.search,
        sort: args.sort.map(|s| SortSpec {
            column: s.into(),
            descending: args.desc,
        }),
        page_index: args.page.saturating_sub(1),
        page_size: config.display.page_size,
    };
    let page = paginate(catalog.orders(), &query)?;

    println!("{}", render::order_cards(&overview));
    println!("{}", render::orders_table(&page));
    Ok(())
}

#[derive(Serialize)]
struct DashboardReport {
    orders: OrderOverview,
    products: ProductOverview,
    insights: Vec<ProductInsight>,
}

fn handle_report(catalog: &Catalog, engine: &AnalyticsEngine) -> Result<()> {
    let report = DashboardReport {
        orders: engine.order_overview(catalog.orders()),
        products: engine.product_overview(catalog.products()),
        insights: catalog
            .products()
            .iter()
            .map(|p| engine.product_insight(p))
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn save(catalog: &Catalog, config: &Config) -> Result<()> {
    let path = &config.store.data_file;
    catalog
        .save(path)
        .with_context(|| format!("Failed to save catalogue to {}", path.display()))
}
