use anyhow::{bail, Context, Result};
use catalog::{Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use specs::atoms::{ColorSpecification, SizeSpecification};
use specs::{filter, AndSpecification, NotSpecification, OrSpecification, Specification};
use std::path::{Path, PathBuf};

/// Sift - Product Catalog Filtering
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Filter product catalogs with composable specifications", long_about = None)]
struct Cli {
    /// Path to a catalog JSON file (defaults to a small built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the classic green/large/large-and-blue filtering demo
    Demo,

    /// Filter the catalog by attribute criteria
    Filter {
        /// Keep products with this color
        #[arg(long)]
        color: Option<Color>,

        /// Keep products with this size
        #[arg(long)]
        size: Option<Size>,

        /// Match products satisfying any criterion instead of all of them
        #[arg(long)]
        any: bool,

        /// Keep the products the criteria reject
        #[arg(long)]
        invert: bool,
    },

    /// List every product in the catalog
    List,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let products = load_catalog(cli.catalog.as_deref())?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Demo => handle_demo(&products),
        Commands::Filter {
            color,
            size,
            any,
            invert,
        } => handle_filter(&products, color, size, any, invert)?,
        Commands::List => handle_list(&products),
    }

    Ok(())
}

/// Load the working catalog: a JSON file when one is given, the built-in
/// Apple/Tree/House catalog otherwise.
fn load_catalog(path: Option<&Path>) -> Result<Vec<Product>> {
    let Some(path) = path else {
        return Ok(builtin_catalog());
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let products: Vec<Product> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

    println!(
        "{} Loaded {} products from {}",
        "✓".green(),
        products.len(),
        path.display()
    );
    Ok(products)
}

fn builtin_catalog() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ]
}

/// Handle the 'demo' command
fn handle_demo(products: &[Product]) {
    println!("{}", "Green products:".bold().blue());
    let green = ColorSpecification::new(Color::Green);
    for p in filter(products, &green) {
        println!(" - {} is green", p.name);
    }

    println!("{}", "Large products:".bold().blue());
    let large = SizeSpecification::new(Size::Large);
    for p in filter(products, &large) {
        println!(" - {} is large", p.name);
    }

    // Atoms are Copy, so `large` stays usable after being combined.
    println!("{}", "Large blue items:".bold().blue());
    let large_blue = large.and(ColorSpecification::new(Color::Blue));
    for p in filter(products, &large_blue) {
        println!(" - {} is large and blue", p.name);
    }
}

/// Handle the 'filter' command
fn handle_filter(
    products: &[Product],
    color: Option<Color>,
    size: Option<Size>,
    any: bool,
    invert: bool,
) -> Result<()> {
    let spec = build_spec(color, size, any, invert)?;

    println!(
        "{}",
        format!("Products matching {}:", spec.describe()).bold().blue()
    );
    let mut matched = 0;
    for product in filter(products, spec.as_ref()) {
        println!(
            " {} {} ({}, {})",
            "•".green(),
            product.name,
            product.color,
            product.size
        );
        matched += 1;
    }
    println!("{} of {} products matched", matched, products.len());
    Ok(())
}

/// Assemble a specification from the command-line criteria.
fn build_spec(
    color: Option<Color>,
    size: Option<Size>,
    any: bool,
    invert: bool,
) -> Result<Box<dyn Specification<Product>>> {
    if color.is_none() && size.is_none() {
        bail!("No criteria given: pass at least one of --color or --size");
    }

    let spec: Box<dyn Specification<Product>> = if any {
        let mut disjunction = OrSpecification::new();
        if let Some(color) = color {
            disjunction = disjunction.or(ColorSpecification::new(color));
        }
        if let Some(size) = size {
            disjunction = disjunction.or(SizeSpecification::new(size));
        }
        Box::new(disjunction)
    } else {
        let mut conjunction = AndSpecification::new();
        if let Some(color) = color {
            conjunction = conjunction.and(ColorSpecification::new(color));
        }
        if let Some(size) = size {
            conjunction = conjunction.and(SizeSpecification::new(size));
        }
        Box::new(conjunction)
    };

    Ok(if invert {
        Box::new(NotSpecification::new(spec))
    } else {
        spec
    })
}

/// Handle the 'list' command
fn handle_list(products: &[Product]) {
    println!("{}", "Catalog:".bold().blue());
    for product in products {
        println!(
            " {} {} ({}, {})",
            "•".green(),
            product.name,
            product.color,
            product.size
        );
    }
    println!("{} products total", products.len());
}
