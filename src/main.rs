mod filter;
mod identity;
mod models;
mod repo;
mod store;

use filter::{filter_and_sort, FilterSpec, SortKey};
use repo::AdRepository;
use store::{LocalCache, RemoteStore};
use tracing::{info, Level};
use tracing_subscriber;

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const DEFAULT_CACHE_FILE: &str = "pascalhub_ads.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🛒 PascalHub - Listings Core");
    info!("============================");

    let api_url =
        std::env::var("PASCALHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let cache_file =
        std::env::var("PASCALHUB_CACHE_FILE").unwrap_or_else(|_| DEFAULT_CACHE_FILE.to_string());

    let repository = AdRepository::new(RemoteStore::new(&api_url)?, LocalCache::new(cache_file));

    info!("Loading ads from {} (local fallback enabled)...", api_url);
    let ads = repository.list_all().await?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (search, sort) = parse_listing_args(&args)?;
    let spec = FilterSpec {
        search,
        ..Default::default()
    };

    let results = filter_and_sort(&ads, &spec, sort);
    info!("Showing {} of {} ads\n", results.len(), ads.len());

    for (i, ad) in results.iter().enumerate() {
        println!("{}. {} (Rs. {})", i + 1, ad.title, ad.price);
        println!("   {} · {} · {}", ad.category, ad.condition, ad.location);
        println!("   Posted: {} · Seller: {}", ad.posted, ad.seller.name);
        println!("   ID: {}", ad.id);
        println!();
    }

    Ok(())
}

/// Optional search term and sort key from the command line. A lone argument
/// that names a sort key ("newest", "price-low", "price-high") is taken as
/// the sort, not as a search term.
fn parse_listing_args(args: &[String]) -> anyhow::Result<(String, SortKey)> {
    match args {
        [] => Ok((String::new(), SortKey::default())),
        [only] => match only.parse::<SortKey>() {
            Ok(sort) => Ok((String::new(), sort)),
            Err(_) => Ok((only.clone(), SortKey::default())),
        },
        [search, sort, ..] => Ok((search.clone(), sort.parse()?)),
    }
}
