use crate::dto::catalog::CatalogPage;
use crate::models::config::AppConfig;
use crate::repository::HttpCatalogRepository;
use crate::services::session::CatalogSession;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;

/// Runs one catalog session against the configured service and prints the
/// resulting page as a plain-text table.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let repo = HttpCatalogRepository::new(config.api_base_url);
    let mut session = CatalogSession::new(repo);
    session.load_catalog().await;

    match session.page() {
        CatalogPage::Loading => println!("Loading products..."),
        CatalogPage::Error { message } => println!("Error: {message}"),
        CatalogPage::Table { rows } => {
            println!(
                "{:<8} {:<40} {:<16} {:>10} {:>6} {:>6}",
                "KEY", "NAME", "CATEGORY", "PRICE", "RATE", "STOCK"
            );
            for row in rows {
                println!(
                    "{:<8} {:<40} {:<16} {:>10.2} {:>6} {:>6}",
                    row.key,
                    row.name,
                    row.category,
                    row.price,
                    row.rating
                        .map(|rate| rate.to_string())
                        .unwrap_or_else(|| "N/A".to_string()),
                    row.stock
                        .map(|count| count.to_string())
                        .unwrap_or_else(|| "0".to_string()),
                );
            }
        }
    }

    Ok(())
}
