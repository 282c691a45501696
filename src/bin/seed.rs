use buyit_storefront::{
    config::AppConfig,
    db::{create_pool, orm_from_pool, run_migrations},
    defaults,
    events::EventBus,
    services::storefront::Storefront,
    storage::PostgresStore,
};

/// Reset the persisted catalog to the defaults and empty the cart.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(config.require_database_url()?).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let storefront = Storefront::new(PostgresStore::new(orm_from_pool(pool)), EventBus::default());
    let products = storefront
        .catalog()
        .save(defaults::products())
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("Seeded {} products", products.len());

    storefront
        .cart()
        .clear()
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    println!("Cart cleared");

    Ok(())
}
