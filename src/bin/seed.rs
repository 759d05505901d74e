use stockroom::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    security::password::hash_password,
    services::sale_service::total_price,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    let pool = create_pool(&config.database_url).await?;

    let owner_id = ensure_user(&pool, "demo", "demo@example.com", "demo123").await?;
    let product_ids = seed_products(&pool, owner_id).await?;
    seed_sales(&pool, &product_ids).await?;

    println!("Seed completed. Demo user ID: {owner_id}");
    Ok(())
}

async fn ensure_user(
    pool: &sqlx::PgPool,
    username: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let row: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO users (id, username, email, password_hash)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (username) DO UPDATE SET username = EXCLUDED.username
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {username}");
    Ok(row.0)
}

async fn seed_products(
    pool: &sqlx::PgPool,
    owner_id: Uuid,
) -> anyhow::Result<Vec<(Uuid, f64)>> {
    let products = vec![
        ("Widget", 2.0, 5.0, 10),
        ("Gadget", 7.5, 12.0, 25),
        ("Sprocket", 0.4, 1.25, 300),
    ];

    let mut ids = Vec::with_capacity(products.len());
    for (name, cost, price, stock_quantity) in products {
        let existing: Option<(Uuid, f64)> = sqlx::query_as(
            "SELECT id, price FROM products WHERE owner_id = $1 AND name = $2",
        )
        .bind(owner_id)
        .bind(name)
        .fetch_optional(pool)
        .await?;
        if let Some(row) = existing {
            ids.push(row);
            continue;
        }

        let row: (Uuid, f64) = sqlx::query_as(
            r#"
            INSERT INTO products (id, name, cost, price, stock_quantity, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, price
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(cost)
        .bind(price)
        .bind(stock_quantity)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;
        ids.push(row);
    }

    println!("Seeded products");
    Ok(ids)
}

async fn seed_sales(pool: &sqlx::PgPool, products: &[(Uuid, f64)]) -> anyhow::Result<()> {
    for (index, (product_id, price)) in products.iter().enumerate() {
        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sales WHERE product_id = $1")
            .bind(product_id)
            .fetch_one(pool)
            .await?;
        if existing > 0 {
            continue;
        }

        let quantity = index as i32 + 1;
        sqlx::query(
            "INSERT INTO sales (id, quantity, total_price, product_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(Uuid::new_v4())
        .bind(quantity)
        .bind(total_price(*price, quantity))
        .bind(product_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded sales");
    Ok(())
}
