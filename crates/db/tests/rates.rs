//! Integration tests for the rate repository and the featured-rate rule.

use assert_matches::assert_matches;
use sqlx::PgPool;
use tailwag_db::models::rate::RateInput;
use tailwag_db::repositories::RateRepo;

fn new_rate(name: &str, price: f64, is_active: bool) -> RateInput {
    RateInput {
        service_name: name.to_string(),
        price,
        unit_type: "per visit".to_string(),
        description: None,
        is_active,
    }
}

async fn featured_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM rates WHERE is_featured = true")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn list_active_hides_inactive_rates(pool: PgPool) {
    let walk = RateRepo::create(&pool, &new_rate("Dog walk", 25.0, true)).await.unwrap();
    RateRepo::create(&pool, &new_rate("Retired", 10.0, false)).await.unwrap();
    let stay = RateRepo::create(&pool, &new_rate("Overnight", 80.0, true)).await.unwrap();

    let active = RateRepo::list_active(&pool).await.unwrap();
    let ids: Vec<i64> = active.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![walk.id, stay.id]);

    assert_eq!(RateRepo::list_all(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn set_featured_leaves_exactly_one(pool: PgPool) {
    let first = RateRepo::create(&pool, &new_rate("Drop-in", 20.0, true)).await.unwrap();
    let second = RateRepo::create(&pool, &new_rate("House sit", 60.0, true)).await.unwrap();

    RateRepo::set_featured(&pool, first.id).await.unwrap().unwrap();
    let featured = RateRepo::set_featured(&pool, second.id).await.unwrap().unwrap();
    assert!(featured.is_featured);

    assert_eq!(featured_count(&pool).await, 1);
    let current = RateRepo::find_featured(&pool).await.unwrap().unwrap();
    assert_eq!(current.id, second.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn set_featured_twice_is_stable(pool: PgPool) {
    let rate = RateRepo::create(&pool, &new_rate("Drop-in", 20.0, true)).await.unwrap();
    RateRepo::set_featured(&pool, rate.id).await.unwrap().unwrap();
    RateRepo::set_featured(&pool, rate.id).await.unwrap().unwrap();
    assert_eq!(featured_count(&pool).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn set_featured_on_missing_rate_keeps_previous(pool: PgPool) {
    let rate = RateRepo::create(&pool, &new_rate("Drop-in", 20.0, true)).await.unwrap();
    RateRepo::set_featured(&pool, rate.id).await.unwrap().unwrap();

    let result = RateRepo::set_featured(&pool, 999_999).await.unwrap();
    assert!(result.is_none());

    let current = RateRepo::find_featured(&pool).await.unwrap().unwrap();
    assert_eq!(current.id, rate.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn clear_featured_unsets_flag(pool: PgPool) {
    let rate = RateRepo::create(&pool, &new_rate("Drop-in", 20.0, true)).await.unwrap();
    RateRepo::set_featured(&pool, rate.id).await.unwrap().unwrap();

    assert_eq!(RateRepo::clear_featured(&pool).await.unwrap(), 1);
    assert!(RateRepo::find_featured(&pool).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn update_keeps_featured_flag(pool: PgPool) {
    let rate = RateRepo::create(&pool, &new_rate("Drop-in", 20.0, true)).await.unwrap();
    RateRepo::set_featured(&pool, rate.id).await.unwrap().unwrap();

    let updated = RateRepo::update(&pool, rate.id, &new_rate("Drop-in visit", 22.5, true))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.service_name, "Drop-in visit");
    assert_eq!(updated.price, 22.5);
    assert!(updated.is_featured);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_featured_row_violates_unique_index(pool: PgPool) {
    let a = RateRepo::create(&pool, &new_rate("A", 1.0, true)).await.unwrap();
    let b = RateRepo::create(&pool, &new_rate("B", 2.0, true)).await.unwrap();
    RateRepo::set_featured(&pool, a.id).await.unwrap().unwrap();

    let result = sqlx::query("UPDATE rates SET is_featured = true WHERE id = $1")
        .bind(b.id)
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(e)) if e.constraint() == Some("uq_rates_single_featured"));
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_reports_missing_rows(pool: PgPool) {
    let rate = RateRepo::create(&pool, &new_rate("Drop-in", 20.0, true)).await.unwrap();
    assert!(RateRepo::delete(&pool, rate.id).await.unwrap());
    assert!(!RateRepo::delete(&pool, rate.id).await.unwrap());
}
