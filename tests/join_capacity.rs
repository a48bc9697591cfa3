//! Exercises the transactional roster append against a real MySQL
//! instance. Run with `cargo test -- --ignored` and `DATABASE_URL`
//! pointing at a disposable database.

use arena_service::common::error::AppError;
use arena_service::common::redis_pool::{RedisPool, RedisPoolManager};
use arena_service::common::state::AppState;
use arena_service::entities::matches::CreateMatchArgs;
use arena_service::entities::users::CreateUserArgs;
use arena_service::models::matches::JoinMatchRequest;
use arena_service::models::users::{Actor, Role};
use arena_service::repositories;
use arena_service::usecases;
use chrono::NaiveDate;
use redis::AsyncConnectionConfig;
use sqlx::mysql::MySqlPoolOptions;

async fn test_state() -> AppState {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a MySQL instance");
    let db = MySqlPoolOptions::new()
        .max_connections(16)
        .connect(&database_url)
        .await
        .expect("failed to connect to MySQL");
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("failed to run migrations");

    // The join path never touches redis; the pool just satisfies AppState.
    let client = redis::Client::open("redis://127.0.0.1").expect("invalid redis url");
    let manager = RedisPoolManager::new(client, AsyncConnectionConfig::new());
    let redis = RedisPool::builder(manager)
        .max_size(1)
        .build()
        .expect("failed to build redis pool");
    AppState { db, redis }
}

async fn create_user(state: &AppState, tag: &str) -> Actor {
    let email = format!("{tag}-{}@example.com", uuid::Uuid::new_v4());
    let user = repositories::users::create(
        state,
        CreateUserArgs {
            name: tag.to_string(),
            email,
            password_hash: "x".to_string(),
            height: None,
            position: None,
            team_id: None,
            profile_image: None,
        },
    )
    .await
    .expect("failed to create user");
    Actor {
        user_id: user.id,
        name: user.name,
        email: user.email,
        role: Role::Customer,
    }
}

fn join_request(name: &str) -> JoinMatchRequest {
    JoinMatchRequest {
        player_name: Some(name.to_string()),
        team_name: None,
        contact_info: Some("555-0100".to_string()),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn concurrent_joins_fill_exactly_one_slot() {
    let state = test_state().await;
    let creator = create_user(&state, "creator").await;
    let entity = repositories::matches::create(
        &state,
        CreateMatchArgs {
            name: "Single slot".to_string(),
            date: NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            time: "18:00".to_string(),
            location: "Field A".to_string(),
            match_type: "5v5".to_string(),
            max_players: 1,
            max_teams: None,
            creator_id: creator.user_id,
            description: String::new(),
        },
    )
    .await
    .expect("failed to create match");

    let mut handles = vec![];
    for i in 0..6 {
        let state = state.clone();
        let match_id = entity.id;
        handles.push(tokio::spawn(async move {
            let actor = create_user(&state, &format!("joiner-{i}")).await;
            usecases::matches::join(&state, &actor, match_id, join_request(&actor.name)).await
        }));
    }

    let mut joined = 0;
    let mut rejected_full = 0;
    for handle in handles {
        match handle.await.expect("join task panicked") {
            Ok(_) => joined += 1,
            Err(AppError::MatchesFull) => rejected_full += 1,
            Err(e) => panic!("unexpected join error: {e:?}"),
        }
    }
    assert_eq!(joined, 1, "exactly one join must win the last slot");
    assert_eq!(rejected_full, 5);

    let count = repositories::matches::player_count(&state, entity.id)
        .await
        .expect("failed to count players");
    assert_eq!(count, 1);
}

#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn repeat_join_is_rejected() {
    let state = test_state().await;
    let creator = create_user(&state, "creator").await;
    let entity = repositories::matches::create(
        &state,
        CreateMatchArgs {
            name: "Repeat join".to_string(),
            date: NaiveDate::from_ymd_opt(2999, 1, 1).unwrap(),
            time: "18:00".to_string(),
            location: "Field B".to_string(),
            match_type: "7v7".to_string(),
            max_players: 14,
            max_teams: None,
            creator_id: creator.user_id,
            description: String::new(),
        },
    )
    .await
    .expect("failed to create match");

    let actor = create_user(&state, "joiner").await;
    usecases::matches::join(&state, &actor, entity.id, join_request(&actor.name))
        .await
        .expect("first join must succeed");
    let second = usecases::matches::join(&state, &actor, entity.id, join_request(&actor.name))
        .await
        .unwrap_err();
    assert_eq!(second, AppError::MatchesAlreadyJoined);
}
