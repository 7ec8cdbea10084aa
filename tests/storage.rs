//! 存储层直接调用，绕过处理程序里的重复检查，验证唯一索引兜底

mod common;

use common::{empty_state, seeded_state};
use rateprofs::errors::RatingsError;
use rateprofs::models::common::messages::{ALREADY_RATED, USER_EXISTS};
use rateprofs::models::ratings::requests::CreateRatingRequest;
use rateprofs::models::users::requests::CreateUserRequest;
use rateprofs::storage::Storage;

fn new_user(username: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: "not-a-real-hash".to_string(),
    }
}

#[actix_web::test]
async fn duplicate_rating_insert_is_rejected_by_index() {
    let state = seeded_state(false).await;
    let storage = state.storage.as_ref();

    let user = storage
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .expect("user should be created");
    let assignment = storage
        .find_module_instance_professor("IV", 2024, 1, "RR")
        .await
        .expect("lookup should succeed")
        .expect("RR teaches IV 2024/1");

    let request = CreateRatingRequest {
        user_id: user.id,
        module_instance_professor_id: assignment.id,
        rating: 4,
    };
    storage
        .create_rating(request.clone())
        .await
        .expect("first rating should be stored");

    match storage.create_rating(request).await {
        Err(RatingsError::Validation(msg)) => assert_eq!(msg, ALREADY_RATED),
        other => panic!("expected ALREADY_RATED, got {other:?}"),
    }

    // 第二次插入未生效
    let module = storage
        .get_module_by_code("IV")
        .await
        .expect("lookup should succeed")
        .expect("IV should exist");
    let average = storage
        .get_module_professor_average(assignment.professor_id, module.id)
        .await
        .expect("average should be computed");
    assert_eq!(average, Some(4.0));
}

#[actix_web::test]
async fn duplicate_username_insert_is_rejected_by_index() {
    let state = empty_state().await;
    let storage = state.storage.as_ref();

    storage
        .create_user(new_user("alice", "alice@example.com"))
        .await
        .expect("user should be created");

    match storage
        .create_user(new_user("alice", "other@example.com"))
        .await
    {
        Err(RatingsError::Validation(msg)) => assert_eq!(msg, USER_EXISTS),
        other => panic!("expected USER_EXISTS, got {other:?}"),
    }
}

#[actix_web::test]
async fn duplicate_email_insert_is_rejected_by_index() {
    let state = empty_state().await;
    let storage = state.storage.as_ref();

    storage
        .create_user(new_user("alice", "shared@example.com"))
        .await
        .expect("user should be created");

    match storage
        .create_user(new_user("bob", "shared@example.com"))
        .await
    {
        Err(RatingsError::Validation(msg)) => assert_eq!(msg, USER_EXISTS),
        other => panic!("expected USER_EXISTS, got {other:?}"),
    }
}
