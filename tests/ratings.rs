mod common;

use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use common::{TEST_PASSWORD, body_text, empty_state, seeded_state, session_cookie};
use rateprofs::models::ratings::responses::{ModuleProfessorRating, ProfessorRating};

/// 注册并登录，返回会话 cookie
async fn login_as<S, B>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let email = format!("{username}@example.com");
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_form(vec![
            ("username", username),
            ("email", email.as_str()),
            ("password", TEST_PASSWORD),
        ])
        .to_request();
    assert!(test::call_service(app, req).await.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_form(vec![("username", username), ("password", TEST_PASSWORD)])
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    session_cookie(&resp).expect("login should set a session cookie")
}

fn rate_form<'a>(
    professor: &'a str,
    module: &'a str,
    year: &'a str,
    semester: &'a str,
    rating: &'a str,
) -> Vec<(&'a str, &'a str)> {
    vec![
        ("professorCode", professor),
        ("moduleCode", module),
        ("year", year),
        ("semester", semester),
        ("rating", rating),
    ]
}

fn average_of(rows: &[ProfessorRating], code: &str) -> Option<i64> {
    rows.iter()
        .find(|r| r.professor_code == code)
        .and_then(|r| r.average_rating)
}

#[actix_web::test]
async fn view_without_professors_is_not_found() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/view").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "No professors found");
}

#[actix_web::test]
async fn view_without_ratings_has_null_averages() {
    let state = seeded_state(false).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/view").to_request();
    let rows: Vec<ProfessorRating> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.average_rating.is_none()));
}

#[actix_web::test]
async fn view_rounds_professor_average() {
    let state = seeded_state(true).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/view").to_request();
    let rows: Vec<ProfessorRating> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(average_of(&rows, "RR"), Some(3));
    assert_eq!(average_of(&rows, "JS"), None);
}

#[actix_web::test]
async fn average_per_module() {
    let state = seeded_state(true).await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/average?professor_code=RR&module_code=IV")
        .to_request();
    let row: ModuleProfessorRating = test::call_and_read_body_json(&app, req).await;
    assert_eq!(row.average_rating, Some(2));
    assert_eq!(row.module_name, "Info Vis");

    let req = test::TestRequest::get()
        .uri("/api/average?professor_code=RR&module_code=DV")
        .to_request();
    let row: ModuleProfessorRating = test::call_and_read_body_json(&app, req).await;
    assert_eq!(row.average_rating, Some(5));

    // 教授与课程都存在但没有评分
    let req = test::TestRequest::get()
        .uri("/api/average?professor_code=AA&module_code=WS")
        .to_request();
    let row: ModuleProfessorRating = test::call_and_read_body_json(&app, req).await;
    assert_eq!(row.average_rating, None);
}

#[actix_web::test]
async fn average_errors() {
    let state = seeded_state(true).await;
    let app = init_app!(state);

    let req = test::TestRequest::get()
        .uri("/api/average?professor_code=ZZ&module_code=IV")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Professor or module not found");

    let req = test::TestRequest::get()
        .uri("/api/average?professor_code=RR")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(resp).await, "Missing required fields");
}

#[actix_web::test]
async fn rate_requires_session() {
    let state = seeded_state(false).await;
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/rate")
        .set_form(rate_form("RR", "IV", "2024", "1", "4"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_text(resp).await, "User is not authenticated");
}

#[actix_web::test]
async fn rate_validation_errors() {
    let state = seeded_state(false).await;
    let app = init_app!(state);
    let cookie = login_as(&app, "alice").await;

    let cases = [
        (
            vec![("professorCode", "RR"), ("moduleCode", "IV")],
            StatusCode::UNPROCESSABLE_ENTITY,
            "Missing required fields",
        ),
        (
            rate_form("RR", "IV", "2024", "1", "great"),
            StatusCode::BAD_REQUEST,
            "Provided rating is not a number",
        ),
        (
            rate_form("RR", "IV", "2024", "1", "0"),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Rating must be between 1 and 100",
        ),
        (
            rate_form("RR", "IV", "twenty", "1", "4"),
            StatusCode::NOT_FOUND,
            "Module instance not found",
        ),
        (
            rate_form("JS", "IV", "2024", "1", "4"),
            StatusCode::NOT_FOUND,
            "Module instance not found",
        ),
        (
            rate_form("RR", "IV", "2022", "1", "4"),
            StatusCode::NOT_FOUND,
            "Module instance not found",
        ),
    ];

    for (form, status, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/rate")
            .cookie(cookie.clone())
            .set_form(form)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status);
        assert_eq!(body_text(resp).await, message);
    }

    // 以上请求都不应写入评分
    let req = test::TestRequest::get().uri("/api/view").to_request();
    let rows: Vec<ProfessorRating> = test::call_and_read_body_json(&app, req).await;
    assert!(rows.iter().all(|r| r.average_rating.is_none()));
}

#[actix_web::test]
async fn rate_once_per_assignment() {
    let state = seeded_state(false).await;
    let app = init_app!(state);
    let cookie = login_as(&app, "alice").await;

    let req = test::TestRequest::post()
        .uri("/api/rate")
        .cookie(cookie.clone())
        .set_form(rate_form("RR", "IV", "2024", "1", "4"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_text(resp).await, "Added rating");

    let req = test::TestRequest::post()
        .uri("/api/rate")
        .cookie(cookie.clone())
        .set_form(rate_form("RR", "IV", "2024", "1", "2"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_text(resp).await,
        "User has already rated this Module Instance"
    );

    // 同一课程的另一学年可以再评
    let req = test::TestRequest::post()
        .uri("/api/rate")
        .cookie(cookie)
        .set_form(rate_form("RR", "IV", "2023", "1", "5"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 第二次提交未生效：(4 + 5) / 2 = 4.5，四舍六入五成双为 4
    let req = test::TestRequest::get()
        .uri("/api/average?professor_code=RR&module_code=IV")
        .to_request();
    let row: ModuleProfessorRating = test::call_and_read_body_json(&app, req).await;
    assert_eq!(row.average_rating, Some(4));
}

#[actix_web::test]
async fn rate_rejects_get() {
    let state = seeded_state(false).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/rate").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
