mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{body_text, empty_state, seeded_state};
use rateprofs::models::catalog::responses::ModuleInstanceListItem;

#[actix_web::test]
async fn list_on_empty_catalog_is_not_found() {
    let state = empty_state().await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/list").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "No module instances found");
}

#[actix_web::test]
async fn list_groups_professors_per_instance() {
    let state = seeded_state(false).await;
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/api/list").to_request();
    let items: Vec<ModuleInstanceListItem> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(items.len(), 4);

    let iv_2024 = items
        .iter()
        .find(|i| i.module_code == "IV" && i.year == 2024 && i.semester == 1)
        .expect("IV 2024/1 should be listed");
    assert_eq!(iv_2024.module_name, "Info Vis");
    let mut codes: Vec<&str> = iv_2024
        .taught_by
        .iter()
        .map(|p| p.professor_code.as_str())
        .collect();
    codes.sort_unstable();
    assert_eq!(codes, vec!["OJ", "RR"]);

    let ws = items
        .iter()
        .find(|i| i.module_code == "WS")
        .expect("WS should be listed");
    assert_eq!(ws.taught_by.len(), 1);
    assert_eq!(ws.taught_by[0].professor_name, "Ammar Alsalka");
}

#[actix_web::test]
async fn list_rejects_post() {
    let state = seeded_state(false).await;
    let app = init_app!(state);

    let req = test::TestRequest::post().uri("/api/list").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
