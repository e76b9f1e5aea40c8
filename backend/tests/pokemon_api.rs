//! End-to-end behaviour of the Pokémon API against the in-memory store.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use env_lock::lock_env;
use ortho_config::OrthoConfig;
use pokedex::domain::TRACE_ID_HEADER;
use pokedex::inbound::http::health::HealthState;
use pokedex::server::{ServerSettings, build_app, build_http_state, in_memory_http_state};
use rstest::rstest;
use serde_json::{Value, json};

async fn app() -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(build_app(
        web::Data::new(HealthState::new()),
        web::Data::new(in_memory_http_state()),
    ))
    .await
}

async fn call<S>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

fn pokemon_uri(id: i64) -> String {
    format!("/pokemon/{id}")
}

#[rstest]
#[case(test::TestRequest::get())]
#[case(test::TestRequest::delete())]
#[case(test::TestRequest::put().set_json(json!({ "name": "Ditto", "type": "Normal" })))]
#[case(test::TestRequest::patch().set_json(json!({ "level": 3 })))]
#[actix_web::test]
async fn unknown_ids_are_not_found(#[case] request: test::TestRequest) {
    let app = app().await;

    let (status, body) = call(&app, request.uri(&pokemon_uri(999))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
}

#[actix_web::test]
async fn pikachu_lifecycle() {
    let app = app().await;

    let (status, created) = call(
        &app,
        test::TestRequest::post()
            .uri("/pokemon")
            .set_json(json!({ "name": "Pikachu", "type": "Electric", "level": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 1, "name": "Pikachu", "type": "Electric", "level": 5 })
    );

    let (status, patched) = call(
        &app,
        test::TestRequest::patch()
            .uri(&pokemon_uri(1))
            .set_json(json!({ "level": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched.get("level"), Some(&json!(5)));

    let (status, patched) = call(
        &app,
        test::TestRequest::patch()
            .uri(&pokemon_uri(1))
            .set_json(json!({ "type": "Electric/Flying" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched.get("type"), Some(&json!("Electric/Flying")));
    assert_eq!(patched.get("level"), Some(&json!(5)));

    let (status, body) = call(&app, test::TestRequest::delete().uri(&pokemon_uri(1))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = call(&app, test::TestRequest::get().uri(&pokemon_uri(1))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn put_sets_level_to_zero_while_patch_keeps_it() {
    let app = app().await;
    call(
        &app,
        test::TestRequest::post()
            .uri("/pokemon")
            .set_json(json!({ "name": "Geodude", "type": "Rock", "level": 9 })),
    )
    .await;

    let (status, replaced) = call(
        &app,
        test::TestRequest::put()
            .uri(&pokemon_uri(1))
            .set_json(json!({ "id": 40, "name": "Graveler", "type": "Rock/Ground", "level": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        replaced,
        json!({ "id": 1, "name": "Graveler", "type": "Rock/Ground", "level": 0 })
    );

    let (_, fetched) = call(&app, test::TestRequest::get().uri(&pokemon_uri(1))).await;
    assert_eq!(fetched, replaced);
}

#[actix_web::test]
async fn created_ids_are_fresh_and_listing_matches_store() {
    let app = app().await;

    let mut ids = Vec::new();
    for (name, category) in [("Eevee", "Normal"), ("EEVEE", "Normal"), ("Vulpix", "Fire")] {
        let (status, created) = call(
            &app,
            test::TestRequest::post()
                .uri("/pokemon")
                .set_json(json!({ "id": 1, "name": name, "type": category })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(created.get("id").and_then(Value::as_i64).expect("id assigned"));
    }
    assert_eq!(ids, vec![1, 2, 3]);

    call(&app, test::TestRequest::delete().uri(&pokemon_uri(2))).await;
    let (_, created) = call(
        &app,
        test::TestRequest::post()
            .uri("/pokemon")
            .set_json(json!({ "name": "Growlithe", "type": "Fire", "level": 4 })),
    )
    .await;
    assert_eq!(created.get("id"), Some(&json!(4)));

    let (status, listed) = call(&app, test::TestRequest::get().uri("/pokemon")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = listed
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|entry| entry.get("name").and_then(Value::as_str))
        .collect();
    assert_eq!(names, vec!["Eevee", "Vulpix", "Growlithe"]);
}

#[rstest]
#[case(test::TestRequest::get().uri("/pokemon/pikachu"), "invalid_path")]
#[case(
    test::TestRequest::post()
        .uri("/pokemon")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\":"),
    "invalid_json"
)]
#[case(
    test::TestRequest::post()
        .uri("/pokemon")
        .set_json(json!({ "name": "Missingno" })),
    "invalid_json"
)]
#[actix_web::test]
async fn malformed_requests_are_rejected(
    #[case] request: test::TestRequest,
    #[case] detail_code: &str,
) {
    let app = app().await;

    let (status, body) = call(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(
        body.get("details")
            .and_then(|details| details.get("code"))
            .and_then(Value::as_str),
        Some(detail_code)
    );
}

#[actix_web::test]
async fn responses_carry_trace_id_matching_error_body() {
    let app = app().await;

    let response = test::call_service(
        &app,
        test::TestRequest::get().uri(&pokemon_uri(5)).to_request(),
    )
    .await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(response).await;

    assert_eq!(body.get("traceId").and_then(Value::as_str), Some(header.as_str()));
}

#[actix_web::test]
async fn health_probes_reflect_state() {
    let health = web::Data::new(HealthState::new());
    let app = test::init_service(build_app(
        health.clone(),
        web::Data::new(in_memory_http_state()),
    ))
    .await;

    let (status, _) = call(&app, test::TestRequest::get().uri("/health/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let (status, _) = call(&app, test::TestRequest::get().uri("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, test::TestRequest::get().uri("/health/live")).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn default_settings_serve_from_memory_on_all_interfaces() {
    let settings = {
        let _guard = lock_env([
            ("POKEDEX_HOST", None::<String>),
            ("POKEDEX_PORT", None::<String>),
            ("POKEDEX_DATABASE_URL", None::<String>),
            ("POKEDEX_DB_MAX_CONNECTIONS", None::<String>),
        ]);
        ServerSettings::load_from_iter([std::ffi::OsString::from("pokedex")])
            .expect("settings load without any POKEDEX_* variables")
    };
    assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 8080));
    assert!(settings.pool_config().is_none());

    let state = build_http_state(&settings).await.expect("in-memory state");
    let app = test::init_service(build_app(
        web::Data::new(HealthState::new()),
        web::Data::new(state),
    ))
    .await;

    let (status, listed) = call(&app, test::TestRequest::get().uri("/pokemon")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}
