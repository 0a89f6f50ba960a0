use crate::app::App;
use crate::errors::ServerError;
use crate::store::JsonStore;
use crate::tests::utils::{body_string, form_field, get, home_html, post, test_app};
use std::time::{SystemTime, UNIX_EPOCH};

fn seeded_app() -> App {
    let app = test_app();
    post(
        &app,
        "/equipments",
        "type=Notebook&model=ThinkPad+T14&serial=SN-0042&dailyRate=50.00",
    )
    .unwrap();
    let eq = app
        .with_ledger(|ledger| ledger.equipments()[0].id.clone())
        .unwrap();
    post(
        &app,
        "/rentals",
        &format!("equipmentId={eq}&renter=Alice&startDate=2024-01-10&endDate=2024-01-12&notes="),
    )
    .unwrap();
    app
}

#[test]
fn export_downloads_the_persisted_document() {
    let app = seeded_app();

    let resp = get(&app, "/export").expect("export should succeed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/json; charset=utf-8"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("rental_ledger.json"));

    let document = body_string(resp);
    let parsed: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(parsed["equipments"][0]["type"], "Notebook");
    assert_eq!(parsed["equipments"][0]["dailyRate"], 50.0);
    assert_eq!(parsed["rentals"][0]["days"], 3);
    assert_eq!(parsed["rentals"][0]["total"], 150.0);
    assert_eq!(parsed["rentals"][0]["status"], "active");
}

#[test]
fn xlsx_report_downloads() {
    let app = seeded_app();

    let resp = get(&app, "/export/rentals.xlsx").expect("report should succeed");
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("rentals.xlsx"));
}

#[test]
fn import_replaces_the_whole_ledger() {
    // Export from one app...
    let source = seeded_app();
    let document = body_string(get(&source, "/export").unwrap());

    // ...and import into a fresh one that already has unrelated state.
    let app = test_app();
    post(
        &app,
        "/equipments",
        "type=Projector&model=Epson+X41&serial=SN-7&dailyRate=30",
    )
    .unwrap();

    let resp = post(&app, "/import", &form_field("document", &document)).unwrap();
    assert_eq!(resp.status(), 302);

    let body = home_html(&app);
    assert!(body.contains("ThinkPad T14"));
    assert!(body.contains("Alice"));
    assert!(!body.contains("Epson X41"), "import is a replace, not a merge");
}

#[test]
fn import_missing_a_sequence_is_rejected_and_state_is_kept() {
    let app = seeded_app();

    let err = post(
        &app,
        "/import",
        &form_field("document", r#"{ "equipments": [] }"#),
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Validation(_)));

    // The pre-import state is untouched.
    let body = home_html(&app);
    assert!(body.contains("ThinkPad T14"));
    assert!(body.contains("Alice"));
}

#[test]
fn clear_empties_both_tables() {
    let app = seeded_app();

    let resp = post(&app, "/clear", "").unwrap();
    assert_eq!(resp.status(), 302);

    let body = home_html(&app);
    assert!(body.contains("No equipment registered yet."));
    assert!(body.contains("No rentals yet."));
}

#[test]
fn startup_rejects_a_malformed_document() {
    let path = std::env::temp_dir().join(format!(
        "rentals_malformed_test_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, "{ not a ledger").unwrap();

    let err = App::load(JsonStore::new(&path)).unwrap_err();
    assert!(matches!(err, ServerError::Validation(_)));
}

#[test]
fn ledger_survives_a_restart_via_the_json_store() {
    let path = std::env::temp_dir().join(format!(
        "rentals_restart_test_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));

    {
        let app = App::load(JsonStore::new(&path)).expect("fresh store should load");
        crate::router::handle(
            http::Request::builder()
                .method(http::Method::POST)
                .uri("/equipments")
                .body(astra::Body::from(
                    "type=Notebook&model=ThinkPad+T14&serial=SN-0042&dailyRate=50.00".to_string(),
                ))
                .unwrap(),
            &app,
        )
        .unwrap();
    }

    // A second startup against the same file sees the equipment.
    let reloaded = App::load(JsonStore::new(&path)).expect("reload should succeed");
    let body = home_html(&reloaded);
    assert!(body.contains("SN-0042"));
}
