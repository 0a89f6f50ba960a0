use crate::errors::ServerError;
use crate::tests::utils::{get, home_html, post, test_app};

/// Grab the id of the only equipment in the ledger.
fn only_equipment_id(app: &crate::app::App) -> String {
    app.with_ledger(|ledger| ledger.equipments()[0].id.clone())
        .unwrap()
}

#[test]
fn added_equipment_shows_up_in_the_table() {
    let app = test_app();

    let resp = post(
        &app,
        "/equipments",
        "type=Notebook&model=ThinkPad+T14&serial=SN-0042&dailyRate=50.00",
    )
    .expect("add should succeed");

    assert_eq!(resp.status(), 302, "should redirect after add");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );

    let body = home_html(&app);
    assert!(body.contains("Notebook"));
    assert!(body.contains("ThinkPad T14"));
    assert!(body.contains("SN-0042"));
    assert!(body.contains("$50.00"));
}

#[test]
fn unparsable_rate_coerces_to_zero() {
    let app = test_app();

    post(
        &app,
        "/equipments",
        "type=Projector&model=Epson+X41&serial=SN-7&dailyRate=cheap",
    )
    .unwrap();

    let body = home_html(&app);
    assert!(body.contains("$0.00"));
}

#[test]
fn edit_rewrites_the_listed_fields() {
    let app = test_app();
    post(
        &app,
        "/equipments",
        "type=Notebook&model=ThinkPad+T14&serial=SN-0042&dailyRate=50.00",
    )
    .unwrap();
    let id = only_equipment_id(&app);

    // The edit form is prefilled with the current values.
    let form_page = crate::tests::utils::body_string(
        get(&app, &format!("/equipments/{id}/edit")).expect("edit page should render"),
    );
    assert!(form_page.contains("ThinkPad T14"));

    let resp = post(
        &app,
        &format!("/equipments/{id}/edit"),
        "type=Notebook&model=ThinkPad+T14s&serial=SN-0042&dailyRate=80",
    )
    .expect("edit should succeed");
    assert_eq!(resp.status(), 302);

    let body = home_html(&app);
    assert!(body.contains("ThinkPad T14s"));
    assert!(body.contains("$80.00"));
    assert!(!body.contains("$50.00"));
}

#[test]
fn editing_an_unknown_equipment_is_not_found() {
    let app = test_app();

    let err = post(
        &app,
        "/equipments/ghost/edit",
        "type=a&model=b&serial=c&dailyRate=1",
    )
    .unwrap_err();
    assert_eq!(err, ServerError::NotFound);

    let err = get(&app, "/equipments/ghost/edit").unwrap_err();
    assert_eq!(err, ServerError::NotFound);
}

#[test]
fn deleted_equipment_disappears_from_the_table() {
    let app = test_app();
    post(
        &app,
        "/equipments",
        "type=Notebook&model=ThinkPad+T14&serial=SN-0042&dailyRate=50.00",
    )
    .unwrap();
    let id = only_equipment_id(&app);

    let resp = post(&app, &format!("/equipments/{id}/delete"), "").unwrap();
    assert_eq!(resp.status(), 302);

    let body = home_html(&app);
    assert!(!body.contains("SN-0042"));
    assert!(body.contains("No equipment registered yet."));
}
