use crate::app::App;
use crate::domain::Ledger;
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_response, json_download_response, redirect, ResultResp,
};
use crate::spreadsheets::export_rentals_xlsx;
use crate::templates::pages::{edit_equipment_page, home_page, HomeVm};
use crate::templates::quote_box;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::info;

static MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();

    // Form bodies are read up front; every mutation below is a POST.
    let form = if method == "POST" {
        read_form(req)?
    } else {
        HashMap::new()
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let vm = app.with_ledger(|ledger| HomeVm {
                equipments: ledger.equipments().to_vec(),
                rentals: ledger.rental_rows(),
            })?;
            html_response(home_page(&vm))
        }

        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),

        ("POST", ["equipments"]) => {
            let id = app.with_ledger_mut(|ledger| {
                Ok(ledger
                    .add_equipment(
                        field(&form, "type"),
                        field(&form, "model"),
                        field(&form, "serial"),
                        field(&form, "dailyRate"),
                    )
                    .id
                    .clone())
            })?;
            info!(%id, "equipment added");
            redirect("/")
        }

        ("GET", ["equipments", id, "edit"]) => {
            let equipment = app
                .with_ledger(|ledger| ledger.find_equipment(id).cloned())?
                .ok_or(ServerError::NotFound)?;
            html_response(edit_equipment_page(&equipment))
        }

        ("POST", ["equipments", id, "edit"]) => {
            app.with_ledger_mut(|ledger| {
                ledger.edit_equipment(
                    id,
                    field(&form, "type"),
                    field(&form, "model"),
                    field(&form, "serial"),
                    field(&form, "dailyRate"),
                )
            })?;
            info!(%id, "equipment edited");
            redirect("/")
        }

        ("POST", ["equipments", id, "delete"]) => {
            app.with_ledger_mut(|ledger| {
                ledger.delete_equipment(id);
                Ok(())
            })?;
            info!(%id, "equipment deleted");
            redirect("/")
        }

        // Live price preview for the rental form; pure read, nothing stored.
        ("GET", ["rentals", "quote"]) => {
            let params = parse_pairs(&query);
            let quote = app.with_ledger(|ledger| {
                ledger.quote(
                    field(&params, "equipmentId"),
                    field(&params, "startDate"),
                    field(&params, "endDate"),
                )
            })?;
            html_response(quote_box(quote))
        }

        ("POST", ["rentals"]) => {
            let id = app.with_ledger_mut(|ledger| {
                ledger
                    .create_rental(
                        field(&form, "equipmentId"),
                        field(&form, "renter"),
                        field(&form, "startDate"),
                        field(&form, "endDate"),
                        field(&form, "notes"),
                    )
                    .map(|rental| rental.id.clone())
            })?;
            info!(%id, "rental created");
            redirect("/")
        }

        ("POST", ["rentals", id, "close"]) => {
            app.with_ledger_mut(|ledger| {
                ledger.close_rental(id);
                Ok(())
            })?;
            info!(%id, "rental closed");
            redirect("/")
        }

        ("POST", ["rentals", id, "delete"]) => {
            app.with_ledger_mut(|ledger| {
                ledger.delete_rental(id);
                Ok(())
            })?;
            info!(%id, "rental deleted");
            redirect("/")
        }

        ("GET", ["export"]) => {
            let document = app.with_ledger(|ledger| ledger.to_document())??;
            json_download_response(document, "rental_ledger.json")
        }

        ("GET", ["export", "rentals.xlsx"]) => {
            let rows = app.with_ledger(|ledger| ledger.rental_rows())?;
            export_rentals_xlsx(&rows)
        }

        // Full replace: the posted document only takes effect if it parses.
        ("POST", ["import"]) => {
            let imported = Ledger::from_document(field(&form, "document"))?;
            app.with_ledger_mut(|ledger| {
                *ledger = imported;
                Ok(())
            })?;
            info!("ledger imported");
            redirect("/")
        }

        ("POST", ["clear"]) => {
            app.with_ledger_mut(|ledger| {
                ledger.clear();
                Ok(())
            })?;
            info!("ledger cleared");
            redirect("/")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;
    Ok(parse_pairs(&body))
}

/// Decode an `application/x-www-form-urlencoded` body or query string.
fn parse_pairs(input: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

fn field<'a>(pairs: &'a HashMap<String, String>, name: &str) -> &'a str {
    pairs.get(name).map(String::as_str).unwrap_or("")
}
