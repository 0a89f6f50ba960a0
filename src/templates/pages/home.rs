use crate::domain::{Equipment, RentalRow};
use crate::templates::{card, desktop_layout, quote_box};
use maud::{html, Markup};

pub struct HomeVm {
    pub equipments: Vec<Equipment>,
    pub rentals: Vec<RentalRow>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Equipment Rentals",
        html! {
            main class="container" {
                h1 { "Rental Ledger" }

                (card("Equipment", html! {
                    (equipment_form())
                    (equipment_table(&vm.equipments))
                }))

                (card("Rentals", html! {
                    (rental_form(&vm.equipments))
                    (rentals_table(&vm.rentals))
                }))

                (card("Data", html! {
                    (data_controls())
                }))
            }
        },
    )
}

fn equipment_form() -> Markup {
    html! {
        form action="/equipments" method="post" class="row-form" {
            label { "Type"
                input type="text" name="type" placeholder="Notebook" required;
            }
            label { "Model"
                input type="text" name="model" placeholder="ThinkPad T14" required;
            }
            label { "Serial"
                input type="text" name="serial" placeholder="SN-0042" required;
            }
            label { "Daily rate ($)"
                input type="text" name="dailyRate" inputmode="decimal" placeholder="50.00";
            }
            button type="submit" { "Add equipment" }
        }
    }
}

fn equipment_table(equipments: &[Equipment]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Type" }
                    th { "Model" }
                    th { "Serial" }
                    th { "Daily rate" }
                    th { "Actions" }
                }
            }
            tbody {
                @if equipments.is_empty() {
                    tr { td colspan="5" class="muted" { "No equipment registered yet." } }
                }
                @for eq in equipments {
                    tr {
                        td { (eq.equipment_type) }
                        td { (eq.model) }
                        td { (eq.serial) }
                        td { "$" (format!("{:.2}", eq.daily_rate)) }
                        td class="actions" {
                            a href=(format!("/equipments/{}/edit", eq.id)) { "Edit" }
                            form action=(format!("/equipments/{}/delete", eq.id))
                                method="post"
                                onsubmit="return confirm('Delete equipment? Rentals that reference it are kept.');" {
                                button type="submit" class="danger" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn rental_form(equipments: &[Equipment]) -> Markup {
    html! {
        form action="/rentals" method="post" class="row-form" {
            label { "Equipment"
                select name="equipmentId" required
                    hx-get="/rentals/quote"
                    hx-include="closest form"
                    hx-target="#quote-box"
                    hx-trigger="change" {
                    option value="" disabled selected { "-- select --" }
                    @for eq in equipments {
                        option value=(eq.id) { (eq.label()) }
                    }
                }
            }
            label { "Renter"
                input type="text" name="renter" placeholder="Alice" required;
            }
            label { "Start date"
                input type="date" name="startDate" required
                    hx-get="/rentals/quote"
                    hx-include="closest form"
                    hx-target="#quote-box"
                    hx-trigger="change";
            }
            label { "End date"
                input type="date" name="endDate" required
                    hx-get="/rentals/quote"
                    hx-include="closest form"
                    hx-target="#quote-box"
                    hx-trigger="change";
            }
            label { "Notes"
                input type="text" name="notes" placeholder="optional";
            }
            div id="quote-box" { (quote_box(None)) }
            button type="submit" { "Create rental" }
        }
    }
}

fn rentals_table(rentals: &[RentalRow]) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Equipment" }
                    th { "Renter" }
                    th { "Period" }
                    th { "Total" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                @if rentals.is_empty() {
                    tr { td colspan="6" class="muted" { "No rentals yet." } }
                }
                @for row in rentals {
                    tr {
                        td { (row.label()) }
                        td { (row.rental.renter) }
                        td { (row.period()) }
                        td { "$" (format!("{:.2}", row.rental.total)) }
                        td {
                            span class=(format!("badge {}", row.rental.status)) { (row.rental.status) }
                        }
                        td class="actions" {
                            @if row.rental.status.is_active() {
                                form action=(format!("/rentals/{}/close", row.rental.id)) method="post" {
                                    button type="submit" { "Close" }
                                }
                            }
                            form action=(format!("/rentals/{}/delete", row.rental.id))
                                method="post"
                                onsubmit="return confirm('Delete rental?');" {
                                button type="submit" class="danger" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn data_controls() -> Markup {
    html! {
        div class="data-links" {
            a href="/export" { "Download ledger (JSON)" }
            a href="/export/rentals.xlsx" { "Download rentals report (XLSX)" }
        }

        form action="/import" method="post" class="import-form" {
            label for="document" { "Import a previously exported ledger (replaces everything):" }
            textarea id="document" name="document" rows="6"
                placeholder="{ \"equipments\": [...], \"rentals\": [...] }" {}
            button type="submit" { "Import" }
        }

        form action="/clear" method="post"
            onsubmit="return confirm('Delete ALL equipment and rentals?');" {
            button type="submit" class="danger" { "Clear everything" }
        }
    }
}
