use crate::domain::Equipment;
use crate::templates::{card, desktop_layout};
use maud::{html, Markup};

pub fn edit_equipment_page(equipment: &Equipment) -> Markup {
    desktop_layout(
        "Edit equipment",
        html! {
            main class="container narrow" {
                h1 { "Edit equipment" }

                (card(&equipment.label(), html! {
                    form action=(format!("/equipments/{}/edit", equipment.id)) method="post" class="row-form" {
                        label { "Type"
                            input type="text" name="type" value=(equipment.equipment_type) required;
                        }
                        label { "Model"
                            input type="text" name="model" value=(equipment.model) required;
                        }
                        label { "Serial"
                            input type="text" name="serial" value=(equipment.serial) required;
                        }
                        label { "Daily rate ($)"
                            input type="text" name="dailyRate" inputmode="decimal"
                                value=(format!("{:.2}", equipment.daily_rate));
                        }
                        button type="submit" { "Save" }
                        a href="/" class="cancel" { "Cancel" }
                    }

                    p class="muted" {
                        "Changing the rate does not touch existing rentals; their totals were frozen when they were created."
                    }
                }))
            }
        },
    )
}
