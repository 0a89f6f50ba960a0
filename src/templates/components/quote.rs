use crate::domain::Quote;
use maud::{html, Markup};

/// Live rental price preview, swapped into the rental form by htmx whenever
/// the equipment or either date changes.
pub fn quote_box(quote: Option<Quote>) -> Markup {
    html! {
        @match quote {
            Some(q) => p class="quote" {
                "Estimated total: "
                strong { "$" (format!("{:.2}", q.total)) }
                " for " (q.days) @if q.days == 1 { " day" } @else { " days" }
            },
            None => p class="quote muted" { "Pick an equipment and both dates to see the total." },
        }
    }
}
