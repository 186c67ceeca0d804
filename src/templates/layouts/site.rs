use maud::{html, Markup, DOCTYPE};

/// Pinned htmx release and its subresource integrity hash.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.10";
pub const HTMX_INTEGRITY: &str =
    "sha384-D1Kt99CQMDuVetoL1lrYwg5t+9QdHe7NLX/SoJYkXDFfX37iInKRy5xLSi8nO7UC";

pub fn site_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | The Real Estate Universe" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) integrity=(HTMX_INTEGRITY) crossorigin="anonymous" {}
            }
            body class="bg-[#1A1A1A] text-white" {
                (content)
            }
        }
    }
}
