use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const SAMPLE_CSS: &str = include_str!("sample.css");

// A stand-in for a server-rendered records page: toggle control in the
// top bar, a burst of flash banners underneath.
pub fn build_page() -> String {
    let markup: Markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Student records" }
                style { (PreEscaped(SAMPLE_CSS)) }
            }
            body {
                header class="topbar" {
                    h1 { "Student records" }
                    button type="button" id="theme-toggle" class="btn" { "🌙" }
                }
                div class="flash flash-success" { "Record saved" }
                div class="flash flash-error" { "Session expires in 5 minutes" }
                div class="flash flash-success" { "2 documents uploaded" }
                main class="content" {
                    p { "Server-rendered content goes here." }
                }
            }
        }
    };
    markup.into_string()
}
