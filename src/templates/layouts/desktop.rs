use crate::navigation::MenuItem;
use crate::templates::components::icons::{item_icon, menu_icon};
use maud::{html, Markup, DOCTYPE};

pub const PAGE_TITLE: &str = "Airbnb Analysis";

pub fn option_menu(selected: MenuItem) -> Markup {
    html! {
        nav class="option-menu" {
            div class="menu-title" {
                (menu_icon())
                span { "Menu" }
            }
            ul {
                @for item in MenuItem::ALL {
                    li {
                        a
                            href=(item.href())
                            class=(if item == selected { "nav-link nav-link-selected" } else { "nav-link" })
                            aria-current=[(item == selected).then_some("page")]
                        {
                            (item_icon(item))
                            span { (item.label()) }
                        }
                    }
                }
            }
        }
    }
}

pub fn desktop_layout(selected: MenuItem, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="wide" {
                header {
                    (option_menu(selected))
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
