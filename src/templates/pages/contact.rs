use crate::navigation::MenuItem;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const CONTACT_NAME: &str = "Divahar Murugan";
pub const CONTACT_EMAIL: &str = "divahar2896@gmail.com";

pub fn contact_page() -> Markup {
    desktop_layout(
        MenuItem::Contact,
        html! {
            h3 { "Contact Information" }
            p { "Name: " (CONTACT_NAME) }
            p { "Email: " a href=(format!("mailto:{CONTACT_EMAIL}")) { (CONTACT_EMAIL) } }
        },
    )
}
