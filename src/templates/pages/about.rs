// templates/pages/about.rs

use crate::navigation::MenuItem;
use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

const ABOUT_PARAGRAPHS: [&str; 6] = [
    "As an Airbnb host or potential host, you may have wondered about the factors that affect \
     rental prices and occupancy rates on the platform. By analyzing Airbnb data, we can gain \
     insights into these trends and make data-driven decisions to maximize your earning potential. \
     One key aspect to consider is the location of your property. By examining data from different \
     neighborhoods or cities, we can determine which areas have higher demand and corresponding \
     higher prices. For example, properties near popular tourist attractions, city centers, or major \
     transportation hubs tend to have higher occupancy rates and rental prices.",
    "Another factor that influences rental prices is the type of property you offer. By analyzing \
     data on different accommodation types, such as entire homes, private rooms, or shared spaces, \
     you can identify which options are in higher demand and can potentially fetch higher prices. \
     Understanding the preferences of Airbnb users can guide your decision-making and help you \
     optimize your listing.",
    "Additionally, analyzing historical booking data can provide insights into seasonal demand \
     patterns. By examining trends across different months or even specific events or holidays, \
     you can determine the optimal time to list your property and adjust prices accordingly. This \
     can help maximize your rental income and achieve higher occupancy rates throughout the year.",
    "Moreover, guest reviews play a crucial role in attracting potential guests. Analyzing review \
     data can provide insights into the factors that contribute to positive guest experiences, such \
     as cleanliness, responsiveness, and amenities. Understanding these preferences can help you \
     improve your listing and enhance guest satisfaction, leading to positive reviews and increased \
     bookings.",
    "Lastly, analyzing data on similar listings in your area can help you set competitive prices. \
     By examining the rental prices and occupancy rates of comparable properties, you can ensure \
     that your listing is competitive and attractive to potential guests.",
    "In conclusion, analyzing Airbnb data can provide valuable insights into various factors that \
     affect rental prices and occupancy rates. By leveraging this data, hosts can make informed \
     decisions to optimize their listings, maximize earning potential, and provide exceptional \
     guest experiences.",
];

pub fn about_page() -> Markup {
    desktop_layout(
        MenuItem::About,
        html! {
            h1 class="accent-red" { "Project Title: Airbnb Analysis" }

            (card("Technologies used:", html! {
                h3 {
                    "Python scripting, Data Preprocessing, Visualization, EDA, Streamlit, MongoDB, \
                     PowerBI or Tableau"
                }
            }))

            (card("Domain:", html! {
                h3 { "Travel Industry, Property Management, and Tourism" }
            }))

            h1 class="accent-red" { "About Application:" }
            @for paragraph in ABOUT_PARAGRAPHS {
                p { (paragraph) }
            }
        },
    )
}
