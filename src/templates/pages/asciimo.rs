use maud::{html, Markup};

pub fn asciimo_page() -> Markup {
    let link = "http://i.imgur.com/kmbjB.png";
    html! {
        html {
            body {
                img src=(link);
            }
        }
    }
}
