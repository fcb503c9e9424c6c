use crate::models::{Course, Menu};

const PLATE: &str = r#"
                      ___
         ||||     .-"`   `"-.     / |  __
    |||| ||||   .'  .-'`'-.  '.   | | /  \
    |||| \  /  /  .'       '.  \  | | ;();
    \  /  ||  /  ;           ;  \  \| \  /
     ||   ||  | ;             ; |  ||  ||
     %%   %%  | ;             ; |  %%  %%
     %%   %%  \  ;           ;  /  %%  %%
     %%   %%   \  '.       .'  /   %%  %%
     %%   %%    '.  `-.,.-'  .'    %%  %%
     %%   %%      '-.,___,.-'      %%  %%

     ======= PLAT DU JOUR, OLA-LA! ======
"#;

/// Render a menu as the plate banner followed by its three labelled slots.
pub fn format_menu(menu: &Menu) -> String {
    let width = Course::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from(PLATE);
    for course in Course::ALL {
        out.push_str(&format!(
            "             {:<width$} : {}\n",
            course.label(),
            menu.item(course),
            width = width
        ));
    }
    out
}

/// Render one day's block with its "Day N Menu" header. Days are 1-based.
pub fn format_day(day: usize, menu: &Menu) -> String {
    format!("=== Day {} Menu ===\n{}", day, format_menu(menu))
}

/// Print every menu in order, one block per day.
pub fn display_menus(menus: &[Menu]) {
    if menus.is_empty() {
        println!("No menus generated.");
        return;
    }

    for (i, menu) in menus.iter().enumerate() {
        println!("{}", format_day(i + 1, menu));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_menu_slots() {
        let text = format_menu(&Menu::new("fish", "rice", "none"));
        assert!(text.contains("PLAT DU JOUR"));
        assert!(text.contains("Main course : fish"));
        assert!(text.contains("Side dish   : rice"));
        assert!(text.contains("Snacks      : none"));
    }

    #[test]
    fn test_format_day_header() {
        let text = format_day(3, &Menu::new("beef", "vegs", "bread"));
        assert!(text.starts_with("=== Day 3 Menu ==="));
        assert!(text.contains("Main course : beef"));
    }
}
