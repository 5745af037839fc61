//! Display types for UI components
//!
//! Small derived values the views compute from core records before
//! rendering. Kept free of Dioxus types so they can be tested directly.

/// One category chip as rendered
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipState {
    pub label: String,
    pub selected: bool,
}

/// Build chip states for a category list with `selected` highlighted.
///
/// An out-of-range index selects nothing. Screens start at index 0, so the
/// first chip is the only selected one on initial render.
pub fn chip_states(categories: &[String], selected: usize) -> Vec<ChipState> {
    categories
        .iter()
        .enumerate()
        .map(|(index, label)| ChipState {
            label: label.clone(),
            selected: index == selected,
        })
        .collect()
}

/// Heading over the menu list.
///
/// The list always shows every item, so the heading names the first category
/// no matter which chip is highlighted.
pub fn menu_heading(categories: &[String]) -> String {
    categories
        .first()
        .cloned()
        .unwrap_or_else(|| "Menu".to_string())
}

/// Dietary marker next to a menu item name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DietMarker {
    Veg,
    NonVeg,
}

impl DietMarker {
    pub fn from_is_veg(is_veg: bool) -> Self {
        if is_veg {
            DietMarker::Veg
        } else {
            DietMarker::NonVeg
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DietMarker::Veg => "Vegetarian",
            DietMarker::NonVeg => "Non-vegetarian",
        }
    }

    /// Square outline classes
    pub fn box_class(self) -> &'static str {
        match self {
            DietMarker::Veg => "border-green-600 bg-green-100",
            DietMarker::NonVeg => "border-red-600 bg-red-100",
        }
    }

    /// Center dot classes
    pub fn dot_class(self) -> &'static str {
        match self {
            DietMarker::Veg => "bg-green-600",
            DietMarker::NonVeg => "bg-red-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial_selection_is_first_chip_only() {
        for categories in [
            labels(&["Recommended", "Starters", "Main Course"]),
            labels(&["Only"]),
            labels(&["Dosa", "Dosa", "Beverages"]),
        ] {
            let chips = chip_states(&categories, 0);
            assert_eq!(chips.len(), categories.len());
            assert!(chips[0].selected);
            assert_eq!(chips.iter().filter(|c| c.selected).count(), 1);
        }
    }

    #[test]
    fn test_empty_categories_select_nothing() {
        assert!(chip_states(&[], 0).is_empty());
    }

    #[test]
    fn test_selection_moves() {
        let chips = chip_states(&labels(&["a", "b", "c"]), 2);
        let selected: Vec<&str> = chips
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(selected, vec!["c"]);
    }

    #[test]
    fn test_out_of_range_selects_nothing() {
        let chips = chip_states(&labels(&["a", "b"]), 5);
        assert!(chips.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_menu_heading_ignores_selection() {
        let categories = labels(&["Recommended", "Starters", "Main Course", "Biryani"]);
        let chips = chip_states(&categories, 3);
        assert!(chips[3].selected);
        assert_eq!(menu_heading(&categories), "Recommended");
    }

    #[test]
    fn test_menu_heading_without_categories() {
        assert_eq!(menu_heading(&[]), "Menu");
    }

    #[test]
    fn test_diet_marker() {
        assert_eq!(DietMarker::from_is_veg(true), DietMarker::Veg);
        assert_eq!(DietMarker::from_is_veg(false), DietMarker::NonVeg);
        assert_eq!(DietMarker::Veg.dot_class(), "bg-green-600");
        assert_eq!(DietMarker::NonVeg.label(), "Non-vegetarian");
    }
}
