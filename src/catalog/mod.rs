//! Static hotel catalog: seed departments, job positions and their categories.

pub mod category;
pub mod departments;
pub mod positions;

pub use category::{CATEGORY_RULES, Category, categorize};
pub use departments::{COMMON_DEPARTMENTS, DepartmentTemplate};
pub use positions::{POSITIONS, Position};

use serde::Serialize;

/// Position as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionView {
    pub name: String,
    pub description: String,
    pub category: Category,
}

/// Read-only view over the built-in position list.
#[derive(Debug, Clone, Copy)]
pub struct PositionCatalog {
    positions: &'static [Position],
}

impl Default for PositionCatalog {
    fn default() -> Self {
        Self::new(POSITIONS)
    }
}

impl PositionCatalog {
    /// Create a catalog over a fixed position list.
    pub fn new(positions: &'static [Position]) -> Self {
        Self { positions }
    }

    /// All positions, in catalog order.
    pub fn list_all(&self) -> Vec<PositionView> {
        self.positions.iter().map(|p| self.view(p)).collect()
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A missing or blank query returns the full list. Matches keep catalog order.
    pub fn search(&self, query: Option<&str>) -> Vec<PositionView> {
        let query = match query {
            Some(q) if !q.trim().is_empty() => q.to_lowercase(),
            _ => return self.list_all(),
        };

        self.positions
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .map(|p| self.view(p))
            .collect()
    }

    /// Positions belonging to one category, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<PositionView> {
        self.positions
            .iter()
            .filter(|p| self.categorize(p) == category)
            .map(|p| self.view(p))
            .collect()
    }

    /// Category of a position, derived from its identifier.
    pub fn categorize(&self, position: &Position) -> Category {
        categorize(position.identifier)
    }

    fn view(&self, position: &Position) -> PositionView {
        PositionView {
            name: position.name.to_string(),
            description: position.description.to_string(),
            category: self.categorize(position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PositionCatalog {
        PositionCatalog::default()
    }

    #[test]
    fn test_list_all_matches_source_order() {
        let views = catalog().list_all();
        assert_eq!(views.len(), POSITIONS.len());
        for (view, position) in views.iter().zip(POSITIONS) {
            assert_eq!(view.name, position.name);
            assert_eq!(view.description, position.description);
        }
    }

    #[test]
    fn test_blank_queries_return_everything() {
        let all = catalog().list_all();
        assert_eq!(catalog().search(None), all);
        assert_eq!(catalog().search(Some("")), all);
        assert_eq!(catalog().search(Some("   ")), all);
        assert_eq!(catalog().search(Some("\t\n")), all);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = catalog().search(Some("concierge"));
        let upper = catalog().search(Some("CONCIERGE"));
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_matches_description() {
        // "luggage" appears only in descriptions.
        let results = catalog().search(Some("Luggage"));
        let names: Vec<&str> = results.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Bell Captain", "Bell Attendant"]);
    }

    #[test]
    fn test_search_results_are_ordered_subset() {
        for query in ["chef", "manager", "room", "GUEST", "a"] {
            let all = catalog().list_all();
            let results = catalog().search(Some(query));
            let needle = query.to_lowercase();

            for view in &results {
                assert!(
                    view.name.to_lowercase().contains(&needle)
                        || view.description.to_lowercase().contains(&needle)
                );
            }

            let expected: Vec<PositionView> = all
                .into_iter()
                .filter(|v| {
                    v.name.to_lowercase().contains(&needle)
                        || v.description.to_lowercase().contains(&needle)
                })
                .collect();
            assert_eq!(results, expected, "query {query}");
        }
    }

    #[test]
    fn test_search_no_match() {
        assert!(catalog().search(Some("astronaut")).is_empty());
    }

    #[test]
    fn test_search_keeps_inner_whitespace() {
        let results = catalog().search(Some("front desk"));
        assert!(results.iter().any(|v| v.name == "Front Desk Agent"));
        assert!(catalog().search(Some("frontdesk")).is_empty());
    }

    #[test]
    fn test_views_carry_category() {
        let views = catalog().list_all();
        let find = |name: &str| views.iter().find(|v| v.name == name).unwrap().category;
        assert_eq!(find("Food & Beverage Manager"), Category::FoodAndBeverage);
        assert_eq!(find("Front Desk Agent"), Category::FrontOffice);
        assert_eq!(find("Valet Attendant"), Category::Concierge);
        assert_eq!(find("Room Attendant"), Category::Housekeeping);
        assert_eq!(find("General Manager"), Category::Other);
        assert_eq!(find("Executive Chef"), Category::Other);
    }

    #[test]
    fn test_by_category_partitions_catalog() {
        let total: usize = Category::ALL
            .into_iter()
            .map(|c| catalog().by_category(c).len())
            .sum();
        assert_eq!(total, POSITIONS.len());

        for view in catalog().by_category(Category::Concierge) {
            assert_eq!(view.category, Category::Concierge);
        }
    }

    #[test]
    fn test_every_category_represented() {
        for category in Category::ALL {
            assert!(!catalog().by_category(category).is_empty(), "{category}");
        }
    }

    #[test]
    fn test_custom_position_list() {
        static ONLY: &[Position] = &[Position {
            identifier: "BAR_BACK",
            name: "Bar Back",
            description: "Restocks the bar",
        }];
        let catalog = PositionCatalog::new(ONLY);
        let views = catalog.list_all();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].category, Category::FoodAndBeverage);
    }

    #[test]
    fn test_view_serializes() {
        let view = catalog().search(Some("doorman")).remove(0);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Doorman");
        assert_eq!(json["category"], "Concierge");
    }
}
