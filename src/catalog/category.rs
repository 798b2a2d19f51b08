//! Position categories derived from identifier prefixes.

use serde::{Serialize, Serializer};
use std::fmt;

/// Coarse organizational grouping of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodAndBeverage,
    Housekeeping,
    FrontOffice,
    Concierge,
    Other,
}

impl Category {
    /// All categories, in rule evaluation order with the fallback last.
    pub const ALL: [Category; 5] = [
        Category::FoodAndBeverage,
        Category::Housekeeping,
        Category::FrontOffice,
        Category::Concierge,
        Category::Other,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::FoodAndBeverage => "Food & Beverage",
            Category::Housekeeping => "Housekeeping",
            Category::FrontOffice => "Front Office",
            Category::Concierge => "Concierge",
            Category::Other => "Other",
        }
    }

    /// Parse a label back into a category (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A prefix group mapped to the category it assigns.
pub type CategoryRule = (&'static [&'static str], Category);

/// Ordered prefix rules. Evaluated top to bottom, first match wins.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    (
        &[
            "FOOD_",
            "ASSISTANT_FB",
            "OUTLET_",
            "BANQUET_",
            "BAR_",
            "ROOM_SERVICE",
            "RESTAURANT_",
        ],
        Category::FoodAndBeverage,
    ),
    (
        &[
            "EXECUTIVE_HOUSEKEEPER",
            "ASSISTANT_EXECUTIVE_HOUSEKEEPER",
            "HOUSEKEEPING_",
            "PUBLIC_AREA",
            "LINEN_",
            "NIGHT_SUPERVISOR",
            "ROOM_ATTENDANT",
            "LAUNDRY_",
            "TURNDOWN_",
            "UNIFORM_",
            "TAILOR",
        ],
        Category::Housekeeping,
    ),
    (
        &[
            "FRONT_OFFICE",
            "FRONT_DESK",
            "GUEST_RELATIONS",
            "RECEPTIONIST",
            "TELEPHONE_",
            "CASHIER",
            "NIGHT_AUDITOR",
        ],
        Category::FrontOffice,
    ),
    (
        &[
            "CHIEF_CONCIERGE",
            "ASSISTANT_CHIEF_CONCIERGE",
            "CONCIERGE_",
            "BELL_",
            "DOORMAN",
            "VALET_",
        ],
        Category::Concierge,
    ),
];

/// Categorize a position identifier with the built-in rules.
pub fn categorize(identifier: &str) -> Category {
    categorize_with(CATEGORY_RULES, identifier)
}

/// Categorize an identifier against an arbitrary ordered rule table.
///
/// Returns [`Category::Other`] when no prefix matches.
pub fn categorize_with(rules: &[CategoryRule], identifier: &str) -> Category {
    rules
        .iter()
        .find(|(prefixes, _)| prefixes.iter().any(|prefix| identifier.starts_with(prefix)))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Other)
}
