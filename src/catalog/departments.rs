//! Built-in common hotel departments used as seed data.

/// A department definition to be created in the store if absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentTemplate {
    pub name: &'static str,
    pub code: &'static str,
    pub description: &'static str,
}

/// Common departments, in seeding order.
pub const COMMON_DEPARTMENTS: &[DepartmentTemplate] = &[
    DepartmentTemplate {
        name: "Executive Office",
        code: "EXEC",
        description: "General management and executive leadership",
    },
    DepartmentTemplate {
        name: "Front Office",
        code: "FO",
        description: "Reception, reservations, guest relations and night audit",
    },
    DepartmentTemplate {
        name: "Concierge",
        code: "CON",
        description: "Concierge desk, bell service, doormen and valet",
    },
    DepartmentTemplate {
        name: "Housekeeping",
        code: "HK",
        description: "Guest rooms, public areas, linen and laundry",
    },
    DepartmentTemplate {
        name: "Food & Beverage",
        code: "FB",
        description: "Restaurants, bars, banquets and room service",
    },
    DepartmentTemplate {
        name: "Kitchen",
        code: "KIT",
        description: "Food production and stewarding",
    },
    DepartmentTemplate {
        name: "Engineering",
        code: "ENG",
        description: "Building maintenance and technical services",
    },
    DepartmentTemplate {
        name: "Security",
        code: "SEC",
        description: "Safety and security of guests, staff and property",
    },
    DepartmentTemplate {
        name: "Human Resources",
        code: "HR",
        description: "Recruitment, training and employee relations",
    },
    DepartmentTemplate {
        name: "Finance",
        code: "FIN",
        description: "Accounting, purchasing and cost control",
    },
    DepartmentTemplate {
        name: "Sales & Marketing",
        code: "SM",
        description: "Sales, revenue management and marketing",
    },
    DepartmentTemplate {
        name: "Spa & Recreation",
        code: "SPA",
        description: "Spa, fitness center and pool",
    },
    DepartmentTemplate {
        name: "Information Technology",
        code: "IT",
        description: "Hotel systems, network and guest connectivity",
    },
];
