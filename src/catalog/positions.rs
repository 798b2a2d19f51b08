//! Built-in hotel job positions.

/// A job position definition.
///
/// `identifier` is the uppercase, underscore-delimited token the position is
/// known by; categorization works on this token, not on the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub identifier: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const fn position(
    identifier: &'static str,
    name: &'static str,
    description: &'static str,
) -> Position {
    Position {
        identifier,
        name,
        description,
    }
}

/// Every position known to the hotel, in catalog order.
pub const POSITIONS: &[Position] = &[
    // Management
    position("GENERAL_MANAGER", "General Manager", "Leads overall hotel operations and strategy"),
    position("HOTEL_MANAGER", "Hotel Manager", "Oversees day-to-day operations across all departments"),
    position("DUTY_MANAGER", "Duty Manager", "Senior manager in charge during an assigned shift"),
    // Food & Beverage
    position("FOOD_AND_BEVERAGE_DIRECTOR", "Food & Beverage Director", "Directs all restaurants, bars and banqueting"),
    position(
        "FOOD_AND_BEVERAGE_MANAGER",
        "Food & Beverage Manager",
        "Manages food and beverage outlets and service standards",
    ),
    position("ASSISTANT_FB_MANAGER", "Assistant F&B Manager", "Supports the F&B manager in running the outlets"),
    position("OUTLET_MANAGER", "Outlet Manager", "Runs a single restaurant or bar outlet"),
    position("RESTAURANT_MANAGER", "Restaurant Manager", "Manages restaurant staff, service and guest satisfaction"),
    position("RESTAURANT_SUPERVISOR", "Restaurant Supervisor", "Supervises waiters and coordinates table service"),
    position("RESTAURANT_HOST", "Restaurant Host", "Greets diners and manages reservations and seating"),
    position("FOOD_RUNNER", "Food Runner", "Delivers dishes from the kitchen to the dining room"),
    position("BANQUET_MANAGER", "Banquet Manager", "Plans and runs banquets, weddings and conferences"),
    position("BANQUET_SERVER", "Banquet Server", "Serves guests at banquets and catered events"),
    position("BAR_MANAGER", "Bar Manager", "Manages bar operations, stock and beverage menus"),
    position("BAR_ATTENDANT", "Bar Attendant", "Prepares drinks and serves guests at the bar"),
    position("ROOM_SERVICE_MANAGER", "Room Service Manager", "Manages in-room dining operations"),
    position("ROOM_SERVICE_ATTENDANT", "Room Service Attendant", "Delivers food and beverage orders to guest rooms"),
    position("WAITER", "Waiter", "Takes orders and serves food and beverages to guests"),
    position("SOMMELIER", "Sommelier", "Advises guests on wine selection and pairing"),
    // Kitchen
    position("EXECUTIVE_CHEF", "Executive Chef", "Leads the kitchen brigade and designs menus"),
    position("SOUS_CHEF", "Sous Chef", "Second in command of the kitchen"),
    position("PASTRY_CHEF", "Pastry Chef", "Prepares desserts, pastries and baked goods"),
    position("STEWARD", "Steward", "Keeps the kitchen, dishes and equipment clean"),
    // Housekeeping
    position("EXECUTIVE_HOUSEKEEPER", "Executive Housekeeper", "Heads the housekeeping department"),
    position(
        "ASSISTANT_EXECUTIVE_HOUSEKEEPER",
        "Assistant Executive Housekeeper",
        "Deputizes for the executive housekeeper",
    ),
    position("HOUSEKEEPING_SUPERVISOR", "Housekeeping Supervisor", "Inspects rooms and supervises room attendants"),
    position(
        "HOUSEKEEPING_COORDINATOR",
        "Housekeeping Coordinator",
        "Dispatches housekeeping tasks and tracks room status",
    ),
    position("ROOM_ATTENDANT", "Room Attendant", "Cleans and prepares guest rooms"),
    position("PUBLIC_AREA_ATTENDANT", "Public Area Attendant", "Cleans lobbies, corridors and other public spaces"),
    position("LINEN_ROOM_ATTENDANT", "Linen Room Attendant", "Issues and tracks linen inventory"),
    position("LAUNDRY_ATTENDANT", "Laundry Attendant", "Washes and presses guest and hotel laundry"),
    position("TURNDOWN_ATTENDANT", "Turndown Attendant", "Provides evening turndown service to guest rooms"),
    position("NIGHT_SUPERVISOR", "Night Supervisor", "Supervises housekeeping during the night shift"),
    position("UNIFORM_ROOM_ATTENDANT", "Uniform Room Attendant", "Issues, collects and maintains staff uniforms"),
    position("TAILOR", "Tailor", "Alters and repairs uniforms and guest garments"),
    // Front Office
    position("FRONT_OFFICE_MANAGER", "Front Office Manager", "Manages reception, reservations and guest services"),
    position("FRONT_OFFICE_SUPERVISOR", "Front Office Supervisor", "Supervises front desk shifts"),
    position("FRONT_DESK_AGENT", "Front Desk Agent", "Checks guests in and out and handles requests"),
    position("GUEST_RELATIONS_OFFICER", "Guest Relations Officer", "Looks after VIP guests and handles complaints"),
    position("RECEPTIONIST", "Receptionist", "Welcomes guests and answers enquiries"),
    position("TELEPHONE_OPERATOR", "Telephone Operator", "Handles the switchboard and wake-up calls"),
    position("CASHIER", "Cashier", "Settles guest bills and handles foreign exchange"),
    position("NIGHT_AUDITOR", "Night Auditor", "Reconciles the day's transactions overnight"),
    position("RESERVATIONS_AGENT", "Reservations Agent", "Takes and manages room bookings"),
    // Concierge
    position("CHIEF_CONCIERGE", "Chief Concierge", "Leads the concierge team and guest experience desk"),
    position("ASSISTANT_CHIEF_CONCIERGE", "Assistant Chief Concierge", "Supports the chief concierge"),
    position("CONCIERGE_AGENT", "Concierge Agent", "Arranges tours, tickets and transport for guests"),
    position("BELL_CAPTAIN", "Bell Captain", "Supervises bell staff and luggage handling"),
    position("BELL_ATTENDANT", "Bell Attendant", "Carries luggage and escorts guests to their rooms"),
    position("DOORMAN", "Doorman", "Greets arriving guests at the hotel entrance"),
    position("VALET_ATTENDANT", "Valet Attendant", "Parks and retrieves guest vehicles"),
    // Support functions
    position(
        "HUMAN_RESOURCES_MANAGER",
        "Human Resources Manager",
        "Leads recruitment, training and employee relations",
    ),
    position("TRAINING_COORDINATOR", "Training Coordinator", "Organizes staff onboarding and training programs"),
    position("FINANCIAL_CONTROLLER", "Financial Controller", "Oversees accounting, budgeting and reporting"),
    position("CHIEF_ENGINEER", "Chief Engineer", "Manages building maintenance and technical systems"),
    position("MAINTENANCE_TECHNICIAN", "Maintenance Technician", "Repairs and maintains hotel equipment"),
    position("SECURITY_OFFICER", "Security Officer", "Protects guests, staff and property"),
    position("SALES_MANAGER", "Sales Manager", "Develops corporate and group business"),
    position("SPA_THERAPIST", "Spa Therapist", "Provides massages and wellness treatments"),
    position("IT_MANAGER", "IT Manager", "Maintains hotel systems, network and guest Wi-Fi"),
];
