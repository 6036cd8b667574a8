//! Fixture catalog
//!
//! The fixed collections the read-only API endpoints serve. Every function
//! returns the same literal data on every call: there is no store behind
//! the catalog and no way to mutate it through the API.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::types::{
    Appointment, AppointmentKind, AppointmentStatus, Client, ClientStatus, DietPlan,
    DietPlanStatus, Food, Macros, Recipe, RecipeIngredient, Report, User, UserRole,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// All clients in the roster
pub fn clients() -> Vec<Client> {
    vec![
        Client {
            client_id: "cli_001".to_string(),
            full_name: "Marta Oliveira".to_string(),
            email: "marta.oliveira@example.com".to_string(),
            phone: "+351 912 000 101".to_string(),
            birth_date: date(1988, 4, 12),
            goal: "Lose 6kg before the summer".to_string(),
            status: ClientStatus::Active,
            created_at: datetime(2024, 1, 8, 9, 30),
        },
        Client {
            client_id: "cli_002".to_string(),
            full_name: "João Ferreira".to_string(),
            email: "joao.ferreira@example.com".to_string(),
            phone: "+351 912 000 102".to_string(),
            birth_date: date(1975, 11, 2),
            goal: "Manage type 2 diabetes through diet".to_string(),
            status: ClientStatus::Active,
            created_at: datetime(2024, 2, 19, 14, 0),
        },
        Client {
            client_id: "cli_003".to_string(),
            full_name: "Ana Costa".to_string(),
            email: "ana.costa@example.com".to_string(),
            phone: "+351 912 000 103".to_string(),
            birth_date: date(1996, 7, 23),
            goal: "Gain lean mass, 3 gym sessions per week".to_string(),
            status: ClientStatus::Paused,
            created_at: datetime(2024, 3, 4, 11, 15),
        },
        Client {
            client_id: "cli_004".to_string(),
            full_name: "Rui Santos".to_string(),
            email: "rui.santos@example.com".to_string(),
            phone: "+351 912 000 104".to_string(),
            birth_date: date(1969, 1, 30),
            goal: "Lower cholesterol, reduce red meat".to_string(),
            status: ClientStatus::Archived,
            created_at: datetime(2023, 10, 12, 16, 45),
        },
    ]
}

/// Look up a client by id
pub fn client(client_id: &str) -> Option<Client> {
    clients().into_iter().find(|c| c.client_id == client_id)
}

/// All appointments across clients
pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            appointment_id: "apt_001".to_string(),
            client_id: "cli_001".to_string(),
            scheduled_at: datetime(2024, 5, 6, 10, 0),
            duration_minutes: 60,
            kind: AppointmentKind::Initial,
            status: AppointmentStatus::Completed,
            note: Some("Full anamnesis taken, bloodwork requested".to_string()),
        },
        Appointment {
            appointment_id: "apt_002".to_string(),
            client_id: "cli_001".to_string(),
            scheduled_at: datetime(2024, 6, 3, 10, 0),
            duration_minutes: 30,
            kind: AppointmentKind::FollowUp,
            status: AppointmentStatus::Scheduled,
            note: None,
        },
        Appointment {
            appointment_id: "apt_003".to_string(),
            client_id: "cli_002".to_string(),
            scheduled_at: datetime(2024, 5, 9, 15, 30),
            duration_minutes: 45,
            kind: AppointmentKind::Initial,
            status: AppointmentStatus::Completed,
            note: Some("HbA1c 7.2, carb distribution plan discussed".to_string()),
        },
        Appointment {
            appointment_id: "apt_004".to_string(),
            client_id: "cli_002".to_string(),
            scheduled_at: datetime(2024, 6, 10, 15, 30),
            duration_minutes: 30,
            kind: AppointmentKind::Review,
            status: AppointmentStatus::Scheduled,
            note: None,
        },
        Appointment {
            appointment_id: "apt_005".to_string(),
            client_id: "cli_003".to_string(),
            scheduled_at: datetime(2024, 4, 22, 18, 0),
            duration_minutes: 60,
            kind: AppointmentKind::Initial,
            status: AppointmentStatus::Cancelled,
            note: Some("Client rescheduling after travel".to_string()),
        },
    ]
}

/// Look up an appointment by id
pub fn appointment(appointment_id: &str) -> Option<Appointment> {
    appointments()
        .into_iter()
        .find(|a| a.appointment_id == appointment_id)
}

/// Appointments for one client
pub fn appointments_for_client(client_id: &str) -> Vec<Appointment> {
    appointments()
        .into_iter()
        .filter(|a| a.client_id == client_id)
        .collect()
}

/// All diet plans
pub fn diet_plans() -> Vec<DietPlan> {
    vec![
        DietPlan {
            plan_id: "pln_001".to_string(),
            client_id: "cli_001".to_string(),
            title: "Hypocaloric Mediterranean".to_string(),
            calories_per_day: 1600,
            macros: Macros {
                protein_g: 110,
                carbs_g: 150,
                fat_g: 55,
            },
            starts_on: date(2024, 5, 6),
            ends_on: Some(date(2024, 8, 5)),
            status: DietPlanStatus::Active,
        },
        DietPlan {
            plan_id: "pln_002".to_string(),
            client_id: "cli_002".to_string(),
            title: "Low glycemic index maintenance".to_string(),
            calories_per_day: 2000,
            macros: Macros {
                protein_g: 120,
                carbs_g: 180,
                fat_g: 70,
            },
            starts_on: date(2024, 5, 13),
            ends_on: None,
            status: DietPlanStatus::Active,
        },
        DietPlan {
            plan_id: "pln_003".to_string(),
            client_id: "cli_003".to_string(),
            title: "Lean bulk 3-day split".to_string(),
            calories_per_day: 2600,
            macros: Macros {
                protein_g: 160,
                carbs_g: 300,
                fat_g: 75,
            },
            starts_on: date(2024, 4, 29),
            ends_on: Some(date(2024, 7, 29)),
            status: DietPlanStatus::Draft,
        },
    ]
}

/// Look up a diet plan by id
pub fn diet_plan(plan_id: &str) -> Option<DietPlan> {
    diet_plans().into_iter().find(|p| p.plan_id == plan_id)
}

/// Diet plans for one client
pub fn diet_plans_for_client(client_id: &str) -> Vec<DietPlan> {
    diet_plans()
        .into_iter()
        .filter(|p| p.client_id == client_id)
        .collect()
}

/// Food reference table, values per 100g
pub fn foods() -> Vec<Food> {
    vec![
        Food {
            food_id: "food_001".to_string(),
            name: "Chicken breast, grilled".to_string(),
            category: "protein".to_string(),
            kcal_per_100g: 165,
            protein_g_per_100g: 31.0,
            carbs_g_per_100g: 0.0,
            fat_g_per_100g: 3.6,
        },
        Food {
            food_id: "food_002".to_string(),
            name: "Brown rice, cooked".to_string(),
            category: "grain".to_string(),
            kcal_per_100g: 112,
            protein_g_per_100g: 2.6,
            carbs_g_per_100g: 23.5,
            fat_g_per_100g: 0.9,
        },
        Food {
            food_id: "food_003".to_string(),
            name: "Broccoli, steamed".to_string(),
            category: "vegetable".to_string(),
            kcal_per_100g: 35,
            protein_g_per_100g: 2.4,
            carbs_g_per_100g: 7.2,
            fat_g_per_100g: 0.4,
        },
        Food {
            food_id: "food_004".to_string(),
            name: "Olive oil, extra virgin".to_string(),
            category: "fat".to_string(),
            kcal_per_100g: 884,
            protein_g_per_100g: 0.0,
            carbs_g_per_100g: 0.0,
            fat_g_per_100g: 100.0,
        },
        Food {
            food_id: "food_005".to_string(),
            name: "Greek yogurt, plain 2%".to_string(),
            category: "dairy".to_string(),
            kcal_per_100g: 73,
            protein_g_per_100g: 9.9,
            carbs_g_per_100g: 3.9,
            fat_g_per_100g: 1.9,
        },
        Food {
            food_id: "food_006".to_string(),
            name: "Salmon fillet, baked".to_string(),
            category: "protein".to_string(),
            kcal_per_100g: 206,
            protein_g_per_100g: 22.0,
            carbs_g_per_100g: 0.0,
            fat_g_per_100g: 12.0,
        },
    ]
}

/// Look up a food by id
pub fn food(food_id: &str) -> Option<Food> {
    foods().into_iter().find(|f| f.food_id == food_id)
}

/// All recipes
pub fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            recipe_id: "rcp_001".to_string(),
            name: "Chicken and rice bowl".to_string(),
            servings: 2,
            kcal_per_serving: 420,
            ingredients: vec![
                RecipeIngredient {
                    food_id: "food_001".to_string(),
                    grams: 300,
                },
                RecipeIngredient {
                    food_id: "food_002".to_string(),
                    grams: 250,
                },
                RecipeIngredient {
                    food_id: "food_003".to_string(),
                    grams: 200,
                },
                RecipeIngredient {
                    food_id: "food_004".to_string(),
                    grams: 15,
                },
            ],
        },
        Recipe {
            recipe_id: "rcp_002".to_string(),
            name: "Baked salmon with greens".to_string(),
            servings: 1,
            kcal_per_serving: 510,
            ingredients: vec![
                RecipeIngredient {
                    food_id: "food_006".to_string(),
                    grams: 180,
                },
                RecipeIngredient {
                    food_id: "food_003".to_string(),
                    grams: 150,
                },
                RecipeIngredient {
                    food_id: "food_004".to_string(),
                    grams: 10,
                },
            ],
        },
        Recipe {
            recipe_id: "rcp_003".to_string(),
            name: "Protein yogurt snack".to_string(),
            servings: 1,
            kcal_per_serving: 150,
            ingredients: vec![RecipeIngredient {
                food_id: "food_005".to_string(),
                grams: 200,
            }],
        },
    ]
}

/// Look up a recipe by id
pub fn recipe(recipe_id: &str) -> Option<Recipe> {
    recipes().into_iter().find(|r| r.recipe_id == recipe_id)
}

/// All progress reports
pub fn reports() -> Vec<Report> {
    vec![
        Report {
            report_id: "rpt_001".to_string(),
            client_id: "cli_001".to_string(),
            period_start: date(2024, 5, 6),
            period_end: date(2024, 6, 2),
            weight_change_kg: -1.8,
            adherence_pct: 86,
            generated_at: datetime(2024, 6, 3, 8, 0),
        },
        Report {
            report_id: "rpt_002".to_string(),
            client_id: "cli_002".to_string(),
            period_start: date(2024, 5, 13),
            period_end: date(2024, 6, 9),
            weight_change_kg: -0.6,
            adherence_pct: 92,
            generated_at: datetime(2024, 6, 10, 8, 0),
        },
        Report {
            report_id: "rpt_003".to_string(),
            client_id: "cli_001".to_string(),
            period_start: date(2024, 6, 3),
            period_end: date(2024, 6, 30),
            weight_change_kg: -1.1,
            adherence_pct: 78,
            generated_at: datetime(2024, 7, 1, 8, 0),
        },
    ]
}

/// Look up a report by id
pub fn report(report_id: &str) -> Option<Report> {
    reports().into_iter().find(|r| r.report_id == report_id)
}

/// Reports for one client
pub fn reports_for_client(client_id: &str) -> Vec<Report> {
    reports()
        .into_iter()
        .filter(|r| r.client_id == client_id)
        .collect()
}

/// Dashboard user accounts
pub fn users() -> Vec<User> {
    vec![
        User {
            user_id: "usr_001".to_string(),
            name: "Dra. Inês Almeida".to_string(),
            email: "ines.almeida@nutriplan.example".to_string(),
            role: UserRole::Dietitian,
            active: true,
        },
        User {
            user_id: "usr_002".to_string(),
            name: "Pedro Lima".to_string(),
            email: "pedro.lima@nutriplan.example".to_string(),
            role: UserRole::Assistant,
            active: true,
        },
        User {
            user_id: "usr_003".to_string(),
            name: "Clínica Admin".to_string(),
            email: "admin@nutriplan.example".to_string(),
            role: UserRole::Admin,
            active: false,
        },
    ]
}

/// Look up a user by id
pub fn user(user_id: &str) -> Option<User> {
    users().into_iter().find(|u| u.user_id == user_id)
}
