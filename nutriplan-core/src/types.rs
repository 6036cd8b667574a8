//! Domain types for the NutriPlan backend

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Client status in the dietitian's roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientStatus {
    Active,
    Paused,
    Archived,
}

impl Default for ClientStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A client managed by a dietitian
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub client_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    /// Free-text goal as entered by the dietitian
    pub goal: String,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

/// Appointment kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
    Initial,
    FollowUp,
    Review,
}

/// Appointment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A consultation slot between a dietitian and a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub client_id: String,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: u32,
    pub kind: AppointmentKind,
    pub status: AppointmentStatus,
    pub note: Option<String>,
}

/// Macronutrient breakdown in grams per day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Diet plan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietPlanStatus {
    Draft,
    Active,
    Ended,
}

/// A diet plan assigned to a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlan {
    pub plan_id: String,
    pub client_id: String,
    pub title: String,
    pub calories_per_day: u32,
    pub macros: Macros,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub status: DietPlanStatus,
}

/// A food reference entry, nutrition values per 100g
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub food_id: String,
    pub name: String,
    pub category: String,
    pub kcal_per_100g: u32,
    pub protein_g_per_100g: f64,
    pub carbs_g_per_100g: f64,
    pub fat_g_per_100g: f64,
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub food_id: String,
    pub grams: u32,
}

/// A recipe built from catalog foods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_id: String,
    pub name: String,
    pub servings: u32,
    pub kcal_per_serving: u32,
    pub ingredients: Vec<RecipeIngredient>,
}

/// A progress report over a tracking period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_id: String,
    pub client_id: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub weight_change_kg: f64,
    /// Plan adherence over the period, 0-100
    pub adherence_pct: u32,
    pub generated_at: DateTime<Utc>,
}

/// Dashboard user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Dietitian,
    Assistant,
    Admin,
}

/// A dashboard user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
}
