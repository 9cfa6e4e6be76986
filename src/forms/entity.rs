//! Forms for entity-centric types: Event, JobPosting, LocalBusiness and Person.

use serde::{Deserialize, Serialize};

use crate::domain::{RowId, RowList, SocialProfiles};

// ============================================================================
// Event
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    pub name: String,
    pub price: String,
    pub valid_from: String,
    pub url: String,
    /// InStock, SoldOut, PreOrder
    pub availability: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub name: String,
    pub image: String,
    pub description: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    /// EventScheduled, EventCancelled, ...
    pub status: String,
    /// OfflineEventAttendanceMode, OnlineEventAttendanceMode, ...
    pub attendance_mode: String,
    pub performer_type: String,
    pub performer_name: String,
    /// Applies to every ticket
    pub currency: String,
    pub tickets: RowList<Ticket, 1>,
}

// ============================================================================
// JobPosting
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostingForm {
    pub title: String,
    pub identifier: String,
    pub description: String,
    pub company: String,
    pub company_url: String,
    pub company_logo: String,
    pub industry: String,
    pub employment_type: String,
    pub work_hours: String,
    pub date_posted: String,
    pub valid_through: String,
    pub remote: bool,
    pub country: String,
    pub region: String,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
    /// HOUR, DAY, WEEK, MONTH, YEAR
    pub salary_period: String,
}

// ============================================================================
// LocalBusiness
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub day: String,
    pub opens: String,
    pub closes: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    /// Blank means `LocalBusiness`
    pub department_type: String,
    pub name: String,
    pub image: String,
    pub phone: String,
    /// Counter scoped to this department
    pub opening_hours: RowList<OpeningHours, 0>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalBusinessForm {
    /// Blank means `LocalBusiness`
    pub business_type: String,
    pub name: String,
    pub image: String,
    pub id: String,
    pub url: String,
    pub phone: String,
    pub price_range: String,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
    pub region: String,
    pub latitude: String,
    pub longitude: String,
    pub open_24_7: bool,
    /// Comma-separated profile URLs
    pub socials: String,
    pub opening_hours: RowList<OpeningHours, 0>,
    pub departments: RowList<Department, 0>,
}

impl LocalBusinessForm {
    /// Add an opening-hours row to one department.
    ///
    /// Returns `None` when the department does not exist.
    pub fn add_department_opening_hour(&mut self, department: RowId) -> Option<RowId> {
        self.departments
            .get_mut(department)
            .map(|dept| dept.opening_hours.add())
    }

    pub fn remove_department_opening_hour(
        &mut self,
        department: RowId,
        hour: RowId,
    ) -> Option<OpeningHours> {
        self.departments
            .get_mut(department)
            .and_then(|dept| dept.opening_hours.remove(hour))
    }
}

// ============================================================================
// Person
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonForm {
    pub name: String,
    pub url: String,
    pub image: String,
    pub job_title: String,
    pub company: String,
    pub social_profiles: SocialProfiles,
}
