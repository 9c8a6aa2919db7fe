//! # Domain Module
//!
//! Contains all business logic for the pediatric care schedule backend.
//!
//! This module owns the child age computation, the static growth-visit and
//! vaccine-dose catalogs, and the resolvers that turn (birth date, today,
//! completion map) into the views the app shows. It operates independently of
//! the HTTP layer and of the storage backend.
//!
//! ## Module Organization
//!
//! - **age**: Calendar-based age in completed months from a `YYYY-MM-DD` birth date
//! - **catalog**: Static growth-visit ranges and vaccine doses
//! - **growth_schedule**: Current growth visit and the full visit calendar
//! - **vaccine_schedule**: Due-by-now partition, next-dose hint and dose calendar
//! - **record_store**: Serialized read-modify-write of user documents
//! - **user_service / growth_service / vaccine_service / home_service**: Operations
//!   exposed to the REST layer
//!
//! ## Core Concepts
//!
//! - **Growth visit**: Scheduled check-up tied to an inclusive age range in months
//! - **Vaccine dose**: One administration of a named vaccine at a target age
//! - **Completion map**: Per-child mapping from definition ID to a done flag
//! - **Due by now**: A dose whose target age is at or below the child's age
//!
//! ## Business Rules
//!
//! - Ages are derived on every read and never stored
//! - An absent, malformed or future birth date means the age is unknown; views
//!   degrade to a "register the birth date" message instead of failing
//! - A missing completion entry reads as "not done"
//! - Toggles only flip the single addressed entry and must name a catalog ID

pub mod age;
pub mod catalog;
pub mod clock;
pub mod commands;
pub mod growth_schedule;
pub mod growth_service;
pub mod home_service;
pub mod models;
pub mod record_store;
pub mod user_service;
pub mod vaccine_schedule;
pub mod vaccine_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use growth_service::GrowthService;
pub use home_service::{HomeDashboard, HomeService};
pub use record_store::RecordStore;
pub use user_service::UserService;
pub use vaccine_service::VaccineService;
