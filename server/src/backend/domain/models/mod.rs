pub mod growth_visit;
pub mod schedule;
pub mod user_record;
pub mod vaccine_dose;
