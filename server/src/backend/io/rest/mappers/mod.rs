pub mod schedule_mapper;
pub mod user_mapper;

pub use schedule_mapper::ScheduleMapper;
pub use user_mapper::UserRecordMapper;
