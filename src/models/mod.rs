pub mod computed_day;
pub mod day_record;
pub mod month_key;
pub mod shift_code;
pub mod summary;
