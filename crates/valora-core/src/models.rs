pub mod alert;
pub mod category;
pub mod item;
pub mod profile;
pub mod rating;
pub mod subject;
pub mod work_trial;
