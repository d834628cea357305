pub mod psychological_assessment;
pub mod work_trial;
