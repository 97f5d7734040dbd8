pub mod buckets;
pub mod quota;
pub mod worktime;
