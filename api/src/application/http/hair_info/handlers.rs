pub mod get_hair_info;
pub mod get_hair_info_by_mode;
