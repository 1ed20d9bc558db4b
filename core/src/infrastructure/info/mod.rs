pub mod file_info_repository;

pub use file_info_repository::FileInfoRepository;
