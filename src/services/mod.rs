pub mod repository_service;
