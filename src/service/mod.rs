pub mod picture_service;
