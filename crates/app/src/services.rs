//! Use-case services.

pub mod advert_service;
