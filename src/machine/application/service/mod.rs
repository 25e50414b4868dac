pub mod action_service;
